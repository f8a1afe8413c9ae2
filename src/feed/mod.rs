//! Feed
//!
//! Buffered, swipe-navigated stream of items to label.

mod buffer;
mod controller;
mod driver;
mod transition;

pub use buffer::FeedBuffer;
pub use controller::{FeedController, FeedEffect, FeedPhase};
pub use driver::{FeedDriver, SessionFeed};
pub use transition::{DeferredTransition, Direction, PendingTransition};
