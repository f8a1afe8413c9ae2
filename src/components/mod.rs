//! UI Components
//!
//! Pages and reusable Leptos components.

mod header;
mod feed_page;
mod feed_card;
mod overview_page;
mod dataset_card;
mod publish_page;
mod toast_stack;
mod loading_panel;

pub use header::Header;
pub use feed_page::FeedPage;
pub use feed_card::FeedCard;
pub use overview_page::OverviewPage;
pub use dataset_card::DatasetCard;
pub use publish_page::PublishPage;
pub use toast_stack::ToastStack;
pub use loading_panel::LoadingPanel;
