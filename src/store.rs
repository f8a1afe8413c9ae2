//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::notice::{Notice, Toast};

/// Top-level screens reachable from the header menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Feed,
    Overview,
    Publish,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Feed, Page::Overview, Page::Publish];

    pub fn title(self) -> &'static str {
        match self {
            Page::Feed => "Feed",
            Page::Overview => "Overview",
            Page::Publish => "Publish",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen currently shown
    pub page: Page,
    /// Notices currently on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &AppStore, page: Page) {
    if store.page().get_untracked() != page {
        log::debug!("[APP] navigate to {}", page.title());
        store.page().set(page);
    }
}

/// Hand out the next toast id
fn store_next_toast_id(store: &AppStore) -> u64 {
    let field = store.last_toast_id();
    let mut last = field.write();
    *last += 1;
    *last
}

/// Show a notice and schedule its dismissal
pub fn store_push_notice(store: &AppStore, notice: Notice) {
    let id = store_next_toast_id(store);
    let duration = notice.duration;
    store.toasts().write().push(Toast { id, notice });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(duration.as_millis() as u32).await;
        store_dismiss_toast(&store, id);
    });
}

pub fn store_dismiss_toast(store: &AppStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}
