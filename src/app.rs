//! Lablr Frontend App
//!
//! Root component: provides context and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{FeedPage, Header, OverviewPage, PublishPage, ToastStack};
use crate::config::AppConfig;
use crate::context::{AppContext, SessionContext};
use crate::identity::Session;
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let session = SessionContext::new(signal(Session::default()));

    // Provide context to all children
    provide_context(store);
    provide_context(session);
    let api = ApiClient::new(&config.api_base);
    log::info!("[APP] backend at {}", api.base());
    provide_context(AppContext::new(api, config.feed.clone()));

    session.init();

    view! {
        <div class="app-layout">
            <Header />

            <main class="main-content">
                {move || match store.page().get() {
                    Page::Feed => view! { <FeedPage /> }.into_any(),
                    Page::Overview => view! { <OverviewPage /> }.into_any(),
                    Page::Publish => view! { <PublishPage /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
