//! Overview Page Component
//!
//! Lists the datasets owned by the connected user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DatasetCard, LoadingPanel};
use crate::context::{AppContext, SessionContext};
use crate::models::Dataset;
use crate::notice::Notice;
use crate::store::{store_navigate, store_push_notice, use_app_store, Page};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let session = expect_context::<SessionContext>().session;
    let store = use_app_store();
    let api = StoredValue::new(app.api.clone());

    let (datasets, set_datasets) = signal(Vec::<Dataset>::new());
    let (loading, set_loading) = signal(true);

    let load = move |user_id: String| {
        set_loading.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.datasets_for_user(&user_id).await {
                Ok(loaded) => {
                    log::info!("[OVERVIEW] loaded {} datasets", loaded.len());
                    set_datasets.set(loaded);
                }
                Err(e) => {
                    log::error!("[OVERVIEW] error fetching datasets: {}", e);
                    store_push_notice(
                        &store,
                        Notice::error("Error", "Failed to fetch your datasets. Please try again later.").long(),
                    );
                }
            }
            set_loading.set(false);
        });
    };

    // Load once the provider is ready; bounce back to the feed when signed out
    Effect::new(move |_| {
        let s = session.get();
        if !s.ready {
            return;
        }
        match s.user_id() {
            Some(id) => load(id.to_string()),
            None => {
                store_push_notice(
                    &store,
                    Notice::error("Error", "You need to be connected to view your overview.").long(),
                );
                store_navigate(&store, Page::Feed);
            }
        }
    });

    let end_labelling = Callback::new(move |dataset_id: String| {
        let api = api.get_value();
        log::info!("[OVERVIEW] ending labeling for {}", dataset_id);
        spawn_local(async move {
            match api.end_labelling(&dataset_id).await {
                Ok(()) => store_push_notice(&store, Notice::success("Labeling ended").long()),
                Err(e) => {
                    log::error!("[OVERVIEW] error ending labeling for {}: {}", dataset_id, e);
                    store_push_notice(
                        &store,
                        Notice::error("Error", "Failed to end labeling process. Please try again later.").long(),
                    );
                }
            }
        });
    });

    view! {
        {move || {
            let s = session.get();
            if !s.ready || !s.connected {
                view! {
                    <div class="page-message">"Please connect your wallet to view your datasets."</div>
                }
                .into_any()
            } else if loading.get() {
                view! {
                    <LoadingPanel
                        title="Loading Your Datasets"
                        subtitle="We're retrieving your uploaded datasets. This won't take long!"
                    />
                }
                .into_any()
            } else {
                view! {
                    <div class="overview">
                        <h1 class="page-title">"🗄️ My Datasets"</h1>
                        <Show
                            when=move || !datasets.with(|d| d.is_empty())
                            fallback=|| view! {
                                <p class="page-message">
                                    "You haven't uploaded any datasets yet. Start by adding your first dataset!"
                                </p>
                            }
                        >
                            <div class="dataset-grid">
                                <For
                                    each=move || datasets.get()
                                    key=|d| d.dataset_id.clone()
                                    children=move |dataset| view! { <DatasetCard dataset=dataset on_end=end_labelling /> }
                                />
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
