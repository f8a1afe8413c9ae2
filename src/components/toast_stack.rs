//! Toast Stack Component
//!
//! Renders the notices held in the app store.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let notice = toast.notice;
                    view! {
                        <div class=notice.level.css_class()>
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                {notice.description.map(|d| view! { <div class="toast-description">{d}</div> })}
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
