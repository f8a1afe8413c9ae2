//! Header Component
//!
//! Session status, connect/disconnect and page navigation.

use leptos::prelude::*;

use crate::context::SessionContext;
use crate::format::short_address;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, Page};

#[component]
pub fn Header() -> impl IntoView {
    let session_ctx = expect_context::<SessionContext>();
    let session = session_ctx.session;
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let status_text = move || {
        session.with(|s| match s.user_id() {
            Some(id) => format!("Address: {}", short_address(id)),
            None => "Not connected".to_string(),
        })
    };

    let session_actions = move || {
        let s = session.get();
        if !s.ready {
            view! { <span class="session-pending">"Initializing..."</span> }.into_any()
        } else if !s.connected {
            view! {
                <button class="accent-btn" on:click=move |_| session_ctx.connect()>
                    "Connect Wallet"
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class="ghost-btn" on:click=move |_| session_ctx.disconnect()>
                    "Disconnect"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <header class="app-header">
            <span class="session-status">{status_text}</span>
            <div class="session-actions">{session_actions}</div>
            <nav class="app-nav">
                <button class="ghost-btn" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    "Menu ☰"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="nav-menu">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                let item_class = move || {
                                    if store.page().get() == page { "nav-item active" } else { "nav-item" }
                                };
                                view! {
                                    <button
                                        class=item_class
                                        on:click=move |_| {
                                            store_navigate(&store, page);
                                            set_menu_open.set(false);
                                        }
                                    >
                                        {page.title()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
