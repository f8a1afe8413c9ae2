//! Loading Panel Component
//!
//! Centered spinner with a headline, shown while a page waits for data.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="loading-panel">
            <div class="loading-icon">"🏷️"</div>
            <div class="spinner"></div>
            <p class="loading-title">{title}</p>
            <p class="loading-subtitle">{subtitle}</p>
        </div>
    }
}
