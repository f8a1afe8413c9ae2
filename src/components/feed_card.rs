//! Feed Card Component
//!
//! One full-screen item: blurred backdrop, the image and its label buttons.

use leptos::prelude::*;

use crate::feed::FeedDriver;
use crate::models::FeedItem;

#[component]
pub fn FeedCard(
    index: usize,
    item: FeedItem,
    driver: FeedDriver,
) -> impl IntoView {
    let controller = driver.controller();

    // Cards slide by whole screens relative to the cursor
    let transform = move || {
        let offset = controller.with(|c| c.view_offset(index));
        format!("translateY({}%)", offset * 100)
    };
    let busy = move || controller.with(|c| c.submitting_index() == Some(index));

    let src = item.image_src();
    let backdrop = format!("url({})", src);

    let labels = if item.label_choices.is_empty() {
        view! { <span class="no-labels">"No labels available"</span> }.into_any()
    } else {
        item.label_choices
            .into_iter()
            .map(|label| {
                let chosen = label.clone();
                view! {
                    <button
                        class="label-btn"
                        disabled=busy
                        on:click=move |_| {
                            let chosen = chosen.clone();
                            driver.dispatch(move |c| c.submit_label(index, &chosen));
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="feed-card" style:transform=transform>
            <div class="feed-card-backdrop" style:background-image=backdrop></div>
            <div class="feed-card-image">
                <img src=src alt=format!("Feed item {}", index) />
            </div>
            <div class="feed-card-labels">{labels}</div>
        </div>
    }
}
