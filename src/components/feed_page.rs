//! Feed Page Component
//!
//! Swipe up for the next item, swipe down for the previous one, tap a label
//! to submit it. Only the cards around the cursor are mounted.

use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, make_on_pointercancel, make_on_pointerdown, make_on_pointerup, SwipeDirection,
};

use crate::components::{FeedCard, LoadingPanel};
use crate::context::{AppContext, SessionContext};
use crate::feed::{FeedDriver, FeedPhase};
use crate::store::use_app_store;

/// Cards mounted on each side of the cursor
const WINDOW_RADIUS: usize = 1;

#[component]
pub fn FeedPage() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let session = expect_context::<SessionContext>();
    let store = use_app_store();

    let driver = FeedDriver::new(app.feed.clone(), session, app.api.clone(), store);
    let controller = driver.controller();

    driver.dispatch(|c| c.start());
    on_cleanup(move || {
        driver.dispatch(|c| {
            c.teardown();
            Vec::new()
        })
    });

    // Gestures
    let swipe = create_swipe_signals();
    let on_pointerdown = make_on_pointerdown(swipe);
    let on_pointerup = make_on_pointerup(swipe, move |direction| match direction {
        SwipeDirection::Up => driver.dispatch(|c| c.advance()),
        SwipeDirection::Down => driver.dispatch(|c| c.retreat()),
        SwipeDirection::Left | SwipeDirection::Right => {}
    });
    let on_pointercancel = make_on_pointercancel(swipe);

    let empty = Memo::new(move |_| controller.with(|c| c.buffer().is_empty()));
    let phase = Memo::new(move |_| controller.with(|c| c.phase()));
    let at_end = Memo::new(move |_| {
        controller.with(|c| c.phase() == FeedPhase::Exhausted && c.cursor() == c.buffer().last_index())
    });
    let cards = move || controller.with(|c| c.window(WINDOW_RADIUS));

    let retry = move |_| driver.dispatch(|c| c.retry());

    let fallback = move || match phase.get() {
        FeedPhase::Exhausted => view! {
            <div class="feed-end">
                <p class="loading-title">"Nothing to label right now"</p>
                <button class="accent-btn" on:click=retry>"Try again"</button>
            </div>
        }
        .into_any(),
        FeedPhase::Failed => view! {
            <div class="feed-end">
                <p class="loading-title">"Couldn't load the feed"</p>
                <button class="accent-btn" on:click=retry>"Try again"</button>
            </div>
        }
        .into_any(),
        _ => {
            view! {
                <LoadingPanel
                    title="Loading Feed"
                    subtitle="We're gathering the latest posts for you. This won't take long!"
                />
            }
            .into_any()
        }
    };

    view! {
        <div
            class="feed-surface"
            on:pointerdown=on_pointerdown
            on:pointerup=on_pointerup
            on:pointercancel=on_pointercancel
            on:pointerleave=on_pointercancel
        >
            <Show when=move || !empty.get() fallback=fallback>
                <For
                    each=cards
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, item)| view! { <FeedCard index=index item=item driver=driver /> }
                />
                <Show when=move || at_end.get()>
                    <div class="feed-end-banner">
                        <span>"You've reached the end of the feed."</span>
                        <button class="accent-btn" on:click=retry>"Try again"</button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
