//! Leptos Swipe Utilities
//!
//! Simple swipe detection for Leptos using pointer events (mouse and touch).
//! Uses a movement threshold to distinguish a tap from a swipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Dominant direction of a completed swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Movement threshold in pixels before a release counts as a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 10;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Pointer position at press time (None = no press in progress)
    pub start_read: ReadSignal<Option<(i32, i32)>>,
    pub start_write: WriteSignal<Option<(i32, i32)>>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (start_read, start_write) = signal(None::<(i32, i32)>);
    SwipeSignals { start_read, start_write }
}

/// Classify a pointer movement.
///
/// Returns `None` while both axes stay within `threshold`. Screen coordinates
/// grow downwards, so a negative `dy` is an upward swipe. Ties go to the
/// vertical axis.
pub fn classify(dx: i32, dy: i32, threshold: i32) -> Option<SwipeDirection> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax <= threshold && ay <= threshold {
        return None;
    }
    if ay >= ax {
        Some(if dy < 0 { SwipeDirection::Up } else { SwipeDirection::Down })
    } else {
        Some(if dx < 0 { SwipeDirection::Left } else { SwipeDirection::Right })
    }
}

/// Create pointerdown handler for the swipe surface
/// Records the press position unless it started on a control
pub fn make_on_pointerdown(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        // Presses on buttons and inputs belong to the control, not the surface
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        sw.start_write.set(Some((ev.client_x(), ev.client_y())));
    }
}

/// Create pointerup handler that reports recognized swipes to `on_swipe`
pub fn make_on_pointerup<F>(sw: SwipeSignals, on_swipe: F) -> impl Fn(web_sys::PointerEvent) + Clone + 'static
where
    F: Fn(SwipeDirection) + Clone + 'static,
{
    move |ev: web_sys::PointerEvent| {
        let Some((start_x, start_y)) = sw.start_read.get_untracked() else {
            return;
        };
        sw.start_write.set(None);

        let dx = ev.client_x() - start_x;
        let dy = ev.client_y() - start_y;
        if let Some(direction) = classify(dx, dy, SWIPE_THRESHOLD_PX) {
            on_swipe(direction);
        }
    }
}

/// Create pointercancel / pointerleave handler
pub fn make_on_pointercancel(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if sw.start_read.get_untracked().is_some() {
            sw.start_write.set(None);
        }
    }
}
