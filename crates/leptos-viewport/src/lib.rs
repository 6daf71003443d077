//! Leptos Viewport Utilities
//!
//! Small helpers around the browser window for Leptos apps:
//! resize observation, color-scheme queries and smooth scrolling.

use leptos::ev;
use leptos::prelude::*;

/// Widths at or above this are desktops
pub const WIDE_MIN_PX: f64 = 1024.0;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Current `window.innerWidth`, if there is a window
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Whether the OS/browser reports a dark color-scheme preference
pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Bind a window `resize` listener that receives the new inner width.
///
/// Call `.remove()` on the returned handle (usually from `on_cleanup`)
/// to unbind it.
pub fn on_resize<F>(on_width: F) -> WindowListenerHandle
where
    F: Fn(f64) + 'static,
{
    window_event_listener(ev::resize, move |_| {
        if let Some(width) = window_width() {
            on_width(width);
        }
    })
}

/// Scroll an element into view with smooth behavior, centered vertically
pub fn scroll_into_view_smooth(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
