//! Sidebar Component
//!
//! Off-canvas panel on small screens, static column on wide ones.

use leptos::prelude::*;

use crate::context::use_sidebar;

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        // Mobile overlay
        <Show when=move || sidebar.is_open()>
            <div class="sidebar-overlay" on:click=move |_| sidebar.close()></div>
        </Show>

        <aside class="sidebar" class:open=move || sidebar.is_open()>
            <div class="sidebar-close-row">
                <button
                    class="icon-btn"
                    aria-label="Close navigation"
                    on:click=move |_| sidebar.close()
                >
                    "✕"
                </button>
            </div>
            <div class="sidebar-content">{children()}</div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    const STYLES: &str = include_str!("../../styles.css");

    fn wide_block() -> &'static str {
        let start = STYLES
            .find("@media (min-width: 1024px)")
            .expect("wide breakpoint block");
        &STYLES[start..]
    }

    #[test]
    fn test_sidebar_is_off_canvas_until_open() {
        assert!(STYLES.contains("transform: translateX(-100%)"));
        assert!(STYLES.contains(".sidebar.open"));
        assert!(STYLES.contains(".sidebar-overlay"));
    }

    #[test]
    fn test_wide_viewport_hides_mobile_controls() {
        let wide = wide_block();
        assert!(wide.contains(".menu-btn"));
        assert!(wide.contains(".sidebar-overlay"));
        assert!(wide.contains("display: none"));
        assert!(wide.contains("transform: none"));
    }

    #[test]
    fn test_breakpoint_matches_sidebar_state() {
        let px = leptos_viewport::WIDE_MIN_PX as u32;
        assert!(STYLES.contains(&format!("@media (min-width: {}px)", px)));
    }
}
