//! Header Component
//!
//! Sticky top bar: sidebar menu button on the left, theme toggle on the right.

use leptos::prelude::*;

use crate::context::{use_sidebar, use_theme};

#[component]
pub fn Header(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();
    let theme = use_theme();

    view! {
        <header class="portal-header">
            <div class="header-left">
                // Only visible below the wide breakpoint
                <button
                    class="icon-btn menu-btn"
                    aria-label="Toggle navigation"
                    on:click=move |_| sidebar.toggle()
                >
                    "☰"
                </button>
                {children()}
            </div>

            <button
                class="icon-btn theme-btn"
                title="Toggle theme"
                aria-label=move || if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
                on:click=move |_| theme.toggle_theme()
            >
                {move || if theme.is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
