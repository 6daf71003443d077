//! Sidebar Navigation
//!
//! Brand block, the navigation tree and a version footer. Keeps the
//! tree's active entry in sync with the router location.

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{LogPanel, NavigationItem};
use crate::config::PortalConfig;
use crate::context::use_nav_tree;

#[component]
pub fn SidebarNav() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let nav = use_nav_tree();
    let location = use_location();
    let nav_ref = NodeRef::<html::Nav>::new();

    // Mark the active entry before the first render so it can be scrolled to
    nav.sync_route(&location.pathname.get_untracked());

    Effect::new(move |_| {
        let path = location.pathname.get();
        nav.sync_route(&path);
    });

    // Bring the active entry into view once mounted
    Effect::new(move |_| {
        if let Some(nav_el) = nav_ref.get() {
            if let Ok(Some(active)) = nav_el.query_selector("[aria-current=\"page\"]") {
                leptos_viewport::scroll_into_view_smooth(&active);
            }
        }
    });

    let rows = config
        .navigation
        .iter()
        .cloned()
        .map(|node| view! { <NavigationItem node=node level=0 /> })
        .collect_view();

    view! {
        <nav
            node_ref=nav_ref
            class="sidebar-nav"
            role="navigation"
            aria-label="Documentation navigation"
        >
            <div class="sidebar-brand">
                <h2>{config.title.clone()}</h2>
                <p class="sidebar-subtitle">{config.subtitle.clone()}</p>
            </div>

            <div class="sidebar-nav-scroll">
                <ul class="nav-list" role="list">{rows}</ul>
            </div>

            <div class="sidebar-footer">
                <p class="sidebar-version">{config.version.clone()}</p>
                <LogPanel />
            </div>
        </nav>
    }
}
