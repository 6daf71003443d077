//! Docs Portal App
//!
//! Root component: loads the portal config, provides the shared state
//! contexts and sets up routing.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config;
use crate::context::{provide_nav_tree, provide_sidebar_context, provide_theme_context};
use crate::pages::{DocPage, HomePage, NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    // Provide context to all children
    provide_theme_context(&config.theme_storage_key);
    provide_sidebar_context(config.wide_breakpoint_px);
    provide_nav_tree(config.navigation.clone());
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs/:slug") view=DocPage />
            </Routes>
        </Router>
    }
}
