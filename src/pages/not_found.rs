use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{MainLayout, SidebarNav};

/// "Not found" block, shown inside whatever layout the route uses
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to home"</A>
        </div>
    }
}

/// Fallback for unknown routes
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <MainLayout
            sidebar=|| view! { <SidebarNav /> }
            header=|| view! { <h1 class="header-title">"Documentation"</h1> }
        >
            <div class="page-body">
                <NotFound />
            </div>
        </MainLayout>
    }
}
