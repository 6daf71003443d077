//! Main Layout
//!
//! Page shell: optional sidebar slot, optional header slot, scrolling content.

use leptos::prelude::*;

use super::{Header, Sidebar};

#[component]
pub fn MainContent(children: Children) -> impl IntoView {
    view! {
        <main class="portal-main">
            <div class="portal-main-scroll">{children()}</div>
        </main>
    }
}

#[component]
pub fn MainLayout(
    #[prop(optional, into)] sidebar: Option<ViewFn>,
    #[prop(optional, into)] header: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="portal-shell">
            {sidebar.map(|sidebar| view! { <Sidebar>{sidebar.run()}</Sidebar> })}

            <div class="portal-main-area">
                {header.map(|header| view! { <Header>{header.run()}</Header> })}
                <MainContent>{children()}</MainContent>
            </div>
        </div>
    }
}
