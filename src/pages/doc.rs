//! Documentation Page
//!
//! `/docs/:slug`: loads the slug through the content loader and renders
//! the content, or a not-found block if loading fails.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::NotFound;
use crate::components::{MainLayout, SidebarNav};
use crate::content::{resolve_page, PageOutcome, PlaceholderLoader};

/// Docs section shell
#[component]
pub fn DocsLayout(children: Children) -> impl IntoView {
    view! {
        <MainLayout
            sidebar=|| view! { <SidebarNav /> }
            header=|| view! { <h1 class="header-title">"Documentation"</h1> }
        >
            <div class="page-body">{children()}</div>
        </MainLayout>
    }
}

#[component]
pub fn DocPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let (outcome, set_outcome) = signal(None::<PageOutcome>);

    // Load content whenever the slug changes
    Effect::new(move |_| {
        let requested = slug();
        set_outcome.set(None);
        spawn_local(async move {
            let loaded = resolve_page(&PlaceholderLoader, &requested).await;
            // Drop results for a slug we already navigated away from
            let current = params.read_untracked().get("slug").unwrap_or_default();
            if current == requested {
                set_outcome.set(Some(loaded));
            }
        });
    });

    view! {
        <DocsLayout>
            {move || match outcome.get() {
                None => view! { <p class="doc-loading">"Loading..."</p> }.into_any(),
                Some(PageOutcome::Found(doc)) => {
                    view! {
                        <article class="doc-page" data-slug=doc.slug>
                            <h1>{doc.title}</h1>
                            <p>{doc.body}</p>
                        </article>
                    }
                        .into_any()
                }
                Some(PageOutcome::NotFound) => view! { <NotFound /> }.into_any(),
            }}
        </DocsLayout>
    }
}
