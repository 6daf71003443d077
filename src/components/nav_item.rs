//! Navigation Item Component
//!
//! One entry of the sidebar tree, rendered recursively. The tree's shape
//! is fixed at mount; expanded/active flags are read from `NavTreeContext`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::context::{use_nav_tree, use_sidebar};
use crate::interaction::{activation, key_action, row_kind, NavAction, RowKind};
use crate::models::NavNode;

/// Upper bound for the collapse transition
const EXPANDED_MAX_HEIGHT: &str = "24rem";
const COLLAPSE_TRANSITION: &str = "max-height 300ms ease-in-out, opacity 300ms ease-in-out";

/// `(max-height, opacity)` of a child list
fn collapse_style(expanded: bool) -> (&'static str, &'static str) {
    if expanded {
        (EXPANDED_MAX_HEIGHT, "1")
    } else {
        ("0px", "0")
    }
}

#[component]
pub fn NavigationItem(node: NavNode, level: usize) -> AnyView {
    let nav = use_nav_tree();
    let sidebar = use_sidebar();
    let navigate = use_navigate();

    let has_children = node.has_children();
    let has_href = node.href.is_some();
    // Only top-level entries show icons
    let icon = if level == 0 { node.icon } else { None };

    let is_expanded = Memo::new({
        let id = node.id.clone();
        move |_| nav.is_expanded(&id)
    });
    let is_active = Memo::new({
        let id = node.id.clone();
        move |_| nav.is_active(&id)
    });

    let dispatch = {
        let id = node.id.clone();
        let href = node.href.clone();
        move |action: NavAction| match action {
            NavAction::Toggle => nav.toggle(&id),
            NavAction::Navigate => {
                if let Some(href) = &href {
                    navigate(href, Default::default());
                    // a new page starts with the mobile sidebar closed
                    sidebar.close();
                }
            }
        }
    };

    let on_click = {
        let dispatch = dispatch.clone();
        move |ev: MouseEvent| {
            if let Some(action) = activation(has_children, has_href) {
                ev.prevent_default();
                dispatch(action);
            }
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if let Some((action, suppress_default)) =
            key_action(&ev.key(), has_children, has_href, is_expanded.get_untracked())
        {
            if suppress_default {
                ev.prevent_default();
            }
            dispatch(action);
        }
    };

    let row_class = format!("nav-row level-{}", level.min(2));
    let icon_view = icon.map(|icon| {
        view! { <span class="nav-icon" aria-hidden="true">{icon.glyph()}</span> }
    });

    let control = match row_kind(has_children, has_href) {
        RowKind::Toggle => view! {
            <div
                role="button"
                tabindex="0"
                class=row_class
                class:active=move || is_active.get()
                aria-expanded=move || is_expanded.get().to_string()
                aria-haspopup="true"
                aria-current=move || is_active.get().then_some("page")
                on:click=on_click
                on:keydown=on_keydown
            >
                {icon_view}
                <span class="nav-title">{node.title.clone()}</span>
                <span class="nav-chevron" aria-hidden="true">
                    {move || if is_expanded.get() { "▾" } else { "▸" }}
                </span>
            </div>
        }
        .into_any(),
        RowKind::Link => view! {
            <a
                href=node.href.clone().unwrap_or_default()
                class=row_class
                class:active=move || is_active.get()
                aria-current=move || is_active.get().then_some("page")
                on:click=on_click
                on:keydown=on_keydown
            >
                {icon_view}
                <span class="nav-title">{node.title.clone()}</span>
            </a>
        }
        .into_any(),
        RowKind::Label => view! {
            <span class=row_class>
                {icon_view}
                <span class="nav-title">{node.title.clone()}</span>
            </span>
        }
        .into_any(),
    };

    // Children stay mounted while collapsed; only the height animates
    let children = has_children.then(|| {
        let list_class = if level == 0 { "nav-children-list top" } else { "nav-children-list" };
        let rows = node
            .children
            .into_iter()
            .map(|child| view! { <NavigationItem node=child level={level + 1} /> })
            .collect_view();

        view! {
            <div
                class="nav-children"
                class:expanded=move || is_expanded.get()
                style:overflow="hidden"
                style:transition=COLLAPSE_TRANSITION
                style:max-height=move || collapse_style(is_expanded.get()).0
                style:opacity=move || collapse_style(is_expanded.get()).1
                aria-hidden=move || (!is_expanded.get()).to_string()
            >
                <ul class=list_class role="group">{rows}</ul>
            </div>
        }
    });

    view! {
        <li class="nav-entry">
            {control}
            {children}
        </li>
    }
    .into_any()
}
