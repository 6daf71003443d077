//! Application Context
//!
//! Theme, sidebar and navigation-tree state provided via Leptos Context
//! API. All three are provided once in `App`; the `use_*` accessors panic
//! when called outside that tree.

use leptos::prelude::*;

use crate::models::NavNode;
use crate::sidebar::SidebarState;
use crate::theme::{self, BrowserStorage, ThemeState};
use crate::tree;

/// Theme preference shared by the whole page
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState<BrowserStorage>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.state.with(|state| state.is_dark())
    }

    /// Flip, persist and apply to `<html>`
    pub fn toggle_theme(&self) {
        let mut next = None;
        self.state.update(|state| next = Some(state.toggle()));
        if let Some(theme) = next {
            log::debug!("theme switched to {}", theme.as_str());
            theme::apply_to_document(theme);
        }
    }
}

/// Mobile sidebar open/closed flag
#[derive(Clone, Copy)]
pub struct SidebarContext {
    state: RwSignal<SidebarState>,
}

impl SidebarContext {
    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.is_open())
    }

    pub fn toggle(&self) {
        self.state.update(|state| state.toggle());
    }

    pub fn close(&self) {
        self.state.update(|state| state.close());
    }

    fn observe_width(&self, width: f64) {
        // only notify subscribers when the flag actually changes
        let was_open = self.state.with_untracked(|state| state.is_open());
        if was_open {
            self.state.update(|state| state.observe_width(width));
        }
    }
}

/// Navigation tree with its expanded/active flags
#[derive(Clone, Copy)]
pub struct NavTreeContext {
    items: RwSignal<Vec<NavNode>>,
}

impl NavTreeContext {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.items
            .with(|items| tree::find_node(items, id).map_or(false, |node| node.expanded))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.items
            .with(|items| tree::find_node(items, id).map_or(false, |node| node.active))
    }

    pub fn toggle(&self, id: &str) {
        self.items.update(|items| *items = tree::toggle_node(items, id));
    }

    /// Re-derive `active` for a new route, keeping expansion state
    pub fn sync_route(&self, route: &str) {
        self.items.update(|items| *items = tree::mark_active(items, route));
        self.items.with_untracked(|items| match tree::active_id(items) {
            Some(id) => log::debug!("route {} -> active nav entry {}", route, id),
            None => log::debug!("route {} has no nav entry", route),
        });
    }
}

/// Resolve the stored/system theme, apply it and provide `ThemeContext`
pub fn provide_theme_context(storage_key: &str) -> ThemeContext {
    let state = ThemeState::new(BrowserStorage, storage_key, leptos_viewport::prefers_dark_scheme());
    theme::apply_to_document(state.theme());
    log::info!("initial theme: {}", state.theme().as_str());

    let ctx = ThemeContext {
        state: RwSignal::new(state),
    };
    provide_context(ctx);
    ctx
}

/// Provide `SidebarContext` and close the sidebar on wide viewports
pub fn provide_sidebar_context(wide_breakpoint_px: f64) -> SidebarContext {
    let ctx = SidebarContext {
        state: RwSignal::new(SidebarState::new(wide_breakpoint_px)),
    };
    provide_context(ctx);

    let handle = leptos_viewport::on_resize(move |width| ctx.observe_width(width));
    on_cleanup(move || handle.remove());
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeContext provider")
}

pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>().expect("use_sidebar must be used within a SidebarContext provider")
}

pub fn provide_nav_tree(navigation: Vec<NavNode>) -> NavTreeContext {
    let ctx = NavTreeContext {
        items: RwSignal::new(navigation),
    };
    provide_context(ctx);
    ctx
}

pub fn use_nav_tree() -> NavTreeContext {
    use_context::<NavTreeContext>().expect("use_nav_tree must be used within a NavTreeContext provider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    #[should_panic(expected = "use_theme must be used within")]
    fn test_use_theme_without_provider_panics() {
        let owner = Owner::new();
        owner.set();
        use_theme();
    }

    #[test]
    #[should_panic(expected = "use_sidebar must be used within")]
    fn test_use_sidebar_without_provider_panics() {
        let owner = Owner::new();
        owner.set();
        use_sidebar();
    }

    #[test]
    #[should_panic(expected = "use_nav_tree must be used within")]
    fn test_use_nav_tree_without_provider_panics() {
        let owner = Owner::new();
        owner.set();
        use_nav_tree();
    }

    #[test]
    fn test_expansion_survives_route_change() {
        let owner = Owner::new();
        owner.set();

        provide_nav_tree(config::load().navigation);
        let nav = use_nav_tree();
        assert!(!nav.is_expanded("core-concepts"));

        nav.toggle("core-concepts");
        nav.sync_route("/docs/theming");

        assert!(nav.is_expanded("core-concepts"));
        assert!(nav.is_active("theming"));
        assert!(!nav.is_active("core-concepts"));

        nav.sync_route("/docs/getting-started");
        assert!(nav.is_expanded("core-concepts"));
        assert!(!nav.is_active("theming"));
        assert!(nav.is_active("getting-started"));
    }

    #[test]
    fn test_leaf_toggle_through_context_is_ignored() {
        let owner = Owner::new();
        owner.set();

        let nav = provide_nav_tree(config::load().navigation);
        nav.toggle("getting-started");
        assert!(!nav.is_expanded("getting-started"));
    }

    #[test]
    fn test_wide_resize_closes_open_sidebar() {
        let owner = Owner::new();
        owner.set();

        let sidebar = SidebarContext {
            state: RwSignal::new(SidebarState::new(1024.0)),
        };
        provide_context(sidebar);

        let sidebar = use_sidebar();
        sidebar.toggle();
        assert!(sidebar.is_open());

        sidebar.observe_width(800.0);
        assert!(sidebar.is_open());

        sidebar.observe_width(1280.0);
        assert!(!sidebar.is_open());
    }
}
