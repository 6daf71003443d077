//! Theme Preference
//!
//! Light/dark preference resolved from storage and the system setting,
//! persisted on every change.

/// Default storage key for the persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Pick the initial theme.
///
/// Any stored value wins over the system preference; only `"dark"` means
/// dark, so an unrecognized stored value resolves to light.
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(value) if value == Theme::Dark.as_str() => Theme::Dark,
        Some(_) => Theme::Light,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Key-value store for the preference. Write failures are ignored.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Current theme plus where it is persisted
#[derive(Debug, Clone)]
pub struct ThemeState<S> {
    theme: Theme,
    key: String,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the initial theme and write it back to the store
    pub fn new(store: S, key: &str, system_prefers_dark: bool) -> Self {
        let stored = store.get(key);
        let theme = resolve_theme(stored.as_deref(), system_prefers_dark);
        store.set(key, theme.as_str());
        Self {
            theme,
            key: key.to_string(),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip and persist; returns the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_str());
        self.theme
    }
}

/// Set or clear the `dark` class on `<html>`
pub fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}
