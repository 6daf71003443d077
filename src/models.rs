//! Frontend Models
//!
//! Navigation data structures shared by the config loader and the sidebar.

use serde::{Deserialize, Serialize};

/// Icons available to top-level navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Home,
    BookOpen,
    Layers,
    Code,
    FileText,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::BookOpen => "📖",
            NavIcon::Layers => "🗂",
            NavIcon::Code => "⌨",
            NavIcon::FileText => "📄",
        }
    }
}

/// One entry in the navigation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavNode {
    /// Unique across the whole tree
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
    #[serde(default)]
    pub expanded: bool,
    /// Derived from the current route, never read from config
    #[serde(skip)]
    pub active: bool,
}

impl NavNode {
    pub fn leaf(id: &str, title: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            href: Some(href.to_string()),
            icon: None,
            children: Vec::new(),
            expanded: false,
            active: false,
        }
    }

    #[cfg(test)]
    pub fn group(id: &str, title: &str, children: Vec<NavNode>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            href: None,
            icon: None,
            children,
            expanded: false,
            active: false,
        }
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
