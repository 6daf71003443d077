//! Portal Configuration
//!
//! Site metadata and the navigation tree, embedded at build time from
//! `assets/portal.json`.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{NavIcon, NavNode};
use crate::theme::THEME_STORAGE_KEY;
use crate::tree;

const PORTAL_JSON: &str = include_str!("../assets/portal.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid portal config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub version: String,
    #[serde(default = "default_storage_key")]
    pub theme_storage_key: String,
    #[serde(default = "default_breakpoint")]
    pub wide_breakpoint_px: f64,
    #[serde(default)]
    pub navigation: Vec<NavNode>,
}

fn default_title() -> String {
    "Documentation".to_string()
}

fn default_storage_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

fn default_breakpoint() -> f64 {
    leptos_viewport::WIDE_MIN_PX
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: String::new(),
            version: String::new(),
            theme_storage_key: default_storage_key(),
            wide_breakpoint_px: default_breakpoint(),
            navigation: vec![NavNode::leaf("home", "Home", "/").with_icon(NavIcon::Home)],
        }
    }
}

impl PortalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig = serde_json::from_str(json)?;
        let dupes = tree::duplicate_ids(&config.navigation);
        if !dupes.is_empty() {
            log::warn!("navigation ids are not unique: {}", dupes.join(", "));
        }
        Ok(config)
    }
}

/// Embedded config, or the defaults if it does not parse
pub fn load() -> PortalConfig {
    match PortalConfig::from_json(PORTAL_JSON) {
        Ok(config) => {
            log::info!("loaded portal config: {} top-level nav entries", config.navigation.len());
            config
        }
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            PortalConfig::default()
        }
    }
}
