//! Navigation Item Interaction
//!
//! Maps clicks and key presses on a navigation entry to what should happen.

/// What activating a navigation entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Flip the entry's expanded flag
    Toggle,
    /// Route to the entry's target
    Navigate,
}

/// How an entry renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Expand/collapse control for a group
    Toggle,
    /// Link to the entry's target
    Link,
    /// Plain text: a leaf with nowhere to go
    Label,
}

pub fn row_kind(has_children: bool, has_href: bool) -> RowKind {
    if has_children {
        RowKind::Toggle
    } else if has_href {
        RowKind::Link
    } else {
        RowKind::Label
    }
}

/// Click (or Enter/Space) on an entry.
/// Groups toggle, leaves with a target navigate.
pub fn activation(has_children: bool, has_href: bool) -> Option<NavAction> {
    if has_children {
        Some(NavAction::Toggle)
    } else if has_href {
        Some(NavAction::Navigate)
    } else {
        None
    }
}

/// Key press on an entry.
///
/// Returns the action plus whether the browser default must be
/// suppressed (Enter and Space only).
pub fn key_action(
    key: &str,
    has_children: bool,
    has_href: bool,
    expanded: bool,
) -> Option<(NavAction, bool)> {
    match key {
        "Enter" | " " => activation(has_children, has_href).map(|action| (action, true)),
        "ArrowRight" if has_children && !expanded => Some((NavAction::Toggle, false)),
        "ArrowLeft" if has_children && expanded => Some((NavAction::Toggle, false)),
        _ => None,
    }
}
