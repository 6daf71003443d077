//! Sidebar State
//!
//! Open/closed flag for the mobile sidebar. Not persisted.

use leptos_viewport::WIDE_MIN_PX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    open: bool,
    /// Widths at or above this force the sidebar closed
    wide_breakpoint_px: f64,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(WIDE_MIN_PX)
    }
}

impl SidebarState {
    pub fn new(wide_breakpoint_px: f64) -> Self {
        Self {
            open: false,
            wide_breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Viewport width report. Wide viewports always close the sidebar.
    pub fn observe_width(&mut self, width: f64) {
        if width >= self.wide_breakpoint_px {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!SidebarState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut state = SidebarState::default();
        state.close();
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = SidebarState::default();
        state.toggle();
        assert!(state.is_open());
        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_wide_viewport_always_closes() {
        for width in [1024.0, 1280.0, 2560.0] {
            let mut open = SidebarState::default();
            open.toggle();
            open.observe_width(width);
            assert!(!open.is_open(), "open at {}", width);

            let mut closed = SidebarState::default();
            closed.observe_width(width);
            assert!(!closed.is_open(), "closed at {}", width);
        }
    }

    #[test]
    fn test_narrow_viewport_keeps_state() {
        let mut state = SidebarState::default();
        state.toggle();
        state.observe_width(1023.0);
        assert!(state.is_open());
        state.observe_width(375.0);
        assert!(state.is_open());
    }

    #[test]
    fn test_custom_breakpoint() {
        let mut state = SidebarState::new(800.0);
        state.toggle();
        state.observe_width(900.0);
        assert!(!state.is_open());
    }
}
