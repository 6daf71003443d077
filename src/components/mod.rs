//! UI Components
//!
//! Page shell and navigation components.

mod header;
mod log_panel;
mod main_layout;
mod nav_item;
mod sidebar_nav;
mod sidebar_panel;

pub use header::Header;
pub use log_panel::LogPanel;
pub use main_layout::{MainContent, MainLayout};
pub use nav_item::NavigationItem;
pub use sidebar_nav::SidebarNav;
pub use sidebar_panel::Sidebar;
