//! Collapsible navigation sidebar.
//!
//! The sidebar switches between an expanded mode, where every navigation
//! item shows its icon and label, and a collapsed icon rail. The content
//! area next to it is always offset by the sidebar's current width.
//!
//! Two toggles are provided. [`toggle_by_width`] infers the current mode
//! from the sidebar's rendered width and rebuilds item markup from the
//! elements themselves. [`SidebarToggle`] keeps the mode and the items as
//! explicit state and only writes to the elements.

mod dom;
mod errors;
mod item;
mod memory;
mod metrics;
mod mode;
pub mod settings;
mod toggle;
#[cfg(feature = "web")]
pub mod web;

pub use dom::{
    ContentElement, LABEL_DATA_KEY, MAIN_CONTENT_ID, NAV_ITEM_CLASS,
    NavItemElement, SIDEBAR_ID, SidebarElement, SidebarTargets,
};
pub use errors::{SettingsError, ToggleError};
pub use item::{NavItem, NavItemView};
pub use memory::{MemoryContent, MemoryDocument, MemoryNavItem, MemorySidebar};
pub use metrics::{
    DEFAULT_COLLAPSED_WIDTH, DEFAULT_EXPANDED_WIDTH, SidebarLayout,
    SidebarMetrics,
};
pub use mode::SidebarMode;
pub use toggle::{SidebarToggle, toggle_by_width};
