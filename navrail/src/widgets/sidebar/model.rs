use navrail_core::{NavItemView, SidebarMode};

/// Read-only sidebar view model for rendering.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) mode: SidebarMode,
    pub(crate) width: f32,
    pub(crate) items: Vec<NavItemView<'a>>,
    pub(crate) active_item: Option<usize>,
}
