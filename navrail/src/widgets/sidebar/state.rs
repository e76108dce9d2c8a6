use navrail_core::{NavItemView, SidebarLayout, SidebarMode, SidebarToggle};

/// Internal runtime state for sidebar mode and selection.
#[derive(Debug)]
pub(super) struct SidebarState {
    toggle: SidebarToggle,
    active_item: Option<usize>,
}

impl SidebarState {
    pub(super) fn new(toggle: SidebarToggle) -> Self {
        let active_item = (!toggle.items().is_empty()).then_some(0);
        Self {
            toggle,
            active_item,
        }
    }

    pub(super) fn mode(&self) -> SidebarMode {
        self.toggle.mode()
    }

    pub(super) fn layout(&self) -> SidebarLayout {
        self.toggle.layout()
    }

    pub(super) fn item_views(&self) -> Vec<NavItemView<'_>> {
        self.toggle.views().collect()
    }

    pub(super) fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    pub(super) fn active_label(&self) -> Option<&str> {
        self.active_item
            .and_then(|index| self.toggle.items().get(index))
            .map(|item| item.label())
    }

    pub(super) fn toggle_mode(&mut self) -> SidebarLayout {
        self.toggle.toggle()
    }

    /// Select an item by index. Returns `false` when the index is out of
    /// range or already active.
    pub(super) fn select(&mut self, index: usize) -> bool {
        if index >= self.toggle.items().len() || self.active_item == Some(index)
        {
            return false;
        }

        self.active_item = Some(index);
        true
    }
}
