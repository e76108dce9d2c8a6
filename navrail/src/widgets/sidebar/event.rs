use navrail_core::SidebarMode;

/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarIntent {
    ToggleMode,
    SelectItem(usize),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarEffect {
    /// The content area must be offset by the new sidebar width.
    ContentOffsetChanged { offset: f32 },
    ActiveItemChanged { label: String },
    /// The mode changed and should be written to settings.
    PersistMode(SidebarMode),
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
