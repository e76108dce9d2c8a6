/// Intent events handled by the content area.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ContentIntent {
    /// Offset the content by the sidebar width.
    SetOffset(f32),
    ShowItem(String),
}
