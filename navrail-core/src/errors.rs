use thiserror::Error;

/// Errors returned by sidebar toggle operations.
///
/// A toggle resolves every element it needs before writing anything, so an
/// error always means the document was left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    /// An element looked up by id is not present in the document.
    #[error("element #{id} is missing")]
    MissingElement { id: String },
    /// A navigation item has no icon child element.
    #[error("navigation item {index} has no icon element")]
    MissingIcon { index: usize },
    /// A navigation item has no label attribute.
    #[error("navigation item {index} has no label")]
    MissingLabel { index: usize },
    /// The document holds a different number of items than the toggle.
    #[error("expected {expected} navigation items, found {found}")]
    ItemCountMismatch { expected: usize, found: usize },
    /// The navigation item lookup itself failed.
    #[error("navigation item query failed: {reason}")]
    ItemQuery { reason: String },
    /// A navigation item is not an HTML element.
    #[error("navigation item {index} is not an HTML element")]
    UnsupportedItem { index: usize },
}

/// Errors emitted while reading, writing, or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Filesystem operation failed.
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
