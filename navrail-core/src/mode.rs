use serde::{Deserialize, Serialize};

use crate::metrics::SidebarMetrics;

/// Layout mode of the navigation sidebar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    /// Full width, every item shows its icon and label.
    #[default]
    Expanded,
    /// Icon rail, every item shows its icon only.
    Collapsed,
}

impl SidebarMode {
    /// Return the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Infer the mode from a rendered sidebar width.
    ///
    /// Only an exact match of the expanded width counts as expanded. Any
    /// other value, including an empty or unset width, reads as collapsed,
    /// so the first toggle on a fresh page expands the sidebar.
    pub fn from_width(width: &str, metrics: &SidebarMetrics) -> Self {
        if width == metrics.width_css(Self::Expanded) {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Return whether item labels are visible in this mode.
    pub fn shows_labels(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Return the lowercase name used in settings and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

impl std::fmt::Display for SidebarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
