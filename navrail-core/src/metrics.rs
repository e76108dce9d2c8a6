use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;
use crate::mode::SidebarMode;

pub const DEFAULT_EXPANDED_WIDTH: u32 = 250;
pub const DEFAULT_COLLAPSED_WIDTH: u32 = 60;

/// Pixel widths of the sidebar in each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarMetrics {
    pub expanded_width: u32,
    pub collapsed_width: u32,
}

impl SidebarMetrics {
    /// Build metrics, rejecting widths that cannot tell the modes apart.
    pub fn new(
        expanded_width: u32,
        collapsed_width: u32,
    ) -> Result<Self, SettingsError> {
        let metrics = Self {
            expanded_width,
            collapsed_width,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check `0 < collapsed_width < expanded_width`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.collapsed_width == 0 {
            return Err(SettingsError::Validation {
                message: String::from("collapsed width must be positive"),
            });
        }

        if self.collapsed_width >= self.expanded_width {
            return Err(SettingsError::Validation {
                message: format!(
                    "collapsed width {} must be smaller than expanded width {}",
                    self.collapsed_width, self.expanded_width
                ),
            });
        }

        Ok(())
    }

    /// Width in pixels for the given mode.
    pub fn width(&self, mode: SidebarMode) -> u32 {
        match mode {
            SidebarMode::Expanded => self.expanded_width,
            SidebarMode::Collapsed => self.collapsed_width,
        }
    }

    /// Width for the given mode as a CSS length, e.g. `"250px"`.
    pub fn width_css(&self, mode: SidebarMode) -> String {
        format!("{}px", self.width(mode))
    }

    /// Compute the sidebar geometry for the given mode.
    pub fn layout(&self, mode: SidebarMode) -> SidebarLayout {
        let width = self.width(mode);
        SidebarLayout {
            mode,
            width,
            content_offset: width,
        }
    }
}

impl Default for SidebarMetrics {
    fn default() -> Self {
        Self {
            expanded_width: DEFAULT_EXPANDED_WIDTH,
            collapsed_width: DEFAULT_COLLAPSED_WIDTH,
        }
    }
}

/// Geometry of the sidebar and the content area next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    pub mode: SidebarMode,
    pub width: u32,
    /// Left offset of the content area. Always equal to `width`.
    pub content_offset: u32,
}
