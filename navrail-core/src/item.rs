use serde::{Deserialize, Serialize};

use crate::mode::SidebarMode;

/// A navigation entry: an icon style class and a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    icon: String,
    label: String,
}

impl NavItem {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }

    /// Style class of the icon element, e.g. `icon-home`.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Content to present for this item in the given mode.
    pub fn view(&self, mode: SidebarMode) -> NavItemView<'_> {
        NavItemView {
            icon: &self.icon,
            label: mode.shows_labels().then_some(self.label.as_str()),
        }
    }

    /// Inner markup of the item element in the given mode.
    pub fn markup(&self, mode: SidebarMode) -> String {
        self.view(mode).to_markup()
    }
}

/// Borrowed, mode-resolved content of a navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemView<'a> {
    pub icon: &'a str,
    /// `None` when the label is hidden.
    pub label: Option<&'a str>,
}

impl NavItemView<'_> {
    /// Render as `<i class="icon"></i>` optionally followed by ` label`.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(
            16 + self.icon.len() + self.label.map_or(0, |l| l.len() + 1),
        );
        out.push_str("<i class=\"");
        escape_into(&mut out, self.icon);
        out.push_str("\"></i>");

        if let Some(label) = self.label {
            out.push(' ');
            escape_into(&mut out, label);
        }

        out
    }
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
