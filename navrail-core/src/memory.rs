//! In-memory document used by headless callers and tests.

use crate::dom::{
    ContentElement, MAIN_CONTENT_ID, NavItemElement, SIDEBAR_ID,
    SidebarElement, SidebarTargets,
};
use crate::errors::ToggleError;
use crate::item::NavItem;
use crate::mode::SidebarMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySidebar {
    width: String,
}

impl MemorySidebar {
    pub fn new(width: impl Into<String>) -> Self {
        Self {
            width: width.into(),
        }
    }
}

impl SidebarElement for MemorySidebar {
    fn width(&self) -> String {
        self.width.clone()
    }

    fn set_width(&mut self, width: &str) {
        self.width = width.to_string();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContent {
    margin_left: String,
}

impl MemoryContent {
    pub fn new(margin_left: impl Into<String>) -> Self {
        Self {
            margin_left: margin_left.into(),
        }
    }
}

impl ContentElement for MemoryContent {
    fn margin_left(&self) -> String {
        self.margin_left.clone()
    }

    fn set_margin_left(&mut self, margin: &str) {
        self.margin_left = margin.to_string();
    }
}

/// Navigation item element.
///
/// Like a live document, the icon class is read back from the current inner
/// markup, so every toggle sees what the previous one wrote. The label is a
/// separate attribute that toggles never touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNavItem {
    label: Option<String>,
    inner_html: String,
}

impl MemoryNavItem {
    /// Item rendered the way a freshly loaded page shows it: icon and label.
    pub fn new(
        icon_class: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let item = NavItem::new(icon_class, label);
        Self {
            inner_html: item.markup(SidebarMode::Expanded),
            label: Some(item.label().to_string()),
        }
    }

    pub fn without_icon(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            inner_html: label.clone(),
            label: Some(label),
        }
    }

    pub fn without_label(icon_class: impl Into<String>) -> Self {
        let item = NavItem::new(icon_class, "");
        Self {
            inner_html: item.markup(SidebarMode::Collapsed),
            label: None,
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl NavItemElement for MemoryNavItem {
    fn icon_class(&self) -> Option<String> {
        let rest = self.inner_html.strip_prefix("<i class=\"")?;
        let end = rest.find('"')?;
        Some(unescape(&rest[..end]))
    }

    fn label(&self) -> Option<String> {
        self.label.clone()
    }

    fn set_inner_html(&mut self, markup: &str) {
        self.inner_html = markup.to_string();
    }
}

/// Decode the entities produced by item markup rendering.
fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Document holding the sidebar, the main content and the navigation items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    sidebar: Option<MemorySidebar>,
    content: Option<MemoryContent>,
    items: Vec<MemoryNavItem>,
}

impl MemoryDocument {
    /// Document with both containers present and the given sidebar width.
    pub fn new(
        sidebar_width: impl Into<String>,
        items: Vec<MemoryNavItem>,
    ) -> Self {
        let sidebar = MemorySidebar::new(sidebar_width);
        let content = MemoryContent::new(sidebar.width.clone());
        Self {
            sidebar: Some(sidebar),
            content: Some(content),
            items,
        }
    }

    pub fn without_sidebar(mut self) -> Self {
        self.sidebar = None;
        self
    }

    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    pub fn sidebar(&self) -> Option<&MemorySidebar> {
        self.sidebar.as_ref()
    }

    pub fn content(&self) -> Option<&MemoryContent> {
        self.content.as_ref()
    }

    pub fn items(&self) -> &[MemoryNavItem] {
        &self.items
    }

    /// Current sidebar width, empty when the sidebar is missing.
    pub fn sidebar_width(&self) -> String {
        self.sidebar.as_ref().map(|s| s.width()).unwrap_or_default()
    }

    /// Current content margin, empty when the content element is missing.
    pub fn content_margin(&self) -> String {
        self.content
            .as_ref()
            .map(|c| c.margin_left())
            .unwrap_or_default()
    }

    /// Resolve the toggle collaborators.
    pub fn targets(
        &mut self,
    ) -> Result<
        SidebarTargets<'_, MemorySidebar, MemoryContent, MemoryNavItem>,
        ToggleError,
    > {
        let sidebar = self.sidebar.as_mut().ok_or_else(|| {
            ToggleError::MissingElement {
                id: SIDEBAR_ID.to_string(),
            }
        })?;
        let content = self.content.as_mut().ok_or_else(|| {
            ToggleError::MissingElement {
                id: MAIN_CONTENT_ID.to_string(),
            }
        })?;

        Ok(SidebarTargets::new(sidebar, content, &mut self.items))
    }
}
