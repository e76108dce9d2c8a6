//! Element contracts the toggle reads from and writes to.
//!
//! The toggle never looks elements up itself. Hosts resolve the sidebar, the
//! main content element and the navigation items and hand them over as
//! [`SidebarTargets`].

/// Id of the sidebar container element.
pub const SIDEBAR_ID: &str = "sidebar";
/// Id of the main content element offset by the sidebar width.
pub const MAIN_CONTENT_ID: &str = "main-content";
/// Marker class of navigation item elements.
pub const NAV_ITEM_CLASS: &str = "sidebar-item";
/// Data attribute key (`data-title`) holding a navigation item label.
pub const LABEL_DATA_KEY: &str = "title";

/// Sidebar container with a mutable width style.
pub trait SidebarElement {
    /// Current inline width, empty when unset.
    fn width(&self) -> String;

    fn set_width(&mut self, width: &str);
}

/// Main content element with a mutable left margin style.
pub trait ContentElement {
    /// Current inline left margin, empty when unset.
    fn margin_left(&self) -> String;

    fn set_margin_left(&mut self, margin: &str);
}

/// Navigation item element owning an icon child and a label attribute.
pub trait NavItemElement {
    /// Style class of the icon child, `None` when the item has no child.
    fn icon_class(&self) -> Option<String>;

    /// Value of the label data attribute.
    fn label(&self) -> Option<String>;

    /// Replace the item content with the given markup.
    fn set_inner_html(&mut self, markup: &str);
}

/// The three collaborators a toggle operates on.
pub struct SidebarTargets<'a, S, C, I> {
    pub sidebar: &'a mut S,
    pub content: &'a mut C,
    pub items: &'a mut [I],
}

impl<'a, S, C, I> SidebarTargets<'a, S, C, I>
where
    S: SidebarElement,
    C: ContentElement,
    I: NavItemElement,
{
    pub fn new(
        sidebar: &'a mut S,
        content: &'a mut C,
        items: &'a mut [I],
    ) -> Self {
        Self {
            sidebar,
            content,
            items,
        }
    }
}
