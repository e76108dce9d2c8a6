use crate::dom::{
    ContentElement, NavItemElement, SidebarElement, SidebarTargets,
};
use crate::errors::ToggleError;
use crate::item::{NavItem, NavItemView};
use crate::metrics::{SidebarLayout, SidebarMetrics};
use crate::mode::SidebarMode;

/// Toggle the sidebar, inferring the current mode from its rendered width.
///
/// A width equal to the expanded width collapses the sidebar; every other
/// value, including an unset width, expands it. Item content is rebuilt from
/// each item's icon class and label attribute. Returns the new mode.
pub fn toggle_by_width<S, C, I>(
    targets: SidebarTargets<'_, S, C, I>,
    metrics: &SidebarMetrics,
) -> Result<SidebarMode, ToggleError>
where
    S: SidebarElement,
    C: ContentElement,
    I: NavItemElement,
{
    let width = targets.sidebar.width();
    let current = SidebarMode::from_width(&width, metrics);
    let next = current.toggled();

    let markup = targets
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| resynthesize(index, item, next))
        .collect::<Result<Vec<_>, _>>()?;

    write_targets(targets, metrics, next, &markup);
    log::debug!("sidebar toggled by width {width:?}: {current} -> {next}");

    Ok(next)
}

fn resynthesize<I: NavItemElement>(
    index: usize,
    item: &I,
    mode: SidebarMode,
) -> Result<String, ToggleError> {
    let icon = item.icon_class().ok_or(ToggleError::MissingIcon { index })?;
    let label = if mode.shows_labels() {
        Some(item.label().ok_or(ToggleError::MissingLabel { index })?)
    } else {
        None
    };

    Ok(NavItemView {
        icon: &icon,
        label: label.as_deref(),
    }
    .to_markup())
}

fn write_targets<S, C, I>(
    targets: SidebarTargets<'_, S, C, I>,
    metrics: &SidebarMetrics,
    mode: SidebarMode,
    markup: &[String],
) where
    S: SidebarElement,
    C: ContentElement,
    I: NavItemElement,
{
    let width = metrics.width_css(mode);
    targets.sidebar.set_width(&width);
    targets.content.set_margin_left(&width);

    for (item, markup) in targets.items.iter_mut().zip(markup) {
        item.set_inner_html(markup);
    }
}

/// Sidebar toggle with an explicit mode and structured item content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarToggle {
    mode: SidebarMode,
    metrics: SidebarMetrics,
    items: Vec<NavItem>,
}

impl SidebarToggle {
    pub fn new(
        mode: SidebarMode,
        metrics: SidebarMetrics,
        items: Vec<NavItem>,
    ) -> Self {
        Self {
            mode,
            metrics,
            items,
        }
    }

    /// Build a toggle from the icon classes and labels of existing elements.
    pub fn capture<I: NavItemElement>(
        mode: SidebarMode,
        metrics: SidebarMetrics,
        elements: &[I],
    ) -> Result<Self, ToggleError> {
        let items = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let icon = element
                    .icon_class()
                    .ok_or(ToggleError::MissingIcon { index })?;
                let label =
                    element.label().ok_or(ToggleError::MissingLabel { index })?;
                Ok(NavItem::new(icon, label))
            })
            .collect::<Result<Vec<_>, ToggleError>>()?;

        Ok(Self::new(mode, metrics, items))
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn metrics(&self) -> &SidebarMetrics {
        &self.metrics
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Geometry for the current mode.
    pub fn layout(&self) -> SidebarLayout {
        self.metrics.layout(self.mode)
    }

    /// Item content for the current mode, in item order.
    pub fn views(&self) -> impl Iterator<Item = NavItemView<'_>> {
        self.items.iter().map(|item| item.view(self.mode))
    }

    /// Flip the mode without touching any element.
    pub fn toggle(&mut self) -> SidebarLayout {
        self.set_mode(self.mode.toggled())
    }

    /// Switch to the given mode without touching any element.
    pub fn set_mode(&mut self, mode: SidebarMode) -> SidebarLayout {
        if self.mode != mode {
            log::debug!("sidebar mode {} -> {mode}", self.mode);
        }
        self.mode = mode;
        self.layout()
    }

    /// Flip the mode and write it to the targets.
    ///
    /// The stored mode only changes when the targets accepted the write.
    pub fn toggle_in<S, C, I>(
        &mut self,
        targets: SidebarTargets<'_, S, C, I>,
    ) -> Result<SidebarMode, ToggleError>
    where
        S: SidebarElement,
        C: ContentElement,
        I: NavItemElement,
    {
        let next = self.mode.toggled();
        self.write(next, targets)?;
        self.set_mode(next);
        Ok(next)
    }

    /// Write the current mode to the targets without toggling.
    pub fn apply_to<S, C, I>(
        &self,
        targets: SidebarTargets<'_, S, C, I>,
    ) -> Result<(), ToggleError>
    where
        S: SidebarElement,
        C: ContentElement,
        I: NavItemElement,
    {
        self.write(self.mode, targets)
    }

    fn write<S, C, I>(
        &self,
        mode: SidebarMode,
        targets: SidebarTargets<'_, S, C, I>,
    ) -> Result<(), ToggleError>
    where
        S: SidebarElement,
        C: ContentElement,
        I: NavItemElement,
    {
        if targets.items.len() != self.items.len() {
            return Err(ToggleError::ItemCountMismatch {
                expected: self.items.len(),
                found: targets.items.len(),
            });
        }

        let markup: Vec<String> =
            self.items.iter().map(|item| item.markup(mode)).collect();
        write_targets(targets, &self.metrics, mode, &markup);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SidebarToggle, toggle_by_width};
    use crate::errors::ToggleError;
    use crate::item::NavItem;
    use crate::memory::{MemoryDocument, MemoryNavItem};
    use crate::metrics::SidebarMetrics;
    use crate::mode::SidebarMode;

    fn dashboard_document(width: &str) -> MemoryDocument {
        MemoryDocument::new(
            width,
            vec![
                MemoryNavItem::new("icon-home", "Dashboard"),
                MemoryNavItem::new("icon-chart", "Sector Performance"),
            ],
        )
    }

    fn toggle_document(document: &mut MemoryDocument) -> SidebarMode {
        let targets = document.targets().expect("targets should resolve");
        toggle_by_width(targets, &SidebarMetrics::default())
            .expect("toggle should succeed")
    }

    #[test]
    fn given_expanded_width_when_toggled_then_sidebar_collapses_to_icons() {
        let mut document = dashboard_document("250px");

        let mode = toggle_document(&mut document);

        assert_eq!(mode, SidebarMode::Collapsed);
        assert_eq!(document.sidebar_width(), "60px");
        assert_eq!(document.content_margin(), "60px");
        assert_eq!(
            document.items()[0].inner_html(),
            "<i class=\"icon-home\"></i>"
        );
        assert_eq!(
            document.items()[1].inner_html(),
            "<i class=\"icon-chart\"></i>"
        );
    }

    #[test]
    fn given_collapsed_width_when_toggled_then_labels_are_restored() {
        let mut document = dashboard_document("60px");

        let mode = toggle_document(&mut document);

        assert_eq!(mode, SidebarMode::Expanded);
        assert_eq!(document.sidebar_width(), "250px");
        assert_eq!(document.content_margin(), "250px");
        assert_eq!(
            document.items()[0].inner_html(),
            "<i class=\"icon-home\"></i> Dashboard"
        );
    }

    #[test]
    fn given_unset_width_when_toggled_then_sidebar_expands() {
        let mut document = dashboard_document("");

        let mode = toggle_document(&mut document);

        assert_eq!(mode, SidebarMode::Expanded);
        assert_eq!(document.sidebar_width(), "250px");
        assert_eq!(document.content_margin(), "250px");
    }

    #[test]
    fn given_no_items_when_toggled_then_width_and_margin_still_update() {
        let mut document = MemoryDocument::new("250px", vec![]);

        let mode = toggle_document(&mut document);

        assert_eq!(mode, SidebarMode::Collapsed);
        assert_eq!(document.sidebar_width(), "60px");
        assert_eq!(document.content_margin(), "60px");
    }

    #[test]
    fn given_item_without_icon_when_toggled_then_document_is_untouched() {
        let mut document = MemoryDocument::new(
            "250px",
            vec![
                MemoryNavItem::new("icon-home", "Dashboard"),
                MemoryNavItem::without_icon("Orphan"),
            ],
        );
        let before = document.clone();

        let targets = document.targets().expect("targets should resolve");
        let err = toggle_by_width(targets, &SidebarMetrics::default())
            .expect_err("icon is missing");

        assert_eq!(err, ToggleError::MissingIcon { index: 1 });
        assert_eq!(document, before);
    }

    #[test]
    fn given_item_without_label_when_collapsing_then_label_is_not_required() {
        let mut document = MemoryDocument::new(
            "250px",
            vec![MemoryNavItem::without_label("icon-home")],
        );

        let mode = toggle_document(&mut document);
        assert_eq!(mode, SidebarMode::Collapsed);

        let targets = document.targets().expect("targets should resolve");
        let err = toggle_by_width(targets, &SidebarMetrics::default())
            .expect_err("label is required when expanding");
        assert_eq!(err, ToggleError::MissingLabel { index: 0 });
        assert_eq!(document.sidebar_width(), "60px");
    }

    #[test]
    fn given_custom_metrics_when_toggled_then_custom_widths_are_written() {
        let metrics = SidebarMetrics::new(300, 48).expect("valid metrics");
        let mut document = dashboard_document("300px");

        let targets = document.targets().expect("targets should resolve");
        let mode = toggle_by_width(targets, &metrics).expect("toggle");

        assert_eq!(mode, SidebarMode::Collapsed);
        assert_eq!(document.sidebar_width(), "48px");
        assert_eq!(document.content_margin(), "48px");
    }

    #[test]
    fn given_explicit_mode_when_toggled_in_document_then_mode_and_elements_follow()
     {
        let mut document = dashboard_document("");
        let mut toggle = SidebarToggle::capture(
            SidebarMode::Expanded,
            SidebarMetrics::default(),
            document.items(),
        )
        .expect("items should be captured");

        let targets = document.targets().expect("targets should resolve");
        let mode = toggle.toggle_in(targets).expect("toggle should succeed");

        assert_eq!(mode, SidebarMode::Collapsed);
        assert_eq!(toggle.mode(), SidebarMode::Collapsed);
        assert_eq!(document.sidebar_width(), "60px");
        assert_eq!(document.content_margin(), "60px");
        assert_eq!(
            document.items()[1].inner_html(),
            "<i class=\"icon-chart\"></i>"
        );
    }

    #[test]
    fn given_item_count_mismatch_when_toggled_in_document_then_mode_is_kept() {
        let mut document = dashboard_document("250px");
        let before = document.clone();
        let mut toggle = SidebarToggle::new(
            SidebarMode::Expanded,
            SidebarMetrics::default(),
            vec![NavItem::new("icon-home", "Dashboard")],
        );

        let targets = document.targets().expect("targets should resolve");
        let err = toggle.toggle_in(targets).expect_err("counts differ");

        assert_eq!(
            err,
            ToggleError::ItemCountMismatch {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(toggle.mode(), SidebarMode::Expanded);
        assert_eq!(document, before);
    }

    #[test]
    fn given_persisted_mode_when_applied_then_elements_match_without_toggling()
    {
        let mut document = dashboard_document("");
        let toggle = SidebarToggle::new(
            SidebarMode::Collapsed,
            SidebarMetrics::default(),
            vec![
                NavItem::new("icon-home", "Dashboard"),
                NavItem::new("icon-chart", "Sector Performance"),
            ],
        );

        let targets = document.targets().expect("targets should resolve");
        toggle.apply_to(targets).expect("apply should succeed");

        assert_eq!(toggle.mode(), SidebarMode::Collapsed);
        assert_eq!(document.sidebar_width(), "60px");
        assert_eq!(document.content_margin(), "60px");
    }

    #[test]
    fn given_toggle_without_elements_when_toggled_then_layout_keeps_offset_equal()
     {
        let mut toggle = SidebarToggle::new(
            SidebarMode::Expanded,
            SidebarMetrics::default(),
            vec![NavItem::new("icon-home", "Dashboard")],
        );

        let layout = toggle.toggle();
        assert_eq!(layout.mode, SidebarMode::Collapsed);
        assert_eq!(layout.width, 60);
        assert_eq!(layout.content_offset, layout.width);

        let views: Vec<_> = toggle.views().collect();
        assert_eq!(views[0].label, None);

        let layout = toggle.toggle();
        assert_eq!(layout.width, 250);
        assert_eq!(
            toggle.views().next().and_then(|view| view.label),
            Some("Dashboard")
        );
    }

    #[test]
    fn given_class_with_quotes_when_toggled_twice_then_markup_round_trips() {
        let mut document = MemoryDocument::new(
            "250px",
            vec![MemoryNavItem::new("icon \"q\" & <x>", "P&L's")],
        );
        let initial = document.items()[0].inner_html().to_string();

        toggle_document(&mut document);
        assert_eq!(
            document.items()[0].inner_html(),
            "<i class=\"icon &quot;q&quot; &amp; &lt;x&gt;\"></i>"
        );

        toggle_document(&mut document);
        assert_eq!(document.items()[0].inner_html(), initial);
        assert_eq!(
            initial,
            "<i class=\"icon &quot;q&quot; &amp; &lt;x&gt;\"></i> P&amp;L&#39;s"
        );
    }
}
