use serde::Serialize;

use crate::errors::SettingsError;
use crate::item::NavItem;
use crate::metrics::SidebarMetrics;
use crate::mode::SidebarMode;

/// Typed settings payload used for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsData {
    sidebar: SidebarSettingsData,
    items: Vec<NavItem>,
}

/// Sidebar mode and widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarSettingsData {
    mode: SidebarMode,
    #[serde(flatten)]
    metrics: SidebarMetrics,
}

impl Default for SidebarSettingsData {
    fn default() -> Self {
        Self {
            mode: SidebarMode::Expanded,
            metrics: SidebarMetrics::default(),
        }
    }
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            sidebar: SidebarSettingsData::default(),
            items: default_items(),
        }
    }
}

impl SettingsData {
    /// Return the persisted sidebar mode.
    pub fn sidebar_mode(&self) -> SidebarMode {
        self.sidebar.mode
    }

    /// Update the persisted sidebar mode.
    pub fn set_sidebar_mode(&mut self, mode: SidebarMode) {
        self.sidebar.mode = mode;
    }

    pub fn sidebar_metrics(&self) -> SidebarMetrics {
        self.sidebar.metrics
    }

    /// Replace sidebar widths after validating them.
    pub fn set_sidebar_metrics(
        &mut self,
        metrics: SidebarMetrics,
    ) -> Result<(), SettingsError> {
        metrics.validate()?;
        self.sidebar.metrics = metrics;
        Ok(())
    }

    /// Return navigation items in display order.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<NavItem>) {
        self.items = items;
    }

    /// Build settings from loosely typed JSON.
    ///
    /// Missing or mistyped fields keep their defaults. Widths that do not
    /// satisfy `0 < collapsed < expanded` fall back to the default widths
    /// while the mode and items are still read; the validation error is
    /// returned next to the settings.
    pub fn from_json(
        value: &serde_json::Value,
    ) -> (Self, Option<SettingsError>) {
        let mut settings = SettingsData::default();
        let mut rejected = None;

        if let Some(sidebar) = value.get("sidebar") {
            if let Some(mode) = sidebar
                .get("mode")
                .and_then(|mode| mode.as_str())
                .and_then(parse_mode)
            {
                settings.sidebar.mode = mode;
            }

            let mut metrics = settings.sidebar.metrics;
            if let Some(width) = read_width(sidebar, "expanded_width") {
                metrics.expanded_width = width;
            }
            if let Some(width) = read_width(sidebar, "collapsed_width") {
                metrics.collapsed_width = width;
            }
            rejected = settings.set_sidebar_metrics(metrics).err();
        }

        if let Some(items) = read_items(value.get("items")) {
            settings.items = items;
        }

        (settings, rejected)
    }
}

fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("icon-home", "Dashboard"),
        NavItem::new("icon-chart", "Sector Performance"),
    ]
}

fn parse_mode(value: &str) -> Option<SidebarMode> {
    match value {
        "expanded" => Some(SidebarMode::Expanded),
        "collapsed" => Some(SidebarMode::Collapsed),
        _ => None,
    }
}

fn read_width(value: &serde_json::Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(|width| width.as_u64())
        .and_then(|width| u32::try_from(width).ok())
}

fn read_items(value: Option<&serde_json::Value>) -> Option<Vec<NavItem>> {
    let entries = value?.as_array()?;
    let items = entries
        .iter()
        .filter_map(|entry| {
            let icon = entry.get("icon")?.as_str()?.trim();
            let label = entry.get("label")?.as_str()?;
            if icon.is_empty() {
                return None;
            }
            Some(NavItem::new(icon, label))
        })
        .collect();

    Some(items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::SettingsData;
    use crate::errors::SettingsError;
    use crate::item::NavItem;
    use crate::metrics::SidebarMetrics;
    use crate::mode::SidebarMode;

    #[test]
    fn given_full_json_when_parsed_then_all_fields_are_read() {
        let value = json!({
            "sidebar": {
                "mode": "collapsed",
                "expanded_width": 280,
                "collapsed_width": 56
            },
            "items": [
                { "icon": "icon-home", "label": "Dashboard" },
                { "icon": "icon-list", "label": "Tickers" }
            ]
        });

        let (settings, rejected) = SettingsData::from_json(&value);

        assert!(rejected.is_none());
        assert_eq!(settings.sidebar_mode(), SidebarMode::Collapsed);
        assert_eq!(settings.sidebar_metrics().expanded_width, 280);
        assert_eq!(settings.sidebar_metrics().collapsed_width, 56);
        assert_eq!(
            settings.items(),
            &[
                NavItem::new("icon-home", "Dashboard"),
                NavItem::new("icon-list", "Tickers"),
            ]
        );
    }

    #[test]
    fn given_unknown_mode_and_bad_items_when_parsed_then_defaults_are_kept() {
        let value = json!({
            "sidebar": { "mode": "sideways" },
            "items": [
                { "icon": "", "label": "No icon" },
                { "label": "No icon field" },
                { "icon": "icon-home", "label": "Dashboard" }
            ]
        });

        let (settings, rejected) = SettingsData::from_json(&value);

        assert!(rejected.is_none());
        assert_eq!(settings.sidebar_mode(), SidebarMode::Expanded);
        assert_eq!(settings.items(), &[NavItem::new("icon-home", "Dashboard")]);
    }

    #[test]
    fn given_inverted_widths_when_parsed_then_default_widths_are_used() {
        let value = json!({
            "sidebar": { "expanded_width": 40, "collapsed_width": 60 }
        });

        let (settings, rejected) = SettingsData::from_json(&value);

        assert!(matches!(rejected, Some(SettingsError::Validation { .. })));
        assert_eq!(settings.sidebar_metrics(), SidebarMetrics::default());
    }

    #[test]
    fn given_bad_width_next_to_custom_items_when_parsed_then_mode_and_items_survive()
     {
        let value = json!({
            "sidebar": { "mode": "collapsed", "collapsed_width": 0 },
            "items": [
                { "icon": "icon-list", "label": "Tickers" },
                { "icon": "icon-settings", "label": "Admin" }
            ]
        });

        let (settings, rejected) = SettingsData::from_json(&value);

        assert!(matches!(rejected, Some(SettingsError::Validation { .. })));
        assert_eq!(settings.sidebar_mode(), SidebarMode::Collapsed);
        assert_eq!(settings.sidebar_metrics(), SidebarMetrics::default());
        assert_eq!(
            settings.items(),
            &[
                NavItem::new("icon-list", "Tickers"),
                NavItem::new("icon-settings", "Admin"),
            ]
        );
    }

    #[test]
    fn given_settings_when_serialized_then_widths_are_flattened_into_sidebar() {
        let value = serde_json::to_value(SettingsData::default())
            .expect("settings should serialize");

        assert_eq!(value["sidebar"]["mode"], "expanded");
        assert_eq!(value["sidebar"]["expanded_width"], 250);
        assert_eq!(value["sidebar"]["collapsed_width"], 60);
        assert_eq!(value["items"][0]["icon"], "icon-home");
        assert_eq!(value["items"][0]["label"], "Dashboard");
    }
}
