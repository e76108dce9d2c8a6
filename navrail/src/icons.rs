pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../assets/svg/sidebar-collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../assets/svg/sidebar-expand.svg");

const NAV_HOME: &[u8] = include_bytes!("../assets/svg/home.svg");
const NAV_CHART: &[u8] = include_bytes!("../assets/svg/chart.svg");
const NAV_LIST: &[u8] = include_bytes!("../assets/svg/list.svg");
const NAV_SETTINGS: &[u8] = include_bytes!("../assets/svg/settings.svg");
const NAV_FALLBACK: &[u8] = include_bytes!("../assets/svg/dot.svg");

/// Resolve the bundled svg for a navigation icon style class.
pub(crate) fn for_class(class: &str) -> &'static [u8] {
    match class {
        "icon-home" => NAV_HOME,
        "icon-chart" => NAV_CHART,
        "icon-list" => NAV_LIST,
        "icon-settings" => NAV_SETTINGS,
        _ => NAV_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::{NAV_FALLBACK, NAV_HOME, for_class};

    #[test]
    fn given_unknown_icon_class_when_resolved_then_fallback_is_used() {
        assert_eq!(for_class("icon-home"), NAV_HOME);
        assert_eq!(for_class("icon-unknown"), NAV_FALLBACK);
    }
}
