use iced::Task;
use navrail_core::SidebarMode;
use navrail_core::settings::save_settings;

use crate::app::{App, AppEvent};
use crate::widgets::content::ContentIntent;
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    log::debug!(
        "sidebar intent {event:?} in {} mode",
        app.widgets.sidebar.mode()
    );
    app.widgets
        .sidebar
        .reduce(event, &SidebarCtx)
        .map(AppEvent::Sidebar)
}

fn route_effect(app: &mut App, effect: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match effect {
        E::ContentOffsetChanged { offset } => {
            app.widgets.content.reduce(ContentIntent::SetOffset(offset));
            Task::none()
        },
        E::ActiveItemChanged { label } => {
            app.widgets.content.reduce(ContentIntent::ShowItem(label));
            Task::none()
        },
        E::PersistMode(mode) => {
            persist_mode(app, mode);
            Task::none()
        },
    }
}

fn persist_mode(app: &mut App, mode: SidebarMode) {
    if app.settings.sidebar_mode() == mode {
        return;
    }

    app.settings.set_sidebar_mode(mode);
    match save_settings(&app.settings) {
        Ok(()) => log::info!("sidebar mode saved: {mode}"),
        Err(err) => log::warn!("failed to save sidebar mode: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use navrail_core::settings::SettingsData;
    use navrail_core::{SidebarMode, SidebarToggle};

    use super::route;
    use crate::app::{App, Widgets};
    use crate::widgets::content::ContentWidget;
    use crate::widgets::sidebar::{
        SidebarEffect, SidebarEvent, SidebarIntent, SidebarWidget,
    };

    fn test_app() -> App {
        let settings = SettingsData::default();
        let sidebar = SidebarWidget::new(SidebarToggle::new(
            settings.sidebar_mode(),
            settings.sidebar_metrics(),
            settings.items().to_vec(),
        ));
        let content = ContentWidget::new(
            sidebar.layout().content_offset as f32,
            sidebar.active_label().unwrap_or_default(),
        );

        App {
            settings,
            widgets: Widgets { sidebar, content },
        }
    }

    #[test]
    fn given_toggle_and_offset_effect_when_routed_then_content_tracks_sidebar_width()
     {
        let mut app = test_app();

        let _task = route(
            &mut app,
            SidebarEvent::Intent(SidebarIntent::ToggleMode),
        );
        let _task = route(
            &mut app,
            SidebarEvent::Effect(SidebarEffect::ContentOffsetChanged {
                offset: 60.0,
            }),
        );

        assert_eq!(app.widgets.sidebar.mode(), SidebarMode::Collapsed);
        assert_eq!(
            app.widgets.content.offset(),
            app.widgets.sidebar.layout().width as f32
        );
    }

    #[test]
    fn given_active_item_effect_when_routed_then_content_title_changes() {
        let mut app = test_app();
        assert_eq!(app.widgets.content.title(), "Dashboard");

        let _task = route(
            &mut app,
            SidebarEvent::Effect(SidebarEffect::ActiveItemChanged {
                label: String::from("Sector Performance"),
            }),
        );

        assert_eq!(app.widgets.content.title(), "Sector Performance");
    }

    #[test]
    fn given_unchanged_mode_when_persist_routed_then_settings_are_kept() {
        let mut app = test_app();

        let _task = route(
            &mut app,
            SidebarEvent::Effect(SidebarEffect::PersistMode(
                SidebarMode::Expanded,
            )),
        );

        assert_eq!(app.settings.sidebar_mode(), SidebarMode::Expanded);
    }
}
