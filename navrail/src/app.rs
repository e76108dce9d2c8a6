#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};
use navrail_core::SidebarToggle;
use navrail_core::settings::{SettingsData, SettingsLoadStatus, load_settings};

use crate::widgets::content::{ContentIntent, ContentWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Content widget
    Content(ContentIntent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) content: ContentWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) settings: SettingsData,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = initial_settings();
        let toggle = SidebarToggle::new(
            settings.sidebar_mode(),
            settings.sidebar_metrics(),
            settings.items().to_vec(),
        );
        let sidebar = SidebarWidget::new(toggle);
        let content = ContentWidget::new(
            sidebar.layout().content_offset as f32,
            sidebar.active_label().unwrap_or_default(),
        );

        let app = App {
            settings,
            widgets: Widgets { sidebar, content },
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("navrail")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn initial_settings() -> SettingsData {
    match load_settings() {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::debug!("settings loaded");
                },
                SettingsLoadStatus::Missing => {
                    log::info!("settings file not found, using defaults");
                },
                SettingsLoadStatus::Invalid(reason) => {
                    log::warn!(
                        "settings file invalid, unreadable fields use \
                         defaults: {reason}"
                    );
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to load settings: {err}");
            SettingsData::default()
        },
    }
}
