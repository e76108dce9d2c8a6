use iced::Task;
use iced::keyboard::{self, Key};

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Content(event) => {
            app.widgets.content.reduce(event);
            Task::none()
        },
        AppEvent::Keyboard(event) => handle_keyboard(app, event),
    }
}

fn handle_keyboard(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
        if is_toggle_shortcut(key.as_ref(), modifiers) {
            return routers::sidebar::route(
                app,
                SidebarEvent::Intent(SidebarIntent::ToggleMode),
            );
        }
    }

    Task::none()
}

/// `Ctrl+B`, or `Cmd+B` on macOS.
fn is_toggle_shortcut(key: Key<&str>, modifiers: keyboard::Modifiers) -> bool {
    modifiers.command()
        && matches!(key, Key::Character("b") | Key::Character("B"))
}
