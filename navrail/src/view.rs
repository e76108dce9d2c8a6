use iced::widget::{Stack, container};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::widgets::content::view::{self as content_view, ContentProps};
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarProps};

/// Render the root view: content underneath, sidebar pinned to the left.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let content = content_view::view(ContentProps {
        offset: app.widgets.content.offset(),
        title: app.widgets.content.title(),
    })
    .map(AppEvent::Content);

    let sidebar = sidebar_view::view(SidebarProps {
        vm: app.widgets.sidebar.vm(),
    })
    .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));

    let sidebar_layer = container(sidebar)
        .width(Length::Shrink)
        .height(Length::Fill);

    Stack::with_children(vec![content, sidebar_layer.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
