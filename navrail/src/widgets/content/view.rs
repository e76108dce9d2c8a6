use iced::widget::{column, container, text};
use iced::{Element, Length, Padding, Theme};

use super::event::ContentIntent;
use crate::style;

const CONTENT_PADDING: f32 = 24.0;
const TITLE_TEXT_SIZE: f32 = 22.0;
const HINT_TEXT_SIZE: f32 = 13.0;

/// Props for the content area view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentProps<'a> {
    pub(crate) offset: f32,
    pub(crate) title: &'a str,
}

/// Render the content area shifted right by the sidebar width.
pub(crate) fn view(
    props: ContentProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let body = column![
        text(props.title).size(TITLE_TEXT_SIZE),
        text("Ctrl+B toggles the sidebar").size(HINT_TEXT_SIZE),
    ]
    .spacing(8);

    let padded = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .style(style::content_panel_style);

    container(padded)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: props.offset,
            ..Padding::ZERO
        })
        .into()
}
