use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Border, Element, Length, Theme, alignment};
use navrail_core::{NavItemView, SidebarMode};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::{icons, style};

const ROW_HEIGHT: f32 = 44.0;
const ICON_SIZE: f32 = 20.0;
const ROW_PADDING_X: f32 = 20.0;
const LABEL_SPACING: f32 = 12.0;
const LABEL_TEXT_SIZE: f32 = 14.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;

/// Props for the sidebar view.
#[derive(Debug, Clone)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
}

/// Render the sidebar: a mode toggle followed by the navigation items.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;

    let toggle_icon = match vm.mode {
        SidebarMode::Expanded => icons::SIDEBAR_COLLAPSE,
        SidebarMode::Collapsed => icons::SIDEBAR_EXPAND,
    };
    let toggle_button =
        nav_button(toggle_icon, None, false, SidebarIntent::ToggleMode);

    let items = vm.items.into_iter().enumerate().map(|(index, item)| {
        item_button(item, vm.active_item == Some(index), index)
    });
    let menu = column(items).spacing(0).width(Length::Fill);

    let menu_scroll = scrollable::Scrollable::with_direction(
        menu,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let content = column![toggle_button, menu_scroll]
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(vm.width))
        .height(Length::Fill)
        .style(style::sidebar_panel_style)
        .into()
}

fn item_button<'a>(
    item: NavItemView<'a>,
    is_active: bool,
    index: usize,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    nav_button(
        icons::for_class(item.icon),
        item.label,
        is_active,
        SidebarIntent::SelectItem(index),
    )
}

fn nav_button<'a>(
    icon: &'static [u8],
    label: Option<&'a str>,
    is_active: bool,
    on_press: SidebarIntent,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let color = if is_active || matches!(status, svg::Status::Hovered) {
                palette.primary.strong.color
            } else {
                palette.background.weak.text
            };

            svg::Style { color: Some(color) }
        });

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let color = if is_active {
                theme.extended_palette().primary.strong.color
            } else {
                iced::Color::TRANSPARENT
            };
            iced::widget::container::Style {
                background: Some(color.into()),
                ..Default::default()
            }
        });

    let mut body = row![icon]
        .spacing(LABEL_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(label) = label {
        body = body.push(text(label).size(LABEL_TEXT_SIZE));
    }

    let body = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, ROW_PADDING_X - ACTIVE_BORDER_WIDTH])
        .align_y(alignment::Vertical::Center);

    let content = row![border_strip, body]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .style(|_, _| iced::widget::button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}
