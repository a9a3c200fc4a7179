use iced::{
    Color, Element, Length, Theme, border,
    widget::{Column, column, container, container::Style, mouse_area, text},
};

use crate::board::{ListKind, ProjectCard, ProjectList};
use crate::gui::Message;

fn card_style(dragging: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = container::bordered_box(theme).border(border::width(2));
        // dim the card that is being dragged
        if dragging {
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        } else {
            style.background(theme.palette().background)
        }
    }
}

fn list_style(highlight: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = container::bordered_box(theme);
        if highlight {
            style.border(border::width(3).color(theme.palette().primary))
        } else {
            style
        }
    }
}

/// A draggable project card. Pressing it starts a drag.
pub fn card<'a>(card: &ProjectCard, dragging: bool) -> Element<'a, Message> {
    let content = column![
        text(card.title.clone()).size(20),
        text(card.assigned.clone()).size(14),
        text(card.description.clone()),
    ]
    .spacing(4);

    mouse_area(
        container(content)
            .padding(10)
            .width(Length::Fill)
            .style(card_style(dragging)),
    )
    .on_press(Message::DragStart(card.id))
    .into()
}

/// One status column. Releasing a drag over it drops the card there;
/// `highlight` marks it as the current drop target.
pub fn project_list<'a>(
    list: &ProjectList,
    dragged: Option<&str>,
    highlight: bool,
) -> Element<'a, Message> {
    let kind: ListKind = list.kind();
    let cards = list.cards().into_iter().map(|project_card| {
        let is_dragged = dragged == Some(project_card.id.to_string().as_str());
        card(&project_card, is_dragged)
    });

    let content = column![
        text(kind.heading()).size(24),
        Column::with_children(cards).spacing(8),
    ]
    .spacing(12)
    .padding(10);

    mouse_area(
        container(content)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(list_style(highlight)),
    )
    .on_enter(Message::HoverList(kind))
    .on_exit(Message::LeaveList(kind))
    .on_release(Message::Drop(kind))
    .into()
}
