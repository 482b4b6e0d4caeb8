// SPDX-License-Identifier: MPL-2.0
//! Widgets for rendering toasts.
//!
//! Toasts appear as small cards with a variant-colored accent border, an
//! optional action button, and an always-visible dismiss button. The
//! widgets are stateless: they read a snapshot of the store and emit
//! [`Message`]s for the host to route back via
//! [`ToastStore::handle_message`](crate::store::ToastStore::handle_message).

use crate::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::store::Message;
use crate::toast::Toast;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let accent_color = toast.variant().color();
    let id = toast.id();

    // Title over description, either may be absent
    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = toast.title() {
        body = body.push(
            Text::new(title)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
    }
    if let Some(description) = toast.description() {
        body = body.push(Text::new(description).size(typography::BODY_SM).style(
            |theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..theme.palette().text
                }),
            },
        ));
    }

    // Dismiss button (always visible, uses main text color for good contrast)
    let dismiss_button = button(Text::new("\u{00D7}").size(typography::BODY))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [title/description] [action?] [dismiss]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(action) = toast.action() {
        content = content.push(
            button(Text::new(action.label()).size(typography::BODY_SM))
                .on_press(Message::Action(id))
                .padding(spacing::XXS)
                .style(action_button_style),
        );
    }

    // Toast container with accent border
    Container::new(content.push(dismiss_button))
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the toast overlay with all active toasts.
///
/// Positions toasts in the bottom-right corner, stacked vertically in
/// insertion order (oldest on top).
pub fn view_overlay(toasts: &[Toast]) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = toasts.iter().map(view).collect();

    if cards.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let card_column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(card_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
