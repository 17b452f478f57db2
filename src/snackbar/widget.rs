// SPDX-License-Identifier: MPL-2.0
//! Iced view for the snackbar.
//!
//! Renders the message and action button as a dark card anchored to the
//! configured edge of the host region. The sampled animation frame is
//! folded into the rendered output: the slide offset shrinks the anchored
//! edge padding (Iced clips drawing to the window, so off-screen travel
//! renders as edge-flush) and the opacity scales every style color.

use super::state::{LayoutState, Message, RenderFrame, Snackbar};
use crate::snackbar::animation::AnimationDirection;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

impl Snackbar {
    /// Renders the snackbar for the frame at `now`. Yields an empty,
    /// zero-sized element while hidden.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        view(self, now)
    }
}

/// Renders a snackbar as an overlay filling the host region.
pub fn view(snackbar: &Snackbar, now: Instant) -> Element<'_, Message> {
    let Some(layout) = snackbar.layout() else {
        // Nothing presented: an empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let frame = snackbar.frame(now);
    let card_opacity = frame.opacity.clamp(0.0, 1.0);

    // Message text
    let message_widget = Text::new(snackbar.config().message.as_str())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(palette::WHITE, card_opacity)),
        });

    // Action button; its default press behavior is dismissal.
    let action_button = button(
        Text::new(snackbar.config().action_label.as_str()).size(typography::BODY_SM),
    )
    .on_press(Message::ActionPressed)
    .padding(spacing::XXS)
    .style(move |theme: &Theme, status| action_button_style(theme, status, card_opacity));

    // Layout: [message] [action]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(action_button);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
        .align_y(alignment::Vertical::Center)
        .padding(card_padding(layout.min_height))
        .style(move |theme: &Theme| card_style(theme, card_opacity));

    let (align_y, outer_padding) = anchored_placement(layout, frame);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(align_y)
        .padding(outer_padding)
        .into()
}

/// Card padding sized so a single-line message reaches `min_height` while
/// longer messages let the card grow with its content instead of clipping.
fn card_padding(min_height: f32) -> Padding {
    // Approximate line box of the message text at the body size.
    let line_height = typography::BODY * 1.3;
    let vertical = ((min_height - line_height) / 2.0).max(spacing::XXS);

    Padding {
        top: vertical,
        bottom: vertical,
        left: spacing::MD,
        right: spacing::MD,
    }
}

/// Computes the vertical alignment and outer padding placing the card at
/// its animated position inside the safe content area.
fn anchored_placement(layout: &LayoutState, frame: RenderFrame) -> (alignment::Vertical, Padding) {
    let insets = layout.host.insets;
    // Negative offsets travel past the anchored edge; clamped because the
    // renderer cannot draw outside the window.
    let anchored = (layout.anchored_margin() + frame.offset).max(0.0);

    match layout.anchor {
        AnimationDirection::Top => (
            alignment::Vertical::Top,
            Padding {
                top: insets.top + anchored,
                bottom: 0.0,
                left: insets.left + layout.left_margin,
                right: insets.right + layout.right_margin,
            },
        ),
        AnimationDirection::Bottom => (
            alignment::Vertical::Bottom,
            Padding {
                top: 0.0,
                bottom: insets.bottom + anchored,
                left: insets.left + layout.left_margin,
                right: insets.right + layout.right_margin,
            },
        ),
    }
}

/// Applies the animation opacity on top of a color's own alpha.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style for the snackbar card.
fn card_style(theme: &Theme, card_opacity: f32) -> container::Style {
    let _ = theme; // The card is dark regardless of theme, like the original.

    container::Style {
        background: Some(iced::Background::Color(faded(
            Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },
            card_opacity,
        ))),
        border: iced::Border {
            color: faded(palette::GRAY_700, card_opacity),
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: if card_opacity > 0.0 {
            shadow::MD
        } else {
            shadow::NONE
        },
        text_color: Some(faded(palette::WHITE, card_opacity)),
        ..Default::default()
    }
}

/// Style for the action button.
fn action_button_style(theme: &Theme, status: button::Status, card_opacity: f32) -> button::Style {
    let _ = theme;
    let label = faded(palette::ACTION_500, card_opacity);

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: label,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
                card_opacity,
            ))),
            text_color: faded(palette::WHITE, card_opacity),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::GRAY_400
                },
                card_opacity,
            ))),
            text_color: faded(palette::WHITE, card_opacity),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
