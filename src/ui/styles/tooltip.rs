// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the transport controls.
//!
//! The controls bar is always dark, so tooltips use a light card whatever the
//! theme.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub use iced::widget::tooltip::Position;

pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.95, 0.95, 0.95, 0.98))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        },
        shadow: shadow::SM,
        text_color: Some(Color::from_rgb(0.1, 0.1, 0.1)),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_is_light_on_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            let Some(Background::Color(bg)) = style.background else {
                panic!("Expected color background")
            };
            assert!(bg.r > 0.5);
            assert!(style.text_color.is_some());
        }
    }
}
