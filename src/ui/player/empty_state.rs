// SPDX-License-Identifier: MPL-2.0
//! Shown while nothing is loaded.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, row, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFile,
    OpenFolder,
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_200);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let buttons = row![
        button(Text::new(i18n.tr("empty-state-open-file")))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary)
            .on_press(Message::OpenFile),
        button(Text::new(i18n.tr("empty-state-open-folder")))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::unselected)
            .on_press(Message::OpenFolder),
    ]
    .spacing(spacing::SM);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(buttons)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
