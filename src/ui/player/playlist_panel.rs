// SPDX-License-Identifier: MPL-2.0
//! Playlist side panel.

use crate::i18n::fluent::I18n;
use crate::player::Playlist;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Select(usize),
    AddFiles,
    OpenFolder,
    Close,
}

pub fn view<'a>(i18n: &'a I18n, playlist: &'a Playlist) -> Element<'a, Message> {
    let current = playlist.current_index();

    let header = row![
        text(i18n.tr_with_args(
            "playlist-title",
            &[("count", playlist.len().to_string().as_str())]
        ))
        .size(typography::TITLE_SM),
        Space::new().width(Length::Fill),
        button(text("✕").size(typography::BODY))
            .on_press(Message::Close)
            .padding(spacing::XXS)
            .style(styles::button::unselected),
    ]
    .spacing(spacing::XS);

    let items = playlist
        .items()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |list, (index, source)| {
            let label = format!("{}. {}", index + 1, source.file_name());
            list.push(
                button(text(label).size(typography::BODY_SM))
                    .on_press(Message::Select(index))
                    .width(Length::Fill)
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::playlist_item(current == Some(index))),
            )
        });

    let body: Element<'a, Message> = if playlist.is_empty() {
        text(i18n.tr("playlist-empty")).size(typography::BODY_SM).into()
    } else {
        scrollable(items).height(Length::Fill).into()
    };

    let actions = row![
        button(text(i18n.tr("playlist-add-files")).size(typography::BODY_SM))
            .on_press(Message::AddFiles)
            .style(styles::button::unselected),
        button(text(i18n.tr("playlist-open-folder")).size(typography::BODY_SM))
            .on_press(Message::OpenFolder)
            .style(styles::button::unselected),
    ]
    .spacing(spacing::XS);

    container(column![header, body, actions].spacing(spacing::SM))
        .width(Length::Fixed(sizing::PLAYLIST_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
