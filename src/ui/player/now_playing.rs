// SPDX-License-Identifier: MPL-2.0
//! Now-playing card shown on the stage.
//!
//! Audio shows cover art, title and "artist - album". Video shows the file
//! title over a plain backdrop since frames are not rendered.

use crate::domain::media::{MediaKind, TrackInfo};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{column, container, image, text, Column};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(
    track: &'a TrackInfo,
    cover: Option<&'a Handle>,
) -> Element<'a, Message> {
    let art: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::COVER_ART))
            .height(Length::Fixed(sizing::COVER_ART))
            .into(),
        None => container(text(placeholder_glyph(track.kind)).size(typography::TITLE_LG * 2.0))
            .width(Length::Fixed(sizing::COVER_ART))
            .height(Length::Fixed(sizing::COVER_ART))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::cover_placeholder)
            .into(),
    };

    let mut details: Column<'a, Message> = column![text(track.title.as_str())
        .size(typography::TITLE_LG)
        .color(palette::WHITE)]
    .spacing(spacing::XXS)
    .align_x(alignment::Horizontal::Center);

    if let Some(subtitle) = track.subtitle() {
        details = details.push(text(subtitle).size(typography::BODY_LG).color(palette::GRAY_200));
    }
    if let Some(year) = track.year {
        details = details.push(text(year.to_string()).size(typography::BODY_SM).color(palette::GRAY_400));
    }

    container(
        column![art, details]
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn placeholder_glyph(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "♪",
        MediaKind::Video => "🎞",
    }
}
