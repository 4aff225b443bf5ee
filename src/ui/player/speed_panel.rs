// SPDX-License-Identifier: MPL-2.0
//! Speed panel: presets, slider, speed field and target-duration field.
//!
//! The panel edits a [`SpeedEditSession`]; nothing reaches the media until
//! Apply is pressed.

use crate::domain::playback::{format_time, speed_bounds};
use crate::i18n::fluent::I18n;
use crate::player::SpeedEditSession;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, slider, text, text_input, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Slider resolution.
const SLIDER_STEP: f64 = 0.05;

/// Tolerance for highlighting the preset matching the candidate.
const PRESET_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PresetSelected(f64),
    SliderChanged(f64),
    SpeedTextChanged(String),
    SpeedTextSubmitted,
    DurationTextChanged(String),
    DurationTextSubmitted,
    Apply,
    Cancel,
}

/// What the caller must do after [`handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Close the panel and commit the candidate.
    Commit,
    /// Close the panel, keeping the committed speed.
    Cancel,
}

/// Applies a panel message to the session.
pub fn handle(session: &mut SpeedEditSession, message: Message) -> Effect {
    match message {
        Message::PresetSelected(preset) => session.select_preset(preset),
        Message::SliderChanged(raw) => session.set_from_slider(raw),
        Message::SpeedTextChanged(text) => {
            session.set_speed_text(text);
        }
        Message::SpeedTextSubmitted => session.blur_speed_text(),
        Message::DurationTextChanged(text) => {
            session.set_duration_text(text);
        }
        Message::DurationTextSubmitted => session.blur_duration_text(),
        Message::Apply => return Effect::Commit,
        Message::Cancel => return Effect::Cancel,
    }
    Effect::None
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, session: &'a SpeedEditSession) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let candidate = session.candidate();

    let title = text(i18n.tr("speed-panel-title")).size(typography::TITLE_SM);

    let presets = speed_bounds::PRESETS
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &preset| {
            let selected = (candidate - preset).abs() < PRESET_EPSILON;
            row.push(
                button(Text::new(format!("{preset}x")).size(typography::CAPTION))
                    .on_press(Message::PresetSelected(preset))
                    .padding([spacing::XXS, spacing::XS])
                    .style(if selected {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    }),
            )
        });

    let speed_slider = slider(
        speed_bounds::MIN..=speed_bounds::MAX,
        candidate,
        Message::SliderChanged,
    )
    .step(SLIDER_STEP)
    .width(Length::Fill);

    let speed_input = text_input(&i18n.tr("speed-panel-speed-placeholder"), session.speed_text())
        .on_input(Message::SpeedTextChanged)
        .on_submit(Message::SpeedTextSubmitted)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let speed_row = row![
        text(i18n.tr("speed-panel-speed-label")).size(typography::BODY),
        Space::new().width(Length::Fill),
        speed_input,
        text("x").size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    let media_duration = session.media_duration();
    let duration_input = text_input(
        &i18n.tr("speed-panel-duration-placeholder"),
        session.duration_text(),
    )
    .padding(spacing::XXS)
    .size(typography::BODY)
    .width(Length::Fixed(sizing::INPUT_WIDTH));
    // Without a known duration there is nothing to divide; the field stays inert.
    let duration_input = if media_duration.is_known() {
        duration_input
            .on_input(Message::DurationTextChanged)
            .on_submit(Message::DurationTextSubmitted)
    } else {
        duration_input
    };

    let duration_row = row![
        text(i18n.tr("speed-panel-duration-label")).size(typography::BODY),
        Space::new().width(Length::Fill),
        duration_input,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    let hint = if media_duration.is_known() {
        i18n.tr_with_args(
            "speed-panel-original-duration",
            &[("duration", format_time(media_duration.secs()).as_str())],
        )
    } else {
        i18n.tr("speed-panel-duration-unknown")
    };

    let actions = row![
        Space::new().width(Length::Fill),
        button(text(i18n.tr("speed-panel-cancel")).size(typography::BODY))
            .on_press(Message::Cancel)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected),
        button(text(i18n.tr("speed-panel-apply")).size(typography::BODY))
            .on_press(Message::Apply)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::primary),
    ]
    .spacing(spacing::XS);

    let content = column![
        title,
        presets,
        speed_slider,
        speed_row,
        duration_row,
        text(hint).size(typography::CAPTION),
        actions,
    ]
    .spacing(spacing::SM);

    container(content)
        .width(Length::Fixed(sizing::SPEED_PANEL_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
