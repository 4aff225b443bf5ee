// SPDX-License-Identifier: MPL-2.0
//! Transport controls bar.
//!
//! Play/pause, previous/next, timeline with buffered indicator, time display,
//! volume, loop, speed badge and fullscreen toggle.

use crate::application::port::{CursorHost, MediaSurface};
use crate::domain::playback::{speed_bounds, PlaybackSpeed};
use crate::i18n::fluent::I18n;
use crate::player::PlayerController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::tooltip::{self, Position};
use iced::widget::{button, column, container, progress_bar, row, slider, text, Text};
use iced::{Alignment, Element, Length};

/// Timeline slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    Previous,
    Next,
    /// Timeline is being dragged; preview only.
    SeekPreview(f64),
    /// Timeline released; seek to the preview position.
    SeekCommit,
    SetVolume(f32),
    ToggleMute,
    ToggleLoop,
    SpeedDown,
    SpeedUp,
    OpenSpeedPanel,
    ToggleFullscreen,
    TogglePlaylist,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Everything the bar renders, read from the player.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsState {
    pub is_playing: bool,
    pub position_secs: f64,
    /// Zero while unknown.
    pub duration_secs: f64,
    pub seek_preview: Option<f64>,
    pub position_label: String,
    pub duration_label: String,
    pub buffered_percent: f64,
    pub volume: f32,
    pub muted: bool,
    pub loop_enabled: bool,
    pub speed: PlaybackSpeed,
    pub speed_panel_open: bool,
    pub fullscreen: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub playlist_open: bool,
}

impl ControlsState {
    pub fn from_player<S: MediaSurface, H: CursorHost>(
        player: &PlayerController<S, H>,
        seek_preview: Option<f64>,
        playlist_open: bool,
    ) -> Self {
        let duration = player.duration();
        Self {
            is_playing: player.is_playing(),
            position_secs: player.position(),
            duration_secs: if duration.is_known() { duration.secs() } else { 0.0 },
            seek_preview,
            position_label: player.display_position(),
            duration_label: player.display_duration(),
            buffered_percent: player.buffered_percent(),
            volume: player.volume().value(),
            muted: player.is_muted(),
            loop_enabled: player.is_loop_enabled(),
            speed: player.speed(),
            speed_panel_open: player.speed_editor().is_some(),
            fullscreen: player.controls().is_fullscreen(),
            has_previous: player.playlist().has_previous(),
            has_next: player.playlist().has_next(),
            playlist_open,
        }
    }

    /// Position shown on the timeline: the drag preview if any.
    #[must_use]
    pub fn timeline_position(&self) -> f64 {
        self.seek_preview.unwrap_or(self.position_secs)
    }
}

fn control_button<'a>(
    label: &'a str,
    on_press: Option<Message>,
    active: bool,
) -> iced::widget::Button<'a, Message> {
    let base = button(Text::new(label).size(typography::BODY_LG))
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));
    let base = match on_press {
        Some(msg) => base.on_press(msg),
        None => base,
    };
    if active {
        base.style(styles::button::selected)
    } else {
        base.style(styles::button::control)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &ControlsState) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let play_pause = tooltip::styled(
        control_button(
            if state.is_playing { "⏸" } else { "▶" },
            Some(Message::TogglePlayback),
            false,
        ),
        if state.is_playing {
            i18n.tr("controls-pause-tooltip")
        } else {
            i18n.tr("controls-play-tooltip")
        },
        Position::Top,
    );

    let previous = tooltip::styled(
        control_button("⏮", state.has_previous.then_some(Message::Previous), false),
        i18n.tr("controls-previous-tooltip"),
        Position::Top,
    );
    let next = tooltip::styled(
        control_button("⏭", state.has_next.then_some(Message::Next), false),
        i18n.tr("controls-next-tooltip"),
        Position::Top,
    );

    let timeline = slider(
        0.0..=state.duration_secs,
        state.timeline_position(),
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .step(SLIDER_STEP_SECS)
    .width(Length::Fill);

    #[allow(clippy::cast_possible_truncation)]
    let buffered = container(progress_bar(0.0..=100.0, state.buffered_percent as f32))
        .height(Length::Fixed(2.0))
        .width(Length::Fill);

    let timeline_column = column![timeline, buffered]
        .spacing(spacing::XXS)
        .width(Length::Fill);

    let time_display = text(format!("{} / {}", state.position_label, state.duration_label))
        .size(typography::CAPTION);

    let muted = state.muted || state.volume <= 0.0;
    let mute_button = tooltip::styled(
        control_button(if muted { "🔇" } else { "🔊" }, Some(Message::ToggleMute), state.muted),
        if state.muted {
            i18n.tr("controls-unmute-tooltip")
        } else {
            i18n.tr("controls-mute-tooltip")
        },
        Position::Top,
    );

    let shown_volume = if state.muted { 0.0 } else { state.volume };
    let volume_slider = slider(0.0..=1.0, shown_volume, Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH));

    let loop_button = tooltip::styled(
        control_button("🔁", Some(Message::ToggleLoop), state.loop_enabled),
        i18n.tr("controls-loop-tooltip"),
        Position::Top,
    );

    let speed_down = tooltip::styled(
        control_button(
            "−",
            (state.speed.value() > speed_bounds::MIN).then_some(Message::SpeedDown),
            false,
        ),
        i18n.tr("controls-speed-down-tooltip"),
        Position::Top,
    );
    let speed_badge = tooltip::styled(
        button(Text::new(state.speed.label()).size(typography::CAPTION))
            .on_press(Message::OpenSpeedPanel)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(if state.speed_panel_open || !state.speed.is_normal() {
                styles::button::selected
            } else {
                styles::button::control
            }),
        i18n.tr("controls-speed-tooltip"),
        Position::Top,
    );
    let speed_up = tooltip::styled(
        control_button(
            "+",
            (state.speed.value() < speed_bounds::MAX).then_some(Message::SpeedUp),
            false,
        ),
        i18n.tr("controls-speed-up-tooltip"),
        Position::Top,
    );

    let playlist_button = tooltip::styled(
        control_button("☰", Some(Message::TogglePlaylist), state.playlist_open),
        i18n.tr("controls-playlist-tooltip"),
        Position::Top,
    );

    let fullscreen_button = tooltip::styled(
        control_button(
            if state.fullscreen { "🗗" } else { "⛶" },
            Some(Message::ToggleFullscreen),
            false,
        ),
        if state.fullscreen {
            i18n.tr("controls-exit-fullscreen-tooltip")
        } else {
            i18n.tr("controls-fullscreen-tooltip")
        },
        Position::Top,
    );

    let controls = row![
        previous,
        play_pause,
        next,
        timeline_column,
        time_display,
        mute_button,
        volume_slider,
        loop_button,
        speed_down,
        speed_badge,
        speed_up,
        playlist_button,
        fullscreen_button,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::controls_bar)
        .into()
}
