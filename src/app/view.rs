// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the player (stage, controls bar, playlist panel),
//! the speed panel, then toasts.

use super::Message;
use crate::domain::media::TrackInfo;
use crate::i18n::fluent::I18n;
use crate::player::{Playlist, SpeedEditSession};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::player::controls::{self, ControlsState};
use crate::ui::player::{empty_state, now_playing, playlist_panel, speed_panel};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{mouse_area, opaque, Column, Container, Row, Stack};
use iced::{mouse, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` while the controls are hidden.
    pub controls: Option<ControlsState>,
    pub speed_editor: Option<&'a SpeedEditSession>,
    pub track: Option<&'a TrackInfo>,
    pub cover: Option<&'a Handle>,
    pub playlist: &'a Playlist,
    pub playlist_open: bool,
    pub cursor_visible: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let stage_content: Element<'_, Message> = match ctx.track {
        Some(track) => now_playing::view(track, ctx.cover),
        None => empty_state::view(i18n).map(Message::EmptyState),
    };

    let stage = Container::new(stage_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::stage);
    let stage = mouse_area(stage)
        .on_press(Message::StageClicked)
        .on_double_click(Message::StageDoubleClicked);

    let mut player_column = Column::new()
        .push(stage)
        .width(Length::Fill)
        .height(Length::Fill);
    if let Some(state) = &ctx.controls {
        player_column =
            player_column.push(controls::view(controls::ViewContext { i18n }, state).map(Message::Controls));
    }

    let mut body = Row::new().push(player_column).height(Length::Fill);
    if ctx.playlist_open {
        body = body.push(playlist_panel::view(i18n, ctx.playlist).map(Message::Playlist));
    }

    let body = mouse_area(body)
        .on_move(|_| Message::PointerMoved)
        .on_exit(Message::PointerLeft);
    let body = if ctx.cursor_visible {
        body
    } else {
        body.interaction(mouse::Interaction::Hidden)
    };

    let mut layers = Stack::new()
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(session) = ctx.speed_editor {
        // Opaque so clicks inside the panel never reach the stage, where
        // they would dismiss it.
        let panel = opaque(
            speed_panel::view(speed_panel::ViewContext { i18n }, session).map(Message::SpeedPanel),
        );
        layers = layers.push(
            Container::new(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding([spacing::XL * 2.0, spacing::MD]),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}
