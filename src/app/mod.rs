// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the player controller to localization, settings
//! and notifications, and translates messages into side effects like file
//! dialogs, background tag reading or config persistence. Policy decisions
//! (window size, what gets persisted, which toasts appear) stay close to the
//! update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod persistence;
pub mod shortcuts;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::MediaSurface;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::RodioSurface;
use crate::player::{PlayerController, Preferences};
use crate::ui::notifications::{self, Notification};
use crate::ui::player::controls::ControlsState;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
///
/// Generic over the media surface so the update logic can run against a
/// fake surface in tests; the binary always uses [`RodioSurface`].
pub struct App<S: MediaSurface = RodioSurface> {
    pub i18n: I18n,
    player: PlayerController<S>,
    config: Config,
    /// Preferences as last written to disk.
    saved_preferences: Preferences,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Timeline position while the slider is dragged.
    seek_preview: Option<f64>,
    playlist_open: bool,
    /// Decoded once per track; a fresh handle on every frame would reload
    /// the image.
    cover: Option<Handle>,
    window_id: Option<window::Id>,
}

impl<S: MediaSurface> fmt::Debug for App<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.player.state())
            .field("playlist_len", &self.player.playlist().len())
            .field("playlist_open", &self.playlist_open)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::<RodioSurface>::new(flags)
    };

    iced::application(boot, App::<RodioSurface>::update, App::<RodioSurface>::view)
        .title(App::<RodioSurface>::title)
        .theme(App::<RodioSurface>::theme)
        .window(window_settings())
        .subscription(App::<RodioSurface>::subscription)
        .run()
}

impl App<RodioSurface> {
    /// Loads settings and localization, then opens any paths given on the
    /// command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = Self::with_surface(RodioSurface::new(), config, i18n);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = if flags.paths.is_empty() {
            Task::none()
        } else {
            app.open_paths(flags.paths, false, Instant::now())
        };

        (app, task)
    }
}

impl<S: MediaSurface> App<S> {
    /// Builds the application around an existing surface.
    pub fn with_surface(surface: S, config: Config, i18n: I18n) -> Self {
        let player = PlayerController::new(surface, Default::default(), config.player_settings());
        let saved_preferences = player.preferences();
        Self {
            i18n,
            player,
            theme_mode: config.general.theme_mode,
            config,
            saved_preferences,
            notifications: notifications::Manager::new(),
            seek_preview: None,
            playlist_open: false,
            cover: None,
            window_id: None,
        }
    }

    #[must_use]
    pub fn player(&self) -> &PlayerController<S> {
        &self.player
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn is_playlist_open(&self) -> bool {
        self.playlist_open
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.player.track_info() {
            Some(track) => format!("{} - {app_name}", track.title),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.player.current_source().is_some(),
            self.notifications.has_notifications(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle_message(message);
        self.persist_if_changed();
        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = self
            .player
            .controls_visible()
            .then(|| ControlsState::from_player(&self.player, self.seek_preview, self.playlist_open));

        view::view(view::ViewContext {
            i18n: &self.i18n,
            controls,
            speed_editor: self.player.speed_editor(),
            track: self.player.track_info(),
            cover: self.cover.as_ref(),
            playlist: self.player.playlist(),
            playlist_open: self.playlist_open,
            cursor_visible: self.player.cursor().is_visible(),
            notifications: &self.notifications,
        })
    }

    fn persist_if_changed(&mut self) {
        let current = self.player.preferences();
        if current == self.saved_preferences {
            return;
        }
        self.saved_preferences = current;
        if let Err(err) = persistence::persist_preferences(&mut self.config, &current) {
            tracing::warn!(error = %err, "failed to save preferences");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}
