// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::shortcuts::Action;
use crate::application::port::MetadataError;
use crate::domain::media::MediaTags;
use crate::ui::notifications;
use crate::ui::player::{controls, empty_state, playlist_panel, speed_panel};
use iced::window;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    SpeedPanel(speed_panel::Message),
    Playlist(playlist_panel::Message),
    EmptyState(empty_state::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick: surface polling, auto-hide and toast expiry.
    Tick(Instant),
    /// A keyboard shortcut fired in the given window.
    Shortcut(Action, window::Id),
    PointerMoved,
    PointerLeft,
    /// Click on the player surface outside the speed panel.
    StageClicked,
    StageDoubleClicked,
    WindowOpened(window::Id),
    /// The window changed size, possibly by entering or leaving fullscreen.
    WindowResized(window::Id),
    /// Mode reported by the window after a resize.
    WindowModeChanged(window::Mode),
    /// Container duration read in the background for `path`, when the
    /// decoder could not report one.
    HeaderDurationRead {
        path: PathBuf,
        duration: Option<Duration>,
    },
    /// Result from the open files dialog. `append` adds to the playlist
    /// instead of replacing it.
    FilesPicked {
        paths: Option<Vec<PathBuf>>,
        append: bool,
    },
    /// Result from the open folder dialog.
    FolderPicked(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Tags read in the background for `path`.
    MetadataLoaded {
        path: PathBuf,
        result: Result<MediaTags, MetadataError>,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Files or directories forming the initial playlist.
    pub paths: Vec<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TEMPO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
