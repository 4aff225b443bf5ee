// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler reads the clock once (or takes it from the tick) and
//! passes it down, so the controller never calls `Instant::now` itself.

use super::shortcuts::Action;
use super::{App, Message};
use crate::application::port::{MediaSurface, MetadataError, MetadataReader, PlaybackError};
use crate::directory_scanner;
use crate::domain::media::{MediaSource, MediaTags, TrackInfo};
use crate::infrastructure::LoftyMetadataReader;
use crate::player::Notice;
use crate::ui::notifications::Notification;
use crate::ui::player::{controls, empty_state, playlist_panel, speed_panel};
use iced::widget::image::Handle;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

impl<S: MediaSurface> App<S> {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Controls(msg) => self.handle_controls_message(msg, now),
            Message::SpeedPanel(msg) => {
                self.handle_speed_panel_message(msg, now);
                Task::none()
            }
            Message::Playlist(msg) => self.handle_playlist_message(msg, now),
            Message::EmptyState(msg) => match msg {
                empty_state::Message::OpenFile => {
                    pick_files(self.i18n.tr("dialog-filter-media"), false)
                }
                empty_state::Message::OpenFolder => pick_folder(),
            },
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(instant) => self.handle_tick(instant),
            Message::Shortcut(action, window) => {
                self.window_id = Some(window);
                self.handle_shortcut(action, now)
            }
            Message::PointerMoved => {
                self.player.pointer_moved(now);
                Task::none()
            }
            Message::PointerLeft => {
                self.player.pointer_left(now);
                Task::none()
            }
            Message::StageClicked => {
                // The click takes focus away from any panel field.
                if let Some(session) = self.player.speed_editor_mut() {
                    session.blur();
                }
                if !self.player.dismiss_speed_editor(now) {
                    self.player.pointer_moved(now);
                }
                Task::none()
            }
            Message::StageDoubleClicked => self.toggle_fullscreen(now),
            Message::WindowOpened(window) => {
                self.window_id = Some(window);
                Task::none()
            }
            Message::WindowResized(window) => {
                self.window_id = Some(window);
                window::mode(window).map(Message::WindowModeChanged)
            }
            Message::WindowModeChanged(mode) => {
                self.sync_fullscreen(mode, now);
                Task::none()
            }
            Message::HeaderDurationRead { path, duration } => {
                if let Some(duration) = duration {
                    self.player.apply_header_duration(&path, duration.as_secs_f64());
                }
                Task::none()
            }
            Message::FilesPicked { paths, append } => match paths {
                Some(paths) if !paths.is_empty() => self.open_paths(paths, append, now),
                _ => {
                    self.notifications
                        .push(Notification::info("notification-open-cancelled"));
                    Task::none()
                }
            },
            Message::FolderPicked(folder) => match folder {
                Some(folder) => self.open_paths(vec![folder], false, now),
                None => {
                    self.notifications
                        .push(Notification::info("notification-open-cancelled"));
                    Task::none()
                }
            },
            // Several dropped files arrive as several events; append so none
            // replaces the previous one.
            Message::FileDropped(path) => self.open_paths(vec![path], true, now),
            Message::MetadataLoaded { path, result } => {
                self.handle_metadata_loaded(path, result);
                Task::none()
            }
        }
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// Resolves `paths` (expanding directories) and opens or appends them.
    pub(super) fn open_paths(
        &mut self,
        paths: Vec<PathBuf>,
        append: bool,
        now: Instant,
    ) -> Task<Message> {
        let resolved = directory_scanner::resolve_paths(paths);

        if !resolved.skipped.is_empty() {
            tracing::warn!(skipped = ?resolved.skipped, "ignoring unsupported paths");
            self.notifications.push(
                Notification::warning("notification-media-skipped")
                    .with_arg("count", resolved.skipped.len().to_string()),
            );
        }

        if resolved.sources.is_empty() {
            self.notifications
                .push(Notification::info("notification-folder-empty"));
            return Task::none();
        }

        let count = resolved.sources.len();
        let result = if append {
            self.player.enqueue(resolved.sources, now)
        } else {
            self.player.open(resolved.sources, now)
        };

        if count > 1 {
            self.notifications.push(
                Notification::success("notification-folder-loaded")
                    .with_arg("count", count.to_string()),
            );
        }

        self.after_load(result)
    }

    fn after_load(&mut self, result: Result<Option<MediaSource>, PlaybackError>) -> Task<Message> {
        match result {
            Ok(Some(source)) => self.track_started(source),
            Ok(None) => Task::none(),
            Err(err) => {
                self.report_playback_error(&err);
                Task::none()
            }
        }
    }

    /// Resets per-track view state and starts reading tags for audio.
    fn track_started(&mut self, source: MediaSource) -> Task<Message> {
        self.cover = None;
        self.seek_preview = None;
        self.notifications.clear_playback_errors();
        self.notifications.push(
            Notification::info("notification-media-loaded").with_arg("name", source.file_name()),
        );

        let path = source.path().to_path_buf();
        if source.kind().is_audio() {
            load_metadata(path)
        } else if !self.player.duration().is_known() {
            read_header_duration(path)
        } else {
            Task::none()
        }
    }

    fn handle_metadata_loaded(&mut self, path: PathBuf, result: Result<MediaTags, MetadataError>) {
        // Tags for a track the user already skipped past.
        let Some(source) = self
            .player
            .current_source()
            .filter(|source| source.path() == path)
            .cloned()
        else {
            return;
        };

        let info = match result {
            Ok(tags) => {
                if let Some(duration) = tags.duration {
                    self.player.apply_header_duration(&path, duration.as_secs_f64());
                }
                TrackInfo::from_tags(&source, tags)
            }
            Err(MetadataError::NoTags) => {
                tracing::debug!(path = %path.display(), "no tags; using file name");
                TrackInfo::from_file_name(&source)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "metadata extraction failed");
                self.notifications
                    .push(Notification::warning("notification-metadata-fallback"));
                TrackInfo::from_file_name(&source)
            }
        };

        self.cover = info
            .cover
            .as_ref()
            .map(|bytes| Handle::from_bytes(bytes.clone()));
        self.player.set_track_info(&path, info);
    }

    fn report_playback_error(&mut self, err: &PlaybackError) {
        tracing::warn!(error = %err, "playback error");
        self.notifications.push(Notification::error(err.i18n_key()));
    }

    // =========================================================================
    // Clock
    // =========================================================================

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .player
            .poll_surface(now)
            .into_iter()
            .map(|notice| self.handle_notice(notice))
            .collect();

        self.player.tick(now);
        self.notifications.tick(now);

        Task::batch(tasks)
    }

    fn handle_notice(&mut self, notice: Notice) -> Task<Message> {
        match notice {
            Notice::TrackStarted(source) => self.track_started(source),
            Notice::PlaylistFinished => {
                self.notifications
                    .push(Notification::info("notification-playlist-finished"));
                Task::none()
            }
            Notice::Failed(err) => {
                self.report_playback_error(&err);
                Task::none()
            }
        }
    }

    // =========================================================================
    // Components
    // =========================================================================

    fn handle_controls_message(&mut self, message: controls::Message, now: Instant) -> Task<Message> {
        match message {
            controls::Message::TogglePlayback => {
                let result = self.player.toggle_playback(now);
                self.report_if_failed(result);
            }
            controls::Message::Previous => {
                let result = self.player.previous_track(now);
                return self.after_load(result);
            }
            controls::Message::Next => {
                let result = self.player.next_track(now);
                return self.after_load(result);
            }
            controls::Message::SeekPreview(secs) => self.seek_preview = Some(secs),
            controls::Message::SeekCommit => {
                if let Some(secs) = self.seek_preview.take() {
                    let result = self.player.seek_to(secs);
                    self.report_if_failed(result);
                }
            }
            controls::Message::SetVolume(volume) => self.player.set_volume(volume),
            controls::Message::ToggleMute => self.player.toggle_mute(),
            controls::Message::ToggleLoop => self.player.toggle_loop(),
            controls::Message::SpeedDown => self.player.step_speed_down(),
            controls::Message::SpeedUp => self.player.step_speed_up(),
            controls::Message::OpenSpeedPanel => {
                if self.player.speed_editor().is_some() {
                    self.player.cancel_speed_editor(now);
                } else {
                    self.player.open_speed_editor(now);
                }
            }
            controls::Message::ToggleFullscreen => return self.toggle_fullscreen(now),
            controls::Message::TogglePlaylist => self.playlist_open = !self.playlist_open,
        }
        Task::none()
    }

    fn handle_speed_panel_message(&mut self, message: speed_panel::Message, now: Instant) {
        let Some(session) = self.player.speed_editor_mut() else {
            return;
        };
        match speed_panel::handle(session, message) {
            speed_panel::Effect::None => {}
            speed_panel::Effect::Commit => self.commit_speed(now),
            speed_panel::Effect::Cancel => self.player.cancel_speed_editor(now),
        }
    }

    fn commit_speed(&mut self, now: Instant) {
        if let Some(speed) = self.player.commit_speed_editor(now) {
            tracing::info!(speed = speed.value(), "speed applied from panel");
        }
    }

    fn handle_playlist_message(
        &mut self,
        message: playlist_panel::Message,
        now: Instant,
    ) -> Task<Message> {
        match message {
            playlist_panel::Message::Select(index) => {
                let result = self.player.select(index, now);
                self.after_load(result)
            }
            playlist_panel::Message::AddFiles => {
                pick_files(self.i18n.tr("dialog-filter-media"), true)
            }
            playlist_panel::Message::OpenFolder => pick_folder(),
            playlist_panel::Message::Close => {
                self.playlist_open = false;
                Task::none()
            }
        }
    }

    // =========================================================================
    // Keyboard and window
    // =========================================================================

    /// Keys typed into a focused field never get here: the subscription
    /// drops events a text input captured.
    fn handle_shortcut(&mut self, action: Action, now: Instant) -> Task<Message> {
        match action {
            Action::TogglePlayback => {
                let result = self.player.toggle_playback(now);
                self.report_if_failed(result);
                // Space closes an open panel without applying it.
                self.player.cancel_speed_editor(now);
            }
            Action::ToggleFullscreen => return self.toggle_fullscreen(now),
            Action::Escape => {
                // A focused text input consumes Escape, so no field has focus.
                if let Some(session) = self.player.speed_editor_mut() {
                    session.blur();
                    self.player.dismiss_speed_editor(now);
                } else {
                    return self.set_fullscreen(false, now);
                }
            }
            Action::ToggleMute => self.player.toggle_mute(),
            Action::SeekBackward => {
                let result = self.player.seek_relative(-1.0);
                self.report_if_failed(result);
            }
            Action::SeekForward => {
                let result = self.player.seek_relative(1.0);
                self.report_if_failed(result);
            }
            Action::VolumeUp => self.player.adjust_volume(1.0),
            Action::VolumeDown => self.player.adjust_volume(-1.0),
            Action::CommitSpeed => self.commit_speed(now),
            Action::SpeedDown => self.player.step_speed_down(),
            Action::SpeedUp => self.player.step_speed_up(),
        }
        Task::none()
    }

    fn toggle_fullscreen(&mut self, now: Instant) -> Task<Message> {
        let desired = !self.player.controls().is_fullscreen();
        self.set_fullscreen(desired, now)
    }

    /// Updates fullscreen mode to the desired state.
    fn set_fullscreen(&mut self, desired: bool, now: Instant) -> Task<Message> {
        if self.player.controls().is_fullscreen() == desired {
            return Task::none();
        }

        let Some(window_id) = self.window_id else {
            return Task::none();
        };

        self.player.fullscreen_changed(desired, now);
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    /// Follows fullscreen changes made outside the app, such as the window
    /// manager leaving fullscreen on its own.
    fn sync_fullscreen(&mut self, mode: window::Mode, now: Instant) {
        let fullscreen = matches!(mode, window::Mode::Fullscreen);
        if fullscreen != self.player.controls().is_fullscreen() {
            tracing::debug!(fullscreen, "window mode changed externally");
            self.player.fullscreen_changed(fullscreen, now);
        }
    }

    fn report_if_failed(&mut self, result: Result<(), PlaybackError>) {
        if let Err(err) = result {
            self.report_playback_error(&err);
        }
    }
}

// =============================================================================
// Background work
// =============================================================================

/// Reads tags on a blocking worker.
fn load_metadata(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let read_path = path.clone();
            let result =
                tokio::task::spawn_blocking(move || LoftyMetadataReader.read(&read_path))
                    .await
                    .unwrap_or_else(|err| Err(MetadataError::Unreadable(err.to_string())));
            (path, result)
        },
        |(path, result)| Message::MetadataLoaded { path, result },
    )
}

/// Reads the container duration on a blocking worker.
fn read_header_duration(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let read_path = path.clone();
            let duration = tokio::task::spawn_blocking(move || {
                crate::infrastructure::header_duration(&read_path)
            })
            .await
            .ok()
            .flatten();
            (path, duration)
        },
        |(path, duration)| Message::HeaderDurationRead { path, duration },
    )
}

/// Opens the native file picker filtered to supported media.
fn pick_files(filter_name: String, append: bool) -> Task<Message> {
    Task::perform(
        async move {
            let extensions = media_extensions();
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &extensions)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect::<Vec<_>>()
                })
        },
        move |paths| Message::FilesPicked { paths, append },
    )
}

fn pick_folder() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

fn media_extensions() -> Vec<&'static str> {
    use crate::domain::media::{AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
    AUDIO_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::player::SpeedEditSession;
    use crate::test_utils::FakeSurface;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    fn app() -> App<FakeSurface> {
        App::with_surface(
            FakeSurface::with_duration(120.0),
            Config::default(),
            I18n::default(),
        )
    }

    fn app_with(paths: &[&str]) -> App<FakeSurface> {
        let mut app = app();
        let _ = app.open_paths(
            paths.iter().map(PathBuf::from).collect(),
            false,
            Instant::now(),
        );
        app
    }

    fn window() -> window::Id {
        window::Id::unique()
    }

    fn has_notification(app: &App<FakeSurface>, key: &str) -> bool {
        app.notifications
            .visible()
            .any(|notification| notification.message_key() == key)
    }

    #[test]
    fn opening_paths_loads_first_source() {
        let app = app_with(&["one.mp3", "two.mp3"]);
        assert_eq!(app.player.playlist().len(), 2);
        assert_eq!(app.player.playlist().current_index(), Some(0));
        assert!(has_notification(&app, "notification-folder-loaded"));
    }

    #[test]
    fn unsupported_paths_are_reported() {
        let app = app_with(&["notes.txt"]);
        assert!(app.player.playlist().is_empty());
        assert!(has_notification(&app, "notification-media-skipped"));
        assert!(has_notification(&app, "notification-folder-empty"));
    }

    #[test]
    fn load_failure_shows_error_toast() {
        let mut surface = FakeSurface::with_duration(10.0);
        surface.fail_next_load = Some(PlaybackError::UnsupportedFormat);
        let mut app = App::with_surface(surface, Config::default(), I18n::default());

        let _ = app.open_paths(vec![PathBuf::from("broken.mp3")], false, Instant::now());

        let error = app
            .notifications
            .visible()
            .find(|notification| notification.severity() == Severity::Error);
        assert_eq!(
            error.map(|notification| notification.message_key().to_string()),
            Some("error-playback-unsupported".to_string())
        );
    }

    #[test]
    fn space_shortcut_toggles_and_closes_panel_without_commit() {
        let mut app = app_with(&["song.mp3"]);
        let now = Instant::now();
        app.player.open_speed_editor(now);
        if let Some(session) = app.player.speed_editor_mut() {
            session.select_preset(2.0);
        }

        let _ = app.update(Message::Shortcut(Action::TogglePlayback, window()));

        assert!(app.player.is_playing());
        assert!(app.player.speed_editor().is_none());
        assert!(app.player.speed().is_normal());
    }

    #[test]
    fn shortcuts_fire_after_field_loses_focus() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::Controls(controls::Message::OpenSpeedPanel));
        let _ = app.update(Message::SpeedPanel(speed_panel::Message::SpeedTextChanged(
            "2".into(),
        )));

        let _ = app.update(Message::Shortcut(Action::Escape, window()));
        assert!(app.player.speed_editor().is_none());
        assert!(app.player.speed().is_normal());

        let _ = app.update(Message::Shortcut(Action::TogglePlayback, window()));
        let _ = app.update(Message::Shortcut(Action::ToggleMute, window()));
        assert!(app.player.is_playing());
        assert!(app.player.is_muted());
    }

    #[test]
    fn command_enter_commits_even_while_typing() {
        let mut app = app_with(&["song.mp3"]);
        app.player.open_speed_editor(Instant::now());
        let _ = app.update(Message::SpeedPanel(speed_panel::Message::SpeedTextChanged(
            "1.5".into(),
        )));

        let _ = app.update(Message::Shortcut(Action::CommitSpeed, window()));

        assert!(app.player.speed_editor().is_none());
        crate::assert_close!(app.player.speed().value(), 1.5);
    }

    #[test]
    fn stage_click_blurs_field_and_dismisses_panel() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::Controls(controls::Message::OpenSpeedPanel));
        let _ = app.update(Message::SpeedPanel(speed_panel::Message::DurationTextChanged(
            "1:00".into(),
        )));
        assert!(app
            .player
            .speed_editor()
            .is_some_and(SpeedEditSession::is_editing_text));

        let _ = app.update(Message::StageClicked);

        assert!(app.player.speed_editor().is_none());
        assert!(app.player.speed().is_normal());
    }

    #[test]
    fn panel_apply_commits_and_persists_speed() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::Controls(controls::Message::OpenSpeedPanel));
        let _ = app.update(Message::SpeedPanel(speed_panel::Message::PresetSelected(1.5)));
        let _ = app.update(Message::SpeedPanel(speed_panel::Message::Apply));

        crate::assert_close!(app.player.speed().value(), 1.5);
        assert_eq!(app.config.playback.default_speed, Some(1.5));
    }

    #[test]
    fn volume_shortcuts_persist_preferences() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::Shortcut(Action::ToggleMute, window()));
        assert_eq!(app.config.playback.muted, Some(true));
    }

    #[test]
    fn tick_advances_playlist_on_end() {
        let mut app = app_with(&["one.mp3", "two.mp3"]);
        let now = Instant::now();
        let _ = app.update(Message::Controls(controls::Message::TogglePlayback));
        let _ = app.update(Message::Tick(now));

        app.player.surface_mut().finish();
        let _ = app.update(Message::Tick(now));

        assert_eq!(app.player.playlist().current_index(), Some(1));
        assert!(app.player.is_playing());
    }

    #[test]
    fn stale_metadata_is_ignored() {
        let mut app = app_with(&["one.mp3", "two.mp3"]);
        let _ = app.update(Message::Controls(controls::Message::Next));

        let _ = app.update(Message::MetadataLoaded {
            path: PathBuf::from("one.mp3"),
            result: Ok(MediaTags {
                title: Some("Old".into()),
                ..MediaTags::default()
            }),
        });

        assert_eq!(
            app.player.track_info().map(|track| track.title.as_str()),
            Some("two")
        );
    }

    #[test]
    fn metadata_failure_falls_back_with_warning() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::MetadataLoaded {
            path: PathBuf::from("song.mp3"),
            result: Err(MetadataError::Unreadable("bad header".into())),
        });

        assert_eq!(
            app.player.track_info().map(|track| track.title.as_str()),
            Some("song")
        );
        assert!(has_notification(&app, "notification-metadata-fallback"));
        assert!(app.cover.is_none());
    }

    #[test]
    fn metadata_with_cover_builds_handle() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::MetadataLoaded {
            path: PathBuf::from("song.mp3"),
            result: Ok(MediaTags {
                title: Some("Tagged".into()),
                cover: Some(vec![0xFF, 0xD8, 0xFF]),
                ..MediaTags::default()
            }),
        });

        assert!(app.cover.is_some());
        assert_eq!(app.title(), "Tagged - IcedTempo");
    }

    #[test]
    fn cancelled_dialog_shows_info() {
        let mut app = app();
        let _ = app.update(Message::FilesPicked {
            paths: None,
            append: false,
        });
        assert!(has_notification(&app, "notification-open-cancelled"));
    }

    #[test]
    fn fullscreen_requires_known_window() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::StageDoubleClicked);
        assert!(!app.player.controls().is_fullscreen());

        let _ = app.update(Message::WindowOpened(window()));
        let _ = app.update(Message::StageDoubleClicked);
        assert!(app.player.controls().is_fullscreen());

        let _ = app.update(Message::Shortcut(Action::Escape, window()));
        assert!(!app.player.controls().is_fullscreen());
    }

    #[test]
    fn leaving_fullscreen_outside_the_app_restores_cursor() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::WindowOpened(window()));
        let _ = app.update(Message::Controls(controls::Message::TogglePlayback));
        let _ = app.update(Message::StageDoubleClicked);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(app.player.controls().is_fullscreen());
        assert!(!app.player.cursor().is_visible());

        let _ = app.update(Message::WindowModeChanged(window::Mode::Windowed));

        assert!(!app.player.controls().is_fullscreen());
        assert!(app.player.cursor().is_visible());
    }

    #[test]
    fn resize_keeps_fullscreen_requested_by_app() {
        let mut app = app_with(&["song.mp3"]);
        let _ = app.update(Message::WindowOpened(window()));
        let _ = app.update(Message::StageDoubleClicked);

        let _ = app.update(Message::WindowModeChanged(window::Mode::Fullscreen));

        assert!(app.player.controls().is_fullscreen());
    }

    #[test]
    fn header_duration_reaches_open_panel() {
        let mut app = App::with_surface(FakeSurface::default(), Config::default(), I18n::default());
        let _ = app.open_paths(vec![PathBuf::from("clip.mkv")], false, Instant::now());
        let _ = app.update(Message::Controls(controls::Message::OpenSpeedPanel));

        let _ = app.update(Message::HeaderDurationRead {
            path: PathBuf::from("clip.mkv"),
            duration: Some(Duration::from_secs(90)),
        });

        assert_eq!(
            app.player.speed_editor().map(SpeedEditSession::duration_text),
            Some("1:30")
        );
    }

    #[test]
    fn tag_duration_fills_unknown_length() {
        let mut app = App::with_surface(FakeSurface::default(), Config::default(), I18n::default());
        let _ = app.open_paths(vec![PathBuf::from("song.mp3")], false, Instant::now());

        let _ = app.update(Message::MetadataLoaded {
            path: PathBuf::from("song.mp3"),
            result: Ok(MediaTags {
                duration: Some(Duration::from_secs(120)),
                ..MediaTags::default()
            }),
        });

        assert_eq!(app.player.display_duration(), "2:00");
    }
}
