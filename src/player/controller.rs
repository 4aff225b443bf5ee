// SPDX-License-Identifier: MPL-2.0
//! Player controller.
//!
//! Owns everything the user can change about playback (committed speed,
//! volume, mute, loop, playlist position) and applies it to a
//! [`MediaSurface`]. Surface events flow back through
//! [`PlayerController::apply_event`], which keeps position, duration and
//! buffering in sync and drives the controls visibility state.
//!
//! Every method that can affect visibility takes the current time, so the
//! whole controller can be exercised without a real clock.

use super::controls_visibility::{self, Effect};
use super::playlist::Playlist;
use super::speed_editor::SpeedEditSession;
use crate::application::port::{CursorFlag, CursorHost, MediaSurface, PlaybackError, SurfaceEvent};
use crate::domain::media::{MediaSource, TrackInfo};
use crate::domain::playback::{
    format_time, volume_bounds, MediaDuration, PlaybackSpeed, PlaybackState, SeekStep, Volume,
};
use crate::domain::ui::DwellWindow;
use std::path::Path;
use std::time::Instant;

/// Initial values for a controller, usually read from the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub autoplay: bool,
    pub volume: Volume,
    pub muted: bool,
    pub loop_enabled: bool,
    pub speed: PlaybackSpeed,
    pub seek_step: SeekStep,
    pub volume_step: f32,
    pub dwell: DwellWindow,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: false,
            volume: Volume::default(),
            muted: false,
            loop_enabled: false,
            speed: PlaybackSpeed::default(),
            seek_step: SeekStep::default(),
            volume_step: volume_bounds::STEP,
            dwell: DwellWindow::default(),
        }
    }
}

/// User preferences worth persisting between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub volume: Volume,
    pub muted: bool,
    pub loop_enabled: bool,
    pub speed: PlaybackSpeed,
}

/// Something the application shell should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A new source was loaded and is now current.
    TrackStarted(MediaSource),
    /// The last playlist item ended.
    PlaylistFinished,
    /// The surface reported a failure.
    Failed(PlaybackError),
}

pub struct PlayerController<S: MediaSurface, H: CursorHost = CursorFlag> {
    surface: S,
    cursor: H,
    playlist: Playlist,
    state: PlaybackState,
    autoplay: bool,
    speed: PlaybackSpeed,
    volume: Volume,
    muted: bool,
    loop_enabled: bool,
    duration: MediaDuration,
    position: f64,
    buffered_percent: f64,
    seek_step: SeekStep,
    volume_step: f32,
    edit_session: Option<SpeedEditSession>,
    controls: controls_visibility::State,
    track: Option<TrackInfo>,
}

impl<S: MediaSurface, H: CursorHost> PlayerController<S, H> {
    /// Creates a controller and pushes the initial volume, rate and loop
    /// settings to the surface.
    pub fn new(surface: S, cursor: H, settings: PlayerSettings) -> Self {
        let mut controller = Self {
            surface,
            cursor,
            playlist: Playlist::new(),
            state: PlaybackState::Stopped,
            autoplay: settings.autoplay,
            speed: settings.speed,
            volume: settings.volume,
            muted: settings.muted,
            loop_enabled: settings.loop_enabled,
            duration: MediaDuration::UNKNOWN,
            position: 0.0,
            buffered_percent: 0.0,
            seek_step: settings.seek_step,
            volume_step: settings.volume_step,
            edit_session: None,
            controls: controls_visibility::State::new(settings.dwell),
            track: None,
        };
        controller.apply_output_settings();
        controller
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// Replaces the playlist and loads its first item.
    ///
    /// Returns `Ok(None)` when `sources` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot load the first item.
    pub fn open(
        &mut self,
        sources: Vec<MediaSource>,
        now: Instant,
    ) -> Result<Option<MediaSource>, PlaybackError> {
        if self.playlist.replace(sources).is_none() {
            self.surface.unload();
            self.reset_media_state(now);
            self.track = None;
            return Ok(None);
        }
        self.load_current(now).map(Some)
    }

    /// Appends sources to the playlist, loading the first one if nothing
    /// was loaded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a newly selected item cannot be loaded.
    pub fn enqueue(
        &mut self,
        sources: Vec<MediaSource>,
        now: Instant,
    ) -> Result<Option<MediaSource>, PlaybackError> {
        let had_current = self.playlist.current().is_some();
        self.playlist.extend(sources);
        if had_current || self.playlist.current().is_none() {
            return Ok(None);
        }
        self.load_current(now).map(Some)
    }

    /// Selects and loads the playlist item at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be loaded.
    pub fn select(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<Option<MediaSource>, PlaybackError> {
        if self.playlist.select(index).is_none() {
            return Ok(None);
        }
        self.load_current(now).map(Some)
    }

    /// Loads the next playlist item, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be loaded.
    pub fn next_track(&mut self, now: Instant) -> Result<Option<MediaSource>, PlaybackError> {
        if self.playlist.next().is_none() {
            return Ok(None);
        }
        self.load_current(now).map(Some)
    }

    /// Loads the previous playlist item, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be loaded.
    pub fn previous_track(&mut self, now: Instant) -> Result<Option<MediaSource>, PlaybackError> {
        if self.playlist.previous().is_none() {
            return Ok(None);
        }
        self.load_current(now).map(Some)
    }

    fn load_current(&mut self, now: Instant) -> Result<MediaSource, PlaybackError> {
        let Some(source) = self.playlist.current().cloned() else {
            return Err(PlaybackError::Io("empty playlist".into()));
        };

        self.reset_media_state(now);
        self.track = Some(TrackInfo::from_file_name(&source));

        if let Err(err) = self.surface.load(&source) {
            tracing::warn!(path = %source.path().display(), error = %err, "failed to load media");
            return Err(err);
        }
        self.apply_output_settings();
        if let Some(duration) = self.surface.duration() {
            self.set_duration(MediaDuration::from_secs(duration));
        }
        tracing::info!(path = %source.path().display(), kind = ?source.kind(), "media loaded");

        if self.autoplay {
            self.play(now)?;
        }
        Ok(source)
    }

    fn reset_media_state(&mut self, now: Instant) {
        self.set_duration(MediaDuration::UNKNOWN);
        self.position = 0.0;
        self.buffered_percent = 0.0;
        self.transition_to(PlaybackState::Stopped, now);
    }

    /// Stores tags read for `path`, ignoring results for a source that is
    /// no longer current.
    pub fn set_track_info(&mut self, path: &Path, info: TrackInfo) -> bool {
        if self.current_source().is_some_and(|source| source.path() == path) {
            self.track = Some(info);
            true
        } else {
            false
        }
    }

    /// Fills in a duration read in the background for `path`.
    ///
    /// Ignored when the source is no longer current or the surface already
    /// reported a duration. The local file then counts as fully buffered.
    pub fn apply_header_duration(&mut self, path: &Path, secs: f64) -> bool {
        let current = self.current_source().is_some_and(|source| source.path() == path);
        let duration = MediaDuration::from_secs(secs);
        if !current || self.duration.is_known() || !duration.is_known() {
            return false;
        }
        tracing::debug!(path = %path.display(), secs, "duration read from headers");
        self.set_duration(duration);
        self.buffered_percent = 100.0;
        true
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to start.
    pub fn play(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.current_source().is_none() {
            return Ok(());
        }
        self.surface.play()?;
        self.transition_to(PlaybackState::Playing, now);
        Ok(())
    }

    pub fn pause(&mut self, now: Instant) {
        if self.state.is_playing() {
            self.surface.pause();
            self.transition_to(PlaybackState::Paused, now);
        }
    }

    /// Toggles between playing and paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to start.
    pub fn toggle_playback(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.state.is_playing() {
            self.pause(now);
            Ok(())
        } else {
            self.play(now)
        }
    }

    /// Pauses and rewinds to the start.
    pub fn stop(&mut self, now: Instant) {
        self.surface.pause();
        if let Err(err) = self.surface.seek(0.0) {
            tracing::debug!(error = %err, "rewind on stop failed");
        }
        self.position = 0.0;
        self.transition_to(PlaybackState::Stopped, now);
    }

    /// Seeks to an absolute position, clamped to the media.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot seek.
    pub fn seek_to(&mut self, secs: f64) -> Result<(), PlaybackError> {
        if self.current_source().is_none() || !secs.is_finite() {
            return Ok(());
        }
        let target = if self.duration.is_known() {
            secs.clamp(0.0, self.duration.secs())
        } else {
            secs.max(0.0)
        };
        self.surface.seek(target)?;
        self.position = target;
        Ok(())
    }

    /// Seeks by `steps` seek steps (negative rewinds).
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot seek.
    pub fn seek_relative(&mut self, steps: f64) -> Result<(), PlaybackError> {
        self.seek_to(self.position + steps * self.seek_step.value())
    }

    /// Seeks to a fraction (0 to 1) of the media, for the timeline slider.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot seek.
    pub fn seek_fraction(&mut self, fraction: f64) -> Result<(), PlaybackError> {
        if !self.duration.is_known() {
            return Ok(());
        }
        self.seek_to(fraction.clamp(0.0, 1.0) * self.duration.secs())
    }

    pub fn toggle_loop(&mut self) {
        self.loop_enabled = !self.loop_enabled;
        self.surface.set_loop(self.loop_enabled);
    }

    // =========================================================================
    // Volume
    // =========================================================================

    /// Applies a volume slider value. Zero mutes, anything else unmutes.
    pub fn set_volume(&mut self, value: f32) {
        self.volume = Volume::new(value);
        self.muted = self.volume.is_silent();
        self.apply_volume();
    }

    /// Keyboard volume change by `direction` volume steps.
    ///
    /// Reaching zero mutes; any audible result unmutes.
    pub fn adjust_volume(&mut self, direction: f32) {
        let adjusted = self.volume.adjust(direction * self.volume_step);
        if adjusted.is_silent() {
            self.volume = Volume::new(0.0);
            self.muted = true;
        } else {
            self.volume = adjusted;
            self.muted = false;
        }
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.apply_volume();
    }

    /// Volume actually sent to the surface.
    #[must_use]
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume.value()
        }
    }

    // =========================================================================
    // Speed
    // =========================================================================

    /// Applies a new committed speed to the surface.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        self.surface.set_playback_rate(speed.value());
        tracing::debug!(speed = speed.value(), "playback speed committed");
    }

    pub fn step_speed_up(&mut self) {
        self.set_speed(self.speed.step_up());
    }

    pub fn step_speed_down(&mut self) {
        self.set_speed(self.speed.step_down());
    }

    /// Opens the speed panel, seeded from the committed speed.
    ///
    /// Does nothing if a session is already open.
    pub fn open_speed_editor(&mut self, now: Instant) {
        if self.edit_session.is_some() {
            return;
        }
        self.edit_session = Some(SpeedEditSession::open(self.speed, self.duration));
        self.handle_controls(controls_visibility::Message::EditSessionOpened, now);
    }

    #[must_use]
    pub fn speed_editor(&self) -> Option<&SpeedEditSession> {
        self.edit_session.as_ref()
    }

    pub fn speed_editor_mut(&mut self) -> Option<&mut SpeedEditSession> {
        self.edit_session.as_mut()
    }

    /// Closes the panel, committing its candidate speed.
    ///
    /// Returns the committed speed, or `None` if no session was open or the
    /// candidate was rejected.
    pub fn commit_speed_editor(&mut self, now: Instant) -> Option<PlaybackSpeed> {
        let session = self.edit_session.take()?;
        self.handle_controls(controls_visibility::Message::EditSessionClosed, now);
        let speed = session.commit();
        match speed {
            Some(speed) => self.set_speed(speed),
            None => tracing::debug!("speed candidate rejected; keeping committed speed"),
        }
        speed
    }

    /// Closes the panel without changing the committed speed.
    pub fn cancel_speed_editor(&mut self, now: Instant) {
        if let Some(session) = self.edit_session.take() {
            session.cancel();
            self.handle_controls(controls_visibility::Message::EditSessionClosed, now);
        }
    }

    /// Closes the panel unless a text field is being edited.
    ///
    /// Returns true if the panel was closed.
    pub fn dismiss_speed_editor(&mut self, now: Instant) -> bool {
        match &self.edit_session {
            Some(session) if !session.is_editing_text() => {
                self.cancel_speed_editor(now);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Drains and applies all pending surface events.
    pub fn poll_surface(&mut self, now: Instant) -> Vec<Notice> {
        let events = self.surface.poll_events();
        events
            .into_iter()
            .filter_map(|event| self.apply_event(event, now))
            .collect()
    }

    /// Applies one surface event.
    pub fn apply_event(&mut self, event: SurfaceEvent, now: Instant) -> Option<Notice> {
        match event {
            SurfaceEvent::Play => {
                self.transition_to(PlaybackState::Playing, now);
                None
            }
            SurfaceEvent::Pause => {
                if self.state.is_playing() {
                    self.transition_to(PlaybackState::Paused, now);
                }
                None
            }
            SurfaceEvent::Ended => self.handle_ended(now),
            SurfaceEvent::TimeUpdate(secs) => {
                if secs.is_finite() && secs >= 0.0 {
                    self.position = secs;
                }
                None
            }
            SurfaceEvent::LoadedMetadata(secs) => {
                self.set_duration(MediaDuration::from_secs(secs));
                None
            }
            SurfaceEvent::Progress { buffered_end } => {
                self.buffered_percent = if self.duration.is_known() && buffered_end.is_finite() {
                    (buffered_end / self.duration.secs() * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };
                None
            }
        }
    }

    fn handle_ended(&mut self, now: Instant) -> Option<Notice> {
        if self.playlist.advance_on_end().is_none() {
            self.position = self.duration.secs();
            self.transition_to(PlaybackState::Paused, now);
            return Some(Notice::PlaylistFinished);
        }

        let result = self.load_current(now).and_then(|source| {
            if !self.state.is_playing() {
                self.play(now)?;
            }
            Ok(source)
        });
        Some(match result {
            Ok(source) => Notice::TrackStarted(source),
            Err(err) => Notice::Failed(err),
        })
    }

    // =========================================================================
    // Pointer and window
    // =========================================================================

    pub fn pointer_moved(&mut self, now: Instant) -> Effect {
        self.handle_controls(controls_visibility::Message::PointerMoved, now)
    }

    pub fn pointer_left(&mut self, now: Instant) -> Effect {
        self.handle_controls(controls_visibility::Message::PointerLeft, now)
    }

    pub fn fullscreen_changed(&mut self, fullscreen: bool, now: Instant) -> Effect {
        self.handle_controls(controls_visibility::Message::FullscreenChanged(fullscreen), now)
    }

    /// Advances the auto-hide clock.
    pub fn tick(&mut self, now: Instant) -> Effect {
        self.handle_controls(controls_visibility::Message::Tick, now)
    }

    pub fn set_dwell(&mut self, dwell: DwellWindow) {
        self.controls.set_dwell(dwell);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    #[must_use]
    pub fn duration(&self) -> MediaDuration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Played fraction (0 to 1) for the timeline.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_known() {
            (self.position / self.duration.secs()).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn buffered_percent(&self) -> f64 {
        self.buffered_percent
    }

    /// Current position as shown to the user, scaled by the committed speed.
    #[must_use]
    pub fn display_position(&self) -> String {
        format_time(self.scaled(self.position))
    }

    /// Total duration as shown to the user, scaled by the committed speed.
    #[must_use]
    pub fn display_duration(&self) -> String {
        format_time(self.scaled(self.duration.secs()))
    }

    fn scaled(&self, secs: f64) -> f64 {
        if self.speed.is_normal() {
            secs
        } else {
            secs / self.speed.value()
        }
    }

    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn current_source(&self) -> Option<&MediaSource> {
        self.playlist.current()
    }

    #[must_use]
    pub fn track_info(&self) -> Option<&TrackInfo> {
        self.track.as_ref()
    }

    #[must_use]
    pub fn controls(&self) -> &controls_visibility::State {
        &self.controls
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    #[must_use]
    pub fn cursor(&self) -> &H {
        &self.cursor
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            volume: self.volume,
            muted: self.muted,
            loop_enabled: self.loop_enabled,
            speed: self.speed,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn transition_to(&mut self, state: PlaybackState, now: Instant) {
        if self.state == state {
            return;
        }
        let was_playing = self.state.is_playing();
        self.state = state;
        match (was_playing, state.is_playing()) {
            (false, true) => {
                self.handle_controls(controls_visibility::Message::PlaybackStarted, now);
            }
            (true, false) => {
                self.handle_controls(controls_visibility::Message::PlaybackPaused, now);
            }
            _ => {}
        }
    }

    fn handle_controls(&mut self, msg: controls_visibility::Message, now: Instant) -> Effect {
        self.controls.handle(msg, now, &mut self.cursor)
    }

    fn set_duration(&mut self, duration: MediaDuration) {
        self.duration = duration;
        if let Some(session) = self.edit_session.as_mut() {
            session.set_media_duration(duration);
        }
    }

    fn apply_volume(&mut self) {
        let volume = self.effective_volume();
        self.surface.set_volume(volume);
    }

    fn apply_output_settings(&mut self) {
        self.apply_volume();
        self.surface.set_playback_rate(self.speed.value());
        self.surface.set_loop(self.loop_enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeSurface;

    fn controller() -> PlayerController<FakeSurface> {
        PlayerController::new(
            FakeSurface::with_duration(120.0),
            CursorFlag::default(),
            PlayerSettings::default(),
        )
    }

    fn source(name: &str) -> MediaSource {
        MediaSource::from_path(format!("/media/{name}")).expect("supported")
    }

    #[test]
    fn new_applies_output_settings() {
        let c = controller();
        assert!((c.surface().volume - volume_bounds::DEFAULT).abs() < f32::EPSILON);
        assert!((c.surface().rate - 1.0).abs() < f64::EPSILON);
        assert!(!c.surface().looping);
    }

    #[test]
    fn open_loads_first_item_and_reads_duration() {
        let mut c = controller();
        let now = Instant::now();
        let loaded = c.open(vec![source("a.mp3"), source("b.mp3")], now).expect("load");
        assert_eq!(loaded.map(|s| s.file_name()).as_deref(), Some("a.mp3"));
        assert!((c.duration().secs() - 120.0).abs() < f64::EPSILON);
        assert_eq!(c.state(), PlaybackState::Stopped);
        assert_eq!(c.track_info().map(|t| t.title.as_str()), Some("a"));
    }

    #[test]
    fn open_empty_unloads() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        assert_eq!(c.open(Vec::new(), now).expect("open"), None);
        assert!(c.current_source().is_none());
        assert!(!c.duration().is_known());
    }

    #[test]
    fn toggle_playback_drives_controls() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        assert!(c.controls_visible());

        c.toggle_playback(now).expect("play");
        assert!(c.is_playing());
        assert!(!c.controls_visible());

        c.toggle_playback(now).expect("pause");
        assert_eq!(c.state(), PlaybackState::Paused);
        assert!(c.controls_visible());
    }

    #[test]
    fn play_without_source_is_noop() {
        let mut c = controller();
        c.play(Instant::now()).expect("noop");
        assert!(!c.is_playing());
    }

    #[test]
    fn stop_rewinds() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.play(now).expect("play");
        c.seek_to(50.0).expect("seek");
        c.stop(now);
        assert_eq!(c.state(), PlaybackState::Stopped);
        assert!(c.position().abs() < f64::EPSILON);
        assert!(c.surface().position.abs() < f64::EPSILON);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.seek_to(500.0).expect("seek");
        assert!((c.position() - 120.0).abs() < f64::EPSILON);
        c.seek_relative(-20.0).expect("seek");
        assert!(c.position().abs() < f64::EPSILON);
        c.seek_fraction(0.25).expect("seek");
        assert!((c.position() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn volume_slider_zero_mutes() {
        let mut c = controller();
        c.set_volume(0.0);
        assert!(c.is_muted());
        c.set_volume(0.4);
        assert!(!c.is_muted());
        assert!((c.surface().volume - 0.4).abs() < 1e-6);
    }

    #[test]
    fn keyboard_volume_mutes_at_zero_and_unmutes_above() {
        let mut c = controller();
        c.set_volume(0.1);
        c.adjust_volume(-1.0);
        assert!(c.is_muted());
        assert!(c.surface().volume.abs() < f32::EPSILON);

        c.adjust_volume(1.0);
        assert!(!c.is_muted());
        assert!((c.volume().value() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn mute_keeps_stored_volume() {
        let mut c = controller();
        c.toggle_mute();
        assert!(c.effective_volume().abs() < f32::EPSILON);
        assert!((c.volume().value() - volume_bounds::DEFAULT).abs() < f32::EPSILON);
        c.toggle_mute();
        assert!((c.surface().volume - volume_bounds::DEFAULT).abs() < f32::EPSILON);
    }

    #[test]
    fn toggle_loop_reaches_surface() {
        let mut c = controller();
        c.toggle_loop();
        assert!(c.is_loop_enabled());
        assert!(c.surface().looping);
    }

    #[test]
    fn speed_steps_reach_surface() {
        let mut c = controller();
        c.step_speed_up();
        assert!((c.surface().rate - 1.25).abs() < f64::EPSILON);
        c.step_speed_down();
        c.step_speed_down();
        assert!((c.speed().value() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn commit_applies_candidate() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.open_speed_editor(now);
        c.speed_editor_mut().expect("open").select_preset(2.0);
        assert_eq!(c.commit_speed_editor(now).map(PlaybackSpeed::value), Some(2.0));
        assert!((c.surface().rate - 2.0).abs() < f64::EPSILON);
        assert!(c.speed_editor().is_none());
    }

    #[test]
    fn cancel_keeps_committed_speed() {
        let mut c = controller();
        let now = Instant::now();
        c.open_speed_editor(now);
        c.speed_editor_mut().expect("open").select_preset(4.0);
        c.cancel_speed_editor(now);
        assert!(c.speed().is_normal());
        assert!((c.surface().rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dismiss_is_refused_while_editing_text() {
        let mut c = controller();
        let now = Instant::now();
        c.open_speed_editor(now);
        c.speed_editor_mut().expect("open").set_speed_text("2");
        assert!(!c.dismiss_speed_editor(now));
        assert!(c.speed_editor().is_some());

        c.speed_editor_mut().expect("open").blur();
        assert!(c.dismiss_speed_editor(now));
        assert!(c.speed_editor().is_none());
    }

    #[test]
    fn loaded_metadata_reaches_open_session() {
        let mut c = PlayerController::new(
            FakeSurface::default(),
            CursorFlag::default(),
            PlayerSettings::default(),
        );
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.open_speed_editor(now);
        assert_eq!(c.speed_editor().expect("open").duration_text(), "");

        c.apply_event(SurfaceEvent::LoadedMetadata(90.0), now);
        assert_eq!(c.speed_editor().expect("open").duration_text(), "1:30");
    }

    #[test]
    fn header_duration_fills_unknown_duration_only() {
        let mut c = PlayerController::new(
            FakeSurface::default(),
            CursorFlag::default(),
            PlayerSettings::default(),
        );
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.open_speed_editor(now);

        assert!(!c.apply_header_duration(Path::new("/media/z.mp3"), 60.0));
        assert!(!c.apply_header_duration(Path::new("/media/a.mp3"), f64::NAN));
        assert!(!c.duration().is_known());

        assert!(c.apply_header_duration(Path::new("/media/a.mp3"), 60.0));
        assert_eq!(c.speed_editor().expect("open").duration_text(), "1:00");
        assert!((c.buffered_percent() - 100.0).abs() < f64::EPSILON);

        assert!(!c.apply_header_duration(Path::new("/media/a.mp3"), 90.0));
        assert_eq!(c.display_duration(), "1:00");
    }

    #[test]
    fn progress_updates_buffered_percent() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.apply_event(SurfaceEvent::Progress { buffered_end: 60.0 }, now);
        assert!((c.buffered_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ended_advances_then_finishes() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3"), source("b.mp3")], now).expect("load");
        c.play(now).expect("play");

        let notice = c.apply_event(SurfaceEvent::Ended, now);
        assert_eq!(notice, Some(Notice::TrackStarted(source("b.mp3"))));
        assert!(c.is_playing());

        let notice = c.apply_event(SurfaceEvent::Ended, now);
        assert_eq!(notice, Some(Notice::PlaylistFinished));
        assert_eq!(c.state(), PlaybackState::Paused);
        assert!(c.controls_visible());
    }

    #[test]
    fn display_times_scale_with_speed() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        c.apply_event(SurfaceEvent::TimeUpdate(60.0), now);
        assert_eq!(c.display_position(), "1:00");
        assert_eq!(c.display_duration(), "2:00");

        c.set_speed(PlaybackSpeed::new(2.0));
        assert_eq!(c.display_position(), "0:30");
        assert_eq!(c.display_duration(), "1:00");
    }

    #[test]
    fn stale_track_info_is_ignored() {
        let mut c = controller();
        let now = Instant::now();
        c.open(vec![source("a.mp3")], now).expect("load");
        let stale = TrackInfo::from_file_name(&source("z.mp3"));
        assert!(!c.set_track_info(Path::new("/media/z.mp3"), stale));
        assert_eq!(c.track_info().map(|t| t.title.as_str()), Some("a"));
    }

    #[test]
    fn autoplay_starts_on_load() {
        let mut c = PlayerController::new(
            FakeSurface::with_duration(10.0),
            CursorFlag::default(),
            PlayerSettings {
                autoplay: true,
                ..PlayerSettings::default()
            },
        );
        c.open(vec![source("a.mp3")], Instant::now()).expect("load");
        assert!(c.is_playing());
    }
}
