// SPDX-License-Identifier: MPL-2.0
//! Media surface backed by `rodio`.
//!
//! Plays the audio stream of a file through the default output device.
//! The output stream is opened on first load, so the application starts
//! even without a sound device and reports the failure when media is opened.
//! Video frames are not rendered.

use crate::application::port::{MediaSurface, PlaybackError, SurfaceEvent};
use crate::domain::media::MediaSource;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct RodioSurface {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    current: Option<PathBuf>,
    duration: Option<f64>,
    playing: bool,
    volume: f32,
    rate: f64,
    looping: bool,
    events: Vec<SurfaceEvent>,
}

impl RodioSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            current: None,
            duration: None,
            playing: false,
            volume: 1.0,
            rate: 1.0,
            looping: false,
            events: Vec::new(),
        }
    }

    fn open_output_stream() -> Result<OutputStream, PlaybackError> {
        let mut stream = OutputStreamBuilder::from_default_device()
            .map_err(|err| PlaybackError::OutputUnavailable(err.to_string()))?
            .with_error_callback(|err| tracing::warn!(error = %err, "audio output error"))
            .open_stream_or_fallback()
            .map_err(|err| PlaybackError::OutputUnavailable(err.to_string()))?;
        stream.log_on_drop(false);
        Ok(stream)
    }

    /// Replaces the sink with a fresh one holding `path`, paused.
    ///
    /// Returns the decoder-reported duration.
    fn start_sink(&mut self, path: &Path) -> Result<Option<Duration>, PlaybackError> {
        if self.stream.is_none() {
            self.stream = Some(Self::open_output_stream()?);
        }
        let Some(stream) = self.stream.as_ref() else {
            return Err(PlaybackError::OutputUnavailable("no output stream".into()));
        };

        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let file = File::open(path)?;
        let source =
            Decoder::try_from(file).map_err(|err| PlaybackError::from_message(&err.to_string()))?;
        let total = source.total_duration();

        let sink = Sink::connect_new(stream.mixer());
        sink.pause();
        sink.set_volume(self.volume);
        #[allow(clippy::cast_possible_truncation)]
        sink.set_speed(self.rate as f32);
        sink.append(source);
        self.sink = Some(sink);
        Ok(total)
    }

    /// Restarts the current file from the top for looping.
    fn restart(&mut self) -> Result<(), PlaybackError> {
        let Some(path) = self.current.clone() else {
            return Ok(());
        };
        self.start_sink(&path)?;
        if let Some(sink) = &self.sink {
            sink.play();
        }
        self.events.push(SurfaceEvent::TimeUpdate(0.0));
        Ok(())
    }
}

impl Default for RodioSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaSurface for RodioSurface {
    fn load(&mut self, source: &MediaSource) -> Result<(), PlaybackError> {
        self.unload();

        let path = source.path();
        // Formats without a length in their stream headers report none here;
        // the app reads those in the background.
        let decoded = self.start_sink(path)?;
        let duration = decoded
            .filter(|d| !d.is_zero())
            .map(|d| d.as_secs_f64());

        self.current = Some(path.to_path_buf());
        self.duration = duration;
        if let Some(secs) = duration {
            self.events.push(SurfaceEvent::LoadedMetadata(secs));
            // Local files are fully available once opened.
            self.events.push(SurfaceEvent::Progress { buffered_end: secs });
        }
        tracing::debug!(path = %path.display(), duration = ?duration, "rodio source ready");
        Ok(())
    }

    fn unload(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current = None;
        self.duration = None;
        self.playing = false;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.current.is_none() {
            return Err(PlaybackError::Io("no media loaded".into()));
        }
        if self.sink.as_ref().is_none_or(Sink::empty) {
            // Finished earlier; start over like a media element does.
            self.restart()?;
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
        if !self.playing {
            self.playing = true;
            self.events.push(SurfaceEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        if self.playing {
            self.playing = false;
            self.events.push(SurfaceEvent::Pause);
        }
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), PlaybackError> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };
        sink.try_seek(Duration::from_secs_f64(position_secs.max(0.0)))
            .map_err(|err| PlaybackError::SeekFailed(format!("{err:?}")))?;
        self.events.push(SurfaceEvent::TimeUpdate(position_secs));
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
        if let Some(sink) = &self.sink {
            #[allow(clippy::cast_possible_truncation)]
            sink.set_speed(rate as f32);
        }
    }

    fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
    }

    fn current_time(&self) -> f64 {
        self.sink
            .as_ref()
            .map_or(0.0, |sink| sink.get_pos().as_secs_f64())
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        if self.playing {
            let finished = self.sink.as_ref().is_some_and(Sink::empty);
            if finished {
                if self.looping {
                    if let Err(err) = self.restart() {
                        tracing::warn!(error = %err, "failed to loop media");
                        self.playing = false;
                        self.events.push(SurfaceEvent::Pause);
                    }
                } else {
                    self.playing = false;
                    if let Some(secs) = self.duration {
                        self.events.push(SurfaceEvent::TimeUpdate(secs));
                    }
                    self.events.push(SurfaceEvent::Pause);
                    self.events.push(SurfaceEvent::Ended);
                }
            } else {
                self.events.push(SurfaceEvent::TimeUpdate(self.current_time()));
            }
        }
        std::mem::take(&mut self.events)
    }
}
