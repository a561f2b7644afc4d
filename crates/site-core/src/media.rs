//! Media Playback
//!
//! Transport state for the audio and video demo players, click-to-seek on
//! the progress bar, and the home page intro-to-loop video sequence.

use std::time::Duration;

use serde::Serialize;

/// How long the intro video plays before the loop cross-fades in
pub const INTRO_DURATION: Duration = Duration::from_secs(6);

/// Player transport state mirrored from the media element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Playback {
    pub playing: bool,
    /// Elapsed seconds
    pub current: f64,
    /// Total seconds, once metadata has loaded
    pub duration: Option<f64>,
}

impl Playback {
    pub const fn new() -> Self {
        Self {
            playing: false,
            current: 0.0,
            duration: None,
        }
    }

    /// Flip play/pause; returns the new playing flag
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Record the duration reported by `loadedmetadata`
    pub fn on_loaded(&mut self, duration: f64) {
        self.duration = usable_duration(duration);
    }

    /// Record the position reported by `timeupdate`
    pub fn on_time_update(&mut self, current: f64) {
        if current.is_finite() {
            self.current = current.max(0.0);
        }
    }

    /// Playback reached the end: stop and rewind
    pub fn on_ended(&mut self) {
        self.playing = false;
        self.current = 0.0;
    }

    /// Known, usable duration
    pub fn known_duration(&self) -> Option<f64> {
        self.duration.and_then(usable_duration)
    }

    /// Map a pointer position on the progress bar to a playback position.
    ///
    /// Returns `None` while the duration is unknown or the bar has no
    /// width; callers must leave the media element alone in that case.
    pub fn seek(&mut self, pointer_x: f64, bar_left: f64, bar_width: f64) -> Option<f64> {
        let duration = self.known_duration()?;
        if !(bar_width.is_finite() && bar_width > 0.0) || !pointer_x.is_finite() {
            return None;
        }

        let fraction = ((pointer_x - bar_left) / bar_width).clamp(0.0, 1.0);
        let target = fraction * duration;
        self.current = target;
        Some(target)
    }

    /// Elapsed share of the track, in percent
    pub fn progress(&self) -> f64 {
        self.known_duration()
            .map_or(0.0, |d| (self.current / d * 100.0).clamp(0.0, 100.0))
    }

    /// `elapsed / total` label
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_timestamp(self.current),
            format_timestamp(self.known_duration().unwrap_or(0.0))
        )
    }
}

fn usable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Format seconds as `m:ss`
pub fn format_timestamp(seconds: f64) -> String {
    // Partial seconds are not shown.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Which hero video is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum IntroPhase {
    #[default]
    Intro,
    Looping,
}

/// Intro video that hands over to a looping background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntroSequence {
    phase: IntroPhase,
}

impl IntroSequence {
    pub const fn new() -> Self {
        Self {
            phase: IntroPhase::Intro,
        }
    }

    pub const fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Called when the intro timer fires
    pub fn advance(&mut self) {
        if self.phase == IntroPhase::Intro {
            tracing::debug!("intro video handed over to loop");
            self.phase = IntroPhase::Looping;
        }
    }

    /// Opacity of the intro layer
    pub fn intro_opacity(&self) -> f64 {
        match self.phase {
            IntroPhase::Intro => 1.0,
            IntroPhase::Looping => 0.0,
        }
    }

    /// Opacity of the loop layer
    pub fn loop_opacity(&self) -> f64 {
        1.0 - self.intro_opacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_proportional() {
        let mut playback = Playback::new();
        playback.on_loaded(120.0);
        assert_eq!(playback.seek(175.0, 100.0, 100.0), Some(90.0));
        assert_eq!(playback.current, 90.0);
        assert_eq!(playback.progress(), 75.0);
    }

    #[test]
    fn test_seek_without_metadata_is_noop() {
        let mut playback = Playback::new();
        playback.on_time_update(4.0);
        assert_eq!(playback.seek(150.0, 100.0, 100.0), None);
        assert_eq!(playback.current, 4.0);

        playback.on_loaded(f64::NAN);
        assert_eq!(playback.seek(150.0, 100.0, 100.0), None);
        playback.on_loaded(f64::INFINITY);
        assert_eq!(playback.seek(150.0, 100.0, 100.0), None);
    }

    #[test]
    fn test_seek_clamps_to_bar() {
        let mut playback = Playback::new();
        playback.on_loaded(60.0);
        assert_eq!(playback.seek(20.0, 100.0, 200.0), Some(0.0));
        assert_eq!(playback.seek(900.0, 100.0, 200.0), Some(60.0));
        assert_eq!(playback.seek(150.0, 100.0, 0.0), None);
    }

    #[test]
    fn test_toggle_and_end() {
        let mut playback = Playback::new();
        assert!(playback.toggle());
        playback.on_time_update(30.0);
        playback.on_ended();
        assert!(!playback.playing);
        assert_eq!(playback.current, 0.0);
        assert!(playback.toggle());
        assert!(!playback.toggle());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(7.9), "0:07");
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
        let mut playback = Playback::new();
        playback.on_loaded(95.5);
        playback.on_time_update(12.2);
        assert_eq!(playback.time_label(), "0:12 / 1:35");
    }

    #[test]
    fn test_intro_sequence() {
        let mut intro = IntroSequence::new();
        assert_eq!(intro.phase(), IntroPhase::Intro);
        assert_eq!(intro.loop_opacity(), 0.0);
        intro.advance();
        assert_eq!(intro.phase(), IntroPhase::Looping);
        assert_eq!(intro.intro_opacity(), 0.0);
        intro.advance();
        assert_eq!(intro.phase(), IntroPhase::Looping);
        assert_eq!(INTRO_DURATION.as_secs(), 6);
    }
}
