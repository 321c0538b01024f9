//! Player State
//!
//! Playback position, volume and the static lecture metadata (AI highlights and
//! transcript). No media is decoded; "playing" is just a flag and seeking moves
//! the position marker.

use crate::constants::{DEFAULT_VOLUME, SKIP_STEP_SECS, VIDEO_DURATION_SECS};
use crate::helpers::parse_timestamp;

/// Kind of moment an AI highlight points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightCategory {
    Concept,
    Example,
    Demo,
    Tip,
}

impl HighlightCategory {
    pub fn label(self) -> &'static str {
        match self {
            HighlightCategory::Concept => "concept",
            HighlightCategory::Example => "example",
            HighlightCategory::Demo => "demo",
            HighlightCategory::Tip => "tip",
        }
    }
}

/// AI-generated highlight on the lecture timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub time: &'static str,
    pub title: &'static str,
    pub category: HighlightCategory,
}

/// One transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub time: &'static str,
    pub text: &'static str,
}

/// Title shown above the player
pub const LECTURE_TITLE: &str = "React Hooks Mastery";

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        time: "2:15",
        title: "React Hooks Introduction",
        category: HighlightCategory::Concept,
    },
    Highlight {
        time: "5:30",
        title: "useState Example",
        category: HighlightCategory::Example,
    },
    Highlight {
        time: "8:45",
        title: "useEffect Deep Dive",
        category: HighlightCategory::Concept,
    },
    Highlight {
        time: "12:20",
        title: "Custom Hook Demo",
        category: HighlightCategory::Demo,
    },
    Highlight {
        time: "15:10",
        title: "Best Practices",
        category: HighlightCategory::Tip,
    },
];

pub const TRANSCRIPT: &[TranscriptLine] = &[
    TranscriptLine {
        time: "0:00",
        text: "Welcome to this comprehensive tutorial on React Hooks, where we'll explore modern React development.",
    },
    TranscriptLine {
        time: "0:15",
        text: "In this video, we'll dive deep into useState, useEffect, and custom hooks with practical examples.",
    },
    TranscriptLine {
        time: "0:30",
        text: "Let's start with the fundamentals of state management in React functional components.",
    },
    TranscriptLine {
        time: "2:15",
        text: "React Hooks were introduced in React 16.8 as a revolutionary way to use state and lifecycle methods...",
    },
    TranscriptLine {
        time: "5:30",
        text: "Here's a practical example of useState in action with real-world scenarios...",
    },
];

/// Ephemeral playback state of the video view
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    position: u32,
    duration: u32,
    volume: u8,
    muted: bool,
    playing: bool,
    show_transcript: bool,
    fullscreen: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: 0,
            duration: VIDEO_DURATION_SECS,
            volume: DEFAULT_VOLUME,
            muted: false,
            playing: false,
            show_transcript: false,
            fullscreen: false,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Volume as heard: zero while muted
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn show_transcript(&self) -> bool {
        self.show_transcript
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the highlight list and transcript render below the player
    pub fn shows_details(&self, compact: bool) -> bool {
        !compact && !self.fullscreen
    }

    /// Relative position of a timestamp on the progress bar
    pub fn marker_fraction(&self, time: &str) -> Option<f32> {
        parse_timestamp(time).map(|seconds| Self::fraction_of(seconds, self.duration))
    }

    fn fraction_of(seconds: u32, duration: u32) -> f32 {
        if duration == 0 {
            return 0.0;
        }
        (seconds.min(duration) as f32) / (duration as f32)
    }

    // ==================== Setters ====================

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_transcript(&mut self) {
        self.show_transcript = !self.show_transcript;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Move to an absolute position, clamped to the lecture length
    pub fn seek(&mut self, seconds: u32) {
        self.position = seconds.min(self.duration);
    }

    /// Seek to a `m:ss` timestamp; malformed timestamps are ignored
    pub fn seek_to_timestamp(&mut self, time: &str) -> bool {
        match parse_timestamp(time) {
            Some(seconds) => {
                self.seek(seconds);
                true
            }
            None => false,
        }
    }

    pub fn skip_back(&mut self) {
        self.position = self.position.saturating_sub(SKIP_STEP_SECS);
    }

    pub fn skip_forward(&mut self) {
        self.seek(self.position.saturating_add(SKIP_STEP_SECS));
    }

    /// Seek to a slider position in seconds
    pub fn scrub(&mut self, seconds: f32) {
        self.seek(seconds.round().max(0.0) as u32);
    }

    /// Set volume in percent, clamped to 100
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    /// Set volume from a slider position
    pub fn scrub_volume(&mut self, percent: f32) {
        self.set_volume(percent.round().clamp(0.0, 100.0) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sample_lecture() {
        let player = PlayerState::new();
        assert_eq!(player.position(), 0);
        assert_eq!(player.duration(), 1200);
        assert_eq!(player.volume(), 80);
        assert!(!player.is_playing());
        assert!(!player.show_transcript());
    }

    #[test]
    fn clicking_a_highlight_seeks_to_it() {
        let mut player = PlayerState::new();
        assert!(player.seek_to_timestamp(HIGHLIGHTS[1].time));
        assert_eq!(player.position(), 330);

        assert!(player.seek_to_timestamp(TRANSCRIPT[3].time));
        assert_eq!(player.position(), 135);
    }

    #[test]
    fn malformed_timestamps_leave_position_alone() {
        let mut player = PlayerState::new();
        player.seek(42);
        assert!(!player.seek_to_timestamp("Current"));
        assert_eq!(player.position(), 42);
    }

    #[test]
    fn seeking_and_skipping_are_clamped() {
        let mut player = PlayerState::new();
        player.skip_back();
        assert_eq!(player.position(), 0);

        player.seek(5000);
        assert_eq!(player.position(), 1200);
        player.skip_forward();
        assert_eq!(player.position(), 1200);

        player.seek(100);
        player.skip_forward();
        assert_eq!(player.position(), 110);
    }

    #[test]
    fn mute_silences_without_losing_volume() {
        let mut player = PlayerState::new();
        player.set_volume(55);
        player.toggle_mute();
        assert_eq!(player.effective_volume(), 0);
        player.toggle_mute();
        assert_eq!(player.effective_volume(), 55);

        player.set_volume(180);
        assert_eq!(player.volume(), 100);
    }

    #[test]
    fn sliders_seek_and_set_volume() {
        let mut player = PlayerState::new();
        player.scrub(601.6);
        assert_eq!(player.position(), 602);
        player.scrub(-3.0);
        assert_eq!(player.position(), 0);
        player.scrub(9000.0);
        assert_eq!(player.position(), 1200);

        player.scrub_volume(42.4);
        assert_eq!(player.volume(), 42);
        player.scrub_volume(250.0);
        assert_eq!(player.volume(), 100);
    }

    #[test]
    fn fullscreen_hides_highlights_and_transcript() {
        let mut player = PlayerState::new();
        assert!(player.shows_details(false));
        assert!(!player.shows_details(true));

        player.toggle_fullscreen();
        assert!(player.is_fullscreen());
        assert!(!player.shows_details(false));

        player.toggle_fullscreen();
        assert!(player.shows_details(false));
    }

    #[test]
    fn highlight_markers_sit_inside_the_bar() {
        let player = PlayerState::new();
        for highlight in HIGHLIGHTS {
            let fraction = player
                .marker_fraction(highlight.time)
                .expect("valid highlight time");
            assert!((0.0..=1.0).contains(&fraction));
        }
        assert_eq!(player.marker_fraction("10:00"), Some(0.5));
    }
}
