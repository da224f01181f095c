//! Core types for the playback engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track information for queue management and playback
///
/// Immutable value owned by the caller. The engine never mutates a track;
/// queue construction copies tracks into new sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier from the platform backend
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Playable resource reference (resolved by the track source provider)
    pub url: String,

    /// Track duration, unknown until the resource reports metadata
    pub duration: Option<Duration>,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Replay the current track indefinitely
    Track,

    /// Wrap to the first track after the last
    Playlist,
}

/// Configuration for a playback unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial shuffle setting (default: false)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 1.0);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
    }

    #[test]
    fn track_creation() {
        let track = Track {
            id: "track1".to_string(),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            url: "https://cdn.example.com/track1.mp3".to_string(),
            duration: Some(Duration::from_secs(180)),
        };

        assert_eq!(track.id, "track1");
        assert_eq!(track.duration, Some(Duration::from_secs(180)));
    }
}
