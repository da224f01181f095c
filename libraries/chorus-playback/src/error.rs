//! Error types for the playback engine

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Resource could not be fetched or is not a valid audio resource
    #[error("Failed to load resource: {0}")]
    Load(String),

    /// Platform refused to start playback (e.g. autoplay policy)
    #[error("Playback blocked by platform")]
    PlaybackBlocked,

    /// Audio data is unsupported or corrupt
    #[error("Failed to decode audio: {0}")]
    Decode(String),

    /// No track has been loaded yet
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Empty resource URL passed to `load_track`
    #[error("Empty resource URL")]
    EmptyUrl,

    /// Operation on a unit that has already been destroyed
    #[error("Playback unit has been destroyed")]
    UnitDestroyed,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
