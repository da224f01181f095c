//! Platform-agnostic playback primitive trait
//!
//! Abstracts the native audio-playback resource for different platforms
//! (media element on web, AVPlayer on iOS, a decoder + output stack on
//! desktop, etc.)

use crate::error::Result;
use crate::events::PlaybackSignal;

/// Platform-agnostic playback primitive
///
/// Implementors bind one native audio resource: buffering, decoding, and
/// output live behind this trait. A [`PlaybackUnit`](crate::PlaybackUnit)
/// takes exclusive ownership of exactly one primitive; no other component
/// may touch the underlying resource.
///
/// Signals the native layer raises (`Ended`, `Error`, `TimeUpdate`,
/// `MetadataLoaded`) are queued inside the primitive and drained through
/// [`take_signals`](Self::take_signals) by the owning unit.
pub trait AudioPrimitive: Send {
    /// Set the resource to play and request buffering/preloading
    ///
    /// Replaces any prior source; loaded state for the old source is
    /// discarded. Readiness is signaled later via `MetadataLoaded` or
    /// `Error`.
    fn set_source(&mut self, url: &str);

    /// Detach the current source, releasing any buffered data
    fn clear_source(&mut self);

    /// Request playback start
    ///
    /// # Returns
    /// * `Ok(())` - playback has begun
    /// * `Err(_)` - the platform refused autoplay, the resource failed to
    ///   load, or the audio could not be decoded
    fn play(&mut self) -> Result<()>;

    /// Request playback stop; never fails
    fn pause(&mut self);

    /// Set playback position in seconds
    ///
    /// The caller validates range; implementors may assume
    /// `0 <= seconds <= duration()`.
    fn set_position(&mut self, seconds: f64);

    /// Current playback position in seconds
    fn position(&self) -> f64;

    /// Total duration in seconds, `0.0` until metadata has loaded
    fn duration(&self) -> f64;

    /// Set output volume
    ///
    /// The caller validates range; implementors may assume
    /// `0.0 <= volume <= 1.0`.
    fn set_volume(&mut self, volume: f32);

    /// Current output volume
    fn volume(&self) -> f32;

    /// Whether the primitive is currently paused (true when idle)
    fn is_paused(&self) -> bool;

    /// Drain signals queued by the native layer since the last call
    ///
    /// Returned in the order they occurred
    fn take_signals(&mut self) -> Vec<PlaybackSignal>;
}

/// Scriptable playback primitive for testing
///
/// Records transport calls and lets tests queue signals and force `play`
/// failures.
#[cfg(test)]
pub struct FakePrimitive {
    pub source: Option<String>,
    pub paused: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f32,
    pub queued_signals: Vec<PlaybackSignal>,
    pub play_result: Option<crate::error::PlaybackError>,
    pub cleared: u32,
}

#[cfg(test)]
impl FakePrimitive {
    pub fn new() -> Self {
        Self {
            source: None,
            paused: true,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            queued_signals: Vec::new(),
            play_result: None,
            cleared: 0,
        }
    }

    /// Pretend the resource reported metadata with the given duration
    pub fn with_metadata(duration: f64) -> Self {
        let mut primitive = Self::new();
        primitive.duration = duration;
        primitive
    }
}

#[cfg(test)]
impl AudioPrimitive for FakePrimitive {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.position = 0.0;
    }

    fn clear_source(&mut self) {
        self.source = None;
        self.position = 0.0;
        self.duration = 0.0;
        self.cleared += 1;
    }

    fn play(&mut self) -> Result<()> {
        if let Some(err) = self.play_result.take() {
            return Err(err);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn take_signals(&mut self) -> Vec<PlaybackSignal> {
        std::mem::take(&mut self.queued_signals)
    }
}
