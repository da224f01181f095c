//! Chorus - Playback Engine
//!
//! Platform-agnostic audio playback engine for Chorus.
//!
//! This crate provides:
//! - Pure queue navigation (build/rebuild, shuffle, repeat-aware
//!   next/previous resolution)
//! - A stateful playback unit wrapping one native playback resource
//! - Signal subscription (`Ended`, `Error`, `TimeUpdate`, `MetadataLoaded`)
//!
//! # Architecture
//!
//! `chorus-playback` is completely platform-agnostic: the native media
//! framework is reached only through the [`AudioPrimitive`] trait, which
//! each platform binds to its own playback stack. The engine itself never
//! decides what plays next - an external orchestrator listens for the
//! `Ended` signal, consults the [`navigator`] functions, and issues the
//! corresponding `load_track`/`play` calls. That boundary keeps both halves
//! independently testable.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use chorus_playback::navigator::{build_queue, next_track_index, should_continue_playback};
//! use chorus_playback::{RepeatMode, Track};
//!
//! let tracks = vec![
//!     Track {
//!         id: "a".to_string(),
//!         title: "First".to_string(),
//!         artist: "Artist".to_string(),
//!         url: "https://cdn.example.com/a.mp3".to_string(),
//!         duration: None,
//!     },
//!     Track {
//!         id: "b".to_string(),
//!         title: "Second".to_string(),
//!         artist: "Artist".to_string(),
//!         url: "https://cdn.example.com/b.mp3".to_string(),
//!         duration: None,
//!     },
//! ];
//!
//! let queue = build_queue(&tracks, false);
//! assert_eq!(next_track_index(0, queue.len(), RepeatMode::Off), Some(1));
//! assert!(!should_continue_playback(1, queue.len(), RepeatMode::Off));
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use chorus_playback::{AudioPrimitive, PlaybackSignal, PlaybackUnit, Result, SignalKind};
//!
//! // Bind AudioPrimitive to your platform's media framework
//! struct MyMediaElement {
//!     paused: bool,
//!     position: f64,
//!     duration: f64,
//!     volume: f32,
//!     signals: Vec<PlaybackSignal>,
//! }
//!
//! impl AudioPrimitive for MyMediaElement {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn clear_source(&mut self) {}
//!     fn play(&mut self) -> Result<()> {
//!         self.paused = false;
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!     fn set_position(&mut self, seconds: f64) {
//!         self.position = seconds;
//!     }
//!     fn position(&self) -> f64 {
//!         self.position
//!     }
//!     fn duration(&self) -> f64 {
//!         self.duration
//!     }
//!     fn set_volume(&mut self, volume: f32) {
//!         self.volume = volume;
//!     }
//!     fn volume(&self) -> f32 {
//!         self.volume
//!     }
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//!     fn take_signals(&mut self) -> Vec<PlaybackSignal> {
//!         std::mem::take(&mut self.signals)
//!     }
//! }
//!
//! let element = MyMediaElement {
//!     paused: true,
//!     position: 0.0,
//!     duration: 0.0,
//!     volume: 1.0,
//!     signals: Vec::new(),
//! };
//!
//! let mut unit = PlaybackUnit::new(Box::new(element));
//! unit.on(SignalKind::Ended, Box::new(|_| { /* advance the queue */ }));
//!
//! unit.load_track("https://cdn.example.com/a.mp3")?;
//! unit.play()?;
//! assert!(unit.is_playing());
//!
//! // Platform driver: forward queued signals on each tick
//! unit.poll_signals();
//!
//! unit.destroy();
//! # Ok::<(), chorus_playback::PlaybackError>(())
//! ```

mod error;
mod events;
pub mod navigator;
mod primitive;
pub mod types;
mod unit;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{HandlerId, PlaybackSignal, SignalDispatcher, SignalHandler, SignalKind};
pub use primitive::AudioPrimitive;
pub use types::{PlaybackConfig, RepeatMode, Track};
pub use unit::PlaybackUnit;
