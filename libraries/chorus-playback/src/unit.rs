//! Playback unit - stateful wrapper around one playback primitive
//!
//! Presents a uniform transport API plus a signal subscription surface,
//! decoupling the rest of the system from the underlying media framework.
//! Queue advancement lives outside: an orchestrator listens for `Ended`,
//! consults the [`navigator`](crate::navigator) functions, and issues the
//! next `load_track`/`play` pair.

use crate::{
    error::{PlaybackError, Result},
    events::{HandlerId, SignalDispatcher, SignalHandler, SignalKind},
    primitive::AudioPrimitive,
    types::PlaybackConfig,
};
use tracing::{debug, warn};

/// Stateful wrapper around exactly one native playback resource
///
/// Single-threaded, no internal locking: the unit assumes it is driven from
/// one logical thread of control. It does not serialize overlapping
/// `load_track`/`play` calls - a load issued while a prior one is pending
/// simply reassigns the source, with no cancellation signal for the
/// superseded load. The unit performs no retries; retry/backoff policy
/// belongs to the orchestrator.
///
/// Lifecycle: construct, `load_track` any number of times, `destroy` once.
/// After `destroy` the unit is terminated: fallible operations return
/// [`PlaybackError::UnitDestroyed`], infallible transport operations become
/// no-ops.
pub struct PlaybackUnit {
    /// Exclusively owned native resource
    primitive: Box<dyn AudioPrimitive>,

    /// Subscribers for re-broadcast primitive signals
    dispatcher: SignalDispatcher,

    /// Most recently loaded resource reference
    current_url: Option<String>,

    /// Set once by `destroy`
    destroyed: bool,
}

impl PlaybackUnit {
    /// Create a unit over a platform primitive
    ///
    /// Takes exclusive ownership of the primitive. No resource is loaded
    /// yet.
    pub fn new(primitive: Box<dyn AudioPrimitive>) -> Self {
        Self {
            primitive,
            dispatcher: SignalDispatcher::new(),
            current_url: None,
            destroyed: false,
        }
    }

    /// Create a unit and apply configured defaults
    pub fn with_config(primitive: Box<dyn AudioPrimitive>, config: &PlaybackConfig) -> Self {
        let mut unit = Self::new(primitive);
        unit.set_volume(config.volume);
        unit
    }

    // ===== Loading =====

    /// Set the unit's source and request buffering
    ///
    /// Discards any prior loaded state. Returns once the load request has
    /// been issued; readiness arrives asynchronously as `MetadataLoaded` or
    /// `Error` signals.
    pub fn load_track(&mut self, url: &str) -> Result<()> {
        if self.destroyed {
            return Err(PlaybackError::UnitDestroyed);
        }
        if url.is_empty() {
            return Err(PlaybackError::EmptyUrl);
        }

        debug!("Loading track: {}", url);
        self.primitive.set_source(url);
        self.current_url = Some(url.to_string());
        Ok(())
    }

    // ===== Transport =====

    /// Request playback start
    ///
    /// On success, [`is_playing`](Self::is_playing) reports true. Failures
    /// (autoplay refused, resource failed to load or decode) are returned to
    /// the caller; failures occurring after a successful start surface only
    /// through the `Error` signal.
    pub fn play(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(PlaybackError::UnitDestroyed);
        }
        if self.current_url.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        self.primitive.play()?;
        debug!("Playback started");
        Ok(())
    }

    /// Request playback stop
    ///
    /// Always succeeds from the caller's point of view, even if nothing was
    /// playing.
    pub fn pause(&mut self) {
        if self.destroyed {
            return;
        }
        self.primitive.pause();
    }

    /// Set playback position, in seconds
    ///
    /// Applies only when `0 <= seconds <= duration()`; anything else is a
    /// silent no-op - not clamped, not an error. Callers must not rely on
    /// out-of-range seeks being corrected for them.
    pub fn seek(&mut self, seconds: f64) {
        if self.destroyed {
            return;
        }

        let duration = self.primitive.duration();
        if seconds >= 0.0 && seconds <= duration {
            self.primitive.set_position(seconds);
        } else {
            debug!("Ignoring out-of-range seek: {} (duration {})", seconds, duration);
        }
    }

    // ===== State queries =====

    /// Primitive's reported position in seconds
    pub fn current_time(&self) -> f64 {
        if self.destroyed {
            return 0.0;
        }
        self.primitive.position()
    }

    /// Primitive's reported duration in seconds, `0.0` until metadata loads
    pub fn duration(&self) -> f64 {
        if self.destroyed {
            return 0.0;
        }
        self.primitive.duration()
    }

    /// Most recently loaded resource reference, if any
    pub fn current_track_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Live query of the primitive's playing flag (not cached)
    pub fn is_playing(&self) -> bool {
        !self.destroyed && !self.primitive.is_paused()
    }

    // ===== Volume =====

    /// Set output volume
    ///
    /// Applies only when `0.0 <= volume <= 1.0`; out-of-range values are
    /// ignored, not clamped - mirrors the seek contract.
    pub fn set_volume(&mut self, volume: f32) {
        if self.destroyed {
            return;
        }

        if (0.0..=1.0).contains(&volume) {
            self.primitive.set_volume(volume);
        } else {
            debug!("Ignoring out-of-range volume: {}", volume);
        }
    }

    /// Current output volume
    pub fn volume(&self) -> f32 {
        if self.destroyed {
            return 0.0;
        }
        self.primitive.volume()
    }

    // ===== Signal subscription =====

    /// Register a handler for a signal kind
    ///
    /// Handlers for a kind run in registration order. Returns an id for
    /// [`off`](Self::off).
    pub fn on(&mut self, kind: SignalKind, handler: SignalHandler) -> HandlerId {
        self.dispatcher.on(kind, handler)
    }

    /// Remove a previously registered handler
    pub fn off(&mut self, kind: SignalKind, id: HandlerId) -> bool {
        self.dispatcher.off(kind, id)
    }

    /// Forward signals queued by the native layer to subscribers
    ///
    /// The platform driver calls this on its scheduling tick. Signals are
    /// dispatched in the order the primitive raised them.
    pub fn poll_signals(&mut self) {
        if self.destroyed {
            return;
        }

        for signal in self.primitive.take_signals() {
            self.dispatcher.emit(&signal);
        }
    }

    // ===== Teardown =====

    /// Tear the unit down
    ///
    /// Pauses, clears the source, removes every subscriber, and clears the
    /// stored track reference. Never fails, safe to call when nothing was
    /// ever loaded, and safe to call more than once. The unit must not be
    /// reused afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        debug!("Destroying playback unit");
        self.primitive.pause();
        self.primitive.clear_source();
        self.dispatcher.clear();
        self.current_url = None;
        self.destroyed = true;
    }

    /// Whether `destroy` has been called
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl std::fmt::Debug for PlaybackUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackUnit")
            .field("current_url", &self.current_url)
            .field("destroyed", &self.destroyed)
            .field("subscribers", &self.dispatcher.len())
            .finish()
    }
}

impl Drop for PlaybackUnit {
    fn drop(&mut self) {
        if !self.destroyed {
            warn!("Playback unit dropped without destroy(); tearing down");
            self.destroy();
        }
    }
}
