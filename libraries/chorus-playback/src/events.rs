//! Playback signals and subscription
//!
//! Signal-based communication between the playback unit and external code.
//! Signals originate in the native playback primitive and are re-broadcast
//! to registered handlers:
//! - `Ended` when a track finishes naturally
//! - `Error` for failures that occur after a successful load
//! - `TimeUpdate` for periodic position reports
//! - `MetadataLoaded` once the resource reports its duration

use serde::{Deserialize, Serialize};

/// Signals emitted by the playback primitive and re-broadcast by the unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackSignal {
    /// Current track finished playing naturally (reached end)
    Ended,

    /// Playback failed after a successful load (e.g. mid-stream decode error)
    Error {
        /// Error message from the native layer
        message: String,
    },

    /// Periodic position report during playback
    TimeUpdate {
        /// Current playback position in seconds
        position: f64,
        /// Total track duration in seconds (0.0 until metadata loads)
        duration: f64,
    },

    /// Resource metadata became available
    MetadataLoaded {
        /// Reported track duration in seconds
        duration: f64,
    },
}

impl PlaybackSignal {
    /// Discriminant used to key handler subscription
    pub fn kind(&self) -> SignalKind {
        match self {
            PlaybackSignal::Ended => SignalKind::Ended,
            PlaybackSignal::Error { .. } => SignalKind::Error,
            PlaybackSignal::TimeUpdate { .. } => SignalKind::TimeUpdate,
            PlaybackSignal::MetadataLoaded { .. } => SignalKind::MetadataLoaded,
        }
    }
}

/// Payload-free signal discriminant for subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Track finished naturally
    Ended,
    /// Post-load playback failure
    Error,
    /// Periodic position report
    TimeUpdate,
    /// Resource metadata available
    MetadataLoaded,
}

/// Handle returned by [`SignalDispatcher::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Handler invoked with the signal that triggered it
pub type SignalHandler = Box<dyn FnMut(&PlaybackSignal)>;

/// Ordered per-kind handler lists
///
/// Handlers for a kind run in registration order on `emit`. No locking:
/// the dispatcher is driven from a single logical thread of control, the
/// same model as the unit that owns it.
#[derive(Default)]
pub struct SignalDispatcher {
    handlers: Vec<(SignalKind, HandlerId, SignalHandler)>,
    next_id: u64,
}

impl SignalDispatcher {
    /// Create a dispatcher with no subscribers
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a handler for a signal kind
    ///
    /// The handler is appended after any existing handlers for the kind.
    /// Returns an id for later removal via [`off`](Self::off).
    pub fn on(&mut self, kind: SignalKind, handler: SignalHandler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((kind, id, handler));
        id
    }

    /// Remove the first handler registered under `kind` with the given id
    ///
    /// Returns true if a handler was removed
    pub fn off(&mut self, kind: SignalKind, id: HandlerId) -> bool {
        if let Some(pos) = self
            .handlers
            .iter()
            .position(|(k, h, _)| *k == kind && *h == id)
        {
            self.handlers.remove(pos);
            true
        } else {
            false
        }
    }

    /// Invoke every handler registered for the signal's kind, in order
    pub fn emit(&mut self, signal: &PlaybackSignal) {
        let kind = signal.kind();
        for (k, _, handler) in &mut self.handlers {
            if *k == kind {
                handler(signal);
            }
        }
    }

    /// Remove every registered handler
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of registered handlers across all kinds
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for SignalDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalDispatcher")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
