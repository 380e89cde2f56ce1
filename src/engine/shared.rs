//! Thread-safe handle for engines driven by several callers.
//!
//! Every intent takes the lock and runs to completion before the next
//! one starts, so score and round always advance consistently.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::engine::Engine;
use super::intent::{CheckOutcome, Intent, SkipOutcome};
use super::snapshot::Snapshot;

/// Cloneable, serialized access to one `Engine`.
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
    snapshots: watch::Receiver<Arc<Snapshot>>,
}

impl SharedEngine {
    /// Wrap an engine for shared use.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let snapshots = engine.subscribe();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            snapshots,
        }
    }

    /// Apply an intent under the lock.
    pub fn dispatch(&self, intent: Intent) -> Arc<Snapshot> {
        self.lock().dispatch(intent)
    }

    /// Check the current guess.
    pub fn check(&self) -> CheckOutcome {
        self.lock().check()
    }

    /// Skip the current word.
    pub fn skip(&self) -> SkipOutcome {
        self.lock().skip()
    }

    /// Latest published snapshot, read without taking the engine lock.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Subscribe to snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.snapshots.clone()
    }

    // An intent cannot leave the snapshot half-written, so a poisoned
    // lock still guards a consistent engine.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
