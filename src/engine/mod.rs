//! Game engine: intents in, snapshots out.
//!
//! - `Engine`: owns the session and applies intents sequentially
//! - `Snapshot`: the immutable state published after every intent
//! - `Intent`: what a presentation layer may ask for
//! - `SharedEngine`: lock-serialized handle for concurrent callers

#[allow(clippy::module_inception)]
mod engine;
mod intent;
mod shared;
mod snapshot;

pub use engine::Engine;
pub use intent::{CheckOutcome, Intent, SkipOutcome};
pub use shared::SharedEngine;
pub use snapshot::{Phase, Snapshot};
