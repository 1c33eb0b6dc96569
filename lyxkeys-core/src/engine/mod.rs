//! LyXKeys sequence engine
//!
//! This module provides the state machine that consumes discrete
//! key-press events, matches them incrementally against the loaded
//! binding table, and dispatches resolved actions.

mod conflict;
mod engine;
mod input;
mod output;
mod scheduler;
mod state;

pub use conflict::{detect_conflicts, Conflict};
pub use engine::{
    EngineConfig, SequenceEngine, Statistics, DEFAULT_TIMEOUT_MS, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS,
};
pub use input::KeyEvent;
pub use output::KeyOutcome;
pub use scheduler::{ActionSink, TimeoutScheduler, TimerToken};

// Re-export error types
pub use crate::error::{Error, Result};
