pub mod error;
pub mod types;
pub mod engine;

pub use types::*;

// Re-export commonly used types
pub use types::key::KeyToken;
pub use types::sequence::KeySequence;
pub use types::action::Action;
pub use types::table::{Binding, BindingTable};
pub use error::{Error, Result};
pub use engine::{
    ActionSink, Conflict, EngineConfig, KeyEvent, KeyOutcome, SequenceEngine, Statistics,
    TimeoutScheduler, TimerToken,
};
