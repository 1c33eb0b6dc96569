//! Output representation for the sequence engine

use crate::types::Action;

/// Result of processing one key event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// A sequence completed; the action was dispatched to the sink.
    Matched(Action),
    /// The tokens so far are a strict prefix of at least one binding;
    /// the engine is waiting for more keys.
    Pending,
    /// Dead end: no exact match and no binding has the tokens as a
    /// prefix. Pending input was discarded.
    NoMatch,
    /// The event was not considered at all (engine disabled, or a
    /// non-accelerator key outside an editable surface).
    Ignored,
}

impl KeyOutcome {
    /// Whether the caller should suppress the key's default effect on
    /// the host surface.
    pub fn handled(&self) -> bool {
        matches!(self, KeyOutcome::Matched(_) | KeyOutcome::Pending)
    }
}
