//! Engine state management

use crate::engine::scheduler::TimerToken;
use crate::types::KeyToken;

/// Mutable matching state: the tokens accepted so far and the timer
/// guarding them. Empty pending tokens with no armed timer is the Idle
/// state; never persisted.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pending: Vec<KeyToken>,
    armed: Option<TimerToken>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[KeyToken] {
        &self.pending
    }

    pub fn push(&mut self, token: KeyToken) {
        self.pending.push(token);
    }

    /// Space-joined serialization of the pending tokens, the candidate
    /// lookup key.
    pub fn candidate(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.pending.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(token.as_str());
        }
        out
    }

    /// Discards pending tokens, handing back the timer token that must
    /// be cancelled, if one was armed.
    pub fn clear(&mut self) -> Option<TimerToken> {
        self.pending.clear();
        self.armed.take()
    }

    /// Records the newly armed timer, handing back the superseded one.
    pub fn arm(&mut self, token: TimerToken) -> Option<TimerToken> {
        self.armed.replace(token)
    }

    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }
}
