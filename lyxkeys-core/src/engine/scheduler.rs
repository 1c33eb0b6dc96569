//! Collaborator traits at the engine boundary

use std::time::Duration;

use crate::engine::input::KeyEvent;
use crate::error::Result;
use crate::types::Action;

/// Identifies one armed timer. Each (re)arm mints a fresh token from a
/// monotonically increasing counter; the engine ignores timeout
/// notifications carrying any token other than the currently armed one,
/// so a timer that fires after its Pending run was abandoned is a no-op
/// even if the host scheduler failed to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub(crate) u64);

/// Host-provided single delayed callback.
///
/// The host must call [`SequenceEngine::notify_timeout`] with the armed
/// token when the delay elapses. `cancel` is advisory: a cancelled timer
/// that fires anyway is harmless because its token is stale.
///
/// [`SequenceEngine::notify_timeout`]: crate::engine::SequenceEngine::notify_timeout
pub trait TimeoutScheduler {
    fn arm(&mut self, token: TimerToken, after: Duration);
    fn cancel(&mut self, token: TimerToken);
}

/// Host-provided sink that applies a resolved action.
///
/// Receives the original key event so it knows where to apply the
/// action; the engine never assumes a target exists. Errors are caught
/// at the dispatch boundary and logged; they never corrupt engine state.
pub trait ActionSink {
    fn apply(&mut self, action: &Action, event: &KeyEvent) -> Result<()>;
}
