//! The sequence matching state machine

use std::time::Duration;

use crate::engine::conflict::{detect_conflicts, Conflict};
use crate::engine::input::KeyEvent;
use crate::engine::output::KeyOutcome;
use crate::engine::scheduler::{ActionSink, TimeoutScheduler, TimerToken};
use crate::engine::state::EngineState;
use crate::types::{BindingTable, KeyToken};

/// Lower clamp for the inter-key timeout.
pub const MIN_TIMEOUT_MS: u64 = 500;
/// Upper clamp for the inter-key timeout.
pub const MAX_TIMEOUT_MS: u64 = 5000;
/// Timeout used when the host supplies none.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Constructor settings. The surrounding application owns persistence;
/// the engine only ever sees materialized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub enabled: bool,
    pub timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Counters reported by [`SequenceEngine::statistics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub bindings: usize,
    pub multi_step: usize,
    pub single_step: usize,
    pub conflicts: usize,
    pub enabled: bool,
    pub timeout_ms: u64,
}

/// The key-sequence recognition engine.
///
/// Consumes raw key events, advances the Idle/Pending/Disabled machine,
/// and dispatches exactly one resolved action (or none) per completed or
/// abandoned sequence. Explicitly constructed and injectable; one
/// instance per page context.
pub struct SequenceEngine {
    table: BindingTable,
    conflicts: Vec<Conflict>,
    state: EngineState,
    enabled: bool,
    timeout: Duration,
    next_timer: u64,
    scheduler: Box<dyn TimeoutScheduler>,
    sink: Box<dyn ActionSink>,
}

impl SequenceEngine {
    /// Creates an engine with an empty binding table.
    pub fn new(
        config: EngineConfig,
        scheduler: Box<dyn TimeoutScheduler>,
        sink: Box<dyn ActionSink>,
    ) -> Self {
        Self {
            table: BindingTable::new(),
            conflicts: Vec::new(),
            state: EngineState::new(),
            enabled: config.enabled,
            timeout: Duration::from_millis(config.timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS)),
            next_timer: 0,
            scheduler,
            sink,
        }
    }

    /// Replaces the binding table wholesale and recomputes conflicts.
    ///
    /// A sequence in progress is kept: its next key is matched against
    /// the new table.
    pub fn load_bindings(&mut self, table: BindingTable) {
        self.conflicts = detect_conflicts(&table);
        self.table = table;
        log::debug!(
            "loaded {} bindings ({} conflicts)",
            self.table.len(),
            self.conflicts.len()
        );
    }

    /// Processes one raw key event.
    ///
    /// The returned outcome's [`handled`] flag tells the caller whether
    /// to suppress the key's default effect on the host surface.
    ///
    /// [`handled`]: KeyOutcome::handled
    pub fn process_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if !self.enabled {
            return KeyOutcome::Ignored;
        }
        // Outside editable surfaces, only accelerator-style combos are
        // considered.
        if !event.editable && !event.ctrl && !event.alt {
            return KeyOutcome::Ignored;
        }

        self.state.push(KeyToken::from_event(event));
        let candidate = self.state.candidate();

        if let Some(binding) = self.table.get(&candidate) {
            let action = binding.action.clone();
            log::trace!("exact match: {candidate}");
            // Pending state is discarded before the sink runs, so a
            // failing sink cannot leave residual tokens behind.
            self.reset_pending();
            if let Err(err) = self.sink.apply(&action, event) {
                log::warn!("action sink failed for '{candidate}': {err}");
            }
            return KeyOutcome::Matched(action);
        }

        if self.table.has_strict_prefix(&candidate) {
            log::trace!("prefix match, awaiting more keys: {candidate}");
            self.rearm_timer();
            return KeyOutcome::Pending;
        }

        // Dead end. The triggering token is not retried as the start of
        // a new sequence.
        log::trace!("dead end: {candidate}");
        self.reset_pending();
        KeyOutcome::NoMatch
    }

    /// Reports a fired timer. Stale tokens (anything but the currently
    /// armed one) are ignored.
    pub fn notify_timeout(&mut self, token: TimerToken) {
        if self.state.armed() != Some(token) {
            return;
        }
        log::trace!("sequence abandoned on timeout: {}", self.state.candidate());
        self.state.clear();
    }

    /// Enables or disables the engine. Disabling discards any sequence
    /// in progress; re-enabling starts from Idle.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.reset_pending();
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the inter-key timeout, clamped to
    /// [[`MIN_TIMEOUT_MS`], [`MAX_TIMEOUT_MS`]]. An already-running
    /// timer keeps its old deadline; the new value applies from the
    /// next accepted token.
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout = Duration::from_millis(timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS));
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Tokens of the sequence currently in progress.
    pub fn current_pending(&self) -> &[KeyToken] {
        self.state.pending()
    }

    /// Conflict pairs detected in the loaded table.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn statistics(&self) -> Statistics {
        let multi_step = self
            .table
            .bindings()
            .filter(|b| b.sequence.len() > 1)
            .count();
        Statistics {
            bindings: self.table.len(),
            multi_step,
            single_step: self.table.len() - multi_step,
            conflicts: self.conflicts.len(),
            enabled: self.enabled,
            timeout_ms: self.timeout_ms(),
        }
    }

    /// Clears pending tokens and cancels the armed timer, if any.
    fn reset_pending(&mut self) {
        if let Some(stale) = self.state.clear() {
            self.scheduler.cancel(stale);
        }
    }

    /// Arms a fresh timer for the current pending run, cancelling the
    /// previous one first so no dangling timer outlives its state.
    fn rearm_timer(&mut self) {
        let token = TimerToken(self.next_timer);
        self.next_timer += 1;
        if let Some(stale) = self.state.arm(token) {
            self.scheduler.cancel(stale);
        }
        self.scheduler.arm(token, self.timeout);
    }
}
