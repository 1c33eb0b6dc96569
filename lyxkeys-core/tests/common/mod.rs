use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lyxkeys_core::{
    Action, ActionSink, Binding, BindingTable, EngineConfig, Error, KeyEvent, KeySequence,
    KeyToken, Result, SequenceEngine, TimeoutScheduler, TimerToken,
};

/// Builds a binding from a space-separated canonical label spec.
pub fn bind(spec: &str, action: Action) -> Binding {
    let sequence = KeySequence::new(spec.split(' ').map(KeyToken::from_label).collect())
        .expect("non-empty spec");
    Binding {
        source_text: spec.to_string(),
        command_text: String::new(),
        sequence,
        action,
    }
}

/// Builds a table from (label spec, action) pairs.
pub fn table(entries: &[(&str, Action)]) -> BindingTable {
    entries
        .iter()
        .map(|(spec, action)| bind(spec, action.clone()))
        .collect()
}

/// Records every arm/cancel call so tests can fire timers by hand.
#[derive(Debug, Default)]
pub struct SchedulerLog {
    pub armed: Vec<(TimerToken, Duration)>,
    pub cancelled: Vec<TimerToken>,
}

impl SchedulerLog {
    pub fn last_armed(&self) -> TimerToken {
        self.armed.last().expect("a timer was armed").0
    }
}

pub struct MockScheduler(pub Rc<RefCell<SchedulerLog>>);

impl TimeoutScheduler for MockScheduler {
    fn arm(&mut self, token: TimerToken, after: Duration) {
        self.0.borrow_mut().armed.push((token, after));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.0.borrow_mut().cancelled.push(token);
    }
}

/// Collects every dispatched action together with its originating event.
pub struct RecordingSink(pub Rc<RefCell<Vec<(Action, KeyEvent)>>>);

impl ActionSink for RecordingSink {
    fn apply(&mut self, action: &Action, event: &KeyEvent) -> Result<()> {
        self.0.borrow_mut().push((action.clone(), event.clone()));
        Ok(())
    }
}

/// Always fails, for exercising the dispatch boundary.
#[allow(dead_code)]
pub struct FailingSink;

impl ActionSink for FailingSink {
    fn apply(&mut self, _action: &Action, _event: &KeyEvent) -> Result<()> {
        Err(Error::Sink("no target".to_string()))
    }
}

pub struct Harness {
    pub engine: SequenceEngine,
    pub actions: Rc<RefCell<Vec<(Action, KeyEvent)>>>,
    pub scheduler: Rc<RefCell<SchedulerLog>>,
}

/// Creates an engine with the default config, a mock scheduler and a
/// recording sink, and loads `table` into it.
pub fn harness(table: BindingTable) -> Harness {
    let actions = Rc::new(RefCell::new(Vec::new()));
    let scheduler = Rc::new(RefCell::new(SchedulerLog::default()));
    let mut engine = SequenceEngine::new(
        EngineConfig::default(),
        Box::new(MockScheduler(scheduler.clone())),
        Box::new(RecordingSink(actions.clone())),
    );
    engine.load_bindings(table);
    Harness {
        engine,
        actions,
        scheduler,
    }
}
