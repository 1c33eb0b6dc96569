//! Compiled bindings and the lookup table the engine matches against

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::action::Action;
use crate::types::sequence::KeySequence;

/// A compiled association from a key sequence to an action.
///
/// Keeps the original uncanonicalized key and command specs so a table
/// can be exported, inspected and re-imported losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub sequence: KeySequence,
    pub source_text: String,
    pub command_text: String,
    pub action: Action,
}

/// Mapping from sequence serialization to binding.
///
/// Built by the compiler, owned by the engine after load. Read-only
/// during matching; reloads replace the whole table rather than mutating
/// it in place. Duplicate sequences are last-write-wins. Keys are kept
/// ordered so exports and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingTable {
    bindings: BTreeMap<String, Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding under its sequence serialization, replacing any
    /// earlier binding for the same sequence.
    pub fn insert(&mut self, binding: Binding) {
        self.bindings.insert(binding.sequence.serialize(), binding);
    }

    /// Looks up an exact sequence serialization.
    pub fn get(&self, serialized: &str) -> Option<&Binding> {
        self.bindings.get(serialized)
    }

    /// True iff at least one registered sequence has `serialized` as a
    /// strict prefix. Tokens never contain spaces, so the check is a
    /// plain string-prefix test against `"<serialized> "`.
    pub fn has_strict_prefix(&self, serialized: &str) -> bool {
        self.bindings.keys().any(|key| {
            key.len() > serialized.len()
                && key.starts_with(serialized)
                && key.as_bytes()[serialized.len()] == b' '
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Exports the table as a plain JSON object keyed by sequence
    /// serialization.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Re-imports a table exported with [`export_json`]. Round-tripping
    /// reproduces an equal table.
    ///
    /// [`export_json`]: BindingTable::export_json
    pub fn import_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Binding> for BindingTable {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        let mut table = BindingTable::new();
        for binding in iter {
            table.insert(binding);
        }
        table
    }
}
