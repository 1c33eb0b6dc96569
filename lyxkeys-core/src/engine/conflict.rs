//! Prefix conflict detection over a binding table

use std::fmt;

use crate::types::{BindingTable, KeySequence};

/// An unordered pair of registered sequences where one is a strict
/// prefix of the other. The shorter sequence always completes first, so
/// the longer one can never fire: every conflict identifies a binding
/// that is unreachable or that shadows another. Reported, not
/// auto-resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub prefix: KeySequence,
    pub extension: KeySequence,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.prefix, self.extension)
    }
}

/// Recomputes the full conflict set for a table.
///
/// Structural property of the table, recomputed wholesale on every load.
/// The result is sorted by (prefix, extension) serialization so the
/// report is independent of registration order.
pub fn detect_conflicts(table: &BindingTable) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let sequences: Vec<&KeySequence> = table.bindings().map(|b| &b.sequence).collect();

    for (i, &a) in sequences.iter().enumerate() {
        for &b in &sequences[i + 1..] {
            if b.has_strict_prefix(a) {
                conflicts.push(Conflict {
                    prefix: a.clone(),
                    extension: b.clone(),
                });
            } else if a.has_strict_prefix(b) {
                conflicts.push(Conflict {
                    prefix: b.clone(),
                    extension: a.clone(),
                });
            }
        }
    }

    conflicts.sort_by(|x, y| {
        (x.prefix.serialize(), x.extension.serialize())
            .cmp(&(y.prefix.serialize(), y.extension.serialize()))
    });
    conflicts
}
