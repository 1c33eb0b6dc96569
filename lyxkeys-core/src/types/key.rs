//! Canonical key token representation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::KeyEvent;

/// Canonical string label for one physical key press plus its modifiers.
///
/// The label is built from the active modifiers in the fixed order
/// Ctrl, Alt, Shift, Meta, joined to the key identifier with `+`:
/// `Alt+m`, `Ctrl+Shift+ArrowUp`, `Meta+Enter`. The same physical press
/// always yields the same token within one process run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyToken(String);

impl KeyToken {
    /// Builds a token from a raw key event, applying the case rule.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut label = String::new();
        if event.ctrl {
            label.push_str("Ctrl+");
        }
        if event.alt {
            label.push_str("Alt+");
        }
        if event.shift {
            label.push_str("Shift+");
        }
        if event.meta {
            label.push_str("Meta+");
        }
        label.push_str(&canonical_key_name(&event.key, event.shift));
        KeyToken(label)
    }

    /// Wraps an already-canonical label produced by the binding compiler.
    pub fn from_label(label: impl Into<String>) -> Self {
        KeyToken(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes a raw key identifier.
///
/// A single printable character stays uppercase only when Shift produced
/// an uppercase form; every other single character folds to lowercase.
/// Multi-character key names (`Enter`, `F5`, ...) pass through unchanged.
/// The space character becomes `Space` so that tokens never contain the
/// sequence-serialization separator.
fn canonical_key_name(key: &str, shift: bool) -> String {
    if key == " " {
        return "Space".to_string();
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            if shift && ch.is_uppercase() {
                ch.to_string()
            } else {
                ch.to_lowercase().collect()
            }
        }
        _ => key.to_string(),
    }
}
