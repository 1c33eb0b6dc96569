//! Resolved binding actions

use serde::{Deserialize, Serialize};

/// What a completed key sequence resolves to.
///
/// Produced once per binding at compile time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Place `text` at the caret. `caret` is an optional character
    /// offset into `text` where the caret should land, used by
    /// placeholder templates such as `\frac{}{}`; `None` means after
    /// the inserted text.
    Insert {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        caret: Option<usize>,
    },
    /// Opaque command, not further interpreted by the engine.
    Command { name: String },
}

impl Action {
    /// Creates a plain insert action with no caret hint.
    pub fn insert(text: impl Into<String>) -> Self {
        Action::Insert {
            text: text.into(),
            caret: None,
        }
    }

    /// Creates an insert action whose caret lands inside the text.
    pub fn insert_with_caret(text: impl Into<String>, caret: usize) -> Self {
        Action::Insert {
            text: text.into(),
            caret: Some(caret),
        }
    }

    /// Creates an opaque command action.
    pub fn command(name: impl Into<String>) -> Self {
        Action::Command { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let action = Action::insert_with_caret("\\frac{}{}", 6);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"kind":"insert","text":"\\frac{}{}","caret":6}"#);
    }

    #[test]
    fn test_caret_hint_omitted_when_absent() {
        let json = serde_json::to_string(&Action::insert("α")).unwrap();
        assert_eq!(json, r#"{"kind":"insert","text":"α"}"#);
    }
}
