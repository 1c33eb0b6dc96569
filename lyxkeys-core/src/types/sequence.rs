//! Ordered key sequences and their serialized form

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::key::KeyToken;

/// An ordered, non-empty list of key tokens forming one multi-step
/// shortcut.
///
/// The serialization (tokens joined by a single space) is the lookup key
/// in the binding table; two sequences are equal iff their serializations
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct KeySequence {
    tokens: Vec<KeyToken>,
}

impl KeySequence {
    /// Creates a sequence from tokens. Returns `Error::EmptySequence`
    /// when `tokens` is empty.
    pub fn new(tokens: Vec<KeyToken>) -> Result<Self, Error> {
        if tokens.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-joined serialization, the binding table lookup key.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(token.as_str());
        }
        out
    }

    /// True iff `prefix` is a strict prefix of `self`: shorter, with all
    /// shared-position tokens equal.
    pub fn has_strict_prefix(&self, prefix: &KeySequence) -> bool {
        prefix.len() < self.len() && self.tokens[..prefix.len()] == prefix.tokens[..]
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<KeySequence> for String {
    fn from(sequence: KeySequence) -> Self {
        sequence.serialize()
    }
}

impl TryFrom<String> for KeySequence {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let tokens: Vec<KeyToken> = value
            .split_whitespace()
            .map(KeyToken::from_label)
            .collect();
        KeySequence::new(tokens)
    }
}
