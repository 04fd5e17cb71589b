//! Answer values and the collected answer set

use crate::error::ScaffoldError;
use std::collections::HashMap;

/// A single resolved answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Free-form text input.
    Text(String),

    /// The value of the chosen option of a single-choice question.
    Choice(String),

    /// The values of the chosen options of a multi-choice question.
    Selections(Vec<String>),

    /// A yes/no confirmation.
    Flag(bool),
}

impl Answer {
    /// Textual content of this answer, for text and single-choice answers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Flag content of this answer.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Selected values of a multi-choice answer.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Answers keyed by question, built once during collection.
///
/// Keys of skipped questions never appear. An entry is immutable once
/// inserted; a second insert under the same key is an error.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    entries: HashMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolved answer. Fails if the key is already present.
    pub fn insert(&mut self, key: &str, answer: Answer) -> Result<(), ScaffoldError> {
        if self.entries.contains_key(key) {
            return Err(ScaffoldError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), answer);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.entries.get(key)
    }

    /// Text of the answer under `key`. Errors when the key is unresolved,
    /// so that defaults and visibility functions cannot silently read
    /// questions that have not been asked yet.
    pub fn str(&self, key: &str) -> Result<&str, ScaffoldError> {
        let answer = self.require(key)?;
        answer.as_str().ok_or(ScaffoldError::AnswerKind {
            key: key.to_string(),
            expected: "text value",
        })
    }

    /// Flag answer under `key`, with the same strictness as [`Self::str`].
    pub fn flag(&self, key: &str) -> Result<bool, ScaffoldError> {
        let answer = self.require(key)?;
        answer.as_flag().ok_or(ScaffoldError::AnswerKind {
            key: key.to_string(),
            expected: "confirmation",
        })
    }

    /// Selections under `key`, with the same strictness as [`Self::str`].
    pub fn selections(&self, key: &str) -> Result<&[String], ScaffoldError> {
        let answer = self.require(key)?;
        answer.as_selections().ok_or(ScaffoldError::AnswerKind {
            key: key.to_string(),
            expected: "selection set",
        })
    }

    /// True iff `value` is among the selections under `key`.
    ///
    /// Lenient: a skipped or absent question reads as "not selected". The
    /// configuration deriver uses this to keep feature flags total.
    pub fn selected(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .and_then(Answer::as_selections)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// True iff the single-choice answer under `key` equals `value`.
    /// Lenient like [`Self::selected`].
    pub fn choice_is(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .and_then(Answer::as_str)
            .is_some_and(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, key: &str) -> Result<&Answer, ScaffoldError> {
        self.entries.get(key).ok_or(ScaffoldError::UnresolvedKey {
            key: key.to_string(),
        })
    }
}
