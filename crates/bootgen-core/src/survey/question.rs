//! Question declarations and the ordered questionnaire

use crate::error::ScaffoldError;
use crate::survey::answers::{Answer, AnswerSet};
use crate::survey::collector::{self, AcceptDefaults};
use std::collections::HashSet;

/// Computes a default from the answers resolved so far.
///
/// May only read keys declared earlier in the questionnaire; reading
/// anything else fails with [`ScaffoldError::UnresolvedKey`].
pub type DefaultFn = fn(&AnswerSet) -> Result<Answer, ScaffoldError>;

/// Decides whether a question is presented, from the answers resolved so
/// far. Same ordering restriction as [`DefaultFn`].
pub type VisibleFn = fn(&AnswerSet) -> Result<bool, ScaffoldError>;

/// Default behaviour of a question.
#[derive(Clone)]
pub enum DefaultValue {
    /// No default; text inputs fall back to the empty string.
    None,

    /// A fixed value, known when the questionnaire is built.
    Fixed(Answer),

    /// Computed from earlier answers at collection time.
    Computed(DefaultFn),
}

/// One selectable option of a single- or multi-choice question.
#[derive(Debug, Clone)]
pub struct Choice {
    /// Machine value stored in the answer set.
    pub value: &'static str,

    /// Label shown to the operator.
    pub label: &'static str,

    /// Part of the initial selection of a multi-choice question.
    pub preselected: bool,
}

impl Choice {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            preselected: false,
        }
    }

    pub fn preselected(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            preselected: true,
        }
    }
}

/// The input type of a question.
#[derive(Clone)]
pub enum QuestionKind {
    /// Single-line text input.
    Input,

    /// Choose exactly one option.
    Select(Vec<Choice>),

    /// Choose any number of options.
    MultiSelect(Vec<Choice>),

    /// Yes/no confirmation.
    Confirm,
}

/// A single question, identified by its key.
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub default: DefaultValue,
    pub visible_when: Option<VisibleFn>,
}

impl Question {
    pub fn input(key: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            prompt,
            kind: QuestionKind::Input,
            default: DefaultValue::None,
            visible_when: None,
        }
    }

    pub fn select(key: &'static str, prompt: &'static str, choices: Vec<Choice>) -> Self {
        Self {
            key,
            prompt,
            kind: QuestionKind::Select(choices),
            default: DefaultValue::None,
            visible_when: None,
        }
    }

    pub fn multi_select(key: &'static str, prompt: &'static str, choices: Vec<Choice>) -> Self {
        Self {
            key,
            prompt,
            kind: QuestionKind::MultiSelect(choices),
            default: DefaultValue::None,
            visible_when: None,
        }
    }

    pub fn confirm(key: &'static str, prompt: &'static str, default: bool) -> Self {
        Self {
            key,
            prompt,
            kind: QuestionKind::Confirm,
            default: DefaultValue::Fixed(Answer::Flag(default)),
            visible_when: None,
        }
    }

    /// Attach a fixed default.
    pub fn with_default(mut self, answer: Answer) -> Self {
        self.default = DefaultValue::Fixed(answer);
        self
    }

    /// Attach a default computed from earlier answers.
    pub fn with_computed_default(mut self, default: DefaultFn) -> Self {
        self.default = DefaultValue::Computed(default);
        self
    }

    /// Gate this question on earlier answers.
    pub fn visible_when(mut self, predicate: VisibleFn) -> Self {
        self.visible_when = Some(predicate);
        self
    }

    /// Resolve the default against the answers collected so far.
    pub fn resolve_default(&self, answers: &AnswerSet) -> Result<Option<Answer>, ScaffoldError> {
        match &self.default {
            DefaultValue::None => Ok(None),
            DefaultValue::Fixed(answer) => Ok(Some(answer.clone())),
            DefaultValue::Computed(default) => default(answers).map(Some),
        }
    }

    /// Whether this question is presented, given the answers so far.
    pub fn is_visible(&self, answers: &AnswerSet) -> Result<bool, ScaffoldError> {
        match self.visible_when {
            Some(predicate) => predicate(answers),
            None => Ok(true),
        }
    }
}

/// The ordered question list for one scaffold run.
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Validate the questionnaire before any prompting.
    ///
    /// Rejects duplicate keys, then dry-runs a defaults-accepting collection
    /// so that a default or visibility function referencing a later (or
    /// skipped) key fails here instead of mid-prompt.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.key) {
                return Err(ScaffoldError::DuplicateKey {
                    key: question.key.to_string(),
                });
            }
        }

        collector::collect(self, &mut AcceptDefaults).map(|_| ())
    }
}
