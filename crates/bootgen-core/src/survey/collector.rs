//! Sequential answer collection against an exchangeable answer source

use crate::error::ScaffoldError;
use crate::survey::answers::{Answer, AnswerSet};
use crate::survey::question::{Choice, Question, QuestionKind, Questionnaire};
use std::collections::HashMap;

/// Obtains one value per presented question.
///
/// The interactive terminal implements this in production; tests and the
/// non-interactive mode drive the same collection loop through fixed or
/// default-accepting sources.
pub trait AnswerSource {
    fn input(&mut self, question: &Question, default: &str) -> Result<String, ScaffoldError>;

    fn select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<String, ScaffoldError>;

    fn multi_select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        preselected: &[&str],
    ) -> Result<Vec<String>, ScaffoldError>;

    fn confirm(&mut self, question: &Question, default: bool) -> Result<bool, ScaffoldError>;
}

/// Collect an answer for every visible question, in declaration order.
///
/// Visibility and defaults are evaluated against the answers accumulated so
/// far; a question whose visibility is false is skipped and its key never
/// enters the result.
pub fn collect(
    questionnaire: &Questionnaire,
    source: &mut dyn AnswerSource,
) -> Result<AnswerSet, ScaffoldError> {
    let mut answers = AnswerSet::new();

    for question in questionnaire.questions() {
        if !question.is_visible(&answers)? {
            continue;
        }

        let default = question.resolve_default(&answers)?;
        let answer = match &question.kind {
            QuestionKind::Input => {
                let default = default.as_ref().and_then(Answer::as_str).unwrap_or("");
                Answer::Text(source.input(question, default)?)
            }
            QuestionKind::Select(choices) => {
                let default = default.as_ref().and_then(Answer::as_str);
                Answer::Choice(source.select(question, choices, default)?)
            }
            QuestionKind::MultiSelect(choices) => {
                let preselected: Vec<&str> = choices
                    .iter()
                    .filter(|c| c.preselected)
                    .map(|c| c.value)
                    .collect();
                Answer::Selections(source.multi_select(question, choices, &preselected)?)
            }
            QuestionKind::Confirm => {
                let default = default.as_ref().and_then(Answer::as_flag).unwrap_or(false);
                Answer::Flag(source.confirm(question, default)?)
            }
        };

        answers.insert(question.key, answer)?;
    }

    Ok(answers)
}

/// Accepts every default without interaction.
///
/// Backs the `--yes` mode and questionnaire validation. Single-choice
/// questions without a default fall back to their first option; a
/// multi-choice selection is its preselected options.
pub struct AcceptDefaults;

impl AnswerSource for AcceptDefaults {
    fn input(&mut self, _question: &Question, default: &str) -> Result<String, ScaffoldError> {
        Ok(default.to_string())
    }

    fn select(
        &mut self,
        _question: &Question,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<String, ScaffoldError> {
        Ok(default
            .or_else(|| choices.first().map(|c| c.value))
            .unwrap_or_default()
            .to_string())
    }

    fn multi_select(
        &mut self,
        _question: &Question,
        _choices: &[Choice],
        preselected: &[&str],
    ) -> Result<Vec<String>, ScaffoldError> {
        Ok(preselected.iter().map(|v| v.to_string()).collect())
    }

    fn confirm(&mut self, _question: &Question, default: bool) -> Result<bool, ScaffoldError> {
        Ok(default)
    }
}

/// Answers drawn from a fixed map, falling back to defaults for keys the
/// map does not cover. The test-side replacement for the terminal.
#[derive(Default)]
pub struct FixedAnswers {
    overrides: HashMap<String, Answer>,
}

impl FixedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the answer for `key`.
    pub fn answer(mut self, key: &str, answer: Answer) -> Self {
        self.overrides.insert(key.to_string(), answer);
        self
    }

    fn mismatch(key: &str, expected: &'static str) -> ScaffoldError {
        ScaffoldError::AnswerKind {
            key: key.to_string(),
            expected,
        }
    }
}

impl AnswerSource for FixedAnswers {
    fn input(&mut self, question: &Question, default: &str) -> Result<String, ScaffoldError> {
        match self.overrides.get(question.key) {
            Some(answer) => answer
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| Self::mismatch(question.key, "text value")),
            None => Ok(default.to_string()),
        }
    }

    fn select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<String, ScaffoldError> {
        match self.overrides.get(question.key) {
            Some(answer) => answer
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| Self::mismatch(question.key, "choice value")),
            None => AcceptDefaults.select(question, choices, default),
        }
    }

    fn multi_select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        preselected: &[&str],
    ) -> Result<Vec<String>, ScaffoldError> {
        match self.overrides.get(question.key) {
            Some(answer) => answer
                .as_selections()
                .map(<[String]>::to_vec)
                .ok_or_else(|| Self::mismatch(question.key, "selection set")),
            None => AcceptDefaults.multi_select(question, choices, preselected),
        }
    }

    fn confirm(&mut self, question: &Question, default: bool) -> Result<bool, ScaffoldError> {
        match self.overrides.get(question.key) {
            Some(answer) => answer
                .as_flag()
                .ok_or_else(|| Self::mismatch(question.key, "confirmation")),
            None => Ok(default),
        }
    }
}
