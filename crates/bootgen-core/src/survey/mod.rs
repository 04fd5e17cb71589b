//! Question model and answer collection
//!
//! This module provides:
//! - Question declarations with defaults and conditional visibility
//! - The collected answer set
//! - Sequential collection against an exchangeable answer source

pub mod answers;
pub mod collector;
pub mod question;

pub use answers::{Answer, AnswerSet};
pub use collector::{collect, AcceptDefaults, AnswerSource, FixedAnswers};
pub use question::{Choice, DefaultValue, Question, QuestionKind, Questionnaire};
