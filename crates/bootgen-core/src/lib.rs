//! Bootgen Core - Shared library for the `bootgen` scaffolding CLI
//!
//! This library turns a short interactive questionnaire into a freshly
//! rendered Spring Boot service tree. It is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure building blocks: question
//!   declarations, answer collection, configuration derivation, render
//!   planning, and plan execution
//! - **Layer 2: Catalog Access** - Template catalog loading from a local
//!   directory, manifest parsing, version compatibility checking
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use bootgen_core::{catalog::TemplateStore, render, spring, survey};
//!
//! let questionnaire = spring::questionnaire("widget", &Default::default());
//! questionnaire.validate()?;
//! let answers = survey::collect(&questionnaire, &mut survey::AcceptDefaults)?;
//! let config = spring::ScaffoldConfig::derive(&answers);
//! let store = TemplateStore::from_dir(Path::new("templates"))?;
//! render::render(&spring::plan(&config), &store, &config, Path::new("out"))?;
//! ```

pub mod catalog;
pub mod error;
pub mod render;
pub mod runtime;
pub mod spring;
pub mod survey;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{CatalogManifest, TemplateStore};
pub use error::ScaffoldError;
pub use render::{ActionMode, OutputAction};
pub use spring::ScaffoldConfig;
pub use survey::{Answer, AnswerSet, AnswerSource, Question, Questionnaire};

#[cfg(feature = "tui")]
pub use tui::run;
