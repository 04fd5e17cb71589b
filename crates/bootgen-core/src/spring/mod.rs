//! The Spring Boot service product model
//!
//! This module provides:
//! - The ordered question list a scaffold run collects
//! - Configuration derivation from the collected answers
//! - The render plan over the shipped template catalog

pub mod config;
pub mod plan;
pub mod questions;

pub use config::{Field, ScaffoldConfig};
pub use plan::plan;
pub use questions::questionnaire;
