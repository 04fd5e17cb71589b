//! Render plan types and plan execution
//!
//! This module provides:
//! - Output action types (copy vs. render, destination, inclusion)
//! - Plan execution against a template store and a destination root

pub mod plan;
pub mod renderer;

pub use plan::{ActionMode, OutputAction};
pub use renderer::{interpolate, render};
