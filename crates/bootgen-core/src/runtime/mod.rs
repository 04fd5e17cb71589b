//! Host environment probing
//!
//! This module provides:
//! - Git identity detection for author defaults
//! - Project name derivation from the destination directory

pub mod host;

pub use host::{git_identity, project_name, GitIdentity};
