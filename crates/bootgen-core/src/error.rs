//! Error taxonomy for a scaffold run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures a scaffold run can surface.
///
/// Planning and derivation failures are fatal to the whole run; write
/// failures abort the remaining plan but leave earlier output on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A default or visibility function read a key that has not been
    /// answered at that point in the questionnaire.
    #[error("question '{key}' was referenced before it was answered")]
    UnresolvedKey { key: String },

    #[error("duplicate question key '{key}'")]
    DuplicateKey { key: String },

    /// An answer exists under `key` but has the wrong shape for the caller.
    #[error("answer for '{key}' is not a {expected}")]
    AnswerKind { key: String, expected: &'static str },

    #[error("template asset '{id}' is not registered in the catalog")]
    MissingTemplate { id: String },

    /// A render-mode source must be UTF-8 text.
    #[error("template asset '{id}' is not valid UTF-8")]
    TemplateNotText { id: String },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interaction with the operator failed (closed terminal, EOF).
    #[error("prompt failed")]
    Prompt(#[from] io::Error),
}
