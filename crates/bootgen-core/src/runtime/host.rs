//! Host probes seeding question defaults (git identity, directory name)

use std::path::Path;
use std::process::Command;

/// Git author identity read from `git config`.
#[derive(Debug, Clone, Default)]
pub struct GitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Read the configured git user, if any. Probed once before prompting so
/// the question model itself stays free of side effects.
pub fn git_identity() -> GitIdentity {
    GitIdentity {
        name: git_config("user.name"),
        email: git_config("user.email"),
    }
}

fn git_config(key: &str) -> Option<String> {
    let output = Command::new("git").args(["config", "--get", key]).output();

    match output {
        Ok(out) if out.status.success() => {
            let value = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        }
        _ => None,
    }
}

/// Kebab-cased name of the directory a project is scaffolded into, used as
/// the base-name default.
pub fn project_name(dir: &Path) -> String {
    let raw = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    kebab_case(&raw)
}

/// Lowercase `raw`, separating words with single dashes.
fn kebab_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && !out.is_empty() && !pending_dash {
                out.push('-');
            }
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}
