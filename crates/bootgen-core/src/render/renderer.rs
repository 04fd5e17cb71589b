//! Plan execution: verbatim copies and placeholder substitution

use crate::catalog::store::TemplateStore;
use crate::error::ScaffoldError;
use crate::render::plan::{ActionMode, OutputAction};
use crate::spring::config::ScaffoldConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder delimiters recognized in render-mode sources only.
const OPEN: &str = "<%=";
const CLOSE: &str = "%>";

/// Execute the plan in order, returning the paths written.
///
/// Excluded actions are skipped without any filesystem side effect. A
/// missing asset or failed write aborts the remaining actions; files
/// already written stay on disk.
pub fn render(
    actions: &[OutputAction],
    store: &TemplateStore,
    config: &ScaffoldConfig,
    dest_root: &Path,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut written = Vec::new();

    for action in actions {
        if !action.include {
            continue;
        }

        let contents = store.contents(&action.source)?;
        let dest = dest_root.join(&action.dest);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        match action.mode {
            ActionMode::Copy => write_bytes(&dest, contents)?,
            ActionMode::Render => {
                let text = std::str::from_utf8(contents).map_err(|_| {
                    ScaffoldError::TemplateNotText {
                        id: action.source.clone(),
                    }
                })?;
                write_bytes(&dest, interpolate(text, config).as_bytes())?;
            }
        }

        written.push(dest);
    }

    Ok(written)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ScaffoldError> {
    fs::write(path, bytes).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Substitute `<%= field %>` markers with configuration values.
///
/// Unknown fields substitute as empty text; an unterminated open marker
/// passes through literally.
pub fn interpolate(template: &str, config: &ScaffoldConfig) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) => {
                let field = after_open[..end].trim();
                out.push_str(&config.placeholder(field));
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
