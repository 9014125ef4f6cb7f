//! In-place KEY=VALUE file merge
//!
//! The agent's persisted config is a line-oriented env file. Known keys are
//! updated in place and new keys appended, so settings an operator added by
//! hand survive re-runs untouched.

use crate::error::{Result, SetupError};
use std::fs;
use std::path::Path;

/// Set `key` to `value` in the file at `path`.
///
/// Replaces the first `KEY=...` line if the key exists at line start, drops
/// any duplicate lines for the same key, and appends the key if absent. All
/// other lines are preserved as-is. Creates the file if missing.
pub fn upsert(path: &Path, key: &str, value: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(SetupError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let merged = merge(&existing, key, value);
    fs::write(path, merged).map_err(|e| SetupError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pure merge over file content; see [`upsert`].
pub fn merge(content: &str, key: &str, value: &str) -> String {
    let prefix = format!("{}=", key);
    let mut out = String::new();
    let mut written = false;

    for line in content.lines() {
        if line.starts_with(&prefix) {
            if !written {
                out.push_str(&prefix);
                out.push_str(value);
                out.push('\n');
                written = true;
            }
            // duplicate managed key: collapsed
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    if !written {
        out.push_str(&prefix);
        out.push_str(value);
        out.push('\n');
    }

    out
}
