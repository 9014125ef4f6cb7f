//! Runtime discovery
//!
//! Scan the candidate table most-preferred-first and take the first Python
//! meeting the version floor. First-fit: once a candidate qualifies, later
//! (possibly newer) candidates are never probed. A candidate below the floor
//! is skipped, not an error; only an empty result is fatal.

use crate::constants::{RUNTIME_CANDIDATES, RUNTIME_FLOOR};
use crate::error::{Result, SetupError};
use crate::ui;
use crate::utils::run;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct RuntimeCandidate {
    pub path: PathBuf,
    pub version: (u32, u32),
}

pub fn locate() -> Result<RuntimeCandidate> {
    // Lazy: first_fit stops pulling (and therefore probing) at the first hit.
    let probed = RUNTIME_CANDIDATES.iter().filter_map(|name| {
        let path = which::which(name).ok()?;
        let version = query_version(&path)?;
        if !meets_floor(version, RUNTIME_FLOOR) {
            ui::detail(&format!(
                "{} is {}.{}, below floor {}.{}",
                name, version.0, version.1, RUNTIME_FLOOR.0, RUNTIME_FLOOR.1
            ));
        }
        Some((RuntimeCandidate { path, version }, version))
    });

    match first_fit(probed, RUNTIME_FLOOR) {
        Some(candidate) => {
            ui::success(&format!(
                "Using {} ({}.{})",
                candidate.path.display(),
                candidate.version.0,
                candidate.version.1
            ));
            Ok(candidate)
        }
        None => Err(SetupError::NoAcceptableRuntime {
            major: RUNTIME_FLOOR.0,
            minor: RUNTIME_FLOOR.1,
        }),
    }
}

/// First-fit selection over an ordered (candidate, version) table. Extracted
/// so the preference-order contract is testable without a filesystem.
pub fn first_fit<T>(
    candidates: impl IntoIterator<Item = (T, (u32, u32))>,
    floor: (u32, u32),
) -> Option<T> {
    candidates
        .into_iter()
        .find(|(_, version)| meets_floor(*version, floor))
        .map(|(candidate, _)| candidate)
}

/// Numeric comparison, not lexical: 3.10 >= 3.9 even though "3.10" < "3.9".
pub fn meets_floor(version: (u32, u32), floor: (u32, u32)) -> bool {
    version >= floor
}

fn query_version(path: &Path) -> Option<(u32, u32)> {
    // A candidate whose version cannot be read is skipped like one below the
    // floor; it must not fail the scan.
    let out = run::output_ok(Command::new(path).arg("--version")).ok()??;
    parse_version(&out)
}

/// Extract (major, minor) from output like "Python 3.11.9".
pub fn parse_version(output: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"(\d+)\.(\d+)").ok()?;
    let caps = re.captures(output)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some((major, minor))
}
