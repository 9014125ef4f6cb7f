//! Preflight checks
//!
//! Every later stage shells out to one of these tools, so a missing tool
//! aborts before anything is touched.

use crate::constants::REQUIRED_TOOLS;
use crate::error::{Result, SetupError};
use crate::ui;

pub fn check() -> Result<()> {
    for tool in REQUIRED_TOOLS {
        if which::which(tool).is_err() {
            return Err(SetupError::DependencyMissing(format!(
                "'{}' not found on PATH; install it and re-run",
                tool
            )));
        }
        ui::detail(&format!("{} available", tool));
    }
    ui::success("All required tools present");
    Ok(())
}
