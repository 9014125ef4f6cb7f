//! Agent package installation
//!
//! Upgrades pip itself, then force-reinstalls the agent with the cache
//! bypassed so a re-run always pulls the latest published build instead of a
//! stale wheel. Failure here is fatal: configuring or registering a broken
//! install helps nobody.

use crate::constants::{AGENT_PACKAGE, PACKAGE_INDEX_URL, VENV_DIR};
use crate::core::context::InstallContext;
use crate::error::Result;
use crate::ui;
use crate::utils::run;
use std::path::PathBuf;
use std::process::Command;

pub fn pip_path() -> PathBuf {
    PathBuf::from(VENV_DIR).join("bin/pip")
}

/// Path of an executable the agent package installed into the venv.
pub fn agent_bin(name: &str) -> PathBuf {
    PathBuf::from(VENV_DIR).join("bin").join(name)
}

pub fn install(_ctx: &InstallContext) -> Result<()> {
    let pip = pip_path();

    run::run(Command::new(&pip).args(["install", "--upgrade", "pip"]))?;

    run::run(Command::new(&pip).args([
        "install",
        "--force-reinstall",
        "--no-cache-dir",
        "--extra-index-url",
        PACKAGE_INDEX_URL,
        AGENT_PACKAGE,
    ]))?;

    ui::success(&format!("Package '{}' installed", AGENT_PACKAGE));
    Ok(())
}
