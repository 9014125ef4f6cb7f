//! Environment builder
//!
//! Creates the install dir and a virtualenv bound to the located runtime,
//! then locks down ownership and permissions. Recreating an existing venv is
//! fine; `python -m venv` on an existing directory is a cheap no-op refresh.

use crate::constants::{INSTALL_DIR, VENV_DIR};
use crate::core::context::InstallContext;
use crate::error::{Result, SetupError};
use crate::ui;
use crate::utils::run;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

pub fn build(ctx: &InstallContext) -> Result<()> {
    let install_dir = Path::new(INSTALL_DIR);
    fs::create_dir_all(install_dir).map_err(|e| SetupError::IoError {
        path: install_dir.to_path_buf(),
        source: e,
    })?;

    run::run(Command::new(&ctx.runtime.path).args(["-m", "venv", VENV_DIR]))?;
    ui::success(&format!("Virtualenv ready at {}", VENV_DIR));

    // rwx for owner and group only; nothing world-readable lives here once
    // the config gains generated secrets.
    let perms = fs::Permissions::from_mode(0o770);
    fs::set_permissions(install_dir, perms).map_err(|e| SetupError::IoError {
        path: install_dir.to_path_buf(),
        source: e,
    })?;

    let owner = format!("{}:{}", ctx.identity.user, ctx.identity.group);
    run::run(Command::new("chown").args(["-R", &owner, INSTALL_DIR]))?;
    ui::detail(&format!("{} owned by {}", INSTALL_DIR, owner));

    Ok(())
}
