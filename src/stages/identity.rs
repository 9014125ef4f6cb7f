//! Identity provisioning
//!
//! Ensure-exists semantics for the agent's system group, user, and group
//! membership. Each check is independent so a half-provisioned host from an
//! interrupted earlier run converges on re-run without duplicate-entry errors.

use crate::constants::{AGENT_GROUP, AGENT_USER, INSTALL_DIR, NOLOGIN_SHELL};
use crate::error::Result;
use crate::ui;
use crate::utils::run;
use std::process::Command;

#[derive(Debug, Clone)]
pub struct SystemIdentity {
    pub user: String,
    pub group: String,
    pub home: String,
}

pub fn ensure() -> Result<SystemIdentity> {
    ensure_group()?;
    ensure_user()?;
    ensure_membership()?;

    Ok(SystemIdentity {
        user: AGENT_USER.to_string(),
        group: AGENT_GROUP.to_string(),
        home: INSTALL_DIR.to_string(),
    })
}

fn ensure_group() -> Result<()> {
    let probe = run::output_ok(Command::new("getent").args(["group", AGENT_GROUP]))?;
    if probe.is_some() {
        ui::info(&format!("Group '{}' already exists", AGENT_GROUP));
        return Ok(());
    }

    run::run(Command::new("groupadd").args(["--system", AGENT_GROUP]))?;
    ui::success(&format!("Group '{}' created", AGENT_GROUP));
    Ok(())
}

fn ensure_user() -> Result<()> {
    let probe = run::output_ok(Command::new("getent").args(["passwd", AGENT_USER]))?;
    if probe.is_some() {
        ui::info(&format!("User '{}' already exists", AGENT_USER));
        return Ok(());
    }

    run::run(Command::new("useradd").args([
        "--system",
        "--home-dir",
        INSTALL_DIR,
        "--gid",
        AGENT_GROUP,
        "--shell",
        NOLOGIN_SHELL,
        AGENT_USER,
    ]))?;
    ui::success(&format!("User '{}' created", AGENT_USER));
    Ok(())
}

fn ensure_membership() -> Result<()> {
    if let Some(groups) = run::output_ok(Command::new("id").args(["-nG", AGENT_USER]))? {
        if groups.split_whitespace().any(|g| g == AGENT_GROUP) {
            ui::info(&format!(
                "User '{}' already in group '{}'",
                AGENT_USER, AGENT_GROUP
            ));
            return Ok(());
        }
    }

    run::run(Command::new("usermod").args(["-aG", AGENT_GROUP, AGENT_USER]))?;
    ui::success(&format!(
        "User '{}' added to group '{}'",
        AGENT_USER, AGENT_GROUP
    ));
    Ok(())
}
