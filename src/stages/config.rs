//! Config materialization
//!
//! Two phases. Phase 1 lets the agent generate any missing secrets and
//! defaults without prompting, then applies the --port override directly to
//! the persisted env file. Phase 2 re-runs the agent's configure step
//! interactively so the operator can accept or override each value; it is the
//! only point in the pipeline that blocks on human input.

use crate::constants::{AGENT_PACKAGE, CONFIG_FILE, SERVER_PORT_KEY};
use crate::core::context::InstallContext;
use crate::error::Result;
use crate::stages::package;
use crate::ui;
use crate::utils::{kvfile, run};
use std::path::Path;
use std::process::{Command, Stdio};

pub fn materialize(ctx: &InstallContext, noconfirm: bool) -> Result<()> {
    let agent = package::agent_bin(AGENT_PACKAGE);

    // Phase 1: fill in missing defaults and generated secrets, no prompts.
    run::run(Command::new(&agent).args(["configure", "--non-interactive"]))?;

    if let Some(port) = ctx.params.port {
        kvfile::upsert(Path::new(CONFIG_FILE), SERVER_PORT_KEY, &port.to_string())?;
        ui::info(&format!("{} set to {}", SERVER_PORT_KEY, port));
    }

    // Phase 2: operator review. Existing values are presented as defaults by
    // the agent itself; stdio is handed over wholesale.
    if noconfirm {
        ui::info("Skipping interactive configuration (--noconfirm)");
        return Ok(());
    }

    ui::header("Review configuration");
    run::run(
        Command::new(&agent)
            .arg("configure")
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit()),
    )?;

    ui::success("Configuration written");
    Ok(())
}
