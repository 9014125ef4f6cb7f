//! Service installation
//!
//! The agent package ships its own install-service routine (unit file
//! rendering, enable, start). The orchestrator trusts it as an opaque step;
//! if it fails, nothing downstream can assume a running service, so the
//! pipeline stops.

use crate::constants::{AGENT_PACKAGE, SERVICE_NAME};
use crate::core::context::InstallContext;
use crate::error::Result;
use crate::stages::package;
use crate::ui;
use crate::utils::run;
use std::process::Command;

pub fn install(_ctx: &InstallContext) -> Result<()> {
    let agent = package::agent_bin(AGENT_PACKAGE);
    run::run(Command::new(&agent).arg("install-service"))?;
    ui::success(&format!("Service '{}' installed and started", SERVICE_NAME));
    Ok(())
}
