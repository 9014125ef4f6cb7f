//! Final report
//!
//! Reads back live service state and prints what was provisioned. This stage
//! never fails the pipeline; a broken status query degrades to "unknown".

use crate::constants::{INSTALL_DIR, SERVICE_NAME};
use crate::core::context::InstallContext;
use crate::stages::registrar;
use crate::ui;
use std::fmt;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Active,
    Inactive,
    Unknown,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Inactive => "inactive",
            ServiceStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Map `systemctl is-active` output. Anything unexpected is Unknown.
pub fn parse_status(output: Option<&str>) -> ServiceStatus {
    match output.map(str::trim) {
        Some("active") => ServiceStatus::Active,
        Some("inactive") | Some("failed") => ServiceStatus::Inactive,
        _ => ServiceStatus::Unknown,
    }
}

pub fn query_status() -> ServiceStatus {
    // is-active exits non-zero for anything but "active"; the word on stdout
    // is still meaningful, so both paths go through the same parser.
    let out = Command::new("systemctl")
        .args(["is-active", SERVICE_NAME])
        .output();
    match out {
        Ok(out) => {
            let text = String::from_utf8_lossy(&out.stdout).into_owned();
            parse_status(Some(&text))
        }
        Err(_) => ServiceStatus::Unknown,
    }
}

pub fn report(ctx: &InstallContext) {
    let status = query_status();

    ui::separator();
    ui::keyval("Platform", &ctx.platform.to_string());
    ui::keyval(
        "Identity",
        &format!("{}:{}", ctx.identity.user, ctx.identity.group),
    );
    ui::keyval(
        "Runtime",
        &format!(
            "{} ({}.{})",
            ctx.runtime.path.display(),
            ctx.runtime.version.0,
            ctx.runtime.version.1
        ),
    );
    ui::keyval("Install dir", INSTALL_DIR);
    ui::keyval("Service", SERVICE_NAME);
    ui::keyval("Status", &status.to_string());
    ui::keyval("Control plane", &registrar::register_url(&ctx.params));
    ui::separator();

    match status {
        ServiceStatus::Active => ui::success("Provisioning complete"),
        _ => ui::warning(&format!(
            "Provisioning finished but the service is {}; check 'journalctl -u {}'",
            status, SERVICE_NAME
        )),
    }
}
