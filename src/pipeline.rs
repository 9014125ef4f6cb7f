//! Provisioning pipeline
//!
//! One pass, strictly sequential, fail-fast. Each stage is idempotent, so a
//! failed or interrupted run is recovered by running the whole pipeline
//! again; there is deliberately no rollback and no retry.

use crate::cli::args::Cli;
use crate::core::context::InstallContext;
use crate::core::params::InstallParameters;
use crate::error::{Result, SetupError};
use crate::stages::{
    config, environment, identity, package, platform, preflight, registrar, runtime, service,
    summary,
};
use crate::ui;

pub fn run(cli: &Cli) -> Result<()> {
    // Precondition stages: nothing below mutates the system.
    ui::header("Preflight");
    stage("preflight", preflight::check)?;

    let params = stage("arguments", || InstallParameters::resolve(cli))?;

    ui::header("Detecting platform");
    let detected = platform::detect();
    ui::info(&format!("Host platform: {}", detected));

    // Provisioning stages, in dependency order.
    ui::header("Provisioning identity");
    let identity = stage("identity", identity::ensure)?;

    ui::header("Locating runtime");
    let runtime = stage("runtime", runtime::locate)?;

    let ctx = InstallContext {
        params,
        platform: detected,
        identity,
        runtime,
    };

    ui::header("Building environment");
    stage("environment", || environment::build(&ctx))?;

    ui::header("Installing agent");
    stage("package", || package::install(&ctx))?;

    ui::header("Writing configuration");
    stage("config", || config::materialize(&ctx, cli.global.noconfirm))?;

    ui::header("Installing service");
    stage("service", || service::install(&ctx))?;

    ui::header("Registering with control plane");
    stage("register", || registrar::register(&ctx))?;

    // Summary never fails the pipeline.
    summary::report(&ctx);
    Ok(())
}

/// Run one named stage: checks for a pending Ctrl-C first, then wraps any
/// stage error so the operator sees which stage gave up.
fn stage<T>(name: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    if ui::is_interrupted() {
        return Err(SetupError::Interrupted);
    }
    f().map_err(|e| match e {
        SetupError::Interrupted => SetupError::Interrupted,
        other => SetupError::StageFailed {
            stage: name,
            source: Box::new(other),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_wraps_errors_with_stage_name() {
        let err = stage("identity", || -> Result<()> {
            Err(SetupError::Other("boom".to_string()))
        })
        .unwrap_err();

        match err {
            SetupError::StageFailed { stage, source } => {
                assert_eq!(stage, "identity");
                assert!(matches!(*source, SetupError::Other(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stage_passes_values_through() {
        let value = stage("runtime", || Ok(41 + 1)).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn stage_error_display_names_the_stage() {
        let err = stage("register", || -> Result<()> {
            Err(SetupError::RegistrationFailure {
                reason: "502".to_string(),
            })
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("register"));
        assert!(msg.contains("502"));
    }
}
