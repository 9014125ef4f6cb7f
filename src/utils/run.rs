use crate::error::{Result, SetupError};
use crate::ui;
use std::process::Command;

/// Render a command line for diagnostics.
pub fn describe(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Run a command with inherited stdio and require a zero exit status.
pub fn run(cmd: &mut Command) -> Result<()> {
    let line = describe(cmd);
    ui::detail(&format!("$ {}", line));

    let status = cmd.status().map_err(|e| SetupError::SystemCommandFailed {
        command: line.clone(),
        reason: e.to_string(),
    })?;

    if !status.success() {
        return Err(SetupError::SystemCommandFailed {
            command: line,
            reason: format!("exited with {}", status),
        });
    }
    Ok(())
}

/// Run a command, capture stdout, require a zero exit status.
pub fn output(cmd: &mut Command) -> Result<String> {
    let line = describe(cmd);
    ui::detail(&format!("$ {}", line));

    let out = cmd.output().map_err(|e| SetupError::SystemCommandFailed {
        command: line.clone(),
        reason: e.to_string(),
    })?;

    if !out.status.success() {
        return Err(SetupError::SystemCommandFailed {
            command: line,
            reason: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Like [`output`] but a non-zero exit is not an error; returns None instead.
/// Used for existence probes (getent, id) where "not found" is expected.
pub fn output_ok(cmd: &mut Command) -> Result<Option<String>> {
    let line = describe(cmd);
    ui::detail(&format!("$ {}", line));

    let out = cmd.output().map_err(|e| SetupError::SystemCommandFailed {
        command: line,
        reason: e.to_string(),
    })?;

    if out.status.success() {
        Ok(Some(String::from_utf8_lossy(&out.stdout).into_owned()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_renders_program_and_args() {
        let mut cmd = Command::new("getent");
        cmd.arg("group").arg("webrelay");
        assert_eq!(describe(&cmd), "getent group webrelay");
    }

    #[test]
    fn run_reports_missing_program() {
        let mut cmd = Command::new("definitely-not-a-real-binary-xyz");
        let err = run(&mut cmd).unwrap_err();
        assert!(matches!(err, SetupError::SystemCommandFailed { .. }));
    }

    #[test]
    fn output_captures_stdout() {
        let mut cmd = Command::new("echo");
        cmd.arg("hello");
        assert_eq!(output(&mut cmd).unwrap().trim(), "hello");
    }

    #[test]
    fn output_ok_maps_failure_to_none() {
        let mut cmd = Command::new("false");
        assert!(output_ok(&mut cmd).unwrap().is_none());
    }
}
