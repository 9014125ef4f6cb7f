// Common constants used throughout the codebase

/// Project name
pub const PROJECT_NAME: &str = "webrelay-setup";

/// System user owning the agent installation
pub const AGENT_USER: &str = "webrelay";

/// System group owning the agent installation
pub const AGENT_GROUP: &str = "webrelay";

/// Installation root, also the home directory of the agent user
pub const INSTALL_DIR: &str = "/opt/webrelay";

/// Virtualenv directory under the installation root
pub const VENV_DIR: &str = "/opt/webrelay/venv";

/// Persisted agent configuration file (line-oriented KEY=VALUE)
pub const CONFIG_FILE: &str = "/opt/webrelay/.env";

/// Config key controlled by the --port parameter
pub const SERVER_PORT_KEY: &str = "SERVER_PORT";

/// Pip package providing the agent
pub const AGENT_PACKAGE: &str = "webrelay-agent";

/// Name of the systemd unit installed by the agent
pub const SERVICE_NAME: &str = "webrelay-agent";

/// Login shell assigned to the agent user
pub const NOLOGIN_SHELL: &str = "/usr/sbin/nologin";

/// External tools that must resolve on PATH before anything runs
pub const REQUIRED_TOOLS: &[&str] = &["curl", "tar", "systemctl"];

/// Python candidates checked in order, most preferred first.
/// The first candidate meeting [`RUNTIME_FLOOR`] wins.
pub const RUNTIME_CANDIDATES: &[&str] = &[
    "python3.13",
    "python3.12",
    "python3.11",
    "python3.10",
    "python3",
];

/// Minimum acceptable Python release (major, minor)
pub const RUNTIME_FLOOR: (u32, u32) = (3, 10);
