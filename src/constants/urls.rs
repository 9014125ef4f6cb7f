// Remote endpoints

/// Extra pip index serving the agent package
pub const PACKAGE_INDEX_URL: &str = "https://packages.webrelay.io/simple";

/// Control plane used when --server-url is not supplied
pub const DEFAULT_SERVER_URL: &str = "https://api.webrelay.io";

/// Registration endpoint path, appended to the server URL
pub const REGISTER_PATH: &str = "/v1/agents/register";
