//! Control-plane registration
//!
//! The terminal side effect: one POST binding this installation to the
//! account behind the API key. Exactly one attempt, no retry; on failure the
//! operator re-runs the pipeline, which is safe end to end.

use crate::constants::{DEFAULT_SERVER_URL, PROJECT_NAME, REGISTER_PATH};
use crate::core::context::InstallContext;
use crate::core::params::InstallParameters;
use crate::error::{Result, SetupError};
use crate::ui;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct RegistrationRequest {
    pub api_key: String,
    pub callback_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl RegistrationRequest {
    pub fn from_params(params: &InstallParameters) -> Self {
        Self {
            api_key: params.api_key.clone(),
            callback_url: params.callback_url.clone(),
            server_url: params.server_url.clone(),
            port: params.port,
        }
    }
}

/// Endpoint the registration is POSTed to: explicit --server-url wins over
/// the public control plane.
pub fn register_url(params: &InstallParameters) -> String {
    let base = params
        .server_url
        .as_deref()
        .unwrap_or(DEFAULT_SERVER_URL)
        .trim_end_matches('/');
    format!("{}{}", base, REGISTER_PATH)
}

pub fn register(ctx: &InstallContext) -> Result<()> {
    let url = register_url(&ctx.params);
    let body = RegistrationRequest::from_params(&ctx.params);

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| SetupError::RegistrationFailure {
            reason: e.to_string(),
        })?;

    let resp = client
        .post(&url)
        .header("User-Agent", PROJECT_NAME)
        .json(&body)
        .send()
        .map_err(|e| SetupError::RegistrationFailure {
            reason: format!("request to {} failed: {}", url, e),
        })?;

    if !resp.status().is_success() {
        return Err(SetupError::RegistrationFailure {
            reason: format!("{} answered {}", url, resp.status()),
        });
    }

    ui::success("Registered with control plane");
    Ok(())
}
