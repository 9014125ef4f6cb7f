use crate::cli::args::Cli;
use crate::error::{Result, SetupError};

/// Parameters resolved from the command line. Immutable once built: this is
/// the single validation gate in front of every later stage.
#[derive(Debug, Clone)]
pub struct InstallParameters {
    pub api_key: String,
    pub callback_url: String,
    pub server_url: Option<String>,
    pub port: Option<u16>,
}

impl InstallParameters {
    /// Validate the parsed CLI into a usable parameter set.
    ///
    /// Fails before any system mutation happens; prints usage guidance so the
    /// operator does not have to dig for --help.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let api_key = cli.api_key.as_deref().unwrap_or("").trim().to_string();
        let callback_url = cli.callback_url.as_deref().unwrap_or("").trim().to_string();

        if api_key.is_empty() {
            print_usage();
            return Err(SetupError::InvalidArguments(
                "--api-key is required".to_string(),
            ));
        }
        if callback_url.is_empty() {
            print_usage();
            return Err(SetupError::InvalidArguments(
                "--callback-url is required".to_string(),
            ));
        }
        if !callback_url.starts_with("http://") && !callback_url.starts_with("https://") {
            print_usage();
            return Err(SetupError::InvalidArguments(format!(
                "--callback-url must be an http(s) URL, got '{}'",
                callback_url
            )));
        }

        Ok(Self {
            api_key,
            callback_url,
            server_url: cli.server_url.clone(),
            port: cli.port,
        })
    }
}

fn print_usage() {
    eprintln!(
        "Usage: webrelay-setup --api-key=<KEY> --callback-url=<URL> \
         [--server-url=<URL>] [--port=<PORT>]"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(tokens: &[&str]) -> Cli {
        let argv = std::iter::once("webrelay-setup").chain(tokens.iter().copied());
        Cli::parse_from(argv)
    }

    #[test]
    fn resolves_full_parameter_set() {
        let params = InstallParameters::resolve(&cli(&[
            "--api-key=ABC",
            "--callback-url=https://x/y",
            "--server-url=https://cp.example",
            "--port=8443",
        ]))
        .unwrap();

        assert_eq!(params.api_key, "ABC");
        assert_eq!(params.callback_url, "https://x/y");
        assert_eq!(params.server_url.as_deref(), Some("https://cp.example"));
        assert_eq!(params.port, Some(8443));
    }

    #[test]
    fn rejects_missing_api_key() {
        let err = InstallParameters::resolve(&cli(&["--callback-url=https://x/y"]));
        assert!(matches!(err, Err(SetupError::InvalidArguments(_))));
    }

    #[test]
    fn rejects_missing_callback_url() {
        let err = InstallParameters::resolve(&cli(&["--api-key=ABC"]));
        assert!(matches!(err, Err(SetupError::InvalidArguments(_))));
    }

    #[test]
    fn rejects_non_http_callback_url() {
        let err =
            InstallParameters::resolve(&cli(&["--api-key=ABC", "--callback-url=ftp://x/y"]));
        assert!(matches!(err, Err(SetupError::InvalidArguments(_))));
    }

    #[test]
    fn optional_parameters_default_to_none() {
        let params = InstallParameters::resolve(&cli(&[
            "--api-key=ABC",
            "--callback-url=http://x/y",
        ]))
        .unwrap();
        assert!(params.server_url.is_none());
        assert!(params.port.is_none());
    }
}
