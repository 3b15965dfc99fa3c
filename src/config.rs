//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.serverboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SERVERBOARD_API_URL` and friends, or the
//!    legacy `VITE_MAIN_API_URL` for the base URL
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--log-file`, `--summary`
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://community.example.com"
//! log_file = "serverboard.log"
//! summary = false
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ApiBaseUrl, ApiError};

/// Environment variable the web front-end used for the base URL.
pub const LEGACY_API_URL_VAR: &str = "VITE_MAIN_API_URL";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print entity counts and exit.
    Summary,
    /// Run the terminal front-end.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SERVERBOARD_API_URL`, `VITE_MAIN_API_URL`, or `--api-url`: API base URL
/// - `SERVERBOARD_LOG_FILE` or `--log-file`: diagnostic log destination
/// - `SERVERBOARD_SUMMARY` or `--summary`: print counts instead of the UI
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use serverboard::ServerboardConfig;
///
/// let config = ServerboardConfig::load().expect("failed to load configuration");
/// let base_url = config.resolve_api_url().expect("API URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SERVERBOARD",
    discovery(
        dotfile_name = ".serverboard.toml",
        config_file_name = "serverboard.toml",
        app_name = "serverboard"
    )
)]
pub struct ServerboardConfig {
    /// Base URL of the community API, e.g. `https://community.example.com`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `SERVERBOARD_API_URL` or `VITE_MAIN_API_URL` (legacy)
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// File that receives diagnostic logs.
    ///
    /// The terminal UI owns stdout and stderr, so logging is off unless a
    /// file is configured. Filtering follows `RUST_LOG`.
    pub log_file: Option<String>,

    /// Prints entity counts for every list endpoint and exits.
    pub summary: bool,
}

impl ServerboardConfig {
    /// Resolves and validates the API base URL.
    ///
    /// Falls back to the legacy `VITE_MAIN_API_URL` environment variable when
    /// no other source provides a value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when no source provides a URL and
    /// [`ApiError::InvalidUrl`] when the value is not an absolute http(s)
    /// URL.
    pub fn resolve_api_url(&self) -> Result<ApiBaseUrl, ApiError> {
        let raw = self
            .api_url
            .clone()
            .or_else(|| env::var(LEGACY_API_URL_VAR).ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ApiError::Configuration {
                message: concat!(
                    "API base URL is required (use --api-url, ",
                    "SERVERBOARD_API_URL, or VITE_MAIN_API_URL)"
                )
                .to_owned(),
            })?;
        ApiBaseUrl::parse(&raw)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Interactive
        }
    }

    /// Returns the configured log file, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<Utf8PathBuf> {
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use ortho_config::MergeComposer;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{LEGACY_API_URL_VAR, OperationMode, ServerboardConfig};
    use crate::api::ApiError;

    /// Applies a configuration layer to the composer based on the layer type.
    fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
        match layer_type {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            _ => panic!("unknown layer type: {layer_type}"),
        }
    }

    #[rstest]
    #[case::file_overrides_defaults(
        vec![("defaults", json!({"api_url": "http://default"})), ("file", json!({"api_url": "http://file"}))],
        "http://file",
        "file should override default"
    )]
    #[case::environment_overrides_file(
        vec![("file", json!({"api_url": "http://file"})), ("environment", json!({"api_url": "http://env"}))],
        "http://env",
        "environment should override file"
    )]
    #[case::cli_overrides_environment(
        vec![("environment", json!({"api_url": "http://env"})), ("cli", json!({"api_url": "http://cli"}))],
        "http://cli",
        "CLI should override environment"
    )]
    fn test_layer_precedence(
        #[case] layers: Vec<(&str, Value)>,
        #[case] expected: &str,
        #[case] message: &str,
    ) {
        let mut composer = MergeComposer::new();

        for (layer_type, value) in layers {
            apply_layer(&mut composer, layer_type, value);
        }

        let config =
            ServerboardConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.api_url.as_deref(), Some(expected), "{message}");
    }

    #[rstest]
    fn partial_overrides_preserve_lower_values() {
        let mut composer = MergeComposer::new();
        composer.push_defaults(json!({"api_url": "http://default", "log_file": "board.log"}));
        composer.push_cli(json!({"api_url": "http://cli"}));

        let config =
            ServerboardConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.api_url.as_deref(), Some("http://cli"));
        assert_eq!(config.log_file(), Some(Utf8PathBuf::from("board.log")));
    }

    #[rstest]
    fn configured_url_wins_over_legacy_variable() {
        let _guard = env_lock::lock_env([(LEGACY_API_URL_VAR, Some("http://legacy.example"))]);
        let config = ServerboardConfig {
            api_url: Some("https://api.example.com/".to_owned()),
            ..Default::default()
        };

        let base_url = config.resolve_api_url().expect("URL should resolve");

        assert_eq!(base_url.as_str(), "https://api.example.com");
    }

    #[rstest]
    fn legacy_variable_is_used_when_nothing_else_is_set() {
        let _guard = env_lock::lock_env([(LEGACY_API_URL_VAR, Some("http://legacy.example"))]);
        let config = ServerboardConfig::default();

        let base_url = config.resolve_api_url().expect("URL should resolve");

        assert_eq!(base_url.as_str(), "http://legacy.example");
    }

    #[rstest]
    fn missing_url_fails_fast() {
        let _guard = env_lock::lock_env([(LEGACY_API_URL_VAR, None::<&str>)]);
        let config = ServerboardConfig::default();

        let result = config.resolve_api_url();

        assert!(
            matches!(result, Err(ApiError::Configuration { .. })),
            "expected Configuration error, got {result:?}"
        );
    }

    #[rstest]
    fn invalid_url_is_rejected() {
        let config = ServerboardConfig {
            api_url: Some("community.example.com".to_owned()),
            ..Default::default()
        };

        let result = config.resolve_api_url();

        assert!(
            matches!(result, Err(ApiError::InvalidUrl(_))),
            "expected InvalidUrl error, got {result:?}"
        );
    }

    #[rstest]
    #[case::summary(true, OperationMode::Summary)]
    #[case::interactive(false, OperationMode::Interactive)]
    fn operation_mode_follows_summary_flag(
        #[case] summary: bool,
        #[case] expected: OperationMode,
    ) {
        let config = ServerboardConfig {
            summary,
            ..Default::default()
        };

        assert_eq!(config.operation_mode(), expected);
    }

    #[rstest]
    fn blank_log_file_disables_logging() {
        let config = ServerboardConfig {
            log_file: Some("  ".to_owned()),
            ..Default::default()
        };

        assert_eq!(config.log_file(), None);
    }
}
