//! Behavioural tests for CLI configuration loading.

use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use serverboard::config::LEGACY_API_URL_VAR;
use serverboard::{ApiBaseUrl, ApiError, OperationMode, ServerboardConfig};

/// State for CLI configuration scenarios.
///
/// Uses JSON values to represent configuration layers since `MergeComposer`
/// doesn't implement Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    defaults_layer: Slot<Value>,
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    legacy_url: Slot<String>,
    config: Slot<ServerboardConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();

    let base_defaults = json!({"api_url": null, "log_file": null, "summary": false});
    let defaults = state
        .defaults_layer
        .get()
        .unwrap_or_else(|| base_defaults.clone());
    composer.push_defaults(merge_json(base_defaults, defaults));

    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match ServerboardConfig::merge_from_layers(composer.layers()) {
        Ok(config) => state.config.set(config),
        Err(error) => panic!("failed to merge configuration: {error}"),
    }
}

/// Merges two JSON values, with `overlay` values taking precedence over `base`.
fn merge_json(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                base_map.insert(key, value);
            }
            Value::Object(base_map)
        }
        (_, other) => other,
    }
}

/// Resolves the base URL with the legacy variable pinned to the scenario's
/// value, or unset when the scenario gives none.
fn resolve(state: &ConfigState) -> Result<ApiBaseUrl, ApiError> {
    let config = state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"));
    let legacy = state.legacy_url.get();
    let _guard = env_lock::lock_env([(LEGACY_API_URL_VAR, legacy.as_deref())]);
    config.resolve_api_url()
}

// --- Given steps ---

#[given("a configuration with no api_url set")]
fn no_api_url_set(config_state: &ConfigState) {
    config_state.defaults_layer.set(json!({}));
}

#[given("a configuration with environment api_url {url}")]
fn env_api_url_set(config_state: &ConfigState, url: String) {
    let url_clean = url.trim_matches('"');
    config_state.env_layer.set(json!({"api_url": url_clean}));
}

#[given("the legacy API URL variable is {url}")]
fn legacy_api_url_set(config_state: &ConfigState, url: String) {
    config_state.legacy_url.set(url.trim_matches('"').to_owned());
}

// --- When steps ---

#[when("the CLI receives api_url {url}")]
fn cli_receives_api_url(config_state: &ConfigState, url: String) {
    let url_clean = url.trim_matches('"');
    config_state.cli_layer.set(json!({"api_url": url_clean}));
    build_config(config_state);
}

#[when("the CLI receives no api_url")]
fn cli_receives_no_api_url(config_state: &ConfigState) {
    build_config(config_state);
}

#[when("the CLI receives the summary flag")]
fn cli_receives_summary(config_state: &ConfigState) {
    config_state.cli_layer.set(json!({"summary": true}));
    build_config(config_state);
}

// --- Then steps ---

#[then("the resolved API URL is {expected}")]
fn assert_resolved_url(config_state: &ConfigState, expected: String) {
    let expected_clean = expected.trim_matches('"');

    let resolved =
        resolve(config_state).unwrap_or_else(|error| panic!("URL resolution failed: {error}"));

    assert_eq!(resolved.as_str(), expected_clean, "resolved URL mismatch");
}

#[then("resolving the API URL returns a configuration error")]
fn assert_configuration_error(config_state: &ConfigState) {
    let result = resolve(config_state);
    assert!(
        matches!(result, Err(ApiError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}

#[then("resolving the API URL returns an invalid URL error")]
fn assert_invalid_url_error(config_state: &ConfigState) {
    let result = resolve(config_state);
    assert!(
        matches!(result, Err(ApiError::InvalidUrl(_))),
        "expected InvalidUrl error, got {result:?}"
    );
}

#[then("the operation mode is summary")]
fn assert_summary_mode(config_state: &ConfigState) {
    let config = config_state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"));
    assert_eq!(config.operation_mode(), OperationMode::Summary);
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn load_api_url_from_cli(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn cli_api_url_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn env_api_url_used_when_cli_not_provided(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn legacy_variable_fallback(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn missing_api_url_error(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 5)]
fn relative_api_url_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 6)]
fn trailing_slash_trimmed(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 7)]
fn summary_flag_selects_summary_mode(config_state: ConfigState) {
    let _ = config_state;
}
