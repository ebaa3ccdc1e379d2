// crates/native-shell-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for native-shell-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use native_shell_config::ConfigError;
use native_shell_config::ShellConfig;

/// Minimal valid record: only the required keys.
pub const MINIMAL_TOML: &str = r#"
appId = "com.example.app"
appName = "Example"
webDir = "www"
"#;

/// Full record for the Onra Voice shell, with every optional block set.
pub const ONRA_TOML: &str = r##"
appId = "com.onravoice.app"
appName = "Onra Voice"
webDir = "dist/public"

[android]
allowMixedContent = true
backgroundColor = "#1A1F2C"
captureInput = true
webContentsDebuggingEnabled = true
useLegacyBridge = false
"##;

/// Parses a TOML string into a `ShellConfig` without validating it.
pub fn config_from_toml(toml_str: &str) -> Result<ShellConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<ShellConfig, toml::de::Error> {
    config_from_toml(MINIMAL_TOML)
}

/// Asserts that a validation result failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
