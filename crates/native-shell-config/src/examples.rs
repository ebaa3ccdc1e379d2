// crates/native-shell-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for the native shell build configuration. Outputs are
//! deterministic and kept in sync with schema and docs.

/// Returns a canonical example `native-shell.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r##"appId = "com.onravoice.app"
appName = "Onra Voice"
webDir = "dist/public"

[android]
allowMixedContent = true
backgroundColor = "#1A1F2C"
captureInput = true
webContentsDebuggingEnabled = true
useLegacyBridge = false
consoleLogTag = "OnraVoice"

[startup.localStorage]
USE_MEMORY_STORAGE = "true"
"##,
    )
}
