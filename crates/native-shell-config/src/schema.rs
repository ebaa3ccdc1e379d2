// crates/native-shell-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for native-shell.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the native shell build
//! configuration. The schema mirrors the canonical config model and is used
//! by tooling, docs, and editor integrations. Some rules (Java reserved words
//! in `appId`, the per-segment length limit in `webDir`) are only enforced by
//! [`crate::config::ShellConfig::validate`].

use serde_json::Value;
use serde_json::json;

use crate::config::MAX_APP_ID_LENGTH;
use crate::config::MAX_APP_NAME_LENGTH;
use crate::config::MAX_CONSOLE_LOG_TAG_LENGTH;
use crate::config::MAX_STARTUP_STORAGE_ENTRIES;
use crate::config::MAX_STARTUP_STORAGE_KEY_LENGTH;
use crate::config::MAX_STARTUP_STORAGE_VALUE_LENGTH;
use crate::config::MAX_TOTAL_PATH_LENGTH;

/// Reverse-domain identifier pattern (each segment starts with a letter).
const APP_ID_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$";
/// Relative path pattern: no leading separator or drive prefix, no surrounding
/// whitespace, no backslashes, no `..` segments, and at least one named segment.
const WEB_DIR_PATTERN: &str =
    r"^(?![/\\])(?![A-Za-z]:)(?!\s)(?!.*\s$)(?!(?:.*/)?\.\.(?:/|$))(?![./]*$)[^\\]+$";
/// Storage keys must contain a non-whitespace character.
const STORAGE_KEY_PATTERN: &str = r"\S";
/// Hex color pattern.
const HEX_COLOR_PATTERN: &str = r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$";
/// Printable ASCII without spaces.
const LOG_TAG_PATTERN: &str = r"^[!-~]+$";

/// Returns the JSON schema for `native-shell.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "native-shell://schemas/config.schema.json",
        "title": "Native Shell Build Configuration",
        "description": "Build configuration record for the hybrid native/web application shell.",
        "type": "object",
        "properties": {
            "appId": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_APP_ID_LENGTH,
                "pattern": APP_ID_PATTERN,
                "description": "Reverse-domain package identity (e.g. com.example.app)."
            },
            "appName": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_APP_NAME_LENGTH,
                "description": "Display name shown to the end user."
            },
            "webDir": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_TOTAL_PATH_LENGTH,
                "pattern": WEB_DIR_PATTERN,
                "description": "Relative path of the pre-built web bundle; '..' segments and surrounding whitespace are rejected."
            },
            "android": android_config_schema(),
            "startup": startup_config_schema()
        },
        "required": ["appId", "appName", "webDir"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Android Configuration
// ============================================================================

/// Schema for the Android block.
fn android_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Android runtime flags for the native shell.",
        "properties": {
            "allowMixedContent": schema_for_flag(
                "Allow the web view to load http content alongside https content."
            ),
            "backgroundColor": nullable_schema(&json!({
                "type": "string",
                "pattern": HEX_COLOR_PATTERN,
                "description": "Background color (#RRGGBB or #RRGGBBAA) shown before web content paints."
            })),
            "captureInput": schema_for_flag(
                "Intercept raw input events before the web view."
            ),
            "webContentsDebuggingEnabled": schema_for_flag(
                "Expose remote web-content debugging."
            ),
            "useLegacyBridge": schema_for_flag(
                "Use the older native/web bridge implementation."
            ),
            "consoleLogTag": nullable_schema(&json!({
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_CONSOLE_LOG_TAG_LENGTH,
                "pattern": LOG_TAG_PATTERN,
                "description": "Tag for web console messages forwarded to the platform log."
            }))
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Startup Configuration
// ============================================================================

/// Schema for the startup block.
fn startup_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Startup bootstrap applied when the web view starts.",
        "properties": {
            "localStorage": {
                "type": "object",
                "maxProperties": MAX_STARTUP_STORAGE_ENTRIES,
                "propertyNames": {
                    "minLength": 1,
                    "pattern": STORAGE_KEY_PATTERN,
                    "maxLength": MAX_STARTUP_STORAGE_KEY_LENGTH
                },
                "additionalProperties": {
                    "type": "string",
                    "maxLength": MAX_STARTUP_STORAGE_VALUE_LENGTH
                },
                "default": {},
                "description": "Entries written into local storage before the web app runs."
            }
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a boolean flag defaulting to false.
fn schema_for_flag(description: &str) -> Value {
    json!({
        "type": "boolean",
        "default": false,
        "description": description
    })
}

/// Wraps a schema so `null` is also accepted.
fn nullable_schema(schema: &Value) -> Value {
    json!({
        "oneOf": [
            { "type": "null" },
            schema
        ],
        "default": null
    })
}
