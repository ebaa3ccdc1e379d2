// crates/native-shell-config/src/bootstrap.rs
// ============================================================================
// Module: Shell Bootstrap Script
// Description: Renders the script the shell evaluates when its web view starts.
// Purpose: Seed web storage deterministically without script injection.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The native shell evaluates a short script in its web view before the web
//! app runs. The script writes one `localStorage.setItem` call per
//! `startup.localStorage` entry, in key order. Keys and values are emitted as
//! JSON string literals with `<`, `>`, `&`, U+2028, and U+2029 escaped, so a
//! value can neither terminate the string nor close an enclosing `<script>`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use crate::config::ShellConfig;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders the startup bootstrap script for a configuration.
///
/// Returns an empty string when no startup storage entries are configured.
#[must_use]
pub fn bootstrap_script(config: &ShellConfig) -> String {
    let mut script = String::new();
    for (key, value) in &config.startup.local_storage {
        let _ = writeln!(
            &mut script,
            "localStorage.setItem({}, {});",
            script_string_literal(key),
            script_string_literal(value)
        );
    }
    script
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Encodes a string as a JavaScript string literal safe for inline scripts.
fn script_string_literal(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_string()).to_string();
    let mut out = String::with_capacity(quoted.len());
    for ch in quoted.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
