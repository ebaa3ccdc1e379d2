// crates/native-shell-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Provides the message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for consistent output.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The native shell CLI stores user-facing strings in a small catalog to
//! enforce consistent messaging. All runtime output should be routed through
//! the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself to avoid panics.
//! - Placeholders are substituted in one pass; argument values are never
//!   rescanned for placeholders.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static catalog entries loaded into the message bundle.
pub(crate) const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "native-shell {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("config.validate.summary", "  appId: {app_id}\n  appName: {app_name}\n  webDir: {web_dir}"),
    ("config.warning", "Warning [{code}]: {message}"),
    ("config.export.serialize_failed", "Failed to serialize build tool config: {error}"),
    ("config.export.write_failed", "Failed to write {path}: {error}"),
    ("config.export.written", "Wrote build tool config to {path}"),
    ("config.schema.serialize_failed", "Failed to serialize config schema: {error}"),
    ("config.docs.written", "Wrote config docs to {path}"),
    ("config.docs.verified", "Config docs up to date."),
    ("config.docs.failed", "Config docs check failed: {error}"),
    ("assets.check.failed", "Web asset preflight failed: {error}"),
    ("assets.check.ok", "Web assets ready: {web_dir} ({count} files)"),
    ("bootstrap.script.empty", "// no startup storage entries configured"),
];

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the catalog while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            result.push_str(&rest[open..]);
            return result;
        };
        let name = &after_open[..close];
        match args.iter().find(|arg| arg.key == name) {
            Some(arg) => result.push_str(&arg.value),
            None => result.push_str(&rest[open..=open + 1 + close]),
        }
        rest = &after_open[close + 1..];
    }
    result.push_str(rest);
    result
}

/// Returns the static catalog used by the CLI.
pub(crate) fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_ITEMS.iter().copied().collect())
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
