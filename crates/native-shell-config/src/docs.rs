// crates/native-shell-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for native-shell.toml documentation.
// Purpose: Keep config docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `docs/configuration/native-shell.toml.md` from the canonical
//! configuration schema. This output is deterministic; every schema property
//! must appear in a section table or generation fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated configuration docs.
pub const DOCS_PATH: &str = "docs/configuration/native-shell.toml.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the configuration markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("docs/configuration/native-shell.toml.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Native Shell Build Configuration\n");
    out.push_str("Description: Reference for native-shell.toml configuration fields.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# native-shell.toml Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`native-shell.toml` declares the application identity, the web bundle\n");
    out.push_str("embedded into the native shell, and Android runtime flags. The same keys\n");
    out.push_str("are accepted in JSON when the file ends in `.json`. Unknown keys are\n");
    out.push_str("rejected and all inputs fail closed on errors.\n\n");

    out.push_str("## Sections\n\n");
    for section in build_sections() {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        out.push_str(section.description);
        out.push_str("\n\n");
        let table = render_table(&schema, &section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        if let Some(extra) = section.extra {
            out.push('\n');
            out.push_str(extra);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("## Release Warnings\n\n");
    out.push_str("`native-shell config validate` accepts the following settings but prints a\n");
    out.push_str("warning because they weaken a release build:\n\n");
    out.push_str("- `android.allowMixedContent = true`\n");
    out.push_str("- `android.webContentsDebuggingEnabled = true`\n");
    out.push_str("- `android.useLegacyBridge = true`\n");
    out.push_str("- `startup.localStorage` keys that look like credentials\n");

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| DocsError::Io(err.to_string()))?;
    }
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// Specification for one rendered documentation section.
struct SectionSpec {
    /// Section heading, including TOML table name.
    heading: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// Property path from the schema root to the section object.
    path: &'static [&'static str],
    /// Ordered field list rendered in the docs table.
    fields: &'static [&'static str],
    /// Optional additional text appended after the table.
    extra: Option<&'static str>,
}

/// Builds the ordered list of configuration sections to render.
fn build_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            heading: "Top level",
            description: "Application identity and the web bundle location.",
            path: &[],
            fields: &["appId", "appName", "webDir", "android", "startup"],
            extra: Some(
                "`webDir` must exist and contain `index.html` at package time; run \
                 `native-shell assets check` before packaging.",
            ),
        },
        SectionSpec {
            heading: "[android]",
            description: "Android runtime flags. Every flag defaults to `false`.",
            path: &["android"],
            fields: &[
                "allowMixedContent",
                "backgroundColor",
                "captureInput",
                "webContentsDebuggingEnabled",
                "useLegacyBridge",
                "consoleLogTag",
            ],
            extra: None,
        },
        SectionSpec {
            heading: "[startup]",
            description: "Web storage seeded by the shell before the web app runs.",
            path: &["startup"],
            fields: &["localStorage"],
            extra: Some("Print the resulting script with `native-shell bootstrap script`."),
        },
    ]
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders the markdown table for a configuration section.
fn render_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let section_schema = schema_at(schema, section.path)?;
    let props = section_schema
        .get("properties")
        .and_then(|value| value.as_object())
        .ok_or_else(|| "schema properties missing".to_string())?;

    let mut seen = BTreeSet::new();
    for field in section.fields {
        if !props.contains_key(*field) {
            return Err(format!("missing field in schema: {field}"));
        }
        seen.insert(*field);
    }
    for key in props.keys() {
        if !seen.contains(key.as_str()) {
            return Err(format!("field not documented: {key}"));
        }
    }

    let required = section_schema
        .get("required")
        .and_then(|value| value.as_array())
        .map(|arr| arr.iter().filter_map(|val| val.as_str()).collect::<Vec<&str>>())
        .unwrap_or_default();

    let mut table = String::new();
    table.push_str("| Field | Type | Required | Default | Notes |\n");
    table.push_str("| --- | --- | --- | --- | --- |\n");
    for field in section.fields {
        let raw_schema =
            props.get(*field).ok_or_else(|| format!("missing field schema: {field}"))?;
        let prop_schema = unwrap_nullable(raw_schema);
        let field_type = escape_table_cell(&format_schema_type(raw_schema));
        let required_value = if required.contains(field) { "yes" } else { "no" };
        let default_value = raw_schema
            .get("default")
            .or_else(|| prop_schema.get("default"))
            .map_or_else(|| "n/a".to_string(), format_default_value);
        let notes = raw_schema
            .get("description")
            .and_then(|value| value.as_str())
            .or_else(|| prop_schema.get("description").and_then(|value| value.as_str()))
            .unwrap_or("");
        let _ = writeln!(
            &mut table,
            "| `{field}` | {field_type} | {required_value} | {default_value} | {} |",
            escape_table_cell(notes)
        );
    }
    Ok(table)
}

/// Resolves a schema node by walking a path of properties.
fn schema_at<'a>(schema: &'a Value, path: &[&str]) -> Result<&'a Value, String> {
    let mut current = schema;
    for name in path {
        let props = current
            .get("properties")
            .and_then(|value| value.as_object())
            .ok_or_else(|| format!("properties missing while seeking {name}"))?;
        let prop = props.get(*name).ok_or_else(|| format!("property not found: {name}"))?;
        current = unwrap_nullable(prop);
    }
    Ok(current)
}

/// Returns the non-null branch of a nullable `oneOf` schema.
fn unwrap_nullable(schema: &Value) -> &Value {
    if let Some(one_of) = schema.get("oneOf").and_then(|val| val.as_array())
        && one_of.len() == 2
        && let Some(other) =
            one_of.iter().find(|item| item.get("type").and_then(|val| val.as_str()) != Some("null"))
    {
        return other;
    }
    schema
}

/// Formats a schema type for markdown tables.
fn format_schema_type(schema: &Value) -> String {
    if let Some(one_of) = schema.get("oneOf").and_then(|val| val.as_array()) {
        let mut types = one_of
            .iter()
            .filter(|item| item.get("type").and_then(|val| val.as_str()) != Some("null"))
            .map(format_schema_type)
            .collect::<Vec<String>>();
        if types.len() == 1 {
            let mut only = types.remove(0);
            only.push_str(" | null");
            return only;
        }
    }
    match schema.get("type").and_then(|val| val.as_str()) {
        Some("string") => "string".to_string(),
        Some("boolean") => "bool".to_string(),
        Some("integer") => "integer".to_string(),
        Some("object") => "table".to_string(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

/// Escapes pipe characters for markdown table cells.
fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Formats schema defaults for display in docs.
fn format_default_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(val) => val.to_string(),
        Value::Number(val) => val.to_string(),
        Value::String(val) => val.clone(),
        Value::Array(arr) if arr.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Array(_) | Value::Object(_) => "{...}".to_string(),
    }
}
