// crates/native-shell-config/src/lib.rs
// ============================================================================
// Module: Native Shell Config Library
// Description: Canonical build config model, validation, and artifact generation.
// Purpose: Single source of truth for native-shell.toml semantics.
// Dependencies: serde, serde_json, toml
// ============================================================================

//! ## Overview
//! `native-shell-config` defines the canonical build configuration record for
//! a hybrid native/web application shell. It provides strict, fail-closed
//! validation, export to the external build tool's JSON shape, a package-time
//! web asset preflight, and deterministic generators for the config schema,
//! example, and docs.
//!
//! Security posture: config inputs are untrusted and validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bootstrap;
pub mod config;
pub mod docs;
pub mod examples;
pub mod identifiers;
pub mod preflight;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bootstrap::bootstrap_script;
pub use config::*;
pub use docs::DOCS_PATH;
pub use docs::DocsError;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use identifiers::AppId;
pub use identifiers::HexColor;
pub use preflight::PreflightError;
pub use preflight::PreflightReport;
pub use preflight::preflight_web_assets;
pub use schema::config_schema;
