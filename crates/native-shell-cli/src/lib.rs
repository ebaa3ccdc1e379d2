// crates/native-shell-cli/src/lib.rs
// ============================================================================
// Module: Native Shell CLI Library
// Description: Shared helpers for the native shell command-line interface.
// Purpose: Provide reusable components (message catalog) for the CLI binary and tests.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! This library houses shared CLI utilities, including the message catalog.
//! The binary entry point (`src/main.rs`) imports these helpers to keep all
//! user-facing output consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message catalog and translation helpers.
pub mod i18n;

#[cfg(test)]
mod tests;
