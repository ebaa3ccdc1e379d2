// crates/native-shell-config/src/identifiers.rs
// ============================================================================
// Module: Native Shell Identifiers
// Description: Opaque string wrappers for application identity and colors.
// Purpose: Provide strongly typed, serializable values with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers serialize as plain strings. Validation is handled by
//! [`crate::config::ShellConfig::validate`] rather than within these wrappers,
//! so a freshly deserialized value may still be malformed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Reverse-domain application identifier (for example `com.example.app`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Creates a new application identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the dot-separated segments of the identifier.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Hex color string in `#RRGGBB` or `#RRGGBBAA` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Creates a new hex color value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the color as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the value is a well-formed `#RRGGBB` or `#RRGGBBAA` color.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|byte| byte.is_ascii_hexdigit())
        })
    }

    /// Parses the color into `(red, green, blue, alpha)` components.
    ///
    /// Alpha defaults to `255` for six-digit colors. Returns `None` when the
    /// value is not well formed.
    #[must_use]
    pub fn rgba(&self) -> Option<(u8, u8, u8, u8)> {
        if !self.is_well_formed() {
            return None;
        }
        let digits = &self.0[1..];
        let channel = |index: usize| u8::from_str_radix(digits.get(index..index + 2)?, 16).ok();
        let alpha = if digits.len() == 8 { channel(6)? } else { u8::MAX };
        Some((channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HexColor {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
