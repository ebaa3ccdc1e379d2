// crates/native-shell-config/src/config.rs
// ============================================================================
// Module: Native Shell Configuration
// Description: Build configuration loading and validation for the native shell.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, serde_json, toml
// ============================================================================

//! ## Overview
//! The build configuration record is loaded from a TOML or JSON file with
//! strict size and path limits. Keys use the camelCase names the external
//! build tool understands (`appId`, `webDir`, `android.allowMixedContent`).
//! Missing or invalid configuration fails closed; unknown keys are rejected.
//!
//! The record is constructed once at build time and is read-only thereafter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::identifiers::AppId;
use crate::identifiers::HexColor;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "native-shell.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "NATIVE_SHELL_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the application identifier.
pub(crate) const MAX_APP_ID_LENGTH: usize = 255;
/// Maximum length of the application display name.
pub(crate) const MAX_APP_NAME_LENGTH: usize = 255;
/// Maximum length of an Android log tag.
pub(crate) const MAX_CONSOLE_LOG_TAG_LENGTH: usize = 23;
/// Maximum number of startup storage entries.
pub(crate) const MAX_STARTUP_STORAGE_ENTRIES: usize = 64;
/// Maximum length of a startup storage key.
pub(crate) const MAX_STARTUP_STORAGE_KEY_LENGTH: usize = 256;
/// Maximum length of a startup storage value.
pub(crate) const MAX_STARTUP_STORAGE_VALUE_LENGTH: usize = 4096;

/// Java reserved words; Android package segments may not use them.
const JAVA_RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Substrings (after folding to lowercase alphanumerics) that mark a
/// startup storage key as credential-like.
const CREDENTIAL_MARKERS: &[&str] = &["password", "passwd", "secret", "token", "apikey"];

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Native shell build configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShellConfig {
    /// Reverse-domain package identity for the target platform.
    pub app_id: AppId,
    /// Human-readable name shown to the end user.
    pub app_name: String,
    /// Relative path of the pre-built web bundle embedded into the shell.
    pub web_dir: String,
    /// Android runtime flags.
    #[serde(default)]
    pub android: AndroidConfig,
    /// Startup bootstrap applied when the shell's web view starts.
    #[serde(default)]
    pub startup: StartupConfig,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl ShellConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", resolved.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::parse(content, ConfigFormat::from_path(&resolved))?;
        config.source_path = Some(resolved);
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates in-memory configuration content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        if content.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let config = Self::parse(content, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any field is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_app_id(&self.app_id)?;
        validate_app_name(&self.app_name)?;
        validate_web_dir(&self.web_dir)?;
        self.android.validate()?;
        self.startup.validate()?;
        Ok(())
    }

    /// Returns non-fatal advisories for release builds, in a stable order.
    #[must_use]
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.android.allow_mixed_content {
            warnings.push(ConfigWarning::MixedContentAllowed);
        }
        if self.android.web_contents_debugging_enabled {
            warnings.push(ConfigWarning::WebDebuggingEnabled);
        }
        if self.android.use_legacy_bridge {
            warnings.push(ConfigWarning::LegacyBridgeEnabled);
        }
        for key in self.startup.local_storage.keys() {
            if looks_like_credential(key) {
                warnings.push(ConfigWarning::CredentialInStartupStorage {
                    key: key.clone(),
                });
            }
        }
        warnings
    }

    /// Resolves the web asset directory against a project root.
    #[must_use]
    pub fn web_dir_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.web_dir)
    }

    /// Returns the record in the external build tool's JSON shape.
    ///
    /// Shell-only settings (`android.consoleLogTag`, `startup`) are not part
    /// of the build tool's contract and are omitted, as is an unset
    /// `android.backgroundColor`.
    #[must_use]
    pub fn to_build_tool_json(&self) -> Value {
        let mut android = json!({
            "allowMixedContent": self.android.allow_mixed_content,
            "captureInput": self.android.capture_input,
            "webContentsDebuggingEnabled": self.android.web_contents_debugging_enabled,
            "useLegacyBridge": self.android.use_legacy_bridge,
        });
        if let (Some(color), Some(map)) =
            (&self.android.background_color, android.as_object_mut())
        {
            map.insert("backgroundColor".to_string(), Value::String(color.to_string()));
        }
        json!({
            "appId": self.app_id.as_str(),
            "appName": self.app_name,
            "webDir": self.web_dir,
            "android": android,
        })
    }

    /// Deserializes content in the given format without validating it.
    fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
        }
    }
}

/// Android runtime flags for the native shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AndroidConfig {
    /// Allow the web view to load http content alongside https content.
    #[serde(default)]
    pub allow_mixed_content: bool,
    /// Background color shown before web content paints.
    #[serde(default)]
    pub background_color: Option<HexColor>,
    /// Intercept raw input events before the web view sees them.
    #[serde(default)]
    pub capture_input: bool,
    /// Expose remote web-content debugging.
    #[serde(default)]
    pub web_contents_debugging_enabled: bool,
    /// Use the older native/web bridge implementation.
    #[serde(default)]
    pub use_legacy_bridge: bool,
    /// Tag for web console messages forwarded to the platform log.
    #[serde(default)]
    pub console_log_tag: Option<String>,
}

impl AndroidConfig {
    /// Validates the Android block.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(color) = &self.background_color
            && !color.is_well_formed()
        {
            return Err(ConfigError::Invalid(format!(
                "android.backgroundColor must be #RRGGBB or #RRGGBBAA hex (got {color})"
            )));
        }
        if let Some(tag) = &self.console_log_tag {
            validate_console_log_tag(tag)?;
        }
        Ok(())
    }
}

/// Startup bootstrap applied when the shell's web view starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartupConfig {
    /// Entries written into the web view's local storage, in key order.
    #[serde(default)]
    pub local_storage: BTreeMap<String, String>,
}

impl StartupConfig {
    /// Validates startup storage limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.local_storage.len() > MAX_STARTUP_STORAGE_ENTRIES {
            return Err(ConfigError::Invalid(
                "startup.localStorage has too many entries".to_string(),
            ));
        }
        for (key, value) in &self.local_storage {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "startup.localStorage keys must be non-empty".to_string(),
                ));
            }
            if key.len() > MAX_STARTUP_STORAGE_KEY_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "startup.localStorage key exceeds max length: {key}"
                )));
            }
            if value.len() > MAX_STARTUP_STORAGE_VALUE_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "startup.localStorage.{key} value exceeds max length"
                )));
            }
        }
        Ok(())
    }
}

/// On-disk configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ============================================================================
// SECTION: Warnings
// ============================================================================

/// Non-fatal configuration advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The web view may load insecure content.
    MixedContentAllowed,
    /// Remote web-content debugging is exposed.
    WebDebuggingEnabled,
    /// The legacy native/web bridge is selected.
    LegacyBridgeEnabled,
    /// A startup storage key looks like it carries a credential.
    CredentialInStartupStorage {
        /// Offending key.
        key: String,
    },
}

impl ConfigWarning {
    /// Stable machine-readable warning code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MixedContentAllowed => "mixed_content_allowed",
            Self::WebDebuggingEnabled => "web_debugging_enabled",
            Self::LegacyBridgeEnabled => "legacy_bridge_enabled",
            Self::CredentialInStartupStorage {
                ..
            } => "credential_in_startup_storage",
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedContentAllowed => {
                f.write_str("android.allowMixedContent=true lets the web view load http content")
            }
            Self::WebDebuggingEnabled => f.write_str(
                "android.webContentsDebuggingEnabled=true exposes remote debugging; disable for \
                 release builds",
            ),
            Self::LegacyBridgeEnabled => {
                f.write_str("android.useLegacyBridge=true selects the deprecated bridge")
            }
            Self::CredentialInStartupStorage {
                key,
            } => write!(f, "startup.localStorage.{key} looks like a credential shipped in the app"),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML or JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates the reverse-domain application identifier.
fn validate_app_id(app_id: &AppId) -> Result<(), ConfigError> {
    let value = app_id.as_str();
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid("appId must be non-empty".to_string()));
    }
    if value.len() > MAX_APP_ID_LENGTH {
        return Err(ConfigError::Invalid("appId exceeds max length".to_string()));
    }
    if app_id.segments().count() < 2 {
        return Err(ConfigError::Invalid(format!(
            "appId must be reverse-domain with at least two segments (e.g. com.example.app), got \
             {value}"
        )));
    }
    for segment in app_id.segments() {
        if segment.is_empty() {
            return Err(ConfigError::Invalid("appId must not contain empty segments".to_string()));
        }
        if !segment.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid(format!(
                "appId segment {segment} must start with a letter"
            )));
        }
        if !segment.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(ConfigError::Invalid(format!(
                "appId segment {segment} must contain only letters, digits, or underscores"
            )));
        }
        if JAVA_RESERVED_WORDS.contains(&segment) {
            return Err(ConfigError::Invalid(format!(
                "appId segment {segment} is a reserved word"
            )));
        }
    }
    Ok(())
}

/// Validates the application display name.
fn validate_app_name(app_name: &str) -> Result<(), ConfigError> {
    if app_name.trim().is_empty() {
        return Err(ConfigError::Invalid("appName must be non-empty".to_string()));
    }
    if app_name.len() > MAX_APP_NAME_LENGTH {
        return Err(ConfigError::Invalid("appName exceeds max length".to_string()));
    }
    if app_name.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(
            "appName must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Validates the web asset directory as a non-empty relative path.
fn validate_web_dir(value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid("webDir must be non-empty".to_string()));
    }
    if value.trim() != value {
        return Err(ConfigError::Invalid(
            "webDir must not have leading or trailing whitespace".to_string(),
        ));
    }
    if value.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("webDir exceeds max length".to_string()));
    }
    if value.starts_with('/') || value.starts_with('\\') || has_drive_prefix(value) {
        return Err(ConfigError::Invalid(format!("webDir must be relative, got {value}")));
    }
    if value.contains('\\') {
        return Err(ConfigError::Invalid("webDir must not contain backslashes".to_string()));
    }
    let mut normal_components = 0_usize;
    for component in Path::new(value).components() {
        match component {
            Component::Normal(segment) => {
                if segment.to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
                    return Err(ConfigError::Invalid(
                        "webDir path component too long".to_string(),
                    ));
                }
                normal_components += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ConfigError::Invalid(
                    "webDir must not contain '..' segments".to_string(),
                ));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ConfigError::Invalid(format!(
                    "webDir must be relative, got {value}"
                )));
            }
        }
    }
    if normal_components == 0 {
        return Err(ConfigError::Invalid(
            "webDir must name a directory below the project root".to_string(),
        ));
    }
    Ok(())
}

/// Returns true for Windows drive-qualified paths such as `C:dist` or `C:/dist`.
fn has_drive_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Validates an Android log tag.
fn validate_console_log_tag(tag: &str) -> Result<(), ConfigError> {
    if tag.is_empty()
        || tag.len() > MAX_CONSOLE_LOG_TAG_LENGTH
        || !tag.chars().all(|ch| ch.is_ascii_graphic())
    {
        return Err(ConfigError::Invalid(format!(
            "android.consoleLogTag must be 1-{MAX_CONSOLE_LOG_TAG_LENGTH} printable ASCII \
             characters without spaces"
        )));
    }
    Ok(())
}

/// Returns true when a storage key looks like it names a credential.
fn looks_like_credential(key: &str) -> bool {
    let folded: String = key
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    CREDENTIAL_MARKERS.iter().any(|marker| folded.contains(marker))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use super::*;

    #[test]
    fn validate_web_dir_accepts_nested_relative_path() {
        assert!(validate_web_dir("dist/public").is_ok());
        assert!(validate_web_dir("./www").is_ok());
        assert!(validate_web_dir("build/").is_ok());
    }

    #[test]
    fn validate_web_dir_rejects_whitespace_only() {
        let result = validate_web_dir("   ");
        assert!(result.unwrap_err().to_string().contains("non-empty"));
    }

    #[test]
    fn validate_web_dir_rejects_surrounding_whitespace() {
        for raw in [" dist/public", "dist/public ", "\twww"] {
            let result = validate_web_dir(raw);
            assert!(
                result.unwrap_err().to_string().contains("leading or trailing whitespace"),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_web_dir_rejects_absolute_paths() {
        for raw in ["/var/www", "C:/dist", "c:dist", "\\\\server\\share"] {
            let result = validate_web_dir(raw);
            assert!(
                result.unwrap_err().to_string().contains("must be relative"),
                "{raw} should be rejected as absolute"
            );
        }
    }

    #[test]
    fn validate_web_dir_rejects_parent_segments() {
        let result = validate_web_dir("dist/../../etc");
        assert!(result.unwrap_err().to_string().contains("'..'"));
    }

    #[test]
    fn validate_web_dir_rejects_current_dir_only() {
        let result = validate_web_dir("./");
        assert!(result.unwrap_err().to_string().contains("below the project root"));
    }

    #[test]
    fn validate_web_dir_rejects_component_too_long() {
        let path = format!("dist/{}", "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1));
        let result = validate_web_dir(&path);
        assert!(result.unwrap_err().to_string().contains("component too long"));
    }

    #[test]
    fn validate_console_log_tag_enforces_length() {
        assert!(validate_console_log_tag("OnraVoice").is_ok());
        assert!(validate_console_log_tag(&"a".repeat(MAX_CONSOLE_LOG_TAG_LENGTH)).is_ok());
        assert!(validate_console_log_tag(&"a".repeat(MAX_CONSOLE_LOG_TAG_LENGTH + 1)).is_err());
        assert!(validate_console_log_tag("").is_err());
        assert!(validate_console_log_tag("Onra Voice").is_err());
    }

    #[test]
    fn looks_like_credential_folds_case_and_separators() {
        assert!(looks_like_credential("ADMIN_PASSWORD"));
        assert!(looks_like_credential("api-key"));
        assert!(looks_like_credential("sessionToken"));
        assert!(!looks_like_credential("USE_MEMORY_STORAGE"));
        assert!(!looks_like_credential("ADMIN_USERNAME"));
    }

    #[test]
    fn config_format_detects_json_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("shell.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("shell.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("native-shell.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("no-extension")), ConfigFormat::Toml);
    }
}
