//! Record validation tests for native-shell-config.
// crates/native-shell-config/tests/config_validation.rs
// =============================================================================
// Module: Record Validation Tests
// Description: Validate identifier, name, web directory, and Android rules.
// Purpose: Ensure well-formed records pass and malformed records fail closed.
// =============================================================================

use native_shell_config::ConfigFormat;
use native_shell_config::ConfigWarning;
use native_shell_config::HexColor;
use native_shell_config::ShellConfig;

mod common;

use common::assert_invalid;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Well-Formed Records
// ============================================================================

#[test]
fn minimal_config_validates_with_default_flags() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    let android = &config.android;
    if android.allow_mixed_content
        || android.capture_input
        || android.web_contents_debugging_enabled
        || android.use_legacy_bridge
    {
        return Err("android flags should default to false".to_string());
    }
    if android.background_color.is_some() || android.console_log_tag.is_some() {
        return Err("optional android settings should default to none".to_string());
    }
    if !config.startup.local_storage.is_empty() {
        return Err("startup storage should default to empty".to_string());
    }
    Ok(())
}

#[test]
fn onra_record_is_accepted() -> TestResult {
    let config = ShellConfig::from_str_with_format(common::ONRA_TOML, ConfigFormat::Toml)
        .map_err(|err| err.to_string())?;
    if config.app_id.as_str() != "com.onravoice.app" {
        return Err(format!("unexpected appId {}", config.app_id));
    }
    if config.app_name != "Onra Voice" || config.web_dir != "dist/public" {
        return Err("unexpected name or webDir".to_string());
    }
    if !config.android.allow_mixed_content
        || !config.android.web_contents_debugging_enabled
        || config.android.use_legacy_bridge
    {
        return Err("android flags not carried through".to_string());
    }
    if config.android.background_color != Some(HexColor::from("#1A1F2C")) {
        return Err("backgroundColor not carried through".to_string());
    }
    Ok(())
}

#[test]
fn json_record_is_accepted() -> TestResult {
    let content = r#"{
        "appId": "com.onravoice.app",
        "appName": "Onra Voice",
        "webDir": "dist/public",
        "android": { "allowMixedContent": true, "webContentsDebuggingEnabled": true, "useLegacyBridge": false }
    }"#;
    let config = ShellConfig::from_str_with_format(content, ConfigFormat::Json)
        .map_err(|err| err.to_string())?;
    if !config.android.allow_mixed_content || config.android.capture_input {
        return Err("json flags not carried through".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Missing and Unknown Fields
// ============================================================================

#[test]
fn missing_app_id_is_rejected() -> TestResult {
    let content = "appName = \"Onra Voice\"\nwebDir = \"dist/public\"\n";
    assert_invalid(ShellConfig::from_str_with_format(content, ConfigFormat::Toml), "appId")
}

#[test]
fn missing_web_dir_is_rejected() -> TestResult {
    let content = "appId = \"com.onravoice.app\"\nappName = \"Onra Voice\"\n";
    assert_invalid(ShellConfig::from_str_with_format(content, ConfigFormat::Toml), "webDir")
}

#[test]
fn unknown_top_level_key_is_rejected() -> TestResult {
    let content = format!("{}\nserver = \"http://localhost\"\n", common::MINIMAL_TOML);
    assert_invalid(ShellConfig::from_str_with_format(&content, ConfigFormat::Toml), "server")
}

#[test]
fn misspelled_android_flag_is_rejected() -> TestResult {
    let content = format!("{}\n[android]\nallowMixedContents = true\n", common::MINIMAL_TOML);
    assert_invalid(
        ShellConfig::from_str_with_format(&content, ConfigFormat::Toml),
        "allowMixedContents",
    )
}

#[test]
fn non_boolean_flag_is_rejected() -> TestResult {
    let content = format!("{}\n[android]\ncaptureInput = \"yes\"\n", common::MINIMAL_TOML);
    assert_invalid(ShellConfig::from_str_with_format(&content, ConfigFormat::Toml), "parse error")
}

// ============================================================================
// SECTION: Application Identifier
// ============================================================================

#[test]
fn app_id_requires_reverse_domain_form() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    for (raw, needle) in [
        ("", "non-empty"),
        ("app", "reverse-domain"),
        ("com..app", "empty segments"),
        ("com.example.", "empty segments"),
        ("com.1app", "must start with a letter"),
        ("com.example-app.x", "only letters, digits, or underscores"),
        ("com.new.app", "reserved word"),
        ("com.onra voice.app", "only letters, digits, or underscores"),
    ] {
        config.app_id = raw.into();
        assert_invalid(config.validate(), needle).map_err(|err| format!("{raw}: {err}"))?;
    }
    Ok(())
}

#[test]
fn app_id_accepts_underscores_and_digits() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.app_id = "io.example_2.app9".into();
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn app_id_rejects_excessive_length() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.app_id = format!("com.{}", "a".repeat(300)).into();
    assert_invalid(config.validate(), "appId exceeds max length")
}

// ============================================================================
// SECTION: Display Name and Web Directory
// ============================================================================

#[test]
fn app_name_must_be_printable_and_non_empty() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.app_name = "   ".to_string();
    assert_invalid(config.validate(), "appName must be non-empty")?;
    config.app_name = "Onra\nVoice".to_string();
    assert_invalid(config.validate(), "control characters")?;
    Ok(())
}

#[test]
fn web_dir_must_be_relative() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    for raw in ["/srv/www", "C:/dist", "\\dist"] {
        config.web_dir = raw.to_string();
        assert_invalid(config.validate(), "must be relative")
            .map_err(|err| format!("{raw}: {err}"))?;
    }
    Ok(())
}

#[test]
fn web_dir_rejects_empty_and_escaping_paths() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.web_dir = String::new();
    assert_invalid(config.validate(), "webDir must be non-empty")?;
    config.web_dir = "../shared/www".to_string();
    assert_invalid(config.validate(), "'..'")?;
    config.web_dir = "dist\\public".to_string();
    assert_invalid(config.validate(), "backslashes")?;
    config.web_dir = ".".to_string();
    assert_invalid(config.validate(), "below the project root")?;
    Ok(())
}

// ============================================================================
// SECTION: Android Block
// ============================================================================

#[test]
fn background_color_must_be_hex() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.android.background_color = Some(HexColor::from("navy"));
    assert_invalid(config.validate(), "android.backgroundColor")?;
    config.android.background_color = Some(HexColor::from("#1A1F2C80"));
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn console_log_tag_respects_platform_limit() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.android.console_log_tag = Some("OnraVoiceConsoleForwarder".to_string());
    assert_invalid(config.validate(), "android.consoleLogTag")?;
    config.android.console_log_tag = Some("OnraVoice".to_string());
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn flags_have_no_cross_field_constraints() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    for mask in 0_u8..16 {
        config.android.allow_mixed_content = mask & 1 != 0;
        config.android.capture_input = mask & 2 != 0;
        config.android.web_contents_debugging_enabled = mask & 4 != 0;
        config.android.use_legacy_bridge = mask & 8 != 0;
        config.validate().map_err(|err| format!("mask {mask}: {err}"))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Startup Block
// ============================================================================

#[test]
fn startup_storage_enforces_limits() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.startup.local_storage.insert(" ".to_string(), "x".to_string());
    assert_invalid(config.validate(), "keys must be non-empty")?;

    config.startup.local_storage.clear();
    config.startup.local_storage.insert("k".to_string(), "v".repeat(5_000));
    assert_invalid(config.validate(), "value exceeds max length")?;

    config.startup.local_storage.clear();
    for index in 0..65 {
        config.startup.local_storage.insert(format!("key_{index}"), String::new());
    }
    assert_invalid(config.validate(), "too many entries")?;
    Ok(())
}

// ============================================================================
// SECTION: Warnings
// ============================================================================

#[test]
fn warnings_flag_release_risks_in_stable_order() -> TestResult {
    let mut config = common::config_from_toml(common::ONRA_TOML).map_err(|err| err.to_string())?;
    config.android.use_legacy_bridge = true;
    config.startup.local_storage.insert("ADMIN_PASSWORD".to_string(), "admin123".to_string());
    config.startup.local_storage.insert("USE_MEMORY_STORAGE".to_string(), "true".to_string());
    let warnings = config.warnings();
    let expected = vec![
        ConfigWarning::MixedContentAllowed,
        ConfigWarning::WebDebuggingEnabled,
        ConfigWarning::LegacyBridgeEnabled,
        ConfigWarning::CredentialInStartupStorage {
            key: "ADMIN_PASSWORD".to_string(),
        },
    ];
    if warnings != expected {
        return Err(format!("unexpected warnings: {warnings:?}"));
    }
    Ok(())
}

#[test]
fn minimal_config_has_no_warnings() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if !config.warnings().is_empty() {
        return Err("minimal config should not warn".to_string());
    }
    Ok(())
}
