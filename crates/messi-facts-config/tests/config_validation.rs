//! Config defaults and validation tests for messi-facts-config.
// crates/messi-facts-config/tests/config_validation.rs
// =============================================================================
// Module: Config Defaults and Validation Tests
// Description: Validate default behavior and field-level invariants.
// Purpose: Ensure minimal config is valid and bad values fail closed.
// =============================================================================

use std::path::PathBuf;

use messi_facts_config::ConfigError;
use messi_facts_config::DEFAULT_USER_AGENT;
use messi_facts_config::LogSinkKind;
use messi_facts_config::SkillConfig;

mod common;

type TestResult = Result<(), String>;

#[test]
fn empty_config_yields_defaults() -> TestResult {
    let config = common::config_from_toml("").map_err(|err| err.to_string())?;
    if config.locale.fallback != "en" {
        return Err(format!("unexpected fallback {}", config.locale.fallback));
    }
    if !config.logging.enabled || config.logging.sink != LogSinkKind::Stderr {
        return Err("logging should default to enabled stderr".to_string());
    }
    if config.facts.seed.is_some() {
        return Err("facts.seed should default to none".to_string());
    }
    if config.skill.user_agent != DEFAULT_USER_AGENT {
        return Err(format!("unexpected user agent {}", config.skill.user_agent));
    }
    Ok(())
}

#[test]
fn full_config_parses() -> TestResult {
    let config = common::config_from_toml(
        r#"
[locale]
fallback = "ES"
resources = "strings.toml"

[logging]
enabled = true
sink = "file"
path = "skill.log"

[facts]
seed = 7

[skill]
user_agent = "custom/agent"
"#,
    )
    .map_err(|err| err.to_string())?;
    if config.locale.fallback != "es" {
        return Err("fallback should be normalized to lowercase".to_string());
    }
    if config.facts.seed != Some(7) {
        return Err("seed not parsed".to_string());
    }
    if config.logging.sink != LogSinkKind::File {
        return Err("sink not parsed".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[logging]\nsink = \"file\"\n"),
        "logging.sink = \"file\" requires logging.path",
    )
}

#[test]
fn stdout_sink_is_not_a_log_destination() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[logging]\nsink = \"stdout\"\n"),
        "unknown variant `stdout`",
    )
}

#[test]
fn path_without_file_sink_is_rejected() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[logging]\npath = \"skill.log\"\n"),
        "logging.path is only valid",
    )
}

#[test]
fn empty_fallback_is_rejected() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[locale]\nfallback = \"  \"\n"),
        "locale.fallback must be non-empty",
    )
}

#[test]
fn malformed_fallback_is_rejected() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[locale]\nfallback = \"en us\"\n"),
        "locale.fallback must contain only",
    )
}

#[test]
fn control_characters_in_user_agent_are_rejected() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[skill]\nuser_agent = \"bad\\nagent\"\n"),
        "skill.user_agent must not contain control characters",
    )
}

#[test]
fn unknown_fields_are_parse_errors() -> TestResult {
    match common::config_from_toml("[facts]\nsed = 3\n") {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn oversized_config_is_rejected() -> TestResult {
    let padding = "#".repeat(1024 * 1024 + 1);
    common::assert_invalid(SkillConfig::from_bytes(padding.as_bytes()), "size limit")
}

#[test]
fn load_reads_explicit_path_and_records_source() -> TestResult {
    let (_dir, path) = common::write_temp("messi-facts.toml", "[facts]\nseed = 42\n")?;
    let config = SkillConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.facts.seed != Some(42) {
        return Err("seed not loaded".to_string());
    }
    if config.source.as_deref() != Some(path.as_path()) {
        return Err("source path not recorded".to_string());
    }
    Ok(())
}

#[test]
fn relative_resources_resolve_against_config_dir() -> TestResult {
    let (dir, path) =
        common::write_temp("messi-facts.toml", "[locale]\nresources = \"strings.toml\"\n")?;
    let config = SkillConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.resources_path() != Some(dir.path().join("strings.toml")) {
        return Err(format!("unexpected resources path {:?}", config.resources_path()));
    }
    Ok(())
}

#[test]
fn resources_without_config_file_stay_relative() -> TestResult {
    let config = common::config_from_toml("[locale]\nresources = \"strings.toml\"\n")
        .map_err(|err| err.to_string())?;
    if config.resources_path() != Some(PathBuf::from("strings.toml")) {
        return Err(format!("unexpected resources path {:?}", config.resources_path()));
    }
    Ok(())
}

#[test]
fn load_missing_explicit_path_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    match SkillConfig::load(Some(&dir.path().join("absent.toml"))) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}
