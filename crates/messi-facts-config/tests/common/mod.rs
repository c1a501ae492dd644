// crates/messi-facts-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for messi-facts-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use messi_facts_config::ConfigError;
use messi_facts_config::SkillConfig;
use tempfile::TempDir;

/// Parses and validates a TOML string into a `SkillConfig`.
pub fn config_from_toml(toml_str: &str) -> Result<SkillConfig, ConfigError> {
    SkillConfig::from_bytes(toml_str.as_bytes())
}

/// Writes `contents` to `name` inside a fresh temp dir.
pub fn write_temp(name: &str, contents: &str) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join(name);
    fs::write(&path, contents).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
