// crates/messi-facts-config/src/config.rs
// ============================================================================
// Module: Messi Facts Configuration
// Description: Configuration loading and validation for the Messi Facts skill.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: messi-facts-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; an empty file yields the built-in defaults.
//! When no path is given and the default file does not exist, defaults are
//! used as well. An explicitly requested file that cannot be read is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use messi_facts_core::DEFAULT_LOCALE;
use messi_facts_core::LocaleTag;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "messi-facts.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "MESSI_FACTS_CONFIG";
/// Default custom user agent appended to response envelopes.
pub const DEFAULT_USER_AGENT: &str = "sample/messi-facts/v1.0";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a locale tag.
pub(crate) const MAX_LOCALE_TAG_LENGTH: usize = 35;
/// Maximum length of the custom user agent.
pub(crate) const MAX_USER_AGENT_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Messi Facts skill configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillConfig {
    /// Locale resolution settings.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Structured logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Fact selection settings.
    #[serde(default)]
    pub facts: FactsConfig,
    /// Response envelope settings.
    #[serde(default)]
    pub skill: SkillMetaConfig,
    /// File the configuration was read from, when any (not serialized).
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl SkillConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved.path)?;
        if !resolved.explicit && !resolved.path.exists() {
            return Ok(Self::default());
        }
        let bytes = read_limited(&resolved.path)?;
        let mut config = Self::from_bytes(&bytes)?;
        config.source = Some(resolved.path);
        Ok(config)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bytes are oversized, not UTF-8,
    /// malformed TOML, or fail validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.locale.validate()?;
        self.logging.validate()?;
        self.skill.validate()?;
        Ok(())
    }

    /// Returns the locale resource path, resolving a relative
    /// `locale.resources` against the directory of the loaded config file.
    #[must_use]
    pub fn resources_path(&self) -> Option<PathBuf> {
        let resources = PathBuf::from(self.locale.resources.as_deref()?.trim());
        if resources.is_absolute() {
            return Some(resources);
        }
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) => Some(dir.join(resources)),
            None => Some(resources),
        }
    }
}

/// Locale resolution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Locale consulted when the requested locale lacks a key.
    #[serde(default = "default_fallback_locale")]
    pub fallback: String,
    /// Optional TOML locale table replacing the built-in strings.
    #[serde(default)]
    pub resources: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback_locale(),
            resources: None,
        }
    }
}

impl LocaleConfig {
    /// Validates locale configuration and normalizes the fallback tag.
    fn validate(&mut self) -> Result<(), ConfigError> {
        let trimmed = self.fallback.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("locale.fallback must be non-empty".to_string()));
        }
        if trimmed.len() > MAX_LOCALE_TAG_LENGTH {
            return Err(ConfigError::Invalid("locale.fallback exceeds max length".to_string()));
        }
        if !trimmed.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
            return Err(ConfigError::Invalid(
                "locale.fallback must contain only letters, digits, '-' or '_'".to_string(),
            ));
        }
        self.fallback = LocaleTag::parse(trimmed).to_string();
        if let Some(resources) = &self.resources {
            validate_path_string("locale.resources", resources)?;
        }
        Ok(())
    }
}

/// Log sink destinations.
///
/// # Invariants
/// - Stdout is never a destination; it carries the response envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSinkKind {
    /// Write JSON lines to stderr.
    #[default]
    Stderr,
    /// Append JSON lines to `logging.path`.
    File,
}

/// Structured logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Whether request and response logging is enabled.
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// Log destination.
    #[serde(default)]
    pub sink: LogSinkKind,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            sink: LogSinkKind::default(),
            path: None,
        }
    }
}

impl LoggingConfig {
    /// Validates logging configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (LogSinkKind::File, None) => Err(ConfigError::Invalid(
                "logging.sink = \"file\" requires logging.path".to_string(),
            )),
            (LogSinkKind::File, Some(path)) => validate_path_string("logging.path", path),
            (LogSinkKind::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "logging.path is only valid with logging.sink = \"file\"".to_string(),
            )),
            (LogSinkKind::Stderr, None) => Ok(()),
        }
    }
}

/// Fact selection configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactsConfig {
    /// Seed for deterministic fact selection; thread RNG when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response envelope configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillMetaConfig {
    /// Custom user agent appended to the crate user agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SkillMetaConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

impl SkillMetaConfig {
    /// Validates envelope configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let trimmed = self.user_agent.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("skill.user_agent must be non-empty".to_string()));
        }
        if trimmed.len() > MAX_USER_AGENT_LENGTH {
            return Err(ConfigError::Invalid("skill.user_agent exceeds max length".to_string()));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(
                "skill.user_agent must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads at most one byte past [`MAX_CONFIG_FILE_SIZE`] from `path`.
pub(crate) fn read_limited(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let file =
        File::open(path).map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    let limit = u64::try_from(MAX_CONFIG_FILE_SIZE).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    file.take(limit)
        .read_to_end(&mut bytes)
        .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    Ok(bytes)
}

/// Config path plus whether the caller asked for it explicitly.
struct ResolvedPath {
    /// Path to read.
    path: PathBuf,
    /// False only for the implicit default file name.
    explicit: bool,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            explicit: true,
        });
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            explicit: true,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        explicit: false,
    })
}

/// Validates the resolved path against length limits.
pub(crate) fn validate_path(path: &Path) -> Result<(), ConfigError> {
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

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Default fallback locale.
fn default_fallback_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Logging is on unless disabled.
const fn default_logging_enabled() -> bool {
    true
}

/// Default custom user agent.
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use std::path::Path;

    use super::ConfigError;
    use super::MAX_PATH_COMPONENT_LENGTH;
    use super::MAX_TOTAL_PATH_LENGTH;
    use super::validate_path;
    use super::validate_path_string;

    #[test]
    fn validate_path_string_rejects_whitespace_only() {
        let err = validate_path_string("logging.path", "   ").unwrap_err();
        assert_eq!(err, ConfigError::Invalid("logging.path must be non-empty".to_string()));
    }

    #[test]
    fn validate_path_string_rejects_component_too_long() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        let err = validate_path_string("locale.resources", &format!("dir/{component}")).unwrap_err();
        assert!(err.to_string().contains("locale.resources path component too long"));
    }

    #[test]
    fn validate_path_string_accepts_component_at_max() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH);
        assert!(validate_path_string("logging.path", &component).is_ok());
    }

    #[test]
    fn validate_path_rejects_total_length() {
        let long = "a/".repeat(MAX_TOTAL_PATH_LENGTH / 2 + 1);
        assert!(validate_path(Path::new(&long)).is_err());
    }
}
