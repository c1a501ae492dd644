// crates/messi-facts-config/src/resources.rs
// ============================================================================
// Module: Locale Resource Loading
// Description: Reads external TOML locale tables under config limits.
// Purpose: Let deployments replace the built-in strings without rebuilding.
// Dependencies: messi-facts-core, toml
// ============================================================================

//! ## Overview
//! A resource file is a TOML document with one table per locale:
//!
//! ```toml
//! [en]
//! HELLO_MESSAGE = "Hello World!"
//! FACTS = ["first fact", "second fact"]
//! ```
//!
//! The same size and path limits as the config file apply. Keys are not
//! checked against the known message set here; completeness is reported by
//! [`messi_facts_core::LocaleTable::completeness_report`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use messi_facts_core::LocaleTable;

use crate::config::ConfigError;
use crate::config::MAX_CONFIG_FILE_SIZE;
use crate::config::read_limited;
use crate::config::validate_path;

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads a locale table from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read, exceeds limits, or
/// does not parse as a locale table.
pub fn load_locale_table(path: &Path) -> Result<LocaleTable, ConfigError> {
    validate_path(path)?;
    let bytes = read_limited(path)?;
    parse_locale_table(&bytes)
}

/// Parses a locale table from TOML bytes.
///
/// # Errors
///
/// Returns [`ConfigError`] when the bytes exceed limits, are not UTF-8, do
/// not parse, or define no locales.
pub fn parse_locale_table(bytes: &[u8]) -> Result<LocaleTable, ConfigError> {
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid("locale resources exceed size limit".to_string()));
    }
    let content = std::str::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid("locale resources must be utf-8".to_string()))?;
    let table: LocaleTable =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    if table.is_empty() {
        return Err(ConfigError::Invalid("locale resources define no locales".to_string()));
    }
    Ok(table)
}
