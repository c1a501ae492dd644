// crates/messi-facts-config/src/lib.rs
// ============================================================================
// Module: Messi Facts Config Library
// Description: Canonical config model, validation, and locale resources.
// Purpose: Single source of truth for messi-facts.toml semantics.
// Dependencies: messi-facts-core, serde, toml
// ============================================================================

//! ## Overview
//! `messi-facts-config` defines the configuration model for the Messi Facts
//! skill. Loading is fail-closed: oversized, malformed, or inconsistent
//! files are rejected with a [`ConfigError`] naming the offending field.
//! External locale tables are loaded through the same limits.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod resources;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use resources::load_locale_table;
pub use resources::parse_locale_table;
