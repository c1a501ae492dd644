// crates/messi-facts-cli/src/lib.rs
// ============================================================================
// Module: Messi Facts CLI Library
// Description: Shared helpers for the Messi Facts command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: messi-facts-core
// ============================================================================

//! ## Overview
//! This library houses the CLI message catalog. The binary entry point
//! (`src/main.rs`) routes all user-facing output through [`t!`] so the CLI
//! speaks the same languages as the skill.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
