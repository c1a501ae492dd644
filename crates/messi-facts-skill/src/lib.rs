// crates/messi-facts-skill/src/lib.rs
// ============================================================================
// Module: Messi Facts Skill Library
// Description: The Messi Facts handler chain wired onto the core dispatcher.
// Purpose: Turn platform request envelopes into localized response envelopes.
// Dependencies: messi-facts-core, messi-facts-config, rand, serde_json
// ============================================================================

//! ## Overview
//! This crate supplies everything skill-specific: the built-in English and
//! Spanish strings, the eight request handlers in precedence order, the error
//! handler, the localization and logging interceptors, and [`Skill`], which
//! assembles them from a [`messi_facts_config::SkillConfig`].
//!
//! ## Invariants
//! - Handler order is fixed: launch, hello, help, cancel/stop, fallback,
//!   session end, fact, reflector.
//! - Localization runs before request logging.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod facts;
pub mod handlers;
pub mod interceptors;
pub mod skill;
pub mod strings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use facts::FactSelector;
pub use facts::FixedSelector;
pub use facts::SeededSelector;
pub use facts::ThreadRngSelector;
pub use skill::InvokeError;
pub use skill::Skill;
pub use skill::SkillBuildError;
pub use skill::SkillBuilder;
pub use skill::USER_AGENT_PREFIX;
pub use strings::builtin_table;
