// crates/messi-facts-core/src/lib.rs
// ============================================================================
// Module: Messi Facts Core Library
// Description: Public API surface for the skill dispatch and localization core.
// Purpose: Expose request/response types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Messi Facts core provides the request model, the locale resource table, the
//! pure translator, and the ordered first-match dispatcher that routes a
//! voice-platform request to exactly one handler. It holds no state across
//! requests and performs no I/O beyond the log sinks it is handed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ErrorHandler;
pub use interfaces::HandlerError;
pub use interfaces::RequestHandler;
pub use interfaces::RequestInterceptor;
pub use interfaces::ResponseInterceptor;
pub use runtime::DispatcherBuildError;
pub use runtime::JsonLinesLogSink;
pub use runtime::NoopLogSink;
pub use runtime::RequestAttributes;
pub use runtime::RequestContext;
pub use runtime::Resolved;
pub use runtime::SkillDispatcher;
pub use runtime::SkillDispatcherBuilder;
pub use runtime::SkillError;
pub use runtime::SkillLogEvent;
pub use runtime::SkillLogSink;
pub use runtime::TranslateError;
pub use runtime::Translator;
pub use runtime::resolve;
