// crates/messi-facts-core/src/runtime/mod.rs
// ============================================================================
// Module: Messi Facts Runtime
// Description: Dispatch, translation, and logging runtime.
// Purpose: Execute one request through the handler chain.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime wires the [`crate::interfaces`] seams together: the
//! [`SkillDispatcher`] owns the ordered chains, the [`RequestContext`] carries
//! per-request state, and the [`Translator`] resolves localized strings.

pub mod context;
pub mod dispatcher;
pub mod logging;
pub mod translator;

pub use context::RequestAttributes;
pub use context::RequestContext;
pub use dispatcher::DispatcherBuildError;
pub use dispatcher::SkillDispatcher;
pub use dispatcher::SkillDispatcherBuilder;
pub use dispatcher::SkillError;
pub use logging::JsonLinesLogSink;
pub use logging::NoopLogSink;
pub use logging::SkillLogEvent;
pub use logging::SkillLogSink;
pub use translator::Resolved;
pub use translator::TranslateError;
pub use translator::Translator;
pub use translator::format_template;
pub use translator::placeholder_count;
pub use translator::resolve;
