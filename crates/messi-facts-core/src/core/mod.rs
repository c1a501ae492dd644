// crates/messi-facts-core/src/core/mod.rs
// ============================================================================
// Module: Messi Facts Core Types
// Description: Canonical request, response, locale, and catalog structures.
// Purpose: Provide stable, serializable types shared by dispatch and handlers.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what crosses the platform boundary (requests and
//! response envelopes) and the pure data the translator reads (locale tables
//! and typed message keys). None of these types carry behavior beyond
//! construction, lookup, and serialization.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod envelope;
pub mod locale;
pub mod message;
pub mod request;
pub mod response;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CompletenessReport;
pub use catalog::LocaleCompleteness;
pub use catalog::LocaleStrings;
pub use catalog::LocaleTable;
pub use catalog::MessageValue;
pub use envelope::IntentPayload;
pub use envelope::OutputSpeech;
pub use envelope::PlatformRequest;
pub use envelope::RepromptBody;
pub use envelope::RequestEnvelope;
pub use envelope::RequestError;
pub use envelope::ResponseBody;
pub use envelope::ResponseEnvelope;
pub use locale::DEFAULT_LOCALE;
pub use locale::LocaleTag;
pub use message::MessageKey;
pub use request::Request;
pub use request::RequestKind;
pub use response::Response;
pub use response::ResponseBuilder;
