// crates/messi-facts-core/src/interfaces/mod.rs
// ============================================================================
// Module: Messi Facts Interfaces
// Description: Dispatch seams for handlers, error handlers, and interceptors.
// Purpose: Define the contracts the dispatcher composes at startup.
// Dependencies: crate::{core, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The dispatcher only knows these traits. A skill supplies an ordered list of
//! [`RequestHandler`]s, an ordered list of [`ErrorHandler`]s, and the pre/post
//! interceptors that wrap each dispatch. Implementations must be synchronous,
//! must not retain per-request state, and report failure through
//! [`HandlerError`] rather than panicking.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::request::Request;
use crate::core::response::Response;
use crate::runtime::context::RequestContext;
use crate::runtime::translator::TranslateError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised inside the dispatch boundary.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Translation failed.
    #[error(transparent)]
    Translate(#[from] TranslateError),
    /// No handler predicate accepted the request.
    #[error("no handler matched {kind} request")]
    NoMatchingHandler {
        /// Request kind label.
        kind: &'static str,
    },
    /// An intent request carried no intent name to match on.
    #[error("intent request {request_id} has no intent name")]
    MissingIntentName {
        /// Platform request identifier (or `unknown`).
        request_id: String,
    },
    /// A handler ran before the localization interceptor bound a translator.
    #[error("translator is not bound to the request context")]
    TranslatorUnbound,
    /// The facts list resolved to no entries.
    #[error("fact list for locale {locale} is empty")]
    EmptyFacts {
        /// Requested locale.
        locale: String,
    },
    /// An interceptor rejected the request or response.
    #[error("interceptor {name} failed: {message}")]
    Interceptor {
        /// Interceptor name.
        name: &'static str,
        /// Failure detail.
        message: String,
    },
    /// A handler action failed for a reason of its own.
    #[error("handler {name} failed: {message}")]
    Action {
        /// Handler name.
        name: &'static str,
        /// Failure detail.
        message: String,
    },
}

impl HandlerError {
    /// Returns a stable label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Translate(_) => "translate",
            Self::NoMatchingHandler {
                ..
            } => "no_matching_handler",
            Self::MissingIntentName {
                ..
            } => "missing_intent_name",
            Self::TranslatorUnbound => "translator_unbound",
            Self::EmptyFacts {
                ..
            } => "empty_facts",
            Self::Interceptor {
                ..
            } => "interceptor",
            Self::Action {
                ..
            } => "action",
        }
    }
}

// ============================================================================
// SECTION: Request Handlers
// ============================================================================

/// A predicate/action pair in the ordered handler chain.
pub trait RequestHandler: Send + Sync {
    /// Returns a stable handler name for logs.
    fn name(&self) -> &'static str;

    /// Returns true when this handler accepts `request`.
    fn can_handle(&self, request: &Request) -> bool;

    /// Produces the response for an accepted request.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the response cannot be produced.
    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError>;
}

/// A handler in the error boundary.
pub trait ErrorHandler: Send + Sync {
    /// Returns a stable handler name for logs.
    fn name(&self) -> &'static str;

    /// Returns true when this handler accepts `error`.
    fn can_handle(&self, ctx: &RequestContext, error: &HandlerError) -> bool;

    /// Produces a response describing `error` to the user.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when even the error response cannot be built.
    fn handle(&self, ctx: &RequestContext, error: &HandlerError) -> Result<Response, HandlerError>;
}

// ============================================================================
// SECTION: Interceptors
// ============================================================================

/// Hook run before handler selection; may mutate request attributes.
pub trait RequestInterceptor: Send + Sync {
    /// Returns a stable interceptor name for logs.
    fn name(&self) -> &'static str;

    /// Processes the request context.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] to abort dispatch into the error boundary.
    fn process(&self, ctx: &mut RequestContext) -> Result<(), HandlerError>;
}

/// Hook run after a handler response; observes but cannot mutate.
pub trait ResponseInterceptor: Send + Sync {
    /// Returns a stable interceptor name for logs.
    fn name(&self) -> &'static str;

    /// Observes the finalized response.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] to replace the response with the error boundary's.
    fn process(&self, ctx: &RequestContext, response: &Response) -> Result<(), HandlerError>;
}
