// crates/messi-facts-core/src/runtime/dispatcher.rs
// ============================================================================
// Module: Skill Dispatcher
// Description: Ordered first-match dispatch wrapped in an error boundary.
// Purpose: Route each request to exactly one handler and always answer.
// Dependencies: crate::{core, interfaces, runtime::context}, thiserror
// ============================================================================

//! ## Overview
//! The dispatcher runs request interceptors, evaluates handler predicates in
//! registration order, invokes the first handler that accepts the request,
//! then runs response interceptors. Any [`HandlerError`] along the way
//! (including "nothing matched") is handed to the first error handler that
//! accepts it. The handler lists are fixed when [`SkillDispatcherBuilder::build`]
//! returns.
//!
//! ## Invariants
//! - First match wins; later handlers are never consulted once one accepts.
//! - At most one request handler and at most one error handler run per request.
//! - Errors are never retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::request::Request;
use crate::core::request::RequestKind;
use crate::core::response::Response;
use crate::interfaces::ErrorHandler;
use crate::interfaces::HandlerError;
use crate::interfaces::RequestHandler;
use crate::interfaces::RequestInterceptor;
use crate::interfaces::ResponseInterceptor;
use crate::runtime::context::RequestContext;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors that escape the error boundary.
///
/// # Invariants
/// - Only returned when no error handler could produce a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    /// No error handler accepted the failure.
    #[error("unhandled skill error: {0}")]
    Unhandled(HandlerError),
    /// The error handler itself failed.
    #[error("error handler {handler} failed ({failure}) while handling: {original}")]
    ErrorHandlerFailed {
        /// Error handler name.
        handler: &'static str,
        /// Failure being handled.
        original: HandlerError,
        /// Failure of the error handler.
        failure: HandlerError,
    },
}

/// Errors raised while assembling a dispatcher.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatcherBuildError {
    /// No request handlers were registered.
    #[error("dispatcher requires at least one request handler")]
    NoRequestHandlers,
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for a [`SkillDispatcher`].
#[derive(Default)]
pub struct SkillDispatcherBuilder {
    /// Pre-dispatch hooks in run order.
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    /// Request handlers in precedence order.
    handlers: Vec<Box<dyn RequestHandler>>,
    /// Post-dispatch hooks in run order.
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
    /// Error handlers in precedence order.
    error_handlers: Vec<Box<dyn ErrorHandler>>,
}

impl SkillDispatcherBuilder {
    /// Appends a request handler; earlier handlers take precedence.
    #[must_use]
    pub fn request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Appends an error handler; earlier handlers take precedence.
    #[must_use]
    pub fn error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handlers.push(Box::new(handler));
        self
    }

    /// Appends a request interceptor.
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    /// Appends a response interceptor.
    #[must_use]
    pub fn response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    /// Freezes the handler chain.
    ///
    /// # Errors
    ///
    /// Returns [`DispatcherBuildError::NoRequestHandlers`] for an empty chain.
    pub fn build(self) -> Result<SkillDispatcher, DispatcherBuildError> {
        if self.handlers.is_empty() {
            return Err(DispatcherBuildError::NoRequestHandlers);
        }
        Ok(SkillDispatcher {
            request_interceptors: self.request_interceptors,
            handlers: self.handlers,
            response_interceptors: self.response_interceptors,
            error_handlers: self.error_handlers,
        })
    }
}

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// Ordered first-match dispatcher.
pub struct SkillDispatcher {
    /// Pre-dispatch hooks in run order.
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    /// Request handlers in precedence order.
    handlers: Vec<Box<dyn RequestHandler>>,
    /// Post-dispatch hooks in run order.
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
    /// Error handlers in precedence order.
    error_handlers: Vec<Box<dyn ErrorHandler>>,
}

impl SkillDispatcher {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> SkillDispatcherBuilder {
        SkillDispatcherBuilder::default()
    }

    /// Returns the registered handler names in precedence order.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// Returns the first handler whose predicate accepts `request`.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingIntentName`] for an intent request with
    /// no name, and [`HandlerError::NoMatchingHandler`] when none accepts it.
    pub fn select(&self, request: &Request) -> Result<&dyn RequestHandler, HandlerError> {
        if matches!(request.kind(), RequestKind::MalformedIntent) {
            return Err(HandlerError::MissingIntentName {
                request_id: request.request_id().unwrap_or("unknown").to_string(),
            });
        }
        self.handlers
            .iter()
            .find(|handler| handler.can_handle(request))
            .map(|handler| &**handler)
            .ok_or(HandlerError::NoMatchingHandler {
                kind: request.kind().label(),
            })
    }

    /// Dispatches one request, routing any failure through the error boundary.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError`] only when no error handler produced a response.
    pub fn dispatch(&self, ctx: &mut RequestContext) -> Result<Response, SkillError> {
        match self.dispatch_inner(ctx) {
            Ok(response) => Ok(response),
            Err(error) => self.handle_error(ctx, error),
        }
    }

    /// Runs interceptors and the selected handler without the error boundary.
    fn dispatch_inner(&self, ctx: &mut RequestContext) -> Result<Response, HandlerError> {
        for interceptor in &self.request_interceptors {
            interceptor.process(ctx)?;
        }
        let handler = self.select(ctx.request())?;
        ctx.attributes_mut().set_handler(handler.name());
        let response = handler.handle(ctx)?;
        for interceptor in &self.response_interceptors {
            interceptor.process(ctx, &response)?;
        }
        Ok(response)
    }

    /// Hands `error` to the first error handler that accepts it.
    fn handle_error(
        &self,
        ctx: &RequestContext,
        error: HandlerError,
    ) -> Result<Response, SkillError> {
        let Some(handler) =
            self.error_handlers.iter().find(|handler| handler.can_handle(ctx, &error))
        else {
            return Err(SkillError::Unhandled(error));
        };
        handler.handle(ctx, &error).map_err(|failure| SkillError::ErrorHandlerFailed {
            handler: handler.name(),
            original: error,
            failure,
        })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
