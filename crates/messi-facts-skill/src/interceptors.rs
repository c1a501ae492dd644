// crates/messi-facts-skill/src/interceptors.rs
// ============================================================================
// Module: Skill Interceptors
// Description: Localization and request/response logging hooks.
// Purpose: Bind the translator per request and record traffic.
// Dependencies: messi-facts-core, serde_json
// ============================================================================

//! ## Overview
//! [`LocalizationInterceptor`] binds a [`Translator`] for the request locale
//! into the context. It must be registered before
//! [`LoggingRequestInterceptor`] so that logging sees a fully prepared
//! context. [`LoggingResponseInterceptor`] records each handler response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use messi_facts_core::HandlerError;
use messi_facts_core::LocaleTable;
use messi_facts_core::RequestContext;
use messi_facts_core::RequestInterceptor;
use messi_facts_core::Response;
use messi_facts_core::ResponseInterceptor;
use messi_facts_core::SkillLogEvent;
use messi_facts_core::SkillLogSink;
use messi_facts_core::Translator;
use serde_json::Value;

// ============================================================================
// SECTION: Localization
// ============================================================================

/// Binds a translator for the request locale.
#[derive(Debug, Clone)]
pub struct LocalizationInterceptor {
    /// Shared locale table.
    table: Arc<LocaleTable>,
    /// Fallback locale code.
    fallback: String,
}

impl LocalizationInterceptor {
    /// Creates the interceptor over `table` with `fallback` as last resort.
    #[must_use]
    pub fn new(table: Arc<LocaleTable>, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }
}

impl RequestInterceptor for LocalizationInterceptor {
    fn name(&self) -> &'static str {
        "localization"
    }

    fn process(&self, ctx: &mut RequestContext) -> Result<(), HandlerError> {
        let translator = Translator::new(
            Arc::clone(&self.table),
            &self.fallback,
            ctx.request().locale().as_str(),
        );
        ctx.attributes_mut().bind_translator(translator);
        Ok(())
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Records every inbound request.
pub struct LoggingRequestInterceptor {
    /// Destination sink.
    sink: Arc<dyn SkillLogSink>,
}

impl LoggingRequestInterceptor {
    /// Creates the interceptor over `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn SkillLogSink>) -> Self {
        Self {
            sink,
        }
    }
}

impl RequestInterceptor for LoggingRequestInterceptor {
    fn name(&self) -> &'static str {
        "logging_request"
    }

    fn process(&self, ctx: &mut RequestContext) -> Result<(), HandlerError> {
        let request = ctx.request();
        self.sink.record(&SkillLogEvent::RequestReceived {
            request_id: request.request_id().map(str::to_string),
            kind: request.kind().label(),
            intent: request.intent_name().map(str::to_string),
            locale: request.locale().to_string(),
            request: ctx.envelope().get("request").cloned().unwrap_or(Value::Null),
        });
        Ok(())
    }
}

/// Records every handler response.
pub struct LoggingResponseInterceptor {
    /// Destination sink.
    sink: Arc<dyn SkillLogSink>,
}

impl LoggingResponseInterceptor {
    /// Creates the interceptor over `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn SkillLogSink>) -> Self {
        Self {
            sink,
        }
    }
}

impl ResponseInterceptor for LoggingResponseInterceptor {
    fn name(&self) -> &'static str {
        "logging_response"
    }

    fn process(&self, ctx: &RequestContext, response: &Response) -> Result<(), HandlerError> {
        self.sink.record(&SkillLogEvent::ResponseSent {
            request_id: ctx.request().request_id().map(str::to_string),
            handler: ctx.attributes().handler(),
            response: response.clone(),
        });
        Ok(())
    }
}
