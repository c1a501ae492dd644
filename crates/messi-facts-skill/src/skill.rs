// crates/messi-facts-skill/src/skill.rs
// ============================================================================
// Module: Skill Invoker
// Description: Assembles the Messi Facts dispatcher and runs envelopes through it.
// Purpose: Provide the single entry point the platform adapter calls.
// Dependencies: messi-facts-core, messi-facts-config, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`SkillBuilder`] collects the locale table, fallback locale, log sink and
//! fact selector, then [`SkillBuilder::build`] registers the interceptors and
//! handlers in their fixed order. A [`Skill`] is immutable once built and
//! can serve any number of independent requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use messi_facts_config::ConfigError;
use messi_facts_config::DEFAULT_USER_AGENT;
use messi_facts_config::SkillConfig;
use messi_facts_config::load_locale_table;
use messi_facts_core::DEFAULT_LOCALE;
use messi_facts_core::DispatcherBuildError;
use messi_facts_core::LocaleTag;
use messi_facts_core::LocaleTable;
use messi_facts_core::NoopLogSink;
use messi_facts_core::Request;
use messi_facts_core::RequestContext;
use messi_facts_core::RequestEnvelope;
use messi_facts_core::RequestError;
use messi_facts_core::Response;
use messi_facts_core::ResponseEnvelope;
use messi_facts_core::SkillDispatcher;
use messi_facts_core::SkillError;
use messi_facts_core::SkillLogSink;
use serde_json::Value;
use thiserror::Error;

use crate::facts::FactSelector;
use crate::facts::SeededSelector;
use crate::facts::ThreadRngSelector;
use crate::handlers::CancelAndStopIntentHandler;
use crate::handlers::ErrorResponseHandler;
use crate::handlers::FallbackIntentHandler;
use crate::handlers::GetMessiFactIntentHandler;
use crate::handlers::HelloWorldIntentHandler;
use crate::handlers::HelpIntentHandler;
use crate::handlers::IntentReflectorHandler;
use crate::handlers::LaunchRequestHandler;
use crate::handlers::SessionEndedRequestHandler;
use crate::interceptors::LocalizationInterceptor;
use crate::interceptors::LoggingRequestInterceptor;
use crate::interceptors::LoggingResponseInterceptor;
use crate::strings::builtin_table;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Crate component of the advertised user agent.
pub const USER_AGENT_PREFIX: &str = concat!("messi-facts/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while assembling a skill.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillBuildError {
    /// Locale resources could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The fallback locale has no entry in the locale table.
    #[error("fallback locale {locale} is not defined in the locale table")]
    MissingFallbackLocale {
        /// Configured fallback locale.
        locale: String,
    },
    /// The dispatcher rejected the handler chain.
    #[error(transparent)]
    Dispatcher(#[from] DispatcherBuildError),
}

/// Errors returned by envelope invocation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The envelope could not be decoded.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// No error handler produced a response.
    #[error(transparent)]
    Skill(#[from] SkillError),
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for a [`Skill`].
pub struct SkillBuilder {
    /// Locale table; built-in strings when unset.
    table: Option<LocaleTable>,
    /// Fallback locale code.
    fallback: String,
    /// Destination for request, response, and error records.
    sink: Arc<dyn SkillLogSink>,
    /// Index source for fact selection.
    selector: Arc<dyn FactSelector>,
    /// Custom user agent appended to [`USER_AGENT_PREFIX`].
    custom_user_agent: String,
}

impl Default for SkillBuilder {
    fn default() -> Self {
        Self {
            table: None,
            fallback: DEFAULT_LOCALE.to_string(),
            sink: Arc::new(NoopLogSink),
            selector: Arc::new(ThreadRngSelector),
            custom_user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SkillBuilder {
    /// Creates a builder with built-in strings, no logging, and random facts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from configuration, loading external resources.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBuildError::Config`] when the resource file fails to load.
    pub fn from_config(config: &SkillConfig) -> Result<Self, SkillBuildError> {
        let mut builder = Self::new()
            .fallback_locale(&config.locale.fallback)
            .custom_user_agent(config.skill.user_agent.trim());
        if let Some(path) = config.resources_path() {
            builder = builder.locale_table(load_locale_table(&path)?);
        }
        if let Some(seed) = config.facts.seed {
            builder = builder.fact_selector(Arc::new(SeededSelector::new(seed)));
        }
        Ok(builder)
    }

    /// Replaces the built-in locale table.
    #[must_use]
    pub fn locale_table(mut self, table: LocaleTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Sets the fallback locale.
    #[must_use]
    pub fn fallback_locale(mut self, locale: &str) -> Self {
        self.fallback = LocaleTag::parse(locale).to_string();
        self
    }

    /// Sets the log sink.
    #[must_use]
    pub fn log_sink(mut self, sink: Arc<dyn SkillLogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the fact selector.
    #[must_use]
    pub fn fact_selector(mut self, selector: Arc<dyn FactSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the custom user agent.
    #[must_use]
    pub fn custom_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.custom_user_agent = agent.into();
        self
    }

    /// Assembles the skill.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBuildError::MissingFallbackLocale`] when the table has no
    /// entry for the fallback locale.
    pub fn build(self) -> Result<Skill, SkillBuildError> {
        let table = self.table.unwrap_or_else(builtin_table);
        if !table.contains_locale(&self.fallback) {
            return Err(SkillBuildError::MissingFallbackLocale {
                locale: self.fallback,
            });
        }
        let table = Arc::new(table);
        let dispatcher = SkillDispatcher::builder()
            .request_interceptor(LocalizationInterceptor::new(table, self.fallback))
            .request_interceptor(LoggingRequestInterceptor::new(Arc::clone(&self.sink)))
            .request_handler(LaunchRequestHandler)
            .request_handler(HelloWorldIntentHandler)
            .request_handler(HelpIntentHandler)
            .request_handler(CancelAndStopIntentHandler)
            .request_handler(FallbackIntentHandler)
            .request_handler(SessionEndedRequestHandler::new(Arc::clone(&self.sink)))
            .request_handler(GetMessiFactIntentHandler::new(self.selector))
            .request_handler(IntentReflectorHandler)
            .response_interceptor(LoggingResponseInterceptor::new(Arc::clone(&self.sink)))
            .error_handler(ErrorResponseHandler::new(self.sink))
            .build()?;
        Ok(Skill {
            dispatcher,
            user_agent: format!("{USER_AGENT_PREFIX} {}", self.custom_user_agent),
        })
    }
}

// ============================================================================
// SECTION: Skill
// ============================================================================

/// The assembled Messi Facts skill.
pub struct Skill {
    /// Ordered handler chain.
    dispatcher: SkillDispatcher,
    /// User agent advertised in response envelopes.
    user_agent: String,
}

impl Skill {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> SkillBuilder {
        SkillBuilder::new()
    }

    /// Returns the advertised user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the handler names in precedence order.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.dispatcher.handler_names()
    }

    /// Dispatches an already-decoded request.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError`] when the error boundary cannot answer.
    pub fn invoke(&self, request: Request) -> Result<Response, SkillError> {
        let mut ctx = RequestContext::from_request(request);
        self.dispatcher.dispatch(&mut ctx)
    }

    /// Dispatches a JSON envelope value and encodes the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] when the envelope is malformed or the error
    /// boundary cannot answer.
    pub fn invoke_value(&self, envelope: Value) -> Result<ResponseEnvelope, InvokeError> {
        let request = RequestEnvelope::from_value(envelope.clone())?.to_request();
        let mut ctx = RequestContext::new(request, envelope);
        let response = self.dispatcher.dispatch(&mut ctx)?;
        Ok(ResponseEnvelope::from_response(&response, Some(self.user_agent.clone())))
    }

    /// Dispatches raw JSON envelope bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] when the bytes are not an envelope or the error
    /// boundary cannot answer.
    pub fn invoke_slice(&self, bytes: &[u8]) -> Result<ResponseEnvelope, InvokeError> {
        let envelope: Value = serde_json::from_slice(bytes)
            .map_err(|err| RequestError::Parse(err.to_string()))?;
        self.invoke_value(envelope)
    }
}
