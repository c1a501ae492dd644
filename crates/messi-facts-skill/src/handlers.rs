// crates/messi-facts-skill/src/handlers.rs
// ============================================================================
// Module: Skill Handlers
// Description: The Messi Facts request handlers and error handler.
// Purpose: Map each supported request to its localized response.
// Dependencies: messi-facts-core, crate::facts
// ============================================================================

//! ## Overview
//! Each handler is a predicate plus an action. Actions read all text through
//! the request's bound translator, so the same handler serves every locale.
//! Responses that carry a reprompt keep the session open; the rest close it.
//!
//! ## Invariants
//! - Handlers hold no per-request state.
//! - [`IntentReflectorHandler`] accepts every intent and must stay last.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use messi_facts_core::ErrorHandler;
use messi_facts_core::HandlerError;
use messi_facts_core::MessageKey;
use messi_facts_core::Request;
use messi_facts_core::RequestContext;
use messi_facts_core::RequestHandler;
use messi_facts_core::RequestKind;
use messi_facts_core::Response;
use messi_facts_core::SkillLogEvent;
use messi_facts_core::SkillLogSink;

use crate::facts::FactSelector;
use crate::facts::choose_fact;

// ============================================================================
// SECTION: Intent Names
// ============================================================================

/// Greeting intent.
pub const HELLO_WORLD_INTENT: &str = "HelloWorldIntent";
/// Built-in help intent.
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
/// Built-in cancel intent.
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
/// Built-in stop intent.
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
/// Built-in fallback intent.
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";
/// Fact request intent.
pub const GET_MESSI_FACT_INTENT: &str = "GetMessiFactIntent";

/// Speech and reprompt for the launch response.
const WELCOME_SPEECH: [MessageKey; 3] =
    [MessageKey::WelcomeMessage, MessageKey::RandomPhrases, MessageKey::EndMessageWelcome];
/// Reprompt shared by the launch and fact responses.
const WELCOME_REPROMPT: [MessageKey; 2] = [MessageKey::RandomPhrases, MessageKey::EndMessageWelcome];
/// Speech for the help response.
const HELP_SPEECH: [MessageKey; 3] =
    [MessageKey::HelpMessage, MessageKey::RandomPhrases, MessageKey::EndMessageHelp];
/// Reprompt for the help response.
const HELP_REPROMPT: [MessageKey; 2] = [MessageKey::RandomPhrases, MessageKey::EndMessageHelp];

// ============================================================================
// SECTION: Launch
// ============================================================================

/// Greets the user when the session starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_session_start()
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let translator = ctx.translator()?;
        Ok(Response::builder()
            .speak(translator.concat(&WELCOME_SPEECH)?)
            .reprompt(translator.concat(&WELCOME_REPROMPT)?)
            .build())
    }
}

// ============================================================================
// SECTION: Hello
// ============================================================================

/// Answers the greeting intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorldIntentHandler;

impl RequestHandler for HelloWorldIntentHandler {
    fn name(&self) -> &'static str {
        "hello_world"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent_named(HELLO_WORLD_INTENT)
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let speech = ctx.translator()?.text(MessageKey::HelloMessage)?;
        Ok(Response::builder().speak(speech).build())
    }
}

// ============================================================================
// SECTION: Help
// ============================================================================

/// Explains what the user can ask for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent_named(HELP_INTENT)
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let translator = ctx.translator()?;
        Ok(Response::builder()
            .speak(translator.concat(&HELP_SPEECH)?)
            .reprompt(translator.concat(&HELP_REPROMPT)?)
            .build())
    }
}

// ============================================================================
// SECTION: Cancel and Stop
// ============================================================================

/// Says goodbye on cancel or stop.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelAndStopIntentHandler;

impl RequestHandler for CancelAndStopIntentHandler {
    fn name(&self) -> &'static str {
        "cancel_and_stop"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent_named(CANCEL_INTENT) || request.is_intent_named(STOP_INTENT)
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let speech = ctx.translator()?.text(MessageKey::GoodbyeMessage)?;
        Ok(Response::builder().speak(speech).build())
    }
}

// ============================================================================
// SECTION: Fallback
// ============================================================================

/// Handles utterances the platform could not map to an intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackIntentHandler;

impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent_named(FALLBACK_INTENT)
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let speech = ctx.translator()?.text(MessageKey::FallbackMessage)?;
        Ok(Response::builder().speak(speech.clone()).reprompt(speech).build())
    }
}

// ============================================================================
// SECTION: Session Ended
// ============================================================================

/// Records the end of the session and answers with an empty response.
pub struct SessionEndedRequestHandler {
    /// Sink receiving the session-ended record.
    sink: Arc<dyn SkillLogSink>,
}

impl SessionEndedRequestHandler {
    /// Creates the handler over `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn SkillLogSink>) -> Self {
        Self {
            sink,
        }
    }
}

impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_session_end()
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let request = ctx.request();
        let reason = match request.kind() {
            RequestKind::SessionEnd {
                reason,
            } => reason.clone(),
            _ => None,
        };
        self.sink.record(&SkillLogEvent::SessionEnded {
            request_id: request.request_id().map(str::to_string),
            reason,
            envelope: ctx.envelope().clone(),
        });
        Ok(Response::empty())
    }
}

// ============================================================================
// SECTION: Facts
// ============================================================================

/// Tells one random fact from the locale's list.
pub struct GetMessiFactIntentHandler {
    /// Index source for the fact list.
    selector: Arc<dyn FactSelector>,
}

impl GetMessiFactIntentHandler {
    /// Creates the handler over `selector`.
    #[must_use]
    pub fn new(selector: Arc<dyn FactSelector>) -> Self {
        Self {
            selector,
        }
    }
}

impl RequestHandler for GetMessiFactIntentHandler {
    fn name(&self) -> &'static str {
        "get_messi_fact"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent_named(GET_MESSI_FACT_INTENT)
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let translator = ctx.translator()?;
        let facts = translator.list(MessageKey::Facts)?;
        let fact = choose_fact(self.selector.as_ref(), &facts).ok_or_else(|| {
            HandlerError::EmptyFacts {
                locale: translator.locale().to_string(),
            }
        })?;
        let mut speech = translator.text(MessageKey::GetFactMessage)?;
        speech.push_str(fact);
        Ok(Response::builder()
            .speak(speech)
            .reprompt(translator.concat(&WELCOME_REPROMPT)?)
            .build())
    }
}

// ============================================================================
// SECTION: Reflector
// ============================================================================

/// Echoes the name of any intent no earlier handler claimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentReflectorHandler;

impl RequestHandler for IntentReflectorHandler {
    fn name(&self) -> &'static str {
        "intent_reflector"
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.is_intent()
    }

    fn handle(&self, ctx: &RequestContext) -> Result<Response, HandlerError> {
        let intent = ctx.request().intent_name().unwrap_or_default();
        let speech = ctx.translator()?.format(MessageKey::ReflectorMessage, &[intent])?;
        Ok(Response::builder().speak(speech).build())
    }
}

// ============================================================================
// SECTION: Error Handler
// ============================================================================

/// Apologizes for any failure and keeps the session open.
pub struct ErrorResponseHandler {
    /// Sink receiving the error record.
    sink: Arc<dyn SkillLogSink>,
}

impl ErrorResponseHandler {
    /// Creates the handler over `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn SkillLogSink>) -> Self {
        Self {
            sink,
        }
    }
}

impl ErrorHandler for ErrorResponseHandler {
    fn name(&self) -> &'static str {
        "error_response"
    }

    fn can_handle(&self, _ctx: &RequestContext, _error: &HandlerError) -> bool {
        true
    }

    fn handle(&self, ctx: &RequestContext, error: &HandlerError) -> Result<Response, HandlerError> {
        self.sink.record(&SkillLogEvent::ErrorHandled {
            request_id: ctx.request().request_id().map(str::to_string),
            kind: error.kind(),
            error: error.to_string(),
        });
        let speech = ctx.translator()?.text(MessageKey::ErrorMessage)?;
        Ok(Response::builder().speak(speech.clone()).reprompt(speech).build())
    }
}
