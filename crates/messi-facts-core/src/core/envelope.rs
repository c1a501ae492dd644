// crates/messi-facts-core/src/core/envelope.rs
// ============================================================================
// Module: Platform Envelopes
// Description: JSON request and response envelopes exchanged with the platform.
// Purpose: Decode inbound events into requests and encode spoken responses.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The voice platform posts a JSON envelope whose `request.type` is one of
//! `LaunchRequest`, `IntentRequest` or `SessionEndedRequest` and expects a
//! JSON envelope back with SSML speech. This module is the only place that
//! knows those field names; the rest of the crate works with [`Request`] and
//! [`Response`].
//!
//! Security posture: envelopes are untrusted input; an intent request without
//! an intent name is never guessed at and decodes to a malformed request that
//! the error boundary answers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::request::Request;
use crate::core::request::RequestKind;
use crate::core::response::Response;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Platform type for a session-start request.
const LAUNCH_REQUEST: &str = "LaunchRequest";
/// Platform type for an intent request.
const INTENT_REQUEST: &str = "IntentRequest";
/// Platform type for a session-end request.
const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";
/// Response envelope format version.
const RESPONSE_VERSION: &str = "1.0";
/// Output speech type emitted for every spoken string.
const SSML_SPEECH: &str = "SSML";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while decoding a request envelope.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Envelope is not valid JSON or does not match the envelope shape.
    #[error("invalid request envelope: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Request Envelope
// ============================================================================

/// Classified intent carried by an intent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
    /// Intent name.
    #[serde(default)]
    pub name: Option<String>,
    /// Slot values; carried for logging only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Value>,
    /// Platform confirmation status, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

/// The `request` object of an inbound envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRequest {
    /// Platform request type.
    #[serde(rename = "type")]
    pub request_type: String,
    /// Platform request identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Platform timestamp (ISO-8601), when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Requested locale such as `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Classified intent for intent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentPayload>,
    /// Session-end reason for session-end requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Inbound platform envelope.
///
/// # Invariants
/// - `session` and `context` are opaque and never drive dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Envelope format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Platform session object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
    /// Platform device/application context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    /// The request itself.
    pub request: PlatformRequest,
}

impl RequestEnvelope {
    /// Decodes an envelope from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] when the value is not an envelope.
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        serde_json::from_value(value).map_err(|err| RequestError::Parse(err.to_string()))
    }

    /// Extracts the dispatch view of the envelope.
    ///
    /// An intent request without a usable intent name decodes to
    /// [`RequestKind::MalformedIntent`] so the dispatcher can answer it.
    #[must_use]
    pub fn to_request(&self) -> Request {
        let raw = &self.request;
        let kind = match raw.request_type.as_str() {
            LAUNCH_REQUEST => RequestKind::SessionStart,
            INTENT_REQUEST => raw
                .intent
                .as_ref()
                .and_then(|intent| intent.name.clone())
                .filter(|name| !name.trim().is_empty())
                .map_or(RequestKind::MalformedIntent, |name| RequestKind::Intent {
                    name,
                }),
            SESSION_ENDED_REQUEST => RequestKind::SessionEnd {
                reason: raw.reason.clone(),
            },
            other => RequestKind::Other {
                request_type: other.to_string(),
            },
        };
        let request = Request::new(kind, raw.locale.as_deref().unwrap_or(""));
        match &raw.request_id {
            Some(request_id) => request.with_request_id(request_id.clone()),
            None => request,
        }
    }
}

// ============================================================================
// SECTION: Response Envelope
// ============================================================================

/// SSML output speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    /// Speech type; always `SSML`.
    #[serde(rename = "type")]
    pub speech_type: String,
    /// SSML document wrapped in `<speak>`.
    pub ssml: String,
}

impl OutputSpeech {
    /// Wraps plain text in an SSML `<speak>` element.
    #[must_use]
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: SSML_SPEECH.to_string(),
            ssml: format!("<speak>{text}</speak>"),
        }
    }
}

/// Reprompt wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepromptBody {
    /// Speech used for the reprompt.
    pub output_speech: OutputSpeech,
}

/// The `response` object of an outbound envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    /// Spoken output; omitted for silent responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Reprompt; omitted when the session ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<RepromptBody>,
    /// Whether the platform should close the session.
    pub should_end_session: bool,
}

/// Outbound platform envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Envelope format version.
    pub version: String,
    /// Response body.
    pub response: ResponseBody,
    /// User agent advertised by the skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ResponseEnvelope {
    /// Encodes a response for the platform.
    #[must_use]
    pub fn from_response(response: &Response, user_agent: Option<String>) -> Self {
        let output_speech =
            (!response.speech().is_empty()).then(|| OutputSpeech::ssml(response.speech()));
        let reprompt = response.reprompt().map(|text| RepromptBody {
            output_speech: OutputSpeech::ssml(text),
        });
        Self {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech,
                reprompt,
                should_end_session: response.should_end_session(),
            },
            user_agent,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
