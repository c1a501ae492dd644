// crates/messi-facts-core/src/core/response.rs
// ============================================================================
// Module: Skill Responses
// Description: Immutable spoken response and its builder.
// Purpose: Carry speech, reprompt, and the session termination flag.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Handlers assemble a [`Response`] through [`ResponseBuilder`]. Once built the
//! response is read-only: interceptors and the platform codec only borrow it.
//!
//! ## Invariants
//! - Unless set explicitly, a response with a reprompt keeps the session open
//!   and a response without one ends it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Response
// ============================================================================

/// Spoken response returned for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Text to speak; empty when the skill stays silent.
    speech: String,
    /// Follow-up spoken when the user does not answer.
    reprompt: Option<String>,
    /// Whether the interaction ends after this response.
    should_end_session: bool,
}

impl Response {
    /// Returns a builder for a new response.
    #[must_use]
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Returns a silent response that ends the session.
    #[must_use]
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Returns the speech text.
    #[must_use]
    pub fn speech(&self) -> &str {
        &self.speech
    }

    /// Returns the reprompt text.
    #[must_use]
    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    /// Returns whether the session ends.
    #[must_use]
    pub const fn should_end_session(&self) -> bool {
        self.should_end_session
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Response`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    /// Pending speech text.
    speech: String,
    /// Pending reprompt text.
    reprompt: Option<String>,
    /// Explicit termination flag.
    end_session: Option<bool>,
}

impl ResponseBuilder {
    /// Sets the speech text.
    #[must_use]
    pub fn speak(mut self, speech: impl Into<String>) -> Self {
        self.speech = speech.into();
        self
    }

    /// Sets the reprompt text.
    #[must_use]
    pub fn reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    /// Overrides the termination flag.
    #[must_use]
    pub fn end_session(mut self, end: bool) -> Self {
        self.end_session = Some(end);
        self
    }

    /// Finalizes the response.
    #[must_use]
    pub fn build(self) -> Response {
        let should_end_session = self.end_session.unwrap_or(self.reprompt.is_none());
        Response {
            speech: self.speech,
            reprompt: self.reprompt,
            should_end_session,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
