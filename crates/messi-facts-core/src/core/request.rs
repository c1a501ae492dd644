// crates/messi-facts-core/src/core/request.rs
// ============================================================================
// Module: Skill Requests
// Description: Platform-independent view of an inbound voice request.
// Purpose: Give handler predicates a small, immutable value to match on.
// Dependencies: serde, crate::core::locale
// ============================================================================

//! ## Overview
//! A [`Request`] is the part of the platform envelope that dispatch cares
//! about: what kind of event arrived, which intent (if any) was classified,
//! and which locale the user speaks. It is built once at the platform boundary
//! and only read afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::locale::LocaleTag;

// ============================================================================
// SECTION: Request Kind
// ============================================================================

/// Discriminant of an inbound request.
///
/// # Invariants
/// - `Other` is never produced for the three recognized platform types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestKind {
    /// The user opened the skill without an intent.
    SessionStart,
    /// The platform classified an utterance as an intent.
    Intent {
        /// Intent name, for example `GetMessiFactIntent`.
        name: String,
    },
    /// The platform closed the session.
    SessionEnd {
        /// Platform-reported reason, when present.
        reason: Option<String>,
    },
    /// An intent request that arrived without an intent name.
    MalformedIntent,
    /// A platform request type no skill predicate recognizes.
    Other {
        /// Raw platform request type.
        request_type: String,
    },
}

impl RequestKind {
    /// Returns a stable label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SessionStart => "session-start",
            Self::Intent {
                ..
            } => "intent",
            Self::SessionEnd {
                ..
            } => "session-end",
            Self::MalformedIntent => "malformed-intent",
            Self::Other {
                ..
            } => "other",
        }
    }
}

// ============================================================================
// SECTION: Request
// ============================================================================

/// Immutable inbound request.
///
/// # Invariants
/// - `locale` is normalized; an empty locale resolves through the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Event discriminant.
    kind: RequestKind,
    /// Requested locale.
    locale: LocaleTag,
    /// Platform request identifier, when present.
    request_id: Option<String>,
}

impl Request {
    /// Creates a request from its parts.
    #[must_use]
    pub fn new(kind: RequestKind, locale: &str) -> Self {
        Self {
            kind,
            locale: LocaleTag::parse(locale),
            request_id: None,
        }
    }

    /// Creates a session-start request.
    #[must_use]
    pub fn session_start(locale: &str) -> Self {
        Self::new(RequestKind::SessionStart, locale)
    }

    /// Creates an intent request.
    #[must_use]
    pub fn intent(name: impl Into<String>, locale: &str) -> Self {
        Self::new(
            RequestKind::Intent {
                name: name.into(),
            },
            locale,
        )
    }

    /// Creates a session-end request without a reason.
    #[must_use]
    pub fn session_end(locale: &str) -> Self {
        Self::new(
            RequestKind::SessionEnd {
                reason: None,
            },
            locale,
        )
    }

    /// Attaches a platform request identifier.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the request kind.
    #[must_use]
    pub const fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// Returns the requested locale.
    #[must_use]
    pub const fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Returns the platform request identifier.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the intent name for intent requests.
    #[must_use]
    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent {
                name,
            } => Some(name),
            _ => None,
        }
    }

    /// Returns true for intent requests.
    #[must_use]
    pub const fn is_intent(&self) -> bool {
        matches!(self.kind, RequestKind::Intent { .. })
    }

    /// Returns true when this is an intent request named `name`.
    #[must_use]
    pub fn is_intent_named(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    /// Returns true for session-start requests.
    #[must_use]
    pub const fn is_session_start(&self) -> bool {
        matches!(self.kind, RequestKind::SessionStart)
    }

    /// Returns true for session-end requests.
    #[must_use]
    pub const fn is_session_end(&self) -> bool {
        matches!(self.kind, RequestKind::SessionEnd { .. })
    }
}
