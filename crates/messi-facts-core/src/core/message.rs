// crates/messi-facts-core/src/core/message.rs
// ============================================================================
// Module: Message Keys
// Description: Typed keys for every message the skill speaks.
// Purpose: Fix the argument count of each message at the call site.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each [`MessageKey`] names one entry of the locale table and declares how
//! many positional arguments its template takes. The translator checks the
//! declared arity before touching the table, so a call site that passes the
//! wrong number of arguments fails the same way in every locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Message Keys
// ============================================================================

/// Message keys understood by the skill.
///
/// # Invariants
/// - [`MessageKey::as_str`] values are stable; they are the locale table keys.
/// - Only [`MessageKey::ReflectorMessage`] takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    /// Greeting spoken when a session starts.
    WelcomeMessage,
    /// Reply to the hello-world intent.
    HelloMessage,
    /// Lead-in for the help intent.
    HelpMessage,
    /// Farewell for cancel and stop.
    GoodbyeMessage,
    /// Echo of an intent with no dedicated handler; takes the intent name.
    ReflectorMessage,
    /// Reply to the platform fallback intent.
    FallbackMessage,
    /// Generic apology produced by the error boundary.
    ErrorMessage,
    /// Sample utterances offered to the user.
    RandomPhrases,
    /// Closing question after the welcome message.
    EndMessageWelcome,
    /// Closing question after the help message.
    EndMessageHelp,
    /// Lead-in spoken before a fact.
    GetFactMessage,
    /// Candidate facts; a list value.
    Facts,
}

impl MessageKey {
    /// Every key, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::WelcomeMessage,
        Self::HelloMessage,
        Self::HelpMessage,
        Self::GoodbyeMessage,
        Self::ReflectorMessage,
        Self::FallbackMessage,
        Self::ErrorMessage,
        Self::RandomPhrases,
        Self::EndMessageWelcome,
        Self::EndMessageHelp,
        Self::GetFactMessage,
        Self::Facts,
    ];

    /// Returns the locale table key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WelcomeMessage => "WELCOME_MESSAGE",
            Self::HelloMessage => "HELLO_MESSAGE",
            Self::HelpMessage => "HELP_MESSAGE",
            Self::GoodbyeMessage => "GOODBYE_MESSAGE",
            Self::ReflectorMessage => "REFLECTOR_MESSAGE",
            Self::FallbackMessage => "FALLBACK_MESSAGE",
            Self::ErrorMessage => "ERROR_MESSAGE",
            Self::RandomPhrases => "RANDOM_PHRASES",
            Self::EndMessageWelcome => "END_MESSAGE_WELCOME",
            Self::EndMessageHelp => "END_MESSAGE_HELP",
            Self::GetFactMessage => "GET_FACT_MESSAGE",
            Self::Facts => "FACTS",
        }
    }

    /// Returns the number of positional arguments the template takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::ReflectorMessage => 1,
            _ => 0,
        }
    }

    /// Returns true when the key resolves to a list rather than a template.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Facts)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
