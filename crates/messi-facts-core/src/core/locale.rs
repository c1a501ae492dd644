// crates/messi-facts-core/src/core/locale.rs
// ============================================================================
// Module: Locale Tags
// Description: Normalized locale tags and their lookup chains.
// Purpose: Map platform locales such as `en-US` onto locale table codes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Platform requests carry region-qualified locales (`en-US`, `es-MX`) while
//! the locale table is keyed by whatever codes its authors chose, usually base
//! languages. A [`LocaleTag`] normalizes the platform value and yields the
//! ordered codes to try: the full tag, then the base language.
//!
//! ## Invariants
//! - Tags are lowercase with `-` as the only separator.
//! - An empty tag has no lookup candidates; callers go straight to fallback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Locale code used when neither the request nor the configuration names one.
pub const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// SECTION: Locale Tag
// ============================================================================

/// Normalized locale tag.
///
/// # Invariants
/// - The inner value is trimmed, lowercase, and uses `-` separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Normalizes a raw locale value (case-insensitive, tolerant of `_`).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self(value.trim().replace('_', "-").to_ascii_lowercase())
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the tag is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the base language subtag (`en` for `en-us`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }

    /// Returns the table codes to try for this tag, most specific first.
    #[must_use]
    pub fn candidates(&self) -> Vec<&str> {
        let mut codes = Vec::with_capacity(2);
        if self.is_empty() {
            return codes;
        }
        codes.push(self.as_str());
        let language = self.language();
        if !language.is_empty() && language != self.as_str() {
            codes.push(language);
        }
        codes
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for LocaleTag {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(value: LocaleTag) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use super::LocaleTag;

    #[test]
    fn parse_normalizes_case_and_separator() {
        assert_eq!(LocaleTag::parse(" en_US ").as_str(), "en-us");
    }

    #[test]
    fn candidates_list_tag_then_language() {
        let tag = LocaleTag::parse("es-MX");
        assert_eq!(tag.candidates(), vec!["es-mx", "es"]);
    }

    #[test]
    fn bare_language_has_single_candidate() {
        assert_eq!(LocaleTag::parse("en").candidates(), vec!["en"]);
    }

    #[test]
    fn empty_tag_has_no_candidates() {
        assert!(LocaleTag::parse("  ").candidates().is_empty());
    }
}
