// crates/messi-facts-core/src/core/catalog.rs
// ============================================================================
// Module: Locale Resource Table
// Description: Locale-keyed message templates and string lists.
// Purpose: Hold the localized data the translator resolves against.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`LocaleTable`] maps locale codes to [`LocaleStrings`], and each
//! [`LocaleStrings`] maps message keys to a template or a list of candidate
//! strings. The table is plain data: lookups never format, never fall back,
//! and never mutate. Fallback policy lives in the translator.
//!
//! ## Invariants
//! - Locale codes are stored lowercase so lookups are case-insensitive.
//! - Key completeness across locales is reported, never enforced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::locale::LocaleTag;

// ============================================================================
// SECTION: Message Values
// ============================================================================

/// A single localized entry.
///
/// # Invariants
/// - `Text` may contain `%s` placeholders; `List` entries are never formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// Template string.
    Text(String),
    /// Candidate strings returned as-is for caller-side selection.
    List(Vec<String>),
}

impl MessageValue {
    /// Returns a stable label for the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

// ============================================================================
// SECTION: Locale Strings
// ============================================================================

/// Messages for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleStrings {
    /// Entries keyed by message key.
    entries: BTreeMap<String, MessageValue>,
}

impl LocaleStrings {
    /// Creates an empty message set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template entry.
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, MessageValue::Text(text.into()));
        self
    }

    /// Adds a list entry.
    #[must_use]
    pub fn with_list<I, S>(mut self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, MessageValue::List(items.into_iter().map(Into::into).collect()));
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: MessageValue) {
        self.entries.insert(key.into(), value);
    }

    /// Returns the entry for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageValue> {
        self.entries.get(key)
    }

    /// Iterates over the defined keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Locale Table
// ============================================================================

/// Locale code to message set mapping.
///
/// # Invariants
/// - Keys are normalized [`LocaleTag`] strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, LocaleStrings>", into = "BTreeMap<String, LocaleStrings>")]
pub struct LocaleTable {
    /// Message sets keyed by normalized locale code.
    locales: BTreeMap<String, LocaleStrings>,
}

impl LocaleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the messages for `code`.
    #[must_use]
    pub fn with_locale(mut self, code: &str, strings: LocaleStrings) -> Self {
        self.insert_locale(code, strings);
        self
    }

    /// Inserts (or replaces) the messages for `code`.
    pub fn insert_locale(&mut self, code: &str, strings: LocaleStrings) {
        self.locales.insert(LocaleTag::parse(code).as_str().to_string(), strings);
    }

    /// Returns the messages for `code`, matching case-insensitively.
    #[must_use]
    pub fn locale(&self, code: &str) -> Option<&LocaleStrings> {
        self.locales.get(LocaleTag::parse(code).as_str())
    }

    /// Returns true when `code` has an entry in the table.
    #[must_use]
    pub fn contains_locale(&self, code: &str) -> bool {
        self.locale(code).is_some()
    }

    /// Returns true when the table has no locales.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Reports which keys each locale lacks relative to the union of all keys.
    #[must_use]
    pub fn completeness_report(&self) -> CompletenessReport {
        let all_keys: BTreeSet<String> =
            self.locales.values().flat_map(|strings| strings.keys().map(str::to_string)).collect();
        let locales = self
            .locales
            .iter()
            .map(|(code, strings)| LocaleCompleteness {
                locale: code.clone(),
                defined: strings.len(),
                missing: all_keys
                    .iter()
                    .filter(|key| strings.get(key).is_none())
                    .cloned()
                    .collect(),
            })
            .collect();
        CompletenessReport {
            total_keys: all_keys.len(),
            locales,
        }
    }
}

impl From<BTreeMap<String, LocaleStrings>> for LocaleTable {
    fn from(raw: BTreeMap<String, LocaleStrings>) -> Self {
        let mut table = Self::new();
        for (code, strings) in raw {
            table.insert_locale(&code, strings);
        }
        table
    }
}

impl From<LocaleTable> for BTreeMap<String, LocaleStrings> {
    fn from(table: LocaleTable) -> Self {
        table.locales
    }
}

// ============================================================================
// SECTION: Completeness
// ============================================================================

/// Key coverage for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCompleteness {
    /// Normalized locale code.
    pub locale: String,
    /// Number of keys the locale defines.
    pub defined: usize,
    /// Keys defined elsewhere but absent here, sorted.
    pub missing: Vec<String>,
}

/// Key coverage across the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    /// Size of the union of keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale code.
    pub locales: Vec<LocaleCompleteness>,
}

impl CompletenessReport {
    /// Returns true when every locale defines every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|locale| locale.missing.is_empty())
    }
}
