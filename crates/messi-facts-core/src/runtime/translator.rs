// crates/messi-facts-core/src/runtime/translator.rs
// ============================================================================
// Module: Translator
// Description: Locale-chain lookup and positional template formatting.
// Purpose: Resolve message keys to localized text as a pure function.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! [`resolve`] is a pure function of `(table, fallback, locale, key, args)`.
//! Lookup walks the requested tag, its base language, then the fallback
//! locale, and returns the first entry that defines `key`. Templates use
//! positional `%s` placeholders; lists are returned untouched.
//!
//! A [`Translator`] is the same function with the table, fallback and
//! locale bound, which is what the localization interceptor attaches to each
//! request.
//!
//! ## Invariants
//! - The placeholder count must equal the argument count, in both directions.
//! - `%%` renders a literal `%` and is not a placeholder.
//! - A missing key is an error, never the key text itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::catalog::LocaleTable;
use crate::core::catalog::MessageValue;
use crate::core::locale::LocaleTag;
use crate::core::message::MessageKey;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Translation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Key is absent from the requested locale chain and the fallback locale.
    #[error("unknown message key {key} for locale {locale}")]
    UnknownKey {
        /// Requested key.
        key: String,
        /// Requested locale.
        locale: String,
    },
    /// Placeholder count does not match the argument count.
    #[error("message {key} expects {expected} argument(s), got {actual}")]
    FormatArity {
        /// Requested key.
        key: String,
        /// Placeholders in the template (or declared arity).
        expected: usize,
        /// Arguments supplied.
        actual: usize,
    },
    /// Key resolved to a value of the wrong kind.
    #[error("message {key} is a {actual}, expected a {expected}")]
    UnexpectedValue {
        /// Requested key.
        key: String,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind found in the table.
        actual: &'static str,
    },
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Formatted template.
    Text(String),
    /// Unmodified list for caller-side selection.
    List(Vec<String>),
}

/// Resolves `key` for `locale`, falling back to `fallback`, and formats it.
///
/// # Errors
///
/// Returns [`TranslateError::UnknownKey`] when no locale in the chain defines
/// `key`, and [`TranslateError::FormatArity`] when `args` do not match the
/// template's placeholders (any argument passed to a list is a mismatch).
pub fn resolve(
    table: &LocaleTable,
    fallback: &str,
    locale: &str,
    key: &str,
    args: &[&str],
) -> Result<Resolved, TranslateError> {
    let tag = LocaleTag::parse(locale);
    let fallback = LocaleTag::parse(fallback);
    let mut chain = tag.candidates();
    if !chain.contains(&fallback.as_str()) {
        chain.push(fallback.as_str());
    }
    let value = chain
        .into_iter()
        .find_map(|code| table.locale(code).and_then(|strings| strings.get(key)))
        .ok_or_else(|| TranslateError::UnknownKey {
            key: key.to_string(),
            locale: tag.to_string(),
        })?;
    match value {
        MessageValue::Text(template) => format_template(key, template, args).map(Resolved::Text),
        MessageValue::List(items) => {
            if args.is_empty() {
                Ok(Resolved::List(items.clone()))
            } else {
                Err(TranslateError::FormatArity {
                    key: key.to_string(),
                    expected: 0,
                    actual: args.len(),
                })
            }
        }
    }
}

/// Counts the `%s` placeholders in `template`.
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch == '%' {
            match chars.next() {
                Some('s') => count += 1,
                Some(_) | None => {}
            }
        }
    }
    count
}

/// Substitutes `args` into the `%s` placeholders of `template` in order.
///
/// # Errors
///
/// Returns [`TranslateError::FormatArity`] when the counts differ.
pub fn format_template(key: &str, template: &str, args: &[&str]) -> Result<String, TranslateError> {
    let expected = placeholder_count(template);
    if expected != args.len() {
        return Err(TranslateError::FormatArity {
            key: key.to_string(),
            expected,
            actual: args.len(),
        });
    }
    let mut output = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }
        match chars.next() {
            Some('s') => {
                if let Some(arg) = args.next() {
                    output.push_str(arg);
                }
            }
            Some('%') => output.push('%'),
            Some(other) => {
                output.push('%');
                output.push(other);
            }
            None => output.push('%'),
        }
    }
    Ok(output)
}

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Translator bound to one table, fallback locale, and requested locale.
///
/// # Invariants
/// - Holds no mutable state; clones share the table.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Shared locale table.
    table: Arc<LocaleTable>,
    /// Fallback locale code.
    fallback: LocaleTag,
    /// Requested locale.
    locale: LocaleTag,
}

impl Translator {
    /// Binds a translator to `locale`.
    #[must_use]
    pub fn new(table: Arc<LocaleTable>, fallback: &str, locale: &str) -> Self {
        Self {
            table,
            fallback: LocaleTag::parse(fallback),
            locale: LocaleTag::parse(locale),
        }
    }

    /// Returns the requested locale.
    #[must_use]
    pub const fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Resolves a raw key with positional arguments.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, key: &str, args: &[&str]) -> Result<Resolved, TranslateError> {
        resolve(&self.table, self.fallback.as_str(), self.locale.as_str(), key, args)
    }

    /// Resolves a zero-argument text message.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] when the key is unknown, takes arguments, or
    /// is a list.
    pub fn text(&self, key: MessageKey) -> Result<String, TranslateError> {
        self.format(key, &[])
    }

    /// Resolves a text message after checking `args` against the key's arity.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::FormatArity`] before lookup when `args` does
    /// not match [`MessageKey::arity`], otherwise as [`resolve`].
    pub fn format(&self, key: MessageKey, args: &[&str]) -> Result<String, TranslateError> {
        if args.len() != key.arity() {
            return Err(TranslateError::FormatArity {
                key: key.as_str().to_string(),
                expected: key.arity(),
                actual: args.len(),
            });
        }
        match self.resolve(key.as_str(), args)? {
            Resolved::Text(text) => Ok(text),
            Resolved::List(_) => Err(TranslateError::UnexpectedValue {
                key: key.as_str().to_string(),
                expected: "text",
                actual: "list",
            }),
        }
    }

    /// Resolves a list message.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] when the key is unknown or is a template.
    pub fn list(&self, key: MessageKey) -> Result<Vec<String>, TranslateError> {
        match self.resolve(key.as_str(), &[])? {
            Resolved::List(items) => Ok(items),
            Resolved::Text(_) => Err(TranslateError::UnexpectedValue {
                key: key.as_str().to_string(),
                expected: "list",
                actual: "text",
            }),
        }
    }

    /// Concatenates several zero-argument messages.
    ///
    /// # Errors
    ///
    /// Returns the first [`TranslateError`] encountered.
    pub fn concat(&self, keys: &[MessageKey]) -> Result<String, TranslateError> {
        keys.iter().try_fold(String::new(), |mut speech, key| {
            speech.push_str(&self.text(*key)?);
            Ok(speech)
        })
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

    use super::TranslateError;
    use super::format_template;
    use super::placeholder_count;

    #[test]
    fn counts_placeholders_and_skips_escapes() {
        assert_eq!(placeholder_count("a %s b %s"), 2);
        assert_eq!(placeholder_count("100%% sure"), 0);
        assert_eq!(placeholder_count("%d is not %s"), 1);
    }

    #[test]
    fn formats_in_order() {
        assert_eq!(format_template("K", "%s and %s", &["a", "b"]).unwrap(), "a and b");
    }

    #[test]
    fn escaped_percent_renders_once() {
        assert_eq!(format_template("K", "%s: 100%%", &["ok"]).unwrap(), "ok: 100%");
    }

    #[test]
    fn too_few_args_is_arity_error() {
        assert_eq!(
            format_template("K", "You just triggered %s", &[]),
            Err(TranslateError::FormatArity {
                key: "K".to_string(),
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn too_many_args_is_arity_error() {
        assert!(matches!(
            format_template("K", "plain", &["extra"]),
            Err(TranslateError::FormatArity { expected: 0, actual: 1, .. })
        ));
    }
}
