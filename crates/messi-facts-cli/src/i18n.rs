// crates/messi-facts-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings and resolve them per locale.
// Dependencies: messi-facts-core
// ============================================================================

//! ## Overview
//! CLI strings live in a small [`LocaleTable`] and are resolved with the same
//! translator the skill uses, so `%s` placeholders, locale fallback and arity
//! checks behave identically. All runtime output should be routed through
//! the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog and the selected locale are initialized once.
//! - Missing keys and arity mismatches fall back to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use messi_facts_core::DEFAULT_LOCALE;
use messi_facts_core::LocaleStrings;
use messi_facts_core::LocaleTable;
use messi_facts_core::Resolved;
use messi_facts_core::resolve;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Languages the CLI can print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Parses a language tag such as `es` or `es-MX`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let language = value.trim().split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Returns the catalog locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Process-wide CLI locale.
static LOCALE: OnceLock<Locale> = OnceLock::new();

/// Selects the CLI locale; later calls are ignored.
pub fn set_locale(locale: Locale) {
    let _ = LOCALE.set(locale);
}

/// Returns the selected CLI locale (English until set).
#[must_use]
pub fn current_locale() -> Locale {
    LOCALE.get().copied().unwrap_or_default()
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "messi-facts %s"),
    ("output.write_failed", "Failed to write to %s: %s"),
    ("i18n.lang.invalid_env", "Invalid value for %s: %s. Expected en or es."),
    ("config.load_failed", "Failed to load config: %s"),
    ("config.validate.ok", "Config valid."),
    ("skill.build_failed", "Failed to build skill: %s"),
    ("log.open_failed", "Failed to open log file %s: %s"),
    ("invoke.read_failed", "Failed to read request from %s: %s"),
    ("invoke.too_large", "Refusing to read request from %s: larger than %s bytes."),
    ("invoke.failed", "Invocation failed: %s"),
    ("invoke.serialize_failed", "Failed to serialize response: %s"),
    ("invoke.stdin", "stdin"),
    ("catalog.locale_line", "%s: %s of %s keys"),
    ("catalog.missing_key", "  missing %s"),
    ("catalog.unknown_fallback", "Fallback locale %s is not defined in the catalog."),
    ("catalog.fallback_missing_key", "Fallback locale %s does not define %s."),
    ("catalog.complete", "Catalog complete."),
    ("catalog.incomplete", "Catalog incomplete."),
];

/// Spanish catalog entries.
const CATALOG_ES: &[(&str, &str)] = &[
    ("main.version", "messi-facts %s"),
    ("output.write_failed", "No se pudo escribir en %s: %s"),
    ("i18n.lang.invalid_env", "Valor inválido para %s: %s. Se esperaba en o es."),
    ("config.load_failed", "No se pudo cargar la configuración: %s"),
    ("config.validate.ok", "Configuración válida."),
    ("skill.build_failed", "No se pudo construir la skill: %s"),
    ("log.open_failed", "No se pudo abrir el archivo de registro %s: %s"),
    ("invoke.read_failed", "No se pudo leer la solicitud de %s: %s"),
    ("invoke.too_large", "Se rechaza leer la solicitud de %s: supera %s bytes."),
    ("invoke.failed", "La invocación falló: %s"),
    ("invoke.serialize_failed", "No se pudo serializar la respuesta: %s"),
    ("invoke.stdin", "entrada estándar"),
    ("catalog.locale_line", "%s: %s de %s claves"),
    ("catalog.missing_key", "  falta %s"),
    ("catalog.unknown_fallback", "El idioma de respaldo %s no está definido en el catálogo."),
    ("catalog.fallback_missing_key", "El idioma de respaldo %s no define %s."),
    ("catalog.complete", "Catálogo completo."),
    ("catalog.incomplete", "Catálogo incompleto."),
];

/// Returns the CLI catalog.
fn catalog() -> &'static LocaleTable {
    static CATALOG: OnceLock<LocaleTable> = OnceLock::new();

    CATALOG.get_or_init(|| {
        LocaleTable::new()
            .with_locale("en", strings(CATALOG_EN))
            .with_locale("es", strings(CATALOG_ES))
    })
}

/// Builds one locale's catalog strings.
fn strings(items: &[(&str, &str)]) -> LocaleStrings {
    items.iter().fold(LocaleStrings::new(), |strings, (key, text)| strings.with_text(*key, *text))
}

/// Returns the raw `(key, template)` entries for `locale`, in catalog order.
#[must_use]
pub const fn catalog_entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Es => CATALOG_ES,
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` into the current locale, substituting `args` in order.
#[must_use]
pub fn translate(key: &str, args: &[String]) -> String {
    translate_in(current_locale(), key, args)
}

/// Translates `key` into `locale`, substituting `args` in order.
#[must_use]
pub fn translate_in(locale: Locale, key: &str, args: &[String]) -> String {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match resolve(catalog(), DEFAULT_LOCALE, locale.code(), key, &args) {
        Ok(Resolved::Text(text)) => text,
        Ok(Resolved::List(_)) | Err(_) => key.to_string(),
    }
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and positional arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Each argument fills the next `%s` placeholder.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $value:expr )* $(,)?) => {{
        let args: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$( ::std::string::ToString::to_string(&$value) ),*];
        $crate::i18n::translate($key, &args)
    }};
}
