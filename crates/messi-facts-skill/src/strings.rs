// crates/messi-facts-skill/src/strings.rs
// ============================================================================
// Module: Built-in Strings
// Description: English and Spanish message tables for the skill.
// Purpose: Provide the default locale table when no resource file is set.
// Dependencies: messi-facts-core
// ============================================================================

//! ## Overview
//! Both locales define the same twelve keys. `REFLECTOR_MESSAGE` takes the
//! intent name as its single argument; `FACTS` is a list of eight entries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use messi_facts_core::LocaleStrings;
use messi_facts_core::LocaleTable;
use messi_facts_core::MessageKey;

// ============================================================================
// SECTION: English
// ============================================================================

/// English templates.
const EN_TEXT: [(MessageKey, &str); 11] = [
    (
        MessageKey::WelcomeMessage,
        "Hello, thank you for using Messi Facts, to get started you can say: ",
    ),
    (MessageKey::HelloMessage, "Hello World!"),
    (
        MessageKey::HelpMessage,
        "How can I help you? To request a fun fact about Messi you can say: ",
    ),
    (MessageKey::GoodbyeMessage, "Goodbye!"),
    (MessageKey::ReflectorMessage, "You just triggered %s"),
    (MessageKey::FallbackMessage, "Sorry, I don't know about that. Please try again."),
    (MessageKey::ErrorMessage, "Sorry, there was an error. Please try again."),
    (
        MessageKey::RandomPhrases,
        "tell me a fact about Messi... give me a Messi fact... I want to know about Messi...",
    ),
    (
        MessageKey::EndMessageWelcome,
        ".. or if you want to stop me just say, Cancel!... so... Do you want to start?",
    ),
    (
        MessageKey::EndMessageHelp,
        ".. or if you want to stop me just say, Cancel!... so... How can I help you?",
    ),
    (MessageKey::GetFactMessage, "A fun fact about Messi is: "),
];

/// English facts.
const EN_FACTS: [&str; 8] = [
    "Messi has won the Ballon d'Or seven times.",
    "Messi has spent over 20 years at FC Barcelona.",
    "Messi scored over 700 goals in his professional career.",
    "Messi won the FIFA World Cup with Argentina in 2022.",
    "Messi holds the record for most goals in a calendar year.",
    "Messi won the Champions League four times with Barcelona.",
    "Messi has more than 300 assists in his career.",
    "Messi joined Paris Saint-Germain in 2021.",
];

// ============================================================================
// SECTION: Spanish
// ============================================================================

/// Spanish templates.
const ES_TEXT: [(MessageKey, &str); 11] = [
    (
        MessageKey::WelcomeMessage,
        "Hola, gracias por usar Datos sobre Messi, para comenzar puedes decir: ",
    ),
    (MessageKey::HelloMessage, "¡Hola Mundo!"),
    (
        MessageKey::HelpMessage,
        "¿Cómo te puedo ayudar? Para pedir un dato curioso sobre Messi puedes decir: ",
    ),
    (MessageKey::GoodbyeMessage, "¡Adiós!"),
    (MessageKey::ReflectorMessage, "Acabas de activar %s"),
    (
        MessageKey::FallbackMessage,
        "Lo siento, no sé nada sobre eso. Por favor inténtalo otra vez.",
    ),
    (
        MessageKey::ErrorMessage,
        "Lo siento, ha habido un problema. Por favor inténtalo otra vez.",
    ),
    (
        MessageKey::RandomPhrases,
        "dime un dato sobre Messi... cuéntame algo sobre Messi... quiero saber sobre Messi...",
    ),
    (
        MessageKey::EndMessageWelcome,
        ".. o si deseas detenerme solo di, !Cancela!... entonces... ¿Quieres comenzar?",
    ),
    (
        MessageKey::EndMessageHelp,
        ".. o si deseas detenerme solo di, !Cancela!... entonces... ¿Como te puedo ayudar?",
    ),
    (MessageKey::GetFactMessage, "Un dato curioso sobre Messi es: "),
];

/// Spanish facts.
const ES_FACTS: [&str; 8] = [
    "Messi ha ganado el Balón de Oro siete veces.",
    "Messi ha pasado más de 20 años en el FC Barcelona.",
    "Messi ha marcado más de 700 goles en su carrera profesional.",
    "Messi ganó la Copa Mundial de la FIFA con Argentina en 2022.",
    "Messi tiene el récord de más goles en un año calendario.",
    "Messi ganó la Liga de Campeones cuatro veces con el Barcelona.",
    "Messi tiene más de 300 asistencias en su carrera.",
    "Messi se unió al Paris Saint-Germain en 2021.",
];

// ============================================================================
// SECTION: Table
// ============================================================================

/// Returns the built-in `en`/`es` locale table.
#[must_use]
pub fn builtin_table() -> LocaleTable {
    LocaleTable::new()
        .with_locale("en", locale_strings(&EN_TEXT, &EN_FACTS))
        .with_locale("es", locale_strings(&ES_TEXT, &ES_FACTS))
}

/// Builds one locale's strings.
fn locale_strings(text: &[(MessageKey, &str)], facts: &[&str]) -> LocaleStrings {
    let strings = text
        .iter()
        .fold(LocaleStrings::new(), |strings, (key, value)| strings.with_text(key.as_str(), *value));
    strings.with_list(MessageKey::Facts.as_str(), facts.iter().copied())
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

    use messi_facts_core::MessageKey;
    use messi_facts_core::MessageValue;

    use super::builtin_table;

    #[test]
    fn builtin_table_is_complete() {
        let report = builtin_table().completeness_report();
        assert!(report.is_complete(), "{report:?}");
        assert_eq!(report.total_keys, MessageKey::ALL.len());
    }

    #[test]
    fn every_known_key_has_the_expected_shape() {
        let table = builtin_table();
        for code in ["en", "es"] {
            let strings = table.locale(code).unwrap();
            for key in MessageKey::ALL {
                let value = strings.get(key.as_str()).unwrap();
                assert_eq!(matches!(value, MessageValue::List(_)), key.is_list(), "{code} {key}");
            }
            match strings.get("FACTS").unwrap() {
                MessageValue::List(items) => assert_eq!(items.len(), 8),
                MessageValue::Text(_) => panic!("facts must be a list"),
            }
        }
    }
}
