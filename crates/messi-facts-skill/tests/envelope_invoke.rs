// crates/messi-facts-skill/tests/envelope_invoke.rs
// ============================================================================
// Module: Envelope Invocation Tests
// Description: JSON envelopes in, response envelopes and log records out.
// ============================================================================
//! ## Overview
//! Drives the skill through its envelope entry points and inspects the
//! response envelope and the structured log stream.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Tests use unwrap on deterministic fixtures."
)]

mod common;

use std::fs;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use messi_facts_config::SkillConfig;
use messi_facts_core::JsonLinesLogSink;
use messi_facts_core::MessageValue;
use messi_facts_core::RequestError;
use messi_facts_core::SkillLogEvent;
use messi_facts_skill::InvokeError;
use messi_facts_skill::Skill;
use messi_facts_skill::SkillBuilder;
use messi_facts_skill::USER_AGENT_PREFIX;
use messi_facts_skill::builtin_table;
use serde_json::Value;

use common::RecordingSink;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn launch_envelope_round_trips_to_ssml() {
    let skill = Skill::builder().build().unwrap();
    let envelope = skill.invoke_value(common::launch("en-US")).unwrap();
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(json["version"], "1.0");
    assert_eq!(json["response"]["outputSpeech"]["type"], "SSML");
    let ssml = json["response"]["outputSpeech"]["ssml"].as_str().unwrap();
    assert!(ssml.starts_with("<speak>Hello, thank you for using Messi Facts"));
    assert!(ssml.ends_with("</speak>"));
    assert!(json["response"]["reprompt"]["outputSpeech"]["ssml"].is_string());
    assert_eq!(json["response"]["shouldEndSession"], false);
    assert_eq!(
        json["userAgent"],
        format!("{USER_AGENT_PREFIX} sample/messi-facts/v1.0")
    );
}

#[test]
fn session_end_envelope_omits_speech() {
    let skill = Skill::builder().build().unwrap();
    let envelope = skill.invoke_value(common::session_ended("en-US", "USER_INITIATED")).unwrap();
    let json = serde_json::to_value(&envelope).unwrap();
    assert!(json["response"].get("outputSpeech").is_none());
    assert!(json["response"].get("reprompt").is_none());
    assert_eq!(json["response"]["shouldEndSession"], true);
}

#[test]
fn malformed_bytes_are_request_errors() {
    let skill = Skill::builder().build().unwrap();
    assert!(matches!(
        skill.invoke_slice(b"{not json"),
        Err(InvokeError::Request(RequestError::Parse(_)))
    ));
    assert!(matches!(
        skill.invoke_slice(br#"{"version":"1.0"}"#),
        Err(InvokeError::Request(RequestError::Parse(_)))
    ));
}

#[test]
fn intent_request_without_name_speaks_localized_error() {
    let sink = RecordingSink::shared();
    let skill = Skill::builder().log_sink(sink.clone()).build().unwrap();
    let envelope = common::envelope(serde_json::json!({
        "type": "IntentRequest",
        "requestId": "req-9",
        "locale": "es-ES",
        "intent": { "name": "" },
    }));
    let json = serde_json::to_value(skill.invoke_value(envelope).unwrap()).unwrap();

    let error = "<speak>Lo siento, ha habido un problema. Por favor inténtalo otra vez.</speak>";
    assert_eq!(json["response"]["outputSpeech"]["ssml"], error);
    assert_eq!(json["response"]["reprompt"]["outputSpeech"]["ssml"], error);
    assert_eq!(json["response"]["shouldEndSession"], false);
    assert_eq!(sink.tags(), vec!["request_received", "error_handled"]);
    match &sink.events()[1] {
        SkillLogEvent::ErrorHandled {
            request_id,
            kind,
            ..
        } => {
            assert_eq!(request_id.as_deref(), Some("req-9"));
            assert_eq!(*kind, "missing_intent_name");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn handled_request_logs_request_then_response() {
    let sink = RecordingSink::shared();
    let skill = Skill::builder().log_sink(sink.clone()).build().unwrap();
    skill.invoke_value(common::intent("HelloWorldIntent", "en-US")).unwrap();

    assert_eq!(sink.tags(), vec!["request_received", "response_sent"]);
    let events = sink.events();
    match &events[0] {
        SkillLogEvent::RequestReceived {
            request_id,
            kind,
            intent,
            locale,
            request,
        } => {
            assert_eq!(request_id.as_deref(), Some("req-intent"));
            assert_eq!(*kind, "intent");
            assert_eq!(intent.as_deref(), Some("HelloWorldIntent"));
            assert_eq!(locale, "en-us");
            assert_eq!(request["type"], "IntentRequest");
        }
        other => panic!("unexpected event {other:?}"),
    }
    match &events[1] {
        SkillLogEvent::ResponseSent {
            handler,
            response,
            ..
        } => {
            assert_eq!(*handler, Some("hello_world"));
            assert_eq!(response.speech(), "Hello World!");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn session_end_logs_envelope() {
    let sink = RecordingSink::shared();
    let skill = Skill::builder().log_sink(sink.clone()).build().unwrap();
    skill.invoke_value(common::session_ended("en", "ERROR")).unwrap();

    assert_eq!(sink.tags(), vec!["request_received", "session_ended", "response_sent"]);
    let ended = sink
        .events()
        .into_iter()
        .find_map(|event| match event {
            SkillLogEvent::SessionEnded {
                reason,
                envelope,
                ..
            } => Some((reason, envelope)),
            _ => None,
        })
        .unwrap();
    assert_eq!(ended.0.as_deref(), Some("ERROR"));
    assert_eq!(ended.1["session"]["sessionId"], "session-1");
}

#[test]
fn error_path_logs_error_without_response_record() {
    let sink = RecordingSink::shared();
    let skill = Skill::builder().log_sink(sink.clone()).build().unwrap();
    let envelope = common::envelope(serde_json::json!({
        "type": "CanFulfillIntentRequest",
        "requestId": "req-odd",
        "locale": "en-US",
    }));
    let response = skill.invoke_value(envelope).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["response"]["outputSpeech"]["ssml"],
        "<speak>Sorry, there was an error. Please try again.</speak>"
    );
    assert_eq!(sink.tags(), vec!["request_received", "error_handled"]);
    match &sink.events()[1] {
        SkillLogEvent::ErrorHandled {
            kind,
            ..
        } => assert_eq!(*kind, "no_matching_handler"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn json_lines_sink_writes_one_line_per_record() {
    let buffer = SharedBuffer::default();
    let skill = Skill::builder()
        .log_sink(Arc::new(JsonLinesLogSink::new(buffer.clone())))
        .build()
        .unwrap();
    skill.invoke_value(common::launch("es-ES")).unwrap();

    let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let records: Vec<Value> = text.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["event"], "request_received");
    assert_eq!(records[1]["event"], "response_sent");
    assert_eq!(records[1]["handler"], "launch");
    assert_eq!(records[1]["response"]["shouldEndSession"], false);
}

#[test]
fn config_resources_and_seed_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("strings.toml");
    let mut table = builtin_table();
    let mut english = table.locale("en").unwrap().clone();
    english.insert("FACTS", MessageValue::List(vec!["Only fact.".to_string()]));
    english.insert("HELLO_MESSAGE", MessageValue::Text("Howdy!".to_string()));
    table.insert_locale("en", english);
    fs::write(&resources, toml_table(&table)).unwrap();

    let config_path = dir.path().join("messi-facts.toml");
    fs::write(
        &config_path,
        format!(
            "[locale]\nresources = {:?}\n\n[facts]\nseed = 5\n\n[skill]\nuser_agent = \"custom/1\"\n",
            resources.display().to_string()
        ),
    )
    .unwrap();
    let config = SkillConfig::load(Some(&config_path)).unwrap();
    let skill = SkillBuilder::from_config(&config).unwrap().build().unwrap();

    let hello = skill.invoke_value(common::intent("HelloWorldIntent", "en-US")).unwrap();
    assert_eq!(
        hello.response.output_speech.unwrap().ssml,
        "<speak>Howdy!</speak>"
    );
    let fact = skill.invoke_value(common::intent("GetMessiFactIntent", "en")).unwrap();
    assert_eq!(
        fact.response.output_speech.unwrap().ssml,
        "<speak>A fun fact about Messi is: Only fact.</speak>"
    );
    assert_eq!(skill.user_agent(), format!("{USER_AGENT_PREFIX} custom/1"));
}

fn toml_table(table: &messi_facts_core::LocaleTable) -> String {
    let value = serde_json::to_value(table).unwrap();
    let mut out = String::new();
    for (code, entries) in value.as_object().unwrap() {
        out.push_str(&format!("[{code}]\n"));
        for (key, entry) in entries.as_object().unwrap() {
            out.push_str(&format!("{key} = {entry}\n"));
        }
        out.push('\n');
    }
    out
}
