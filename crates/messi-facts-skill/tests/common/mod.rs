// crates/messi-facts-skill/tests/common/mod.rs
// =============================================================================
// Module: Skill Test Helpers
// Description: Recording sinks and envelope fixtures for skill tests.
// Purpose: Reduce duplication across integration tests for messi-facts-skill.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]
#![allow(clippy::expect_used, reason = "Test helpers panic on poisoned locks.")]

use std::sync::Arc;
use std::sync::Mutex;

use messi_facts_core::SkillLogEvent;
use messi_facts_core::SkillLogSink;
use serde_json::Value;
use serde_json::json;

/// Log sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SkillLogEvent>>,
}

impl RecordingSink {
    /// Returns a shared, empty sink.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns a snapshot of recorded events.
    pub fn events(&self) -> Vec<SkillLogEvent> {
        self.events.lock().expect("events lock").clone()
    }

    /// Returns the `event` tags in record order.
    pub fn tags(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|event| {
                serde_json::to_value(event)
                    .ok()
                    .and_then(|value| value["event"].as_str().map(str::to_string))
            })
            .collect()
    }
}

impl SkillLogSink for RecordingSink {
    fn record(&self, event: &SkillLogEvent) {
        self.events.lock().expect("events lock").push(event.clone());
    }
}

/// Builds a platform envelope around `request`.
pub fn envelope(request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": { "new": true, "sessionId": "session-1" },
        "context": {},
        "request": request,
    })
}

/// Builds a launch envelope.
pub fn launch(locale: &str) -> Value {
    envelope(json!({
        "type": "LaunchRequest",
        "requestId": "req-launch",
        "timestamp": "2026-01-01T00:00:00Z",
        "locale": locale,
    }))
}

/// Builds an intent envelope.
pub fn intent(name: &str, locale: &str) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "req-intent",
        "timestamp": "2026-01-01T00:00:00Z",
        "locale": locale,
        "intent": { "name": name, "confirmationStatus": "NONE" },
    }))
}

/// Builds a session-ended envelope.
pub fn session_ended(locale: &str, reason: &str) -> Value {
    envelope(json!({
        "type": "SessionEndedRequest",
        "requestId": "req-end",
        "timestamp": "2026-01-01T00:00:00Z",
        "locale": locale,
        "reason": reason,
    }))
}
