// crates/messi-facts-core/src/runtime/logging.rs
// ============================================================================
// Module: Skill Log Sinks
// Description: Structured log events and JSON-lines sinks.
// Purpose: Record request, response, and error observations without hard deps.
// Dependencies: serde, serde_json, std
// ============================================================================

//! ## Overview
//! Interceptors and handlers describe what they observed as a
//! [`SkillLogEvent`] and hand it to a [`SkillLogSink`]. The default sink
//! writes one JSON object per line to any writer; deployments that already
//! ship logs elsewhere can plug in their own sink.
//!
//! ## Invariants
//! - Recording never fails the request; write errors are swallowed.
//! - Each event is written as exactly one line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::core::response::Response;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Structured log event.
///
/// # Invariants
/// - The `event` tag values are stable for log consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SkillLogEvent {
    /// An inbound request passed the request logging interceptor.
    RequestReceived {
        /// Platform request identifier.
        request_id: Option<String>,
        /// Request kind label.
        kind: &'static str,
        /// Intent name for intent requests.
        intent: Option<String>,
        /// Requested locale.
        locale: String,
        /// Raw `request` object of the envelope.
        request: Value,
    },
    /// A handler response passed the response logging interceptor.
    ResponseSent {
        /// Platform request identifier.
        request_id: Option<String>,
        /// Handler that produced the response.
        handler: Option<&'static str>,
        /// The response.
        response: Response,
    },
    /// The platform ended the session.
    SessionEnded {
        /// Platform request identifier.
        request_id: Option<String>,
        /// Platform-reported reason.
        reason: Option<String>,
        /// Raw envelope.
        envelope: Value,
    },
    /// The error boundary handled a failure.
    ErrorHandled {
        /// Platform request identifier.
        request_id: Option<String>,
        /// Error kind label.
        kind: &'static str,
        /// Error message.
        error: String,
    },
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for structured skill log events.
pub trait SkillLogSink: Send + Sync {
    /// Records an event.
    fn record(&self, event: &SkillLogEvent);
}

/// No-op log sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopLogSink;

impl SkillLogSink for NoopLogSink {
    fn record(&self, _event: &SkillLogEvent) {}
}

// ============================================================================
// SECTION: JSON Lines Sink
// ============================================================================

/// Log sink writing one JSON object per line.
pub struct JsonLinesLogSink<W: Write + Send> {
    /// Output writer for log records.
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesLogSink<W> {
    /// Creates a sink over `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> SkillLogSink for JsonLinesLogSink<W> {
    fn record(&self, event: &SkillLogEvent) {
        let Ok(mut line) = serde_json::to_vec(event) else {
            return;
        };
        line.push(b'\n');
        if let Ok(mut guard) = self.writer.lock() {
            let _ = guard.write_all(&line);
            let _ = guard.flush();
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
