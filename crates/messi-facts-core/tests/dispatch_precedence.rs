// crates/messi-facts-core/tests/dispatch_precedence.rs
// ============================================================================
// Module: Dispatch Precedence Tests
// Description: First-match selection, interceptor order, and error boundary.
// ============================================================================
//! ## Overview
//! Drives the dispatcher with recording handlers and interceptors.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Tests use unwrap on deterministic fixtures."
)]

use std::sync::Arc;
use std::sync::Mutex;

use messi_facts_core::ErrorHandler;
use messi_facts_core::HandlerError;
use messi_facts_core::Request;
use messi_facts_core::RequestContext;
use messi_facts_core::RequestHandler;
use messi_facts_core::RequestInterceptor;
use messi_facts_core::Response;
use messi_facts_core::ResponseInterceptor;
use messi_facts_core::SkillDispatcher;
use messi_facts_core::SkillError;

type Trace = Arc<Mutex<Vec<String>>>;

fn push(trace: &Trace, entry: impl Into<String>) {
    trace.lock().expect("trace lock").push(entry.into());
}

fn entries(trace: &Trace) -> Vec<String> {
    trace.lock().expect("trace lock").clone()
}

struct Recording {
    name: &'static str,
    accepts: fn(&Request) -> bool,
    fails: bool,
    trace: Trace,
}

impl RequestHandler for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    fn can_handle(&self, request: &Request) -> bool {
        push(&self.trace, format!("can:{}", self.name));
        (self.accepts)(request)
    }

    fn handle(&self, _ctx: &RequestContext) -> Result<Response, HandlerError> {
        push(&self.trace, format!("handle:{}", self.name));
        if self.fails {
            return Err(HandlerError::Action {
                name: self.name,
                message: "boom".to_string(),
            });
        }
        Ok(Response::builder().speak(self.name).reprompt("again").build())
    }
}

struct CatchAll {
    trace: Trace,
    fails: bool,
}

impl ErrorHandler for CatchAll {
    fn name(&self) -> &'static str {
        "catch_all"
    }

    fn can_handle(&self, _ctx: &RequestContext, _error: &HandlerError) -> bool {
        true
    }

    fn handle(&self, _ctx: &RequestContext, error: &HandlerError) -> Result<Response, HandlerError> {
        push(&self.trace, format!("error:{}", error.kind()));
        if self.fails {
            return Err(HandlerError::TranslatorUnbound);
        }
        Ok(Response::builder().speak("sorry").reprompt("sorry").build())
    }
}

struct Pre {
    trace: Trace,
    fails: bool,
}

impl RequestInterceptor for Pre {
    fn name(&self) -> &'static str {
        "pre"
    }

    fn process(&self, ctx: &mut RequestContext) -> Result<(), HandlerError> {
        push(&self.trace, "pre");
        ctx.attributes_mut().insert("seen", serde_json::json!(true));
        if self.fails {
            return Err(HandlerError::Interceptor {
                name: "pre",
                message: "rejected".to_string(),
            });
        }
        Ok(())
    }
}

struct Post {
    trace: Trace,
}

impl ResponseInterceptor for Post {
    fn name(&self) -> &'static str {
        "post"
    }

    fn process(&self, ctx: &RequestContext, response: &Response) -> Result<(), HandlerError> {
        let handler = ctx.attributes().handler().unwrap_or("none");
        push(&self.trace, format!("post:{handler}:{}", response.speech()));
        Ok(())
    }
}

fn always(_request: &Request) -> bool {
    true
}

fn hello(request: &Request) -> bool {
    request.is_intent_named("HelloWorldIntent")
}

fn handler(name: &'static str, accepts: fn(&Request) -> bool, trace: &Trace) -> Recording {
    Recording {
        name,
        accepts,
        fails: false,
        trace: Arc::clone(trace),
    }
}

#[test]
fn first_accepting_handler_wins_and_later_ones_are_not_consulted() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_handler(handler("hello", hello, &trace))
        .request_handler(handler("first", always, &trace))
        .request_handler(handler("second", always, &trace))
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::intent("OtherIntent", "en"));
    let response = dispatcher.dispatch(&mut ctx).unwrap();

    assert_eq!(response.speech(), "first");
    assert_eq!(entries(&trace), vec!["can:hello", "can:first", "handle:first"]);
}

#[test]
fn interceptors_wrap_the_handler_in_order() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_interceptor(Pre {
            trace: Arc::clone(&trace),
            fails: false,
        })
        .request_handler(handler("hello", hello, &trace))
        .response_interceptor(Post {
            trace: Arc::clone(&trace),
        })
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::intent("HelloWorldIntent", "en"));
    dispatcher.dispatch(&mut ctx).unwrap();

    assert_eq!(entries(&trace), vec!["pre", "can:hello", "handle:hello", "post:hello:hello"]);
    assert_eq!(ctx.attributes().get("seen"), Some(&serde_json::json!(true)));
}

#[test]
fn no_match_goes_to_error_boundary() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_handler(handler("hello", hello, &trace))
        .error_handler(CatchAll {
            trace: Arc::clone(&trace),
            fails: false,
        })
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::session_start("en"));
    let response = dispatcher.dispatch(&mut ctx).unwrap();

    assert_eq!(response.speech(), "sorry");
    assert!(!response.should_end_session());
    assert_eq!(entries(&trace), vec!["can:hello", "error:no_matching_handler"]);
}

#[test]
fn handler_failure_skips_response_interceptors() {
    let trace = Trace::default();
    let failing = Recording {
        name: "broken",
        accepts: always,
        fails: true,
        trace: Arc::clone(&trace),
    };
    let dispatcher = SkillDispatcher::builder()
        .request_handler(failing)
        .response_interceptor(Post {
            trace: Arc::clone(&trace),
        })
        .error_handler(CatchAll {
            trace: Arc::clone(&trace),
            fails: false,
        })
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::intent("AnyIntent", "es"));
    let response = dispatcher.dispatch(&mut ctx).unwrap();

    assert_eq!(response.speech(), "sorry");
    assert_eq!(entries(&trace), vec!["can:broken", "handle:broken", "error:action"]);
}

#[test]
fn request_interceptor_failure_never_reaches_handlers() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_interceptor(Pre {
            trace: Arc::clone(&trace),
            fails: true,
        })
        .request_handler(handler("first", always, &trace))
        .error_handler(CatchAll {
            trace: Arc::clone(&trace),
            fails: false,
        })
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::session_start("en"));
    dispatcher.dispatch(&mut ctx).unwrap();

    assert_eq!(entries(&trace), vec!["pre", "error:interceptor"]);
}

#[test]
fn missing_error_handler_surfaces_unhandled() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_handler(handler("hello", hello, &trace))
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::session_end("en"));
    let err = dispatcher.dispatch(&mut ctx).unwrap_err();

    assert_eq!(
        err,
        SkillError::Unhandled(HandlerError::NoMatchingHandler {
            kind: "session-end"
        })
    );
}

#[test]
fn failing_error_handler_is_not_retried() {
    let trace = Trace::default();
    let dispatcher = SkillDispatcher::builder()
        .request_handler(handler("hello", hello, &trace))
        .error_handler(CatchAll {
            trace: Arc::clone(&trace),
            fails: true,
        })
        .error_handler(CatchAll {
            trace: Arc::clone(&trace),
            fails: false,
        })
        .build()
        .unwrap();

    let mut ctx = RequestContext::from_request(Request::intent("Nope", "en"));
    let err = dispatcher.dispatch(&mut ctx).unwrap_err();

    assert!(matches!(err, SkillError::ErrorHandlerFailed { handler: "catch_all", .. }));
    assert_eq!(entries(&trace), vec!["can:hello", "error:no_matching_handler"]);
}
