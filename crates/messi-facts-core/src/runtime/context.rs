// crates/messi-facts-core/src/runtime/context.rs
// ============================================================================
// Module: Request Context
// Description: Per-request state shared by interceptors and the matched handler.
// Purpose: Carry the request, its raw envelope, and request-scoped attributes.
// Dependencies: crate::{core, interfaces, runtime::translator}, serde_json
// ============================================================================

//! ## Overview
//! A [`RequestContext`] lives for exactly one dispatch. Request interceptors
//! fill its [`RequestAttributes`] (most importantly the bound
//! [`Translator`]); the matched handler and the response interceptors only
//! read it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::request::Request;
use crate::interfaces::HandlerError;
use crate::runtime::translator::Translator;

// ============================================================================
// SECTION: Attributes
// ============================================================================

/// Request-scoped attributes.
///
/// # Invariants
/// - Discarded with the context; nothing here survives the request.
#[derive(Debug, Clone, Default)]
pub struct RequestAttributes {
    /// Translator bound by the localization interceptor.
    translator: Option<Translator>,
    /// Name of the handler selected by the dispatcher.
    handler: Option<&'static str>,
    /// Free-form attributes set by interceptors.
    values: BTreeMap<String, Value>,
}

impl RequestAttributes {
    /// Binds the request translator, replacing any earlier binding.
    pub fn bind_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    /// Returns the bound translator, if any.
    #[must_use]
    pub const fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// Records the selected handler name.
    pub(crate) const fn set_handler(&mut self, name: &'static str) {
        self.handler = Some(name);
    }

    /// Returns the selected handler name, once dispatch has chosen one.
    #[must_use]
    pub const fn handler(&self) -> Option<&'static str> {
        self.handler
    }

    /// Stores a free-form attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Returns a free-form attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

// ============================================================================
// SECTION: Context
// ============================================================================

/// Per-request dispatch context.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Dispatch view of the request.
    request: Request,
    /// Raw platform envelope, for logging.
    envelope: Value,
    /// Request-scoped attributes.
    attributes: RequestAttributes,
}

impl RequestContext {
    /// Creates a context for `request` with its raw envelope.
    #[must_use]
    pub fn new(request: Request, envelope: Value) -> Self {
        Self {
            request,
            envelope,
            attributes: RequestAttributes::default(),
        }
    }

    /// Creates a context without a raw envelope.
    #[must_use]
    pub fn from_request(request: Request) -> Self {
        Self::new(request, Value::Null)
    }

    /// Returns the request.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Returns the raw envelope (`null` when none was supplied).
    #[must_use]
    pub const fn envelope(&self) -> &Value {
        &self.envelope
    }

    /// Returns the attributes.
    #[must_use]
    pub const fn attributes(&self) -> &RequestAttributes {
        &self.attributes
    }

    /// Returns the attributes for mutation.
    pub const fn attributes_mut(&mut self) -> &mut RequestAttributes {
        &mut self.attributes
    }

    /// Returns the bound translator.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::TranslatorUnbound`] before localization ran.
    pub fn translator(&self) -> Result<&Translator, HandlerError> {
        self.attributes.translator().ok_or(HandlerError::TranslatorUnbound)
    }
}
