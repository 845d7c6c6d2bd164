//! HTTP request representation as handed over by the server layer.

use std::collections::HashMap;
use serde_json::{Map, Value};

use crate::request::error::Error;
use crate::request::query::parse_query;

/// Represents an HTTP request after the server layer has routed it.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// The request target: path plus optional `?query`
    pub url: String,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The parsed structured payload, absent when no body was parsed
    pub body: Option<Value>,
    /// Route parameters extracted by the router
    pub params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new request for the given URL with no headers, body or route parameters.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the parsed body payload.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a single route parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace all route parameters.
    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Set the body from raw bytes.
    ///
    /// The bytes are parsed as JSON when the request declares
    /// `Content-Type: application/json`. Any other content type, or an empty
    /// payload, leaves the body absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonError`] if the payload is declared as JSON but is not valid JSON.
    pub fn with_raw_body(mut self, body: &[u8]) -> Result<Self, Error> {
        if !self.is_json() || body.iter().all(u8::is_ascii_whitespace) {
            self.body = None;
            return Ok(self);
        }

        self.body = Some(serde_json::from_slice(body)?);
        Ok(self)
    }

    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn get_header(&self, name: &str) -> Option<&String> {
        // Headers are case-insensitive
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Check if the request declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|content_type| content_type.starts_with("application/json"))
    }

    /// The path part of the URL, without the query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    /// The raw query string.
    ///
    /// This is the text between the first `?` and the next one, if any.
    pub fn query_string(&self) -> Option<&str> {
        self.url.split('?').nth(1)
    }

    /// Decoded query parameters.
    ///
    /// A key repeated in the query maps to a JSON array of its values.
    pub fn query_params(&self) -> Map<String, Value> {
        self.query_string().map(parse_query).unwrap_or_default()
    }
}
