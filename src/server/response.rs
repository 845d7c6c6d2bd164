//! HTTP response types and utilities.

use std::collections::HashMap;
use std::fmt;

use crate::server::error::Error;

/// An HTTP status code.
///
/// Any numeric code can be carried, since failures may report codes outside
/// the standard set (520 for an action that failed without saying why).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const UNAUTHORIZED: StatusCode = StatusCode(401);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);
    /// Non-standard code used when an action fails without a status of its own.
    pub const UNKNOWN_ERROR: StatusCode = StatusCode(520);

    /// Wrap a numeric status code.
    pub const fn from_u16(code: u16) -> Self {
        StatusCode(code)
    }

    /// The numeric status code.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Get the reason phrase for this status code, empty for codes without one.
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            520 => "Unknown Error",
            _ => "",
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason_phrase() {
            "" => write!(f, "{}", self.0),
            reason => write!(f, "{} {reason}", self.0),
        }
    }
}

/// The response object a handler writes into.
///
/// Headers and status may be changed freely until the body is sent; the
/// body can be sent only once.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
    sent: bool,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    /// Create an unsent `200 OK` response with no body.
    pub fn new() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Server".to_string(), "httpaction-rs".to_string());

        Self {
            status: StatusCode::OK,
            headers,
            body: Vec::new(),
            sent: false,
        }
    }

    /// Add or replace a header. Names are matched case-insensitively.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set the content type.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.set_header("Content-Type", content_type);
    }

    /// Set the status code.
    pub fn set_status(&mut self, status: impl Into<StatusCode>) {
        self.status = status.into();
    }

    /// Send the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadySent`] if a body was sent before; the first body is kept.
    pub fn send(&mut self, body: impl Into<String>) -> Result<(), Error> {
        if self.sent {
            return Err(Error::AlreadySent);
        }

        self.body = body.into().into_bytes();
        let content_length = self.body.len().to_string();
        self.set_header("Content-Length", content_length);
        self.sent = true;
        Ok(())
    }

    /// Whether a body has been sent.
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        let status_line = format!("HTTP/1.1 {status}\r\n", status = self.status);
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Empty line separates headers from body
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
