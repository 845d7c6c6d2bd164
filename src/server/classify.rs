//! Failure classification.
//!
//! An action may fail with any error type. Before an error response is built
//! the failure is reduced to [`ExceptionData`] (or plain text) by a
//! [`ClassifyFailure`] implementation.

use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized failure description.
///
/// Serializes with the wire names `httpStatusCode`, `message` and `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionData {
    /// Status code the response should carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    /// Human readable message; not always a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Extra data, exposed to the client only when `passToClient` is set in it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ExceptionData {
    /// Failure with a text message and no status code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
            ..Self::default()
        }
    }

    /// Set the status code the response should carry.
    pub fn with_status(mut self, code: u16) -> Self {
        self.http_status_code = Some(code);
        self
    }

    /// Replace the message with an arbitrary JSON value.
    pub fn with_message(mut self, message: Value) -> Self {
        self.message = Some(message);
        self
    }

    /// Attach extra data; see [`pass_to_client`](Self::pass_to_client).
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Whether `data` may be shown to the client.
    pub fn pass_to_client(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|data| data.get("passToClient"))
            .is_some_and(is_truthy)
    }
}

impl fmt::Display for ExceptionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(Value::String(text)) if !text.is_empty() => write!(f, "Error: {text}"),
            Some(value) if is_truthy(value) => write!(f, "Error: {value}"),
            _ => write!(f, "Error"),
        }
    }
}

impl std::error::Error for ExceptionData {}

/// Result of classifying a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Only a text description could be extracted.
    Text(String),
    /// A structured description.
    Data(ExceptionData),
    /// The failure carried nothing at all.
    Nothing,
}

/// Reduces an action's failure to a [`Classified`] description.
pub trait ClassifyFailure<E> {
    fn classify(&self, failure: &E) -> Classified;
}

impl<E, F> ClassifyFailure<E> for F
where
    F: Fn(&E) -> Classified,
{
    fn classify(&self, failure: &E) -> Classified {
        self(failure)
    }
}

/// Default classifier for the failure types this crate knows about.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionClassifier;

impl ClassifyFailure<ExceptionData> for ExceptionClassifier {
    fn classify(&self, failure: &ExceptionData) -> Classified {
        Classified::Data(failure.clone())
    }
}

impl ClassifyFailure<String> for ExceptionClassifier {
    fn classify(&self, failure: &String) -> Classified {
        Classified::Text(failure.clone())
    }
}

impl ClassifyFailure<&'static str> for ExceptionClassifier {
    fn classify(&self, failure: &&'static str) -> Classified {
        Classified::Text((*failure).to_string())
    }
}

impl ClassifyFailure<Box<dyn std::error::Error + Send + Sync>> for ExceptionClassifier {
    fn classify(&self, failure: &Box<dyn std::error::Error + Send + Sync>) -> Classified {
        match failure.downcast_ref::<ExceptionData>() {
            Some(data) => Classified::Data(data.clone()),
            None => Classified::Text(failure.to_string()),
        }
    }
}

/// JSON failure values: `null` is nothing, strings are text, objects are
/// read field by field, anything else is its JSON text.
///
/// An object never becomes message text, so its `data` stays hidden unless
/// it sets `passToClient`.
impl ClassifyFailure<Value> for ExceptionClassifier {
    fn classify(&self, failure: &Value) -> Classified {
        match failure {
            Value::Null => Classified::Nothing,
            Value::String(text) => Classified::Text(text.clone()),
            Value::Object(fields) => Classified::Data(ExceptionData {
                http_status_code: fields.get("httpStatusCode").and_then(status_code_from_json),
                message: fields.get("message").filter(|message| !message.is_null()).cloned(),
                data: fields.get("data").filter(|data| !data.is_null()).cloned(),
            }),
            other => Classified::Text(other.to_string()),
        }
    }
}

/// A status code given as an integral JSON number that fits in `u16`.
fn status_code_from_json(value: &Value) -> Option<u16> {
    if let Some(code) = value.as_u64() {
        return u16::try_from(code).ok();
    }
    value
        .as_f64()
        .filter(|code| code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(code))
        .map(|code| code as u16)
}

/// JavaScript-style truthiness, which is how `passToClient` and `message`
/// are read from loosely typed failure payloads.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
