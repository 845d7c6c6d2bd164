//! Error types for the handler adapter.

use serde_json::Value;
use thiserror::Error;

use crate::server::classify::{is_truthy, ExceptionData};

/// Failures that end a request with a JSON error envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// The wrapped action failed.
    #[error("{0}")]
    Action(ExceptionData),

    /// The action's result could not be serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response body was already sent.
    #[error("Response already sent")]
    AlreadySent,

    /// The action failed without any description.
    #[error("Empty error")]
    Empty,
}

impl Error {
    /// Status code carried by the failure, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Error::Action(data) => data.http_status_code.filter(|code| *code != 0),
            _ => None,
        }
    }

    /// The failure's message, when it has a meaningful one.
    pub fn message(&self) -> Option<&Value> {
        match self {
            Error::Action(data) => data.message.as_ref().filter(|message| is_truthy(message)),
            _ => None,
        }
    }

    /// Data the client is allowed to see.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Error::Action(data) if data.pass_to_client() => data.data.as_ref(),
            _ => None,
        }
    }

    /// Message for the `error` field of the envelope.
    ///
    /// A string message is used as is, any other message is JSON-encoded
    /// behind a `data-message: ` prefix. Without a message the display text
    /// is used minus a leading `Error: `.
    pub fn client_message(&self) -> String {
        match self.message() {
            Some(Value::String(text)) => text.clone(),
            Some(other) => format!("data-message: {other}"),
            None => {
                let text = self.to_string();
                match text.strip_prefix("Error: ") {
                    Some(stripped) => stripped.to_string(),
                    None => text,
                }
            }
        }
    }
}
