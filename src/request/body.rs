//! Request body extraction.

use log::debug;
use serde_json::{Map, Value};

use crate::request::http_request::HttpRequest;

/// Which source wins when the body and the query string name the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePrecedence {
    /// Query-string values overwrite body fields of the same name.
    #[default]
    QueryOverBody,
    /// Body fields are kept; the query string only adds missing names.
    BodyOverQuery,
}

/// Build the request body map from the parsed body and the query string.
///
/// An absent body, or one that is not a JSON object, contributes no fields.
pub fn get_request_body(request: &HttpRequest, precedence: MergePrecedence) -> Map<String, Value> {
    let mut fields = match &request.body {
        Some(Value::Object(fields)) => fields.clone(),
        Some(_) => {
            debug!("Ignoring non-object body for {path}", path = request.path());
            Map::new()
        }
        None => Map::new(),
    };

    for (key, value) in request.query_params() {
        match precedence {
            MergePrecedence::QueryOverBody => {
                fields.insert(key, value);
            }
            MergePrecedence::BodyOverQuery => {
                fields.entry(key).or_insert(value);
            }
        }
    }

    fields
}
