//! Helpers for JSON-over-HTTP request handlers.
//!
//! This library sits between an HTTP server's dispatch layer and the domain
//! code behind it. It does not listen on sockets or route requests.
//!
//! # Features
//!
//! - Wrap an async domain action as a handler with uniform JSON envelopes
//! - Merge query-string parameters into the request body
//! - Normalize `.` and `..` path segments
//! - Set permissive CORS headers
//! - Look up MIME types for static front-end files
//!
//! # Examples
//!
//! ## Wrapping an action
//!
//! ```
//! use httpaction_rs::{to_handle_http, ActionInput, ExceptionData, HttpRequest, HttpResponse};
//! use serde_json::json;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let handler = to_handle_http(|input: ActionInput| async move {
//!     match input.route_params.get("id") {
//!         Some(id) => Ok(json!({"id": id, "name": input.request_body.get("name")})),
//!         None => Err(ExceptionData::new("missing id").with_status(400)),
//!     }
//! });
//!
//! let request = HttpRequest::new("/users/7?name=Ada").with_param("id", "7");
//! let mut response = HttpResponse::new();
//! handler.handle(request, &mut response).await.unwrap();
//!
//! let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
//! assert_eq!(body["name"], "Ada");
//! assert!(body["rsSentMs"].is_i64());
//! # });
//! ```
//!
//! ## Error envelopes
//!
//! A failing action still produces exactly one response, and the failure is
//! handed back to the caller afterwards:
//!
//! ```
//! use httpaction_rs::{to_handle_http, ActionInput, ExceptionData, HttpRequest, HttpResponse, StatusCode};
//! use serde_json::Value;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let handler = to_handle_http(|_input: ActionInput| async {
//!     Err::<Value, _>(ExceptionData::new("not found").with_status(404))
//! });
//!
//! let mut response = HttpResponse::new();
//! let result = handler.handle(HttpRequest::new("/missing"), &mut response).await;
//!
//! assert!(result.is_err());
//! assert_eq!(response.status, StatusCode::NOT_FOUND);
//! assert_eq!(response.body_text(), r#"{"error":"not found","payload":null}"#);
//! # });
//! ```
//!
//! ## Path normalization
//!
//! ```
//! use httpaction_rs::{remove_dots, escapes_root};
//!
//! let path = remove_dots("/entry/midiana/../../secret/ololo.pem");
//! assert_eq!(path, "/secret/ololo.pem");
//! assert!(escapes_root(&remove_dots("../../etc/passwd")));
//! ```

// Export the request module
pub mod request;

// Export the server module
pub mod server;

pub mod path;
pub mod mime;

// Re-export commonly used items for convenience
pub use request::{Error as RequestError, HttpRequest, MergePrecedence, get_request_body, parse_query};
pub use server::{
    ActionHandler, ActionInput, Classified, ClassifyFailure, Error as HandlerError, ExceptionClassifier,
    ExceptionData, HandlerConfig, HandlerFn, HandlerFuture, HttpResponse, StatusCode, set_cors_headers,
    to_handle_http,
};
pub use path::{escapes_root, remove_dots};
pub use mime::get_mime_by_ext;
