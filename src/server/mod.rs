//! Response side: the response object, CORS headers, failure
//! classification and the action handler adapter.

mod response;
mod classify;
mod config;
mod cors;
mod error;
mod handler;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use classify::{ClassifyFailure, Classified, ExceptionClassifier, ExceptionData};
pub use config::HandlerConfig;
pub use cors::set_cors_headers;
pub use error::Error;
pub use handler::{ActionHandler, ActionInput, HandlerFn, HandlerFuture, to_handle_http};
