//! Request side: the request object, query decoding and body extraction.

mod http_request;
mod query;
mod body;
mod error;
mod tests;

// Re-export public items
pub use http_request::HttpRequest;
pub use query::{MAX_QUERY_PAIRS, parse_query};
pub use body::{MergePrecedence, get_request_body};
pub use error::Error;
