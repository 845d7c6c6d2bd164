//! Handler configuration.

use crate::request::MergePrecedence;
use crate::server::response::StatusCode;

/// Settings shared by every request an [`ActionHandler`](crate::ActionHandler) serves.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// How query-string values combine with body fields.
    pub precedence: MergePrecedence,
    /// Status given to an action failure that carries none.
    pub action_failure_status: StatusCode,
    /// Status for any other failure without a status of its own.
    pub default_failure_status: StatusCode,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            precedence: MergePrecedence::QueryOverBody,
            action_failure_status: StatusCode::UNKNOWN_ERROR,
            default_failure_status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
