//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The display text of each variant is the message returned to HTTP callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field is absent, `null`, `false`, `0` or empty.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is not a non-empty array.
    #[error("Order must include at least one dish")]
    NoDishes,

    /// The dish at this index has a quantity that is not a positive integer.
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    /// `status` names none of the known statuses.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// The body carries an id that differs from the one in the route.
    #[error("Order id does not match route id. Order: {body}, Route: {route}.")]
    IdMismatch { body: String, route: String },

    /// The payload is structurally wrong (bad JSON, a non-string text field).
    #[error("{0}")]
    Malformed(String),

    /// Delivered orders are immutable.
    #[error("A delivered order cannot be changed")]
    Delivered,

    /// Only pending orders may be deleted.
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,

    /// The requested order was not found.
    #[error("Order does not exist: {0}.")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Coarse classification used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A missing or invalid field.
    Validation,
    /// No order with the given id.
    NotFound,
    /// The request conflicts with the order's current state or route.
    Conflict,
    /// The service itself failed.
    Internal,
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::MissingField(_)
            | OrderError::NoDishes
            | OrderError::InvalidQuantity(_)
            | OrderError::InvalidStatus
            | OrderError::Malformed(_) => ErrorKind::Validation,
            OrderError::IdMismatch { .. } | OrderError::Delivered | OrderError::NotPending => {
                ErrorKind::Conflict
            }
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::ActorCommunication(_) => ErrorKind::Internal,
        }
    }
}
