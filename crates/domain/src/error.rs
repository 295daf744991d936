//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PizzeriaError`]
//! via `From`, so use-cases can propagate everything with `?`.

use crate::restaurant_pizza::Price;

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum PizzeriaError {
    /// Input was missing, malformed, or outside a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an input is rejected before (or while) it is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent from the request body.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but cannot be read as an integer.
    #[error("field `{0}` must be an integer")]
    InvalidType(&'static str),

    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    MalformedBody,

    /// The price is outside the accepted range.
    #[error("price {0} must be between {min} and {max}", min = Price::MIN, max = Price::MAX)]
    PriceOutOfRange(i64),

    /// The store refused the write; nothing was persisted.
    #[error("validation errors")]
    Rejected,
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (`"Restaurant"`, `"Pizza"`, …).
    pub entity: &'static str,
    /// The id that was requested, as text.
    pub id: String,
}
