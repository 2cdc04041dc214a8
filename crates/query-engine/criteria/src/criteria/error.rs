//! Errors for parsing criteria out of a query string.

use thiserror::Error;

/// The input could not be turned into criteria. Parsing stops at the first error; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("url query not present")]
    EmptyQuery,
    /// `key` is the offending key, e.g. `Name[eq]`.
    #[error("operator not found")]
    OperatorNotFound { key: String },
}
