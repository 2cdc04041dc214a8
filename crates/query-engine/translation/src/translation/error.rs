//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("select statements must have at least one result column")]
    MissingSelectList,
    #[error("select statements must have a source to select from")]
    MissingFrom,
}
