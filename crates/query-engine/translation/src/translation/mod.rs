//! Translate a `Criteria` into a relational statement or a document filter.
//!
//! The two targets are sibling functions over the same criteria. Their predicate shapes, a
//! flat parameter list and nested field conditions, have nothing useful in common.

pub mod document;
pub mod error;
pub mod helpers;
pub mod relational;
