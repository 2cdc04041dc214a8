//! The normalized query intent: filters, ordering and pagination, and the parser that builds
//! it from a URL query string.

pub mod criteria;
