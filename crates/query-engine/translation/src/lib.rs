//! Translate criteria into the queries of the supported backends.

pub mod translation;
