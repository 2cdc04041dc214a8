//! Filter documents and find options for document stores, in the shape document-store drivers
//! expect them.

pub mod document;
