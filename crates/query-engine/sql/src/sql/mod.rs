//! SQL AST, conversion to strings, and helpers for building the AST.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
