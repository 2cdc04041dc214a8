//! A SQL AST for SELECT statements assembled from caller-supplied fragments, and its
//! rendering to a SQL string with positional parameters.

pub mod sql;
