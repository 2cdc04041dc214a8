//! Filter documents and the options of a find.

pub mod filter;
pub mod options;

pub use filter::{Condition, Filter};
pub use options::{FindOptions, Sort, SortDirection};
