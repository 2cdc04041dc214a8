mod hydrator;
mod settings;

pub use hydrator::HydratorName;
pub use settings::{Placeholders, UnsupportedOperators};
