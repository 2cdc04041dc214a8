pub mod configuration;
pub mod error;
pub mod to_runtime_configuration;
pub mod values;
pub mod version1;

pub use configuration::Configuration;
pub use error::{ConfigurationError, ParseConfigurationError, WriteParsedConfigurationError};
pub use to_runtime_configuration::make_runtime_configuration;
pub use values::{HydratorName, Placeholders, UnsupportedOperators};
pub use version1::{
    parse_configuration, write_parsed_configuration, Collection, ParsedConfiguration,
};
