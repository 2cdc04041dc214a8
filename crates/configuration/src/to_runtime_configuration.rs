//! Convert the parsed configuration into the one used at runtime.

use crate::configuration::Configuration;
use crate::version1::ParsedConfiguration;

/// Resolve the serialized settings into the types the translation takes.
pub fn make_runtime_configuration(parsed_config: ParsedConfiguration) -> Configuration {
    Configuration {
        placeholders: parsed_config.placeholders.into(),
        unsupported_operators: parsed_config.unsupported_operators.into(),
        collections: parsed_config.collections,
    }
}
