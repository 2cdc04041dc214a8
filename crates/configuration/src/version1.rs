//! The version 1 configuration format.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{HydratorName, Placeholders, UnsupportedOperators};

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
const CURRENT_VERSION: &str = "1";

/// The contents of `configuration.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using.
    pub version: Version,
    /// How parameters are referred to in generated SQL.
    #[serde(default)]
    pub placeholders: Placeholders,
    /// What the document translation does with operators it does not know.
    #[serde(default)]
    pub unsupported_operators: UnsupportedOperators,
    /// Settings per collection, keyed by collection name.
    #[serde(default)]
    pub collections: BTreeMap<String, Collection>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub enum Version {
    #[serde(rename = "1")]
    This,
}

/// The caller-supplied settings of one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// The projection, e.g. `u.id, u.name`.
    pub select: String,
    /// The source, e.g. `users u`.
    pub from: String,
    /// Join clauses, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    /// Physical names of logical fields.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_map: BTreeMap<String, String>,
    /// Conversions applied to the raw values of filters on a field.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hydrators: BTreeMap<String, HydratorName>,
}

impl ParsedConfiguration {
    pub fn empty() -> Self {
        Self {
            version: Version::This,
            placeholders: Placeholders::default(),
            unsupported_operators: UnsupportedOperators::default(),
            collections: BTreeMap::new(),
        }
    }

    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }
}

#[derive(Deserialize)]
struct VersionTag {
    #[serde(default)]
    version: serde_json::Value,
}

/// Parse the configuration format from a directory.
pub fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file).map_err(|error| {
            ParseConfigurationError::IoError {
                file_path: configuration_file.clone(),
                error,
            }
        })?;

    let parse_error = |error: serde_json::Error| ParseConfigurationError::ParseError {
        file_path: configuration_file.clone(),
        line: error.line(),
        column: error.column(),
        message: error.to_string(),
    };

    let tag: VersionTag = serde_json::from_str(&configuration_file_contents).map_err(parse_error)?;
    if tag.version.as_str() != Some(CURRENT_VERSION) {
        return Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file.clone(),
            version: tag.version.to_string(),
        });
    }

    let parsed_config: ParsedConfiguration =
        serde_json::from_str(&configuration_file_contents).map_err(parse_error)?;

    tracing::debug!(
        "Parsed configuration from {} with {} collection(s)",
        configuration_file.display(),
        parsed_config.collections.len()
    );

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk, along with the JSON schema of the
/// format.
pub fn write_parsed_configuration(
    parsed_config: &ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref())?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(parsed_config)? + "\n",
    )?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)? + "\n",
    )?;

    Ok(())
}
