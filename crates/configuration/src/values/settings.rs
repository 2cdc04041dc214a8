use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use query_engine_sql::sql;
use query_engine_translation::translation::document;

/// How parameters are referred to in generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Placeholders {
    /// `?`
    #[default]
    QuestionMark,
    /// `$1`, `$2`, ...
    Dollar,
}

impl From<Placeholders> for sql::string::PlaceholderStyle {
    fn from(value: Placeholders) -> Self {
        match value {
            Placeholders::QuestionMark => sql::string::PlaceholderStyle::QuestionMark,
            Placeholders::Dollar => sql::string::PlaceholderStyle::Dollar,
        }
    }
}

/// What the document translation does with operators outside the supported set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum UnsupportedOperators {
    /// Emit them as `$<operator>`.
    #[default]
    PassThrough,
    /// Leave them out.
    Omit,
}

impl From<UnsupportedOperators> for document::UnsupportedOperators {
    fn from(value: UnsupportedOperators) -> Self {
        match value {
            UnsupportedOperators::PassThrough => document::UnsupportedOperators::PassThrough,
            UnsupportedOperators::Omit => document::UnsupportedOperators::Omit,
        }
    }
}
