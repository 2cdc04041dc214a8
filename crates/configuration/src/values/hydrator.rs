use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A named transformation of the raw value of a filter.
///
/// A value that does not convert is kept as the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum HydratorName {
    /// A 64-bit signed integer.
    Integer,
    /// A finite floating point number.
    Float,
    /// `true` or `false`.
    Boolean,
    Lowercase,
    Uppercase,
    /// Leading and trailing whitespace removed.
    Trim,
}

impl HydratorName {
    pub fn hydrate(self, raw: &str) -> serde_json::Value {
        match self {
            HydratorName::Integer => raw.parse::<i64>().map_or_else(|_| json!(raw), |n| json!(n)),
            HydratorName::Float => raw
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map_or_else(|| json!(raw), serde_json::Value::Number),
            HydratorName::Boolean => raw.parse::<bool>().map_or_else(|_| json!(raw), |b| json!(b)),
            HydratorName::Lowercase => json!(raw.to_lowercase()),
            HydratorName::Uppercase => json!(raw.to_uppercase()),
            HydratorName::Trim => json!(raw.trim()),
        }
    }
}
