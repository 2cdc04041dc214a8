//! Resolution rules shared by both targets.

use query_engine_criteria::criteria::{Criteria, Filter};

/// The physical field a filter applies to and the value it should be compared with.
pub fn resolve_filter<'a>(
    criteria: &'a Criteria,
    filter: &'a Filter,
) -> (&'a str, serde_json::Value) {
    (criteria.mapped_field(&filter.field), criteria.hydrate(filter))
}

/// The text a value contributes to a wildcard pattern: strings as they are, anything else as
/// its JSON text.
pub fn pattern_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
