//! Translate criteria to a document-store filter and find options.
//!
//! Unlike the relational translation, operators outside the supported set are passed through
//! as `$<operator>` by default, so a request can use any operator the store understands.
//! [`UnsupportedOperators::Omit`] drops them instead, which makes both targets agree.

use query_engine_criteria::criteria::{Criteria, Filter};
use query_engine_document::document;

use super::helpers;

/// What to do with filters whose operator is not in the supported set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedOperators {
    /// Emit `{"$<operator>": value}` with the operator token as written.
    #[default]
    PassThrough,
    /// Leave the filter out, like the relational translation does.
    Omit,
}

/// Translate criteria to a filter and find options.
pub fn translate(criteria: &Criteria) -> (document::Filter, document::FindOptions) {
    translate_with(criteria, UnsupportedOperators::default())
}

/// Translate criteria to a filter and find options, handling unsupported operators as asked.
pub fn translate_with(
    criteria: &Criteria,
    unsupported: UnsupportedOperators,
) -> (document::Filter, document::FindOptions) {
    let filter = translate_filter(criteria, unsupported);
    let options = translate_options(criteria);

    tracing::debug!(
        "Generated document filter: {:?}, options: {:?}",
        filter,
        options
    );
    (filter, options)
}

/// Sort, limit and skip.
///
/// The sort direction is binary: `asc` sorts ascending, any other token descending. The sort
/// field is used as written in the request, without going through the field map.
pub fn translate_options(criteria: &Criteria) -> document::FindOptions {
    let mut options = document::FindOptions::new();

    if let Some(order) = criteria.sort_key() {
        let direction = if order.is_ascending() {
            document::SortDirection::Ascending
        } else {
            document::SortDirection::Descending
        };
        options.set_sort(&order.field, direction);
    }

    if criteria.limit > 0 {
        options.set_limit(to_i64(criteria.limit));
    }

    if criteria.offset > 0 {
        options.set_skip(to_i64(criteria.offset));
    }

    options
}

/// The conditions of every filter, in order.
pub fn translate_filter(
    criteria: &Criteria,
    unsupported: UnsupportedOperators,
) -> document::Filter {
    let mut filter = document::Filter::new();

    for criteria_filter in &criteria.filters {
        let (field, value) = helpers::resolve_filter(criteria, criteria_filter);
        if let Some(condition) = translate_condition(criteria_filter, value, unsupported) {
            filter.push(field, condition);
        }
    }

    filter
}

fn translate_condition(
    filter: &Filter,
    value: serde_json::Value,
    unsupported: UnsupportedOperators,
) -> Option<document::Condition> {
    match (filter.supported_operator(), unsupported) {
        (Some(operator), _) if operator.is_pattern_match() => Some(document::Condition::regex(
            format!(".*{}.*", helpers::pattern_text(&value)),
            "i",
        )),
        (Some(operator), _) => Some(document::Condition::compare(
            operator.document_operator(),
            value,
        )),
        (None, UnsupportedOperators::PassThrough) => Some(document::Condition::compare(
            format!("${}", filter.operator),
            value,
        )),
        (None, UnsupportedOperators::Omit) => {
            tracing::debug!(
                "Skipping filter on '{}': unsupported operator '{}'",
                filter.field,
                filter.operator
            );
            None
        }
    }
}

/// Counts beyond what drivers accept are clamped.
fn to_i64(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_clamped() {
        assert_eq!(to_i64(10), 10);
        assert_eq!(to_i64(u64::MAX), i64::MAX);
    }
}
