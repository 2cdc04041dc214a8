//! Translate criteria to a SELECT statement with positional parameters.

use query_engine_criteria::criteria::{Criteria, Filter};
use query_engine_sql::sql;

use super::error::Error;
use super::helpers;

/// Translate criteria to SQL with `?` placeholders.
pub fn translate(criteria: &Criteria) -> Result<sql::string::SQL, Error> {
    translate_with(criteria, sql::string::PlaceholderStyle::default())
}

/// Translate criteria to SQL with the given placeholder style.
pub fn translate_with(
    criteria: &Criteria,
    placeholders: sql::string::PlaceholderStyle,
) -> Result<sql::string::SQL, Error> {
    let select = translate_select(criteria)?;
    let query = sql::convert::select_to_sql(&select, placeholders);

    tracing::debug!("Generated SQL: {}", query.sql);
    Ok(query)
}

/// Translate criteria to a SQL AST.
pub fn translate_select(criteria: &Criteria) -> Result<sql::ast::Select, Error> {
    if criteria.select.trim().is_empty() {
        return Err(Error::MissingSelectList);
    }
    if criteria.from.trim().is_empty() {
        return Err(Error::MissingFrom);
    }

    let mut select = sql::helpers::simple_select(&criteria.select, &criteria.from);

    select.joins = criteria
        .joins
        .iter()
        .map(|join| sql::ast::Join(sql::ast::RawSql(join.clone())))
        .collect();

    if let Some(group_by) = criteria.group_by.as_ref().filter(|g| !g.is_empty()) {
        select.group_by = sql::ast::GroupBy {
            elements: vec![sql::ast::RawSql(group_by.clone())],
        };
    }

    select.limit = sql::ast::Limit {
        limit: Some(criteria.limit).filter(|limit| *limit > 0),
        offset: Some(criteria.offset).filter(|offset| *offset > 0),
    };

    if let Some(order) = criteria.sort_key() {
        select.order_by = sql::ast::OrderBy {
            elements: vec![sql::ast::OrderByElement {
                target: sql::helpers::make_column(criteria.mapped_field(&order.field)),
                direction: sql::ast::OrderByDirection(order.direction.clone()),
            }],
        };
    }

    select.where_ = sql::ast::Where(
        criteria
            .filters
            .iter()
            .filter_map(|filter| translate_filter(criteria, filter))
            .collect(),
    );

    Ok(select)
}

/// Translate a single filter to a predicate. Filters with an operator outside the supported
/// set produce nothing.
fn translate_filter(criteria: &Criteria, filter: &Filter) -> Option<sql::ast::Expression> {
    let Some(operator) = filter.supported_operator() else {
        tracing::debug!(
            "Skipping filter on '{}': unsupported operator '{}'",
            filter.field,
            filter.operator
        );
        return None;
    };

    let (field, value) = helpers::resolve_filter(criteria, filter);

    let value = if operator.is_pattern_match() {
        sql::ast::Value::String(format!("%{}%", helpers::pattern_text(&value)))
    } else {
        translate_json_value(value)
    };

    Some(sql::helpers::binary_operation(
        sql::helpers::make_column(field),
        operator.sql_operator(),
        sql::ast::Expression::Value(value),
    ))
}

/// Convert a hydrated value into a SQL value.
fn translate_json_value(value: serde_json::Value) -> sql::ast::Value {
    match value {
        serde_json::Value::Null => sql::ast::Value::Null,
        serde_json::Value::Bool(b) => sql::ast::Value::Bool(b),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(i) => sql::ast::Value::Int8(i),
            None => match num.as_f64() {
                Some(f) => sql::ast::Value::Float8(f),
                None => sql::ast::Value::JsonValue(serde_json::Value::Number(num)),
            },
        },
        serde_json::Value::String(s) => sql::ast::Value::String(s),
        other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
            sql::ast::Value::JsonValue(other)
        }
    }
}
