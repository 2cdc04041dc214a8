//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

// Expressions //

/// Refer to a column by the name it has in the database.
pub fn make_column(name: impl Into<String>) -> Expression {
    Expression::ColumnReference(ColumnReference(name.into()))
}

/// `<left> <operator> <right>`
pub fn binary_operation(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator: BinaryOperator(operator.to_string()),
        right: Box::new(right),
    }
}

// SELECTs //

/// Build a simple select with a select list and a source, and the rest empty.
pub fn simple_select(select_list: impl Into<String>, from: impl Into<String>) -> Select {
    Select {
        select_list: SelectList(RawSql(select_list.into())),
        from: Some(From(RawSql(from.into()))),
        joins: vec![],
        where_: empty_where(),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}
