//! Type definitions of a SQL AST representation.

/// Raw SQL written by a user which is opaque to us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(pub String);

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: Option<From>,
    pub joins: Vec<Join>,
    pub where_: Where,
    pub group_by: GroupBy,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// A select list, e.g. `u.id, u.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList(pub RawSql);

/// A FROM clause, e.g. `users u`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct From(pub RawSql);

/// A complete JOIN clause, e.g. `LEFT JOIN teams t ON t.id = u.team_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join(pub RawSql);

/// A WHERE clause. The expressions are combined with AND; an empty list means no WHERE.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Vec<Expression>);

/// A GROUP BY clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    pub elements: Vec<RawSql>,
}

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element, rendered as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByDirection(pub String);

/// LIMIT and OFFSET clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A binary operation on two scalar expression
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A column reference
    ColumnReference(ColumnReference),
    /// An irreducible value
    Value(Value),
}

/// Represents the name of a binary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperator(pub String);

/// A reference to a column, possibly qualified (`t.name`). Rendered as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference(pub String);

/// Value. Every value is sent as a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int8(i64),
    Float8(f64),
    Bool(bool),
    String(String),
    Null,
    JsonValue(serde_json::Value),
}
