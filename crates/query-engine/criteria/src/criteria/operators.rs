//! The fixed set of filter operators and what they become in each target.

use std::fmt;

use enum_iterator::Sequence;

/// A filter operator with defined translation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive (document) or `LIKE` (relational) substring match.
    Contains,
}

impl Operator {
    /// Look up an operator by the token used in request keys, e.g. `gte` in `age[gte]`.
    pub fn from_token(token: &str) -> Option<Self> {
        enum_iterator::all::<Operator>().find(|operator| operator.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Contains => "contains",
        }
    }

    pub fn sql_operator(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Contains => "LIKE",
        }
    }

    pub fn document_operator(self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::Contains => "$regex",
        }
    }

    /// Pattern-match operators wrap their value in wildcards instead of comparing it.
    pub fn is_pattern_match(self) -> bool {
        matches!(self, Operator::Contains)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
