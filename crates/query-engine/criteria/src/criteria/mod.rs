//! Type definitions of the criteria a request carries: which rows or documents it wants, in
//! which order, and how many of them.
//!
//! A [`Criteria`] is built once per request, either by the [`parse`] functions or directly by a
//! caller, and is then handed to the translators untouched. The parser only ever fills
//! `filters`, `order`, `limit` and `offset`; everything else is caller configuration.

pub mod error;
pub mod operators;
pub mod parse;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use error::ParseError;
pub use operators::Operator;
pub use parse::{
    from_query_params, from_query_str, from_url, must_from_query_str, must_from_url,
    query_params_from_pairs, QueryParams,
};

/// Logical field names mapped to the physical column or document key they are stored under.
/// Fields without an entry are used as they are.
pub type FieldMap = BTreeMap<String, String>;

/// A transform applied to the raw value of a filter before it is used in a query.
pub type Hydrator = Arc<dyn Fn(&str) -> serde_json::Value + Send + Sync>;

/// Hydrators keyed by logical field name.
#[derive(Clone, Default)]
pub struct Hydrators(BTreeMap<String, Hydrator>);

impl Hydrators {
    /// Register `hydrator` for `field`, replacing any previous one.
    pub fn insert<F>(&mut self, field: impl Into<String>, hydrator: F)
    where
        F: Fn(&str) -> serde_json::Value + Send + Sync + 'static,
    {
        self.0.insert(field.into(), Arc::new(hydrator));
    }

    pub fn get(&self, field: &str) -> Option<&Hydrator> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Hydrators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Two sets of hydrators are equal when they cover the same fields with the very same functions.
impl PartialEq for Hydrators {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((field, hydrator), (other_field, other_hydrator))| {
                    field == other_field && Arc::ptr_eq(hydrator, other_hydrator)
                })
    }
}

/// A single predicate as it was written in the request.
///
/// The operator is kept as the raw token so that the translators can decide what to do with
/// tokens outside of the supported [`Operator`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// The operator, if it is one we know how to translate.
    pub fn supported_operator(&self) -> Option<Operator> {
        Operator::from_token(&self.operator)
    }
}

/// The sort key of a request. `direction` is the raw token, e.g. `asc` or `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub field: String,
    pub direction: String,
}

impl Order {
    pub fn new(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: direction.into(),
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == "asc"
    }
}

/// The normalized query intent of one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Conjunctive predicates, in request order.
    pub filters: Vec<Filter>,
    /// Maximum number of results. 0 means unbounded.
    pub limit: u64,
    /// Number of results to skip. 0 means none.
    pub offset: u64,
    pub order: Option<Order>,
    /// Projection of the relational statement, e.g. `id, name`.
    pub select: String,
    /// Source of the relational statement, e.g. `users u`.
    pub from: String,
    /// Join clauses, rendered verbatim and in order.
    pub joins: Vec<String>,
    pub group_by: Option<String>,
    pub field_map: FieldMap,
    pub hydrators: Hydrators,
}

impl Criteria {
    #[must_use]
    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = select.into();
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: impl Into<String>) -> Self {
        self.joins.push(join.into());
        self
    }

    #[must_use]
    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Store the logical `field` under the physical name `mapped_to`.
    #[must_use]
    pub fn with_mapped_field(
        mut self,
        field: impl Into<String>,
        mapped_to: impl Into<String>,
    ) -> Self {
        self.field_map.insert(field.into(), mapped_to.into());
        self
    }

    #[must_use]
    pub fn with_hydrator<F>(mut self, field: impl Into<String>, hydrator: F) -> Self
    where
        F: Fn(&str) -> serde_json::Value + Send + Sync + 'static,
    {
        self.hydrators.insert(field, hydrator);
        self
    }

    /// The physical name of a logical field.
    pub fn mapped_field<'a>(&'a self, field: &'a str) -> &'a str {
        self.field_map.get(field).map_or(field, String::as_str)
    }

    /// The value a filter should be queried with: the result of the field's hydrator when one
    /// is registered, the raw string otherwise.
    pub fn hydrate(&self, filter: &Filter) -> serde_json::Value {
        match self.hydrators.get(&filter.field) {
            Some(hydrator) => hydrator(&filter.value),
            None => serde_json::Value::String(filter.value.clone()),
        }
    }

    /// The order, unless it is missing or has no field to sort by.
    pub fn sort_key(&self) -> Option<&Order> {
        self.order.as_ref().filter(|order| !order.field.is_empty())
    }

    /// Whether the request asked for anything at all.
    pub fn is_unconstrained(&self) -> bool {
        self.filters.is_empty() && self.sort_key().is_none() && self.limit == 0 && self.offset == 0
    }
}
