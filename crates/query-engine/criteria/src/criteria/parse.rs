//! Parse URL query parameters into [`Criteria`].
//!
//! Every key is either one of the reserved pagination keys, `limit` and `offset`, or has the
//! shape `<field>[<operator>]` (`^[a-z_]+\[[a-z]+\]$`):
//!
//! - `name[eq]=bob&name[eq]=alice` yields one filter per value;
//! - `order[desc]=created_at` sorts by `created_at`, the operator being the direction;
//! - `limit=10&offset=20` paginates. `limit[eq]=10` is accepted as well.
//!
//! Malformed pagination values become 0. Keys that do not fit the grammar fail the whole parse.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use url::Url;

use super::error::ParseError;
use super::{Criteria, Filter, Order};

/// Decoded query parameters. Keys keep the order of their first appearance, values the order
/// in which they were given.
pub type QueryParams = IndexMap<String, Vec<String>>;

const LIMIT_KEY: &str = "limit";
const OFFSET_KEY: &str = "offset";
const ORDER_FIELD: &str = "order";

static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z_]+)\[([a-z]+)\]$").expect("key pattern is valid"));

/// Group decoded key/value pairs by key.
pub fn query_params_from_pairs<I, K, V>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = QueryParams::new();
    for (key, value) in pairs {
        params.entry(key.into()).or_default().push(value.into());
    }
    params
}

/// Parse the query string of a URL.
pub fn from_url(url: &Url) -> Result<Criteria, ParseError> {
    from_query_params(&query_params_from_pairs(url.query_pairs()))
}

/// Parse a raw `application/x-www-form-urlencoded` query string, with or without the leading `?`.
pub fn from_query_str(query: &str) -> Result<Criteria, ParseError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    from_query_params(&query_params_from_pairs(url::form_urlencoded::parse(
        query.as_bytes(),
    )))
}

/// Like [`from_url`], but any error yields empty criteria.
pub fn must_from_url(url: &Url) -> Criteria {
    from_url(url).unwrap_or_else(fallback)
}

/// Like [`from_query_str`], but any error yields empty criteria.
pub fn must_from_query_str(query: &str) -> Criteria {
    from_query_str(query).unwrap_or_else(fallback)
}

fn fallback(err: ParseError) -> Criteria {
    tracing::debug!("Falling back to empty criteria: {:?}", err);
    Criteria::default()
}

/// Parse decoded query parameters.
pub fn from_query_params(params: &QueryParams) -> Result<Criteria, ParseError> {
    if params.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    let mut criteria = Criteria::default();

    for (key, values) in params {
        let (field, operator) = if key == LIMIT_KEY || key == OFFSET_KEY {
            (key.as_str(), "")
        } else {
            split_key(key)?
        };

        match field {
            LIMIT_KEY => criteria.limit = first_count(values),
            OFFSET_KEY => criteria.offset = first_count(values),
            ORDER_FIELD => {
                if let Some(sort_field) = values.first() {
                    criteria.order = Some(Order::new(sort_field.as_str(), operator));
                }
            }
            _ => criteria.filters.extend(
                values
                    .iter()
                    .map(|value| Filter::new(field, operator, value.as_str())),
            ),
        }
    }

    Ok(criteria)
}

/// Split `field[operator]` into its two parts.
fn split_key(key: &str) -> Result<(&str, &str), ParseError> {
    KEY_PATTERN
        .captures(key)
        .and_then(|captures| Some((captures.get(1)?.as_str(), captures.get(2)?.as_str())))
        .ok_or_else(|| ParseError::OperatorNotFound {
            key: key.to_string(),
        })
}

/// The first value as a count; anything that is not a non-negative integer counts as 0.
fn first_count(values: &[String]) -> u64 {
    values
        .first()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
