//! An ordered filter document.
//!
//! Some drivers are sensitive to the order of the keys of a filter, and a filter may test the
//! same field more than once (`age > 18` and `age < 65`), so a filter is a list of entries
//! rather than a map. It serializes to a single JSON object with the entries in order,
//! duplicates included.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The condition a single field must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `{"$gt": 18}`
    Compare {
        operator: String,
        value: serde_json::Value,
    },
    /// `{"$regex": ".*bob.*", "$options": "i"}`
    Regex { pattern: String, options: String },
}

impl Condition {
    pub fn compare(operator: impl Into<String>, value: serde_json::Value) -> Self {
        Condition::Compare {
            operator: operator.into(),
            value,
        }
    }

    pub fn regex(pattern: impl Into<String>, options: impl Into<String>) -> Self {
        Condition::Regex {
            pattern: pattern.into(),
            options: options.into(),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Compare { operator, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(operator, value)?;
                map.end()
            }
            Condition::Regex { pattern, options } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("$regex", pattern)?;
                map.serialize_entry("$options", options)?;
                map.end()
            }
        }
    }
}

/// Field conditions, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    entries: Vec<(String, Condition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, condition: Condition) {
        self.entries.push((field.into(), condition));
    }

    /// Every condition on `field`, in order.
    pub fn conditions<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Condition> {
        self.entries
            .iter()
            .filter(move |(entry_field, _)| entry_field == field)
            .map(|(_, condition)| condition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, condition) in &self.entries {
            map.serialize_entry(field, condition)?;
        }
        map.end()
    }
}
