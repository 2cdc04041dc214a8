//! Configuration for the translator.

use std::collections::BTreeMap;

use query_engine_criteria::criteria::Criteria;
use query_engine_sql::sql;
use query_engine_translation::translation::document;

use crate::error::ConfigurationError;
use crate::version1::Collection;

/// The 'Configuration' type collects all the information necessary to translate requests at
/// runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which keeps the serialized format out of the translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub placeholders: sql::string::PlaceholderStyle,
    pub unsupported_operators: document::UnsupportedOperators,
    pub collections: BTreeMap<String, Collection>,
}

impl Configuration {
    /// Fill in the relational settings, field map and hydrators of `collection`.
    ///
    /// Field map entries of the collection take precedence over entries already in `criteria`.
    pub fn apply(
        &self,
        collection: &str,
        criteria: Criteria,
    ) -> Result<Criteria, ConfigurationError> {
        let settings = self
            .collections
            .get(collection)
            .ok_or_else(|| ConfigurationError::CollectionNotFound(collection.to_string()))?;

        let mut criteria = criteria
            .with_select(&settings.select)
            .with_from(&settings.from);

        criteria.joins.extend(settings.joins.iter().cloned());
        if let Some(group_by) = &settings.group_by {
            criteria = criteria.with_group_by(group_by);
        }
        for (field, mapped_to) in &settings.field_map {
            criteria = criteria.with_mapped_field(field, mapped_to);
        }
        for (field, hydrator) in &settings.hydrators {
            let hydrator = *hydrator;
            criteria = criteria.with_hydrator(field, move |raw| hydrator.hydrate(raw));
        }

        Ok(criteria)
    }
}
