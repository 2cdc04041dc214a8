use query_engine_criteria::criteria::{self, Criteria};
use query_engine_translation::translation::{document, relational};

/// Parse a query string into criteria over the `users` table.
pub fn users(query: &str) -> Criteria {
    criteria::from_query_str(query)
        .unwrap()
        .with_select("id, name, email")
        .with_from("users")
}

/// Translate to SQL and render the statement followed by its parameters as JSON.
pub fn test_relational(criteria: &Criteria) -> String {
    let query = relational::translate(criteria).unwrap();
    format!(
        "{}\n\n{}",
        query.sql,
        serde_json::to_string(&query.params).unwrap()
    )
}

/// Translate to a document filter and render the filter followed by the options as JSON.
pub fn test_document(criteria: &Criteria) -> String {
    let (filter, options) = document::translate(criteria);
    format!(
        "{}\n\n{}",
        serde_json::to_string(&filter).unwrap(),
        serde_json::to_string(&options).unwrap()
    )
}
