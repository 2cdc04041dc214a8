mod common;

use query_engine_criteria::criteria::{self, Criteria};
use query_engine_document::document as doc;
use query_engine_sql::sql;
use query_engine_translation::translation::{document, error::Error, relational};
use serde_json::json;

fn integer(raw: &str) -> serde_json::Value {
    raw.parse::<i64>().map_or_else(|_| json!(raw), |n| json!(n))
}

mod relational_path {
    use super::*;

    #[test]
    fn simple_filters() {
        let criteria = common::users("name[eq]=bob&age[gt]=18");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE name = ? AND age > ?

        ["bob","18"]
        "#);
    }

    #[test]
    fn contains_becomes_like_with_wildcards() {
        let criteria = common::users("email[contains]=bob");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE email LIKE ?

        ["%bob%"]
        "#);
    }

    #[test]
    fn contains_wraps_the_hydrated_value() {
        let criteria = common::users("age[contains]=4").with_hydrator("age", integer);
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE age LIKE ?

        ["%4%"]
        "#);
    }

    #[test]
    fn every_supported_operator() {
        let criteria =
            common::users("a[eq]=1&b[gt]=2&c[gte]=3&d[lt]=4&e[lte]=5&f[contains]=6");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE a = ? AND b > ? AND c >= ? AND d < ? AND e <= ? AND f LIKE ?

        ["1","2","3","4","5","%6%"]
        "#);
    }

    #[test]
    fn mapped_fields_and_hydrators() {
        let criteria = common::users("team[eq]=core&age[gte]=21")
            .with_join("LEFT JOIN teams t ON t.id = users.team_id")
            .with_mapped_field("team", "t.name")
            .with_mapped_field("age", "users.age_years")
            .with_hydrator("age", integer);
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users LEFT JOIN teams t ON t.id = users.team_id WHERE t.name = ? AND users.age_years >= ?

        ["core",21]
        "#);
    }

    #[test]
    fn hydrators_may_return_any_json_value() {
        let criteria = common::users("active[eq]=yes&score[lt]=1.5&deleted[eq]=x")
            .with_hydrator("active", |raw| json!(raw == "yes"))
            .with_hydrator("score", |raw| json!(raw.parse::<f64>().unwrap_or_default()))
            .with_hydrator("deleted", |_| serde_json::Value::Null);
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE active = ? AND score < ? AND deleted = ?

        [true,1.5,null]
        "#);
    }

    #[test]
    fn unsupported_operators_are_omitted() {
        let criteria = common::users("name[eq]=bob&age[ne]=3");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE name = ?

        ["bob"]
        "#);
    }

    #[test]
    fn zero_limit_and_offset_are_omitted() {
        let criteria = common::users("limit=0&offset=0&name[eq]=bob");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users WHERE name = ?

        ["bob"]
        "#);
    }

    #[test]
    fn limit_and_offset() {
        let criteria = common::users("limit=10&offset=5");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users LIMIT 10 OFFSET 5

        []
        "#);
    }

    #[test]
    fn order_direction_is_used_verbatim() {
        let criteria = common::users("order[sideways]=name");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users ORDER BY name sideways

        []
        "#);
    }

    #[test]
    fn order_field_is_mapped() {
        let criteria =
            common::users("order[desc]=name").with_mapped_field("name", "users.full_name");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users ORDER BY users.full_name desc

        []
        "#);
    }

    #[test]
    fn clauses_come_in_statement_order() {
        let criteria = common::users("age[gt]=18&order[asc]=team&limit=5&offset=10")
            .with_select("team, count(*)")
            .with_group_by("team");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT team, count(*) FROM users WHERE age > ? GROUP BY team ORDER BY team asc LIMIT 5 OFFSET 10

        ["18"]
        "#);
    }

    #[test]
    fn empty_group_by_is_omitted() {
        let criteria = common::users("limit=1").with_group_by("");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT id, name, email FROM users LIMIT 1

        []
        "#);
    }

    #[test]
    fn empty_criteria_select_everything() {
        let criteria = criteria::must_from_query_str("")
            .with_select("*")
            .with_from("users");
        insta::assert_snapshot!(common::test_relational(&criteria), @r#"
        SELECT * FROM users

        []
        "#);
    }

    #[test]
    fn dollar_placeholders() {
        let criteria = common::users("name[eq]=bob&email[contains]=example");
        let query =
            relational::translate_with(&criteria, sql::string::PlaceholderStyle::Dollar).unwrap();
        insta::assert_snapshot!(query.sql, @"SELECT id, name, email FROM users WHERE name = $1 AND email LIKE $2");
    }

    #[test]
    fn missing_select_list_is_an_error() {
        let criteria = criteria::from_query_str("name[eq]=bob")
            .unwrap()
            .with_select("  ")
            .with_from("users");
        assert_eq!(relational::translate(&criteria), Err(Error::MissingSelectList));
    }

    #[test]
    fn missing_from_is_an_error() {
        let criteria = criteria::from_query_str("name[eq]=bob")
            .unwrap()
            .with_select("id");
        assert_eq!(relational::translate(&criteria), Err(Error::MissingFrom));
    }
}

mod document_path {
    use super::*;

    #[test]
    fn simple_filters() {
        let criteria = common::users("name[eq]=bob&age[gt]=18");
        insta::assert_snapshot!(common::test_document(&criteria), @r#"
        {"name":{"$eq":"bob"},"age":{"$gt":"18"}}

        {}
        "#);
    }

    #[test]
    fn contains_becomes_a_case_insensitive_regex() {
        let criteria = common::users("email[contains]=bob");
        insta::assert_snapshot!(common::test_document(&criteria), @r#"
        {"email":{"$regex":".*bob.*","$options":"i"}}

        {}
        "#);
    }

    #[test]
    fn mapped_fields_and_hydrators() {
        let criteria = common::users("team[eq]=core&age[gte]=21&age[lt]=65")
            .with_mapped_field("team", "team.name")
            .with_hydrator("age", integer);
        insta::assert_snapshot!(common::test_document(&criteria), @r#"
        {"team.name":{"$eq":"core"},"age":{"$gte":21},"age":{"$lt":65}}

        {}
        "#);
    }

    #[test]
    fn unsupported_operators_pass_through() {
        let criteria = common::users("name[eq]=bob&age[ne]=3");
        insta::assert_snapshot!(common::test_document(&criteria), @r#"
        {"name":{"$eq":"bob"},"age":{"$ne":"3"}}

        {}
        "#);
    }

    #[test]
    fn unsupported_operators_can_be_omitted() {
        let criteria = common::users("name[eq]=bob&age[ne]=3");
        let (filter, _) = document::translate_with(&criteria, document::UnsupportedOperators::Omit);

        let mut expected = doc::Filter::new();
        expected.push("name", doc::Condition::compare("$eq", json!("bob")));
        similar_asserts::assert_eq!(filter, expected);
    }

    #[test]
    fn sort_is_binary() {
        let ascending = document::translate_options(&common::users("order[asc]=age"));
        assert_eq!(
            ascending.sort,
            Some(doc::Sort {
                field: "age".to_string(),
                direction: doc::SortDirection::Ascending,
            })
        );

        for direction in ["desc", "sideways", "ascending"] {
            let options =
                document::translate_options(&common::users(&format!("order[{direction}]=age")));
            assert_eq!(
                options.sort.map(|sort| sort.direction),
                Some(doc::SortDirection::Descending)
            );
        }
    }

    #[test]
    fn sort_field_is_not_mapped() {
        let criteria = common::users("order[asc]=name&name[eq]=bob&limit=10&offset=5")
            .with_mapped_field("name", "profile.name");
        insta::assert_snapshot!(common::test_document(&criteria), @r#"
        {"profile.name":{"$eq":"bob"}}

        {"sort":{"name":1},"limit":10,"skip":5}
        "#);
    }

    #[test]
    fn zero_limit_and_offset_set_no_options() {
        let (_, options) = document::translate(&common::users("limit=0&offset=0"));
        assert_eq!(options, doc::FindOptions::default());
    }

    #[test]
    fn relational_settings_are_ignored() {
        let criteria = Criteria::default()
            .with_join("JOIN x ON true")
            .with_group_by("team");
        let (filter, options) = document::translate(&criteria);
        assert!(filter.is_empty());
        assert_eq!(options, doc::FindOptions::default());
    }
}

/// An operator outside the supported set is dropped from the relational statement but kept
/// as `$<operator>` in the document filter.
#[test]
fn unsupported_operator_asymmetry() {
    let criteria = common::users("status[in]=active&name[eq]=bob");

    let query = relational::translate(&criteria).unwrap();
    assert!(!query.sql.contains("status"));
    assert_eq!(
        query.params,
        vec![sql::string::Param::String("bob".to_string())]
    );

    let (filter, _) = document::translate(&criteria);
    similar_asserts::assert_eq!(
        filter.conditions("status").cloned().collect::<Vec<_>>(),
        vec![doc::Condition::compare("$in", json!("active"))]
    );
}

#[test]
fn translation_is_pure() {
    let criteria = common::users("name[eq]=bob&order[asc]=name&limit=3")
        .with_hydrator("name", |raw| json!(raw.to_uppercase()));
    assert_eq!(
        relational::translate(&criteria),
        relational::translate(&criteria)
    );
    assert_eq!(document::translate(&criteria), document::translate(&criteria));
    assert_eq!(
        relational::translate(&criteria).unwrap().params,
        vec![sql::string::Param::String("BOB".to_string())]
    );
}
