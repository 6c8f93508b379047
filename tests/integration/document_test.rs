//! Integration tests for aggregation rendering of range filters.

mod helpers;

use serde_json::json;

fn pipeline(query: &str) -> serde_json::Value {
    helpers::aggregate(&helpers::dummy_filter(), query).0.pipeline()
}

#[test]
fn test_between() {
    assert_eq!(
        pipeline("range[dummyPrice][between]=10..20"),
        json!([{ "$match": { "dummyPrice": { "$gte": 10, "$lte": 20 } } }])
    );
}

#[test]
fn test_between_same_values() {
    assert_eq!(
        pipeline("range[dummyPrice][between]=15..15"),
        json!([{ "$match": { "dummyPrice": 15 } }])
    );
}

#[test]
fn test_between_too_many_operands() {
    assert_eq!(pipeline("range[dummyPrice][between]=20..10..5"), json!([]));
}

#[test]
fn test_gte_and_lte() {
    assert_eq!(
        pipeline("range[dummyPrice][gte]=10&range[dummyPrice][lte]=20"),
        json!([
            { "$match": { "dummyPrice": { "$gte": 10 } } },
            { "$match": { "dummyPrice": { "$lte": 20 } } },
        ])
    );
}

#[test]
fn test_comparisons_with_floats() {
    assert_eq!(
        pipeline("range[dummyFloat][gt]=0.5&range[dummyFloat][lt]=1e1"),
        json!([
            { "$match": { "dummyFloat": { "$gt": 0.5 } } },
            { "$match": { "dummyFloat": { "$lt": 10.0 } } },
        ])
    );
}

#[test]
fn test_non_numeric_values_skipped() {
    assert_eq!(
        pipeline("range[dummyPrice][gt]=abc&range[dummyPrice][lte]=9"),
        json!([{ "$match": { "dummyPrice": { "$lte": 9 } } }])
    );
}

#[test]
fn test_nested_property_adds_lookup() {
    let filter = helpers::dummy_filter_with(&["relatedDummy.age"]);
    let (aggregation, outcome) = helpers::aggregate(&filter, "range[relatedDummy.age][lt]=30");

    assert_eq!(outcome.predicates, 1);
    assert_eq!(
        aggregation.pipeline(),
        json!([
            { "$lookup": {
                "from": "RelatedDummy",
                "localField": "relatedDummy",
                "foreignField": "_id",
                "as": "relatedDummy_lkup",
            } },
            { "$unwind": "$relatedDummy_lkup" },
            { "$match": { "relatedDummy_lkup.age": { "$lt": 30 } } },
        ])
    );
}

#[test]
fn test_deprecated_syntax() {
    let (aggregation, outcome) = helpers::aggregate(&helpers::dummy_filter(), "range[dummyPrice]=42");

    assert!(outcome.deprecated_syntax);
    assert_eq!(
        aggregation.pipeline(),
        json!([{ "$match": { "dummyPrice": 42 } }])
    );
}
