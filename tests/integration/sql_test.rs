//! Integration tests for SQL rendering of range filters.

mod helpers;

use rangefilter_core::types::RangeNumber;

const EMPTY: &str = "SELECT o FROM Dummy o";

fn dql(query: &str) -> String {
    helpers::sql(&helpers::dummy_filter(), query).0.dql()
}

#[test]
fn test_between() {
    assert_eq!(
        dql("range[dummyPrice][between]=9.99..15.99"),
        "SELECT o FROM Dummy o WHERE o.dummyPrice BETWEEN :dummyPrice_p1_1 AND :dummyPrice_p1_2"
    );
}

#[test]
fn test_between_same_values() {
    assert_eq!(
        dql("range[dummyPrice][between]=9.99..9.99"),
        "SELECT o FROM Dummy o WHERE o.dummyPrice = :dummyPrice_p1"
    );
}

#[test]
fn test_between_malformed_values() {
    for value in ["9.99..15.99..99.99", "15.99..", "..15.99", "abc..def", ""] {
        assert_eq!(
            dql(&format!("range[dummyPrice][between]={value}")),
            EMPTY,
            "{value:?}"
        );
    }
}

#[test]
fn test_single_comparisons() {
    let cases = [
        ("lt", "<"),
        ("lte", "<="),
        ("gt", ">"),
        ("gte", ">="),
    ];
    for (op, sql_op) in cases {
        assert_eq!(
            dql(&format!("range[dummyPrice][{op}]=9.99")),
            format!("SELECT o FROM Dummy o WHERE o.dummyPrice {sql_op} :dummyPrice_p1")
        );
        assert_eq!(dql(&format!("range[dummyPrice][{op}]=127.0.0.1")), EMPTY);
    }
}

#[test]
fn test_lte_and_gte() {
    let (query, outcome) = helpers::sql(
        &helpers::dummy_filter(),
        "range[dummyPrice][gte]=9.99&range[dummyPrice][lte]=19.99",
    );

    assert_eq!(
        query.dql(),
        "SELECT o FROM Dummy o WHERE o.dummyPrice >= :dummyPrice_p1 AND o.dummyPrice <= :dummyPrice_p2"
    );
    assert_eq!(outcome.predicates, 2);
    assert_eq!(
        query.parameters().get("dummyPrice_p1"),
        Some(&RangeNumber::Float(9.99))
    );
    assert_eq!(
        query.parameters().get("dummyPrice_p2"),
        Some(&RangeNumber::Float(19.99))
    );
}

#[test]
fn test_parameters_never_collide_across_properties() {
    let (query, _) = helpers::sql(
        &helpers::dummy_filter(),
        "range[dummyPrice][gt]=1&range[dummyFloat][gt]=1&range[dummyPrice][lt]=5",
    );

    let names: Vec<_> = query.parameters().keys().cloned().collect();
    assert_eq!(names, vec!["dummyPrice_p1", "dummyPrice_p2", "dummyFloat_p3"]);
    assert_eq!(
        query.to_query_builder().sql(),
        "SELECT o.* FROM Dummy o WHERE o.dummyPrice > $1 AND o.dummyPrice < $2 AND o.dummyFloat > $3"
    );
}

#[test]
fn test_unknown_operator_keeps_siblings() {
    assert_eq!(
        dql("range[dummyPrice][ne]=3&range[dummyPrice][gt]=1"),
        "SELECT o FROM Dummy o WHERE o.dummyPrice > :dummyPrice_p1"
    );
}

#[test]
fn test_unmapped_property_ignored() {
    assert_eq!(dql("range[unknown][gt]=1"), EMPTY);
}

#[test]
fn test_nested_property_requires_explicit_enable() {
    assert_eq!(dql("range[relatedDummy.age][gt]=18"), EMPTY);

    let filter = helpers::dummy_filter_with(&["relatedDummy.age", "relatedDummy.thirdLevel.level"]);
    let (query, _) = helpers::sql(
        &filter,
        "range[relatedDummy.age][gt]=18&range[relatedDummy.thirdLevel.level][lte]=3",
    );

    assert_eq!(
        query.dql(),
        "SELECT o FROM Dummy o \
         LEFT JOIN o.relatedDummy relatedDummy_a1 \
         LEFT JOIN relatedDummy_a1.thirdLevel thirdLevel_a2 \
         WHERE relatedDummy_a1.age > :relatedDummy_age_p1 \
         AND thirdLevel_a2.level <= :relatedDummy_thirdLevel_level_p2"
    );
}

#[test]
fn test_deprecated_syntax() {
    let (query, outcome) = helpers::sql(&helpers::dummy_filter(), "range[dummyPrice]=42");

    assert!(outcome.deprecated_syntax);
    assert_eq!(
        query.dql(),
        "SELECT o FROM Dummy o WHERE o.dummyPrice = :dummyPrice_p1"
    );
    assert_eq!(
        query.parameters().get("dummyPrice_p1"),
        Some(&RangeNumber::Integer(42))
    );
}
