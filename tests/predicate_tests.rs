// tests/predicate_tests.rs

use std::sync::Arc;

use regex::Regex;
use sift_lang::predicate::{
    self, CompareFilter, MatchFilter, Predicate, RangeFilter, Relation, RowAccessor, compare_values,
};
use sift_lang::{RowPredicate, Value};

fn row(values: Vec<Value>) -> Vec<Value> {
    values
}

// ============================================================================
// RangeFilter
// ============================================================================

#[test]
fn test_range_is_half_open() {
    let filter = RangeFilter::new(0.0, 10.0, 0);
    assert!(filter.include(&row(vec![Value::Float(5.0)])));
    assert!(filter.include(&row(vec![Value::Float(0.0)])));
    assert!(!filter.include(&row(vec![Value::Float(10.0)])));
}

#[test]
fn test_range_excludes_null() {
    let filter = RangeFilter::new(0.0, 10.0, 0);
    assert!(!filter.include(&row(vec![Value::Null])));
}

#[test]
fn test_range_includes_integers() {
    let filter = RangeFilter::new(0.0, 10.0, 0);
    assert!(filter.include(&row(vec![Value::Integer(7)])));
    assert!(!filter.include(&row(vec![Value::Integer(10)])));
    assert!(!filter.include(&row(vec![Value::Integer(-1)])));
}

#[test]
fn test_range_reads_its_configured_column() {
    let filter = RangeFilter::new(0.0, 10.0, 2);
    assert!(filter.include(&row(vec![
        Value::Integer(99),
        Value::Null,
        Value::Integer(3),
    ])));
}

#[test]
fn test_range_excludes_missing_and_non_numeric_cells() {
    let filter = RangeFilter::new(0.0, 10.0, 5);
    assert!(!filter.include(&row(vec![Value::Integer(5)])));

    let filter = RangeFilter::new(0.0, 10.0, 0);
    assert!(!filter.include(&row(vec![Value::String("5".to_string())])));
    assert!(!filter.include(&row(vec![Value::Boolean(true)])));
}

#[test]
fn test_range_filter_is_reusable_across_rows() {
    let filter = RangeFilter::new(0.0, 10.0, 0);
    let rows = [
        row(vec![Value::Integer(1)]),
        row(vec![Value::Integer(11)]),
        row(vec![Value::Float(9.99)]),
    ];
    let included: Vec<bool> = rows.iter().map(|r| filter.include(r)).collect();
    assert_eq!(included, vec![true, false, true]);
}

// ============================================================================
// Combinators
// ============================================================================

fn leaf(relation: Relation, reference: Value) -> Predicate {
    Arc::new(CompareFilter::new(relation, reference, 0))
}

#[test]
fn test_and_or_not() {
    let ge2 = leaf(Relation::GtEq, Value::Integer(2));
    let lt5 = leaf(Relation::Lt, Value::Integer(5));

    let between = predicate::and(ge2.clone(), lt5.clone());
    assert!(between.include(&row(vec![Value::Integer(3)])));
    assert!(!between.include(&row(vec![Value::Integer(7)])));

    let outside = predicate::not(predicate::and(ge2, lt5));
    assert!(outside.include(&row(vec![Value::Integer(7)])));

    let either = predicate::or(
        leaf(Relation::Eq, Value::Integer(1)),
        leaf(Relation::Eq, Value::Integer(9)),
    );
    assert!(either.include(&row(vec![Value::Integer(9)])));
    assert!(!either.include(&row(vec![Value::Integer(5)])));
}

#[test]
fn test_composed_predicates_are_debuggable() {
    // Composites must render with {:?} like the built-in leaves do, so a
    // Result holding a predicate works with the usual unwrap_err assertions.
    let composed = predicate::or(
        predicate::and(
            leaf(Relation::GtEq, Value::Integer(2)),
            leaf(Relation::Lt, Value::Integer(5)),
        ),
        predicate::not(leaf(Relation::Eq, Value::Null)),
    );
    let rendered = format!("{:?}", composed);
    assert!(rendered.contains("OrFilter"));
    assert!(rendered.contains("AndFilter"));
    assert!(rendered.contains("NotFilter"));

    // unwrap_err needs Debug on the Ok side
    let result: Result<Predicate, String> = Err("no predicate".to_string());
    assert_eq!(result.unwrap_err(), "no predicate");
}

#[test]
fn test_predicates_are_shareable() {
    let shared = leaf(Relation::Gt, Value::Integer(0));
    let left = predicate::and(shared.clone(), shared.clone());
    assert!(left.include(&row(vec![Value::Integer(1)])));
}

// ============================================================================
// CompareFilter
// ============================================================================

#[test]
fn test_compare_mixed_integer_and_float() {
    use std::cmp::Ordering;

    assert_eq!(
        compare_values(&Value::Integer(3), &Value::Float(3.0)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        compare_values(&Value::Float(2.5), &Value::Integer(3)),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare_values(&Value::Integer(3), &Value::Float(2.5)),
        Some(Ordering::Greater)
    );
}

#[test]
fn test_compare_incomparable_pairs() {
    assert_eq!(compare_values(&Value::Null, &Value::Integer(1)), None);
    assert_eq!(
        compare_values(&Value::String("3".to_string()), &Value::Integer(3)),
        None
    );
}

#[test]
fn test_compare_filter_excludes_null_for_every_relation() {
    for relation in [
        Relation::Eq,
        Relation::NotEq,
        Relation::Lt,
        Relation::LtEq,
        Relation::Gt,
        Relation::GtEq,
    ] {
        let filter = CompareFilter::new(relation, Value::Integer(0), 0);
        assert!(
            !filter.include(&row(vec![Value::Null])),
            "null must not satisfy {relation:?}"
        );
    }
}

#[test]
fn test_compare_filter_strings() {
    let eq = CompareFilter::new(Relation::Eq, Value::String("alice".to_string()), 0);
    assert!(eq.include(&row(vec![Value::String("alice".to_string())])));
    assert!(!eq.include(&row(vec![Value::String("bob".to_string())])));

    let lt = CompareFilter::new(Relation::Lt, Value::String("m".to_string()), 0);
    assert!(lt.include(&row(vec![Value::String("alice".to_string())])));
    assert!(!lt.include(&row(vec![Value::String("zed".to_string())])));
}

#[test]
fn test_compare_filter_integer_float_equality_on_rows() {
    let filter = CompareFilter::new(Relation::Eq, Value::Float(3.0), 0);
    assert!(filter.include(&row(vec![Value::Integer(3)])));
}

// ============================================================================
// MatchFilter
// ============================================================================

#[test]
fn test_match_filter_on_strings() {
    let filter = MatchFilter::new(Regex::new("^a.*e$").unwrap(), 0);
    assert!(filter.include(&row(vec![Value::String("alice".to_string())])));
    assert!(!filter.include(&row(vec![Value::String("bob".to_string())])));
}

#[test]
fn test_match_filter_uses_string_rendering_of_numbers() {
    let filter = MatchFilter::new(Regex::new("^42$").unwrap(), 0);
    assert!(filter.include(&row(vec![Value::Integer(42)])));
    assert!(!filter.include(&row(vec![Value::Integer(421)])));
}

#[test]
fn test_match_filter_excludes_null() {
    let filter = MatchFilter::new(Regex::new(".*").unwrap(), 0);
    assert!(!filter.include(&row(vec![Value::Null])));
}

// ============================================================================
// RowAccessor
// ============================================================================

#[test]
fn test_slice_rows_hand_out_cells_by_index() {
    let cells = vec![Value::Integer(1), Value::String("x".to_string())];
    assert_eq!(cells.value(0), Some(&Value::Integer(1)));
    assert_eq!(cells.value(1), Some(&Value::String("x".to_string())));
    assert_eq!(cells.value(2), None);
}
