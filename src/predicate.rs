//! Row predicates: the leaf/combinator abstraction the engine produces.
//!
//! A [`Predicate`] decides boolean inclusion for one row at a time. Leaves
//! test a single cell; composites combine two existing predicates (built by
//! an operator's combining function, typically logical AND/OR). Predicates
//! are immutable once built and safe to share across rows and threads.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::value::Value;

/// Anything that can hand out cell values by column index.
///
/// This is the entire row boundary: the engine never sees the row's storage.
/// `None` and `Some(Value::Null)` both mean a null cell.
pub trait RowAccessor {
    fn value(&self, column: usize) -> Option<&Value>;
}

impl RowAccessor for [Value] {
    fn value(&self, column: usize) -> Option<&Value> {
        self.get(column)
    }
}

impl RowAccessor for Vec<Value> {
    fn value(&self, column: usize) -> Option<&Value> {
        self.as_slice().value(column)
    }
}

/// A boolean inclusion test over one row.
pub trait RowPredicate: Send + Sync + fmt::Debug {
    fn include(&self, row: &dyn RowAccessor) -> bool;
}

/// Shared, immutable predicate handle.
pub type Predicate = Arc<dyn RowPredicate>;

#[derive(Debug)]
struct AndFilter {
    left: Predicate,
    right: Predicate,
}

impl RowPredicate for AndFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        self.left.include(row) && self.right.include(row)
    }
}

#[derive(Debug)]
struct OrFilter {
    left: Predicate,
    right: Predicate,
}

impl RowPredicate for OrFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        self.left.include(row) || self.right.include(row)
    }
}

#[derive(Debug)]
struct NotFilter {
    inner: Predicate,
}

impl RowPredicate for NotFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        !self.inner.include(row)
    }
}

/// Composite: include iff both operands include
pub fn and(left: Predicate, right: Predicate) -> Predicate {
    Arc::new(AndFilter { left, right })
}

/// Composite: include iff either operand includes
pub fn or(left: Predicate, right: Predicate) -> Predicate {
    Arc::new(OrFilter { left, right })
}

/// Composite: invert an existing predicate
pub fn not(inner: Predicate) -> Predicate {
    Arc::new(NotFilter { inner })
}

/// Leaf predicate testing numeric inclusion in the half-open interval
/// `[min, max)` at one column.
///
/// Null cells are never included. Float cells compare as floats; integer
/// cells compare their (already truncated) integer value. Non-numeric cells
/// fall outside the contract and are excluded.
///
/// # Examples
///
/// ```
/// use sift_lang::{RangeFilter, RowPredicate, Value};
///
/// let adults = RangeFilter::new(18.0, 65.0, 0);
/// assert!(adults.include(&vec![Value::Integer(30)]));
/// assert!(!adults.include(&vec![Value::Float(65.0)]));
/// assert!(!adults.include(&vec![Value::Null]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    min: f64,
    max: f64,
    column: usize,
}

impl RangeFilter {
    pub fn new(min: f64, max: f64, column: usize) -> Self {
        RangeFilter { min, max, column }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl RowPredicate for RangeFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        match row.value(self.column) {
            Some(Value::Float(v)) => *v >= self.min && *v < self.max,
            Some(Value::Integer(n)) => {
                let v = *n as f64;
                v >= self.min && v < self.max
            }
            _ => false,
        }
    }
}

/// Ordering relation used by [`CompareFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Equal
    Eq,
    /// Not equal
    NotEq,
    /// Less than
    Lt,
    /// Less than or equal
    LtEq,
    /// Greater than
    Gt,
    /// Greater than or equal
    GtEq,
}

impl Relation {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Eq => ordering == Ordering::Equal,
            Relation::NotEq => ordering != Ordering::Equal,
            Relation::Lt => ordering == Ordering::Less,
            Relation::LtEq => ordering != Ordering::Greater,
            Relation::Gt => ordering == Ordering::Greater,
            Relation::GtEq => ordering != Ordering::Less,
        }
    }
}

/// Compare two cells of possibly mixed numeric type.
///
/// Integer/float mixes go through `Decimal` so that `3 == 3.0` and
/// `1 < 1.5` hold without float-representation surprises. Incomparable
/// pairs (nulls, mixed non-numeric types) yield `None`.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Float(b)) => {
            if let (Some(ad), Some(bd)) = (Decimal::from_i64(*a), Decimal::from_f64(*b)) {
                Some(ad.cmp(&bd))
            } else {
                (*a as f64).partial_cmp(b)
            }
        }
        (Value::Float(a), Value::Integer(b)) => {
            if let (Some(ad), Some(bd)) = (Decimal::from_f64(*a), Decimal::from_i64(*b)) {
                Some(ad.cmp(&bd))
            } else {
                a.partial_cmp(&(*b as f64))
            }
        }
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Leaf predicate comparing one column against a reference value.
///
/// Null and incomparable cells are never included, regardless of relation.
#[derive(Debug, Clone)]
pub struct CompareFilter {
    relation: Relation,
    reference: Value,
    column: usize,
}

impl CompareFilter {
    pub fn new(relation: Relation, reference: Value, column: usize) -> Self {
        CompareFilter {
            relation,
            reference,
            column,
        }
    }
}

impl RowPredicate for CompareFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        match row.value(self.column) {
            None | Some(Value::Null) => false,
            Some(cell) => match compare_values(cell, &self.reference) {
                Some(ordering) => self.relation.holds(ordering),
                None => false,
            },
        }
    }
}

/// Leaf predicate matching a column's string rendering against a regex.
///
/// Null cells never match.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    pattern: Regex,
    column: usize,
}

impl MatchFilter {
    pub fn new(pattern: Regex, column: usize) -> Self {
        MatchFilter { pattern, column }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl RowPredicate for MatchFilter {
    fn include(&self, row: &dyn RowAccessor) -> bool {
        match row.value(self.column) {
            None | Some(Value::Null) => false,
            Some(cell) => self.pattern.is_match(&cell.as_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_filter_half_open() {
        let filter = RangeFilter::new(0.0, 10.0, 0);
        assert!(filter.include(&vec![Value::Float(5.0)]));
        assert!(!filter.include(&vec![Value::Float(10.0)]));
        assert!(!filter.include(&vec![Value::Null]));
        assert!(filter.include(&vec![Value::Integer(7)]));
    }

    #[test]
    fn mixed_numeric_comparison_is_exact() {
        assert_eq!(
            compare_values(&Value::Integer(3), &Value::Float(3.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            compare_values(&Value::Float(1.5), &Value::Integer(1)),
            Some(Ordering::Greater)
        );
    }
}
