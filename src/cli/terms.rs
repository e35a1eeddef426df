//! Default operators and the demo leaf-term parser used by the `sift` binary.
//!
//! The engine itself gives literals no meaning; this module is the CLI's
//! embedding side of that boundary. Terms target a single column:
//!
//! ```text
//! >5  >=5  <5  <=5    numeric comparison
//! 0..10               half-open numeric range
//! ~pat                regex match on the cell's string rendering
//! !term               negation of any term
//! =text / text        equality (numeric when the text parses as a number)
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::ast::{Operator, OperatorRegistry};
use crate::error::LeafError;
use crate::evaluator::LeafParser;
use crate::predicate::{self, CompareFilter, MatchFilter, Predicate, RangeFilter, Relation};
use crate::value::Value;

/// Registry with the stock logical operators: `&`/`&&` at precedence 1
/// building AND, `|`/`||` at precedence 0 building OR.
pub fn default_registry() -> OperatorRegistry {
    let mut registry = OperatorRegistry::new();
    registry.register(Operator::new("&", 1, |l, r| Ok(predicate::and(l, r))));
    registry.register(Operator::new("&&", 1, |l, r| Ok(predicate::and(l, r))));
    registry.register(Operator::new("|", 0, |l, r| Ok(predicate::or(l, r))));
    registry.register(Operator::new("||", 0, |l, r| Ok(predicate::or(l, r))));
    registry
}

/// Failure to parse a leaf term.
#[derive(Debug)]
pub struct TermError {
    term: String,
    message: String,
}

impl TermError {
    fn new(term: &str, message: impl Into<String>) -> Self {
        TermError {
            term: term.to_string(),
            message: message.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse term '{}': {}", self.term, self.message)
    }
}

impl std::error::Error for TermError {}

/// Demo leaf-term parser targeting one column.
#[derive(Debug, Clone, Copy)]
pub struct TermParser {
    column: usize,
}

impl TermParser {
    pub fn new(column: usize) -> Self {
        TermParser { column }
    }

    fn numeric(&self, term: &str, text: &str, relation: Relation) -> Result<Predicate, LeafError> {
        let reference = parse_number(text)
            .ok_or_else(|| TermError::new(term, format!("expected a number, got '{}'", text)))?;
        Ok(Arc::new(CompareFilter::new(relation, reference, self.column)))
    }
}

impl LeafParser for TermParser {
    fn parse(&self, literal: &str) -> Result<Predicate, LeafError> {
        if literal.is_empty() {
            return Err(Box::new(TermError::new(literal, "empty term")));
        }

        if let Some(rest) = literal.strip_prefix(">=") {
            self.numeric(literal, rest, Relation::GtEq)
        } else if let Some(rest) = literal.strip_prefix("<=") {
            self.numeric(literal, rest, Relation::LtEq)
        } else if let Some(rest) = literal.strip_prefix('>') {
            self.numeric(literal, rest, Relation::Gt)
        } else if let Some(rest) = literal.strip_prefix('<') {
            self.numeric(literal, rest, Relation::Lt)
        } else if let Some(rest) = literal.strip_prefix('!') {
            Ok(predicate::not(self.parse(rest)?))
        } else if let Some(pattern) = literal.strip_prefix('~') {
            let regex = Regex::new(pattern)
                .map_err(|e| TermError::new(literal, format!("invalid regex: {}", e)))?;
            Ok(Arc::new(MatchFilter::new(regex, self.column)))
        } else if let Some((lo, hi)) = split_range(literal) {
            Ok(Arc::new(RangeFilter::new(lo, hi, self.column)))
        } else {
            let text = literal.strip_prefix('=').unwrap_or(literal);
            let reference = match parse_number(text) {
                Some(number) => number,
                None => Value::String(text.to_string()),
            };
            Ok(Arc::new(CompareFilter::new(
                Relation::Eq,
                reference,
                self.column,
            )))
        }
    }
}

/// Parse `A..B` where both bounds are numbers.
fn split_range(term: &str) -> Option<(f64, f64)> {
    let (lo, hi) = term.split_once("..")?;
    let lo = lo.parse::<f64>().ok()?;
    let hi = hi.parse::<f64>().ok()?;
    Some((lo, hi))
}

/// Integer when possible, float otherwise.
fn parse_number(text: &str) -> Option<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::Integer(i));
    }
    text.parse::<f64>().ok().map(Value::Float)
}
