use std::collections::HashMap;
use std::fmt;

use crate::error::LeafError;
use crate::predicate::Predicate;

/// Signature of an operator's combining function.
///
/// Receives the already-built left and right operand predicates, in that
/// order, and returns the composite. A combining function may fail with a
/// leaf-parse error, which the evaluator propagates unchanged.
pub type OperatorFn =
    dyn Fn(Predicate, Predicate) -> Result<Predicate, LeafError> + Send + Sync;

/// A binary operator: symbol, precedence, and combining function.
///
/// Lower precedence numbers bind looser. All operators are left-associative;
/// there is no per-operator associativity flag (see the compiler's pop
/// condition).
///
/// # Examples
///
/// ```
/// use sift_lang::{Operator, predicate};
///
/// let and = Operator::new("&", 1, |left, right| Ok(predicate::and(left, right)));
/// assert_eq!(and.symbol(), "&");
/// assert_eq!(and.precedence(), 1);
/// ```
pub struct Operator {
    symbol: String,
    precedence: u32,
    eval: Box<OperatorFn>,
}

impl Operator {
    pub fn new<F>(symbol: impl Into<String>, precedence: u32, eval: F) -> Self
    where
        F: Fn(Predicate, Predicate) -> Result<Predicate, LeafError> + Send + Sync + 'static,
    {
        Operator {
            symbol: symbol.into(),
            precedence,
            eval: Box::new(eval),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn precedence(&self) -> u32 {
        self.precedence
    }

    /// Combine two operand predicates into the composite for this operator
    pub fn eval(&self, left: Predicate, right: Predicate) -> Result<Predicate, LeafError> {
        (self.eval)(left, right)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .finish_non_exhaustive()
    }
}

/// All operators known to the engine, keyed by symbol.
///
/// Owned by the embedding application and passed by reference into tokenizer,
/// compiler, and evaluator calls; one registry is expected to serve many
/// expressions. Populate it before compiling anything and treat it as
/// read-only afterward.
#[derive(Debug, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, Operator>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        OperatorRegistry::default()
    }

    /// Register an operator, returning any operator previously registered
    /// under the same symbol.
    pub fn register(&mut self, operator: Operator) -> Option<Operator> {
        self.operators
            .insert(operator.symbol().to_string(), operator)
    }

    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }
}
