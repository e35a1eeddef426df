//! A compiled filter expression: source text plus its cached RPN.

use crate::ast::{OperatorRegistry, Token};
use crate::compiler;
use crate::error::ExpressionError;
use crate::evaluator::{self, LeafParser};
use crate::lexer::Tokenizer;
use crate::predicate::Predicate;

/// An infix expression compiled against an operator registry.
///
/// Compilation is eager: the RPN is computed once in [`Expression::compile`]
/// and never changes afterward, so a compiled expression can be evaluated
/// many times (and from many threads) without re-parsing. The registry is
/// not owned here; the same registry object is expected to serve compilation
/// and every later evaluation. Registering different operators between the
/// two will surface as an unknown-operator error at evaluation time.
///
/// # Examples
///
/// ```
/// use sift_lang::{Expression, Operator, OperatorRegistry, RowPredicate, Value};
/// use sift_lang::predicate::{self, CompareFilter, Relation};
/// use std::sync::Arc;
///
/// let mut registry = OperatorRegistry::new();
/// registry.register(Operator::new("&", 1, |l, r| Ok(predicate::and(l, r))));
///
/// let expression = Expression::compile("a & b", &registry).unwrap();
/// let parser = |literal: &str| -> Result<sift_lang::Predicate, sift_lang::LeafError> {
///     Ok(Arc::new(CompareFilter::new(
///         Relation::Eq,
///         Value::String(literal.to_string()),
///         0,
///     )))
/// };
/// let predicate = expression.eval(&registry, &parser).unwrap();
/// assert!(!predicate.include(&vec![Value::String("a".to_string())]));
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    rpn: Vec<Token>,
}

impl Expression {
    /// Tokenize and compile `text`, trimming it first.
    ///
    /// All lexical and syntactic errors are reported here; a successfully
    /// compiled expression can only fail later through its operands.
    pub fn compile(text: &str, registry: &OperatorRegistry) -> Result<Self, ExpressionError> {
        let source = text.trim().to_string();
        let rpn = compiler::compile(Tokenizer::new(&source, registry), registry)?;
        Ok(Expression { source, rpn })
    }

    /// The trimmed source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The cached RPN token sequence.
    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }

    /// A fresh tokenizer over the raw (non-RPN) token stream, for
    /// diagnostics.
    pub fn tokens<'a>(&'a self, registry: &'a OperatorRegistry) -> Tokenizer<'a> {
        Tokenizer::new(&self.source, registry)
    }

    /// Build the predicate this expression denotes.
    ///
    /// Literals are resolved through `leaf_parser` on every call; only the
    /// RPN shape is cached. Leaf-parse failures propagate unchanged as
    /// [`ExpressionError::LeafParse`].
    pub fn eval(
        &self,
        registry: &OperatorRegistry,
        leaf_parser: &dyn LeafParser,
    ) -> Result<Predicate, ExpressionError> {
        evaluator::evaluate(&self.rpn, registry, leaf_parser)
    }
}
