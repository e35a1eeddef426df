//! Stack evaluation of compiled RPN into a single predicate.
//!
//! The evaluator walks the RPN sequence once with an operand stack of
//! already-built predicates. Literals are resolved through the embedder's
//! [`LeafParser`]; operator tokens pop two operands and push the composite
//! built by the registry's combining function. Leaf results are never
//! cached, so identical literals are re-parsed on every evaluation even
//! though the RPN shape itself is compiled once.

use crate::ast::{OperatorRegistry, Token, TokenKind};
use crate::error::{ExpressionError, LeafError};
use crate::predicate::Predicate;

/// The external leaf-term parser.
///
/// Turns one literal token into a leaf predicate for the embedder's
/// configured column/context. Its grammar is entirely its own; the engine
/// only transports its failures, unchanged, out of `eval()`.
pub trait LeafParser {
    fn parse(&self, literal: &str) -> Result<Predicate, LeafError>;
}

impl<F> LeafParser for F
where
    F: Fn(&str) -> Result<Predicate, LeafError>,
{
    fn parse(&self, literal: &str) -> Result<Predicate, LeafError> {
        self(literal)
    }
}

/// Reduce an RPN token sequence to the single predicate it denotes.
///
/// Operator tokens receive their operands as `(left, right)` in source
/// order: the right operand is popped first. Stack underflow or a non-empty
/// final stack reports the operand/operator imbalance; parentheses cannot
/// occur in compiler-produced RPN and are reported as mismatched if a caller
/// hand-builds a sequence containing one.
pub fn evaluate(
    rpn: &[Token],
    registry: &OperatorRegistry,
    leaf_parser: &dyn LeafParser,
) -> Result<Predicate, ExpressionError> {
    let mut stack: Vec<Predicate> = Vec::new();

    for token in rpn {
        match &token.kind {
            TokenKind::Operator(symbol) => {
                let operator =
                    registry
                        .get(symbol)
                        .ok_or_else(|| ExpressionError::UnknownOperator {
                            symbol: symbol.clone(),
                            pos: token.pos,
                        })?;
                let right = stack.pop().ok_or(ExpressionError::MissingOperand)?;
                let left = stack.pop().ok_or(ExpressionError::MissingOperand)?;
                let combined = operator
                    .eval(left, right)
                    .map_err(ExpressionError::LeafParse)?;
                stack.push(combined);
            }
            TokenKind::Literal(text) => {
                let leaf = leaf_parser
                    .parse(text)
                    .map_err(ExpressionError::LeafParse)?;
                stack.push(leaf);
            }
            TokenKind::LParen | TokenKind::RParen => {
                return Err(ExpressionError::MismatchedParens { pos: token.pos });
            }
        }
    }

    let predicate = stack.pop().ok_or(ExpressionError::MissingOperand)?;
    if !stack.is_empty() {
        return Err(ExpressionError::MissingOperator { pos: None });
    }
    Ok(predicate)
}
