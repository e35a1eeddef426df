pub mod ast;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod predicate;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Operator, OperatorFn, OperatorRegistry, Token, TokenKind};
pub use error::{ErrorKind, ExpressionError, LeafError};
pub use evaluator::{LeafParser, evaluate};
pub use expression::Expression;
pub use lexer::Tokenizer;
pub use predicate::{Predicate, RangeFilter, RowAccessor, RowPredicate};
pub use value::Value;
