//! # Sift filter language - lexical and operator model
//!
//! This module defines the small vocabulary the engine works with: the tokens
//! produced by the lexer and the operator records consulted by the compiler
//! and evaluator.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the tokenizer
//! - **[operators]** - Operator records and the registry that holds them
//!
//! ## Core Concepts
//!
//! An expression is a sequence of leaf terms joined by registered operators
//! and grouped with parentheses:
//!
//! ```text
//! >5 & <10
//! alice | bob
//! (>=18 & !banned) | admin
//! ```
//!
//! The engine never interprets leaf terms itself. Anything that is not a
//! parenthesis or a registered operator symbol lexes as an opaque literal and
//! is handed to the embedder's leaf-term parser at evaluation time, which
//! turns it into a row predicate for its target column.
//!
//! Operators are registered up front by the embedding application, each with
//! an integer precedence (lower binds looser) and a function combining two
//! predicates into one. All operators are left-associative.

pub mod operators;
pub mod tokens;

pub use operators::{Operator, OperatorFn, OperatorRegistry};
pub use tokens::{Token, TokenKind};
