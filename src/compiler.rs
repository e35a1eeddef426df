//! Shunting-yard compilation of infix token streams into RPN.
//!
//! [`compile`] is a pure function of the token stream and the operator
//! registry; the only state is its internal working stack. All syntax errors
//! are detected here, before any predicate is built.

use crate::ast::{OperatorRegistry, Token, TokenKind};
use crate::error::ExpressionError;

/// Precedence of a stacked token, if it is a registered operator
fn stacked_precedence(token: Option<&Token>, registry: &OperatorRegistry) -> Option<u32> {
    match token {
        Some(Token {
            kind: TokenKind::Operator(symbol),
            ..
        }) => registry.get(symbol).map(|op| op.precedence()),
        _ => None,
    }
}

/// True if a `(` directly after this token would be juxtaposition: a literal
/// starting with a letter, digit, or underscore reads like an identifier or
/// number, and `name(...)` / `3(...)` has no meaning in this language.
fn forbids_following_paren(token: &Token) -> bool {
    match &token.kind {
        TokenKind::Literal(text) => text
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_'),
        _ => false,
    }
}

/// Transform an infix token stream into an RPN token sequence.
///
/// Uniformly left-associative: operators of equal or higher precedence
/// already on the working stack are resolved before a new operator is
/// pushed. Parentheses group and are consumed here; they never appear in the
/// output.
pub fn compile<I>(tokens: I, registry: &OperatorRegistry) -> Result<Vec<Token>, ExpressionError>
where
    I: IntoIterator<Item = Result<Token, ExpressionError>>,
{
    let mut output: Vec<Token> = Vec::new();
    let mut stack: Vec<Token> = Vec::new();
    let mut previous: Option<Token> = None;

    for token in tokens {
        let token = token?;

        match &token.kind {
            TokenKind::Operator(symbol) => {
                let precedence = registry
                    .get(symbol)
                    .map(|op| op.precedence())
                    .ok_or_else(|| ExpressionError::UnknownOperator {
                        symbol: symbol.clone(),
                        pos: token.pos,
                    })?;
                while stacked_precedence(stack.last(), registry)
                    .is_some_and(|stacked| precedence <= stacked)
                {
                    output.push(stack.pop().unwrap());
                }
                stack.push(token.clone());
            }
            TokenKind::LParen => {
                if previous.as_ref().is_some_and(forbids_following_paren) {
                    return Err(ExpressionError::MissingOperator {
                        pos: Some(token.pos),
                    });
                }
                stack.push(token.clone());
            }
            TokenKind::RParen => loop {
                match stack.pop() {
                    Some(Token {
                        kind: TokenKind::LParen,
                        ..
                    }) => break,
                    Some(stacked) => output.push(stacked),
                    None => {
                        return Err(ExpressionError::MismatchedParens { pos: token.pos });
                    }
                }
            },
            TokenKind::Literal(_) => output.push(token.clone()),
        }
        previous = Some(token);
    }

    while let Some(token) = stack.pop() {
        if matches!(token.kind, TokenKind::LParen | TokenKind::RParen) {
            return Err(ExpressionError::MismatchedParens { pos: token.pos });
        }
        output.push(token);
    }

    Ok(output)
}
