use crate::ast::{OperatorRegistry, Token, TokenKind};
use crate::error::ExpressionError;

/// Characters that can form an operator token.
///
/// `! ~ > < =` deliberately lex as literal text instead: they belong to the
/// leaf-term grammar (`>=5`, `~pat`, ...) owned by the embedder's term
/// parser, not to the engine's operator layer.
fn is_operator_char(ch: char) -> bool {
    matches!(ch, '&' | '|')
}

/// Expression tokenizer.
///
/// Lexes a trimmed expression into literals, operator symbols, and
/// parentheses, skipping whitespace between tokens. Restartable by
/// constructing a fresh instance over the same text.
///
/// Operator runs are validated against the registry as they are read, so an
/// unknown symbol fails here with its position rather than surfacing later as
/// a puzzling compile error.
pub struct Tokenizer<'a> {
    input: Vec<char>,
    position: usize,
    registry: &'a OperatorRegistry,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &str, registry: &'a OperatorRegistry) -> Self {
        Tokenizer {
            input: input.trim().chars().collect(),
            position: 0,
            registry,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Greedy literal: everything up to whitespace, a paren, or an operator
    /// character.
    fn read_literal(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || ch == '(' || ch == ')' || is_operator_char(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    fn read_operator(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_operator_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ExpressionError> {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Ok(None),
        };
        let start = self.position;

        let kind = match ch {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            ch if is_operator_char(ch) => {
                let symbol = self.read_operator();
                if !self.registry.contains(&symbol) {
                    return Err(ExpressionError::UnknownOperator { symbol, pos: start });
                }
                TokenKind::Operator(symbol)
            }
            _ => TokenKind::Literal(self.read_literal()),
        };

        Ok(Some(Token::new(kind, start)))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ExpressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
