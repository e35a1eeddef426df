use std::fmt;

/// The lexical class of a token, decided once by the tokenizer.
///
/// Downstream stages match on this tag instead of re-classifying token text
/// against the registry at every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Free-form leaf term, opaque to the engine
    ///
    /// Anything delimited by whitespace, parentheses, or operator symbol
    /// characters. The embedder's leaf-term parser gives it meaning.
    ///
    /// # Examples
    /// ```text
    /// alice
    /// >=5
    /// 0..10
    /// ~foo.*bar
    /// ```
    Literal(String),

    /// Registered operator symbol
    ///
    /// A run of operator-alphabet characters (`&`, `|`). The tokenizer
    /// rejects runs that are not present in the registry.
    ///
    /// # Examples
    /// ```text
    /// &
    /// ||
    /// ```
    Operator(String),

    /// Left parenthesis, grouping only
    LParen,

    /// Right parenthesis
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(s) | TokenKind::Operator(s) => f.write_str(s),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
        }
    }
}

/// One lexical unit of an expression, with its source position.
///
/// `pos` is the character offset of the token's first character in the
/// trimmed expression text; errors report it so callers can point at the
/// offending spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize) -> Self {
        Token { kind, pos }
    }

    /// True if this token is a leaf literal
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal(_))
    }

    /// True if this token is an operator symbol
    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
