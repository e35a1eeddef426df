use std::fmt;

/// Opaque failure from an external leaf-term parser or operator function.
///
/// The engine never inspects these; they travel unchanged inside
/// [`ExpressionError::LeafParse`] to the caller of `eval()`.
pub type LeafError = Box<dyn std::error::Error + Send + Sync>;

/// The broad phase a failure belongs to.
///
/// Useful when a caller only cares whether an error is the user's syntax,
/// the engine's operand bookkeeping, or the embedder's term grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown operator symbol during tokenizing
    Lex,
    /// Structural problem found by the compiler
    Syntax,
    /// Operand-stack imbalance during evaluation
    EvalStack,
    /// Failure from the external leaf-term parser
    LeafParse,
}

/// Errors raised while compiling or evaluating an expression.
///
/// A failed expression never yields a predicate; there is no recovery or
/// partial result anywhere in the engine.
#[derive(Debug)]
pub enum ExpressionError {
    /// Operator symbol not present in the registry
    UnknownOperator { symbol: String, pos: usize },

    /// Two operands with nothing joining them.
    ///
    /// Carries a position when detected by the compiler (literal directly
    /// before `(`); carries none when detected at the end of evaluation
    /// (more than one operand left on the stack).
    MissingOperator { pos: Option<usize> },

    /// Unmatched `(` or `)`
    MismatchedParens { pos: usize },

    /// Operand stack ran dry, or the expression produced nothing
    MissingOperand,

    /// Checked failure from the external leaf-term parser, unchanged
    LeafParse(LeafError),
}

impl ExpressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::UnknownOperator { .. } => ErrorKind::Lex,
            ExpressionError::MissingOperator { pos: Some(_) } => ErrorKind::Syntax,
            ExpressionError::MissingOperator { pos: None } => ErrorKind::EvalStack,
            ExpressionError::MismatchedParens { .. } => ErrorKind::Syntax,
            ExpressionError::MissingOperand => ErrorKind::EvalStack,
            ExpressionError::LeafParse(_) => ErrorKind::LeafParse,
        }
    }

    /// Character offset of the failure in the trimmed source, where known
    pub fn pos(&self) -> Option<usize> {
        match self {
            ExpressionError::UnknownOperator { pos, .. } => Some(*pos),
            ExpressionError::MissingOperator { pos } => *pos,
            ExpressionError::MismatchedParens { pos } => Some(*pos),
            ExpressionError::MissingOperand => None,
            ExpressionError::LeafParse(_) => None,
        }
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::UnknownOperator { symbol, pos } => {
                write!(f, "Unknown operator '{}' at position {}", symbol, pos)
            }
            ExpressionError::MissingOperator { pos: Some(pos) } => {
                write!(f, "Missing operator at position {}", pos)
            }
            ExpressionError::MissingOperator { pos: None } => {
                write!(f, "Missing operator")
            }
            ExpressionError::MismatchedParens { pos } => {
                write!(f, "Mismatched parentheses at position {}", pos)
            }
            ExpressionError::MissingOperand => write!(f, "Missing operand"),
            ExpressionError::LeafParse(e) => write!(f, "Leaf term error: {}", e),
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionError::LeafParse(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
