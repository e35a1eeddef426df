//! Filter JSON rows with a compiled expression

use super::{CliError, convert, terms::TermParser, terms::default_registry};
use crate::Expression;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter expression to compile
    pub expression: String,
    /// JSON input: an array of rows, each an array of scalar cells
    pub input: Option<String>,
    /// Column the leaf-term parser targets
    pub column: usize,
    /// Only validate syntax, don't filter
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rows that the compiled predicate included
    Matched(serde_json::Value),
}

/// Compile the expression and run it over every input row.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let registry = default_registry();
    let expression = Expression::compile(&options.expression, &registry)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let input = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json: serde_json::Value = serde_json::from_str(input)?;
    let rows = convert::json_to_rows(json)?;

    let parser = TermParser::new(options.column);
    let predicate = expression.eval(&registry, &parser)?;

    let matched: Vec<_> = rows
        .into_iter()
        .filter(|row| predicate.include(row))
        .collect();

    Ok(CheckResult::Matched(convert::rows_to_json(matched)))
}
