//! JSON <-> row conversion utilities

use super::CliError;
use crate::Value;

/// Convert a scalar serde_json::Value to a cell Value
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(CliError::InvalidRows(format!("unrepresentable number {}", n)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(CliError::InvalidRows(
            "cells must be scalars, not arrays or objects".to_string(),
        )),
    }
}

/// Convert a cell Value back to serde_json::Value
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
    }
}

/// Parse a JSON array of arrays of scalars into rows
pub fn json_to_rows(v: serde_json::Value) -> Result<Vec<Vec<Value>>, CliError> {
    let rows = match v {
        serde_json::Value::Array(rows) => rows,
        other => {
            return Err(CliError::InvalidRows(format!(
                "expected an array of rows, got {}",
                json_type_name(&other)
            )));
        }
    };

    rows.into_iter()
        .map(|row| match row {
            serde_json::Value::Array(cells) => {
                cells.into_iter().map(json_to_value).collect()
            }
            other => Err(CliError::InvalidRows(format!(
                "expected each row to be an array, got {}",
                json_type_name(&other)
            ))),
        })
        .collect()
}

/// Render rows as a JSON array of arrays
pub fn rows_to_json(rows: Vec<Vec<Value>>) -> serde_json::Value {
    serde_json::Value::Array(
        rows.into_iter()
            .map(|row| serde_json::Value::Array(row.into_iter().map(value_to_json).collect()))
            .collect(),
    )
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
