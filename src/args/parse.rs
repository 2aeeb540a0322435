//! Parsing of `--sort` and `--filter` command-line values.

use serde_json::Value;

use crate::state::{FieldPath, FilterPath, PathOp};

/// What: Parse a `--sort` value such as `name`, `age:desc` or `address.city:asc`.
///
/// Inputs:
/// - `s`: Raw argument
///
/// Output:
/// - `(field, ascending)` on success; error text for an empty field or unknown direction.
///
/// # Errors
/// Returns a message when the field is empty or the direction is not `asc`/`desc`.
pub fn parse_sort_arg(s: &str) -> Result<(FieldPath, bool), String> {
    let (field, dir) = match s.rsplit_once(':') {
        Some((f, d)) => (f, Some(d.trim().to_ascii_lowercase())),
        None => (s, None),
    };
    let path = FieldPath::parse(field);
    if path.0.is_empty() {
        return Err(format!("invalid sort key '{s}': empty field"));
    }
    let ascending = match dir.as_deref() {
        None | Some("asc" | "ascending" | "up") => true,
        Some("desc" | "descending" | "down") => false,
        Some(other) => return Err(format!("invalid sort direction '{other}' in '{s}'")),
    };
    Ok((path, ascending))
}

/// Interpret an operand as JSON when possible, otherwise as a plain string.
fn operand(raw: &str) -> Value {
    let t = raw.trim();
    serde_json::from_str(t).unwrap_or_else(|_| Value::String(t.to_string()))
}

/// What: Parse a `--filter` predicate into an active field entry.
///
/// Inputs:
/// - `s`: `FIELD`, `FIELD=VALUE`, `FIELD~TEXT`, `FIELD>=VALUE` or `FIELD<=VALUE`
///
/// Output:
/// - Active `FilterPath` without ordering.
///
/// Details:
/// - Operands that parse as JSON (`36`, `true`, `"x"`) keep their type; anything else
///   is a string.
///
/// # Errors
/// Returns a message when the field is empty.
pub fn parse_filter_arg(s: &str) -> Result<FilterPath, String> {
    let (field, op) = if let Some((f, v)) = s.split_once(">=") {
        (
            f,
            Some(PathOp::Range {
                min: Some(operand(v)),
                max: None,
            }),
        )
    } else if let Some((f, v)) = s.split_once("<=") {
        (
            f,
            Some(PathOp::Range {
                min: None,
                max: Some(operand(v)),
            }),
        )
    } else if let Some((f, v)) = s.split_once('~') {
        (
            f,
            Some(PathOp::Contains {
                value: Value::String(v.trim().to_string()),
            }),
        )
    } else if let Some((f, v)) = s.split_once('=') {
        (f, Some(PathOp::Eq { value: operand(v) }))
    } else {
        (s, None)
    };
    let path = FieldPath::parse(field);
    if path.0.is_empty() {
        return Err(format!("invalid filter '{s}': empty field"));
    }
    Ok(FilterPath {
        active: true,
        op,
        ..FilterPath::new(path)
    })
}
