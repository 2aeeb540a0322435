//! Predicate evaluation and value ordering for in-process sources.

use std::cmp::Ordering;

use serde_json::Value;

use crate::state::{Filter, FilterPath, PathOp, ValueSet, Variable};

/// Rank of a JSON value kind: null < bool < number < string < everything else.
const fn kind_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// What: Total order over JSON values used for sorting and range checks.
///
/// Inputs:
/// - `a`, `b`: Values to compare
///
/// Output:
/// - Ordering by kind first, then by value within numbers, strings and booleans.
///
/// Details:
/// - Strings compare case-insensitively, falling back to case-sensitive on ties.
/// - Arrays and objects of the same kind compare equal.
#[must_use]
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let fx = x.as_f64().unwrap_or(0.0);
            let fy = y.as_f64().unwrap_or(0.0);
            fx.partial_cmp(&fy).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Whether the variable's field satisfies one active field entry.
fn path_matches(fp: &FilterPath, var: &Variable) -> bool {
    let field = fp.path.resolve(&var.values).filter(|v| !v.is_null());
    let Some(field) = field else {
        return false;
    };
    match &fp.op {
        None => true,
        Some(PathOp::Eq { value }) => field == value,
        Some(PathOp::Contains { value }) => match (field, value) {
            (Value::String(hay), Value::String(needle)) => {
                hay.to_lowercase().contains(&needle.to_lowercase())
            }
            (Value::Array(items), needle) => items.contains(needle),
            _ => false,
        },
        Some(PathOp::Range { min, max }) => {
            min.as_ref()
                .is_none_or(|m| compare_values(field, m) != Ordering::Less)
                && max
                    .as_ref()
                    .is_none_or(|m| compare_values(field, m) != Ordering::Greater)
        }
    }
}

/// What: Whether `var` satisfies every active predicate of one filter group.
///
/// Output:
/// - `true` when all active identity, timestamp and field predicates hold.
#[must_use]
pub fn filter_matches(filter: &Filter, var: &Variable) -> bool {
    if let Some(p) = &filter.id
        && p.active
        && p.value != var.id
    {
        return false;
    }
    if let Some(p) = &filter.created
        && p.active
        && !p.value.contains(&var.created_at)
    {
        return false;
    }
    if let Some(p) = &filter.updated
        && p.active
        && !p.value.contains(&var.updated_at)
    {
        return false;
    }
    filter
        .filter_paths
        .iter()
        .filter(|fp| fp.active)
        .all(|fp| path_matches(fp, var))
}

/// What: Apply a filter set: OR across engaged groups, AND within a group.
///
/// Output:
/// - `true` when no group is engaged, or when any engaged group matches.
#[must_use]
pub fn passes_filters(filters: &ValueSet<Filter>, var: &Variable) -> bool {
    let mut engaged = filters.iter().filter(|f| f.is_engaged()).peekable();
    if engaged.peek().is_none() {
        return true;
    }
    engaged.any(|f| filter_matches(f, var))
}

/// What: Compare two variables by a sort specification.
///
/// Inputs:
/// - `sort`: Filter whose ordered paths define the keys
/// - `a`, `b`: Variables to compare
///
/// Output:
/// - Ordering by each key in priority order, then by id ascending.
///
/// Details:
/// - Missing fields compare as null.
#[must_use]
pub fn compare_by_sort(sort: &Filter, a: &Variable, b: &Variable) -> Ordering {
    for key in sort.sort_keys() {
        let Some(ord) = key.ordering else {
            continue;
        };
        let va = key.path.resolve(&a.values).unwrap_or(&Value::Null);
        let vb = key.path.resolve(&b.values).unwrap_or(&Value::Null);
        let cmp = compare_values(va, vb);
        let cmp = if ord.ascending { cmp } else { cmp.reverse() };
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    a.id.cmp(&b.id)
}
