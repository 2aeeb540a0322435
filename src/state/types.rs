//! Core value types used by list state.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::value_set::ValueSet;

/// Reference to the struct whose variables a list browses.
///
/// Fixed for the lifetime of a mounted list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StructRef {
    /// Struct name as stored on each variable.
    pub name: String,
}

impl StructRef {
    /// Build a struct reference from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Dotted field reference into a variable's values, e.g. `address.city`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldPath(pub Vec<String>);

impl FieldPath {
    /// What: Parse a dotted field reference.
    ///
    /// Inputs:
    /// - `s`: Dotted path such as `"address.city"`
    ///
    /// Output:
    /// - `FieldPath` with one segment per non-empty dot-separated part.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self(
            s.split('.')
                .map(str::trim)
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// What: Resolve this path against a variable's value map.
    ///
    /// Inputs:
    /// - `values`: Top-level value map of a variable
    ///
    /// Output:
    /// - `Some(&Value)` when every segment resolves; `None` otherwise.
    ///
    /// Details:
    /// - Intermediate segments must be JSON objects; arrays are not indexed.
    #[must_use]
    pub fn resolve<'a>(&self, values: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.0.split_first()?;
        let mut cur = values.get(first)?;
        for seg in rest {
            cur = cur.as_object()?.get(seg)?;
        }
        Some(cur)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A single fetched record ("variable") of a struct.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variable {
    /// Record identity.
    pub id: u64,
    /// Name of the struct this variable belongs to.
    pub struct_name: String,
    /// Whether the variable is active (archived variables are inactive).
    #[serde(default = "default_true")]
    pub active: bool,
    /// Optional level ordinal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Field values keyed by field name.
    #[serde(default)]
    pub values: Map<String, Value>,
}

/// Serde default for [`Variable::active`].
const fn default_true() -> bool {
    true
}

/// The `(active, value)` pair carried by a filter's identity and timestamp predicates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Predicate<T> {
    /// Whether the predicate participates in the query.
    pub active: bool,
    /// Predicate operand.
    pub value: T,
}

impl<T> Predicate<T> {
    /// Construct an active predicate.
    pub const fn active(value: T) -> Self {
        Self {
            active: true,
            value,
        }
    }
}

/// Inclusive timestamp range; open on a side when that bound is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    /// Lower bound (inclusive).
    pub start: Option<DateTime<Utc>>,
    /// Upper bound (inclusive).
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Whether `ts` lies within the range.
    #[must_use]
    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        self.start.as_ref().is_none_or(|s| ts >= s) && self.end.as_ref().is_none_or(|e| ts <= e)
    }
}

/// Field-level predicate operator of a [`FilterPath`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathOp {
    /// Field equals the value.
    Eq {
        /// Expected value.
        value: Value,
    },
    /// String field contains the text (case-insensitive) or array field contains the value.
    Contains {
        /// Needle.
        value: Value,
    },
    /// Field lies within the inclusive bounds.
    Range {
        /// Lower bound.
        min: Option<Value>,
        /// Upper bound.
        max: Option<Value>,
    },
}

/// Sort participation of a field: priority (lower sorts first) and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortOrdering {
    /// Sort priority; distinct within one sort specification.
    pub priority: u32,
    /// `true` for ascending.
    pub ascending: bool,
}

/// One field-level predicate and/or sort key.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterPath {
    /// Field the entry refers to.
    pub path: FieldPath,
    /// Whether the predicate participates in the query.
    #[serde(default)]
    pub active: bool,
    /// Predicate operator; `None` means "present and non-null".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<PathOp>,
    /// Sort participation; `None` means the field is not sorted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<SortOrdering>,
}

impl FilterPath {
    /// Inactive, unsorted entry for `path`.
    #[must_use]
    pub fn new(path: FieldPath) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Same entry with a different ordering.
    #[must_use]
    pub fn with_ordering(&self, ordering: Option<SortOrdering>) -> Self {
        Self {
            ordering,
            ..self.clone()
        }
    }
}

/// A filter group: identity/timestamp predicates plus field-level paths.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    /// Display order; assigned as max existing index + 1.
    pub index: i64,
    /// Identity predicate.
    #[serde(default)]
    pub id: Option<Predicate<u64>>,
    /// Creation-time predicate.
    #[serde(default)]
    pub created: Option<Predicate<DateRange>>,
    /// Update-time predicate.
    #[serde(default)]
    pub updated: Option<Predicate<DateRange>>,
    /// Field-level entries of this group.
    #[serde(default)]
    pub filter_paths: ValueSet<FilterPath>,
}

impl Filter {
    /// Whether any of the identity/created/updated predicates is active.
    #[must_use]
    pub fn has_active_predicate(&self) -> bool {
        self.id.as_ref().is_some_and(|p| p.active)
            || self.created.as_ref().is_some_and(|p| p.active)
            || self.updated.as_ref().is_some_and(|p| p.active)
    }

    /// Whether the group influences the query at all (top-level predicate or any path).
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.has_active_predicate() || self.filter_paths.iter().any(|p| p.active)
    }

    /// Entry for the given field, if any.
    #[must_use]
    pub fn path_entry(&self, path: &FieldPath) -> Option<&FilterPath> {
        self.filter_paths.iter().find(|p| &p.path == path)
    }

    /// What: Sort keys of this filter in priority order.
    ///
    /// Output:
    /// - Entries with an ordering, lowest priority first.
    #[must_use]
    pub fn sort_keys(&self) -> Vec<&FilterPath> {
        let mut keys: Vec<&FilterPath> = self
            .filter_paths
            .iter()
            .filter(|p| p.ordering.is_some())
            .collect();
        keys.sort_by_key(|p| p.ordering.map_or(u32::MAX, |o| o.priority));
        keys
    }
}
