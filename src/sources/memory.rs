use std::path::Path;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::matching::{compare_by_sort, passes_filters};
use super::{FetchPage, PageQuery, Result};
use crate::state::Variable;

/// What: Page source over an in-memory snapshot of variables.
///
/// Details:
/// - Cloning is cheap; the snapshot is shared behind an `Arc`.
/// - Queries filter, sort and slice the snapshot on every call, so identical
///   queries always return identical pages.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    /// Shared variable snapshot.
    variables: Arc<Vec<Variable>>,
}

impl MemorySource {
    /// Source over `variables`.
    #[must_use]
    pub fn new(variables: Vec<Variable>) -> Self {
        Self {
            variables: Arc::new(variables),
        }
    }

    /// What: Parse a JSON array of variables.
    ///
    /// Inputs:
    /// - `s`: JSON text
    ///
    /// Output:
    /// - `MemorySource` on success; parse error otherwise.
    ///
    /// # Errors
    /// Returns an error when `s` is not a JSON array of variables.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let variables: Vec<Variable> = serde_json::from_str(s)?;
        Ok(Self::new(variables))
    }

    /// What: Load a JSON data file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)?;
        let src = Self::from_json_str(&body)?;
        tracing::info!(
            path = %path.display(),
            count = src.variables.len(),
            "loaded variables"
        );
        Ok(src)
    }

    /// Number of variables in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// What: Run `query` against the snapshot.
    ///
    /// Output:
    /// - Up to `limit` variables starting at `offset` of the filtered, sorted snapshot.
    ///
    /// Details:
    /// - A `level` of `None` matches every level.
    #[must_use]
    pub fn query(&self, query: &PageQuery) -> Vec<Variable> {
        let mut matched: Vec<&Variable> = self
            .variables
            .iter()
            .filter(|v| v.struct_name == query.struct_ref.name)
            .filter(|v| v.active == query.active)
            .filter(|v| query.level.is_none_or(|l| v.level == Some(l)))
            .filter(|v| passes_filters(&query.filters, v))
            .collect();
        matched.sort_by(|a, b| compare_by_sort(&query.sort, a, b));
        matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect()
    }
}

impl FetchPage for MemorySource {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<Vec<Variable>>> {
        let src = self.clone();
        async move { Ok(src.query(&query)) }.boxed()
    }
}
