//! Page sources: the data-access boundary a list controller fetches from.

use futures::future::BoxFuture;

use crate::state::{Filter, ListState, StructRef, ValueSet, Variable};

/// Predicate evaluation and ordering.
pub mod matching;
/// In-memory page source.
pub mod memory;

pub use memory::MemorySource;

/// Boxed error type used at the fetch boundary.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Everything a source needs to produce one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageQuery {
    /// Struct whose variables are wanted.
    pub struct_ref: StructRef,
    /// Active or archived variables.
    pub active: bool,
    /// Optional level restriction.
    pub level: Option<u32>,
    /// Sort specification.
    pub sort: Filter,
    /// Filter groups.
    pub filters: ValueSet<Filter>,
    /// Page size.
    pub limit: usize,
    /// Page start.
    pub offset: usize,
}

impl PageQuery {
    /// Capture the query fields of `st`.
    #[must_use]
    pub fn from_state(st: &ListState) -> Self {
        Self {
            struct_ref: st.struct_ref.clone(),
            active: st.active,
            level: st.level,
            sort: st.init_filter.clone(),
            filters: st.filters.clone(),
            limit: st.limit,
            offset: st.offset,
        }
    }
}

/// Page request sent to the fetch worker.
#[derive(Clone, Debug)]
pub struct PageRequest {
    /// Query id used to discard stale responses.
    pub id: u64,
    /// Query to run.
    pub query: PageQuery,
}

/// Page response from the fetch worker.
#[derive(Clone, Debug)]
pub struct PageResult {
    /// Id of the request this answers.
    pub id: u64,
    /// Page on success; error text on failure.
    pub outcome: std::result::Result<Vec<Variable>, String>,
}

/// What: Data-access boundary producing pages of variables.
///
/// Details:
/// - Must be idempotent for identical queries.
/// - Returns at most `limit` variables, and fewer only on the final page.
pub trait FetchPage: Send + Sync + 'static {
    /// Fetch one page for `query`.
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<Vec<Variable>>>;
}
