//! List state owned by a mounted list controller.

use super::types::{Filter, StructRef, Variable};
use super::value_set::ValueSet;

/// Default page size when neither settings nor caller supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// Layout key used when none is configured.
pub const DEFAULT_LAYOUT: &str = "default";

/// What: Caller-supplied configuration consumed once when a list mounts.
///
/// Details:
/// - `struct_ref` and `limit` are fixed for the lifetime of the mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Struct whose variables are listed.
    pub struct_ref: StructRef,
    /// Whether active (true) or archived (false) variables are listed.
    pub active: bool,
    /// Optional level restriction.
    pub level: Option<u32>,
    /// Initial sort specification.
    pub init_filter: Filter,
    /// Initial filter groups.
    pub filters: ValueSet<Filter>,
    /// Page size.
    pub limit: usize,
    /// Initial layout key.
    pub layout: String,
}

impl ListConfig {
    /// Configuration for `struct_ref` with defaults for everything else.
    #[must_use]
    pub fn new(struct_ref: StructRef) -> Self {
        Self {
            struct_ref,
            active: true,
            level: None,
            init_filter: Filter::default(),
            filters: ValueSet::new(),
            limit: DEFAULT_LIMIT,
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }
}

/// Paginated, filtered, sorted list of variables.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    /// Struct whose variables are listed.
    pub struct_ref: StructRef,
    /// Whether active or archived variables are listed.
    pub active: bool,
    /// Optional level restriction.
    pub level: Option<u32>,
    /// Sort specification; its paths carry orderings.
    pub init_filter: Filter,
    /// Filter groups.
    pub filters: ValueSet<Filter>,
    /// Page size.
    pub limit: usize,
    /// Start of the most recently requested page.
    pub offset: usize,
    /// Loaded variables in arrival order.
    pub variables: Vec<Variable>,
    /// No further pages expected.
    pub reached_end: bool,
    /// A page request is outstanding.
    pub refreshing: bool,
    /// Render variant key.
    pub layout: String,
    /// The last page request failed; the next advance re-requests the same page.
    pub retry_page: bool,
    /// Fetch generation; bumped by every reset and page retry so the request is re-issued.
    pub reload: u64,
}

impl ListState {
    /// What: Seed list state from a mount configuration.
    ///
    /// Inputs:
    /// - `config`: Caller configuration
    ///
    /// Output:
    /// - State at offset 0 with no variables and `refreshing` set, since mounting
    ///   always issues the first page request.
    #[must_use]
    pub fn from_config(config: ListConfig) -> Self {
        Self {
            struct_ref: config.struct_ref,
            active: config.active,
            level: config.level,
            init_filter: config.init_filter,
            filters: config.filters,
            limit: config.limit,
            offset: 0,
            variables: Vec::new(),
            reached_end: false,
            refreshing: true,
            layout: config.layout,
            retry_page: false,
            reload: 0,
        }
    }

    /// What: Drop loaded pages and restart from page 0.
    ///
    /// Details:
    /// - Bumps `reload`, so the query key always changes and page 0 is always fetched.
    /// - Sets `refreshing` because that fetch is issued right after this transition.
    pub fn reset_query(&mut self) {
        self.offset = 0;
        self.reached_end = false;
        self.variables.clear();
        self.retry_page = false;
        self.reload += 1;
        self.refreshing = true;
    }

    /// Snapshot of the fields that identify which page of which query is wanted.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            struct_ref: self.struct_ref.clone(),
            active: self.active,
            level: self.level,
            init_filter: self.init_filter.clone(),
            filters: self.filters.clone(),
            offset: self.offset,
            reload: self.reload,
        }
    }
}

/// Value identity of a page request; compared by value to decide whether to re-fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryKey {
    /// Struct.
    pub struct_ref: StructRef,
    /// Active flag.
    pub active: bool,
    /// Level.
    pub level: Option<u32>,
    /// Sort specification.
    pub init_filter: Filter,
    /// Filter groups.
    pub filters: ValueSet<Filter>,
    /// Page start.
    pub offset: usize,
    /// Refresh generation.
    pub reload: u64,
}
