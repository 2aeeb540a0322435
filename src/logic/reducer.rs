//! Pure state transitions for a paginated list.

use crate::logic::filter::{
    filter_add, filter_path_remove, filter_path_replace, filter_remove, filter_replace,
};
use crate::logic::sort::{Direction, sort_add, sort_move, sort_remove, sort_toggle_direction};
use crate::state::{Filter, FilterPath, ListState, Variable};

/// Everything that can happen to a list.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A page arrived for the current query.
    SetVariables(Vec<Variable>),
    /// Switch between active and archived variables.
    SetActive(bool),
    /// Restrict to a level, or lift the restriction.
    SetLevel(Option<u32>),
    /// Request the next page.
    AdvanceOffset,
    /// Sort on a field after all existing keys.
    SortAdd(FilterPath, bool),
    /// Stop sorting on a field.
    SortRemove(FilterPath),
    /// Swap a sort key with its neighbour.
    SortMove(FilterPath, Direction),
    /// Flip a sort key's direction.
    SortToggleDirection(FilterPath),
    /// Append an inactive filter group.
    FilterAdd,
    /// Remove a filter group.
    FilterRemove(Filter),
    /// Replace the filter group with the same index.
    FilterReplace(Filter),
    /// Insert or replace a field entry within a filter group.
    FilterPathReplace(Filter, FilterPath),
    /// Remove a field entry from a filter group.
    FilterPathRemove(Filter, FilterPath),
    /// Select the render variant.
    SetLayout(String),
    /// Drop loaded pages and re-fetch page 0 even if nothing else changed.
    Refresh,
    /// A page request was issued for the current query.
    FetchStarted,
    /// The latest page request failed.
    FetchFailed,
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetVariables(_) => "set_variables",
            Self::SetActive(_) => "set_active",
            Self::SetLevel(_) => "set_level",
            Self::AdvanceOffset => "advance_offset",
            Self::SortAdd(..) => "sort_add",
            Self::SortRemove(_) => "sort_remove",
            Self::SortMove(..) => "sort_move",
            Self::SortToggleDirection(_) => "sort_toggle_direction",
            Self::FilterAdd => "filter_add",
            Self::FilterRemove(_) => "filter_remove",
            Self::FilterReplace(_) => "filter_replace",
            Self::FilterPathReplace(..) => "filter_path_replace",
            Self::FilterPathRemove(..) => "filter_path_remove",
            Self::SetLayout(_) => "set_layout",
            Self::Refresh => "refresh",
            Self::FetchStarted => "fetch_started",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

/// What: Compute the next list state for `action`.
///
/// Inputs:
/// - `state`: Previous state; never modified
/// - `action`: Event to apply
///
/// Output:
/// - New state. Actions with inconsistent arguments return an equal state.
///
/// Details:
/// - Query-affecting actions reset `offset`, `reached_end` and `variables` and set
///   `refreshing`, which makes the controller fetch page 0 again.
/// - A short page (`len != limit`) marks the end of data; an exact-length page never does.
/// - After `FetchFailed`, the next `AdvanceOffset` re-requests the failed page instead of
///   moving past it.
#[must_use]
pub fn reduce(state: &ListState, action: Action) -> ListState {
    let mut next = state.clone();
    match action {
        Action::SetVariables(page) => set_variables(&mut next, page),
        Action::SetActive(active) => {
            next.active = active;
            next.reset_query();
        }
        Action::SetLevel(level) => {
            next.level = level;
            next.reset_query();
        }
        Action::AdvanceOffset => {
            if next.refreshing || next.reached_end {
                return next;
            }
            if next.retry_page {
                next.retry_page = false;
                next.reload += 1;
            } else {
                next.offset += next.limit;
            }
            next.refreshing = true;
        }
        Action::SortAdd(path, ascending) => sort_add(&mut next, &path, ascending),
        Action::SortRemove(path) => sort_remove(&mut next, &path),
        Action::SortMove(path, dir) => sort_move(&mut next, &path, dir),
        Action::SortToggleDirection(path) => sort_toggle_direction(&mut next, &path),
        Action::FilterAdd => filter_add(&mut next),
        Action::FilterRemove(filter) => filter_remove(&mut next, &filter),
        Action::FilterReplace(filter) => filter_replace(&mut next, &filter),
        Action::FilterPathReplace(filter, path) => filter_path_replace(&mut next, &filter, &path),
        Action::FilterPathRemove(filter, path) => filter_path_remove(&mut next, &filter, &path),
        Action::SetLayout(layout) => next.layout = layout,
        Action::Refresh => next.reset_query(),
        Action::FetchStarted => next.refreshing = true,
        Action::FetchFailed => {
            next.refreshing = false;
            next.retry_page = true;
        }
    }
    next
}

/// Merge a fetched page: replace on page 0, otherwise append unseen variables.
fn set_variables(st: &mut ListState, page: Vec<Variable>) {
    let short = page.len() != st.limit;
    if st.offset == 0 {
        st.variables = page;
    } else {
        for v in page {
            if !st.variables.contains(&v) {
                st.variables.push(v);
            }
        }
    }
    st.refreshing = false;
    st.retry_page = false;
    if short {
        st.reached_end = true;
    }
}
