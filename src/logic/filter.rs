use crate::state::{Filter, FilterPath, ListState};

/// What: Append a fresh, inactive filter group.
///
/// Inputs:
/// - `st`: Mutable list state
///
/// Output:
/// - A new `Filter` with `index = max + 1` (0 for the first) and no predicates.
///
/// Details:
/// - The query is not reset because the new group starts inactive.
pub fn filter_add(st: &mut ListState) {
    let index = st.filters.iter().map(|f| f.index).max().unwrap_or(-1) + 1;
    st.filters.insert(Filter {
        index,
        ..Filter::default()
    });
}

/// What: Remove a filter group.
///
/// Inputs:
/// - `st`: Mutable list state
/// - `filter`: Snapshot of the group, matched by structural equality
///
/// Output:
/// - Group removed; the query resets only when the group was engaged.
pub fn filter_remove(st: &mut ListState, filter: &Filter) {
    if !st.filters.remove(filter) {
        tracing::debug!(index = filter.index, "filter remove: no matching filter");
        return;
    }
    if filter.is_engaged() {
        st.reset_query();
    }
}

/// What: Replace the group that has `filter.index` with `filter`.
///
/// Output:
/// - Stored group swapped for the new snapshot. The query resets when one of the new
///   snapshot's top-level predicates is active.
///
/// Details:
/// - Unknown indices are ignored.
/// - Without a reset the changed filter set still re-fetches the current page.
pub fn filter_replace(st: &mut ListState, filter: &Filter) {
    if st.filters.remove_where(|f| f.index == filter.index).is_empty() {
        tracing::debug!(index = filter.index, "filter replace: no matching filter");
        return;
    }
    st.filters.insert(filter.clone());
    if filter.has_active_predicate() {
        st.reset_query();
    }
}

/// What: Insert or replace `path`'s field entry inside `filter`.
///
/// Inputs:
/// - `st`: Mutable list state
/// - `filter`: Snapshot of the group, matched by structural equality
/// - `path`: New entry; replaces the group's entry for the same field
///
/// Output:
/// - Updated group written back; query reset when `path.active` is set.
pub fn filter_path_replace(st: &mut ListState, filter: &Filter, path: &FilterPath) {
    edit_filter_paths(st, filter, path, |group| {
        group.filter_paths.remove_where(|p| p.path == path.path);
        group.filter_paths.insert(path.clone());
    });
}

/// Remove `path`'s field entry from `filter`; resets when `path.active` is set.
pub fn filter_path_remove(st: &mut ListState, filter: &Filter, path: &FilterPath) {
    edit_filter_paths(st, filter, path, |group| {
        group.filter_paths.remove_where(|p| p.path == path.path);
    });
}

/// What: Locate `filter`, apply `edit` to a copy, and write it back.
///
/// Details:
/// - The query resets when `path.active` is set, whether or not the group held the field.
/// - Missing groups are a silent no-op.
fn edit_filter_paths(
    st: &mut ListState,
    filter: &Filter,
    path: &FilterPath,
    edit: impl FnOnce(&mut Filter),
) {
    if !st.filters.contains(filter) {
        tracing::debug!(index = filter.index, "filter path edit: no matching filter");
        return;
    }
    let mut updated = filter.clone();
    edit(&mut updated);
    st.filters.remove(filter);
    st.filters.insert(updated);
    if path.active {
        st.reset_query();
    }
}
