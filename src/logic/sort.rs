use crate::state::{FilterPath, ListState, SortOrdering};

/// Direction of a sort-priority move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards a lower priority number (sorted earlier).
    Up,
    /// Towards a higher priority number (sorted later).
    Down,
}

/// What: Add `path` to the sort specification after every existing key.
///
/// Inputs:
/// - `st`: Mutable list state whose `init_filter` is edited
/// - `path`: Field entry to sort on
/// - `ascending`: Sort direction
///
/// Output:
/// - The field's entry carries `ordering = (max + 1, ascending)`; the query is reset.
///
/// Details:
/// - Any previous entry for the same field is replaced, so a field appears once.
/// - With no ordered entries the new priority is 1.
pub fn sort_add(st: &mut ListState, path: &FilterPath, ascending: bool) {
    let paths = &mut st.init_filter.filter_paths;
    paths.remove_where(|p| p.path == path.path);
    let next_priority = paths
        .iter()
        .filter_map(|p| p.ordering.map(|o| o.priority))
        .max()
        .unwrap_or(0)
        + 1;
    paths.insert(path.with_ordering(Some(SortOrdering {
        priority: next_priority,
        ascending,
    })));
    st.reset_query();
}

/// What: Take `path`'s field out of the sort.
///
/// Output:
/// - The entry stays in the sort spec with `ordering = None`; the query is reset.
///   Unknown or already unordered fields leave the state untouched.
pub fn sort_remove(st: &mut ListState, path: &FilterPath) {
    let Some(existing) = st.init_filter.path_entry(&path.path).cloned() else {
        tracing::debug!(path = %path.path, "sort remove: field not in sort spec");
        return;
    };
    if existing.ordering.is_none() {
        return;
    }
    st.init_filter.filter_paths.remove(&existing);
    st.init_filter
        .filter_paths
        .insert(existing.with_ordering(None));
    st.reset_query();
}

/// What: Swap `path`'s priority with its neighbour in `dir`.
///
/// Inputs:
/// - `st`: Mutable list state
/// - `path`: Field whose priority moves
/// - `dir`: `Up` swaps with priority - 1, `Down` with priority + 1
///
/// Output:
/// - Both entries exchange priorities and keep their own direction; query reset.
///
/// Details:
/// - No-op when the field has no ordering or no entry holds the adjacent priority.
pub fn sort_move(st: &mut ListState, path: &FilterPath, dir: Direction) {
    let Some(current) = st.init_filter.path_entry(&path.path).cloned() else {
        return;
    };
    let Some(ord) = current.ordering else {
        tracing::debug!(path = %path.path, "sort move: field is not ordered");
        return;
    };
    let target = match dir {
        Direction::Up => ord.priority.checked_sub(1),
        Direction::Down => ord.priority.checked_add(1),
    };
    let Some(target) = target else {
        return;
    };
    let Some(neighbour) = st
        .init_filter
        .filter_paths
        .iter()
        .find(|p| p.ordering.is_some_and(|o| o.priority == target))
        .cloned()
    else {
        return;
    };
    let Some(neighbour_ord) = neighbour.ordering else {
        return;
    };
    let paths = &mut st.init_filter.filter_paths;
    paths.remove(&current);
    paths.remove(&neighbour);
    paths.insert(current.with_ordering(Some(SortOrdering {
        priority: target,
        ascending: ord.ascending,
    })));
    paths.insert(neighbour.with_ordering(Some(SortOrdering {
        priority: ord.priority,
        ascending: neighbour_ord.ascending,
    })));
    st.reset_query();
}

/// Flip the direction of `path`'s ordering, keeping its priority.
pub fn sort_toggle_direction(st: &mut ListState, path: &FilterPath) {
    let Some(current) = st.init_filter.path_entry(&path.path).cloned() else {
        return;
    };
    let Some(ord) = current.ordering else {
        return;
    };
    st.init_filter.filter_paths.remove(&current);
    st.init_filter
        .filter_paths
        .insert(current.with_ordering(Some(SortOrdering {
            ascending: !ord.ascending,
            ..ord
        })));
    st.reset_query();
}
