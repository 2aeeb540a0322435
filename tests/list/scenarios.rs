//! End-to-end list scenarios against an in-memory source.

use std::sync::Arc;

use varlist::app::{ListController, ResultOutcome};
use varlist::logic::{Action, Direction};
use varlist::sources::MemorySource;
use varlist::state::{FieldPath, Filter, FilterPath, ListConfig, PathOp, StructRef};

use super::helpers::{people, person};

fn mount(limit: usize, source: MemorySource) -> ListController {
    let mut cfg = ListConfig::new(StructRef::new("person"));
    cfg.limit = limit;
    ListController::mount(cfg, Arc::new(source))
}

#[tokio::test]
/// What: Fresh mount with a full first page
///
/// - Input: limit 10, 25 persons
/// - Output: 10 variables, not at end, not refreshing
async fn fresh_mount_full_page() {
    let mut ctl = mount(10, MemorySource::new(people(25)));
    assert!(ctl.state().refreshing);
    assert_eq!(ctl.state().offset, 0);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Committed { count: 10 }));
    let st = ctl.state();
    assert_eq!(st.variables.len(), 10);
    assert!(!st.reached_end);
    assert!(!st.refreshing);
}

#[tokio::test]
/// What: Fresh mount where the first page is also the last
///
/// - Input: limit 10, 4 persons
/// - Output: 4 variables, `reached_end`, further advances are ignored
async fn fresh_mount_last_page() {
    let mut ctl = mount(10, MemorySource::new(people(4)));
    ctl.settle().await;
    assert_eq!(ctl.state().variables.len(), 4);
    assert!(ctl.state().reached_end);
    assert_eq!(ctl.dispatch(Action::AdvanceOffset), None);
    assert_eq!(ctl.state().offset, 0);
}

#[tokio::test]
/// What: Exact-length final page costs one extra empty fetch
///
/// - Input: limit 5, 10 persons
/// - Output: After two full pages not at end; third (empty) page sets `reached_end`
async fn exact_length_last_page_needs_extra_fetch() {
    let mut ctl = mount(5, MemorySource::new(people(10)));
    ctl.settle().await;
    ctl.dispatch(Action::AdvanceOffset);
    ctl.settle().await;
    assert_eq!(ctl.state().variables.len(), 10);
    assert!(!ctl.state().reached_end);
    ctl.dispatch(Action::AdvanceOffset);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Committed { count: 0 }));
    assert!(ctl.state().reached_end);
    assert_eq!(ctl.state().variables.len(), 10);
}

#[tokio::test]
/// What: Adding and removing an idle filter group never resets the query
///
/// - Input: Loaded second page; `FilterAdd`, then `FilterRemove` of that group
/// - Output: Group has index 0 and no predicates; offset and variables unchanged throughout
///
/// Details:
/// - The filter set is part of the query key, so each edit re-fetches the current page;
///   the re-fetched page merges without duplicates.
async fn filter_add_then_remove_without_reset() {
    let mut ctl = mount(3, MemorySource::new(people(9)));
    ctl.settle().await;
    ctl.dispatch(Action::AdvanceOffset);
    ctl.settle().await;
    let loaded = ctl.state().variables.clone();
    assert_eq!(loaded.len(), 6);

    assert!(ctl.dispatch(Action::FilterAdd).is_some());
    let group = ctl.state().filters.iter().next().cloned().expect("group added");
    assert_eq!(group.index, 0);
    assert!(group.id.is_none() && group.created.is_none() && group.updated.is_none());
    assert!(group.filter_paths.is_empty());
    assert_eq!(ctl.state().offset, 3);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Committed { count: 3 }));
    assert_eq!(ctl.state().variables, loaded);

    ctl.dispatch(Action::FilterRemove(group));
    assert!(ctl.state().filters.is_empty());
    assert_eq!(ctl.state().offset, 3);
    ctl.settle().await;
    assert_eq!(ctl.state().variables, loaded);
    assert!(!ctl.state().reached_end);
}

#[tokio::test]
/// What: Activating a field predicate re-queries page 0 with the filter applied
///
/// - Input: 9 persons; filter group with active `age >= 7`
/// - Output: Variables 7, 8, 9 only, at end
async fn active_filter_path_requeries() {
    let mut ctl = mount(5, MemorySource::new(people(9)));
    ctl.settle().await;
    ctl.dispatch(Action::FilterAdd);
    let group: Filter = ctl.state().filters.iter().next().cloned().expect("group added");
    let path = FilterPath {
        active: true,
        op: Some(PathOp::Range {
            min: Some(serde_json::json!(7)),
            max: None,
        }),
        ..FilterPath::new(FieldPath::parse("age"))
    };
    assert!(ctl.dispatch(Action::FilterPathReplace(group, path)).is_some());
    ctl.settle().await;
    let ids: Vec<u64> = ctl.state().variables.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![7, 8, 9]);
    assert!(ctl.state().reached_end);
}

#[tokio::test]
/// What: Sort edits reorder results from page 0
///
/// - Input: Persons 1..=4; sort age desc, then toggle to asc, then add and move a second key
/// - Output: [4,3,2,1], then [1,2,3,4]; moving the key swaps priorities
async fn sort_edits_reorder_results() {
    let mut ctl = mount(10, MemorySource::new(people(4)));
    ctl.settle().await;
    let age = FilterPath::new(FieldPath::parse("age"));
    ctl.dispatch(Action::SortAdd(age.clone(), false));
    ctl.settle().await;
    let ids = |c: &ListController| c.state().variables.iter().map(|v| v.id).collect::<Vec<_>>();
    assert_eq!(ids(&ctl), vec![4, 3, 2, 1]);

    ctl.dispatch(Action::SortToggleDirection(age.clone()));
    ctl.settle().await;
    assert_eq!(ids(&ctl), vec![1, 2, 3, 4]);

    let name = FilterPath::new(FieldPath::parse("name"));
    ctl.dispatch(Action::SortAdd(name.clone(), true));
    ctl.dispatch(Action::SortMove(name, Direction::Up));
    let keys: Vec<String> = ctl
        .state()
        .init_filter
        .sort_keys()
        .iter()
        .map(|p| p.path.to_string())
        .collect();
    assert_eq!(keys, vec!["name", "age"]);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Committed { count: 4 }));
}

#[tokio::test]
/// What: Level and active toggles scope the listing
///
/// - Input: Persons 1..=6 (levels id % 3) plus archived person 7
/// - Output: Level 0 gives [3,6]; archived gives [7]
async fn level_and_active_toggles() {
    let mut data = people(6);
    data.push(person(7, false));
    let mut ctl = mount(10, MemorySource::new(data));
    ctl.settle().await;
    ctl.dispatch(Action::SetLevel(Some(0)));
    ctl.settle().await;
    let ids: Vec<u64> = ctl.state().variables.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![3, 6]);
    ctl.dispatch(Action::SetLevel(None));
    ctl.dispatch(Action::SetActive(false));
    ctl.settle().await;
    let ids: Vec<u64> = ctl.state().variables.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![7]);
}
