//! Fetch effect behaviour: last query wins, failures settle and retry, refresh re-fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use varlist::app::{ListController, ResultOutcome};
use varlist::logic::Action;
use varlist::sources::MemorySource;
use varlist::state::{ListConfig, StructRef};

use super::helpers::{FailOnceSource, FailingSource, SlowActiveSource, people, person};

#[tokio::test]
/// What: A slow response for an outdated query is dropped
///
/// - Input: Active query delayed 150ms; immediately switch to archived (fast)
/// - Output: Archived page commits first; the late active page is reported stale and ignored
async fn late_result_for_old_query_is_discarded() {
    let mut data = people(3);
    data.push(person(10, false));
    let calls = Arc::new(AtomicUsize::new(0));
    let source = SlowActiveSource {
        inner: MemorySource::new(data),
        delay: Duration::from_millis(150),
        calls: Arc::clone(&calls),
    };
    let mut ctl = ListController::mount(ListConfig::new(StructRef::new("person")), Arc::new(source));
    ctl.dispatch(Action::SetActive(false));

    assert_eq!(ctl.next_result().await, Some(ResultOutcome::Committed { count: 1 }));
    assert_eq!(ctl.state().variables[0].id, 10);
    assert_eq!(ctl.next_result().await, Some(ResultOutcome::Stale));
    assert_eq!(ctl.state().variables.len(), 1);
    assert_eq!(ctl.state().variables[0].id, 10);
    assert!(!ctl.state().refreshing);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
/// What: Failures settle the request and leave the list retryable
///
/// - Input: Source that always fails
/// - Output: `Failed`, nothing loaded, not refreshing, not at end; `Refresh` issues a new request
async fn failed_fetch_settles_and_refresh_retries() {
    let mut ctl = ListController::mount(
        ListConfig::new(StructRef::new("person")),
        Arc::new(FailingSource),
    );
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Failed));
    let st = ctl.state();
    assert!(st.variables.is_empty());
    assert!(!st.refreshing);
    assert!(!st.reached_end);
    let before = ctl.latest_query_id();
    let id = ctl.dispatch(Action::Refresh).expect("refresh re-fetches");
    assert!(id > before);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Failed));
}

#[tokio::test]
/// What: Refresh re-fetches page 0 even when no query field changed
///
/// - Input: Loaded list; `Refresh`
/// - Output: A second source call and the same first page
async fn refresh_refetches_unchanged_query() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = SlowActiveSource {
        inner: MemorySource::new(people(3)),
        delay: Duration::ZERO,
        calls: Arc::clone(&calls),
    };
    let mut ctl = ListController::mount(ListConfig::new(StructRef::new("person")), Arc::new(source));
    ctl.settle().await;
    assert_eq!(ctl.dispatch(Action::SetLayout("table".into())), None);
    assert!(ctl.dispatch(Action::Refresh).is_some());
    assert!(ctl.state().variables.is_empty());
    ctl.settle().await;
    assert_eq!(ctl.state().variables.len(), 3);
    assert_eq!(ctl.state().layout, "table");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
/// What: An early stale result keeps the newer request outstanding
///
/// - Input: Archived mount (fast), then switch to active (delayed 100ms)
/// - Output: The archived page is stale, `refreshing` stays set and paging is blocked;
///   the active page commits afterwards
async fn stale_result_keeps_newer_request_outstanding() {
    let mut data = people(3);
    data.push(person(10, false));
    let calls = Arc::new(AtomicUsize::new(0));
    let source = SlowActiveSource {
        inner: MemorySource::new(data),
        delay: Duration::from_millis(100),
        calls: Arc::clone(&calls),
    };
    let mut cfg = ListConfig::new(StructRef::new("person"));
    cfg.active = false;
    let mut ctl = ListController::mount(cfg, Arc::new(source));
    ctl.dispatch(Action::SetActive(true));

    assert_eq!(ctl.next_result().await, Some(ResultOutcome::Stale));
    assert!(ctl.state().refreshing);
    assert!(ctl.state().variables.is_empty());
    assert_eq!(ctl.dispatch(Action::AdvanceOffset), None);

    assert_eq!(ctl.next_result().await, Some(ResultOutcome::Committed { count: 3 }));
    assert!(!ctl.state().refreshing);
    assert_eq!(ctl.state().offset, 0);
}

#[tokio::test]
/// What: Scrolling while a refreshed page 0 loads does not skip it
///
/// - Input: limit 2, 6 persons; settle, `Refresh`, `AdvanceOffset`
/// - Output: Advance ignored; page 0 ([1, 2]) loads at offset 0
async fn refresh_then_scroll_keeps_page_zero() {
    let mut cfg = ListConfig::new(StructRef::new("person"));
    cfg.limit = 2;
    let mut ctl = ListController::mount(cfg, Arc::new(MemorySource::new(people(6))));
    ctl.settle().await;
    assert!(ctl.dispatch(Action::Refresh).is_some());
    assert!(ctl.state().refreshing);
    assert_eq!(ctl.dispatch(Action::AdvanceOffset), None);
    ctl.settle().await;
    let ids: Vec<u64> = ctl.state().variables.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(ctl.state().offset, 0);
}

#[tokio::test]
/// What: A page that failed once is loaded by the next scroll
///
/// - Input: limit 2, 6 persons; the first request at offset 2 fails
/// - Output: First advance fails; the next advance re-requests offset 2; paging on loads all six
async fn scroll_retries_failed_page() {
    let mut cfg = ListConfig::new(StructRef::new("person"));
    cfg.limit = 2;
    let source = FailOnceSource {
        inner: MemorySource::new(people(6)),
        fail_offset: 2,
        failed: Arc::new(AtomicBool::new(false)),
    };
    let mut ctl = ListController::mount(cfg, Arc::new(source));
    ctl.settle().await;

    ctl.dispatch(Action::AdvanceOffset);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Failed));
    assert_eq!(ctl.state().offset, 2);
    assert_eq!(ctl.state().variables.len(), 2);

    assert!(ctl.dispatch(Action::AdvanceOffset).is_some());
    assert_eq!(ctl.state().offset, 2);
    assert_eq!(ctl.settle().await, Some(ResultOutcome::Committed { count: 2 }));

    while !ctl.state().reached_end {
        ctl.dispatch(Action::AdvanceOffset);
        ctl.settle().await;
    }
    let ids: Vec<u64> = ctl.state().variables.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}
