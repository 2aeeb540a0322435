//! Shared fixtures for list integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use futures::FutureExt;
use futures::future::BoxFuture;
use varlist::sources::{FetchPage, MemorySource, PageQuery, Result};
use varlist::state::Variable;

/// What: Build a person variable with a name and age.
///
/// Inputs:
/// - `id`: Variable id
/// - `active`: Active flag
///
/// Output:
/// - `Variable` of struct "person" with `name` = "p{id}" and `age` = id
pub fn person(id: u64, active: bool) -> Variable {
    let ts = Utc
        .timestamp_opt(1_700_000_000 + i64::try_from(id).unwrap_or(0), 0)
        .single()
        .unwrap_or_default();
    Variable {
        id,
        struct_name: "person".into(),
        active,
        level: Some(u32::try_from(id % 3).unwrap_or(0)),
        created_at: ts,
        updated_at: ts,
        values: serde_json::json!({"name": format!("p{id}"), "age": id})
            .as_object()
            .cloned()
            .unwrap_or_default(),
    }
}

/// `count` active persons with ids 1..=count.
pub fn people(count: u64) -> Vec<Variable> {
    (1..=count).map(|id| person(id, true)).collect()
}

/// Source that counts calls and delays queries for active variables.
pub struct SlowActiveSource {
    /// Underlying data.
    pub inner: MemorySource,
    /// Delay applied when `query.active` is true.
    pub delay: Duration,
    /// Number of `fetch_page` calls.
    pub calls: Arc<AtomicUsize>,
}

impl FetchPage for SlowActiveSource {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<Vec<Variable>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.clone();
        let delay = if query.active {
            self.delay
        } else {
            Duration::ZERO
        };
        async move {
            tokio::time::sleep(delay).await;
            Ok(inner.query(&query))
        }
        .boxed()
    }
}

/// Source whose every fetch fails.
pub struct FailingSource;

impl FetchPage for FailingSource {
    fn fetch_page(&self, _query: PageQuery) -> BoxFuture<'static, Result<Vec<Variable>>> {
        let err: Box<dyn std::error::Error + Send + Sync> = "storage unavailable".into();
        async move { Err(err) }.boxed()
    }
}

/// Source that fails the first request at `fail_offset`, then serves `inner`.
pub struct FailOnceSource {
    /// Underlying data.
    pub inner: MemorySource,
    /// Offset whose first request fails.
    pub fail_offset: usize,
    /// Set once the failure has been served.
    pub failed: Arc<AtomicBool>,
}

impl FetchPage for FailOnceSource {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<Vec<Variable>>> {
        let fail = query.offset == self.fail_offset && !self.failed.swap(true, Ordering::SeqCst);
        let inner = self.inner.clone();
        async move {
            if fail {
                let err: Box<dyn std::error::Error + Send + Sync> = "connection reset".into();
                return Err(err);
            }
            Ok(inner.query(&query))
        }
        .boxed()
    }
}
