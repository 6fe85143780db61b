//! Read cache shared by every page.
//!
//! Reads go through [`QueryClient::fetch_with_policy`], which serves fresh
//! entries from memory, joins an identical request already in flight, and
//! retries retryable failures. Writes go through [`QueryClient::mutate`],
//! which never retries and invalidates the given key prefixes on success.
//! Invalidation only marks entries stale and notifies subscribers; the
//! refetch happens when a page next reads the key.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::{debug, error, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{cell::RefCell, collections::HashMap, fmt, future::Future, rc::Rc};

use crate::api::types::{ApiError, AttendanceStatus};

pub const DEFAULT_STALE_SECS: i64 = 30;
pub const DEFAULT_RETRY: u32 = 1;

/// Ordered path segments identifying a cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn employees() -> Self {
        Self::new(["employees"])
    }

    pub fn employee(id: &str) -> Self {
        Self::new(["employee", id])
    }

    pub fn attendance() -> Self {
        Self::new(["attendance"])
    }

    pub fn attendance_for_date(date: NaiveDate) -> Self {
        Self::new(["attendance".to_string(), date.to_string()])
    }

    pub fn attendance_for_employee(id: &str) -> Self {
        Self::new(["attendance", "employee", id])
    }

    pub fn attendance_report(status: Option<AttendanceStatus>) -> Self {
        let status = status.map(|s| s.as_str()).unwrap_or("ALL");
        Self::new(["attendance", "reports", status])
    }

    pub fn dashboard() -> Self {
        Self::new(["dashboard"])
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0.iter().zip(&prefix.0).all(|(a, b)| a == b)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    pub stale_time: Duration,
    pub retry: u32,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::seconds(DEFAULT_STALE_SECS),
            retry: DEFAULT_RETRY,
        }
    }
}

struct CacheEntry {
    data: Value,
    fetched_at: DateTime<Utc>,
    invalidated: bool,
}

type InFlight = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;
type Listener = Rc<dyn Fn()>;
type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, (u64, InFlight)>,
    next_request_id: u64,
}

#[derive(Clone)]
pub struct QueryClient {
    state: Rc<RefCell<CacheState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    policy: QueryPolicy,
    clock: Clock,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_policy(QueryPolicy::default())
    }

    pub fn with_policy(policy: QueryPolicy) -> Self {
        Self {
            state: Rc::new(RefCell::new(CacheState::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            policy,
            clock: Rc::new(Utc::now),
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Called after every invalidation.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.fetch_with_policy(key, self.policy, fetcher).await
    }

    pub async fn fetch_with_policy<T, F, Fut>(
        &self,
        key: QueryKey,
        policy: QueryPolicy,
        fetcher: F,
    ) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if let Some(data) = self.fresh_data(&key, policy.stale_time) {
            debug!("query {} served from cache", key);
            return decode(&key, data);
        }
        let request = self.join_or_start(key.clone(), policy.retry, fetcher);
        let data = request.await?;
        decode(&key, data)
    }

    pub async fn mutate<T, Fut>(&self, request: Fut, invalidates: &[QueryKey]) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        match request.await {
            Ok(value) => {
                self.invalidate_many(invalidates);
                Ok(value)
            }
            Err(err) => {
                error!("[ MUTATION ERROR ] {}", err);
                Err(err)
            }
        }
    }

    /// Marks every entry under `prefix` stale and forgets matching in-flight reads.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let count = self.mark_stale(prefix);
        self.notify();
        count
    }

    pub fn invalidate_many(&self, prefixes: &[QueryKey]) {
        if prefixes.is_empty() {
            return;
        }
        for prefix in prefixes {
            self.mark_stale(prefix);
        }
        self.notify();
    }

    fn mark_stale(&self, prefix: &QueryKey) -> usize {
        let mut state = self.state.borrow_mut();
        state.in_flight.retain(|key, _| !key.starts_with(prefix));
        let mut count = 0;
        for (key, entry) in state.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        debug!("invalidated {} cached queries under {}", count, prefix);
        count
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    fn fresh_data(&self, key: &QueryKey, stale_time: Duration) -> Option<Value> {
        let now = (self.clock)();
        let state = self.state.borrow();
        state
            .entries
            .get(key)
            .filter(|entry| !entry.invalidated && now - entry.fetched_at < stale_time)
            .map(|entry| entry.data.clone())
    }

    fn join_or_start<T, F, Fut>(&self, key: QueryKey, retry: u32, fetcher: F) -> InFlight
    where
        T: Serialize + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let existing = self
            .state
            .borrow()
            .in_flight
            .get(&key)
            .map(|(_, request)| request.clone());
        if let Some(request) = existing {
            debug!("query {} joined in-flight request", key);
            return request;
        }

        let request_id = {
            let mut state = self.state.borrow_mut();
            state.next_request_id += 1;
            state.next_request_id
        };
        let state = Rc::clone(&self.state);
        let clock = Rc::clone(&self.clock);
        let task_key = key.clone();
        let request = async move {
            let result = fetch_with_retry(&task_key, retry, &fetcher)
                .await
                .and_then(|data| {
                    serde_json::to_value(data).map_err(|e| {
                        ApiError::parse(format!("Failed to cache {}: {}", task_key, e))
                    })
                });
            let mut state = state.borrow_mut();
            let still_current = matches!(
                state.in_flight.get(&task_key),
                Some((id, _)) if *id == request_id
            );
            if still_current {
                state.in_flight.remove(&task_key);
                if let Ok(data) = &result {
                    state.entries.insert(
                        task_key,
                        CacheEntry {
                            data: data.clone(),
                            fetched_at: clock(),
                            invalidated: false,
                        },
                    );
                }
            }
            result
        }
        .boxed_local()
        .shared();

        self.state
            .borrow_mut()
            .in_flight
            .insert(key, (request_id, request.clone()));
        request
    }
}

fn decode<T: DeserializeOwned>(key: &QueryKey, data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::parse(format!("Failed to decode cached {}: {}", key, e)))
}

async fn fetch_with_retry<T, F, Fut>(key: &QueryKey, retry: u32, fetcher: &F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match fetcher().await {
            Ok(data) => return Ok(data),
            Err(err) if attempt < retry && err.is_retryable() => {
                attempt += 1;
                warn!("query {} failed ({}); retry {}/{}", key, err, attempt, retry);
                retry_delay(attempt).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn retry_delay(attempt: u32) {
    gloo_timers::future::TimeoutFuture::new(1_000 * attempt).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn retry_delay(_attempt: u32) {}
