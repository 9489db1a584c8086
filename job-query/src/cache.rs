use std::{
    any::Any,
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::{QueryError, QueryKey, Result};

type CachedValue = Arc<dyn Any + Send + Sync>;
type SharedFetch = Shared<BoxFuture<'static, Result<CachedValue>>>;

struct InFlight {
    id: u64,
    fetch: SharedFetch,
}

#[derive(Default)]
struct Entry {
    data: Option<CachedValue>,
    stale: bool,
    in_flight: Option<InFlight>,
    error: Option<QueryError>,
}

#[derive(Default)]
struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    next_fetch_id: AtomicU64,
}

/// Cache of server responses keyed by [`QueryKey`].
///
/// Fresh entries are served without I/O, concurrent readers of one key share
/// a single request, and invalidated entries are refetched on the next read.
/// Entries are only written by a completed fetch or cleared by invalidation.
/// Cloning yields another handle to the same cache.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, value: CachedValue) -> Result<Arc<T>> {
    value
        .downcast::<T>()
        .map_err(|_| QueryError::TypeMismatch(key.clone()))
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        // entries stay consistent across a panic, every write is a single assignment
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve `key`, calling `fetcher` only when there is neither fresh data
    /// nor a request already in flight for it.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = job_api::Result<T>> + Send + 'static,
    {
        let (id, fetch) = {
            let mut entries = self.entries();
            let entry = entries.entry(key.clone()).or_default();
            if let (Some(data), false) = (&entry.data, entry.stale) {
                log::debug!("Cache hit for {}", key);
                return downcast(&key, data.clone());
            }
            match &entry.in_flight {
                Some(in_flight) => {
                    log::debug!("Joining in-flight request for {}", key);
                    (in_flight.id, in_flight.fetch.clone())
                }
                None => {
                    let id = self.inner.next_fetch_id.fetch_add(1, Ordering::Relaxed);
                    log::debug!("Fetching {}", key);
                    let fetch = fetcher()
                        .map(|result| {
                            result
                                .map(|data| Arc::new(data) as CachedValue)
                                .map_err(QueryError::from)
                        })
                        .boxed()
                        .shared();
                    entry.in_flight = Some(InFlight {
                        id,
                        fetch: fetch.clone(),
                    });
                    (id, fetch)
                }
            }
        };

        let result = fetch.await;
        self.settle(&key, id, &result);
        downcast(&key, result?)
    }

    /// Store the outcome of fetch `id`, unless the entry moved on while it was in flight
    fn settle(&self, key: &QueryKey, id: u64, result: &Result<CachedValue>) {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        match &entry.in_flight {
            Some(in_flight) if in_flight.id == id => {}
            _ => {
                log::debug!("Response for {} no longer current, not cached", key);
                return;
            }
        }
        entry.in_flight = None;
        match result {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.stale = false;
                entry.error = None;
            }
            Err(e) => {
                log::debug!("Request for {} failed: {}", key, e);
                entry.error = Some(e.clone());
            }
        }
    }

    /// Mark every entry under `prefix` stale, returns how many were hit.
    /// Requests in flight for those entries will not repopulate the cache.
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries();
        let mut invalidated = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                entry.in_flight = None;
                invalidated += 1;
            }
        }
        log::debug!("Invalidated {} queries under {}", invalidated, prefix);
        invalidated
    }

    /// Last successfully fetched data for `key`, fresh or stale
    pub fn get_query_data<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entries = self.entries();
        let data = entries.get(key)?.data.clone()?;
        downcast(key, data).ok()
    }

    /// `None` when nothing was ever fetched for `key`
    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        entry.data.as_ref().map(|_| entry.stale)
    }

    pub fn last_error(&self, key: &QueryKey) -> Option<QueryError> {
        self.entries().get(key)?.error.clone()
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries()
            .get(key)
            .map(|entry| entry.in_flight.is_some())
            .unwrap_or(false)
    }
}
