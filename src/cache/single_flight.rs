use super::store::CacheStore;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

type Outcome<T, E> = Result<Arc<T>, E>;
type SharedFetch<T, E> = Shared<BoxFuture<'static, Outcome<T, E>>>;

/// Coordinates cache lookups and upstream fetches so that at most one
/// upstream call is in flight per cache key at any time.
///
/// Concurrent `resolve` calls for the same key during a miss window all
/// await the same spawned fetch and observe its single outcome, success or
/// failure. The fetch runs on its own task, so a waiter that is dropped does
/// not cancel the fetch for the remaining waiters. A failed fetch is never
/// written to the cache.
pub struct FetchCoordinator<T, E> {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    in_flight: Arc<Mutex<HashMap<String, SharedFetch<T, E>>>>,
}

impl<T, E> FetchCoordinator<T, E>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
    E: Clone + Display + From<tokio::task::JoinError> + Send + Sync + 'static,
{
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Return the cached value for `key`, or run `fetch_fn` to produce it.
    ///
    /// A cache read failure is logged and treated as a miss; a cache write
    /// failure is logged and the fresh value is served uncached. Neither
    /// fails the request.
    pub async fn resolve<F, Fut>(&self, key: &str, fetch_fn: F) -> Outcome<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        match self.store.get(key).await {
            Ok(Some(payload)) => match serde_json::from_str::<T>(&payload) {
                Ok(value) => {
                    debug!(key, "cache hit");
                    return Ok(Arc::new(value));
                }
                Err(err) => warn!(key, %err, "cache payload undecodable, refetching"),
            },
            Ok(None) => {}
            Err(err) => warn!(key, %err, "cache read failed, falling through to upstream"),
        }

        let fetch = {
            let mut in_flight = self
                .in_flight
                .lock()
                .expect("in-flight registry lock poisoned");
            match in_flight.get(key) {
                Some(existing) => {
                    debug!(key, "joining in-flight fetch");
                    existing.clone()
                }
                None => {
                    debug!(key, "cache miss, starting upstream fetch");
                    let fetch = self.spawn_fetch(key.to_string(), fetch_fn());
                    in_flight.insert(key.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    fn spawn_fetch(
        &self,
        key: String,
        fetch: impl Future<Output = Result<T, E>> + Send + 'static,
    ) -> SharedFetch<T, E> {
        let store = Arc::clone(&self.store);
        let in_flight = Arc::clone(&self.in_flight);
        let ttl = self.ttl;

        let task = tokio::spawn(async move {
            let outcome = match fetch.await {
                Ok(value) => {
                    match serde_json::to_string(&value) {
                        Ok(payload) => {
                            if let Err(err) = store.set(&key, &payload, ttl).await {
                                warn!(%key, %err, "cache write failed, serving uncached result");
                            }
                        }
                        Err(err) => warn!(%key, %err, "cache payload unserializable, not caching"),
                    }
                    Ok(Arc::new(value))
                }
                Err(err) => Err(err),
            };
            // The marker comes out only after the cache write, so a
            // latecomer either joins this fetch or hits the fresh entry.
            in_flight
                .lock()
                .expect("in-flight registry lock poisoned")
                .remove(&key);
            outcome
        });

        task.map(|joined| joined.unwrap_or_else(|err| Err(E::from(err))))
            .boxed()
            .shared()
    }
}
