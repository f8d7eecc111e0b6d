use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const DEFAULT_CACHE_TTL: chrono::Duration = chrono::Duration::minutes(5);
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1024;

/// How long memoized upstream results live and how many are kept.
///
/// A `ttl` of `None` keeps entries for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Option<chrono::Duration>,
    pub max_entries: usize,
}

impl CachePolicy {
    #[must_use]
    pub fn from_secs(ttl_secs: u64, max_entries: usize) -> Self {
        let ttl = match ttl_secs {
            0 => None,
            secs => Some(
                i64::try_from(secs)
                    .ok()
                    .and_then(chrono::Duration::try_seconds)
                    .unwrap_or(chrono::Duration::MAX),
            ),
        };
        CachePolicy { ttl, max_entries }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        CachePolicy {
            ttl: Some(DEFAULT_CACHE_TTL),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

#[derive(Clone)]
struct Entry<T> {
    value: T,
    cached_time: DateTime<Utc>,
}

type CacheMap<T> = Arc<RwLock<HashMap<String, Entry<T>>>>;

/// Memoizes async calls by a string key built from the call's arguments.
/// Clones share the same storage.
#[derive(Clone)]
pub struct MemoCache<T> {
    map: CacheMap<T>,
    policy: CachePolicy,
}

impl<T: Clone> MemoCache<T> {
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        MemoCache {
            map: Arc::new(RwLock::new(HashMap::new())),
            policy,
        }
    }

    fn is_fresh(&self, entry: &Entry<T>, now: DateTime<Utc>) -> bool {
        match self.policy.ttl {
            Some(ttl) => now - entry.cached_time < ttl,
            None => true,
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let map = self.map.read().await;
        map.get(key)
            .filter(|entry| self.is_fresh(entry, Utc::now()))
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: String, value: T) {
        let now = Utc::now();
        let mut map = self.map.write().await;

        if !map.contains_key(&key) && map.len() >= self.policy.max_entries {
            map.retain(|_, entry| self.is_fresh(entry, now));
            while map.len() >= self.policy.max_entries {
                let oldest = map
                    .iter()
                    .min_by_key(|(_, entry)| entry.cached_time)
                    .map(|(k, _)| k.clone());
                match oldest {
                    Some(k) => {
                        map.remove(&k);
                    }
                    None => break,
                }
            }
        }

        map.insert(
            key,
            Entry {
                value,
                cached_time: now,
            },
        );
    }

    /// Returns the cached value for `key`, or runs `fetch` and stores its
    /// result. Errors are handed back to the caller and never stored.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: String, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get(&key).await {
            tracing::debug!(%key, "cache hit");
            return Ok(hit);
        }

        let value = fetch().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }

    #[cfg(test)]
    async fn backdate(&self, key: &str, by: chrono::Duration) {
        if let Some(entry) = self.map.write().await.get_mut(key) {
            entry.cached_time -= by;
        }
    }
}

/// Builds the memo key for a call: its name followed by its arguments.
#[must_use]
pub fn memo_key<A: std::fmt::Display>(call: &str, args: &[A]) -> String {
    if args.is_empty() {
        return call.to_string();
    }
    let joined = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{call}:{joined}")
}
