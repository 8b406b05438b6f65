use crate::domain::model::RepositoryRecord;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    repos: Arc<Vec<RepositoryRecord>>,
    fetched_at: DateTime<Utc>,
}

/// Per-account repository lists with a freshness window. Clones share
/// the same entries.
#[derive(Debug, Clone)]
pub struct RepositoryCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    freshness: TimeDelta,
}

impl Default for RepositoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS)
    }
}

impl RepositoryCache {
    pub fn new(freshness: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            freshness: TimeDelta::from_std(freshness).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Entry for `account` if it was stored less than the window ago.
    pub async fn get_fresh(
        &self,
        account: &str,
        now: DateTime<Utc>,
    ) -> Option<Arc<Vec<RepositoryRecord>>> {
        let entries = self.entries.lock().await;
        let entry = entries.get(account)?;
        if now.signed_duration_since(entry.fetched_at) < self.freshness {
            Some(Arc::clone(&entry.repos))
        } else {
            None
        }
    }

    pub async fn insert(
        &self,
        account: &str,
        repos: Arc<Vec<RepositoryRecord>>,
        fetched_at: DateTime<Utc>,
    ) {
        let mut entries = self.entries.lock().await;
        entries.insert(account.to_string(), CacheEntry { repos, fetched_at });
    }

    pub async fn invalidate(&self, account: &str) {
        self.entries.lock().await.remove(account);
    }
}
