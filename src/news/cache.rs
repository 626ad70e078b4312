use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::news::types::Article;

/// Entries older than this are treated as absent.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::MAX);
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = now.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    articles: Vec<Article>,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A fetched_at in the future (clock stepped back) counts as fresh.
        match now.signed_duration_since(self.fetched_at).to_std() {
            Ok(age) => age <= ttl,
            Err(_) => true,
        }
    }
}

/// Per-category article cache with lazy TTL expiry.
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_TTL, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, category: &str) -> Option<Vec<Article>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        let entry = entries.get(category)?;

        if entry.is_valid(now, self.ttl) {
            Some(entry.articles.clone())
        } else {
            debug!("cache entry for '{}' expired", category);
            None
        }
    }

    pub async fn set(&self, category: &str, articles: Vec<Article>) {
        let entry = CacheEntry {
            articles,
            fetched_at: self.clock.now(),
        };

        let mut entries = self.entries.write().await;
        entries.insert(category.to_string(), entry);
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
