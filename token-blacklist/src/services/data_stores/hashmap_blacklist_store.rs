use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use crate::domain::{data_stores::BlacklistStore, jti::Jti};

/// Source of the current instant.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// In-memory blacklist with evict-on-read expiry. There is no background
/// sweep: stale entries stay in the map until their identifier is checked.
pub struct HashmapBlacklistStore {
    entries: RwLock<HashMap<Jti, DateTime<Utc>>>,
    clock: Clock,
}

impl HashmapBlacklistStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Stored expiration for `jti`, stale or not. Never evicts.
    pub async fn expiration(&self, jti: &Jti) -> Option<DateTime<Utc>> {
        self.entries.read().await.get(jti).copied()
    }

    /// Number of entries, including stale ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for HashmapBlacklistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlacklistStore for HashmapBlacklistStore {
    #[tracing::instrument(name = "Blacklisting token", skip_all, fields(jti = %jti))]
    async fn add(&self, jti: Jti, expires_at: Option<DateTime<Utc>>) {
        let expires_at = expires_at.unwrap_or_else(|| (self.clock)());

        tracing::debug!(%expires_at, "Storing blacklist entry");
        self.entries.write().await.insert(jti, expires_at);
    }

    #[tracing::instrument(name = "Checking blacklist", skip_all, fields(jti = %jti))]
    async fn is_blacklisted(&self, jti: &Jti) -> bool {
        let expires_at = match self.entries.read().await.get(jti) {
            Some(expires_at) => *expires_at,
            None => return false,
        };

        let now = (self.clock)();
        if expires_at >= now {
            tracing::debug!("Token is blacklisted");
            return true;
        }

        // The entry may have been overwritten since the read lock was released.
        let mut entries = self.entries.write().await;
        if let Some(stale) = entries.get(jti).copied().filter(|stale| *stale < now) {
            tracing::debug!(expires_at = %stale, "Evicting expired blacklist entry");
            entries.remove(jti);
        }
        false
    }
}
