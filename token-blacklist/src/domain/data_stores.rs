use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::jti::Jti;

/// Deny-list of revoked token identifiers.
///
/// Both operations are total: a store never rejects an identifier and
/// never reports a failure to the caller.
#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// Revoke `jti` until `expires_at`. Without an expiration the current
    /// instant is stored, so the entry is void on any strictly later check.
    /// Re-adding an identifier overwrites its expiration.
    async fn add(&self, jti: Jti, expires_at: Option<DateTime<Utc>>);

    /// Whether `jti` is currently revoked. An entry whose expiration lies
    /// in the past is removed as a side effect and reported as absent.
    async fn is_blacklisted(&self, jti: &Jti) -> bool;
}
