//! Rate limit telemetry and the shared back-off gate
//!
//! Every paged query selects `rateLimit { ... }`. The snapshot is handed to the
//! [`QuotaGovernor`] after the page arrives; once `remaining` drops below the
//! threshold the gate closes until `resetAt`, and every request issued through
//! the client waits on it. One governor is shared by all fetches of a client
//! because quota belongs to the credential, not to any single fetch.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::quota;

/// Quota block returned alongside a page
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSnapshot {
    pub cost: i64,
    pub limit: i64,
    #[serde(default)]
    pub node_count: i64,
    pub remaining: i64,
    pub reset_at: DateTime<Utc>,
    pub used: i64,
}

/// Time left until `reset_at`, zero when it has already passed
pub fn backoff_duration(reset_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (reset_at - now).to_std().unwrap_or(Duration::ZERO)
}

/// Single authoritative "do not exceed quota" gate
#[derive(Debug)]
pub struct QuotaGovernor {
    threshold: i64,
    resume_at: Mutex<Option<DateTime<Utc>>>,
}

impl Default for QuotaGovernor {
    fn default() -> Self {
        Self::new(quota::THRESHOLD)
    }
}

impl QuotaGovernor {
    pub fn new(threshold: i64) -> Self {
        Self {
            threshold,
            resume_at: Mutex::new(None),
        }
    }

    /// Record a snapshot; closes the gate until `reset_at` when quota is low
    pub fn observe(&self, snapshot: &QuotaSnapshot) {
        debug!(
            "Rate limit: cost {}, {}/{} remaining, resets at {}",
            snapshot.cost, snapshot.remaining, snapshot.limit, snapshot.reset_at
        );

        if snapshot.remaining >= self.threshold {
            return;
        }

        warn!(
            "Rate limit: {}/{} remaining, resets at {}; suspending requests",
            snapshot.remaining, snapshot.limit, snapshot.reset_at
        );

        let mut resume_at = self.resume_at.lock().unwrap_or_else(|e| e.into_inner());
        *resume_at = match *resume_at {
            Some(current) if current > snapshot.reset_at => Some(current),
            _ => Some(snapshot.reset_at),
        };
    }

    /// How long a request issued at `now` has to wait
    pub fn pending_delay(&self, now: DateTime<Utc>) -> Duration {
        let resume_at = self.resume_at.lock().unwrap_or_else(|e| e.into_inner());
        match *resume_at {
            Some(at) => backoff_duration(at, now),
            None => Duration::ZERO,
        }
    }

    /// Block until the gate is open
    pub async fn wait_ready(&self) {
        loop {
            let delay = self.pending_delay(Utc::now());
            if delay.is_zero() {
                return;
            }
            warn!("Waiting {}s for rate limit reset", delay.as_secs_f64().ceil());
            tokio::time::sleep(delay).await;
        }
    }
}
