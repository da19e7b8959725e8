//! In-process login throttle.
//!
//! Tracks recent attempts per identifier and refuses new ones once too many
//! failed or too many were made inside the window. State lives only in
//! memory: it resets on restart and is not shared between processes, so it is
//! a courtesy guard for the login form, not rate limiting.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::shared::ClientError;

/// Limits applied per identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub max_failures: usize,
    pub max_attempts: usize,
    pub window: Duration,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            max_failures: 5,
            max_attempts: 10,
            window: Duration::minutes(5),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Attempt {
    at: DateTime<Utc>,
    success: bool,
}

#[derive(Debug, Default)]
pub struct LoginThrottle {
    policy: ThrottlePolicy,
    attempts: Mutex<HashMap<String, Vec<Attempt>>>,
}

impl LoginThrottle {
    pub fn new(policy: ThrottlePolicy) -> Self {
        Self {
            policy,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> &ThrottlePolicy {
        &self.policy
    }

    /// Refuse the attempt if the identifier is over either limit
    pub fn check(&self, identifier: &str, now: DateTime<Utc>) -> Result<(), ClientError> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|_| ClientError::session("throttle lock poisoned"))?;
        let Some(recent) = attempts.get_mut(&key(identifier)) else {
            return Ok(());
        };
        let cutoff = now - self.policy.window;
        recent.retain(|a| a.at > cutoff);

        let failures = recent.iter().filter(|a| !a.success).count();
        if failures >= self.policy.max_failures {
            return Err(ClientError::blocked(
                "Too many failed attempts. Please try again later.",
            ));
        }
        if recent.len() >= self.policy.max_attempts {
            return Err(ClientError::blocked(
                "Too many login attempts. Please try again later.",
            ));
        }
        Ok(())
    }

    /// Record an outcome. A success forgets the identifier's earlier failures.
    pub fn record(&self, identifier: &str, success: bool, now: DateTime<Utc>) {
        let Ok(mut attempts) = self.attempts.lock() else {
            tracing::warn!("[AUTH] Throttle lock poisoned, attempt not recorded");
            return;
        };
        let recent = attempts.entry(key(identifier)).or_default();
        if success {
            recent.retain(|a| a.success);
        }
        recent.push(Attempt { at: now, success });
    }
}

fn key(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}
