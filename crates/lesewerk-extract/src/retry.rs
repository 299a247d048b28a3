// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backoff for image submission.
//
// Throttling and server-side hiccups are retried with exponential backoff.
// Bad keys, bad images, and other errors a retry can't fix are returned
// straight away.

use std::io::ErrorKind;
use std::time::Duration;

use lesewerk_core::error::LesewerkError;
use lesewerk_core::types::ErrorClass;
use tracing::{debug, warn};

/// Submission retry policy.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry; doubles with every further one.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

/// Outcome of [`RetryConfig::decide`].
#[derive(Debug, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter(Duration),
    /// A retry can't help; the class says who has to act.
    GiveUp(ErrorClass),
    /// Transient, but the retry budget is spent.
    Exhausted,
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// What to do after failed attempt number `attempt` (0-based).
    pub fn decide(&self, err: &LesewerkError, attempt: u32) -> RetryDecision {
        let class = classify_error(err);
        if class != ErrorClass::Transient {
            debug!(?class, "not retrying");
            return RetryDecision::GiveUp(class);
        }
        if attempt >= self.max_retries {
            warn!(attempt, max_retries = self.max_retries, "retries used up");
            return RetryDecision::Exhausted;
        }
        let delay = self.delay_for(attempt);
        debug!(attempt, delay_ms = delay.as_millis() as u64, "backing off");
        RetryDecision::RetryAfter(delay)
    }

    /// `base * 2^attempt` plus jitter below `base`, capped at `max_delay`.
    fn delay_for(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_millis() as u64;
        let doubled = base.saturating_mul(1 << attempt.min(16));
        let jitter = spread(attempt) % base.max(1);
        let cap = self.max_delay.as_millis() as u64;
        Duration::from_millis(doubled.saturating_add(jitter).min(cap))
    }
}

// Knuth's multiplicative hash; deterministic so tests stay stable.
fn spread(attempt: u32) -> u64 {
    u64::from(attempt).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 11
}

/// Who, if anyone, can fix `err`.
pub fn classify_error(err: &LesewerkError) -> ErrorClass {
    use LesewerkError as E;

    match err {
        E::RateLimited
        | E::Transport(_)
        | E::MissingOperation
        | E::OperationFailed
        | E::TimedOut { .. }
        | E::OcrError(_) => ErrorClass::Transient,
        E::Remote { status, .. } if *status >= 500 => ErrorClass::Transient,

        E::MissingCredentials
        | E::Unauthorized
        | E::Forbidden
        | E::ImageTooLarge { .. }
        | E::Config(_) => ErrorClass::UserAction,

        E::Remote { .. }
        | E::InvalidImage(_)
        | E::UnsupportedImage(_)
        | E::ImageError(_)
        | E::NoTextDetected
        | E::Serialization(_) => ErrorClass::Permanent,

        E::Io(io) => match io.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => ErrorClass::UserAction,
            _ => ErrorClass::Transient,
        },
    }
}
