// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Submit-then-poll extraction against a remote read service.
//
// Progress milestones: 10 before submitting, 30 once the service accepts the
// image, then 30..90 across the poll budget, and 100 when done.

use std::time::Duration;

use lesewerk_core::ExtractionConfig;
use lesewerk_core::error::{LesewerkError, Result};
use tracing::{debug, info, instrument, warn};

use crate::provider::{Progress, TextExtractor};
use crate::read_api::{
    ReadApi, ReadResult, ReadStatus, SubmitResponse, is_success, operation_id, status_to_error,
};
use crate::retry::{RetryConfig, RetryDecision};

/// Poll budget for one extraction.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Number of result polls before the job counts as timed out.
    pub max_attempts: u32,
    /// Wait before each poll.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::from(&ExtractionConfig::default())
    }
}

impl From<&ExtractionConfig> for PollConfig {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            max_attempts: config.max_poll_attempts.max(1),
            interval: config.poll_interval(),
        }
    }
}

/// [`TextExtractor`] driving a [`ReadApi`] through submit, poll, and result.
#[derive(Debug)]
pub struct PollingExtractor<A> {
    api: A,
    poll: PollConfig,
    retry: RetryConfig,
}

impl<A: ReadApi> PollingExtractor<A> {
    pub fn new(api: A, config: &ExtractionConfig) -> Self {
        Self {
            api,
            poll: PollConfig::from(config),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Override how transient submission failures are retried.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn submit_with_retry(&self, image: &[u8]) -> Result<SubmitResponse> {
        let mut attempt = 0;
        loop {
            let err = match self.api.submit(image).await {
                Ok(response) if is_success(response.status) => return Ok(response),
                Ok(response) => status_to_error(response.status, &response.body),
                Err(err) => err,
            };

            match self.retry.decide(&err, attempt) {
                RetryDecision::RetryAfter(delay) => {
                    warn!(error = %err, attempt, "submission failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp(_) | RetryDecision::Exhausted => return Err(err),
            }
        }
    }

    async fn submit_and_poll(
        &self,
        image: &[u8],
        progress: Progress<'_>,
    ) -> Result<(ReadResult, u32)> {
        let response = self.submit_with_retry(image).await?;
        progress(30);

        let location = response
            .operation_location
            .as_deref()
            .ok_or(LesewerkError::MissingOperation)?;
        let operation = operation_id(location)?;
        info!(operation, "read operation started");

        self.poll_until_done(operation, progress).await
    }

    async fn poll_until_done(
        &self,
        operation: &str,
        progress: Progress<'_>,
    ) -> Result<(ReadResult, u32)> {
        let max = self.poll.max_attempts;
        let mut attempts = 0u32;

        loop {
            tokio::time::sleep(self.poll.interval).await;

            let response = self.api.fetch(operation).await?;
            if !is_success(response.status) {
                return Err(status_to_error(response.status, &response.body));
            }
            let result = ReadResult::parse(&response.body)?;
            attempts += 1;

            debug!(attempts, status = ?result.status, "poll");
            progress(poll_progress(attempts, max));

            if !result.status.is_pending() || attempts >= max {
                return Ok((result, attempts));
            }
        }
    }
}

impl<A: ReadApi> TextExtractor for PollingExtractor<A> {
    #[instrument(skip_all, fields(image_len = image.len()))]
    async fn extract(&self, image: &[u8], progress: Progress<'_>) -> Result<String> {
        progress(10);
        let outcome = self.submit_and_poll(image, progress).await;
        progress(100);

        let (result, attempts) = outcome?;
        match result.status {
            ReadStatus::Succeeded => {
                let text = result.text();
                if text.is_empty() {
                    return Err(LesewerkError::NoTextDetected);
                }
                info!(chars = text.len(), "text extracted");
                Ok(text)
            }
            ReadStatus::Failed => Err(LesewerkError::OperationFailed),
            ReadStatus::NotStarted | ReadStatus::Running => {
                warn!(attempts, "read operation timed out");
                Err(LesewerkError::TimedOut { attempts })
            }
        }
    }
}

/// Percentage after `attempts` of `max` polls: 30 plus a 60-point share.
fn poll_progress(attempts: u32, max: u32) -> u8 {
    let share = u64::from(attempts.min(max)) * 60 / u64::from(max.max(1));
    30 + share as u8
}
