// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote read-service protocol.
//
// A read service works in two steps:
//   1. POST the image to `vision/v3.2/read/analyze`; the response carries an
//      `operation-location` header naming the job.
//   2. GET `vision/v3.2/read/analyzeResults/{id}` until the job leaves the
//      `notStarted`/`running` states.
//
// The HTTP transport stays behind [`ReadApi`]; this module owns URLs, status
// mapping, and the result payload.

use std::future::Future;

use lesewerk_core::ExtractionConfig;
use lesewerk_core::error::{LesewerkError, Result};
use serde::Deserialize;

/// Header carrying the subscription key.
pub const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
/// Response header naming the submitted operation.
pub const OPERATION_LOCATION_HEADER: &str = "operation-location";

const ANALYZE_PATH: &str = "vision/v3.2/read/analyze";
const RESULTS_PATH: &str = "vision/v3.2/read/analyzeResults";

/// Raw response to an image submission.
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
    /// Value of the `operation-location` header, if present.
    pub operation_location: Option<String>,
}

/// Raw response to a result poll.
#[derive(Debug, Clone)]
pub struct PollResponse {
    pub status: u16,
    pub body: String,
}

/// Transport for a remote read service.
///
/// Errors returned here are transport failures (connection refused, TLS, ...).
/// Non-2xx responses come back as values and are mapped by the caller.
pub trait ReadApi: Send + Sync {
    fn submit(&self, image: &[u8]) -> impl Future<Output = Result<SubmitResponse>> + Send;

    fn fetch(&self, operation_id: &str) -> impl Future<Output = Result<PollResponse>> + Send;
}

/// Resolved URLs and key for a read service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadEndpoint {
    base: String,
    key: String,
}

impl ReadEndpoint {
    /// Build from configuration, failing with
    /// [`LesewerkError::MissingCredentials`] when endpoint or key is unset.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let (base, key) = config.credentials()?;
        Ok(Self { base, key })
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{ANALYZE_PATH}", self.base)
    }

    pub fn result_url(&self, operation_id: &str) -> String {
        format!("{}{RESULTS_PATH}/{operation_id}", self.base)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Operation id from an `operation-location` value: its last path segment.
pub fn operation_id(location: &str) -> Result<&str> {
    location
        .trim()
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or(LesewerkError::MissingOperation)
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a non-2xx status to the matching error.
pub fn status_to_error(status: u16, body: &str) -> LesewerkError {
    match status {
        401 => LesewerkError::Unauthorized,
        403 => LesewerkError::Forbidden,
        400 => LesewerkError::InvalidImage(body.trim().to_owned()),
        429 => LesewerkError::RateLimited,
        _ => LesewerkError::Remote {
            status,
            detail: body.trim().to_owned(),
        },
    }
}

/// State of a read operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

impl ReadStatus {
    /// Still waiting on the service.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::NotStarted | Self::Running)
    }
}

/// Body of a result poll.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResult {
    pub status: ReadStatus,
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    #[serde(default)]
    pub read_results: Vec<ReadPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadPage {
    #[serde(default)]
    pub lines: Vec<ReadLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadLine {
    pub text: String,
}

impl ReadResult {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Every recognised line across all pages, joined with spaces.
    pub fn text(&self) -> String {
        let Some(result) = &self.analyze_result else {
            return String::new();
        };

        let lines: Vec<&str> = result
            .read_results
            .iter()
            .flat_map(|page| page.lines.iter())
            .map(|line| line.text.as_str())
            .collect();
        lines.join(" ").trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let config = ExtractionConfig {
            endpoint: Some("https://vision.example.com".into()),
            api_key: Some("k".into()),
            ..Default::default()
        };
        let endpoint = ReadEndpoint::from_config(&config).unwrap();
        assert_eq!(
            endpoint.analyze_url(),
            "https://vision.example.com/vision/v3.2/read/analyze"
        );
        assert_eq!(
            endpoint.result_url("abc-123"),
            "https://vision.example.com/vision/v3.2/read/analyzeResults/abc-123"
        );
        assert_eq!(endpoint.key(), "k");
    }

    #[test]
    fn endpoint_requires_credentials() {
        let err = ReadEndpoint::from_config(&ExtractionConfig::default()).unwrap_err();
        assert!(matches!(err, LesewerkError::MissingCredentials));
    }

    #[test]
    fn operation_id_is_last_segment() {
        let location =
            "https://vision.example.com/vision/v3.2/read/analyzeResults/0f3c-77aa";
        assert_eq!(operation_id(location).unwrap(), "0f3c-77aa");
    }

    #[test]
    fn empty_operation_location_is_an_error() {
        assert!(matches!(
            operation_id(""),
            Err(LesewerkError::MissingOperation)
        ));
        assert!(matches!(
            operation_id("https://x/analyzeResults/"),
            Err(LesewerkError::MissingOperation)
        ));
    }

    #[test]
    fn statuses_map_to_errors() {
        assert!(matches!(status_to_error(401, ""), LesewerkError::Unauthorized));
        assert!(matches!(status_to_error(403, ""), LesewerkError::Forbidden));
        assert!(matches!(
            status_to_error(400, " bad image "),
            LesewerkError::InvalidImage(detail) if detail == "bad image"
        ));
        assert!(matches!(status_to_error(429, ""), LesewerkError::RateLimited));
        assert!(matches!(
            status_to_error(503, "busy"),
            LesewerkError::Remote { status: 503, .. }
        ));
        assert!(is_success(202));
        assert!(!is_success(302));
    }

    #[test]
    fn result_text_joins_lines_across_pages() {
        let body = r#"{
            "status": "succeeded",
            "analyzeResult": {
                "readResults": [
                    { "lines": [ { "text": "Welcome back!" }, { "text": "Sign in" } ] },
                    { "lines": [ { "text": "Forgot password?" } ] }
                ]
            }
        }"#;
        let result = ReadResult::parse(body).unwrap();
        assert_eq!(result.status, ReadStatus::Succeeded);
        assert_eq!(result.text(), "Welcome back! Sign in Forgot password?");
    }

    #[test]
    fn running_result_without_payload() {
        let result = ReadResult::parse(r#"{ "status": "running" }"#).unwrap();
        assert!(result.status.is_pending());
        assert_eq!(result.text(), "");
    }

    #[test]
    fn not_started_is_pending() {
        let result = ReadResult::parse(r#"{ "status": "notStarted" }"#).unwrap();
        assert!(result.status.is_pending());
        assert!(!ReadStatus::Failed.is_pending());
    }
}
