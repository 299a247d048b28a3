// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP transport for a remote read service.

use std::time::Duration;

use lesewerk_core::ExtractionConfig;
use lesewerk_core::error::{LesewerkError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request};
use tracing::debug;

use crate::poll::PollingExtractor;
use crate::read_api::{
    KEY_HEADER, OPERATION_LOCATION_HEADER, PollResponse, ReadApi, ReadEndpoint, SubmitResponse,
};

/// Per-request timeout; the poll loop bounds the job as a whole.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ReadApi`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpReadApi {
    client: Client,
    endpoint: ReadEndpoint,
}

impl HttpReadApi {
    pub fn new(endpoint: ReadEndpoint) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &ReadEndpoint {
        &self.endpoint
    }

    fn submit_request(&self, image: &[u8]) -> Result<Request> {
        self.client
            .post(self.endpoint.analyze_url())
            .header(KEY_HEADER, self.endpoint.key())
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .build()
            .map_err(transport)
    }

    fn fetch_request(&self, operation_id: &str) -> Result<Request> {
        self.client
            .get(self.endpoint.result_url(operation_id))
            .header(KEY_HEADER, self.endpoint.key())
            .build()
            .map_err(transport)
    }
}

impl ReadApi for HttpReadApi {
    async fn submit(&self, image: &[u8]) -> Result<SubmitResponse> {
        let response = self
            .client
            .execute(self.submit_request(image)?)
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let operation_location = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(transport)?;
        debug!(status, has_operation = operation_location.is_some(), "submitted image");

        Ok(SubmitResponse {
            status,
            body,
            operation_location,
        })
    }

    async fn fetch(&self, operation_id: &str) -> Result<PollResponse> {
        let response = self
            .client
            .execute(self.fetch_request(operation_id)?)
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok(PollResponse { status, body })
    }
}

/// A [`PollingExtractor`] talking HTTP to the service named in `config`.
///
/// Fails with [`LesewerkError::MissingCredentials`] when endpoint or key is
/// unset.
pub fn remote_extractor(config: &ExtractionConfig) -> Result<PollingExtractor<HttpReadApi>> {
    let api = HttpReadApi::new(ReadEndpoint::from_config(config)?)?;
    Ok(PollingExtractor::new(api, config))
}

fn transport(err: reqwest::Error) -> LesewerkError {
    LesewerkError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::PollConfig;
    use crate::provider::{TextExtractor, ignore_progress};
    use crate::retry::RetryConfig;

    fn config(endpoint: &str) -> ExtractionConfig {
        ExtractionConfig {
            endpoint: Some(endpoint.into()),
            api_key: Some("secret-key".into()),
            ..Default::default()
        }
    }

    fn api(endpoint: &str) -> HttpReadApi {
        HttpReadApi::new(ReadEndpoint::from_config(&config(endpoint)).unwrap()).unwrap()
    }

    #[test]
    fn submit_posts_image_with_key() {
        let request = api("https://vision.example.com")
            .submit_request(b"png bytes")
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://vision.example.com/vision/v3.2/read/analyze"
        );
        assert_eq!(request.headers()[KEY_HEADER], "secret-key");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/octet-stream");
        assert_eq!(
            request.body().and_then(|body| body.as_bytes()),
            Some(&b"png bytes"[..])
        );
    }

    #[test]
    fn fetch_gets_operation_result_with_key() {
        let request = api("https://vision.example.com/")
            .fetch_request("op-42")
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://vision.example.com/vision/v3.2/read/analyzeResults/op-42"
        );
        assert_eq!(request.headers()[KEY_HEADER], "secret-key");
    }

    #[test]
    fn extractor_needs_credentials() {
        let err = remote_extractor(&ExtractionConfig::default()).unwrap_err();
        assert!(matches!(err, LesewerkError::MissingCredentials));
    }

    #[test]
    fn bad_endpoint_url_is_a_transport_error() {
        let err = api("not a url").submit_request(b"png").unwrap_err();
        assert!(matches!(err, LesewerkError::Transport(_)));
    }

    #[tokio::test]
    async fn unreachable_service_fails_extraction() {
        // Port 1 on loopback refuses connections.
        let extractor = remote_extractor(&config("http://127.0.0.1:1"))
            .unwrap()
            .with_poll_config(PollConfig {
                max_attempts: 1,
                interval: Duration::ZERO,
            })
            .with_retry(RetryConfig::disabled());

        let err = extractor.extract(b"png", &ignore_progress).await.unwrap_err();
        assert!(matches!(err, LesewerkError::Transport(_)));
    }
}
