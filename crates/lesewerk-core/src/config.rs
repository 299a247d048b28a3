// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text-extraction configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LesewerkError, Result};

pub const ENV_ENDPOINT: &str = "LESEWERK_OCR_ENDPOINT";
pub const ENV_KEY: &str = "LESEWERK_OCR_KEY";
pub const ENV_MAX_ATTEMPTS: &str = "LESEWERK_OCR_MAX_ATTEMPTS";
pub const ENV_POLL_INTERVAL_MS: &str = "LESEWERK_OCR_POLL_INTERVAL_MS";
pub const ENV_FALLBACK: &str = "LESEWERK_OCR_FALLBACK";

/// Luma threshold for screenshot binarization: above it is white.
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 140;

/// Settings for the text-extraction collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Base URL of the remote read service.
    pub endpoint: Option<String>,
    /// Subscription key for the remote read service.
    pub api_key: Option<String>,
    /// Maximum number of result polls before giving up (default 30).
    pub max_poll_attempts: u32,
    /// Wait before each result poll, in milliseconds (default 1000).
    pub poll_interval_ms: u64,
    /// Replace failed extractions with placeholder text instead of an error.
    pub fallback_to_placeholder: bool,
    /// Largest accepted image in bytes (default 50 MiB).
    pub max_image_bytes: u64,
    /// Luma threshold used when binarizing screenshots before OCR.
    pub binarize_threshold: u8,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            max_poll_attempts: 30,
            poll_interval_ms: 1000,
            fallback_to_placeholder: false,
            max_image_bytes: 50 * 1024 * 1024,
            binarize_threshold: DEFAULT_BINARIZE_THRESHOLD,
        }
    }
}

impl ExtractionConfig {
    /// Load settings from `LESEWERK_OCR_*` environment variables, keeping
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.endpoint = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty());
        config.api_key = lookup(ENV_KEY).filter(|v| !v.trim().is_empty());

        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_poll_attempts = parse_number(ENV_MAX_ATTEMPTS, &raw)?;
            if config.max_poll_attempts == 0 {
                return Err(LesewerkError::Config(format!(
                    "{ENV_MAX_ATTEMPTS} must be at least 1"
                )));
            }
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval_ms = parse_number(ENV_POLL_INTERVAL_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FALLBACK) {
            config.fallback_to_placeholder = parse_flag(ENV_FALLBACK, &raw)?;
        }

        Ok(config)
    }

    /// Endpoint (always ending in `/`) and key, or
    /// [`LesewerkError::MissingCredentials`] if either is absent.
    pub fn credentials(&self) -> Result<(String, String)> {
        match (&self.endpoint, &self.api_key) {
            (Some(endpoint), Some(key)) => {
                let endpoint = if endpoint.ends_with('/') {
                    endpoint.clone()
                } else {
                    format!("{endpoint}/")
                };
                Ok((endpoint, key.clone()))
            }
            _ => Err(LesewerkError::MissingCredentials),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| LesewerkError::Config(format!("{name} is not a valid number: {raw:?}")))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LesewerkError::Config(format!(
            "{name} must be true or false, got {raw:?}"
        ))),
    }
}
