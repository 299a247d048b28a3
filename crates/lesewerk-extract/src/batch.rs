// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Concurrent extraction over a set of screenshots.
//
// Every image runs in its own task. A failing (or panicking) task only ever
// affects its own outcome; outcomes come back in input order.

use std::sync::Arc;

use lesewerk_core::error::{LesewerkError, Result};
use sha2::{Digest, Sha256};
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

use crate::provider::TextExtractor;

/// One screenshot to extract.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// What happened to one input.
#[derive(Debug)]
pub struct ImageOutcome {
    pub name: String,
    /// Hex SHA-256 of the image bytes.
    pub sha256: String,
    pub text: Result<String>,
}

/// Hex-encoded SHA-256 of `bytes`.
pub fn image_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Extract text from every image concurrently.
///
/// `on_progress` receives `(input index, percent)` from each task as it goes.
#[instrument(skip_all, fields(images = images.len()))]
pub async fn extract_batch<E, F>(
    extractor: Arc<E>,
    images: Vec<ImageInput>,
    on_progress: F,
) -> Vec<ImageOutcome>
where
    E: TextExtractor + 'static,
    F: Fn(usize, u8) + Send + Sync + 'static,
{
    // Name and digest are known up front so an aborted task still has a row.
    let mut outcomes: Vec<ImageOutcome> = images
        .iter()
        .map(|image| ImageOutcome {
            name: image.name.clone(),
            sha256: image_digest(&image.bytes),
            text: Err(LesewerkError::OcrError("extraction task aborted".into())),
        })
        .collect();

    let on_progress = Arc::new(on_progress);
    let mut tasks = JoinSet::new();
    for (index, image) in images.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        let on_progress = Arc::clone(&on_progress);
        tasks.spawn(async move {
            let report = move |percent: u8| on_progress(index, percent);
            let text = extractor.extract(&image.bytes, &report).await;
            (index, text)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, text)) => {
                if let Err(err) = &text {
                    warn!(image = %outcomes[index].name, error = %err, "extraction failed");
                }
                outcomes[index].text = text;
            }
            Err(err) => warn!(error = %err, "extraction task aborted"),
        }
    }

    let extracted = outcomes.iter().filter(|o| o.text.is_ok()).count();
    info!(extracted, failed = outcomes.len() - extracted, "batch complete");
    outcomes
}
