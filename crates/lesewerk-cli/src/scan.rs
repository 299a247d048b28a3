// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `scan`: screenshots in, export document out.
//
// Each image is validated and binarized, then all of them go through one
// extractor concurrently: local OCR, or the remote read service with
// `--remote` (always, in builds without the `ocr` feature). An image that
// fails at any stage is reported on stderr and left out of the export; the
// rest carry on.
//
// With fallback on, an extractor that can't even be set up (missing models,
// missing credentials) degrades to placeholder text instead of aborting.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lesewerk_analysis::{AnalyzedImage, ExportDocument};
use lesewerk_core::ExtractionConfig;
use lesewerk_core::error::{LesewerkError, Result};
use lesewerk_core::human_errors::humanize_error;
use lesewerk_extract::preprocess::{binarize, validate_image};
use lesewerk_extract::{
    FallbackExtractor, ImageInput, ImageOutcome, Progress, TextExtractor, extract_batch,
    remote_extractor,
};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::commands::{display_name, write_export};

/// Command-line switches for `scan`.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub remote: bool,
    pub models: Option<PathBuf>,
    pub fallback: bool,
}

impl ScanOptions {
    /// Whether images go to the read service rather than local OCR.
    fn uses_remote(&self) -> bool {
        self.remote || cfg!(not(feature = "ocr"))
    }
}

pub fn run(images: &[PathBuf], output: &Path, options: &ScanOptions) -> Result<ExportDocument> {
    let config = load_config(|name| std::env::var(name).ok(), options.uses_remote())?;
    scan(images, output, options, &config)
}

/// Read the `LESEWERK_OCR_*` settings.
///
/// Only the read service needs them parsed cleanly. Local OCR shrugs off a
/// malformed value and runs on defaults.
fn load_config(
    lookup: impl Fn(&str) -> Option<String>,
    remote: bool,
) -> Result<ExtractionConfig> {
    match ExtractionConfig::from_lookup(lookup) {
        Ok(config) => Ok(config),
        Err(err) if !remote => {
            warn!(error = %err, "ignoring read-service settings for local OCR");
            Ok(ExtractionConfig::default())
        }
        Err(err) => Err(err),
    }
}

fn scan(
    images: &[PathBuf],
    output: &Path,
    options: &ScanOptions,
    config: &ExtractionConfig,
) -> Result<ExportDocument> {
    let fallback = options.fallback || config.fallback_to_placeholder;

    let prepared: Vec<ImageInput> = images
        .iter()
        .filter_map(|path| match prepare(path, config) {
            Ok(input) => Some(input),
            Err(err) => {
                report_failure(&display_name(path), &err);
                None
            }
        })
        .collect();
    info!(
        prepared = prepared.len(),
        skipped = images.len() - prepared.len(),
        remote = options.uses_remote(),
        fallback,
        "screenshots ready for extraction"
    );

    let runtime = Runtime::new()?;
    let outcomes = extract(&runtime, options, config, prepared, fallback)?;

    let results = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome.text {
            Ok(text) => Some(AnalyzedImage::analyze(outcome.name, text)),
            Err(err) => {
                report_failure(&outcome.name, &err);
                None
            }
        })
        .collect();

    write_export(ExportDocument::new(results), output)
}

/// Read, validate, and binarize one screenshot.
fn prepare(path: &Path, config: &ExtractionConfig) -> Result<ImageInput> {
    let bytes = std::fs::read(path)?;
    validate_image(&bytes, config.max_image_bytes)?;
    let binary = binarize(&bytes, config.binarize_threshold)?;
    Ok(ImageInput::new(display_name(path), binary))
}

#[cfg(feature = "ocr")]
fn extract(
    runtime: &Runtime,
    options: &ScanOptions,
    config: &ExtractionConfig,
    images: Vec<ImageInput>,
    fallback: bool,
) -> Result<Vec<ImageOutcome>> {
    use lesewerk_extract::LocalOcr;

    if options.uses_remote() {
        return extract_with(runtime, remote_extractor(config), images, fallback);
    }
    let engine = match &options.models {
        Some(dir) => LocalOcr::from_model_dir(dir),
        None => LocalOcr::with_defaults(),
    };
    extract_with(runtime, engine, images, fallback)
}

#[cfg(not(feature = "ocr"))]
fn extract(
    runtime: &Runtime,
    options: &ScanOptions,
    config: &ExtractionConfig,
    images: Vec<ImageInput>,
    fallback: bool,
) -> Result<Vec<ImageOutcome>> {
    if options.models.is_some() {
        warn!("--models needs a build with the `ocr` feature; using the read service");
    }
    extract_with(runtime, remote_extractor(config), images, fallback)
}

/// Run the batch through `built`, or fail if it couldn't be set up and
/// there is no fallback to lean on.
fn extract_with<E: TextExtractor + 'static>(
    runtime: &Runtime,
    built: Result<E>,
    images: Vec<ImageInput>,
    fallback: bool,
) -> Result<Vec<ImageOutcome>> {
    let outcomes = match built {
        Ok(extractor) if fallback => {
            runtime.block_on(extract_all(FallbackExtractor::new(extractor), images))
        }
        Ok(extractor) => runtime.block_on(extract_all(extractor, images)),
        Err(err) if fallback => {
            warn!(error = %err, "no extractor available, using placeholder text");
            let unavailable = Unavailable(err.to_string());
            runtime.block_on(extract_all(FallbackExtractor::new(unavailable), images))
        }
        Err(err) => return Err(err),
    };
    Ok(outcomes)
}

async fn extract_all<E: TextExtractor + 'static>(
    extractor: E,
    images: Vec<ImageInput>,
) -> Vec<ImageOutcome> {
    extract_batch(Arc::new(extractor), images, log_progress).await
}

fn log_progress(index: usize, percent: u8) {
    debug!(index, percent, "extraction progress");
}

/// Stand-in for an extractor that failed to load; every image fails with
/// the setup error.
struct Unavailable(String);

impl TextExtractor for Unavailable {
    async fn extract(&self, _image: &[u8], _progress: Progress<'_>) -> Result<String> {
        Err(LesewerkError::OcrError(self.0.clone()))
    }
}

fn report_failure(name: &str, err: &LesewerkError) {
    let human = humanize_error(err);
    eprintln!("{name}: {} {}", human.message, human.suggestion);
}
