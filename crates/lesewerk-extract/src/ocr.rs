// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Local OCR over the `ocrs` engine (feature `ocr`).
//
// Needs two `rten` models, `text-detection.rten` and `text-recognition.rten`.
// Running `ocrs-cli` once downloads both into `$XDG_CACHE_HOME/ocrs`
// (typically `~/.cache/ocrs`), which is where `LocalOcr::with_defaults` looks.
//
// Recognition is CPU-bound, so each extraction runs on tokio's blocking pool.
// Build `ocrs` and `rten` in release mode; debug builds are very slow.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lesewerk_core::error::{LesewerkError, Result};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use tracing::{debug, info, instrument};

use crate::provider::{Progress, TextExtractor};

const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

/// `$XDG_CACHE_HOME/ocrs`, else `$HOME/.cache/ocrs`, else `./ocrs-models`.
pub fn default_model_dir() -> PathBuf {
    model_dir_from(|key| std::env::var(key).ok())
}

fn model_dir_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(xdg) = lookup("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Some(home) = lookup("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        PathBuf::from("ocrs-models")
    }
}

/// Where the two model files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrModelConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
}

impl Default for OcrModelConfig {
    fn default() -> Self {
        Self::from_dir(default_model_dir())
    }
}

impl OcrModelConfig {
    /// Both models under `dir` with their standard filenames.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            detection_model: dir.join(DETECTION_MODEL_FILENAME),
            recognition_model: dir.join(RECOGNITION_MODEL_FILENAME),
        }
    }

    pub fn from_paths(detection: impl Into<PathBuf>, recognition: impl Into<PathBuf>) -> Self {
        Self {
            detection_model: detection.into(),
            recognition_model: recognition.into(),
        }
    }

    /// Fail with [`LesewerkError::OcrError`] naming the first missing model.
    pub fn validate(&self) -> Result<()> {
        for (kind, path) in [
            ("detection", &self.detection_model),
            ("recognition", &self.recognition_model),
        ] {
            if !path.exists() {
                return Err(LesewerkError::OcrError(format!(
                    "{kind} model not found at {}; run `ocrs-cli` once to download the models",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// [`TextExtractor`] backed by a local `ocrs` engine.
///
/// Loading models is the expensive part; build one and reuse it. Clones share
/// the engine.
#[derive(Clone)]
pub struct LocalOcr {
    engine: Arc<OcrEngine>,
}

impl LocalOcr {
    #[instrument(skip_all, fields(
        detection = %config.detection_model.display(),
        recognition = %config.recognition_model.display(),
    ))]
    pub fn new(config: &OcrModelConfig) -> Result<Self> {
        config.validate()?;

        info!("Loading OCR models");
        let detection_model = load_model(&config.detection_model)?;
        let recognition_model = load_model(&config.recognition_model)?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|err| LesewerkError::OcrError(format!("failed to initialise OCR engine: {err}")))?;

        info!("OCR engine ready");
        Ok(Self {
            engine: Arc::new(engine),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&OcrModelConfig::default())
    }

    pub fn from_model_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(&OcrModelConfig::from_dir(dir))
    }
}

fn load_model(path: &Path) -> Result<Model> {
    Model::load_file(path).map_err(|err| {
        LesewerkError::OcrError(format!("failed to load model {}: {err}", path.display()))
    })
}

/// Decode `bytes` and run detection plus recognition.
fn recognize(engine: &OcrEngine, bytes: &[u8]) -> Result<String> {
    let rgb = image::load_from_memory(bytes)
        .map_err(|err| LesewerkError::ImageError(format!("failed to decode screenshot: {err}")))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    let source = ImageSource::from_bytes(rgb.as_raw(), (width, height)).map_err(|err| {
        LesewerkError::OcrError(format!("bad image source ({width}x{height}): {err}"))
    })?;
    let input = engine
        .prepare_input(source)
        .map_err(|err| LesewerkError::OcrError(format!("OCR preprocessing failed: {err}")))?;
    let raw = engine
        .get_text(&input)
        .map_err(|err| LesewerkError::OcrError(format!("OCR recognition failed: {err}")))?;

    debug!(lines = raw.lines().count(), "recognition complete");
    Ok(join_lines(&raw))
}

/// Recognised lines, trimmed and space-joined, blanks dropped.
fn join_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl TextExtractor for LocalOcr {
    #[instrument(skip_all, fields(image_len = image.len()))]
    async fn extract(&self, image: &[u8], progress: Progress<'_>) -> Result<String> {
        progress(10);

        let engine = Arc::clone(&self.engine);
        let bytes = image.to_vec();
        let joined = tokio::task::spawn_blocking(move || recognize(&engine, &bytes)).await;
        progress(100);

        let text = joined
            .map_err(|err| LesewerkError::OcrError(format!("OCR task failed: {err}")))??;
        if text.is_empty() {
            return Err(LesewerkError::NoTextDetected);
        }
        info!(chars = text.len(), "text extracted");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_dir_prefers_xdg_cache() {
        let dir = model_dir_from(|key| match key {
            "XDG_CACHE_HOME" => Some("/xdg".into()),
            "HOME" => Some("/home/ada".into()),
            _ => None,
        });
        assert_eq!(dir, PathBuf::from("/xdg/ocrs"));
    }

    #[test]
    fn model_dir_falls_back_to_home() {
        let dir = model_dir_from(|key| (key == "HOME").then(|| "/home/ada".to_owned()));
        assert_eq!(dir, PathBuf::from("/home/ada/.cache/ocrs"));
        assert_eq!(model_dir_from(|_| None), PathBuf::from("ocrs-models"));
    }

    #[test]
    fn config_from_dir() {
        let config = OcrModelConfig::from_dir("/models");
        assert_eq!(
            config,
            OcrModelConfig::from_paths(
                "/models/text-detection.rten",
                "/models/text-recognition.rten"
            )
        );
    }

    #[test]
    fn missing_models_fail_validation() {
        let err = OcrModelConfig::from_dir("/nonexistent/ocr-models")
            .validate()
            .unwrap_err();
        assert!(matches!(err, LesewerkError::OcrError(msg) if msg.contains("detection")));
    }

    #[test]
    fn missing_models_fail_construction() {
        assert!(LocalOcr::from_model_dir("/nonexistent/ocr-models").is_err());
    }

    #[test]
    fn lines_are_joined_with_spaces() {
        assert_eq!(
            join_lines("  Create account \n\n Sign in\n"),
            "Create account Sign in"
        );
        assert_eq!(join_lines("\n  \n"), "");
    }
}
