// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Aggregate export document: one summary plus every per-image report.

use chrono::{DateTime, Utc};
use lesewerk_core::AnalysisReport;
use lesewerk_core::error::Result;
use serde::{Deserialize, Serialize};

/// Default file name for a written export.
pub const DEFAULT_EXPORT_FILENAME: &str = "readability-analysis.json";

/// A report together with the image and text it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedImage {
    pub filename: String,
    pub extracted_text: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

impl AnalyzedImage {
    /// Analyse `extracted_text` and attach it to `filename`.
    pub fn analyze(filename: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        let extracted_text = extracted_text.into();
        let report = crate::analyze(&extracted_text);
        Self {
            filename: filename.into(),
            extracted_text,
            report,
        }
    }
}

/// Totals across every analysed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_images: usize,
    /// Mean grade level, unrounded; 0 when there are no images.
    pub average_grade_level: f64,
    pub total_issues: usize,
}

impl ExportSummary {
    pub fn of(results: &[AnalyzedImage]) -> Self {
        let total_images = results.len();
        let average_grade_level = if total_images == 0 {
            0.0
        } else {
            results.iter().map(|r| r.report.grade_level).sum::<f64>() / total_images as f64
        };

        Self {
            total_images,
            average_grade_level,
            total_issues: results.iter().map(|r| r.report.total_issues).sum(),
        }
    }
}

/// The downloadable analysis document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub summary: ExportSummary,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<AnalyzedImage>,
}

impl ExportDocument {
    pub fn new(results: Vec<AnalyzedImage>) -> Self {
        Self {
            summary: ExportSummary::of(&results),
            generated_at: Utc::now(),
            results,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
