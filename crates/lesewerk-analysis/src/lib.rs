// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lesewerk-analysis — Readability analysis for text recovered from screenshots.
//
// Provides segmentation, syllable estimation, the Flesch-Kincaid grade level,
// passive-voice / long-sentence / jargon detectors, suggestion generation,
// and the aggregate export document. Everything here is a pure function of its
// input and safe to call from any thread.

pub mod detect;
pub mod export;
pub mod grade;
pub mod segment;
pub mod suggest;
pub mod syllable;

use lesewerk_core::AnalysisReport;
use tracing::{debug, instrument};

pub use detect::{detect_jargon, detect_long_sentences, detect_passive_voice};
pub use export::{AnalyzedImage, ExportDocument, ExportSummary};
pub use grade::{grade_band, grade_level};
pub use suggest::generate_suggestions;
pub use syllable::count_syllables;

/// Analyse one piece of text and build its readability report.
///
/// Never fails: empty or degenerate input yields grade level 0 and no
/// detections.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> AnalysisReport {
    let grade_level = grade_level(text);
    let passive_voice = detect_passive_voice(text);
    let long_sentences = detect_long_sentences(text);
    let jargon = detect_jargon(text);
    let suggestions = generate_suggestions(grade_level, &passive_voice, &long_sentences, &jargon);

    let mut report = AnalysisReport {
        grade_level,
        total_issues: passive_voice.len() + long_sentences.len() + jargon.len(),
        passive_voice,
        long_sentences,
        jargon,
        suggestions,
    };
    if report.grade_is_issue() {
        report.total_issues += 1;
    }

    debug!(
        grade_level = report.grade_level,
        total_issues = report.total_issues,
        suggestions = report.suggestions.len(),
        "text analysed"
    );
    report
}
