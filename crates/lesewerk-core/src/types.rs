// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Lesewerk readability analyser.

use serde::{Deserialize, Serialize};

/// Grade level above which text counts as hard to read.
pub const GRADE_LEVEL_TARGET: f64 = 9.0;

/// Category of a writing suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// The Flesch-Kincaid grade level is above the target.
    GradeLevel,
    /// Passive-voice phrases were found.
    PassiveVoice,
    /// One or more sentences run over the word limit.
    LongSentences,
    /// Business jargon was found.
    Jargon,
}

impl SuggestionKind {
    /// Wire tag, as written in JSON reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GradeLevel => "grade-level",
            Self::PassiveVoice => "passive-voice",
            Self::LongSentences => "long-sentences",
            Self::Jargon => "jargon",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One improvement suggestion: what is wrong and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Description of the problem, with counts filled in.
    pub issue: String,
    /// Remedial advice.
    pub suggestion: String,
}

/// Readability report for one piece of text.
///
/// Built once per input and never mutated. `total_issues` always equals the
/// detection counts plus one when the grade level is above
/// [`GRADE_LEVEL_TARGET`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Flesch-Kincaid grade level, one decimal place, never negative.
    pub grade_level: f64,
    /// Matched passive-voice phrases in source order.
    pub passive_voice: Vec<String>,
    /// Sentences with more than 20 words.
    pub long_sentences: Vec<String>,
    /// Jargon terms found, in vocabulary order.
    pub jargon: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub total_issues: usize,
}

impl AnalysisReport {
    /// Whether the grade level counts as an issue on its own.
    pub fn grade_is_issue(&self) -> bool {
        self.grade_level > GRADE_LEVEL_TARGET
    }
}

/// Coarse difficulty band used when presenting a grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    /// Grade 6 or below.
    Easy,
    /// Above 6, up to and including 9.
    Moderate,
    /// Above 9.
    Hard,
}

/// Classification of errors for retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClass {
    /// Safe to retry automatically (throttling, timeouts, service hiccups).
    Transient,
    /// User must act (fix credentials, pick another image).
    UserAction,
    /// Retrying the same input will fail the same way.
    Permanent,
}
