// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Suggestion generation.
//
// Order is fixed (grade level, passive voice, long sentences, jargon) and a
// category only appears when it has something to report.

use lesewerk_core::{GRADE_LEVEL_TARGET, Suggestion, SuggestionKind};

use crate::detect::{LONG_SENTENCE_WORDS, plain_alternative};

const GRADE_ADVICE: &str =
    "Use shorter sentences, simpler words, and active voice to reduce complexity";
const PASSIVE_ADVICE: &str =
    "Convert to active voice (e.g., \"The user clicks\" instead of \"The button is clicked\")";
const LONG_SENTENCE_ADVICE: &str =
    "Break long sentences into shorter ones. Use bullet points or numbered lists for multiple actions";

/// Turn scorer and detector output into suggestions.
pub fn generate_suggestions(
    grade_level: f64,
    passive_voice: &[String],
    long_sentences: &[String],
    jargon: &[String],
) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(4);

    if grade_level > GRADE_LEVEL_TARGET {
        suggestions.push(Suggestion {
            kind: SuggestionKind::GradeLevel,
            issue: format!("Grade level {grade_level} is above 9th grade"),
            suggestion: GRADE_ADVICE.to_owned(),
        });
    }

    if !passive_voice.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::PassiveVoice,
            issue: format!("{} passive voice instance(s) found", passive_voice.len()),
            suggestion: PASSIVE_ADVICE.to_owned(),
        });
    }

    if !long_sentences.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::LongSentences,
            issue: format!(
                "{} sentence(s) over {LONG_SENTENCE_WORDS} words",
                long_sentences.len()
            ),
            suggestion: LONG_SENTENCE_ADVICE.to_owned(),
        });
    }

    if !jargon.is_empty() {
        let replacements: Vec<String> = jargon
            .iter()
            .map(|term| format!("\"{term}\" → \"{}\"", plain_alternative(term)))
            .collect();

        suggestions.push(Suggestion {
            kind: SuggestionKind::Jargon,
            issue: format!(
                "{} jargon word(s) found: {}",
                jargon.len(),
                jargon.join(", ")
            ),
            suggestion: format!(
                "Replace with simpler alternatives: {}",
                replacements.join(", ")
            ),
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn nothing_to_report() {
        assert!(generate_suggestions(9.0, &[], &[], &[]).is_empty());
    }

    #[test]
    fn grade_suggestion_interpolates_exact_value() {
        let suggestions = generate_suggestions(12.3, &[], &[], &[]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::GradeLevel);
        assert_eq!(suggestions[0].issue, "Grade level 12.3 is above 9th grade");
    }

    #[test]
    fn whole_grade_prints_without_decimal() {
        let suggestions = generate_suggestions(10.0, &[], &[], &[]);
        assert_eq!(suggestions[0].issue, "Grade level 10 is above 9th grade");
    }

    #[test]
    fn counts_are_interpolated() {
        let passive = strings(&["is submitted", "was eaten"]);
        let long = strings(&["a very long sentence"]);
        let suggestions = generate_suggestions(0.0, &passive, &long, &[]);

        assert_eq!(suggestions[0].issue, "2 passive voice instance(s) found");
        assert_eq!(suggestions[1].issue, "1 sentence(s) over 20 words");
    }

    #[test]
    fn jargon_lists_terms_and_replacements() {
        let jargon = strings(&["leverage", "cutting-edge"]);
        let suggestions = generate_suggestions(0.0, &[], &[], &jargon);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].issue,
            "2 jargon word(s) found: leverage, cutting-edge"
        );
        assert_eq!(
            suggestions[0].suggestion,
            "Replace with simpler alternatives: \"leverage\" → \"use\", \"cutting-edge\" → \"advanced\""
        );
    }

    #[test]
    fn order_is_fixed() {
        let one = strings(&["x"]);
        let kinds: Vec<SuggestionKind> = generate_suggestions(15.0, &one, &one, &strings(&["robust"]))
            .into_iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::GradeLevel,
                SuggestionKind::PassiveVoice,
                SuggestionKind::LongSentences,
                SuggestionKind::Jargon,
            ]
        );
    }
}
