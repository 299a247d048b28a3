// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Business jargon detection.
//
// The vocabulary and its plain-language replacements live in one table so a
// term can never be added without an alternative.

/// Jargon terms and their plain-language replacements, in reporting order.
pub static JARGON: &[(&str, &str)] = &[
    ("leverage", "use"),
    ("robust", "strong"),
    ("utilize", "use"),
    ("synergy", "teamwork"),
    ("paradigm", "approach"),
    ("optimize", "improve"),
    ("streamline", "simplify"),
    ("facilitate", "help"),
    ("implement", "add"),
    ("integrate", "combine"),
    ("scalable", "flexible"),
    ("actionable", "useful"),
    ("deliverable", "result"),
    ("ideate", "brainstorm"),
    ("iterate", "repeat"),
    ("holistic", "complete"),
    ("end-to-end", "complete"),
    ("best-in-class", "top-quality"),
    ("cutting-edge", "advanced"),
    ("state-of-the-art", "latest"),
    ("turnkey", "ready-to-use"),
    ("mission-critical", "essential"),
    ("value-add", "benefit"),
    ("game-changer", "breakthrough"),
];

/// Replacement used for a term missing from [`JARGON`].
pub const FALLBACK_ALTERNATIVE: &str = "simpler term";

/// Jargon terms present in `text`, in table order, each at most once.
///
/// Matching is case-insensitive and substring-based per word, so "optimized"
/// reports "optimize" and "Leveraging" reports "leverage".
pub fn detect_jargon(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    JARGON
        .iter()
        .filter(|(term, _)| words.iter().any(|word| word.contains(term)))
        .map(|(term, _)| (*term).to_owned())
        .collect()
}

/// Plain-language alternative for a jargon term.
pub fn plain_alternative(term: &str) -> &'static str {
    JARGON
        .iter()
        .find(|(jargon, _)| *jargon == term)
        .map(|(_, plain)| *plain)
        .unwrap_or(FALLBACK_ALTERNATIVE)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn case_insensitive() {
        assert!(detect_jargon("We LEVERAGE this").contains(&"leverage".to_string()));
    }

    #[test]
    fn substring_match_inside_word() {
        assert!(detect_jargon("optimized").contains(&"optimize".to_string()));
        assert!(detect_jargon("Synergy-driven").contains(&"synergy".to_string()));
    }

    #[test]
    fn table_order_not_text_order() {
        assert_eq!(
            detect_jargon("We facilitate things and leverage others"),
            vec!["leverage", "facilitate"]
        );
    }

    #[test]
    fn each_term_reported_once() {
        assert_eq!(
            detect_jargon("robust robust ROBUST robustness"),
            vec!["robust"]
        );
    }

    #[test]
    fn hyphenated_terms_need_the_hyphen() {
        assert!(detect_jargon("cutting edge").is_empty());
        assert_eq!(detect_jargon("cutting-edge"), vec!["cutting-edge"]);
    }

    #[test]
    fn terms_do_not_span_whitespace() {
        assert!(detect_jargon("game changer").is_empty());
    }

    #[test]
    fn clean_text_has_no_jargon() {
        assert!(detect_jargon("Enter your email to get started.").is_empty());
        assert!(detect_jargon("").is_empty());
    }

    #[test]
    fn every_term_has_a_real_alternative() {
        for (term, plain) in JARGON {
            assert!(!plain.is_empty(), "{term} has an empty alternative");
            assert_ne!(plain_alternative(term), FALLBACK_ALTERNATIVE, "{term} falls back");
        }
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        let unique: HashSet<&str> = JARGON.iter().map(|(term, _)| *term).collect();
        assert_eq!(unique.len(), JARGON.len());
        assert_eq!(JARGON.len(), 24);
    }

    #[test]
    fn vocabulary_is_lower_case() {
        for (term, _) in JARGON {
            assert_eq!(*term, term.to_lowercase());
        }
    }

    #[test]
    fn unknown_term_falls_back() {
        assert_eq!(plain_alternative("blockchain"), FALLBACK_ALTERNATIVE);
    }
}
