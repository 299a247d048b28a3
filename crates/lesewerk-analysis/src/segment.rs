// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sentence and word segmentation.
//
// Deliberately naive: any run of `.`, `!` or `?` ends a sentence, so "Dr."
// and "e.g." split too. Grade-level numbers depend on this exact behaviour.

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into trimmed, non-empty sentences in source order.
///
/// A run of terminators such as `?!` or `...` acts as one boundary; the empty
/// pieces between consecutive terminators are dropped along with any
/// whitespace-only piece.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Split text into maximal runs of non-whitespace characters.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of words in `text`, without allocating.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_words("").is_empty());
        assert!(split_sentences("   \n\t").is_empty());
    }

    #[test]
    fn terminator_runs_are_one_boundary() {
        assert_eq!(
            split_sentences("Wait... Really?! Yes."),
            vec!["Wait", "Really", "Yes"]
        );
    }

    #[test]
    fn sentences_are_trimmed_and_kept_in_order() {
        assert_eq!(
            split_sentences("  First one.   Second one!\nThird one?  "),
            vec!["First one", "Second one", "Third one"]
        );
    }

    #[test]
    fn trailing_text_without_terminator_is_a_sentence() {
        assert_eq!(split_sentences("Done. Not done"), vec!["Done", "Not done"]);
    }

    #[test]
    fn abbreviations_split_sentences() {
        assert_eq!(split_sentences("Ask Dr. Smith"), vec!["Ask Dr", "Smith"]);
    }

    #[test]
    fn duplicate_sentences_are_kept() {
        assert_eq!(split_sentences("Go. Go. Go."), vec!["Go", "Go", "Go"]);
    }

    #[test]
    fn words_split_on_any_whitespace_run() {
        assert_eq!(
            split_words("one  two\tthree\n\nfour "),
            vec!["one", "two", "three", "four"]
        );
        assert_eq!(word_count("one  two\tthree\n\nfour "), 4);
    }

    #[test]
    fn punctuation_stays_attached_to_words() {
        assert_eq!(split_words("Hello, world!"), vec!["Hello,", "world!"]);
    }
}
