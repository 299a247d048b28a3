// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Long-sentence detection.

use crate::segment::{split_sentences, word_count};

/// Sentences with more words than this are flagged.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Sentences longer than [`LONG_SENTENCE_WORDS`] words, trimmed, in order.
pub fn detect_long_sentences(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| word_count(sentence) > LONG_SENTENCE_WORDS)
        .map(str::to_owned)
        .collect()
}
