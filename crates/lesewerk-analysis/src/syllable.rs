// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vowel-group syllable estimation.

const VOWELS: &[u8] = b"aeiouy";

/// Estimate the number of syllables in a word.
///
/// Only ASCII letters count; everything else is stripped after lower-casing.
/// Each run of vowels (`y` included) is one syllable, a trailing `e` removes
/// one, and the result is clamped to 1 for anything with a letter in it. A
/// word without letters ("42", "—") scores 0.
///
/// The silent-e rule also fires on words whose final `e` is voiced, so
/// "apple" scores 1 and "recipe" scores 2. Historical grade levels depend on
/// this exact count.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: Vec<u8> = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .map(|c| c as u8)
        .collect();

    if cleaned.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for byte in &cleaned {
        let is_vowel = VOWELS.contains(byte);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if cleaned.last() == Some(&b'e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}
