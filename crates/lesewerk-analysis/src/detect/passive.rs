// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Passive-voice phrase matching.
//
// An auxiliary (is, are, was, were, being, been, be) followed by a word ending
// in "-ed" or "-en". No grammar is checked: "was red" matches, "was sent"
// does not.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word semantics (`-u`) so `\w` and `\b` never treat accented letters
// as part of a word. The gap stays Unicode-aware so a no-break space between
// auxiliary and participle counts, as it does for word splitting.
static PASSIVE_ED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b(?:is|are|was|were|being|been|be)(?u:\s)+\w*ed\b")
        .expect("valid passive -ed regex")
});

static PASSIVE_EN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b(?:is|are|was|were|being|been|be)(?u:\s)+\w*en\b")
        .expect("valid passive -en regex")
});

/// Every passive-voice phrase in `text`, in source order, duplicates kept.
///
/// The "-ed" and "-en" patterns are matched separately, so a phrase can show
/// up once per pattern when the two overlap ("is been tasked" yields both
/// "is been" and "been tasked").
pub fn detect_passive_voice(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = PASSIVE_ED_RE
        .find_iter(text)
        .chain(PASSIVE_EN_RE.find_iter(text))
        .map(|m| (m.start(), m.as_str()))
        .collect();

    // Stable, so equal offsets keep -ed before -en.
    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, phrase)| phrase.to_owned()).collect()
}
