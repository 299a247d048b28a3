// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pattern detectors for passive voice, long sentences, and jargon.
//
// The three detectors are independent and stateless. They are heuristics on
// purpose: tightening any of them changes the issue counts of existing
// reports.

pub mod jargon;
pub mod long_sentence;
pub mod passive;

pub use jargon::{JARGON, detect_jargon, plain_alternative};
pub use long_sentence::{LONG_SENTENCE_WORDS, detect_long_sentences};
pub use passive::detect_passive_voice;
