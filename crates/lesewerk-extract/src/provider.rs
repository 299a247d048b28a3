// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The text-extraction seam.

use std::future::Future;

use lesewerk_core::error::Result;

/// Progress callback receiving a percentage in `0..=100`.
pub type Progress<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// Anything that turns image bytes into text.
///
/// Implementations report progress as they go and finish with 100 whether
/// they succeed or fail.
pub trait TextExtractor: Send + Sync {
    fn extract(
        &self,
        image: &[u8],
        progress: Progress<'_>,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Progress sink for callers that don't display progress.
pub fn ignore_progress(_percent: u8) {}
