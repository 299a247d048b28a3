// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lesewerk-extract — Getting text out of screenshots.
//
// The readability engine only ever sees a string. This crate produces that
// string: a submit/poll client for remote read services over HTTP, a
// placeholder-text fallback, image validation and binarization, concurrent
// batch extraction with per-image failures, and (behind the `ocr` feature) a
// local OCR engine.

pub mod batch;
pub mod fallback;
pub mod http;
pub mod poll;
pub mod preprocess;
pub mod provider;
pub mod read_api;
pub mod retry;

#[cfg(feature = "ocr")]
pub mod ocr;

pub use batch::{ImageInput, ImageOutcome, extract_batch};
pub use fallback::FallbackExtractor;
pub use http::{HttpReadApi, remote_extractor};
pub use poll::PollingExtractor;
pub use provider::{Progress, TextExtractor};
pub use read_api::{ReadApi, ReadEndpoint};

#[cfg(feature = "ocr")]
pub use ocr::LocalOcr;
