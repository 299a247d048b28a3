// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Placeholder text for failed extractions.
//
// Opt-in: wrapping an extractor in `FallbackExtractor` keeps a demo or a
// batch moving when the OCR service is down. The marker suffix makes the
// substitution obvious in every report built from it.

use lesewerk_core::error::Result;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::provider::{Progress, TextExtractor};

/// Appended to every placeholder so it can't pass for real content.
pub const PLACEHOLDER_MARKER: &str = " [MOCK DATA - extraction failed]";

/// Screens typical of a sign-up flow.
pub const PLACEHOLDER_TEXTS: [&str; 3] = [
    "Welcome to our app! Please enter your email address to get started. We'll send you a verification link.",
    "Your password must be at least 8 characters long and include one uppercase letter, one number, and one special character.",
    "Error: Unable to connect to server. Please check your internet connection and try again.",
];

/// Placeholder for `image`, picked by its SHA-256 so the same image always
/// gets the same text.
pub fn placeholder_for(image: &[u8]) -> String {
    let digest = Sha256::digest(image);
    let index = usize::from(digest[0]) % PLACEHOLDER_TEXTS.len();
    format!("{}{PLACEHOLDER_MARKER}", PLACEHOLDER_TEXTS[index])
}

/// Whether `text` came from [`placeholder_for`].
pub fn is_placeholder(text: &str) -> bool {
    text.ends_with(PLACEHOLDER_MARKER)
}

/// Wraps an extractor and swaps any failure for placeholder text.
pub struct FallbackExtractor<E> {
    inner: E,
}

impl<E: TextExtractor> FallbackExtractor<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: TextExtractor> TextExtractor for FallbackExtractor<E> {
    async fn extract(&self, image: &[u8], progress: Progress<'_>) -> Result<String> {
        match self.inner.extract(image, progress).await {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(error = %err, "extraction failed, using placeholder text");
                progress(100);
                Ok(placeholder_for(image))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lesewerk_core::error::LesewerkError;

    use super::*;
    use crate::provider::ignore_progress;

    struct Failing;

    impl TextExtractor for Failing {
        async fn extract(&self, _image: &[u8], _progress: Progress<'_>) -> Result<String> {
            Err(LesewerkError::TimedOut { attempts: 30 })
        }
    }

    struct Fixed(&'static str);

    impl TextExtractor for Fixed {
        async fn extract(&self, _image: &[u8], _progress: Progress<'_>) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    #[tokio::test]
    async fn failure_becomes_placeholder() {
        let extractor = FallbackExtractor::new(Failing);
        let text = extractor.extract(b"image", &ignore_progress).await.unwrap();
        assert!(is_placeholder(&text));
        assert!(PLACEHOLDER_TEXTS.iter().any(|p| text.starts_with(p)));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let extractor = FallbackExtractor::new(Fixed("Sign in"));
        let text = extractor.extract(b"image", &ignore_progress).await.unwrap();
        assert_eq!(text, "Sign in");
        assert!(!is_placeholder(&text));
    }

    #[test]
    fn placeholder_is_stable_per_image() {
        assert_eq!(placeholder_for(b"same bytes"), placeholder_for(b"same bytes"));
    }

    #[test]
    fn placeholders_are_analysable_text() {
        for text in PLACEHOLDER_TEXTS {
            assert!(text.ends_with('.'));
        }
    }
}
