// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Lesewerk.
//
// The readability engine itself never fails. Everything here belongs to the
// text-extraction boundary and the file handling around it.

use thiserror::Error;

/// Top-level error type for all Lesewerk operations.
#[derive(Debug, Error)]
pub enum LesewerkError {
    // -- Extraction service --
    #[error("text extraction credentials not configured (endpoint and key are required)")]
    MissingCredentials,

    #[error("extraction service rejected the API key (401)")]
    Unauthorized,

    #[error("extraction service denied access or quota is exhausted (403)")]
    Forbidden,

    #[error("extraction service rejected the image (400): {0}")]
    InvalidImage(String),

    #[error("extraction service is rate limiting requests (429)")]
    RateLimited,

    #[error("extraction service error {status}: {detail}")]
    Remote { status: u16, detail: String },

    #[error("could not reach the extraction service: {0}")]
    Transport(String),

    #[error("no operation location received from the extraction service")]
    MissingOperation,

    #[error("extraction service reported the operation as failed")]
    OperationFailed,

    #[error("no text detected in the image")]
    NoTextDetected,

    #[error("text extraction timed out after {attempts} poll attempts")]
    TimedOut { attempts: u32 },

    // -- Image handling --
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("image too large: {size} bytes (maximum {max})")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("OCR failed: {0}")]
    OcrError(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LesewerkError>;
