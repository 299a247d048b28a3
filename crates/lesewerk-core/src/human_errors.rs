// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so a failed screenshot can be shown next to its siblings without a stack
// trace.

use crate::error::LesewerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Trying again later may work.
    Transient,
    /// User must do something (set credentials, pick a different image).
    ActionRequired,
    /// Retrying the same input will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether the system should auto-retry.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `LesewerkError` into a `HumanError`.
pub fn humanize_error(err: &LesewerkError) -> HumanError {
    match err {
        // -- Extraction service --
        LesewerkError::MissingCredentials => HumanError {
            message: "Text extraction isn't set up yet.".into(),
            suggestion: "Set LESEWERK_OCR_ENDPOINT and LESEWERK_OCR_KEY, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LesewerkError::Unauthorized => HumanError {
            message: "The text extraction service didn't accept our key.".into(),
            suggestion: "Check that LESEWERK_OCR_KEY holds a valid subscription key.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LesewerkError::Forbidden => HumanError {
            message: "The text extraction service refused the request.".into(),
            suggestion: "Your subscription may be out of quota. Check it, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LesewerkError::InvalidImage(_) | LesewerkError::UnsupportedImage(_) => HumanError {
            message: "This image format can't be read.".into(),
            suggestion: "Please use a PNG, JPEG, BMP, or TIFF screenshot.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LesewerkError::RateLimited => HumanError {
            message: "Too many requests at once.".into(),
            suggestion: "Please wait a moment and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LesewerkError::Remote { status, .. } => HumanError {
            message: "The text extraction service had a problem.".into(),
            suggestion: format!("Try again in a little while. (Status: {status})"),
            retriable: true,
            severity: Severity::Transient,
        },

        LesewerkError::Transport(_) => HumanError {
            message: "The text extraction service couldn't be reached.".into(),
            suggestion: "Check your connection and LESEWERK_OCR_ENDPOINT, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LesewerkError::MissingOperation | LesewerkError::OperationFailed => HumanError {
            message: "Text extraction didn't finish on this image.".into(),
            suggestion: "Try uploading the screenshot again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LesewerkError::NoTextDetected => HumanError {
            message: "We couldn't find any text in this image.".into(),
            suggestion: "Make sure the screenshot contains readable text and isn't too small or blurry.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LesewerkError::TimedOut { .. } => HumanError {
            message: "Text extraction took too long.".into(),
            suggestion: "The service may be busy. Try again in a minute.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Image handling --
        LesewerkError::ImageTooLarge { max, .. } => HumanError {
            message: "This image is too large.".into(),
            suggestion: format!(
                "Images must be smaller than {} MB. Try cropping or compressing it.",
                max / (1024 * 1024)
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LesewerkError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged. Try saving it again as a PNG.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LesewerkError::OcrError(_) => HumanError {
            message: "Text recognition didn't work on this image.".into(),
            suggestion: "Try a sharper screenshot, making sure the text is clear and in focus.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Configuration / persistence --
        LesewerkError::Config(detail) => HumanError {
            message: "A setting has an invalid value.".into(),
            suggestion: format!("Fix the setting and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LesewerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "We don't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or copy the file somewhere else first.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        LesewerkError::Serialization(_) => HumanError {
            message: "The report couldn't be written.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
