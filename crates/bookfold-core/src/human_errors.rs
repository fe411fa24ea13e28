// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the folding UI.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the UI presents it.

use crate::error::{BookfoldError, EMPTY_WORD};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (type a word, generate first).
    ActionRequired,
    /// Retrying the same thing will fail the same way.
    Permanent,
}

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives colour in the UI).
    pub severity: Severity,
}

/// Convert a `BookfoldError` into something a crafter can act on.
pub fn humanize_error(err: &BookfoldError) -> HumanError {
    match err {
        BookfoldError::InvalidInput(detail) if detail == EMPTY_WORD => HumanError {
            message: "Enter a word to fold!".into(),
            suggestion: "Type the word you want to appear on the edge of the book.".into(),
            severity: Severity::ActionRequired,
        },

        BookfoldError::InvalidInput(detail) => HumanError {
            message: "Some of the book measurements don't look right.".into(),
            suggestion: format!(
                "Check that height, width and page count are all positive numbers. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        BookfoldError::EmptyPlan => HumanError {
            message: "Generate instructions first!".into(),
            suggestion: "Fill in the form and press Generate, then try again.".into(),
            severity: Severity::ActionRequired,
        },

        BookfoldError::Font(detail) => HumanError {
            message: "The lettering font could not be loaded.".into(),
            suggestion: format!("Reinstall the application. ({detail})"),
            severity: Severity::Permanent,
        },

        BookfoldError::PdfError(detail) => HumanError {
            message: "We couldn't create the PDF.".into(),
            suggestion: format!("Try exporting again with fewer pages. ({detail})"),
            severity: Severity::Permanent,
        },

        BookfoldError::ImageError(detail) => HumanError {
            message: "We couldn't draw the page diagram.".into(),
            suggestion: format!("Try generating the instructions again. ({detail})"),
            severity: Severity::Permanent,
        },

        BookfoldError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "We don't have permission to save there.".into(),
                suggestion: "Choose a different folder, such as your Documents.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::NotFound => HumanError {
                message: "That folder doesn't exist any more.".into(),
                suggestion: "Choose another place to save the file.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "The file couldn't be saved.".into(),
                suggestion: format!("Check there is free space on the device. ({io_err})"),
                severity: Severity::Permanent,
            },
        },

        BookfoldError::Serialization(detail) => HumanError {
            message: "Your settings file is damaged.".into(),
            suggestion: format!("Defaults will be used; save settings again to repair it. ({detail})"),
            severity: Severity::Permanent,
        },
    }
}
