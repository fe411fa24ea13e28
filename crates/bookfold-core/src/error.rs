// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bookfold.

use thiserror::Error;

/// Top-level error type for all Bookfold operations.
#[derive(Debug, Error)]
pub enum BookfoldError {
    // -- Generation --
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no fold plan has been generated yet")]
    EmptyPlan,

    #[error("font could not be loaded: {0}")]
    Font(String),

    // -- Output --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Payload of the `InvalidInput` raised for an empty word.
pub const EMPTY_WORD: &str = "enter a word to fold";

impl BookfoldError {
    pub fn empty_word() -> Self {
        Self::InvalidInput(EMPTY_WORD.into())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BookfoldError>;
