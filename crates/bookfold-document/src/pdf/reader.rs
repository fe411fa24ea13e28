// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF inspector — open an exported instruction sheet with `lopdf` and report
// what is inside.

use std::path::Path;

use bookfold_core::error::BookfoldError;
use lopdf::Document;
use tracing::{debug, instrument};

/// Read-only view of a PDF document.
pub struct PdfInspector {
    document: Document,
}

impl PdfInspector {
    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BookfoldError> {
        let path_ref = path.as_ref();
        let document = Document::load(path_ref).map_err(|err| {
            BookfoldError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self { document })
    }

    /// Load a PDF already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, BookfoldError> {
        let document = Document::load_mem(data).map_err(|err| {
            BookfoldError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");
        Ok(Self { document })
    }

    /// Number of physical sheets.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = PdfInspector::from_bytes(b"not a pdf at all").err().unwrap();
        assert!(matches!(err, BookfoldError::PdfError(_)));
    }

    #[test]
    fn missing_file_is_a_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfInspector::open(dir.path().join("absent.pdf")).err().unwrap();
        assert!(matches!(err, BookfoldError::PdfError(_)));
    }
}
