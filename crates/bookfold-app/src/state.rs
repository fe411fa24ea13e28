// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use bookfold_core::AppConfig;
use bookfold_core::error::{BookfoldError, Result};
use bookfold_core::session::Session;
use bookfold_core::types::{FoldMethod, FoldRequest, PageGeometry};

/// Raw form fields, kept as typed text until Generate is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateForm {
    pub height_mm: String,
    pub width_mm: String,
    pub page_count: String,
    pub word: String,
    pub method: FoldMethod,
}

impl GenerateForm {
    /// Form pre-filled from the saved defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            height_mm: config.default_height_mm.to_string(),
            width_mm: config.default_width_mm.to_string(),
            page_count: config.default_page_count.to_string(),
            word: String::new(),
            method: config.default_method,
        }
    }

    /// Parse the fields into a request. The word is checked first so an
    /// empty word wins over a malformed number.
    pub fn to_request(&self) -> Result<FoldRequest> {
        if self.word.is_empty() {
            return Err(BookfoldError::empty_word());
        }
        let height_mm = parse_field::<f64>("page height", &self.height_mm)?;
        let width_mm = parse_field::<f64>("page width", &self.width_mm)?;
        let page_count = parse_field::<usize>("number of pages", &self.page_count)?;

        let geometry = PageGeometry::new(height_mm, width_mm, page_count)?;
        Ok(FoldRequest::new(geometry, self.word.clone(), self.method))
    }
}

fn parse_field<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| BookfoldError::InvalidInput(format!("{name} must be a number (got {raw:?})")))
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current fold plan and navigation cursor.
    pub session: Session,
    /// Generation form contents.
    pub form: GenerateForm,
    /// Application settings.
    pub config: AppConfig,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::new(),
            form: GenerateForm::from_config(&config),
            config,
            status_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_parses_once_word_is_set() {
        let mut form = GenerateForm::from_config(&AppConfig::default());
        form.word = "Love".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.geometry.page_count, 200);
        assert_eq!(request.word, "Love");
    }

    #[test]
    fn empty_word_beats_bad_numbers() {
        let form = GenerateForm {
            height_mm: "tall".into(),
            width_mm: "".into(),
            page_count: "-3".into(),
            word: String::new(),
            method: FoldMethod::SingleBand,
        };
        match form.to_request() {
            Err(BookfoldError::InvalidInput(msg)) => assert!(msg.contains("word")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_height_is_invalid_input() {
        let mut form = GenerateForm::from_config(&AppConfig::default());
        form.word = "A".into();
        form.height_mm = "abc".into();
        assert!(matches!(form.to_request(), Err(BookfoldError::InvalidInput(_))));

        form.height_mm = "NaN".into();
        assert!(matches!(form.to_request(), Err(BookfoldError::InvalidInput(_))));
    }
}
