// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Bookfold.

use serde::{Deserialize, Serialize};

use crate::error::{BookfoldError, Result};

/// Physical dimensions of the book being folded, plus how many pages
/// (columns) the word is spread across.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page height in millimetres.
    pub height_mm: f64,
    /// Page width in millimetres.
    pub width_mm: f64,
    /// Number of pages to fold. One bitmap column per page.
    pub page_count: usize,
}

impl PageGeometry {
    /// Build a validated geometry.
    pub fn new(height_mm: f64, width_mm: f64, page_count: usize) -> Result<Self> {
        let geometry = Self {
            height_mm,
            width_mm,
            page_count,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject non-finite or non-positive dimensions and an empty book.
    pub fn validate(&self) -> Result<()> {
        if !self.height_mm.is_finite() || self.height_mm <= 0.0 {
            return Err(BookfoldError::InvalidInput(format!(
                "page height must be a positive number of millimetres (got {})",
                self.height_mm
            )));
        }
        if !self.width_mm.is_finite() || self.width_mm <= 0.0 {
            return Err(BookfoldError::InvalidInput(format!(
                "page width must be a positive number of millimetres (got {})",
                self.width_mm
            )));
        }
        if self.page_count == 0 {
            return Err(BookfoldError::InvalidInput(
                "number of pages must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Which extractor turns bitmap columns into folds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldMethod {
    /// One top/bottom pair per page spanning the first to the last ink sample.
    SingleBand,
    /// Up to three pairs per page, each clamped into its own section.
    #[default]
    MultiBand,
}

impl FoldMethod {
    /// Human-readable name used in headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleBand => "2-Fold Method",
            Self::MultiBand => "Multi-Fold Method",
        }
    }

    /// Stable short key used in settings and form values.
    pub fn key(&self) -> &'static str {
        match self {
            Self::SingleBand => "single",
            Self::MultiBand => "multi",
        }
    }

    /// Inverse of [`FoldMethod::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "single" => Some(Self::SingleBand),
            "multi" => Some(Self::MultiBand),
            _ => None,
        }
    }
}

/// Everything needed to produce one fold plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldRequest {
    pub geometry: PageGeometry,
    pub word: String,
    pub method: FoldMethod,
}

impl FoldRequest {
    pub fn new(geometry: PageGeometry, word: impl Into<String>, method: FoldMethod) -> Self {
        Self {
            geometry,
            word: word.into(),
            method,
        }
    }

    /// The word check runs first so an empty word is reported even when the
    /// geometry is also bad.
    pub fn validate(&self) -> Result<()> {
        if self.word.is_empty() {
            return Err(BookfoldError::empty_word());
        }
        self.geometry.validate()
    }
}

/// Top/bottom fold offsets measured from the top edge of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldPoint {
    pub top_mm: f64,
    pub bottom_mm: f64,
}

/// A fold point clamped into the band of the page assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionedFoldPoint {
    pub top_mm: f64,
    pub bottom_mm: f64,
    pub section_top_mm: f64,
    pub section_bottom_mm: f64,
}

/// Folds for a page that has at least one ink sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum PageFolds {
    Single(FoldPoint),
    /// One to three points in top-to-bottom order.
    Multi(Vec<SectionedFoldPoint>),
}

/// `None` means the page is left unfolded.
pub type PageFoldEntry = Option<PageFolds>;

/// Ordered per-page fold instructions for one generation. Index 0 is page 1.
///
/// Always holds exactly `geometry.page_count` entries; deserialization goes
/// through the same check as [`FoldPlan::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FoldPlanParts")]
pub struct FoldPlan {
    method: FoldMethod,
    geometry: PageGeometry,
    entries: Vec<PageFoldEntry>,
}

#[derive(Deserialize)]
struct FoldPlanParts {
    method: FoldMethod,
    geometry: PageGeometry,
    entries: Vec<PageFoldEntry>,
}

impl TryFrom<FoldPlanParts> for FoldPlan {
    type Error = BookfoldError;

    fn try_from(parts: FoldPlanParts) -> Result<Self> {
        parts.geometry.validate()?;
        Self::new(parts.method, parts.geometry, parts.entries)
    }
}

impl FoldPlan {
    /// Build a plan, rejecting entry lists that do not cover every page.
    pub fn new(method: FoldMethod, geometry: PageGeometry, entries: Vec<PageFoldEntry>) -> Result<Self> {
        if entries.len() != geometry.page_count {
            return Err(BookfoldError::InvalidInput(format!(
                "plan has {} entries for {} pages",
                entries.len(),
                geometry.page_count
            )));
        }
        Ok(Self {
            method,
            geometry,
            entries,
        })
    }

    pub fn method(&self) -> FoldMethod {
        self.method
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn entries(&self) -> &[PageFoldEntry] {
        &self.entries
    }

    /// Entry for a zero-based page index.
    pub fn entry(&self, index: usize) -> Option<&PageFoldEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pages that need at least one fold.
    pub fn folded_pages(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

}

/// Standard paper sizes for exported instruction sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_rejects_nan_and_negative() {
        assert!(PageGeometry::new(f64::NAN, 130.0, 10).is_err());
        assert!(PageGeometry::new(200.0, -1.0, 10).is_err());
        assert!(PageGeometry::new(200.0, f64::INFINITY, 10).is_err());
        assert!(PageGeometry::new(0.0, 130.0, 10).is_err());
    }

    #[test]
    fn geometry_rejects_zero_pages() {
        let err = PageGeometry::new(200.0, 130.0, 0).unwrap_err();
        assert!(matches!(err, BookfoldError::InvalidInput(_)));
    }

    #[test]
    fn empty_word_reported_before_bad_geometry() {
        let request = FoldRequest {
            geometry: PageGeometry {
                height_mm: f64::NAN,
                width_mm: 130.0,
                page_count: 0,
            },
            word: String::new(),
            method: FoldMethod::SingleBand,
        };
        match request.validate() {
            Err(BookfoldError::InvalidInput(msg)) => assert!(msg.contains("word")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn method_keys_round_trip() {
        for method in [FoldMethod::SingleBand, FoldMethod::MultiBand] {
            assert_eq!(FoldMethod::from_key(method.key()), Some(method));
        }
        assert_eq!(FoldMethod::from_key("triple"), None);
    }

    #[test]
    fn plan_json_tags_entries() {
        let geometry = PageGeometry::new(200.0, 130.0, 2).unwrap();
        let plan = FoldPlan::new(
            FoldMethod::SingleBand,
            geometry,
            vec![
                None,
                Some(PageFolds::Single(FoldPoint {
                    top_mm: 20.0,
                    bottom_mm: 180.0,
                })),
            ],
        )
        .unwrap();
        let json = serde_json::to_string_pretty(&plan).unwrap();
        assert!(json.contains("\"kind\": \"single\""));
        let back: FoldPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
        assert_eq!(back.folded_pages(), 1);
    }

    #[test]
    fn plan_rejects_entry_count_mismatch() {
        let geometry = PageGeometry::new(200.0, 130.0, 3).unwrap();
        let err = FoldPlan::new(FoldMethod::SingleBand, geometry, vec![None, None]).unwrap_err();
        assert!(matches!(err, BookfoldError::InvalidInput(_)));
    }

    #[test]
    fn plan_json_with_short_entries_is_rejected() {
        let json = r#"{
            "method": "SingleBand",
            "geometry": { "height_mm": 200.0, "width_mm": 130.0, "page_count": 3 },
            "entries": [null]
        }"#;
        assert!(serde_json::from_str::<FoldPlan>(json).is_err());
    }
}
