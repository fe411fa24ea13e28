// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::bitmap::SAMPLE_RESOLUTION;
use crate::error::{BookfoldError, Result};
use crate::types::{FoldMethod, PaperSize};

/// Persistent application settings. Only generation defaults live here;
/// fold plans are never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pre-filled page height in the generation form (mm).
    pub default_height_mm: f64,
    /// Pre-filled page width in the generation form (mm).
    pub default_width_mm: f64,
    /// Pre-filled number of pages.
    pub default_page_count: usize,
    /// Extractor selected when the app starts.
    pub default_method: FoldMethod,
    /// Word rasterization settings.
    pub raster: RasterConfig,
    /// PDF instruction sheet layout.
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_height_mm: 200.0,
            default_width_mm: 130.0,
            default_page_count: 200,
            default_method: FoldMethod::default(),
            raster: RasterConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// How a word is turned into a bitmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Rows in the bitmap; every column is sampled this many times.
    pub sample_height: usize,
    /// Em size of the bold face, in pixels of the sample grid.
    pub font_size_px: f32,
    /// Luma below this value counts as ink.
    pub ink_threshold: u8,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            sample_height: SAMPLE_RESOLUTION,
            font_size_px: 150.0,
            ink_threshold: 128,
        }
    }
}

impl RasterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_height == 0 {
            return Err(BookfoldError::InvalidInput(
                "sample height must be at least 1".into(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(BookfoldError::InvalidInput(format!(
                "font size must be positive (got {})",
                self.font_size_px
            )));
        }
        Ok(())
    }
}

/// Layout of the exported PDF. Vertical positions are millimetres from the
/// top of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub paper_size: PaperSize,
    pub margin_left_mm: f32,
    /// Baseline of the heading on the first sheet.
    pub heading_y_mm: f32,
    pub heading_font_pt: f32,
    pub body_font_pt: f32,
    /// Cursor position of the first block on the first sheet.
    pub first_block_y_mm: f32,
    /// Cursor position of the first block on every following sheet.
    pub continued_block_y_mm: f32,
    /// Cursor advance after each block.
    pub block_advance_mm: f32,
    /// A new sheet starts once the cursor has passed this position.
    pub page_break_after_mm: f32,
    /// Gap between an instruction line and the top of its diagram.
    pub diagram_offset_mm: f32,
    /// Box the page diagram is scaled to fit into.
    pub diagram_width_mm: f32,
    pub diagram_height_mm: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margin_left_mm: 20.0,
            heading_y_mm: 20.0,
            heading_font_pt: 16.0,
            body_font_pt: 11.0,
            first_block_y_mm: 30.0,
            continued_block_y_mm: 20.0,
            block_advance_mm: 120.0,
            page_break_after_mm: 230.0,
            diagram_offset_mm: 5.0,
            diagram_width_mm: 60.0,
            diagram_height_mm: 100.0,
        }
    }
}
