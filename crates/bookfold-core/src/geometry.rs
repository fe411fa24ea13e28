// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sample-space to page-space conversion and equal-height page sections.

use serde::{Deserialize, Serialize};

/// Map a bitmap row to millimetres from the top of the page.
pub fn sample_to_mm(sample: usize, resolution: usize, height_mm: f64) -> f64 {
    (sample as f64 / resolution as f64) * height_mm
}

/// One equal-height band of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub top_mm: f64,
    pub bottom_mm: f64,
}

impl Section {
    /// `max(top, min(value, bottom))`. Idempotent.
    pub fn clamp(&self, value: f64) -> f64 {
        self.top_mm.max(value.min(self.bottom_mm))
    }
}

/// Split `[0, height_mm]` into `count` contiguous bands, top first.
///
/// Neighbouring bands share their boundary value exactly and the last band
/// ends at `height_mm`.
pub fn sections(height_mm: f64, count: usize) -> Vec<Section> {
    if count == 0 {
        return Vec::new();
    }

    let section_height = height_mm / count as f64;
    (0..count)
        .map(|i| Section {
            top_mm: i as f64 * section_height,
            bottom_mm: if i + 1 == count {
                height_mm
            } else {
                (i + 1) as f64 * section_height
            },
        })
        .collect()
}
