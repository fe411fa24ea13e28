// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fold extraction — turn each bitmap column into the folds for one page.
//
// Two extractors exist. The single-band extractor spans the first to the last
// ink sample and deliberately merges separate strokes. The multi-band extractor
// keeps up to `MAX_BANDS` runs, assigns each to an equal-height section of the
// page, and clamps its fold pair into that section. Runs past the limit are
// dropped, not merged.

use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::geometry::{sample_to_mm, sections};
use crate::types::{
    FoldMethod, FoldPlan, FoldPoint, PageFoldEntry, PageFolds, PageGeometry, SectionedFoldPoint,
};

/// Most fold pairs a single page receives from the multi-band extractor.
pub const MAX_BANDS: usize = 3;

/// Single-band fold for column `x`, or `None` when the column has no ink.
pub fn single_band_column(bitmap: &Bitmap, x: usize, height_mm: f64) -> Option<FoldPoint> {
    let (first, last) = bitmap.ink_span(x)?;
    let resolution = bitmap.height();
    Some(FoldPoint {
        top_mm: sample_to_mm(first, resolution, height_mm),
        bottom_mm: sample_to_mm(last, resolution, height_mm),
    })
}

/// Multi-band folds for column `x`, or `None` when the column has no ink.
pub fn multi_band_column(
    bitmap: &Bitmap,
    x: usize,
    height_mm: f64,
) -> Option<Vec<SectionedFoldPoint>> {
    let resolution = bitmap.height();
    let mut runs = bitmap.ink_runs(x);
    runs.truncate(MAX_BANDS);
    if runs.is_empty() {
        return None;
    }

    let bands = sections(height_mm, runs.len());
    let points = runs
        .iter()
        .zip(bands.iter())
        .map(|(run, band)| SectionedFoldPoint {
            top_mm: band.clamp(sample_to_mm(run.start, resolution, height_mm)),
            bottom_mm: band.clamp(sample_to_mm(run.end, resolution, height_mm)),
            section_top_mm: band.top_mm,
            section_bottom_mm: band.bottom_mm,
        })
        .collect();

    Some(points)
}

/// Folds for column `x` using the chosen method.
pub fn extract_column(
    bitmap: &Bitmap,
    x: usize,
    method: FoldMethod,
    height_mm: f64,
) -> PageFoldEntry {
    match method {
        FoldMethod::SingleBand => single_band_column(bitmap, x, height_mm).map(PageFolds::Single),
        FoldMethod::MultiBand => multi_band_column(bitmap, x, height_mm).map(PageFolds::Multi),
    }
}

/// Run the extractor over every page in order. Column `x` is page `x + 1`;
/// pages beyond the bitmap width come out unfolded.
pub fn extract_plan(bitmap: &Bitmap, method: FoldMethod, geometry: PageGeometry) -> Result<FoldPlan> {
    let entries: Vec<PageFoldEntry> = (0..geometry.page_count)
        .map(|x| extract_column(bitmap, x, method, geometry.height_mm))
        .collect();

    debug!(
        pages = entries.len(),
        folded = entries.iter().filter(|entry| entry.is_some()).count(),
        ?method,
        "fold extraction complete"
    );

    FoldPlan::new(method, geometry, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(height_mm: f64, page_count: usize) -> PageGeometry {
        PageGeometry::new(height_mm, 130.0, page_count).unwrap()
    }

    /// One column, `height` rows, ink on the given half-open row ranges.
    fn column(height: usize, ranges: &[(usize, usize)]) -> Bitmap {
        Bitmap::from_fn(1, height, |_, y| ranges.iter().any(|&(a, b)| y >= a && y < b))
    }

    #[test]
    fn single_band_converts_first_and_last_sample() {
        let bitmap = column(200, &[(20, 181)]);
        let fold = single_band_column(&bitmap, 0, 200.0).unwrap();
        assert_eq!(fold.top_mm, 20.0);
        assert_eq!(fold.bottom_mm, 180.0);
    }

    #[test]
    fn single_band_scales_to_page_height() {
        let bitmap = column(200, &[(50, 101)]);
        let fold = single_band_column(&bitmap, 0, 240.0).unwrap();
        assert_eq!(fold.top_mm, 50.0 / 200.0 * 240.0);
        assert_eq!(fold.bottom_mm, 100.0 / 200.0 * 240.0);
        assert!(fold.top_mm <= fold.bottom_mm);
    }

    #[test]
    fn single_band_merges_separate_strokes() {
        let bitmap = column(200, &[(10, 30), (150, 170)]);
        let fold = single_band_column(&bitmap, 0, 200.0).unwrap();
        assert_eq!(fold.top_mm, 10.0);
        assert_eq!(fold.bottom_mm, 169.0);
    }

    #[test]
    fn inkless_column_is_unfolded() {
        let bitmap = Bitmap::from_fn(4, 200, |_, _| false);
        let plan = extract_plan(&bitmap, FoldMethod::SingleBand, geometry(200.0, 4)).unwrap();
        assert_eq!(plan.len(), 4);
        assert!(plan.entries().iter().all(|entry| entry.is_none()));

        let plan = extract_plan(&bitmap, FoldMethod::MultiBand, geometry(200.0, 4)).unwrap();
        assert!(plan.entries().iter().all(|entry| entry.is_none()));
    }

    #[test]
    fn two_runs_land_in_their_own_halves() {
        // A ring: top stroke and bottom stroke with a hole between.
        let bitmap = column(200, &[(30, 60), (140, 170)]);
        let points = multi_band_column(&bitmap, 0, 200.0).unwrap();
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].section_top_mm, 0.0);
        assert_eq!(points[0].section_bottom_mm, 100.0);
        assert_eq!(points[0].top_mm, 30.0);
        assert_eq!(points[0].bottom_mm, 60.0);

        assert_eq!(points[1].section_top_mm, 100.0);
        assert_eq!(points[1].section_bottom_mm, 200.0);
        assert_eq!(points[1].top_mm, 140.0);
        assert_eq!(points[1].bottom_mm, 170.0);
    }

    #[test]
    fn runs_beyond_three_are_dropped() {
        let bitmap = column(200, &[(0, 10), (20, 30), (40, 50), (60, 70), (80, 90)]);
        let points = multi_band_column(&bitmap, 0, 300.0).unwrap();
        assert_eq!(points.len(), MAX_BANDS);
        // The third section is the bottom third, not stretched by dropped runs.
        assert_eq!(points[2].section_top_mm, 200.0);
        assert_eq!(points[2].section_bottom_mm, 300.0);
    }

    #[test]
    fn run_outside_its_section_collapses_flat() {
        // Both runs sit in the top half, so the second is clamped to the
        // top of the lower section.
        let bitmap = column(200, &[(10, 20), (40, 60)]);
        let points = multi_band_column(&bitmap, 0, 200.0).unwrap();
        assert_eq!(points[1].top_mm, 100.0);
        assert_eq!(points[1].bottom_mm, 100.0);
    }

    #[test]
    fn ink_to_bottom_edge_ends_at_page_height() {
        let bitmap = column(200, &[(150, 200)]);
        let points = multi_band_column(&bitmap, 0, 220.0).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].top_mm, 165.0);
        assert_eq!(points[0].bottom_mm, 220.0);
    }

    #[test]
    fn sectioned_points_stay_within_their_sections() {
        let bitmap = Bitmap::from_fn(40, 200, |x, y| (y * 7 + x * 13) % 11 < 4);
        let plan = extract_plan(&bitmap, FoldMethod::MultiBand, geometry(190.0, 40)).unwrap();
        for entry in plan.entries().iter().flatten() {
            let PageFolds::Multi(points) = entry else {
                panic!("multi-band plan produced a single fold");
            };
            assert!(!points.is_empty() && points.len() <= MAX_BANDS);
            for point in points {
                assert!(point.section_top_mm < point.section_bottom_mm);
                for value in [point.top_mm, point.bottom_mm] {
                    assert!(value >= point.section_top_mm && value <= point.section_bottom_mm);
                }
            }
        }
    }

    #[test]
    fn plan_length_follows_page_count() {
        let bitmap = Bitmap::from_rows(&["#.#", "###"]);
        for pages in 1..=6 {
            let plan = extract_plan(&bitmap, FoldMethod::SingleBand, geometry(100.0, pages)).unwrap();
            assert_eq!(plan.len(), pages);
        }
    }
}
