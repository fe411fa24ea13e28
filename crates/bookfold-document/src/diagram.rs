// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page diagrams — the outline of one page, its fold lines, and the matching
// instruction text.
//
// Coordinates are page-local millimetres with y growing downward from the top
// edge, the same frame fold offsets are measured in. The PDF writer and the
// app's SVG view both draw from the same segment list.

use bookfold_core::types::{FoldPoint, PageFoldEntry, PageFolds, PageGeometry, SectionedFoldPoint};
use serde::Serialize;

/// Fold line colours, picked by section index modulo the palette length.
pub const PALETTE: [(u8, u8, u8); 6] = [
    (220, 38, 38),
    (37, 99, 235),
    (22, 163, 74),
    (234, 88, 12),
    (147, 51, 234),
    (13, 148, 136),
];

/// How a segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stroke {
    /// Page edge.
    Outline,
    /// Fold line; `style` indexes [`PALETTE`] modulo its length.
    Fold { style: usize },
    /// Dashed boundary between two sections.
    Divider,
}

impl Stroke {
    /// RGB colour of this stroke.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Outline => (0, 0, 0),
            Self::Fold { style } => PALETTE[style % PALETTE.len()],
            Self::Divider => (150, 150, 150),
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, Self::Divider)
    }
}

/// A straight line in page millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub stroke: Stroke,
}

/// Everything needed to show one page of instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDiagram {
    /// Zero-based page index.
    pub index: usize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub segments: Vec<Segment>,
    /// Full sentence shown under the diagram.
    pub instruction: String,
    /// Compact line used in exported sheets.
    pub summary: String,
}

/// Build the diagram and instruction text for one page.
pub fn render_page(geometry: &PageGeometry, index: usize, entry: &PageFoldEntry) -> PageDiagram {
    let (w, h) = (geometry.width_mm, geometry.height_mm);
    let mut segments = outline(w, h);

    match entry {
        None => {}
        Some(PageFolds::Single(point)) => {
            segments.push(fold_line((0.0, 0.0), (w, point.top_mm), 0));
            segments.push(fold_line((0.0, h), (w, point.bottom_mm), 0));
        }
        Some(PageFolds::Multi(points)) => {
            for (i, point) in points.iter().enumerate() {
                segments.push(fold_line((0.0, point.section_top_mm), (w, point.top_mm), i));
                segments.push(fold_line((0.0, point.section_bottom_mm), (w, point.bottom_mm), i));
            }
            for point in points.iter().skip(1) {
                segments.push(Segment {
                    from: (0.0, point.section_top_mm),
                    to: (w, point.section_top_mm),
                    stroke: Stroke::Divider,
                });
            }
        }
    }

    PageDiagram {
        index,
        width_mm: w,
        height_mm: h,
        segments,
        instruction: instruction_text(index, entry),
        summary: summary_text(index, entry),
    }
}

fn outline(w: f64, h: f64) -> Vec<Segment> {
    let corners = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)];
    (0..corners.len())
        .map(|i| Segment {
            from: corners[i],
            to: corners[(i + 1) % corners.len()],
            stroke: Stroke::Outline,
        })
        .collect()
}

fn fold_line(from: (f64, f64), to: (f64, f64), style: usize) -> Segment {
    Segment {
        from,
        to,
        stroke: Stroke::Fold { style },
    }
}

/// Sentence for the on-screen page view.
pub fn instruction_text(index: usize, entry: &PageFoldEntry) -> String {
    let page = index + 1;
    match entry {
        None => format!("Page {page}: No folds needed."),
        Some(PageFolds::Single(FoldPoint { top_mm, bottom_mm })) => format!(
            "Page {page}: Fold top corner down to {top_mm:.1} mm, and bottom corner up to {bottom_mm:.1} mm."
        ),
        Some(PageFolds::Multi(points)) => {
            let clauses: Vec<String> = points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let SectionedFoldPoint {
                        top_mm,
                        bottom_mm,
                        section_top_mm,
                        section_bottom_mm,
                    } = point;
                    format!(
                        "fold {}: top {top_mm:.1} mm, bottom {bottom_mm:.1} mm (section {section_top_mm:.1} to {section_bottom_mm:.1} mm)",
                        i + 1
                    )
                })
                .collect();
            format!("Page {page}: {}.", clauses.join("; "))
        }
    }
}

/// Shorter line for exported sheets.
pub fn summary_text(index: usize, entry: &PageFoldEntry) -> String {
    let page = index + 1;
    match entry {
        None => format!("Page {page}: No folds"),
        Some(PageFolds::Single(FoldPoint { top_mm, bottom_mm })) => {
            format!("Page {page}: Top fold at {top_mm:.1} mm, Bottom fold at {bottom_mm:.1} mm")
        }
        Some(PageFolds::Multi(points)) => {
            let folds: Vec<String> = points
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{}) {:.1} / {:.1} mm", i + 1, p.top_mm, p.bottom_mm))
                .collect();
            format!("Page {page}: {}", folds.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry::new(200.0, 130.0, 10).unwrap()
    }

    fn sectioned(top: f64, bottom: f64, s_top: f64, s_bottom: f64) -> SectionedFoldPoint {
        SectionedFoldPoint {
            top_mm: top,
            bottom_mm: bottom,
            section_top_mm: s_top,
            section_bottom_mm: s_bottom,
        }
    }

    #[test]
    fn unfolded_page_is_outline_only() {
        let diagram = render_page(&geometry(), 2, &None);
        assert_eq!(diagram.segments.len(), 4);
        assert!(diagram.segments.iter().all(|s| s.stroke == Stroke::Outline));
        assert_eq!(diagram.instruction, "Page 3: No folds needed.");
        assert_eq!(diagram.summary, "Page 3: No folds");
    }

    #[test]
    fn single_fold_runs_from_the_corners() {
        let entry = Some(PageFolds::Single(FoldPoint {
            top_mm: 20.0,
            bottom_mm: 180.0,
        }));
        let diagram = render_page(&geometry(), 0, &entry);
        assert_eq!(diagram.segments.len(), 6);
        assert_eq!(diagram.segments[4].from, (0.0, 0.0));
        assert_eq!(diagram.segments[4].to, (130.0, 20.0));
        assert_eq!(diagram.segments[5].from, (0.0, 200.0));
        assert_eq!(diagram.segments[5].to, (130.0, 180.0));
        assert_eq!(
            diagram.instruction,
            "Page 1: Fold top corner down to 20.0 mm, and bottom corner up to 180.0 mm."
        );
        assert_eq!(
            diagram.summary,
            "Page 1: Top fold at 20.0 mm, Bottom fold at 180.0 mm"
        );
    }

    #[test]
    fn multi_fold_adds_dividers_between_sections() {
        let entry = Some(PageFolds::Multi(vec![
            sectioned(30.0, 60.0, 0.0, 100.0),
            sectioned(140.0, 170.0, 100.0, 200.0),
        ]));
        let diagram = render_page(&geometry(), 4, &entry);
        // 4 outline + 2 folds per point + 1 divider
        assert_eq!(diagram.segments.len(), 4 + 4 + 1);
        let dividers: Vec<_> = diagram
            .segments
            .iter()
            .filter(|s| s.stroke == Stroke::Divider)
            .collect();
        assert_eq!(dividers.len(), 1);
        assert_eq!(dividers[0].from, (0.0, 100.0));
        assert!(diagram.instruction.starts_with("Page 5: fold 1: top 30.0 mm"));
        assert!(diagram.instruction.contains("fold 2: top 140.0 mm, bottom 170.0 mm (section 100.0 to 200.0 mm)"));
        assert_eq!(diagram.summary, "Page 5: 1) 30.0 / 60.0 mm, 2) 140.0 / 170.0 mm");
    }

    #[test]
    fn palette_wraps_by_section_index() {
        assert_eq!(Stroke::Fold { style: 0 }.rgb(), Stroke::Fold { style: 6 }.rgb());
        assert_ne!(Stroke::Fold { style: 0 }.rgb(), Stroke::Fold { style: 1 }.rgb());
    }
}
