// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — lay out a fold plan as printable instruction sheets using
// `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.
//
// Each plan entry becomes one block: an instruction line with the page diagram
// drawn underneath as vector lines. Blocks flow down the sheet and a new sheet
// starts once the cursor has passed the configured break position.

use std::path::Path;

use bookfold_core::config::ExportConfig;
use bookfold_core::error::BookfoldError;
use bookfold_core::types::FoldPlan;
use printpdf::{
    BuiltinFont, Color, Line, LineDashPattern, LinePoint, Mm, Op, PdfDocument, PdfPage,
    PdfSaveOptions, PdfWarnMsg, Point, Pt, Rgb, TextItem,
};
use tracing::{debug, info, instrument};

use crate::diagram::{PageDiagram, render_page};

/// Where one plan entry lands in the exported document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    /// Zero-based plan entry.
    pub entry: usize,
    /// Zero-based physical sheet.
    pub sheet: usize,
    /// Instruction baseline, millimetres from the top of the sheet.
    pub y_mm: f32,
}

/// Flow `count` blocks down the sheets.
///
/// The break check happens before a block is placed, so a block may start
/// at or above the break position and still run past it.
pub fn layout_blocks(count: usize, config: &ExportConfig) -> Vec<BlockPlacement> {
    let mut placements = Vec::with_capacity(count);
    let mut sheet = 0;
    let mut y_mm = config.first_block_y_mm;

    for entry in 0..count {
        if y_mm > config.page_break_after_mm {
            sheet += 1;
            y_mm = config.continued_block_y_mm;
        }
        placements.push(BlockPlacement { entry, sheet, y_mm });
        y_mm += config.block_advance_mm;
    }

    placements
}

/// Writes fold plans as PDF instruction sheets.
pub struct InstructionExporter {
    config: ExportConfig,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl InstructionExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            title: None,
        }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Paper dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = self.config.paper_size.dimensions_mm();
        (Mm(w_mm as f32), Mm(h_mm as f32))
    }

    /// Render every entry of `plan`, in page order, into a PDF.
    #[instrument(skip(self, plan), fields(pages = plan.len()))]
    pub fn export(&self, plan: &FoldPlan) -> Result<Vec<u8>, BookfoldError> {
        if plan.is_empty() {
            return Err(BookfoldError::EmptyPlan);
        }

        let (page_w, page_h) = self.page_dimensions();
        let heading = format!("Book Folding Instructions ({})", plan.method().label());
        let title = self.title.as_deref().unwrap_or("Book Folding Instructions");

        info!(paper = ?self.config.paper_size, title, "Exporting fold plan");

        let placements = layout_blocks(plan.len(), &self.config);
        let sheet_count = placements.last().map_or(1, |p| p.sheet + 1);
        let mut sheets: Vec<Vec<Op>> = (0..sheet_count).map(|_| Vec::new()).collect();

        let frame = SheetFrame {
            height_mm: page_h.0,
        };
        sheets[0].extend(frame.text(
            self.config.margin_left_mm,
            self.config.heading_y_mm,
            self.config.heading_font_pt,
            &heading,
        ));

        for placement in &placements {
            let entry = plan
                .entry(placement.entry)
                .ok_or_else(|| BookfoldError::PdfError(format!("entry {} missing", placement.entry)))?;
            let diagram = render_page(plan.geometry(), placement.entry, entry);
            let ops = &mut sheets[placement.sheet];

            ops.extend(frame.text(
                self.config.margin_left_mm,
                placement.y_mm,
                self.config.body_font_pt,
                &diagram.summary,
            ));
            ops.extend(frame.diagram(
                &diagram,
                (
                    self.config.margin_left_mm,
                    placement.y_mm + self.config.diagram_offset_mm,
                ),
                (self.config.diagram_width_mm, self.config.diagram_height_mm),
            ));
        }

        let pages: Vec<PdfPage> = sheets
            .into_iter()
            .map(|ops| PdfPage::new(page_w, page_h, ops))
            .collect();

        let mut doc = PdfDocument::new(title);
        doc.with_pages(pages);

        debug!(
            blocks = placements.len(),
            sheets = doc.pages.len(),
            "Instruction layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(output)
    }

    /// Export and write directly to a file.
    pub fn write_to_file(&self, plan: &FoldPlan, path: impl AsRef<Path>) -> Result<(), BookfoldError> {
        let bytes = self.export(plan)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote instruction PDF to {}", path.as_ref().display());
        Ok(())
    }
}

/// Converts top-down millimetres into printpdf's bottom-up points.
struct SheetFrame {
    height_mm: f32,
}

impl SheetFrame {
    fn point(&self, x_mm: f32, y_mm: f32) -> Point {
        Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(self.height_mm - y_mm).into_pt(),
        }
    }

    fn text(&self, x_mm: f32, y_mm: f32, size_pt: f32, text: &str) -> Vec<Op> {
        vec![
            Op::StartTextSection,
            Op::SetTextCursor {
                pos: self.point(x_mm, y_mm),
            },
            Op::SetFontSizeBuiltinFont {
                size: Pt(size_pt),
                font: BuiltinFont::Helvetica,
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.to_string())],
                font: BuiltinFont::Helvetica,
            },
            Op::EndTextSection,
        ]
    }

    /// Draw `diagram` scaled to fit `bounds` with its top-left at `origin`.
    fn diagram(&self, diagram: &PageDiagram, origin: (f32, f32), bounds: (f32, f32)) -> Vec<Op> {
        let scale = (bounds.0 / diagram.width_mm as f32).min(bounds.1 / diagram.height_mm as f32);
        let place = |(x, y): (f64, f64)| {
            self.point(origin.0 + x as f32 * scale, origin.1 + y as f32 * scale)
        };

        let mut ops = vec![
            Op::SaveGraphicsState,
            Op::SetOutlineThickness { pt: Pt(0.6) },
        ];

        for segment in &diagram.segments {
            let (r, g, b) = segment.stroke.rgb();
            ops.push(Op::SetOutlineColor {
                col: Color::Rgb(Rgb {
                    r: r as f32 / 255.0,
                    g: g as f32 / 255.0,
                    b: b as f32 / 255.0,
                    icc_profile: None,
                }),
            });
            ops.push(Op::SetLineDashPattern {
                dash: dash_pattern(segment.stroke.is_dashed()),
            });
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        LinePoint {
                            p: place(segment.from),
                            bezier: false,
                        },
                        LinePoint {
                            p: place(segment.to),
                            bezier: false,
                        },
                    ],
                    is_closed: false,
                },
            });
        }

        ops.push(Op::RestoreGraphicsState);
        ops
    }
}

fn dash_pattern(dashed: bool) -> LineDashPattern {
    let (dash, gap) = if dashed { (Some(3), Some(2)) } else { (None, None) };
    LineDashPattern {
        offset: 0,
        dash_1: dash,
        gap_1: gap,
        dash_2: None,
        gap_2: None,
        dash_3: None,
        gap_3: None,
    }
}
