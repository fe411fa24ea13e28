// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bookfold-document — Everything between a typed word and a printable sheet.
//
// Provides word rasterization onto the sample grid, the fold planner that ties
// rasterization to extraction, per-page diagrams with instruction text, and
// PDF export of a whole fold plan.

pub mod diagram;
pub mod pdf;
pub mod planner;
pub mod raster;

// Re-export the primary structs so callers can use `bookfold_document::Rasterizer` etc.
pub use diagram::{PageDiagram, render_page};
pub use pdf::reader::PdfInspector;
pub use pdf::writer::InstructionExporter;
pub use planner::{TextFoldPlanner, compute_fold_plan};
pub use raster::rasterizer::Rasterizer;
