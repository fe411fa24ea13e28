// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bookfold — Core types, fold extraction, and session state shared across all
// crates. Nothing in here touches fonts, images, or files.

pub mod bitmap;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod human_errors;
pub mod session;
pub mod types;

pub use bitmap::{Bitmap, InkRun};
pub use config::{AppConfig, ExportConfig, RasterConfig};
pub use error::BookfoldError;
pub use session::{FoldPlanner, PageView, Session};
pub use types::*;
