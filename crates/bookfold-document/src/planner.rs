// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fold planner — word + geometry in, fold plan out.
//
// Validation happens before anything is drawn, then the word is rasterized one
// column per page and every column goes through the selected extractor in
// page order.

use bookfold_core::config::RasterConfig;
use bookfold_core::error::Result;
use bookfold_core::extract::extract_plan;
use bookfold_core::session::FoldPlanner;
use bookfold_core::types::{FoldPlan, FoldRequest};
use tracing::{info, instrument};

use crate::raster::rasterizer::Rasterizer;

/// Plans folds by rendering the requested word with the bundled font.
pub struct TextFoldPlanner {
    rasterizer: Rasterizer<'static>,
}

impl TextFoldPlanner {
    pub fn new(config: RasterConfig) -> Result<Self> {
        Ok(Self {
            rasterizer: Rasterizer::embedded(config)?,
        })
    }
}

impl FoldPlanner for TextFoldPlanner {
    #[instrument(skip(self, request), fields(
        word_len = request.word.chars().count(),
        pages = request.geometry.page_count,
        method = ?request.method,
    ))]
    fn plan(&self, request: &FoldRequest) -> Result<FoldPlan> {
        request.validate()?;

        let bitmap = self
            .rasterizer
            .rasterize(&request.word, request.geometry.page_count)?;
        let plan = extract_plan(&bitmap, request.method, request.geometry)?;

        info!(folded = plan.folded_pages(), "fold plan computed");
        Ok(plan)
    }
}

/// One-shot planning without keeping a planner around.
pub fn compute_fold_plan(request: &FoldRequest, config: &RasterConfig) -> Result<FoldPlan> {
    TextFoldPlanner::new(config.clone())?.plan(request)
}
