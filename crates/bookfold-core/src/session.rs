// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session — owns the current fold plan and the page navigation cursor.
//
// Only `generate`/`install` replace the plan. A failed generation leaves the
// previous plan and cursor exactly as they were.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{BookfoldError, Result};
use crate::types::{FoldPlan, FoldRequest, PageFoldEntry};

/// Anything that can turn a request into a fold plan.
pub trait FoldPlanner {
    fn plan(&self, request: &FoldRequest) -> Result<FoldPlan>;
}

/// What the navigation view shows for the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Zero-based page index.
    pub index: usize,
    /// Pages in the plan.
    pub total: usize,
    pub entry: &'a PageFoldEntry,
}

impl PageView<'_> {
    /// One-based page number for display.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

/// The single current plan plus where the user is in it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    plan: Option<FoldPlan>,
    current_page: usize,
    generated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan `request` and make it current, resetting the cursor to page 1.
    pub fn generate(&mut self, planner: &impl FoldPlanner, request: &FoldRequest) -> Result<&FoldPlan> {
        let plan = planner.plan(request)?;
        info!(
            pages = plan.len(),
            folded = plan.folded_pages(),
            method = ?plan.method(),
            "fold plan generated"
        );
        Ok(self.install(plan))
    }

    /// Replace the current plan with one produced elsewhere.
    pub fn install(&mut self, plan: FoldPlan) -> &FoldPlan {
        self.current_page = 0;
        self.generated_at = Some(Utc::now());
        self.plan.insert(plan)
    }

    pub fn plan(&self) -> Result<&FoldPlan> {
        self.plan.as_ref().ok_or(BookfoldError::EmptyPlan)
    }

    /// When the current plan was generated.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// Owned copy of the current plan for export.
    pub fn snapshot(&self) -> Result<FoldPlan> {
        self.plan().cloned()
    }

    pub fn current(&self) -> Result<PageView<'_>> {
        let plan = self.plan()?;
        let entry = plan.entry(self.current_page).ok_or(BookfoldError::EmptyPlan)?;
        Ok(PageView {
            index: self.current_page,
            total: plan.len(),
            entry,
        })
    }

    /// Advance one page; stays on the last page.
    pub fn next_page(&mut self) -> Result<PageView<'_>> {
        let total = self.plan()?.len();
        if self.current_page + 1 < total {
            self.current_page += 1;
        }
        debug!(page = self.current_page + 1, total, "next page");
        self.current()
    }

    /// Go back one page; stays on the first page.
    pub fn prev_page(&mut self) -> Result<PageView<'_>> {
        let total = self.plan()?.len();
        self.current_page = self.current_page.saturating_sub(1);
        debug!(page = self.current_page + 1, total, "previous page");
        self.current()
    }

    /// Jump to a zero-based page, clamped into the plan.
    pub fn go_to(&mut self, index: usize) -> Result<PageView<'_>> {
        let total = self.plan()?.len();
        self.current_page = index.min(total.saturating_sub(1));
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::extract::extract_plan;
    use crate::types::{FoldMethod, PageGeometry};

    /// Plans from a fixed bitmap, ignoring the word's glyphs.
    struct StubPlanner(Bitmap);

    impl FoldPlanner for StubPlanner {
        fn plan(&self, request: &FoldRequest) -> Result<FoldPlan> {
            request.validate()?;
            extract_plan(&self.0, request.method, request.geometry)
        }
    }

    fn request(word: &str, pages: usize) -> FoldRequest {
        FoldRequest::new(
            PageGeometry::new(200.0, 130.0, pages).unwrap(),
            word,
            FoldMethod::MultiBand,
        )
    }

    fn planner() -> StubPlanner {
        StubPlanner(Bitmap::from_rows(&["#.#.#", "#####", "#...#"]))
    }

    #[test]
    fn navigation_before_generation_is_empty_plan() {
        let mut session = Session::new();
        assert!(matches!(session.current(), Err(BookfoldError::EmptyPlan)));
        assert!(matches!(session.next_page(), Err(BookfoldError::EmptyPlan)));
        assert!(matches!(session.prev_page(), Err(BookfoldError::EmptyPlan)));
        assert!(matches!(session.snapshot(), Err(BookfoldError::EmptyPlan)));
    }

    #[test]
    fn navigation_saturates_at_both_ends() {
        let mut session = Session::new();
        session.generate(&planner(), &request("HI", 3)).unwrap();

        assert!(session.prev_page().unwrap().is_first());
        session.next_page().unwrap();
        session.next_page().unwrap();
        let view = session.next_page().unwrap();
        assert_eq!(view.number(), 3);
        assert!(view.is_last());
    }

    #[test]
    fn generate_resets_cursor() {
        let mut session = Session::new();
        session.generate(&planner(), &request("HI", 5)).unwrap();
        session.go_to(4).unwrap();
        assert_eq!(session.current().unwrap().index, 4);

        session.generate(&planner(), &request("HI", 5)).unwrap();
        assert_eq!(session.current().unwrap().index, 0);
        assert!(session.generated_at().is_some());
    }

    #[test]
    fn failed_generation_keeps_previous_plan() {
        let mut session = Session::new();
        session.generate(&planner(), &request("HI", 5)).unwrap();
        session.go_to(2).unwrap();
        let before = session.snapshot().unwrap();

        let err = session.generate(&planner(), &request("", 5)).unwrap_err();
        assert!(matches!(err, BookfoldError::InvalidInput(_)));
        assert_eq!(session.snapshot().unwrap(), before);
        assert_eq!(session.current().unwrap().index, 2);
    }

    #[test]
    fn go_to_clamps_past_the_end() {
        let mut session = Session::new();
        session.generate(&planner(), &request("HI", 4)).unwrap();
        assert_eq!(session.go_to(99).unwrap().index, 3);
    }

    #[test]
    fn snapshot_is_independent_of_later_generations() {
        let mut session = Session::new();
        session.generate(&planner(), &request("HI", 5)).unwrap();
        let snapshot = session.snapshot().unwrap();

        session.generate(&planner(), &request("HI", 2)).unwrap();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(session.plan().unwrap().len(), 2);
    }
}
