// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binary ink bitmap — one column per page, one row per height sample.

/// Row count the rasterizer produces by default.
pub const SAMPLE_RESOLUTION: usize = 200;

/// A contiguous vertical run of ink in one column, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkRun {
    pub start: usize,
    pub end: usize,
}

/// Row-major grid of ink samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    ink: Vec<bool>,
}

impl Bitmap {
    /// Build a bitmap by asking `is_ink(x, y)` for every sample.
    pub fn from_fn(width: usize, height: usize, mut is_ink: impl FnMut(usize, usize) -> bool) -> Self {
        let mut ink = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                ink.push(is_ink(x, y));
            }
        }
        Self { width, height, ink }
    }

    /// Parse ASCII art, one string per row; `#` is ink, anything else is
    /// paper. Short rows are padded with paper.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Self::from_fn(width, rows.len(), |x, y| rows[y].chars().nth(x) == Some('#'))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range coordinates read as paper.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.ink[y * self.width + x]
    }

    /// Total ink samples in the bitmap.
    pub fn ink_count(&self) -> usize {
        self.ink.iter().filter(|&&ink| ink).count()
    }

    /// First and last ink sample in column `x`, both inclusive.
    pub fn ink_span(&self, x: usize) -> Option<(usize, usize)> {
        let mut span: Option<(usize, usize)> = None;
        for y in 0..self.height {
            if self.is_ink(x, y) {
                span = Some(match span {
                    Some((first, _)) => (first, y),
                    None => (y, y),
                });
            }
        }
        span
    }

    /// Maximal ink runs in column `x`, top to bottom.
    pub fn ink_runs(&self, x: usize) -> Vec<InkRun> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;

        for y in 0..self.height {
            match (self.is_ink(x, y), start) {
                (true, None) => start = Some(y),
                (false, Some(s)) => {
                    runs.push(InkRun { start: s, end: y });
                    start = None;
                }
                _ => {}
            }
        }

        // Ink continuing to the bottom edge closes at the bitmap height.
        if let Some(s) = start {
            runs.push(InkRun {
                start: s,
                end: self.height,
            });
        }

        runs
    }
}
