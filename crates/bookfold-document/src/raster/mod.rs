// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — draw a word onto the sample grid and threshold it to ink.

pub mod rasterizer;

pub use rasterizer::Rasterizer;
