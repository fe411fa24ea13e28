// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasterizer — render a word in bold onto a white grayscale surface one pixel
// per page wide, then threshold luma into an ink bitmap.
//
// The surface is allocated and dropped inside each `rasterize` call. Words
// wider than the surface are clipped; that is expected, not an error.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use bookfold_core::bitmap::Bitmap;
use bookfold_core::config::RasterConfig;
use bookfold_core::error::BookfoldError;
use image::{GrayImage, Luma};
use imageproc::drawing::draw_text_mut;
use tracing::{debug, instrument};

/// DejaVu Sans Bold, bundled so output does not depend on installed fonts.
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

const PAPER: Luma<u8> = Luma([255u8]);
const INK: Luma<u8> = Luma([0u8]);

/// Draws words onto the sample grid.
pub struct Rasterizer<'f> {
    font: FontRef<'f>,
    config: RasterConfig,
}

impl Rasterizer<'static> {
    /// Rasterizer using the bundled bold face.
    pub fn embedded(config: RasterConfig) -> Result<Self, BookfoldError> {
        let font = FontRef::try_from_slice(EMBEDDED_FONT).map_err(|err| {
            BookfoldError::Font(format!("embedded font failed to parse: {}", err))
        })?;
        Ok(Self::with_font(font, config))
    }
}

impl<'f> Rasterizer<'f> {
    /// Rasterizer using a caller-supplied face.
    pub fn with_font(font: FontRef<'f>, config: RasterConfig) -> Self {
        Self { font, config }
    }

    /// Render `word` into a `width` x `sample_height` ink bitmap.
    #[instrument(skip(self, word), fields(word_len = word.chars().count(), width))]
    pub fn rasterize(&self, word: &str, width: usize) -> Result<Bitmap, BookfoldError> {
        if word.is_empty() {
            return Err(BookfoldError::empty_word());
        }
        if width == 0 {
            return Err(BookfoldError::InvalidInput(
                "number of pages must be at least 1".into(),
            ));
        }
        self.config.validate()?;

        let surface = self.render(word, width)?;
        let bitmap = threshold(&surface, self.config.ink_threshold);

        debug!(
            width = bitmap.width(),
            height = bitmap.height(),
            ink = bitmap.ink_count(),
            "word rasterized"
        );
        Ok(bitmap)
    }

    /// Draw the word centred on a fresh white surface.
    fn render(&self, word: &str, width: usize) -> Result<GrayImage, BookfoldError> {
        let width = u32::try_from(width).map_err(|_| {
            BookfoldError::InvalidInput(format!("{} pages is too many to rasterize", width))
        })?;
        let height = u32::try_from(self.config.sample_height).map_err(|_| {
            BookfoldError::InvalidInput(format!(
                "sample height {} is too large",
                self.config.sample_height
            ))
        })?;

        let mut surface = GrayImage::from_pixel(width, height, PAPER);

        let scale = self.em_scale();
        let scaled = self.font.as_scaled(scale);
        let advance: f32 = word
            .chars()
            .map(|c| scaled.h_advance(scaled.glyph_id(c)))
            .sum();
        let line_height = scaled.ascent() - scaled.descent();

        // Glyphs are placed with their baseline one ascent below `y`, so
        // centring the ascent-to-descent box centres the word vertically.
        let x = ((width as f32 - advance) / 2.0).round() as i32;
        let y = ((height as f32 - line_height) / 2.0).round() as i32;

        draw_text_mut(&mut surface, INK, x, y, scale, &self.font, word);
        Ok(surface)
    }

    /// `PxScale` is the ascent-to-descent height, so convert from em size.
    fn em_scale(&self) -> PxScale {
        let em = self.config.font_size_px;
        match self.font.units_per_em() {
            Some(units) if units > 0.0 => PxScale::from(em * self.font.height_unscaled() / units),
            _ => PxScale::from(em),
        }
    }
}

/// Luma below `cutoff` is ink.
pub fn threshold(image: &GrayImage, cutoff: u8) -> Bitmap {
    Bitmap::from_fn(image.width() as usize, image.height() as usize, |x, y| {
        image.get_pixel(x as u32, y as u32).0[0] < cutoff
    })
}
