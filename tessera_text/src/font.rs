// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font-metrics seam and an in-memory glyph table.

use hashbrown::HashMap;
use kurbo::{Rect, Size};

/// Metrics for a single glyph, in unscaled font units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Horizontal pen advance.
    pub advance: f64,
    /// Quad covered by the glyph relative to the pen position on the baseline.
    pub plane_bounds: Rect,
}

impl GlyphMetrics {
    /// Create metrics from an advance and plane bounds.
    pub const fn new(advance: f64, plane_bounds: Rect) -> Self {
        Self {
            advance,
            plane_bounds,
        }
    }

    /// Height of the glyph quad.
    #[inline]
    pub fn height(&self) -> f64 {
        self.plane_bounds.height()
    }

    /// Size of the glyph quad.
    #[inline]
    pub fn size(&self) -> Size {
        self.plane_bounds.size()
    }
}

/// Glyph metrics provider for a loaded font.
///
/// Implementations are usually backed by an MSDF atlas description owned by
/// the asset system. All values are in unscaled font units; callers multiply
/// by their text scale.
pub trait FontMetrics {
    /// Metrics for `code`, or `None` if the font has no such glyph.
    fn glyph(&self, code: char) -> Option<GlyphMetrics>;

    /// Glyph used in place of missing codes.
    fn fallback(&self) -> GlyphMetrics;

    /// Distance between consecutive baselines.
    fn line_height(&self) -> f64;

    /// Distance from the baseline to the top of the tallest glyphs.
    fn ascender(&self) -> f64;

    /// Metrics for `code`, substituting [`FontMetrics::fallback`] for missing glyphs.
    fn glyph_or_fallback(&self, code: char) -> GlyphMetrics {
        self.glyph(code).unwrap_or_else(|| self.fallback())
    }
}

/// Metrics a character contributes to a run, or `None` if it does not advance.
///
/// Carriage returns and newlines never advance; tabs measure as a space.
pub fn run_glyph<F: FontMetrics + ?Sized>(font: &F, code: char) -> Option<GlyphMetrics> {
    match code {
        '\r' | '\n' => None,
        '\t' => Some(font.glyph_or_fallback(' ')),
        _ => Some(font.glyph_or_fallback(code)),
    }
}

/// A [`FontMetrics`] implementation backed by a hash map.
///
/// Missing codes fall back to the `'?'` glyph when present, otherwise to an
/// empty glyph.
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, GlyphMetrics>,
    line_height: f64,
    ascender: f64,
}

impl GlyphTable {
    /// Create an empty table.
    pub fn new(line_height: f64, ascender: f64) -> Self {
        Self {
            glyphs: HashMap::new(),
            line_height,
            ascender,
        }
    }

    /// A table where every character in `chars` shares the same advance and quad.
    ///
    /// Handy for tests and tools; quads sit on the baseline.
    pub fn monospace(
        chars: impl IntoIterator<Item = char>,
        advance: f64,
        height: f64,
        line_height: f64,
    ) -> Self {
        let quad = Rect::new(0.0, 0.0, advance, height);
        let mut table = Self::new(line_height, height);
        for c in chars {
            table.insert(c, GlyphMetrics::new(advance, quad));
        }
        table
    }

    /// Add or replace a glyph.
    pub fn insert(&mut self, code: char, metrics: GlyphMetrics) {
        self.glyphs.insert(code, metrics);
    }

    /// Builder form of [`GlyphTable::insert`].
    #[must_use]
    pub fn with_glyph(mut self, code: char, metrics: GlyphMetrics) -> Self {
        self.insert(code, metrics);
        self
    }

    /// Number of glyphs in the table.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FontMetrics for GlyphTable {
    fn glyph(&self, code: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&code).copied()
    }

    fn fallback(&self) -> GlyphMetrics {
        self.glyphs.get(&'?').copied().unwrap_or_default()
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }

    fn ascender(&self) -> f64 {
        self.ascender
    }
}
