// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line measurement and caret conversions.

use kurbo::Size;

use crate::font::{FontMetrics, run_glyph};

/// Unscaled size of `text` laid out on a single line.
///
/// Width is the sum of advances; height is the tallest glyph quad. Line
/// breaks are ignored.
pub fn single_line_size<F: FontMetrics + ?Sized>(font: &F, text: &str) -> Size {
    let mut width = 0.0;
    let mut height: f64 = 0.0;
    for glyph in text.chars().filter_map(|c| run_glyph(font, c)) {
        width += glyph.advance;
        height = height.max(glyph.height());
    }
    Size::new(width, height)
}

/// Character index a click at `mouse_x` lands on.
///
/// Advances are accumulated from `start_x`; the first character whose
/// midpoint lies past `mouse_x` is returned. Clicking past the end returns
/// the character count.
pub fn index_from_mouse_x<F: FontMetrics + ?Sized>(
    font: &F,
    text: &str,
    start_x: f64,
    mouse_x: f64,
    scale: f64,
) -> usize {
    let mut pen = start_x;
    let mut count = 0;
    for (index, c) in text.chars().enumerate() {
        count = index + 1;
        let Some(glyph) = run_glyph(font, c) else {
            continue;
        };
        let advance = glyph.advance * scale;
        pen += advance;
        if pen - advance * 0.5 > mouse_x {
            return index;
        }
    }
    count
}

/// Scaled horizontal offset of the caret placed before character `index`.
///
/// Indices past the end clamp to the end of the text.
pub fn offset_from_index<F: FontMetrics + ?Sized>(
    font: &F,
    text: &str,
    index: usize,
    scale: f64,
) -> f64 {
    text.chars()
        .take(index)
        .filter_map(|c| run_glyph(font, c))
        .map(|g| g.advance * scale)
        .sum()
}
