// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line measurement with greedy word wrapping.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::font::{FontMetrics, run_glyph};

/// One rendered line of a multi-line run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineSpan {
    /// Index of the first character on the line.
    pub start: usize,
    /// Index one past the last character on the line (a breaking `\n` is excluded).
    pub end: usize,
    /// Unscaled advance width.
    pub width: f64,
    /// Unscaled height of the tallest glyph on the line.
    pub height: f64,
}

impl LineSpan {
    /// Number of characters on the line.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the line holds no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of [`layout_lines`]: line spans plus the font's line height.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLines {
    lines: SmallVec<[LineSpan; 4]>,
    line_height: f64,
}

impl TextLines {
    /// The lines, top to bottom. Never empty for output of [`layout_lines`].
    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }

    /// Unscaled distance between consecutive baselines.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Unscaled distance from the first baseline to the last.
    pub fn total_advance(&self) -> f64 {
        self.line_height * self.lines.len().saturating_sub(1) as f64
    }

    /// Widest line, unscaled.
    pub fn max_width(&self) -> f64 {
        self.lines.iter().fold(0.0_f64, |w, l| w.max(l.width))
    }

    /// The line holding character `index`; indices past the end map to the last line.
    pub fn line_of(&self, index: usize) -> usize {
        self.lines
            .iter()
            .position(|l| index < l.end || (l.is_empty() && index == l.start))
            .unwrap_or(self.lines.len().saturating_sub(1))
    }
}

fn word_width<F: FontMetrics + ?Sized>(font: &F, chars: &[char]) -> f64 {
    chars
        .iter()
        .take_while(|c| !c.is_whitespace())
        .filter_map(|&c| run_glyph(font, c))
        .map(|g| g.advance)
        .sum()
}

/// Break `text` into lines.
///
/// Explicit `\n` always breaks. When `max_line_width > 0`, a word that would
/// push a non-empty line past `max_line_width` (in scaled units) starts a new
/// line; a single word wider than the limit is left to overflow. Widths in
/// the result are unscaled.
pub fn layout_lines<F: FontMetrics + ?Sized>(
    font: &F,
    text: &str,
    scale: f64,
    max_line_width: f64,
) -> TextLines {
    let chars: Vec<char> = text.chars().collect();
    let wrap = max_line_width > 0.0;
    let mut lines = SmallVec::new();

    let mut start = 0;
    let mut width = 0.0;
    let mut height: f64 = 0.0;
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            lines.push(LineSpan {
                start,
                end: i,
                width,
                height,
            });
            start = i + 1;
            width = 0.0;
            height = 0.0;
            continue;
        }

        let word_start = !c.is_whitespace() && (i == 0 || chars[i - 1].is_whitespace());
        if wrap && word_start && width > 0.0 {
            let next = word_width(font, &chars[i..]);
            if (width + next) * scale > max_line_width {
                lines.push(LineSpan {
                    start,
                    end: i,
                    width,
                    height,
                });
                start = i;
                width = 0.0;
                height = 0.0;
            }
        }

        if let Some(glyph) = run_glyph(font, c) {
            width += glyph.advance;
            height = height.max(glyph.height());
        }
    }
    lines.push(LineSpan {
        start,
        end: chars.len(),
        width,
        height,
    });

    TextLines {
        lines,
        line_height: font.line_height(),
    }
}
