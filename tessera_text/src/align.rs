// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing measured text inside a widget rectangle.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::wrap::TextLines;

/// Fixed upward nudge applied after centering on measured glyph height.
pub const VERTICAL_CENTERING_OFFSET: f64 = 2.6;

/// Horizontal alignment of a text run inside its widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Flush with the left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

impl TextAlignment {
    fn start_x(self, rect: Rect, width: f64, scale: f64) -> f64 {
        match self {
            Self::Left => rect.x0,
            Self::Center => rect.x0 + rect.width() * 0.5 - width * 0.5 * scale,
            Self::Right => rect.x1 - width * scale,
        }
    }
}

/// Pen position of a single-line run of unscaled `measured` size inside `rect`.
pub fn single_line_origin(
    rect: Rect,
    measured: Size,
    scale: f64,
    alignment: TextAlignment,
) -> Point {
    Point::new(
        alignment.start_x(rect, measured.width, scale),
        rect.y0 + rect.height() * 0.5 - measured.height * 0.5 * scale + VERTICAL_CENTERING_OFFSET,
    )
}

/// Pen positions of every line in `lines`, top to bottom.
///
/// The block is centered vertically around the first line's height and the
/// total baseline advance; each line is aligned horizontally on its own width.
pub fn line_origins(
    rect: Rect,
    lines: &TextLines,
    scale: f64,
    alignment: TextAlignment,
) -> SmallVec<[Point; 4]> {
    let first_height = lines.lines().first().map_or(0.0, |l| l.height);
    let base_y = rect.y0 + rect.height() * 0.5
        - (first_height * 0.5 - lines.total_advance() * 0.5) * scale
        + VERTICAL_CENTERING_OFFSET;
    lines
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Point::new(
                alignment.start_x(rect, line.width, scale),
                base_y - i as f64 * scale * lines.line_height(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GlyphTable, layout_lines};

    const RECT: Rect = Rect::new(100.0, 50.0, 300.0, 90.0);

    #[test]
    fn single_line_alignments() {
        let measured = Size::new(40.0, 10.0);
        let y = 50.0 + 20.0 - 10.0 + VERTICAL_CENTERING_OFFSET;
        assert_eq!(
            single_line_origin(RECT, measured, 2.0, TextAlignment::Left),
            Point::new(100.0, y)
        );
        assert_eq!(
            single_line_origin(RECT, measured, 2.0, TextAlignment::Center),
            Point::new(160.0, y)
        );
        assert_eq!(
            single_line_origin(RECT, measured, 2.0, TextAlignment::Right),
            Point::new(220.0, y)
        );
    }

    #[test]
    fn lines_step_down_by_line_height() {
        let font = GlyphTable::monospace("ab".chars(), 10.0, 8.0, 12.0);
        let lines = layout_lines(&font, "ab\na", 1.0, 0.0);
        let origins = line_origins(RECT, &lines, 1.0, TextAlignment::Left);
        assert_eq!(origins.len(), 2);
        assert!((origins[0].y - origins[1].y - 12.0).abs() < 1e-9);
        // Block of one extra line is lifted by half the advance.
        assert_eq!(origins[0].y, 70.0 - 4.0 + 6.0 + VERTICAL_CENTERING_OFFSET);
    }

    #[test]
    fn single_line_block_matches_single_line_origin() {
        let font = GlyphTable::monospace("ab".chars(), 10.0, 8.0, 12.0);
        let lines = layout_lines(&font, "ab", 1.5, 0.0);
        let origins = line_origins(RECT, &lines, 1.5, TextAlignment::Center);
        assert_eq!(
            origins[0],
            single_line_origin(RECT, Size::new(20.0, 8.0), 1.5, TextAlignment::Center)
        );
    }
}
