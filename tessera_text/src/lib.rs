// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Text: glyph-advance text layout for runtime UI widgets.
//!
//! This crate measures and places text using nothing more than per-glyph
//! advances and quad bounds supplied by a [`FontMetrics`] implementation.
//! There is no shaping or kerning; runs are laid out by accumulating
//! advances, which is what MSDF atlas fonts in game UIs typically need.
//!
//! It provides:
//!
//! - [`single_line_size`]: advance sum and tallest glyph of a run.
//! - [`layout_lines`]: greedy word wrap with forced breaks on `\n`, producing
//!   [`TextLines`] of [`LineSpan`]s.
//! - [`index_from_mouse_x`] and [`offset_from_index`]: caret hit-testing and
//!   caret placement.
//! - [`single_line_origin`] and [`line_origins`]: horizontal alignment and
//!   vertical centering inside a widget rectangle.
//! - [`TextLayoutCache`]: a measurement cache keyed on font and wrap width.
//! - [`run_glyph`]: the per-character glyph rule shared by measurement and
//!   rendering.
//!
//! All character positions are `char` indices, not byte offsets. Widths
//! reported by measurement are unscaled font units; wrap limits, mouse
//! coordinates and origins are in scaled UI units.
//!
//! ## Example
//!
//! ```rust
//! use tessera_text::{GlyphTable, index_from_mouse_x, layout_lines, single_line_size};
//!
//! let font = GlyphTable::monospace("abcdefghijklmnopqrstuvwxyz ".chars(), 10.0, 12.0, 16.0);
//!
//! let limit = single_line_size(&font, "hello ").width;
//! let lines = layout_lines(&font, "hello world", 1.0, limit);
//! let spans: Vec<_> = lines.lines().iter().map(|l| (l.start, l.end)).collect();
//! assert_eq!(spans, [(0, 6), (6, 11)]);
//!
//! // A click just right of the middle of the second glyph lands after it.
//! assert_eq!(index_from_mouse_x(&font, "abc", 0.0, 16.0, 1.0), 2);
//! ```

#![no_std]

extern crate alloc;

mod align;
mod cache;
mod font;
mod measure;
mod wrap;

pub use align::{TextAlignment, VERTICAL_CENTERING_OFFSET, line_origins, single_line_origin};
pub use cache::{CacheStamp, FontGeneration, TextLayoutCache};
pub use font::{FontMetrics, GlyphMetrics, GlyphTable, run_glyph};
pub use measure::{index_from_mouse_x, offset_from_index, single_line_size};
pub use wrap::{LineSpan, TextLines, layout_lines};
