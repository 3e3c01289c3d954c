// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for word wrapping.

use kurbo::Rect;
use proptest::prelude::*;
use tessera_text::{GlyphMetrics, GlyphTable, layout_lines};

fn font() -> GlyphTable {
    let mut table = GlyphTable::new(18.0, 14.0);
    for (i, c) in "abcdefghij".chars().enumerate() {
        let advance = 6.0 + i as f64;
        table.insert(c, GlyphMetrics::new(advance, Rect::new(0.0, -3.0, advance, 11.0)));
    }
    table.insert(' ', GlyphMetrics::new(5.0, Rect::ZERO));
    table
}

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            8 => proptest::char::range('a', 'j'),
            2 => Just(' '),
            1 => Just('\n'),
            1 => Just('\t'),
        ],
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rewrapping_is_idempotent(text in text(), width in 0.0_f64..200.0, scale in 0.5_f64..3.0) {
        let font = font();
        let first = layout_lines(&font, &text, scale, width);
        let second = layout_lines(&font, &text, scale, width);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lines_cover_text_in_order(text in text(), width in 0.0_f64..200.0) {
        let font = font();
        let lines = layout_lines(&font, &text, 1.0, width);
        let chars: Vec<char> = text.chars().collect();
        let spans = lines.lines();
        prop_assert!(!spans.is_empty());
        prop_assert_eq!(spans[0].start, 0);
        prop_assert_eq!(spans[spans.len() - 1].end, chars.len());
        for pair in spans.windows(2) {
            let gap = pair[1].start - pair[0].end;
            // Either a soft break (no gap) or a consumed newline.
            prop_assert!(gap == 0 || (gap == 1 && chars[pair[0].end] == '\n'));
        }
    }

    #[test]
    fn soft_broken_lines_fit(text in text(), width in 40.0_f64..200.0) {
        let font = font();
        let lines = layout_lines(&font, &text, 1.0, width);
        let chars: Vec<char> = text.chars().collect();
        for line in lines.lines() {
            let words = chars[line.start..line.end]
                .split(|c| c.is_whitespace())
                .filter(|w| !w.is_empty())
                .count();
            if words > 1 {
                // The last word may carry trailing whitespace past the limit,
                // but the line up to the start of that word fits.
                let last_word_start = (line.start..line.end)
                    .rev()
                    .find(|&i| !chars[i].is_whitespace() && (i == line.start || chars[i - 1].is_whitespace()))
                    .unwrap_or(line.start);
                let word_end = (last_word_start..line.end)
                    .find(|&i| chars[i].is_whitespace())
                    .unwrap_or(line.end);
                let fitted = layout_lines(&font, &chars[line.start..word_end].iter().collect::<String>(), 1.0, 0.0);
                prop_assert!(fitted.max_width() <= width + 1e-9);
            }
        }
    }
}
