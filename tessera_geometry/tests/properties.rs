// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for placement resolution and container slots.

use kurbo::{Point, Size};
use proptest::prelude::*;
use tessera_geometry::{
    Bounds, ContainerLayout, HorizontalAnchor, Length, VerticalAnchor, WidgetLayout,
    resolve_bounds, screen_to_local,
};

const TOLERANCE: f64 = 1e-6;

fn length() -> impl Strategy<Value = Length> {
    prop_oneof![
        (-500.0_f64..500.0).prop_map(Length::Pixels),
        (-2.0_f64..2.0).prop_map(Length::Percent),
    ]
}

fn x_anchor() -> impl Strategy<Value = Option<HorizontalAnchor>> {
    prop_oneof![
        Just(None),
        Just(Some(HorizontalAnchor::Left)),
        Just(Some(HorizontalAnchor::Center)),
        Just(Some(HorizontalAnchor::Right)),
    ]
}

fn y_anchor() -> impl Strategy<Value = Option<VerticalAnchor>> {
    prop_oneof![
        Just(None),
        Just(Some(VerticalAnchor::Bottom)),
        Just(Some(VerticalAnchor::Center)),
        Just(Some(VerticalAnchor::Top)),
    ]
}

fn layout() -> impl Strategy<Value = WidgetLayout> {
    (length(), length(), length(), length(), x_anchor(), y_anchor()).prop_map(
        |(w, h, x, y, xa, ya)| {
            let mut layout = WidgetLayout::default()
                .with_size(w, h)
                .with_position(x, y);
            layout.position.x_anchor = xa;
            layout.position.y_anchor = ya;
            layout
        },
    )
}

fn parent() -> impl Strategy<Value = Bounds> {
    (
        -1000.0_f64..1000.0,
        -1000.0_f64..1000.0,
        1.0_f64..2000.0,
        1.0_f64..2000.0,
    )
        .prop_map(|(x, y, w, h)| Bounds::new(Point::new(x, y), Size::new(w, h), 0.0))
}

fn same_unit_close(a: Length, b: Length) -> bool {
    match (a, b) {
        (Length::Pixels(a), Length::Pixels(b)) | (Length::Percent(a), Length::Percent(b)) => {
            (a - b).abs() <= TOLERANCE * (1.0 + a.abs())
        }
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn screen_to_local_inverts_resolve(layout in layout(), parent in parent()) {
        let resolved = resolve_bounds(&layout, &parent);
        let back = screen_to_local(&layout, &parent, resolved.origin);
        prop_assert!(same_unit_close(back.x, layout.position.x), "x: {:?} vs {:?}", back.x, layout.position.x);
        prop_assert!(same_unit_close(back.y, layout.position.y), "y: {:?} vs {:?}", back.y, layout.position.y);
        prop_assert_eq!(back.x_anchor, layout.position.x_anchor);
        prop_assert_eq!(back.y_anchor, layout.position.y_anchor);
    }

    #[test]
    fn equal_columns_tile_the_container(n in 1_usize..16, parent in parent()) {
        let layout = ContainerLayout::Horizontal {
            column_width: 1.0 / n as f64,
            column_spacing: 0.0,
        };
        let slots: Vec<_> = (0..n).map(|i| layout.child_slot(&parent, i).rect()).collect();
        let whole = parent.rect();
        prop_assert!((slots[0].x0 - whole.x0).abs() <= TOLERANCE * whole.width());
        prop_assert!((slots[n - 1].x1 - whole.x1).abs() <= TOLERANCE * whole.width());
        for pair in slots.windows(2) {
            prop_assert!((pair[0].x1 - pair[1].x0).abs() <= TOLERANCE * whole.width(), "gap or overlap between {:?} and {:?}", pair[0], pair[1]);
        }
        for slot in &slots {
            prop_assert_eq!(slot.y0, whole.y0);
            prop_assert_eq!(slot.y1, whole.y1);
        }
    }
}
