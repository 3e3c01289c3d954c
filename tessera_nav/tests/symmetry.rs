// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for directional link selection.

use kurbo::Rect;
use proptest::prelude::*;
use tessera_nav::{
    Direction, EdgeDistancePolicy, LinkPolicy, NavEntry, NavSpace, compute_links, lies_beyond,
};

fn rect() -> impl Strategy<Value = Rect> {
    (0.0_f64..500.0, 0.0_f64..500.0, 1.0_f64..80.0, 1.0_f64..80.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn entries() -> impl Strategy<Value = Vec<NavEntry<usize>>> {
    proptest::collection::vec((rect(), proptest::bool::weighted(0.85)), 1..24).prop_map(|v| {
        v.into_iter()
            .enumerate()
            .map(|(id, (rect, selectable))| NavEntry {
                id,
                rect,
                selectable,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chosen_neighbour_sees_origin_in_opposite_direction(entries in entries()) {
        let policy = EdgeDistancePolicy::default();
        let space = NavSpace::new(&entries);
        for (id, links) in compute_links(&policy, &space) {
            for direction in Direction::ALL {
                let Some(target) = links.get(direction) else { continue };
                prop_assert_ne!(target, id);
                prop_assert!(entries[target].selectable);
                prop_assert!(lies_beyond(entries[id].rect, entries[target].rect, direction));
                prop_assert!(
                    lies_beyond(entries[target].rect, entries[id].rect, direction.opposite()),
                    "{id} is not a candidate for {target} going {:?}", direction.opposite()
                );
            }
        }
    }

    #[test]
    fn chosen_neighbour_has_minimal_score(entries in entries()) {
        let policy = EdgeDistancePolicy::default();
        let space = NavSpace::new(&entries);
        for origin in entries.iter().filter(|e| e.selectable) {
            for direction in Direction::ALL {
                let chosen = policy.link(origin, direction, &space);
                let best = entries
                    .iter()
                    .filter(|c| c.selectable && c.id != origin.id)
                    .filter_map(|c| policy.score(origin.rect, c.rect, direction))
                    .fold(f64::INFINITY, f64::min);
                match chosen {
                    None => prop_assert!(best.is_infinite()),
                    Some(target) => {
                        let score = policy.score(origin.rect, entries[target].rect, direction);
                        prop_assert_eq!(score, Some(best));
                    }
                }
            }
        }
    }
}
