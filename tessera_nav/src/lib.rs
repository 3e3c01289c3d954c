// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Nav: precomputed four-way navigation links.
//!
//! Gamepad and keyboard UIs move selection with four directions rather than
//! a pointer. This crate computes, for every selectable entry in a window,
//! the best neighbour in each [`Direction`], so that a move at runtime is a
//! single lookup in [`NavigationLinks`].
//!
//! - A [`NavSpace`] is a snapshot of [`NavEntry`] values, each an id plus a
//!   resolved rectangle and a selectable flag, all in one coordinate space.
//! - A [`LinkPolicy`] chooses the neighbour of one entry in one direction.
//!   [`EdgeDistancePolicy`] is the stock policy.
//! - [`compute_links`] runs a policy over every selectable entry.
//!
//! Coordinates are y-up: [`Direction::Up`] moves toward larger `y`.
//!
//! ## Scoring
//!
//! [`EdgeDistancePolicy`] keeps only candidates lying entirely on the far
//! side of the origin's facing edge (`candidate.x0 >= origin.x1` for
//! [`Direction::Right`], and so on). Each survivor scores the distance
//! between the midpoints of the two facing edges plus
//! [`perpendicular_weight`](EdgeDistancePolicy::perpendicular_weight) times
//! the off-axis distance between centers. The lowest score wins; on equal
//! scores the entry that appears first in the space wins.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use tessera_nav::{Direction, EdgeDistancePolicy, NavEntry, NavSpace, compute_links};
//!
//! let row = |id: u32, x: f64| NavEntry::new(id, Rect::new(x, 0.0, x + 20.0, 10.0));
//! let entries = vec![row(1, 0.0), row(2, 30.0), row(3, 60.0)];
//! let links = compute_links(&EdgeDistancePolicy::default(), &NavSpace::new(&entries));
//!
//! assert_eq!(links[0].1.get(Direction::Right), Some(2));
//! assert_eq!(links[1].1.get(Direction::Left), Some(1));
//! assert_eq!(links[2].1.get(Direction::Right), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds with `libm` float functions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Perpendicular-distance weight used by [`EdgeDistancePolicy::default`].
pub const DEFAULT_PERPENDICULAR_WEIGHT: f64 = 0.65;

/// A cardinal navigation direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward larger `y`.
    Up,
    /// Toward smaller `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A navigation candidate.
#[derive(Clone, Debug)]
pub struct NavEntry<K> {
    /// Identifier reported in links.
    pub id: K,
    /// Resolved bounds, in the coordinate space shared by the whole [`NavSpace`].
    pub rect: Rect,
    /// Whether this entry can hold the selection.
    pub selectable: bool,
}

impl<K> NavEntry<K> {
    /// A selectable entry.
    pub const fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            selectable: true,
        }
    }
}

/// A read-only snapshot of the candidates in one window.
///
/// Entry order is the traversal order used for tie-breaking.
#[derive(Clone, Copy, Debug)]
pub struct NavSpace<'a, K> {
    /// Candidates, in traversal order.
    pub entries: &'a [NavEntry<K>],
}

impl<'a, K> NavSpace<'a, K> {
    /// Wrap a slice of entries.
    pub const fn new(entries: &'a [NavEntry<K>]) -> Self {
        Self { entries }
    }
}

/// The four neighbours of one selectable entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationLinks<K> {
    /// Neighbour toward larger `y`.
    pub up: Option<K>,
    /// Neighbour toward smaller `y`.
    pub down: Option<K>,
    /// Neighbour toward smaller `x`.
    pub left: Option<K>,
    /// Neighbour toward larger `x`.
    pub right: Option<K>,
}

impl<K> Default for NavigationLinks<K> {
    fn default() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }
}

impl<K: Copy> NavigationLinks<K> {
    /// The neighbour in `direction`.
    pub fn get(&self, direction: Direction) -> Option<K> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Replace the neighbour in `direction`.
    pub fn set(&mut self, direction: Direction, target: Option<K>) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = target;
    }
}

/// Chooses the neighbour of one entry in one direction.
pub trait LinkPolicy<K>
where
    K: Copy + Eq,
{
    /// The neighbour of `origin` in `direction`, if any.
    fn link(&self, origin: &NavEntry<K>, direction: Direction, space: &NavSpace<'_, K>)
    -> Option<K>;

    /// All four neighbours of `origin`.
    fn links(&self, origin: &NavEntry<K>, space: &NavSpace<'_, K>) -> NavigationLinks<K> {
        let mut links = NavigationLinks::default();
        for direction in Direction::ALL {
            links.set(direction, self.link(origin, direction, space));
        }
        links
    }
}

/// Whether `candidate` lies entirely beyond `origin`'s edge facing `direction`.
///
/// Touching edges count as beyond.
pub fn lies_beyond(origin: Rect, candidate: Rect, direction: Direction) -> bool {
    match direction {
        Direction::Right => candidate.x0 >= origin.x1,
        Direction::Left => candidate.x1 <= origin.x0,
        Direction::Up => candidate.y0 >= origin.y1,
        Direction::Down => candidate.y1 <= origin.y0,
    }
}

/// Midpoints of the facing edges of `origin` and `candidate`, and the
/// off-axis distance between their centers.
fn facing_edges(origin: Rect, candidate: Rect, direction: Direction) -> (Point, Point, f64) {
    let oc = origin.center();
    let cc = candidate.center();
    match direction {
        Direction::Right => (
            Point::new(origin.x1, oc.y),
            Point::new(candidate.x0, cc.y),
            (oc.y - cc.y).abs(),
        ),
        Direction::Left => (
            Point::new(origin.x0, oc.y),
            Point::new(candidate.x1, cc.y),
            (oc.y - cc.y).abs(),
        ),
        Direction::Up => (
            Point::new(oc.x, origin.y1),
            Point::new(cc.x, candidate.y0),
            (oc.x - cc.x).abs(),
        ),
        Direction::Down => (
            Point::new(oc.x, origin.y0),
            Point::new(cc.x, candidate.y1),
            (oc.x - cc.x).abs(),
        ),
    }
}

/// Nearest-facing-edge policy with a damped off-axis penalty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeDistancePolicy {
    /// Multiplier on the perpendicular center distance.
    pub perpendicular_weight: f64,
}

impl Default for EdgeDistancePolicy {
    fn default() -> Self {
        Self {
            perpendicular_weight: DEFAULT_PERPENDICULAR_WEIGHT,
        }
    }
}

impl EdgeDistancePolicy {
    /// Policy with a custom perpendicular weight.
    pub const fn with_perpendicular_weight(perpendicular_weight: f64) -> Self {
        Self {
            perpendicular_weight,
        }
    }

    /// Score of moving from `origin` to `candidate`, or `None` if the
    /// candidate is not in `direction`. Lower is better.
    pub fn score(&self, origin: Rect, candidate: Rect, direction: Direction) -> Option<f64> {
        if !lies_beyond(origin, candidate, direction) {
            return None;
        }
        let (from, to, perpendicular) = facing_edges(origin, candidate, direction);
        let score = from.distance(to) + self.perpendicular_weight * perpendicular;
        score.is_finite().then_some(score)
    }
}

impl<K> LinkPolicy<K> for EdgeDistancePolicy
where
    K: Copy + Eq,
{
    fn link(
        &self,
        origin: &NavEntry<K>,
        direction: Direction,
        space: &NavSpace<'_, K>,
    ) -> Option<K> {
        debug_assert!(
            origin.selectable,
            "navigation links are only computed for selectable entries"
        );
        if !origin.selectable {
            return None;
        }

        let mut best: Option<K> = None;
        let mut best_score = f64::INFINITY;
        for candidate in space.entries {
            if !candidate.selectable || candidate.id == origin.id {
                continue;
            }
            let Some(score) = self.score(origin.rect, candidate.rect, direction) else {
                continue;
            };
            // Strict comparison keeps the earliest entry on ties.
            if score < best_score {
                best_score = score;
                best = Some(candidate.id);
            }
        }
        best
    }
}

/// Links for every selectable entry in `space`, in entry order.
pub fn compute_links<K, P>(policy: &P, space: &NavSpace<'_, K>) -> Vec<(K, NavigationLinks<K>)>
where
    K: Copy + Eq,
    P: LinkPolicy<K> + ?Sized,
{
    space
        .entries
        .iter()
        .filter(|e| e.selectable)
        .map(|e| (e.id, policy.links(e, space)))
        .collect()
}
