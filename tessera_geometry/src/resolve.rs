// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forward and inverse placement.

use kurbo::{Point, Size, Vec2};

use crate::types::{AxisAnchor, Bounds, Position, WidgetLayout};

fn anchored(anchor: Option<AxisAnchor>, parent_extent: f64, own_extent: f64, offset: f64) -> f64 {
    match anchor {
        None | Some(AxisAnchor::Start) => offset,
        Some(AxisAnchor::Center) => parent_extent * 0.5 - own_extent * 0.5 + offset,
        Some(AxisAnchor::End) => parent_extent - own_extent + offset,
    }
}

fn unanchored(anchor: Option<AxisAnchor>, parent_extent: f64, own_extent: f64, local: f64) -> f64 {
    match anchor {
        None | Some(AxisAnchor::Start) => local,
        Some(AxisAnchor::Center) => local - (parent_extent * 0.5 - own_extent * 0.5),
        Some(AxisAnchor::End) => local - (parent_extent - own_extent),
    }
}

fn resolved_size(layout: &WidgetLayout, parent: Size) -> Size {
    Size::new(
        layout.size.width.resolve(parent.width),
        layout.size.height.resolve(parent.height),
    )
}

/// Offset of the widget's lower-left corner from its parent's, after anchors.
pub fn local_offset(layout: &WidgetLayout, parent: Size) -> Vec2 {
    let own = resolved_size(layout, parent);
    let pos = &layout.position;
    Vec2::new(
        anchored(
            pos.x_anchor.map(Into::into),
            parent.width,
            own.width,
            pos.x.resolve(parent.width),
        ),
        anchored(
            pos.y_anchor.map(Into::into),
            parent.height,
            own.height,
            pos.y.resolve(parent.height),
        ),
    )
}

/// Resolve a widget's absolute bounds from its stored layout and its parent's bounds.
///
/// The result sits one [`DEPTH_STEP`](crate::DEPTH_STEP) above the parent.
pub fn resolve_bounds(layout: &WidgetLayout, parent: &Bounds) -> Bounds {
    let size = resolved_size(layout, parent.size);
    let origin = parent.origin + local_offset(layout, parent.size);
    Bounds::new(origin, size, parent.depth).nested()
}

/// Convert a UI-space point into the widget's stored position units.
///
/// This is the exact inverse of [`resolve_bounds`]: passing the resolved
/// origin returns `layout.position` (up to floating-point rounding).
/// Anchors are carried over from `layout`.
pub fn screen_to_local(layout: &WidgetLayout, parent: &Bounds, pt: Point) -> Position {
    let own = resolved_size(layout, parent.size);
    let pos = &layout.position;
    let local = pt - parent.origin;
    let x = unanchored(
        pos.x_anchor.map(Into::into),
        parent.size.width,
        own.width,
        local.x,
    );
    let y = unanchored(
        pos.y_anchor.map(Into::into),
        parent.size.height,
        own.height,
        local.y,
    );
    Position {
        x: pos.x.unresolve(x, parent.size.width),
        y: pos.y.unresolve(y, parent.size.height),
        ..*pos
    }
}
