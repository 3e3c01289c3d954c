// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Geometry: widget placement for runtime UI trees.
//!
//! This crate turns the stored placement of a widget (a size and a position,
//! each component either in pixels or as a fraction of the parent) into an
//! absolute rectangle in UI space, given the already-resolved rectangle of
//! its parent. It also provides the exact inverse, used to convert a screen
//! point back into the widget's stored units, and the slot formulas for the
//! three container flavours.
//!
//! ## Coordinate space
//!
//! UI space is y-up with the origin at the viewport's lower-left corner.
//! "Top" always means the larger y value. Windows are placed as fractions
//! of the viewport (see [`Bounds::from_viewport_fractions`]); everything
//! below a window resolves relative to its parent.
//!
//! ## Key types
//!
//! - [`Length`]: a pixel or percent component.
//! - [`WidgetLayout`]: stored size and position, with optional
//!   [`HorizontalAnchor`] / [`VerticalAnchor`] alignment per axis.
//! - [`Bounds`]: a resolved rectangle plus depth.
//! - [`ContainerLayout`]: free-form, horizontal and vertical subdivision.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tessera_geometry::{
//!     Bounds, HorizontalAnchor, Length, WidgetLayout, resolve_bounds, screen_to_local,
//! };
//!
//! let window = Bounds::new(Point::new(100.0, 50.0), Size::new(400.0, 200.0), 0.0);
//! let layout = WidgetLayout::default()
//!     .with_size(Length::Pixels(40.0), Length::Percent(0.5))
//!     .with_position(Length::Pixels(-10.0), Length::Percent(0.25))
//!     .with_x_anchor(HorizontalAnchor::Right);
//!
//! let bounds = resolve_bounds(&layout, &window);
//! // Right-aligned: parent width - own width + offset.
//! assert_eq!(bounds.origin, Point::new(100.0 + 400.0 - 40.0 - 10.0, 50.0 + 50.0));
//! assert_eq!(bounds.size, Size::new(40.0, 100.0));
//!
//! // The inverse recovers the stored position.
//! let back = screen_to_local(&layout, &window, bounds.origin);
//! assert_eq!(back, layout.position);
//! ```

#![no_std]

mod container;
mod resolve;
mod types;

pub use container::ContainerLayout;
pub use resolve::{local_offset, resolve_bounds, screen_to_local};
pub use types::{
    Bounds, DEPTH_STEP, Dimensions, HorizontalAnchor, Length, Position, VerticalAnchor,
    WidgetLayout,
};
