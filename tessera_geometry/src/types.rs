// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored placement types and the resolved [`Bounds`].

use kurbo::{Affine, Point, Rect, Size};

/// Depth added per nesting level so children paint above their parent.
pub const DEPTH_STEP: f64 = 0.001;

/// One component of a widget's size or position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// A literal distance in UI-space pixels.
    Pixels(f64),
    /// A fraction of the parent's extent along the same axis; `1.0` is the full extent.
    Percent(f64),
}

impl Length {
    /// Resolve against the parent's extent along this component's axis.
    #[inline]
    pub fn resolve(self, parent_extent: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(fraction) => fraction * parent_extent,
        }
    }

    /// Express a resolved distance in this component's unit.
    ///
    /// A percent component against a zero-extent parent reports `0.0`.
    #[inline]
    pub fn unresolve(self, resolved: f64, parent_extent: f64) -> Self {
        match self {
            Self::Pixels(_) => Self::Pixels(resolved),
            Self::Percent(_) if parent_extent == 0.0 => Self::Percent(0.0),
            Self::Percent(_) => Self::Percent(resolved / parent_extent),
        }
    }
}

/// Horizontal alignment of a widget inside its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    /// Offset is measured from the parent's left edge.
    Left,
    /// Widget is centered, then offset.
    Center,
    /// Widget's right edge meets the parent's right edge, then offset.
    Right,
}

/// Vertical alignment of a widget inside its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// Offset is measured from the parent's bottom edge.
    Bottom,
    /// Widget is centered, then offset.
    Center,
    /// Widget's top edge meets the parent's top edge, then offset.
    Top,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AxisAnchor {
    Start,
    Center,
    End,
}

impl From<HorizontalAnchor> for AxisAnchor {
    fn from(anchor: HorizontalAnchor) -> Self {
        match anchor {
            HorizontalAnchor::Left => Self::Start,
            HorizontalAnchor::Center => Self::Center,
            HorizontalAnchor::Right => Self::End,
        }
    }
}

impl From<VerticalAnchor> for AxisAnchor {
    fn from(anchor: VerticalAnchor) -> Self {
        match anchor {
            VerticalAnchor::Bottom => Self::Start,
            VerticalAnchor::Center => Self::Center,
            VerticalAnchor::Top => Self::End,
        }
    }
}

/// Stored size of a widget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    /// Width component.
    pub width: Length,
    /// Height component.
    pub height: Length,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: Length::Percent(0.2),
            height: Length::Percent(0.2),
        }
    }
}

/// Stored position of a widget, relative to its parent's lower-left corner
/// unless an anchor says otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Horizontal offset.
    pub x: Length,
    /// Vertical offset.
    pub y: Length,
    /// Optional horizontal alignment constraint.
    pub x_anchor: Option<HorizontalAnchor>,
    /// Optional vertical alignment constraint.
    pub y_anchor: Option<VerticalAnchor>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: Length::Percent(0.0),
            y: Length::Percent(0.0),
            x_anchor: None,
            y_anchor: None,
        }
    }
}

/// Everything a widget stores about where it goes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WidgetLayout {
    /// Stored size.
    pub size: Dimensions,
    /// Stored position.
    pub position: Position,
}

impl WidgetLayout {
    /// Replace the stored size.
    #[must_use]
    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.size = Dimensions { width, height };
        self
    }

    /// Replace the stored offsets, keeping anchors.
    #[must_use]
    pub fn with_position(mut self, x: Length, y: Length) -> Self {
        self.position.x = x;
        self.position.y = y;
        self
    }

    /// Set the horizontal alignment constraint.
    #[must_use]
    pub fn with_x_anchor(mut self, anchor: HorizontalAnchor) -> Self {
        self.position.x_anchor = Some(anchor);
        self
    }

    /// Set the vertical alignment constraint.
    #[must_use]
    pub fn with_y_anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.position.y_anchor = Some(anchor);
        self
    }
}

/// A resolved rectangle in UI space, plus the depth it paints at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Lower-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
    /// Paint depth; larger values are drawn on top.
    pub depth: f64,
}

impl Bounds {
    /// Create bounds from an origin, size and depth.
    pub const fn new(origin: Point, size: Size, depth: f64) -> Self {
        Self {
            origin,
            size,
            depth,
        }
    }

    /// Bounds of a window placed as fractions of the viewport.
    pub fn from_viewport_fractions(
        position: Point,
        size: Size,
        depth: f64,
        viewport: Size,
    ) -> Self {
        Self::new(
            Point::new(viewport.width * position.x, viewport.height * position.y),
            Size::new(viewport.width * size.width, viewport.height * size.height),
            depth,
        )
    }

    /// The rectangle covered, as `x0..x1` by `y0..y1` with `y1` the top edge.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Whether `pt` lies inside, edges included.
    pub fn contains(&self, pt: Point) -> bool {
        let r = self.rect();
        pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
    }

    /// Transform mapping the unit square centered at the origin onto these bounds.
    pub fn unit_quad_transform(&self) -> Affine {
        Affine::translate(self.center().to_vec2())
            * Affine::scale_non_uniform(self.size.width, self.size.height)
    }

    /// The same rectangle one nesting level deeper.
    #[must_use]
    pub fn nested(self) -> Self {
        Self {
            depth: self.depth + DEPTH_STEP,
            ..self
        }
    }
}
