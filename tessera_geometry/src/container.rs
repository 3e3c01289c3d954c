// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container subdivision.

use kurbo::{Point, Size};

use crate::types::Bounds;

/// How a container hands out space to its children.
///
/// Each child resolves its own [`WidgetLayout`](crate::WidgetLayout) against
/// the slot returned by [`ContainerLayout::child_slot`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ContainerLayout {
    /// Every child sees the whole container.
    #[default]
    Free,
    /// Children are laid out left to right in equal columns.
    Horizontal {
        /// Fraction of the container width per child.
        column_width: f64,
        /// Fraction of the container width between neighbouring children.
        column_spacing: f64,
    },
    /// Children are laid out top to bottom in equal rows.
    Vertical {
        /// Fraction of the container height per child.
        row_height: f64,
        /// Fraction of the container height between neighbouring children.
        row_spacing: f64,
    },
}

impl ContainerLayout {
    /// The parent rectangle child `index` resolves against.
    ///
    /// Slots keep the container's depth; resolving the child adds the
    /// per-level step.
    pub fn child_slot(&self, container: &Bounds, index: usize) -> Bounds {
        let Bounds {
            origin,
            size,
            depth,
        } = *container;
        let i = index as f64;
        match *self {
            Self::Free => *container,
            Self::Horizontal {
                column_width,
                column_spacing,
            } => {
                let x = size.width * column_width * i + size.width * column_spacing * i;
                Bounds::new(
                    Point::new(origin.x + x, origin.y),
                    Size::new(size.width * column_width, size.height),
                    depth,
                )
            }
            Self::Vertical {
                row_height,
                row_spacing,
            } => {
                let y = size.height
                    - size.height * row_height * (i + 1.0)
                    - size.height * row_spacing * i;
                Bounds::new(
                    Point::new(origin.x, origin.y + y),
                    Size::new(size.width, size.height * row_height),
                    depth,
                )
            }
        }
    }
}
