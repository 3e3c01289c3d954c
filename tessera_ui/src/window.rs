// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use tessera_geometry::Bounds;

use crate::NodeId;
use crate::assets::Color;
use crate::widget::{DEFAULT_TAG, Widget};

/// A top-level region placed as a fraction of the viewport.
#[derive(Clone, Debug)]
pub struct Window {
    pub(crate) id: NodeId,
    /// Author-assigned name.
    pub tag: String,
    /// Lower-left corner as a fraction of the viewport.
    pub position: Point,
    /// Paint depth of the window background.
    pub depth: f64,
    /// Extent as a fraction of the viewport.
    pub size: Size,
    /// Background color.
    pub background: Color,
    displayed: bool,
    pub(crate) widgets: Vec<Widget>,
    pub(crate) default_focus: Option<NodeId>,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            id: NodeId::UNASSIGNED,
            tag: String::from(DEFAULT_TAG),
            position: Point::ZERO,
            depth: 0.0,
            size: Size::new(1.0, 1.0),
            background: Color::splat(0.3),
            displayed: false,
            widgets: Vec::new(),
            default_focus: None,
        }
    }
}

impl Window {
    /// An empty, hidden, full-viewport window.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Place the window, in viewport fractions.
    #[must_use]
    pub fn with_placement(mut self, position: Point, size: Size) -> Self {
        self.position = position;
        self.size = size;
        self
    }

    /// Append a top-level widget.
    #[must_use]
    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }

    /// Id assigned on insertion.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Top-level widgets in order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Widget selected when the user interface is activated.
    pub fn default_focus(&self) -> Option<NodeId> {
        self.default_focus
    }

    /// Show the window.
    pub fn display(&mut self) {
        self.displayed = true;
    }

    /// Hide the window.
    pub fn hide(&mut self) {
        self.displayed = false;
    }

    /// Whether the window is drawn and hit-tested.
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Resolved bounds in a viewport of `viewport` pixels.
    pub fn bounds(&self, viewport: Size) -> Bounds {
        Bounds::from_viewport_fractions(self.position, self.size, self.depth, viewport)
    }
}
