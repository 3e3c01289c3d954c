// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notifications.
//!
//! Interaction methods never call back into the host. They queue events
//! instead, and the host drains them once the call has returned, so a
//! handler is free to mutate the tree that produced its event.

use crate::NodeId;
use crate::assets::ScriptHandle;

/// Mouse cursor shape requested by the user interface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    /// Arrow.
    #[default]
    Standard,
    /// Text insertion beam.
    IBeam,
}

/// Something the host should react to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// The selection moved.
    SelectionMoved {
        /// Previously selected widget.
        from: Option<NodeId>,
        /// Newly selected widget.
        to: NodeId,
        /// `on_move` callback.
        handler: ScriptHandle,
    },
    /// The hovered widget changed.
    Hovered {
        /// Newly hovered widget.
        widget: NodeId,
        /// `on_hover` callback.
        handler: ScriptHandle,
    },
    /// A widget was pressed.
    Pressed {
        /// The widget.
        widget: NodeId,
        /// `on_press` callback.
        handler: ScriptHandle,
    },
    /// A checkbox changed state.
    Toggled {
        /// The checkbox.
        widget: NodeId,
        /// New state.
        checked: bool,
        /// `on_press` callback.
        handler: ScriptHandle,
    },
    /// The caret or the text of a text field changed.
    CursorMoved {
        /// The text field.
        widget: NodeId,
        /// New caret index.
        cursor: usize,
        /// `on_move_cursor` callback.
        handler: ScriptHandle,
    },
    /// A slider was dragged.
    SliderMoved {
        /// The slider.
        widget: NodeId,
        /// New value.
        value: f64,
        /// `on_move_slider` callback.
        handler: ScriptHandle,
    },
    /// A drop-down option was chosen.
    OptionSelected {
        /// The drop-down.
        widget: NodeId,
        /// Index of the chosen option.
        index: usize,
        /// `on_select_option` callback.
        handler: ScriptHandle,
    },
    /// The mouse cursor should change shape.
    CursorIcon(CursorIcon),
}

impl UiEvent {
    /// The callback to run, if any.
    pub fn handler(&self) -> Option<ScriptHandle> {
        match *self {
            Self::SelectionMoved { handler, .. }
            | Self::Hovered { handler, .. }
            | Self::Pressed { handler, .. }
            | Self::Toggled { handler, .. }
            | Self::CursorMoved { handler, .. }
            | Self::SliderMoved { handler, .. }
            | Self::OptionSelected { handler, .. } => Some(handler),
            Self::CursorIcon(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_icons_carry_no_handler() {
        let pressed = UiEvent::Pressed {
            widget: NodeId(4),
            handler: ScriptHandle(2),
        };
        assert_eq!(pressed.handler(), Some(ScriptHandle(2)));
        assert_eq!(UiEvent::CursorIcon(CursorIcon::IBeam).handler(), None);
    }
}
