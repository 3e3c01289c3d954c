// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state and input payloads.

use crate::NodeId;

bitflags::bitflags! {
    /// Per-widget interaction flags, derived from [`InteractionState`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidgetState: u8 {
        /// Holds the selection.
        const SELECTED = 0b0000_0001;
        /// Under the mouse.
        const HOVERED  = 0b0000_0010;
        /// Text field receiving typed characters.
        const EDITING  = 0b0000_0100;
        /// Slider being dragged.
        const PRESSED  = 0b0000_1000;
    }
}

/// Keys the user interface reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Remove the character before the caret.
    Backspace,
    /// Confirm.
    Enter,
    /// Cancel.
    Escape,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Any other key, by host key code.
    Other(u32),
}

/// Coarse interaction state of a user interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// Nothing selected or hovered.
    Idle,
    /// A widget is hovered and nothing is selected.
    Hovering(NodeId),
    /// A widget holds the selection.
    Selected(NodeId),
    /// A text field is being edited.
    Editing(NodeId),
    /// A slider is being dragged.
    Pressed(NodeId),
}

/// References to the widgets currently involved in an interaction.
///
/// All of these are ids; they are checked against the index before use and
/// cleared whenever the widget they name goes away.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Widget holding the selection.
    pub selected: Option<NodeId>,
    /// Widget under the mouse.
    pub hovered: Option<NodeId>,
    /// Text field being edited.
    pub editing: Option<NodeId>,
    /// Slider being dragged.
    pub pressed: Option<NodeId>,
    /// Window receiving navigation.
    pub active_window: Option<NodeId>,
}

impl InteractionState {
    /// The phase, by precedence: pressed, editing, selected, hovering.
    pub fn phase(&self) -> InteractionPhase {
        if let Some(id) = self.pressed {
            InteractionPhase::Pressed(id)
        } else if let Some(id) = self.editing {
            InteractionPhase::Editing(id)
        } else if let Some(id) = self.selected {
            InteractionPhase::Selected(id)
        } else if let Some(id) = self.hovered {
            InteractionPhase::Hovering(id)
        } else {
            InteractionPhase::Idle
        }
    }

    /// Flags of widget `id`.
    pub fn widget_state(&self, id: NodeId) -> WidgetState {
        let mut state = WidgetState::empty();
        state.set(WidgetState::SELECTED, self.selected == Some(id));
        state.set(WidgetState::HOVERED, self.hovered == Some(id));
        state.set(WidgetState::EDITING, self.editing == Some(id));
        state.set(WidgetState::PRESSED, self.pressed == Some(id));
        state
    }

    /// Drop every reference for which `alive` is false.
    pub(crate) fn retain(&mut self, mut alive: impl FnMut(NodeId) -> bool) {
        for slot in [
            &mut self.selected,
            &mut self.hovered,
            &mut self.editing,
            &mut self.pressed,
            &mut self.active_window,
        ] {
            if slot.is_some_and(|id| !alive(id)) {
                *slot = None;
            }
        }
    }
}

/// Caret visibility toggling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CaretBlink {
    elapsed: f64,
    visible: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            visible: true,
        }
    }
}

impl CaretBlink {
    /// Whether the caret is drawn this frame.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance by `dt` seconds, toggling once per elapsed `interval`.
    pub fn advance(&mut self, dt: f64, interval: f64) {
        self.elapsed += dt;
        if interval <= 0.0 {
            return;
        }
        while self.elapsed > interval {
            self.elapsed -= interval;
            self.visible = !self.visible;
        }
    }

    /// Show the caret and restart the interval.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_precedence() {
        let mut state = InteractionState {
            hovered: Some(NodeId(1)),
            ..InteractionState::default()
        };
        assert_eq!(state.phase(), InteractionPhase::Hovering(NodeId(1)));
        state.selected = Some(NodeId(2));
        assert_eq!(state.phase(), InteractionPhase::Selected(NodeId(2)));
        state.editing = Some(NodeId(2));
        assert_eq!(state.phase(), InteractionPhase::Editing(NodeId(2)));
        state.pressed = Some(NodeId(3));
        assert_eq!(state.phase(), InteractionPhase::Pressed(NodeId(3)));
        assert_eq!(InteractionState::default().phase(), InteractionPhase::Idle);
    }

    #[test]
    fn widget_state_flags() {
        let state = InteractionState {
            selected: Some(NodeId(2)),
            hovered: Some(NodeId(2)),
            ..InteractionState::default()
        };
        assert_eq!(
            state.widget_state(NodeId(2)),
            WidgetState::SELECTED | WidgetState::HOVERED
        );
        assert!(state.widget_state(NodeId(5)).is_empty());
    }

    #[test]
    fn retain_clears_dead_references() {
        let mut state = InteractionState {
            selected: Some(NodeId(1)),
            hovered: Some(NodeId(2)),
            active_window: Some(NodeId(0)),
            ..InteractionState::default()
        };
        state.retain(|id| id != NodeId(1));
        assert_eq!(state.selected, None);
        assert_eq!(state.hovered, Some(NodeId(2)));
        assert_eq!(state.active_window, Some(NodeId(0)));
    }

    #[test]
    fn caret_toggles_per_interval() {
        let mut caret = CaretBlink::default();
        caret.advance(0.5, 0.75);
        assert!(caret.is_visible());
        caret.advance(0.5, 0.75);
        assert!(!caret.is_visible());
        caret.reset();
        assert!(caret.is_visible());
    }
}
