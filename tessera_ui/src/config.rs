// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables of a user interface.

use kurbo::Size;
use tessera_nav::EdgeDistancePolicy;

use crate::assets::{Color, ScriptHandle};

/// Colors, timings and scales shared by every widget of a user interface.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    /// Background of the selected widget.
    pub select_color: Color,
    /// Background of the hovered widget.
    pub hovered_color: Color,
    /// Background of the text field being edited.
    pub editing_color: Color,
    /// Seconds between caret visibility toggles.
    pub caret_blink_interval: f64,
    /// Text scale per unit of viewport width, at the reference aspect ratio.
    pub text_scale_factor: f64,
    /// Resolution the text scale was tuned at.
    pub reference_resolution: Size,
    /// Slider knob extent as a fraction of the slider's size.
    pub slider_knob: Size,
    /// Directional navigation scoring.
    pub navigation: EdgeDistancePolicy,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            select_color: Color::WHITE,
            hovered_color: Color::splat(0.5),
            editing_color: Color::rgba(0.15, 0.15, 0.15, 1.0),
            caret_blink_interval: 0.75,
            text_scale_factor: 0.15,
            reference_resolution: Size::new(1920.0, 1080.0),
            slider_knob: Size::new(0.04, 0.35),
            navigation: EdgeDistancePolicy::default(),
        }
    }
}

impl UiConfig {
    /// Replace the navigation policy.
    #[must_use]
    pub fn with_navigation(mut self, navigation: EdgeDistancePolicy) -> Self {
        self.navigation = navigation;
        self
    }

    /// Replace the caret blink interval.
    #[must_use]
    pub fn with_caret_blink_interval(mut self, seconds: f64) -> Self {
        self.caret_blink_interval = seconds;
        self
    }

    /// Replace the selection colors.
    #[must_use]
    pub fn with_colors(mut self, select: Color, hovered: Color, editing: Color) -> Self {
        self.select_color = select;
        self.hovered_color = hovered;
        self.editing_color = editing;
        self
    }

    /// Scale applied to a run of `text_size` in a viewport of `viewport` pixels.
    pub fn text_scale(&self, viewport: Size, text_size: f64) -> f64 {
        let aspect = if self.reference_resolution.width == 0.0 {
            1.0
        } else {
            self.reference_resolution.height / self.reference_resolution.width
        };
        viewport.width * self.text_scale_factor * text_size * aspect
    }
}

/// Callbacks registered on the user interface as a whole.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiCallbacks {
    /// Fired whenever the selection moves.
    pub on_move: Option<ScriptHandle>,
    /// Fired whenever the hovered widget changes.
    pub on_hover: Option<ScriptHandle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_scale_at_reference_resolution() {
        let config = UiConfig::default();
        let scale = config.text_scale(Size::new(1920.0, 1080.0), 1.0);
        assert!((scale - 1080.0 * 0.15).abs() < 1e-9);
        assert_eq!(config.text_scale(Size::new(1920.0, 1080.0), 0.0), 0.0);
    }
}
