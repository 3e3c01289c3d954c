// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership of the one active user interface.

use alloc::vec::Vec;

use kurbo::Size;

use crate::assets::{AssetProvider, FontRef};
use crate::render::Quad;
use crate::ui::UserInterface;

/// Holds at most one active [`UserInterface`] and its draw list.
///
/// Activating a new interface deactivates and hands back the previous one,
/// so a host can stash menus and bring them back later without rebuilding.
#[derive(Debug, Default)]
pub struct UiContext {
    active: Option<UserInterface>,
    default_font: Option<FontRef>,
    scratch: Vec<Quad>,
}

impl UiContext {
    /// A context with no default font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `font` for interfaces that do not name one or whose font is missing.
    #[must_use]
    pub fn with_default_font(mut self, font: FontRef) -> Self {
        self.default_font = Some(font);
        self
    }

    /// The font used when an interface has none of its own.
    pub fn default_font(&self) -> Option<&FontRef> {
        self.default_font.as_ref()
    }

    /// Make `ui` the active interface, returning the one it replaces.
    pub fn activate(
        &mut self,
        mut ui: UserInterface,
        viewport: Size,
        assets: &dyn AssetProvider,
    ) -> Option<UserInterface> {
        let previous = self.deactivate();
        ui.activate(viewport, assets, self.default_font.as_ref());
        self.active = Some(ui);
        previous
    }

    /// Deactivate and return the active interface.
    pub fn deactivate(&mut self) -> Option<UserInterface> {
        let mut ui = self.active.take()?;
        ui.deactivate();
        self.scratch.clear();
        self.scratch.shrink_to_fit();
        Some(ui)
    }

    /// The active interface.
    pub fn active(&self) -> Option<&UserInterface> {
        self.active.as_ref()
    }

    /// The active interface, mutably.
    pub fn active_mut(&mut self) -> Option<&mut UserInterface> {
        self.active.as_mut()
    }

    /// Forward a viewport change to the active interface.
    pub fn set_viewport(&mut self, viewport: Size) {
        if let Some(ui) = &mut self.active {
            ui.set_viewport(viewport);
        }
    }

    /// Quads of the active interface for this frame.
    ///
    /// The buffer is reused between frames.
    pub fn render(&mut self, assets: &dyn AssetProvider) -> &[Quad] {
        self.scratch.clear();
        if let Some(ui) = &self.active {
            ui.render(assets, &mut self.scratch);
        }
        &self.scratch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use crate::widget::Widget;
    use crate::window::Window;
    use tessera_text::GlyphTable;

    fn menu(tag: &str) -> UserInterface {
        UserInterface::new().with_window(
            Window::new(tag).with_widget(Widget::button("ok").with_tag("ok")),
        )
    }

    #[test]
    fn activating_returns_previous_interface() {
        let mut ctx = UiContext::new();
        let viewport = Size::new(200.0, 100.0);
        assert!(ctx.activate(menu("main"), viewport, &NoAssets).is_none());
        let previous = ctx.activate(menu("options"), viewport, &NoAssets).unwrap();
        assert!(!previous.is_active());
        assert!(previous.tree().find_window("main").is_some());
        let active = ctx.active().unwrap();
        assert!(active.is_active());
        assert!(active.tree().find_window("options").is_some());
    }

    #[test]
    fn default_font_reaches_the_interface() {
        let font = FontRef::new(GlyphTable::monospace("ok".chars(), 10.0, 12.0, 16.0), None);
        let mut ctx = UiContext::new().with_default_font(font);
        ctx.activate(menu("main"), Size::new(200.0, 100.0), &NoAssets);
        assert!(ctx.active().unwrap().font().is_some());
        // Window, button background and two glyphs.
        assert_eq!(ctx.render(&NoAssets).len(), 4);
        let ui = ctx.deactivate().unwrap();
        assert!(ui.font().is_none());
        assert!(ctx.render(&NoAssets).is_empty());
    }
}
