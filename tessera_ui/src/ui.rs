// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The user interface: tree, interaction state and the operations driving them.

use alloc::string::String;
use alloc::vec::{Drain, Vec};

use kurbo::{Point, Rect, Size};
use tessera_geometry::Bounds;
use tessera_nav::Direction;
use tessera_text::{FontGeneration, index_from_mouse_x, single_line_origin};

use crate::NodeId;
use crate::assets::{AssetHandle, AssetProvider, Color, FontRef};
use crate::config::{UiCallbacks, UiConfig};
use crate::error::UiError;
use crate::events::{CursorIcon, UiEvent};
use crate::interaction::{
    CaretBlink, InteractionPhase, InteractionState, Key, WidgetState,
};
use crate::navigation::recompute_links;
use crate::render::{RenderSink, render_ui};
use crate::text::{drop_text_caches, revalidate_text};
use crate::tree::WidgetTree;
use crate::walk::{visit_window, visit_window_mut};
use crate::widget::{DropDownWidget, SingleLineText, Widget, WidgetKind};
use crate::window::Window;

/// Containment that excludes the edges, used by the slider and drop-down hit boxes.
fn strictly_contains(rect: Rect, pt: Point) -> bool {
    pt.x > rect.x0 && pt.x < rect.x1 && pt.y > rect.y0 && pt.y < rect.y1
}

/// Depth at which `point` hits `widget`, counting the list of an open drop-down.
fn hit_depth(widget: &Widget, bounds: &Bounds, point: Point) -> Option<f64> {
    if bounds.contains(point) {
        return Some(bounds.depth);
    }
    let WidgetKind::DropDown(drop) = &widget.kind else {
        return None;
    };
    drop.slot_at(bounds.rect(), point)
        .map(|slot| DropDownWidget::option_depth(bounds.depth, slot))
}

fn warned<T>(result: Result<T, UiError>) -> Result<T, UiError> {
    if let Err(error) = &result {
        tracing::warn!(%error, "user interface request ignored");
    }
    result
}

/// A runtime user interface.
///
/// Structural edits go through this type so the id index, text measurements
/// and navigation links are refreshed before the call returns. Interaction
/// methods never call into the host; they queue [`UiEvent`]s that the host
/// collects with [`UserInterface::drain_events`].
#[derive(Debug, Default)]
pub struct UserInterface {
    pub(crate) tree: WidgetTree,
    /// Tunables.
    pub config: UiConfig,
    /// Interface-wide callbacks.
    pub callbacks: UiCallbacks,
    /// Font requested from the asset provider on activation.
    pub font_handle: Option<AssetHandle>,
    pub(crate) font: Option<FontRef>,
    font_generation: FontGeneration,
    pub(crate) viewport: Size,
    pub(crate) mouse: Point,
    pub(crate) state: InteractionState,
    pub(crate) caret: CaretBlink,
    events: Vec<UiEvent>,
    active: bool,
}

impl UserInterface {
    /// An empty, inactive user interface with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder form of [`UserInterface::add_window`].
    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.add_window(window);
        self
    }

    /// The windows and their widgets.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Whether [`UserInterface::activate`] has run without a later deactivation.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The font text is measured and drawn with.
    pub fn font(&self) -> Option<&FontRef> {
        self.font.as_ref()
    }

    /// The widget with `id`.
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        self.tree.widget(id)
    }

    /// The window with `id`.
    pub fn window(&self, id: NodeId) -> Option<&Window> {
        self.tree.window(id)
    }

    /// Mutable access to a widget.
    ///
    /// Call [`UserInterface::rebuild`] after changes to children, layout or
    /// selectability.
    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut Widget> {
        self.tree.widget_mut(id)
    }

    /// Mutable access to a window.
    ///
    /// Call [`UserInterface::rebuild`] after changes to its widgets or placement.
    pub fn window_mut(&mut self, id: NodeId) -> Option<&mut Window> {
        self.tree.window_mut(id)
    }

    /// Resolved bounds of `id` in the current viewport.
    pub fn bounds_of(&self, id: NodeId) -> Option<Bounds> {
        self.tree.placement(id, self.viewport).map(|p| p.bounds)
    }

    // --- lifecycle ---

    /// Make the user interface live.
    ///
    /// Resolves the font (falling back to `default_font`), displays the first
    /// window and makes it the active one, measures all text, places every
    /// text field caret at the end of its text, selects the active window's
    /// default focus and computes navigation links.
    pub fn activate(
        &mut self,
        viewport: Size,
        assets: &dyn AssetProvider,
        default_font: Option<&FontRef>,
    ) {
        self.viewport = viewport;
        let requested = self.font_handle.and_then(|handle| {
            let font = assets.font(handle);
            if font.is_none() {
                tracing::warn!(handle = handle.0, "font asset not found, using the default font");
            }
            font
        });
        self.font = requested.or_else(|| default_font.cloned());
        if self.font.is_none() {
            tracing::warn!(error = %UiError::NoFont, "text will not be measured or drawn");
        }
        self.font_generation = self.font_generation.next();
        self.tree.rebuild();
        self.state = InteractionState::default();
        self.caret.reset();
        self.events.clear();

        let mut default_focus = None;
        if let Some(first) = self.tree.windows.first_mut() {
            first.display();
            self.state.active_window = Some(first.id);
            default_focus = first.default_focus;
        }
        self.refresh_text();
        for window in &mut self.tree.windows {
            visit_window_mut(window, viewport, &mut |widget: &mut Widget, _: &Bounds| {
                if let WidgetKind::InputText(input) = &mut widget.kind {
                    input.text.cursor_to_end();
                }
            });
        }
        self.state.selected = default_focus.filter(|&id| {
            let selectable = self.tree.widget(id).is_some_and(Widget::is_selectable);
            if !selectable {
                tracing::warn!(widget = ?id, "default focus is not selectable");
            }
            selectable
        });
        self.active = true;
        self.recompute_navigation();
        tracing::debug!(
            windows = self.tree.windows.len(),
            nodes = self.tree.len(),
            selected = ?self.state.selected,
            "activated user interface"
        );
    }

    /// Release the font and text measurements and forget all interaction state.
    pub fn deactivate(&mut self) {
        self.font = None;
        self.state = InteractionState::default();
        self.caret.reset();
        drop_text_caches(&mut self.tree);
        self.active = false;
        tracing::debug!("deactivated user interface");
    }

    /// Switch to the font behind `handle`.
    pub fn set_font(
        &mut self,
        handle: AssetHandle,
        assets: &dyn AssetProvider,
    ) -> Result<(), UiError> {
        let font = warned(assets.font(handle).ok_or(UiError::NoFont))?;
        self.font = Some(font);
        self.font_handle = Some(handle);
        self.font_generation = self.font_generation.next();
        self.refresh_text();
        Ok(())
    }

    /// Resize the viewport; text and links are recomputed.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        // Text scale follows the viewport width, so every measurement is stale.
        self.font_generation = self.font_generation.next();
        self.refresh_text();
        self.recompute_navigation();
    }

    fn refresh_text(&mut self) {
        if let Some(font) = &self.font {
            revalidate_text(
                &mut self.tree,
                self.viewport,
                &*font.metrics,
                self.font_generation,
                &self.config,
            );
        }
    }

    /// Recompute navigation links for every window.
    ///
    /// Runs automatically after structural edits made through this type.
    pub fn recompute_navigation(&mut self) {
        if self.active {
            recompute_links(&mut self.tree, self.viewport, &self.config.navigation);
        }
    }

    /// Re-derive everything after direct edits through
    /// [`UserInterface::widget_mut`] or [`UserInterface::window_mut`].
    pub fn rebuild(&mut self) {
        self.tree.rebuild();
        self.commit();
    }

    fn commit(&mut self) {
        let tree = &self.tree;
        self.state.retain(|id| tree.node(id).is_some());
        if self
            .state
            .selected
            .is_some_and(|id| !tree.widget(id).is_some_and(Widget::is_selectable))
        {
            self.state.selected = None;
        }
        if self.state.editing.is_some_and(|id| self.state.selected != Some(id)) {
            self.state.editing = None;
        }
        self.refresh_text();
        self.recompute_navigation();
    }

    // --- structure ---

    /// Append a window; ids are assigned to it and every widget inside.
    pub fn add_window(&mut self, window: Window) -> NodeId {
        let id = self.tree.add_window(window);
        self.commit();
        id
    }

    /// Append `widget` to a window or container.
    pub fn add_widget(&mut self, parent: NodeId, widget: Widget) -> Result<NodeId, UiError> {
        let id = warned(self.tree.add_widget(parent, widget))?;
        self.commit();
        Ok(id)
    }

    /// Remove a widget and everything inside it.
    pub fn delete_widget(&mut self, id: NodeId) -> Result<(), UiError> {
        warned(self.tree.delete_widget(id))?;
        self.commit();
        Ok(())
    }

    /// Remove a window and everything inside it.
    pub fn delete_window(&mut self, id: NodeId) -> Result<(), UiError> {
        warned(self.tree.delete_window(id))?;
        self.commit();
        Ok(())
    }

    /// Remove every widget matching `predicate`; returns how many matched.
    pub fn remove_widgets_where(&mut self, predicate: impl FnMut(&Widget) -> bool) -> usize {
        let removed = self.tree.remove_where(predicate);
        if removed > 0 {
            self.commit();
        }
        removed
    }

    /// Set or clear the widget selected when the user interface is activated.
    pub fn set_default_focus(
        &mut self,
        window: NodeId,
        widget: Option<NodeId>,
    ) -> Result<(), UiError> {
        warned(self.tree.set_default_focus(window, widget))
    }

    // --- tag addressed ---

    fn tagged(&self, window_tag: &str, widget_tag: &str) -> Result<NodeId, UiError> {
        warned(
            self.tree
                .find_by_tag(window_tag, widget_tag)
                .ok_or_else(|| UiError::UnknownTag {
                    window: String::from(window_tag),
                    widget: String::from(widget_tag),
                }),
        )
    }

    fn tagged_mut(&mut self, window_tag: &str, widget_tag: &str) -> Result<&mut Widget, UiError> {
        let id = self.tagged(window_tag, widget_tag)?;
        self.tree.widget_mut(id).ok_or(UiError::UnknownNode(id))
    }

    /// Replace the text of a text, button or text field widget.
    pub fn set_widget_text(
        &mut self,
        window_tag: &str,
        widget_tag: &str,
        text: impl Into<String>,
    ) -> Result<(), UiError> {
        let widget = self.tagged_mut(window_tag, widget_tag)?;
        if !widget.set_text(text) {
            tracing::warn!(kind = widget.kind().name(), tag = widget_tag, "widget has no text");
        }
        self.refresh_text();
        Ok(())
    }

    /// Set the glyph color of a widget.
    pub fn set_widget_text_color(
        &mut self,
        window_tag: &str,
        widget_tag: &str,
        color: Color,
    ) -> Result<(), UiError> {
        let widget = self.tagged_mut(window_tag, widget_tag)?;
        if !widget.set_text_color(color) {
            tracing::warn!(kind = widget.kind().name(), tag = widget_tag, "widget has no text");
        }
        Ok(())
    }

    /// Set the resting background of a widget.
    pub fn set_widget_background(
        &mut self,
        window_tag: &str,
        widget_tag: &str,
        color: Color,
    ) -> Result<(), UiError> {
        let widget = self.tagged_mut(window_tag, widget_tag)?;
        if !widget.set_background(color) {
            tracing::warn!(
                kind = widget.kind().name(),
                tag = widget_tag,
                "widget has no background"
            );
        }
        Ok(())
    }

    /// Allow or forbid selecting a widget. Navigation links are recomputed.
    pub fn set_widget_selectable(
        &mut self,
        window_tag: &str,
        widget_tag: &str,
        selectable: bool,
    ) -> Result<(), UiError> {
        let id = self.tagged(window_tag, widget_tag)?;
        let Some(selection) = self.tree.widget_mut(id).and_then(Widget::selection_mut) else {
            tracing::warn!(tag = widget_tag, "widget cannot be selected");
            return Ok(());
        };
        selection.selectable = selectable;
        if !selectable {
            let state = &mut self.state;
            if state.selected == Some(id) {
                state.selected = None;
            }
            if state.hovered == Some(id) {
                state.hovered = None;
            }
            if state.editing == Some(id) {
                state.editing = None;
            }
        }
        self.recompute_navigation();
        Ok(())
    }

    /// Select a widget by tag. Returns whether the selection moved.
    pub fn set_selected_by_tag(
        &mut self,
        window_tag: &str,
        widget_tag: &str,
    ) -> Result<bool, UiError> {
        let id = self.tagged(window_tag, widget_tag)?;
        Ok(self.set_selected(id))
    }

    /// Whether the tagged widget holds the selection.
    pub fn is_widget_selected(&self, window_tag: &str, widget_tag: &str) -> bool {
        self.tagged(window_tag, widget_tag)
            .is_ok_and(|id| self.state.selected == Some(id))
    }

    /// Show or hide the first window tagged `window_tag`.
    pub fn set_window_displayed(
        &mut self,
        window_tag: &str,
        displayed: bool,
    ) -> Result<(), UiError> {
        let Some(window) = self.tree.windows.iter_mut().find(|w| w.tag == window_tag) else {
            return warned(Err(UiError::UnknownTag {
                window: String::from(window_tag),
                widget: String::new(),
            }));
        };
        if displayed {
            window.display();
        } else {
            window.hide();
        }
        tracing::debug!(window = window_tag, displayed, "window display toggled");
        Ok(())
    }

    // --- interaction ---

    /// Current interaction references.
    pub fn interaction_state(&self) -> &InteractionState {
        &self.state
    }

    /// Current interaction phase.
    pub fn phase(&self) -> InteractionPhase {
        self.state.phase()
    }

    /// Interaction flags of widget `id`.
    pub fn widget_state(&self, id: NodeId) -> WidgetState {
        self.state.widget_state(id)
    }

    /// Whether the caret of the edited text field is drawn this frame.
    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Drain<'_, UiEvent> {
        self.events.drain(..)
    }

    /// Move the selection to `id`.
    ///
    /// Ignored for widgets that cannot be selected or already are.
    pub fn set_selected(&mut self, id: NodeId) -> bool {
        let Some(widget) = self.tree.widget(id) else {
            tracing::warn!(widget = ?id, "cannot select a missing widget");
            return false;
        };
        if !widget.is_selectable() || self.state.selected == Some(id) {
            return false;
        }
        let from = self.state.selected.replace(id);
        if self.state.editing.is_some_and(|e| e != id) {
            self.state.editing = None;
        }
        tracing::trace!(?from, to = ?id, "selection moved");
        if let Some(handler) = self.callbacks.on_move {
            self.events.push(UiEvent::SelectionMoved { from, to: id, handler });
        }
        true
    }

    /// Move the hover to `id`.
    ///
    /// Entering a text field requests the text cursor; leaving one restores
    /// the arrow. Sliders do not fire the hover callback.
    pub fn set_hovered(&mut self, id: NodeId) -> bool {
        let Some(widget) = self.tree.widget(id) else {
            tracing::warn!(widget = ?id, "cannot hover a missing widget");
            return false;
        };
        if !widget.is_selectable() || self.state.hovered == Some(id) {
            return false;
        }
        let entering_text = widget.is_input_text();
        let is_slider = matches!(widget.kind, WidgetKind::Slider(_));
        let left_text = self
            .state
            .hovered
            .and_then(|old| self.tree.widget(old))
            .is_some_and(Widget::is_input_text);
        self.state.hovered = Some(id);
        if entering_text {
            self.events.push(UiEvent::CursorIcon(CursorIcon::IBeam));
        } else if left_text {
            self.events.push(UiEvent::CursorIcon(CursorIcon::Standard));
        }
        if is_slider {
            return true;
        }
        if let Some(handler) = self.callbacks.on_hover {
            self.events.push(UiEvent::Hovered { widget: id, handler });
        }
        true
    }

    /// Forget the hovered widget and restore the arrow cursor.
    pub fn clear_hovered(&mut self) {
        if self.state.hovered.take().is_some() {
            self.events.push(UiEvent::CursorIcon(CursorIcon::Standard));
        }
    }

    /// Follow the selected widget's link in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(selected) = self.state.selected else {
            return false;
        };
        let Some(target) = self
            .tree
            .widget(selected)
            .and_then(Widget::selection)
            .and_then(|s| s.links().get(direction))
        else {
            return false;
        };
        debug_assert!(
            self.tree.widget(target).is_some(),
            "navigation link to missing widget {target:?}"
        );
        self.state.selected = Some(target);
        tracing::trace!(from = ?selected, to = ?target, ?direction, "navigated");
        if let Some(handler) = self.callbacks.on_move {
            self.events.push(UiEvent::SelectionMoved {
                from: Some(selected),
                to: target,
                handler,
            });
        }
        if self.state.editing.is_some_and(|e| e != target) {
            self.state.editing = None;
        }
        true
    }

    /// Press the selected widget.
    pub fn press(&mut self) -> bool {
        match self.state.selected {
            Some(id) => self.press_widget(id),
            None => false,
        }
    }

    /// Press `id`, selecting it first.
    ///
    /// Checkboxes toggle, text fields start editing, everything else fires
    /// its press callback.
    pub fn press_widget(&mut self, id: NodeId) -> bool {
        let Some(widget) = self.tree.widget(id) else {
            tracing::warn!(widget = ?id, "cannot press a missing widget");
            return false;
        };
        let Some(on_press) = widget.selection().filter(|s| s.selectable).map(|s| s.on_press) else {
            return false;
        };
        self.set_selected(id);
        let Some(widget) = self.tree.widget_mut(id) else {
            return false;
        };
        match &mut widget.kind {
            WidgetKind::Checkbox(checkbox) => {
                checkbox.checked = !checkbox.checked;
                if let Some(handler) = on_press {
                    self.events.push(UiEvent::Toggled {
                        widget: id,
                        checked: checkbox.checked,
                        handler,
                    });
                }
            }
            WidgetKind::InputText(_) => {
                if let Some(handler) = on_press {
                    self.events.push(UiEvent::Pressed { widget: id, handler });
                }
                self.state.editing = Some(id);
                self.caret.reset();
                tracing::trace!(widget = ?id, "editing started");
            }
            _ => {
                if let Some(handler) = on_press {
                    self.events.push(UiEvent::Pressed { widget: id, handler });
                }
            }
        }
        true
    }

    /// Apply `edit` to the text field being edited, then remeasure and report
    /// the caret if `edit` returned `true`.
    fn edit_text(&mut self, edit: impl FnOnce(&mut SingleLineText) -> bool) -> bool {
        let Some(id) = self.state.editing else {
            return false;
        };
        let kind = self.tree.widget_mut(id).map(|w| &mut w.kind);
        debug_assert!(
            matches!(kind, Some(WidgetKind::InputText(_))),
            "editing widget {id:?} is not a text field"
        );
        let Some(WidgetKind::InputText(input)) = kind else {
            self.state.editing = None;
            return false;
        };
        if !edit(&mut input.text) {
            return true;
        }
        if let Some(font) = &self.font {
            input.text.revalidate(&*font.metrics, self.font_generation);
        }
        self.caret.reset();
        if let Some(handler) = input.on_move_cursor {
            self.events.push(UiEvent::CursorMoved {
                widget: id,
                cursor: input.text.cursor(),
                handler,
            });
        }
        true
    }

    /// A character typed while a text field is being edited.
    ///
    /// Returns whether the character was consumed.
    pub fn on_key_typed(&mut self, c: char) -> bool {
        if c.is_control() {
            return self.state.editing.is_some();
        }
        self.edit_text(|text| {
            text.insert_at_cursor(c);
            true
        })
    }

    /// A key press. Only consumed while a text field is being edited.
    pub fn on_key_pressed(&mut self, key: Key) -> bool {
        if self.state.editing.is_none() {
            return false;
        }
        match key {
            Key::Backspace => self.edit_text(|text| text.remove_before_cursor()),
            Key::Enter | Key::Escape => {
                tracing::trace!(widget = ?self.state.editing, "editing finished");
                self.state.editing = None;
                true
            }
            Key::Left => self.edit_text(|text| {
                let cursor = text.cursor();
                text.set_cursor(cursor.saturating_sub(1));
                text.cursor() != cursor
            }),
            Key::Right => self.edit_text(|text| {
                let cursor = text.cursor();
                text.set_cursor(cursor + 1);
                text.cursor() != cursor
            }),
            Key::Up | Key::Down | Key::Other(_) => false,
        }
    }

    /// A mouse button went down at `mouse`, in viewport pixels.
    ///
    /// Returns whether the press was consumed.
    pub fn on_mouse_pressed(&mut self, mouse: Point) -> bool {
        self.mouse = mouse;
        if let Some(id) = self.state.editing {
            return self.place_caret(id, mouse);
        }
        if let Some(id) = self.state.selected {
            let bounds = self.bounds_of(id).map(|b| b.rect());
            let knob = self.config.slider_knob;
            match (bounds, self.tree.widget_mut(id).map(|w| &mut w.kind)) {
                (Some(rect), Some(WidgetKind::Slider(slider))) => {
                    if strictly_contains(slider.knob_rect(rect, knob), mouse) {
                        self.state.pressed = Some(id);
                        tracing::trace!(widget = ?id, "slider grabbed");
                        return true;
                    }
                }
                (Some(rect), Some(WidgetKind::DropDown(drop))) => {
                    if strictly_contains(rect, mouse) {
                        drop.open = !drop.open;
                        return true;
                    }
                    if drop.open {
                        let hit = drop.listed_options().enumerate().find_map(|(slot, index)| {
                            strictly_contains(DropDownWidget::option_rect(rect, slot), mouse)
                                .then_some(index)
                        });
                        if let Some(index) = hit {
                            drop.open = false;
                            drop.current = index;
                            if let Some(handler) = drop.on_select_option {
                                self.events.push(UiEvent::OptionSelected {
                                    widget: id,
                                    index,
                                    handler,
                                });
                            }
                            return true;
                        }
                    }
                }
                _ => {}
            }
        }
        match self.state.hovered {
            Some(id) => self.press_widget(id),
            None => false,
        }
    }

    fn place_caret(&mut self, id: NodeId, mouse: Point) -> bool {
        let Some(bounds) = self.bounds_of(id) else {
            return false;
        };
        let Some(font) = &self.font else {
            return true;
        };
        let kind = self.tree.widget_mut(id).map(|w| &mut w.kind);
        let Some(WidgetKind::InputText(input)) = kind else {
            return false;
        };
        let text = &mut input.text;
        let scale = self.config.text_scale(self.viewport, text.text_size);
        let measured = text.revalidate(&*font.metrics, self.font_generation);
        let origin = single_line_origin(bounds.rect(), measured, scale, text.alignment);
        let index = index_from_mouse_x(&*font.metrics, text.text(), origin.x, mouse.x, scale);
        text.set_cursor(index);
        self.caret.reset();
        if let Some(handler) = input.on_move_cursor {
            self.events.push(UiEvent::CursorMoved {
                widget: id,
                cursor: index,
                handler,
            });
        }
        true
    }

    /// A mouse button was released.
    pub fn on_mouse_released(&mut self) -> bool {
        self.state.pressed.take().is_some()
    }

    /// Per-frame update: caret blink, slider drag and mouse hover.
    pub fn update(&mut self, dt: f64, mouse: Point) {
        self.mouse = mouse;
        if self.state.editing.is_some() {
            self.caret.advance(dt, self.config.caret_blink_interval);
        }
        if let Some(id) = self.state.pressed {
            self.drag_slider(id, mouse);
        }
        match self.hit_test(mouse) {
            Some(id) => {
                self.set_hovered(id);
            }
            None => self.clear_hovered(),
        }
    }

    fn drag_slider(&mut self, id: NodeId, mouse: Point) {
        let Some(rect) = self.bounds_of(id).map(|b| b.rect()) else {
            self.state.pressed = None;
            return;
        };
        let kind = self.tree.widget_mut(id).map(|w| &mut w.kind);
        debug_assert!(
            matches!(kind, Some(WidgetKind::Slider(_))),
            "pressed widget {id:?} is not a slider"
        );
        let Some(WidgetKind::Slider(slider)) = kind else {
            self.state.pressed = None;
            return;
        };
        if mouse.x < rect.x0 {
            slider.value = slider.min;
        } else if mouse.x > rect.x1 {
            slider.value = slider.max;
        } else {
            let t = if rect.width() > 0.0 {
                (mouse.x - rect.x0) / rect.width()
            } else {
                0.0
            };
            slider.set_normalized(t);
        }
        tracing::trace!(widget = ?id, value = slider.value, "slider dragged");
        if let Some(handler) = slider.on_move_slider {
            self.events.push(UiEvent::SliderMoved {
                widget: id,
                value: slider.value,
                handler,
            });
        }
    }

    /// The selectable widget under `point` in a displayed window.
    ///
    /// The deepest widget wins; on equal depth the later one in tree order wins.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        let mut best: Option<(f64, NodeId)> = None;
        for window in self.tree.windows.iter().filter(|w| w.is_displayed()) {
            visit_window(window, self.viewport, &mut |widget: &Widget, bounds: &Bounds| {
                if !widget.is_selectable() {
                    return;
                }
                let Some(hit) = hit_depth(widget, bounds, point) else {
                    return;
                };
                if best.is_none_or(|(depth, _)| hit >= depth) {
                    best = Some((hit, widget.id));
                }
            });
        }
        best.map(|(_, id)| id)
    }

    /// Last mouse position seen by [`UserInterface::update`] or a press.
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Submit one quad per visual primitive of every displayed window.
    pub fn render(&self, assets: &dyn AssetProvider, sink: &mut dyn RenderSink) {
        render_ui(self, assets, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{NoAssets, ScriptHandle};
    use tessera_geometry::Length;
    use tessera_text::GlyphTable;

    fn font() -> FontRef {
        FontRef::new(
            GlyphTable::monospace("abcdefghijklmnopqrstuvwxyz ?".chars(), 10.0, 12.0, 16.0),
            None,
        )
    }

    fn active(ui: &mut UserInterface) {
        ui.activate(Size::new(100.0, 100.0), &NoAssets, Some(&font()));
    }

    fn row() -> UserInterface {
        let mut window = Window::new("main");
        for (i, x) in [0.0, 0.3, 0.6].into_iter().enumerate() {
            window = window.with_widget(
                Widget::button("b")
                    .with_tag(alloc::format!("b{i}"))
                    .with_position(Length::Percent(x), Length::Percent(0.0)),
            );
        }
        UserInterface::new().with_window(window)
    }

    #[test]
    fn activation_displays_first_window() {
        let mut ui = row().with_window(Window::new("other"));
        active(&mut ui);
        assert!(ui.tree().windows()[0].is_displayed());
        assert!(!ui.tree().windows()[1].is_displayed());
        assert_eq!(ui.interaction_state().active_window, Some(ui.tree().windows()[0].id()));
        assert_eq!(ui.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn navigate_fires_on_move() {
        let mut ui = row();
        ui.callbacks.on_move = Some(ScriptHandle(7));
        active(&mut ui);
        let b0 = ui.tree().find_by_tag("main", "b0").unwrap();
        let b1 = ui.tree().find_by_tag("main", "b1").unwrap();
        assert!(!ui.navigate(Direction::Right), "nothing selected yet");
        assert!(ui.set_selected(b0));
        assert!(!ui.set_selected(b0), "already selected");
        assert!(ui.navigate(Direction::Right));
        assert_eq!(ui.interaction_state().selected, Some(b1));
        let events: Vec<_> = ui.drain_events().collect();
        assert_eq!(
            events,
            [
                UiEvent::SelectionMoved { from: None, to: b0, handler: ScriptHandle(7) },
                UiEvent::SelectionMoved { from: Some(b0), to: b1, handler: ScriptHandle(7) },
            ]
        );
        assert!(!ui.navigate(Direction::Up));
    }

    #[test]
    fn checkbox_press_toggles() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w").with_widget(Widget::checkbox(false).with_tag("c")),
        );
        active(&mut ui);
        let c = ui.tree().find_by_tag("w", "c").unwrap();
        ui.widget_mut(c).unwrap().selection_mut().unwrap().on_press = Some(ScriptHandle(3));
        assert!(ui.press_widget(c));
        assert_eq!(ui.interaction_state().selected, Some(c));
        assert_eq!(
            ui.drain_events().collect::<Vec<_>>(),
            [UiEvent::Toggled { widget: c, checked: true, handler: ScriptHandle(3) }]
        );
    }

    #[test]
    fn typing_edits_at_caret() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w").with_widget(Widget::input_text("ac").with_tag("t")),
        );
        active(&mut ui);
        let t = ui.tree().find_by_tag("w", "t").unwrap();
        assert!(!ui.on_key_typed('x'), "not editing");
        ui.set_selected(t);
        ui.press();
        assert_eq!(ui.phase(), InteractionPhase::Editing(t));
        assert!(ui.on_key_pressed(Key::Left));
        assert!(ui.on_key_typed('b'));
        let text = ui.widget(t).unwrap().single_line_text().unwrap();
        assert_eq!(text.text(), "abc");
        assert_eq!(text.cursor(), 2);
        assert!(!ui.on_key_pressed(Key::Up));
        assert!(ui.on_key_pressed(Key::Escape));
        assert_eq!(ui.phase(), InteractionPhase::Selected(t));
        assert!(!ui.on_key_pressed(Key::Backspace));
    }

    #[test]
    fn caret_blinks_while_editing() {
        let mut ui = UserInterface::new()
            .with_config(UiConfig::default().with_caret_blink_interval(0.5))
            .with_window(Window::new("w").with_widget(Widget::input_text("a").with_tag("t")));
        active(&mut ui);
        let t = ui.tree().find_by_tag("w", "t").unwrap();
        ui.set_selected(t);
        ui.press();
        assert!(ui.caret_visible());
        ui.update(0.4, Point::ZERO);
        assert!(ui.caret_visible());
        ui.update(0.2, Point::ZERO);
        assert!(!ui.caret_visible());
        assert!(ui.on_key_typed('b'), "typing shows the caret again");
        assert!(ui.caret_visible());
    }

    #[test]
    fn slider_drag_clamps_to_range() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w").with_widget(
                Widget::slider(0.0, 10.0, 0.0)
                    .with_tag("s")
                    .with_size(Length::Pixels(50.0), Length::Pixels(10.0)),
            ),
        );
        active(&mut ui);
        let s = ui.tree().find_by_tag("w", "s").unwrap();
        ui.set_selected(s);
        assert!(!ui.on_mouse_pressed(Point::new(40.0, 5.0)), "missed the knob");
        assert!(ui.on_mouse_pressed(Point::new(0.5, 5.0)));
        assert_eq!(ui.phase(), InteractionPhase::Pressed(s));
        ui.update(0.016, Point::new(25.0, 5.0));
        let value = |ui: &UserInterface| match ui.widget(s).unwrap().kind() {
            WidgetKind::Slider(slider) => slider.value,
            _ => unreachable!(),
        };
        assert!((value(&ui) - 5.0).abs() < 1e-9);
        ui.update(0.016, Point::new(-5.0, 5.0));
        assert_eq!(value(&ui), 0.0);
        ui.update(0.016, Point::new(80.0, 5.0));
        assert_eq!(value(&ui), 10.0);
        assert!(ui.on_mouse_released());
        ui.update(0.016, Point::new(25.0, 5.0));
        assert_eq!(value(&ui), 10.0);
    }

    #[test]
    fn drop_down_opens_and_selects() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w").with_widget(
                Widget::drop_down(["low", "mid", "high"])
                    .with_tag("d")
                    .with_size(Length::Pixels(40.0), Length::Pixels(10.0))
                    .with_position(Length::Pixels(0.0), Length::Pixels(80.0)),
            ),
        );
        active(&mut ui);
        let d = ui.tree().find_by_tag("w", "d").unwrap();
        if let WidgetKind::DropDown(drop) = ui.widget_mut(d).unwrap().kind_mut() {
            drop.on_select_option = Some(ScriptHandle(9));
        }
        ui.set_selected(d);
        assert!(ui.on_mouse_pressed(Point::new(20.0, 85.0)));
        // Listed: "mid" at y 70..80, "high" at y 60..70.
        assert!(ui.on_mouse_pressed(Point::new(20.0, 65.0)));
        let WidgetKind::DropDown(drop) = ui.widget(d).unwrap().kind() else {
            unreachable!()
        };
        assert_eq!(drop.current, 2);
        assert!(!drop.open);
        assert_eq!(
            ui.drain_events().collect::<Vec<_>>(),
            [UiEvent::OptionSelected { widget: d, index: 2, handler: ScriptHandle(9) }]
        );
    }

    #[test]
    fn hover_swaps_cursor_for_text_fields() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w")
                .with_widget(Widget::input_text("abc").with_tag("t"))
                .with_widget(
                    Widget::button("b")
                        .with_tag("b")
                        .with_position(Length::Percent(0.5), Length::Percent(0.0)),
                ),
        );
        active(&mut ui);
        let t = ui.tree().find_by_tag("w", "t").unwrap();
        ui.update(0.0, Point::new(10.0, 10.0));
        assert_eq!(ui.interaction_state().hovered, Some(t));
        ui.update(0.0, Point::new(60.0, 10.0));
        ui.update(0.0, Point::new(95.0, 95.0));
        assert_eq!(ui.interaction_state().hovered, None);
        assert_eq!(
            ui.drain_events().collect::<Vec<_>>(),
            [
                UiEvent::CursorIcon(CursorIcon::IBeam),
                UiEvent::CursorIcon(CursorIcon::Standard),
                UiEvent::CursorIcon(CursorIcon::Standard),
            ]
        );
    }

    #[test]
    fn click_while_editing_places_caret() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w").with_widget(
                Widget::input_text("abcd")
                    .with_tag("t")
                    .with_size(Length::Pixels(100.0), Length::Pixels(20.0)),
            ),
        );
        ui.config.text_scale_factor = 1.0;
        ui.config.reference_resolution = Size::new(1.0, 1.0);
        ui.activate(Size::new(1.0, 100.0), &NoAssets, Some(&font()));
        let t = ui.tree().find_by_tag("w", "t").unwrap();
        if let WidgetKind::InputText(input) = ui.widget_mut(t).unwrap().kind_mut() {
            input.text.text_size = 1.0;
        }
        ui.press_widget(t);
        // 40 wide text centered in 100 starts at x = 30.
        assert!(ui.on_mouse_pressed(Point::new(44.0, 10.0)));
        assert_eq!(ui.widget(t).unwrap().single_line_text().unwrap().cursor(), 1);
    }

    #[test]
    fn deleting_selected_widget_clears_state() {
        let mut ui = row();
        active(&mut ui);
        let b1 = ui.tree().find_by_tag("main", "b1").unwrap();
        ui.set_selected(b1);
        ui.delete_widget(b1).unwrap();
        assert_eq!(ui.interaction_state().selected, None);
        assert_eq!(ui.delete_widget(b1), Err(UiError::UnknownNode(b1)));
        let b0 = ui.tree().find_by_tag("main", "b0").unwrap();
        let b2 = ui.tree().find_by_tag("main", "b2").unwrap();
        let links = *ui.widget(b0).unwrap().selection().unwrap().links();
        assert_eq!(links.right, Some(b2));
    }

    #[test]
    fn unselectable_widget_is_skipped() {
        let mut ui = row();
        active(&mut ui);
        let b0 = ui.tree().find_by_tag("main", "b0").unwrap();
        let b2 = ui.tree().find_by_tag("main", "b2").unwrap();
        ui.set_widget_selectable("main", "b1", false).unwrap();
        ui.set_selected(b0);
        assert!(ui.navigate(Direction::Right));
        assert_eq!(ui.interaction_state().selected, Some(b2));
        assert!(ui.is_widget_selected("main", "b2"));
        assert!(matches!(
            ui.set_widget_selectable("main", "nope", true),
            Err(UiError::UnknownTag { .. })
        ));
    }

    #[test]
    fn deactivation_releases_font() {
        let mut ui = row();
        active(&mut ui);
        let b0 = ui.tree().find_by_tag("main", "b0").unwrap();
        ui.set_selected(b0);
        ui.deactivate();
        assert!(ui.font().is_none());
        assert!(!ui.is_active());
        assert_eq!(ui.phase(), InteractionPhase::Idle);
        assert_eq!(ui.widget(b0).unwrap().single_line_text().unwrap().measured(), None);
    }
}
