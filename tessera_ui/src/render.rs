// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning displayed windows into textured quads.

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};
use tessera_geometry::{Bounds, DEPTH_STEP};
use tessera_text::{
    FontMetrics, line_origins, offset_from_index, run_glyph, single_line_origin,
};

use crate::assets::{AssetProvider, Color, FontRef, TextureRef};
use crate::config::UiConfig;
use crate::interaction::WidgetState;
use crate::ui::UserInterface;
use crate::walk::visit_window;
use crate::widget::{
    DropDownWidget, ImageData, MultiLineText, SingleLineText, SliderWidget, Widget, WidgetKind,
};

/// One visual primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    /// Maps the unit square centered at the origin onto the primitive.
    pub transform: Affine,
    /// Paint depth; larger values are drawn on top.
    pub depth: f64,
    /// Color, multiplied with the texture if there is one.
    pub color: Color,
    /// Texture sampled across the quad.
    pub texture: Option<TextureRef>,
}

impl Quad {
    /// A quad covering `rect`.
    pub fn from_rect(rect: Rect, depth: f64, color: Color, texture: Option<TextureRef>) -> Self {
        Self {
            transform: Bounds::new(rect.origin(), rect.size(), depth).unit_quad_transform(),
            depth,
            color,
            texture,
        }
    }

    /// The rectangle covered by the quad.
    pub fn rect(&self) -> Rect {
        self.transform
            .transform_rect_bbox(Rect::new(-0.5, -0.5, 0.5, 0.5))
    }
}

/// Receiver of submitted quads; usually a renderer's batch.
pub trait RenderSink {
    /// Accept one primitive.
    fn submit_quad(&mut self, quad: Quad);
}

impl RenderSink for Vec<Quad> {
    fn submit_quad(&mut self, quad: Quad) {
        self.push(quad);
    }
}

/// Backgrounds this transparent are not submitted.
const MIN_VISIBLE_ALPHA: f32 = 0.001;

/// Caret width relative to the text scale.
const CARET_WIDTH: f64 = 0.05;

struct Painter<'a> {
    ui: &'a UserInterface,
    assets: &'a dyn AssetProvider,
    sink: &'a mut dyn RenderSink,
    missing_textures: usize,
}

impl<'a> Painter<'a> {
    fn config(&self) -> &'a UiConfig {
        &self.ui.config
    }

    fn font(&self) -> Option<&'a FontRef> {
        self.ui.font.as_ref()
    }

    fn fill(&mut self, rect: Rect, depth: f64, color: Color) {
        if color.a > MIN_VISIBLE_ALPHA {
            self.sink.submit_quad(Quad::from_rect(rect, depth, color, None));
        }
    }

    fn image(&mut self, image: &ImageData, rect: Rect, depth: f64) {
        let Some(handle) = image.texture else {
            return;
        };
        let Some(texture) = self.assets.texture(handle) else {
            self.missing_textures += 1;
            return;
        };
        let rect = match self.assets.texture_size(handle) {
            Some(size) if image.fixed_aspect_ratio && size.height > 0.0 => {
                letterbox(rect, size.width / size.height)
            }
            _ => rect,
        };
        self.sink
            .submit_quad(Quad::from_rect(rect, depth, Color::WHITE, Some(texture)));
    }

    fn glyphs(
        &mut self,
        chars: impl Iterator<Item = char>,
        origin: Point,
        scale: f64,
        depth: f64,
        color: Color,
    ) {
        let Some(font) = self.font() else {
            return;
        };
        let metrics = &*font.metrics;
        let atlas = font.atlas;
        let mut pen = origin.x;
        for glyph in chars.filter_map(|c| run_glyph(metrics, c)) {
            let pb = glyph.plane_bounds;
            if pb.area() > 0.0 {
                let rect = Rect::new(
                    pen + pb.x0 * scale,
                    origin.y + pb.y0 * scale,
                    pen + pb.x1 * scale,
                    origin.y + pb.y1 * scale,
                );
                self.sink
                    .submit_quad(Quad::from_rect(rect, depth, color, atlas));
            }
            pen += glyph.advance * scale;
        }
    }

    /// Draw a single-line run; returns its pen origin and scale.
    fn single_line(
        &mut self,
        text: &SingleLineText,
        rect: Rect,
        depth: f64,
    ) -> Option<(Point, f64)> {
        let measured = text.measured()?;
        let scale = self.config().text_scale(self.ui.viewport, text.text_size);
        let origin = single_line_origin(rect, measured, scale, text.alignment);
        self.glyphs(text.text().chars(), origin, scale, depth, text.color);
        Some((origin, scale))
    }

    fn multi_line(&mut self, text: &MultiLineText, rect: Rect, depth: f64) {
        let Some(lines) = text.lines() else {
            return;
        };
        let scale = self.config().text_scale(self.ui.viewport, text.text_size);
        let origins = line_origins(rect, lines, scale, text.alignment);
        for (line, origin) in lines.lines().iter().zip(origins) {
            let chars = text.text().chars().skip(line.start).take(line.end - line.start);
            self.glyphs(chars, origin, scale, depth, text.color);
        }
    }

    fn caret(&mut self, text: &SingleLineText, origin: Point, scale: f64, depth: f64) {
        let Some(font) = self.font() else {
            return;
        };
        let metrics: &dyn FontMetrics = &*font.metrics;
        let ascender = metrics.ascender();
        let mut at = origin;
        let measured = text.measured().unwrap_or(Size::ZERO);
        if text.text().is_empty() || measured.height < 0.001 {
            at.x += measured.width * scale;
        } else {
            at.x += offset_from_index(metrics, text.text(), text.cursor(), scale);
            at.y += scale * 0.5 * ascender;
        }
        let size = Size::new(scale * CARET_WIDTH, ascender * scale);
        self.fill(Rect::from_center_size(at, size), depth, Color::WHITE);
    }

    fn selection_color(&self, state: WidgetState, background: Color) -> Color {
        let config = self.config();
        if state.contains(WidgetState::EDITING) {
            config.editing_color
        } else if state.contains(WidgetState::HOVERED) {
            config.hovered_color
        } else if state.contains(WidgetState::SELECTED) {
            config.select_color
        } else {
            background
        }
    }

    fn slider(&mut self, slider: &SliderWidget, state: WidgetState, rect: Rect, depth: f64) {
        self.fill(SliderWidget::line_rect(rect), depth, slider.line_color);
        let color = if state.contains(WidgetState::SELECTED) {
            self.config().select_color
        } else {
            slider.knob_color
        };
        let knob = slider.knob_rect(rect, self.config().slider_knob);
        self.fill(knob, depth + DEPTH_STEP, color);
    }

    fn drop_down(&mut self, drop: &DropDownWidget, state: WidgetState, rect: Rect, depth: f64) {
        if let Some(current) = drop.current_option() {
            self.single_line(current, rect, depth + DEPTH_STEP);
        }
        if !drop.open {
            return;
        }
        let mouse = self.ui.mouse;
        for (slot, index) in drop.listed_options().enumerate() {
            let option_depth = DropDownWidget::option_depth(depth, slot);
            let option_rect = DropDownWidget::option_rect(rect, slot);
            let hovered = state.contains(WidgetState::HOVERED) && option_rect.contains(mouse);
            let color = if hovered {
                self.config().hovered_color
            } else {
                drop.option_background
            };
            self.fill(option_rect, option_depth, color);
            if let Some(option) = drop.options.get(index) {
                self.single_line(option, option_rect, option_depth + DEPTH_STEP);
            }
        }
    }

    fn widget(&mut self, widget: &Widget, bounds: &Bounds) {
        let rect = bounds.rect();
        let depth = bounds.depth;
        let text_depth = depth + DEPTH_STEP;
        let state = self.ui.state.widget_state(widget.id);
        let highlighted = widget
            .selection()
            .filter(|_| !matches!(widget.kind, WidgetKind::Slider(_)));
        if let Some(selection) = highlighted {
            let color = self.selection_color(state, selection.background);
            self.fill(rect, depth, color);
        }
        match &widget.kind {
            WidgetKind::Text(text) => self.multi_line(text, rect, text_depth),
            WidgetKind::Button(button) => {
                self.single_line(&button.text, rect, text_depth);
            }
            WidgetKind::Image(image) => self.image(image, rect, depth),
            WidgetKind::ImageButton(button) => self.image(&button.image, rect, text_depth),
            WidgetKind::Checkbox(checkbox) => {
                let image = if checkbox.checked {
                    &checkbox.checked_image
                } else {
                    &checkbox.unchecked_image
                };
                self.image(image, rect, text_depth);
            }
            WidgetKind::InputText(input) => {
                let drawn = self.single_line(&input.text, rect, text_depth);
                let caret = state.contains(WidgetState::EDITING) && self.ui.caret.is_visible();
                if let Some((origin, scale)) = drawn.filter(|_| caret) {
                    self.caret(&input.text, origin, scale, text_depth + DEPTH_STEP);
                }
            }
            WidgetKind::Slider(slider) => self.slider(slider, state, rect, depth),
            WidgetKind::DropDown(drop) => self.drop_down(drop, state, rect, depth),
            WidgetKind::Container(_)
            | WidgetKind::HorizontalContainer(_)
            | WidgetKind::VerticalContainer(_) => {
                if let Some(color) = widget.container_background() {
                    self.fill(rect, depth, color);
                }
            }
        }
    }
}

/// The largest rectangle of aspect ratio `aspect` centered inside `rect`.
fn letterbox(rect: Rect, aspect: f64) -> Rect {
    let size = if rect.height() * aspect <= rect.width() {
        Size::new(rect.height() * aspect, rect.height())
    } else {
        Size::new(rect.width(), rect.width() / aspect)
    };
    Rect::from_center_size(rect.center(), size)
}

/// Submit the quads of every displayed window, in window order.
pub(crate) fn render_ui(
    ui: &UserInterface,
    assets: &dyn AssetProvider,
    sink: &mut dyn RenderSink,
) {
    let mut painter = Painter {
        ui,
        assets,
        sink,
        missing_textures: 0,
    };
    for window in ui.tree.windows().iter().filter(|w| w.is_displayed()) {
        let bounds = window.bounds(ui.viewport);
        painter.fill(bounds.rect(), bounds.depth, window.background);
        visit_window(window, ui.viewport, &mut |widget, bounds| {
            painter.widget(widget, bounds);
        });
    }
    if painter.missing_textures > 0 {
        tracing::warn!(
            count = painter.missing_textures,
            "skipped primitives whose texture is missing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetHandle, NoAssets};
    use crate::window::Window;
    use tessera_geometry::Length;
    use tessera_text::GlyphTable;

    fn font() -> FontRef {
        FontRef::new(
            GlyphTable::monospace("abc".chars(), 10.0, 12.0, 16.0),
            Some(TextureRef(1)),
        )
    }

    #[test]
    fn quad_rect_round_trips() {
        let rect = Rect::new(10.0, 20.0, 30.0, 60.0);
        let quad = Quad::from_rect(rect, 0.5, Color::WHITE, None);
        let back = quad.rect();
        assert!((back.x0 - rect.x0).abs() < 1e-9 && (back.y1 - rect.y1).abs() < 1e-9);
    }

    #[test]
    fn hidden_windows_draw_nothing() {
        let mut ui = UserInterface::new()
            .with_window(Window::new("shown").with_widget(Widget::button("abc")))
            .with_window(Window::new("hidden").with_widget(Widget::button("abc")));
        ui.activate(Size::new(100.0, 100.0), &NoAssets, Some(&font()));
        let mut quads = Vec::new();
        ui.render(&NoAssets, &mut quads);
        // Window, button background, three glyphs.
        assert_eq!(quads.len(), 5);
        assert_eq!(quads.iter().filter(|q| q.texture == Some(TextureRef(1))).count(), 3);
        let button_depth = quads[1].depth;
        assert!(quads[2..].iter().all(|q| q.depth > button_depth));
    }

    #[test]
    fn selected_widget_uses_select_color() {
        let mut ui = UserInterface::new()
            .with_window(Window::new("w").with_widget(Widget::button("").with_tag("b")));
        ui.activate(Size::new(100.0, 100.0), &NoAssets, Some(&font()));
        let b = ui.tree().find_by_tag("w", "b").unwrap();
        ui.set_selected(b);
        let mut quads = Vec::new();
        ui.render(&NoAssets, &mut quads);
        assert_eq!(quads[1].color, ui.config.select_color);
    }

    #[test]
    fn missing_textures_are_skipped() {
        let mut ui = UserInterface::new().with_window(
            Window::new("w")
                .with_widget(Widget::image(AssetHandle(5)))
                .with_widget(Widget::slider(0.0, 1.0, 0.5)),
        );
        ui.activate(Size::new(100.0, 100.0), &NoAssets, None);
        let mut quads = Vec::new();
        ui.render(&NoAssets, &mut quads);
        // Window, slider line and knob; the image is skipped.
        assert_eq!(quads.len(), 3);
        assert!(quads[2].depth > quads[1].depth, "knob above line");
    }

    #[test]
    fn hovered_option_uses_hovered_color() {
        let red = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let config = UiConfig::default().with_colors(Color::WHITE, red, Color::gray(0.1));
        let mut ui = UserInterface::new().with_config(config).with_window(
            Window::new("w").with_widget(
                Widget::drop_down(["a", "b", "c"])
                    .with_tag("d")
                    .with_size(Length::Pixels(40.0), Length::Pixels(10.0))
                    .with_position(Length::Pixels(0.0), Length::Pixels(80.0)),
            ),
        );
        ui.activate(Size::new(100.0, 100.0), &NoAssets, Some(&font()));
        let d = ui.tree().find_by_tag("w", "d").unwrap();
        ui.set_selected(d);
        assert!(ui.on_mouse_pressed(Point::new(20.0, 85.0)));
        // Listed: "b" at y 70..80, "c" at y 60..70.
        ui.update(0.0, Point::new(20.0, 75.0));
        assert_eq!(ui.interaction_state().hovered, Some(d));

        let mut quads = Vec::new();
        ui.render(&NoAssets, &mut quads);
        let fill_at = |rect: Rect| {
            quads
                .iter()
                .find(|q| q.texture.is_none() && (q.rect().y0 - rect.y0).abs() < 1e-9)
                .map(|q| q.color)
        };
        let WidgetKind::DropDown(drop) = ui.widget(d).unwrap().kind() else {
            unreachable!()
        };
        let bounds = Rect::new(0.0, 80.0, 40.0, 90.0);
        assert_eq!(fill_at(DropDownWidget::option_rect(bounds, 0)), Some(red));
        assert_eq!(
            fill_at(DropDownWidget::option_rect(bounds, 1)),
            Some(drop.option_background)
        );
    }

    #[test]
    fn letterbox_keeps_aspect() {
        let fitted = letterbox(Rect::new(0.0, 0.0, 100.0, 50.0), 1.0);
        assert_eq!(fitted, Rect::new(25.0, 0.0, 75.0, 50.0));
    }
}
