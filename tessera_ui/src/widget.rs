// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget node and per-kind payloads.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tessera_geometry::{ContainerLayout, DEPTH_STEP, Length, WidgetLayout};
use tessera_nav::NavigationLinks;
use tessera_text::{
    CacheStamp, FontGeneration, FontMetrics, TextAlignment, TextLayoutCache, TextLines,
    layout_lines, single_line_size,
};

use crate::NodeId;
use crate::assets::{AssetHandle, Color, ScriptHandle};

/// Tag given to nodes that were not named by their author.
pub const DEFAULT_TAG: &str = "None";

/// Behaviour shared by widgets that can hold the selection.
#[derive(Clone, Debug)]
pub struct SelectionData {
    /// Whether the widget currently accepts selection.
    pub selectable: bool,
    /// Background drawn when the widget is neither selected nor hovered.
    pub background: Color,
    /// Callback fired when the widget is pressed.
    pub on_press: Option<ScriptHandle>,
    pub(crate) links: NavigationLinks<NodeId>,
}

impl Default for SelectionData {
    fn default() -> Self {
        Self {
            selectable: true,
            background: Color::splat(0.5),
            on_press: None,
            links: NavigationLinks::default(),
        }
    }
}

impl SelectionData {
    /// Navigation links from the last recompute.
    pub fn links(&self) -> &NavigationLinks<NodeId> {
        &self.links
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}

/// A single-line text run with a caret.
#[derive(Clone, Debug)]
pub struct SingleLineText {
    text: String,
    /// Size relative to the viewport-derived text scale.
    pub text_size: f64,
    /// Glyph color.
    pub color: Color,
    /// Horizontal alignment inside the widget.
    pub alignment: TextAlignment,
    cursor: usize,
    pub(crate) cache: TextLayoutCache<Size>,
}

impl Default for SingleLineText {
    fn default() -> Self {
        Self::new("...")
    }
}

impl SingleLineText {
    /// A run with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_size: 0.3,
            color: Color::WHITE,
            alignment: TextAlignment::Center,
            cursor: 0,
            cache: TextLayoutCache::new(),
        }
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text; the caret is clamped to the new length.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.cursor.min(char_len(&self.text));
        self.cache.invalidate();
    }

    /// Caret position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the caret, clamped to `0..=len`.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(char_len(&self.text));
    }

    /// Caret to the end of the text.
    pub fn cursor_to_end(&mut self) {
        self.cursor = char_len(&self.text);
    }

    /// Measured unscaled size from the last layout pass.
    pub fn measured(&self) -> Option<Size> {
        self.cache.last().copied()
    }

    /// Measure against `font` unless the cached size is still valid.
    pub(crate) fn revalidate(
        &mut self,
        font: &dyn FontMetrics,
        generation: FontGeneration,
    ) -> Size {
        let stamp = CacheStamp {
            font: generation,
            wrap_width: 0.0,
            scale: 1.0,
        };
        *self
            .cache
            .get_or_measure(stamp, || single_line_size(font, &self.text))
    }

    pub(crate) fn insert_at_cursor(&mut self, c: char) {
        let at = byte_offset(&self.text, self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        self.cache.invalidate();
    }

    pub(crate) fn remove_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = byte_offset(&self.text, self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self.cache.invalidate();
        true
    }
}

/// A multi-line text run.
#[derive(Clone, Debug)]
pub struct MultiLineText {
    text: String,
    /// Size relative to the viewport-derived text scale.
    pub text_size: f64,
    /// Glyph color.
    pub color: Color,
    /// Horizontal alignment of each line.
    pub alignment: TextAlignment,
    wrapped: bool,
    pub(crate) cache: TextLayoutCache<TextLines>,
}

impl Default for MultiLineText {
    fn default() -> Self {
        Self::new("New Text Widget")
    }
}

impl MultiLineText {
    /// A run with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_size: 0.3,
            color: Color::WHITE,
            alignment: TextAlignment::Center,
            wrapped: false,
            cache: TextLayoutCache::new(),
        }
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cache.invalidate();
    }

    /// Whether lines wrap at the widget width.
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }

    /// Toggle wrapping at the widget width.
    pub fn set_wrapped(&mut self, wrapped: bool) {
        self.wrapped = wrapped;
        self.cache.invalidate();
    }

    /// Line breaks from the last layout pass.
    pub fn lines(&self) -> Option<&TextLines> {
        self.cache.last()
    }

    /// Break into lines against `font` unless the cached lines are still valid.
    ///
    /// `width` is the resolved widget width; it only matters while wrapping.
    pub(crate) fn revalidate(
        &mut self,
        font: &dyn FontMetrics,
        generation: FontGeneration,
        scale: f64,
        width: f64,
    ) -> &TextLines {
        let wrap_width = if self.wrapped { width } else { 0.0 };
        let stamp = CacheStamp {
            font: generation,
            wrap_width,
            scale,
        };
        self.cache
            .get_or_measure(stamp, || layout_lines(font, &self.text, scale, wrap_width))
    }
}

/// An image reference.
#[derive(Clone, Debug, Default)]
pub struct ImageData {
    /// Texture asset; `None` draws nothing.
    pub texture: Option<AssetHandle>,
    /// Keep the texture's aspect ratio inside the widget.
    pub fixed_aspect_ratio: bool,
}

impl ImageData {
    /// An image drawing `texture`.
    pub const fn new(texture: AssetHandle) -> Self {
        Self {
            texture: Some(texture),
            fixed_aspect_ratio: false,
        }
    }
}

/// Children of a container widget.
#[derive(Clone, Debug)]
pub struct ContainerData {
    pub(crate) children: Vec<Widget>,
    /// Background behind the children.
    pub background: Color,
}

impl Default for ContainerData {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            background: Color::splat(0.5),
        }
    }
}

impl ContainerData {
    /// Children in layout order.
    pub fn children(&self) -> &[Widget] {
        &self.children
    }
}

/// A clickable labelled button.
#[derive(Clone, Debug, Default)]
pub struct ButtonWidget {
    /// Selection behaviour.
    pub selection: SelectionData,
    /// Label.
    pub text: SingleLineText,
}

/// A clickable image.
#[derive(Clone, Debug, Default)]
pub struct ImageButtonWidget {
    /// Selection behaviour.
    pub selection: SelectionData,
    /// Image drawn over the background.
    pub image: ImageData,
}

/// A two-state toggle.
#[derive(Clone, Debug, Default)]
pub struct CheckboxWidget {
    /// Selection behaviour; `on_press` receives the new state.
    pub selection: SelectionData,
    /// Current state.
    pub checked: bool,
    /// Image drawn while checked.
    pub checked_image: ImageData,
    /// Image drawn while unchecked.
    pub unchecked_image: ImageData,
}

/// An editable single-line text field.
#[derive(Clone, Debug, Default)]
pub struct InputTextWidget {
    /// Selection behaviour.
    pub selection: SelectionData,
    /// Edited text and caret.
    pub text: SingleLineText,
    /// Callback fired whenever the caret moves or the text changes.
    pub on_move_cursor: Option<ScriptHandle>,
}

/// A horizontal value slider.
#[derive(Clone, Debug)]
pub struct SliderWidget {
    /// Selection behaviour.
    pub selection: SelectionData,
    /// Value at the left end.
    pub min: f64,
    /// Value at the right end.
    pub max: f64,
    /// Current value.
    pub value: f64,
    /// Color of the knob.
    pub knob_color: Color,
    /// Color of the track line.
    pub line_color: Color,
    /// Callback fired with every drag update.
    pub on_move_slider: Option<ScriptHandle>,
}

impl Default for SliderWidget {
    fn default() -> Self {
        Self {
            selection: SelectionData::default(),
            min: 0.0,
            max: 1.0,
            value: 0.0,
            knob_color: Color::WHITE,
            line_color: Color::WHITE,
            on_move_slider: None,
        }
    }
}

impl SliderWidget {
    /// Position of the value between `min` and `max`, in `0..=1`.
    pub fn normalized(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Set the value from a position in `0..=1` along the track.
    pub fn set_normalized(&mut self, t: f64) {
        let t = t.clamp(0.0, 1.0);
        self.value = self.min + (self.max - self.min) * t;
    }

    /// Knob rectangle for a slider occupying `bounds`; `knob` is the knob
    /// extent as a fraction of the slider's size.
    pub fn knob_rect(&self, bounds: Rect, knob: Size) -> Rect {
        let size = Size::new(knob.width * bounds.width(), knob.height * bounds.height());
        let center = Point::new(
            bounds.x0 + bounds.width() * self.normalized(),
            bounds.center().y,
        );
        Rect::from_center_size(center, size)
    }

    /// Track line drawn through the middle of the slider.
    pub fn line_rect(bounds: Rect) -> Rect {
        Rect::from_center_size(
            bounds.center(),
            Size::new(bounds.width(), bounds.height() * 0.1),
        )
    }
}

/// A list of options with one current choice.
#[derive(Clone, Debug)]
pub struct DropDownWidget {
    /// Selection behaviour.
    pub selection: SelectionData,
    /// Options, each drawn as a single-line run.
    pub options: Vec<SingleLineText>,
    /// Index of the current option.
    pub current: usize,
    /// Whether the other options are shown below the widget.
    pub open: bool,
    /// Background of the listed options.
    pub option_background: Color,
    /// Callback fired with the index of a newly chosen option.
    pub on_select_option: Option<ScriptHandle>,
}

impl Default for DropDownWidget {
    fn default() -> Self {
        Self {
            selection: SelectionData::default(),
            options: Vec::new(),
            current: 0,
            open: false,
            option_background: Color::splat(0.5),
            on_select_option: None,
        }
    }
}

impl DropDownWidget {
    /// The current option, if the list is non-empty.
    pub fn current_option(&self) -> Option<&SingleLineText> {
        self.options.get(self.current)
    }

    /// Option indices in the order they are listed below the widget.
    pub fn listed_options(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.options.len()).filter(|&i| i != self.current)
    }

    /// Rectangle of the `slot`-th listed option below a drop-down at `bounds`.
    pub fn option_rect(bounds: Rect, slot: usize) -> Rect {
        let dy = bounds.height() * (slot + 1) as f64;
        Rect::new(bounds.x0, bounds.y0 - dy, bounds.x1, bounds.y1 - dy)
    }

    /// Depth of the `slot`-th listed option below a drop-down at `depth`.
    pub fn option_depth(depth: f64, slot: usize) -> f64 {
        depth + DEPTH_STEP * (slot + 2) as f64
    }

    /// Listed slot whose option rectangle contains `point`, while open.
    pub fn slot_at(&self, bounds: Rect, point: Point) -> Option<usize> {
        if !self.open {
            return None;
        }
        (0..self.listed_options().count())
            .find(|&slot| Self::option_rect(bounds, slot).contains(point))
    }
}

/// A container laying children out in equal columns.
#[derive(Clone, Debug, Default)]
pub struct HorizontalContainerWidget {
    /// Children.
    pub container: ContainerData,
    /// Fraction of the width per child.
    pub column_width: f64,
    /// Fraction of the width between children.
    pub column_spacing: f64,
}

/// A container laying children out in equal rows, top down.
#[derive(Clone, Debug, Default)]
pub struct VerticalContainerWidget {
    /// Children.
    pub container: ContainerData,
    /// Fraction of the height per child.
    pub row_height: f64,
    /// Fraction of the height between children.
    pub row_spacing: f64,
}

/// The closed set of widget kinds.
#[derive(Clone, Debug)]
pub enum WidgetKind {
    /// Static multi-line text.
    Text(MultiLineText),
    /// Labelled button.
    Button(ButtonWidget),
    /// Static image.
    Image(ImageData),
    /// Clickable image.
    ImageButton(ImageButtonWidget),
    /// Two-state toggle.
    Checkbox(CheckboxWidget),
    /// Editable text field.
    InputText(InputTextWidget),
    /// Value slider.
    Slider(SliderWidget),
    /// Option list.
    DropDown(DropDownWidget),
    /// Free-form container.
    Container(ContainerData),
    /// Column container.
    HorizontalContainer(HorizontalContainerWidget),
    /// Row container.
    VerticalContainer(VerticalContainerWidget),
}

impl WidgetKind {
    /// Short name of the kind, for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Button(_) => "Button",
            Self::Image(_) => "Image",
            Self::ImageButton(_) => "ImageButton",
            Self::Checkbox(_) => "Checkbox",
            Self::InputText(_) => "InputText",
            Self::Slider(_) => "Slider",
            Self::DropDown(_) => "DropDown",
            Self::Container(_) => "Container",
            Self::HorizontalContainer(_) => "HorizontalContainer",
            Self::VerticalContainer(_) => "VerticalContainer",
        }
    }
}

/// A node below a window.
#[derive(Clone, Debug)]
pub struct Widget {
    pub(crate) id: NodeId,
    /// Author-assigned name; not unique across windows.
    pub tag: String,
    /// Stored size and position.
    pub layout: WidgetLayout,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    /// A widget of `kind` with the default tag and layout.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            id: NodeId::UNASSIGNED,
            tag: String::from(DEFAULT_TAG),
            layout: WidgetLayout::default(),
            kind,
        }
    }

    /// Static text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(WidgetKind::Text(MultiLineText::new(text)))
    }

    /// A button labelled `label`.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(WidgetKind::Button(ButtonWidget {
            text: SingleLineText::new(label),
            ..ButtonWidget::default()
        }))
    }

    /// A static image.
    pub fn image(texture: AssetHandle) -> Self {
        Self::new(WidgetKind::Image(ImageData::new(texture)))
    }

    /// A clickable image.
    pub fn image_button(texture: AssetHandle) -> Self {
        Self::new(WidgetKind::ImageButton(ImageButtonWidget {
            image: ImageData::new(texture),
            ..ImageButtonWidget::default()
        }))
    }

    /// A checkbox in state `checked`.
    pub fn checkbox(checked: bool) -> Self {
        Self::new(WidgetKind::Checkbox(CheckboxWidget {
            checked,
            ..CheckboxWidget::default()
        }))
    }

    /// A text field holding `text`.
    pub fn input_text(text: impl Into<String>) -> Self {
        Self::new(WidgetKind::InputText(InputTextWidget {
            text: SingleLineText::new(text),
            ..InputTextWidget::default()
        }))
    }

    /// A slider over `min..=max` at `value`.
    pub fn slider(min: f64, max: f64, value: f64) -> Self {
        Self::new(WidgetKind::Slider(SliderWidget {
            min,
            max,
            value,
            ..SliderWidget::default()
        }))
    }

    /// A drop-down listing `options`, the first one current.
    pub fn drop_down<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(WidgetKind::DropDown(DropDownWidget {
            options: options.into_iter().map(SingleLineText::new).collect(),
            ..DropDownWidget::default()
        }))
    }

    /// An empty free-form container.
    pub fn container() -> Self {
        Self::new(WidgetKind::Container(ContainerData::default()))
    }

    /// An empty column container.
    pub fn horizontal_container(column_width: f64, column_spacing: f64) -> Self {
        Self::new(WidgetKind::HorizontalContainer(HorizontalContainerWidget {
            column_width,
            column_spacing,
            ..HorizontalContainerWidget::default()
        }))
    }

    /// An empty row container.
    pub fn vertical_container(row_height: f64, row_spacing: f64) -> Self {
        Self::new(WidgetKind::VerticalContainer(VerticalContainerWidget {
            row_height,
            row_spacing,
            ..VerticalContainerWidget::default()
        }))
    }

    /// Set the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Replace the stored size.
    #[must_use]
    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.layout = self.layout.with_size(width, height);
        self
    }

    /// Replace the stored offsets.
    #[must_use]
    pub fn with_position(mut self, x: Length, y: Length) -> Self {
        self.layout = self.layout.with_position(x, y);
        self
    }

    /// Append a child. Has no effect on widgets that are not containers.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        if let Some(children) = self.children_mut() {
            children.push(child);
        } else {
            tracing::warn!(kind = self.kind.name(), "child added to a non-container widget");
        }
        self
    }

    /// Set the press callback. Has no effect on widgets that cannot be selected.
    #[must_use]
    pub fn with_on_press(mut self, handler: ScriptHandle) -> Self {
        if let Some(selection) = self.selection_mut() {
            selection.on_press = Some(handler);
        }
        self
    }

    /// Id assigned on insertion.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The kind and its payload.
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Mutable payload.
    ///
    /// Replacing a container's payload changes the tree shape; call
    /// [`UserInterface::rebuild`](crate::UserInterface::rebuild) afterwards.
    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    /// Selection behaviour, for kinds that can be selected.
    pub fn selection(&self) -> Option<&SelectionData> {
        match &self.kind {
            WidgetKind::Button(w) => Some(&w.selection),
            WidgetKind::ImageButton(w) => Some(&w.selection),
            WidgetKind::Checkbox(w) => Some(&w.selection),
            WidgetKind::InputText(w) => Some(&w.selection),
            WidgetKind::Slider(w) => Some(&w.selection),
            WidgetKind::DropDown(w) => Some(&w.selection),
            WidgetKind::Text(_)
            | WidgetKind::Image(_)
            | WidgetKind::Container(_)
            | WidgetKind::HorizontalContainer(_)
            | WidgetKind::VerticalContainer(_) => None,
        }
    }

    /// Mutable selection behaviour.
    pub fn selection_mut(&mut self) -> Option<&mut SelectionData> {
        match &mut self.kind {
            WidgetKind::Button(w) => Some(&mut w.selection),
            WidgetKind::ImageButton(w) => Some(&mut w.selection),
            WidgetKind::Checkbox(w) => Some(&mut w.selection),
            WidgetKind::InputText(w) => Some(&mut w.selection),
            WidgetKind::Slider(w) => Some(&mut w.selection),
            WidgetKind::DropDown(w) => Some(&mut w.selection),
            WidgetKind::Text(_)
            | WidgetKind::Image(_)
            | WidgetKind::Container(_)
            | WidgetKind::HorizontalContainer(_)
            | WidgetKind::VerticalContainer(_) => None,
        }
    }

    /// Whether the widget can hold the selection right now.
    pub fn is_selectable(&self) -> bool {
        self.selection().is_some_and(|s| s.selectable)
    }

    /// Whether this is a text field.
    pub fn is_input_text(&self) -> bool {
        matches!(self.kind, WidgetKind::InputText(_))
    }

    /// The single-line run of buttons and text fields.
    pub fn single_line_text(&self) -> Option<&SingleLineText> {
        match &self.kind {
            WidgetKind::Button(w) => Some(&w.text),
            WidgetKind::InputText(w) => Some(&w.text),
            _ => None,
        }
    }

    /// Mutable single-line run.
    pub fn single_line_text_mut(&mut self) -> Option<&mut SingleLineText> {
        match &mut self.kind {
            WidgetKind::Button(w) => Some(&mut w.text),
            WidgetKind::InputText(w) => Some(&mut w.text),
            _ => None,
        }
    }

    /// Replace the displayed text of a text, button or text field widget.
    ///
    /// Returns `false` for kinds without text.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.kind {
            WidgetKind::Text(t) => t.set_text(text),
            WidgetKind::Button(w) => w.text.set_text(text),
            WidgetKind::InputText(w) => w.text.set_text(text),
            _ => return false,
        }
        true
    }

    /// Set the glyph color of every run the widget draws.
    ///
    /// Returns `false` for kinds without text.
    pub fn set_text_color(&mut self, color: Color) -> bool {
        match &mut self.kind {
            WidgetKind::Text(t) => t.color = color,
            WidgetKind::Button(w) => w.text.color = color,
            WidgetKind::InputText(w) => w.text.color = color,
            WidgetKind::DropDown(w) => w.options.iter_mut().for_each(|o| o.color = color),
            _ => return false,
        }
        true
    }

    /// Set the resting background.
    ///
    /// Returns `false` for kinds that draw no background.
    pub fn set_background(&mut self, color: Color) -> bool {
        if let Some(selection) = self.selection_mut() {
            selection.background = color;
            return true;
        }
        match &mut self.kind {
            WidgetKind::Container(c) => c.background = color,
            WidgetKind::HorizontalContainer(c) => c.container.background = color,
            WidgetKind::VerticalContainer(c) => c.container.background = color,
            _ => return false,
        }
        true
    }

    /// Every single-line run the widget draws.
    pub(crate) fn single_line_runs_mut(&mut self) -> &mut [SingleLineText] {
        match &mut self.kind {
            WidgetKind::Button(w) => core::slice::from_mut(&mut w.text),
            WidgetKind::InputText(w) => core::slice::from_mut(&mut w.text),
            WidgetKind::DropDown(w) => &mut w.options,
            _ => &mut [],
        }
    }

    /// Drop cached text measurements.
    pub(crate) fn invalidate_text(&mut self) {
        if let WidgetKind::Text(t) = &mut self.kind {
            t.cache.invalidate();
        }
        for run in self.single_line_runs_mut() {
            run.cache.invalidate();
        }
    }

    /// Subdivision rule, for containers.
    pub fn container_layout(&self) -> Option<ContainerLayout> {
        match &self.kind {
            WidgetKind::Container(_) => Some(ContainerLayout::Free),
            WidgetKind::HorizontalContainer(c) => Some(ContainerLayout::Horizontal {
                column_width: c.column_width,
                column_spacing: c.column_spacing,
            }),
            WidgetKind::VerticalContainer(c) => Some(ContainerLayout::Vertical {
                row_height: c.row_height,
                row_spacing: c.row_spacing,
            }),
            _ => None,
        }
    }

    fn container_data(&self) -> Option<&ContainerData> {
        match &self.kind {
            WidgetKind::Container(c) => Some(c),
            WidgetKind::HorizontalContainer(c) => Some(&c.container),
            WidgetKind::VerticalContainer(c) => Some(&c.container),
            _ => None,
        }
    }

    /// Children, for containers.
    pub fn children(&self) -> Option<&[Widget]> {
        self.container_data().map(ContainerData::children)
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        match &mut self.kind {
            WidgetKind::Container(c) => Some(&mut c.children),
            WidgetKind::HorizontalContainer(c) => Some(&mut c.container.children),
            WidgetKind::VerticalContainer(c) => Some(&mut c.container.children),
            _ => None,
        }
    }

    /// Container background, for containers.
    pub(crate) fn container_background(&self) -> Option<Color> {
        self.container_data().map(|c| c.background)
    }
}
