// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera UI: a runtime widget tree for game menus and HUDs.
//!
//! A [`UserInterface`] owns an ordered list of [`Window`]s, each holding a
//! tree of [`Widget`]s. Every node gets a [`NodeId`] when it is inserted; an
//! internal index maps ids to [`NodePath`]s (child-index paths) and is rebuilt
//! after every structural change, so ids stay valid across deletions of their
//! siblings while paths do not.
//!
//! The interface drives:
//!
//! - Layout: widgets resolve against their parent's slot using
//!   [`tessera_geometry`], in a y-up coordinate space measured in pixels.
//! - Text: runs are measured with [`tessera_text`] against the current font
//!   and cached until the font, viewport or wrap width changes.
//! - Navigation: four-way links between selectable widgets of one window are
//!   precomputed with [`tessera_nav`] whenever the tree or viewport changes.
//! - Interaction: selection, hover, text editing, slider drags and
//!   drop-down lists, tracked as ids in an [`InteractionState`].
//! - Rendering: displayed windows become [`Quad`]s submitted to a
//!   [`RenderSink`].
//!
//! Nothing calls back into the host. Interaction methods queue [`UiEvent`]s
//! carrying the [`ScriptHandle`] to run; the host drains them when the call
//! returns and may then freely edit the interface.
//!
//! [`UiContext`] holds the one active interface and a reusable draw list.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use tessera_ui::{
//!     Direction, NoAssets, ScriptHandle, UiCallbacks, UiEvent, UserInterface, Widget, Window,
//! };
//!
//! let menu = Widget::vertical_container(0.3, 0.05)
//!     .with_child(Widget::button("Play").with_tag("play"))
//!     .with_child(Widget::button("Quit").with_tag("quit"));
//! let mut ui = UserInterface::new().with_window(Window::new("main").with_widget(menu));
//! ui.callbacks = UiCallbacks { on_move: Some(ScriptHandle(7)), ..UiCallbacks::default() };
//! ui.activate(Size::new(800.0, 600.0), &NoAssets, None);
//!
//! let play = ui.tree().find_by_tag("main", "play").unwrap();
//! let quit = ui.tree().find_by_tag("main", "quit").unwrap();
//! ui.set_selected(play);
//! ui.drain_events().for_each(drop);
//!
//! assert!(ui.navigate(Direction::Down));
//! assert!(ui.is_widget_selected("main", "quit"));
//! let events: Vec<_> = ui.drain_events().collect();
//! assert_eq!(
//!     events,
//!     [UiEvent::SelectionMoved { from: Some(play), to: quit, handler: ScriptHandle(7) }]
//! );
//! ```

#![no_std]

extern crate alloc;

mod assets;
mod config;
mod context;
mod error;
mod events;
mod id;
mod interaction;
mod navigation;
mod path;
mod render;
mod text;
mod tree;
mod ui;
mod walk;
mod widget;
mod window;

pub use assets::{AssetHandle, AssetProvider, Color, FontRef, NoAssets, ScriptHandle, TextureRef};
pub use config::{UiCallbacks, UiConfig};
pub use context::UiContext;
pub use error::UiError;
pub use events::{CursorIcon, UiEvent};
pub use id::NodeId;
pub use interaction::{
    CaretBlink, InteractionPhase, InteractionState, Key, WidgetState,
};
pub use path::NodePath;
pub use render::{Quad, RenderSink};
pub use tessera_geometry::{
    Bounds, HorizontalAnchor, Length, Position, VerticalAnchor, WidgetLayout,
};
pub use tessera_nav::{Direction, EdgeDistancePolicy};
pub use tessera_text::{FontMetrics, GlyphMetrics, GlyphTable, TextAlignment};
pub use tree::{NodeRef, Placement, WidgetTree};
pub use ui::UserInterface;
pub use widget::{
    ButtonWidget, CheckboxWidget, ContainerData, DEFAULT_TAG, DropDownWidget,
    HorizontalContainerWidget, ImageButtonWidget, ImageData, InputTextWidget, MultiLineText,
    SelectionData, SingleLineText, SliderWidget, VerticalContainerWidget, Widget, WidgetKind,
};
pub use window::Window;
