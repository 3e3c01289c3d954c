// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A gamepad-driven options menu, run headless.
//!
//! This example shows how a host:
//! - builds windows and widgets and activates them in a `UiContext`,
//! - feeds directional input, presses, typed characters and mouse drags,
//! - drains `UiEvent`s and reacts to them by editing the interface,
//! - collects the quads of a frame.
//!
//! Run:
//! - `RUST_LOG=tessera_ui=debug cargo run -p tessera_demos --example menu_navigation`

use std::env;

use kurbo::{Point, Size};
use tessera_ui::{
    Direction, FontRef, GlyphTable, Key, Length, NoAssets, ScriptHandle, UiCallbacks, UiContext,
    UiError, UiEvent, UserInterface, Widget, Window,
};
use tracing_subscriber::EnvFilter;

const ON_MOVE: ScriptHandle = ScriptHandle(1);
const ON_APPLY: ScriptHandle = ScriptHandle(2);
const ON_BACK: ScriptHandle = ScriptHandle(3);

fn options_menu() -> UserInterface {
    let rows = Widget::vertical_container(0.18, 0.02)
        .with_size(Length::Percent(0.6), Length::Percent(0.8))
        .with_position(Length::Percent(0.2), Length::Percent(0.1))
        .with_child(Widget::input_text("Player").with_tag("name"))
        .with_child(Widget::slider(0.0, 100.0, 50.0).with_tag("volume"))
        .with_child(Widget::drop_down(["Low", "Medium", "High"]).with_tag("quality"))
        .with_child(Widget::checkbox(true).with_tag("vsync"))
        .with_child(
            Widget::horizontal_container(0.45, 0.1)
                .with_child(Widget::button("apply").with_tag("apply").with_on_press(ON_APPLY))
                .with_child(Widget::button("back").with_tag("back").with_on_press(ON_BACK)),
        );
    let mut ui = UserInterface::new().with_window(Window::new("options").with_widget(rows));
    ui.callbacks = UiCallbacks {
        on_move: Some(ON_MOVE),
        ..UiCallbacks::default()
    };
    ui
}

fn pump(ui: &mut UserInterface) -> Result<(), UiError> {
    let events: Vec<UiEvent> = ui.drain_events().collect();
    for event in events {
        println!("event: {event:?}");
        match event.handler() {
            Some(ON_APPLY) => ui.set_widget_text("options", "apply", "applied")?,
            Some(ON_BACK) => ui.set_window_displayed("options", false)?,
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<(), UiError> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "tessera_ui=debug".to_owned());
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::builder().parse_lossy(directives))
        .init();

    let glyphs = " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ?".chars();
    let font = FontRef::new(GlyphTable::monospace(glyphs, 0.5, 0.7, 1.0), None);
    let mut ctx = UiContext::new().with_default_font(font);
    let viewport = Size::new(1280.0, 720.0);
    ctx.activate(options_menu(), viewport, &NoAssets);
    let Some(ui) = ctx.active_mut() else {
        return Ok(());
    };

    ui.set_selected_by_tag("options", "name")?;
    ui.press();
    ui.on_key_pressed(Key::Backspace);
    for c in "Two".chars() {
        ui.on_key_typed(c);
    }
    ui.on_key_pressed(Key::Enter);
    pump(ui)?;

    ui.navigate(Direction::Down);
    let volume = ui.tree().find_by_tag("options", "volume");
    if let Some(bounds) = volume.and_then(|id| ui.bounds_of(id)) {
        let knob = bounds.center();
        ui.on_mouse_pressed(knob);
        ui.update(1.0 / 60.0, Point::new(knob.x + bounds.size.width * 0.25, knob.y));
        ui.on_mouse_released();
    }
    pump(ui)?;

    for _ in 0..3 {
        ui.navigate(Direction::Down);
    }
    ui.press();
    pump(ui)?;
    println!("phase: {:?}", ui.phase());

    let quads = ctx.render(&NoAssets);
    tracing::info!(quads = quads.len(), "rendered frame");
    Ok(())
}
