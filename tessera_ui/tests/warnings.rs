// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Requests that cannot be honoured are logged and leave the interface as it was.

use kurbo::Size;
use tessera_ui::{AssetHandle, NoAssets, UiError, UserInterface, Widget, Window};
use tracing_test::traced_test;

fn menu() -> UserInterface {
    let window = Window::new("w").with_widget(Widget::button("ok").with_tag("ok"));
    UserInterface::new().with_window(window)
}

#[traced_test]
#[test]
fn unknown_tag_is_reported() {
    let mut ui = menu();
    ui.activate(Size::new(800.0, 600.0), &NoAssets, None);
    let result = ui.set_widget_text("w", "missing", "x");
    assert!(
        matches!(result, Err(UiError::UnknownTag { .. })),
        "missing tag is an error"
    );
    assert!(logs_contain("user interface request ignored"));
    assert!(logs_contain("no widget tagged `missing` in window `w`"));
}

#[traced_test]
#[test]
fn activation_without_font_warns() {
    let mut ui = menu();
    ui.activate(Size::new(800.0, 600.0), &NoAssets, None);
    assert!(ui.is_active());
    assert!(logs_contain("text will not be measured or drawn"));
}

#[traced_test]
#[test]
fn missing_font_asset_falls_back() {
    let mut ui = menu();
    ui.font_handle = Some(AssetHandle(9));
    ui.activate(Size::new(800.0, 600.0), &NoAssets, None);
    assert!(logs_contain("font asset not found"));
    assert_eq!(ui.set_font(AssetHandle(9), &NoAssets), Err(UiError::NoFont));
}

#[traced_test]
#[test]
fn missing_textures_are_logged_once_per_frame() {
    let mut ui = UserInterface::new().with_window(
        Window::new("w")
            .with_widget(Widget::image(AssetHandle(1)))
            .with_widget(Widget::image(AssetHandle(2))),
    );
    ui.activate(Size::new(800.0, 600.0), &NoAssets, None);
    let mut quads = Vec::new();
    ui.render(&NoAssets, &mut quads);
    assert_eq!(quads.len(), 1, "only the window background is drawn");
    assert!(logs_contain("skipped primitives whose texture is missing"));
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|l| l.contains("texture is missing")).count() {
            1 => Ok(()),
            n => Err(format!("expected one warning, got {n}")),
        }
    });
}
