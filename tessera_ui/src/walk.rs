// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first walks that resolve bounds along the way.
//!
//! Every consumer of widget geometry (navigation, hit testing, text layout,
//! rendering) goes through these walks so they all see the same transform
//! chain: a widget resolves against its parent's slot, and a container's
//! children resolve against [`ContainerLayout::child_slot`].
//!
//! [`ContainerLayout::child_slot`]: tessera_geometry::ContainerLayout::child_slot

use kurbo::Size;
use tessera_geometry::{Bounds, resolve_bounds};

use crate::widget::Widget;
use crate::window::Window;

/// Visit every widget of `window` in pre-order with its resolved bounds.
pub(crate) fn visit_window<'a, F>(window: &'a Window, viewport: Size, visit: &mut F)
where
    F: FnMut(&'a Widget, &Bounds),
{
    let slot = window.bounds(viewport);
    for widget in &window.widgets {
        visit_widget(widget, &slot, visit);
    }
}

fn visit_widget<'a, F>(widget: &'a Widget, slot: &Bounds, visit: &mut F)
where
    F: FnMut(&'a Widget, &Bounds),
{
    let bounds = resolve_bounds(&widget.layout, slot);
    visit(widget, &bounds);
    if let (Some(layout), Some(children)) = (widget.container_layout(), widget.children()) {
        for (i, child) in children.iter().enumerate() {
            visit_widget(child, &layout.child_slot(&bounds, i), visit);
        }
    }
}

/// Mutable counterpart of [`visit_window`].
pub(crate) fn visit_window_mut<F>(window: &mut Window, viewport: Size, visit: &mut F)
where
    F: FnMut(&mut Widget, &Bounds),
{
    let slot = window.bounds(viewport);
    for widget in &mut window.widgets {
        visit_widget_mut(widget, &slot, visit);
    }
}

fn visit_widget_mut<F>(widget: &mut Widget, slot: &Bounds, visit: &mut F)
where
    F: FnMut(&mut Widget, &Bounds),
{
    let bounds = resolve_bounds(&widget.layout, slot);
    visit(widget, &bounds);
    let Some(layout) = widget.container_layout() else {
        return;
    };
    if let Some(children) = widget.children_mut() {
        for (i, child) in children.iter_mut().enumerate() {
            visit_widget_mut(child, &layout.child_slot(&bounds, i), visit);
        }
    }
}
