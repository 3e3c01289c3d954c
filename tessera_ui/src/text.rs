// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping widget text measurements current.

use kurbo::Size;
use tessera_geometry::Bounds;
use tessera_text::{FontGeneration, FontMetrics};

use crate::config::UiConfig;
use crate::tree::WidgetTree;
use crate::walk::visit_window_mut;
use crate::widget::{Widget, WidgetKind};

/// Remeasure every run whose cache no longer matches the font, wrap width or scale.
pub(crate) fn revalidate_text(
    tree: &mut WidgetTree,
    viewport: Size,
    font: &dyn FontMetrics,
    generation: FontGeneration,
    config: &UiConfig,
) {
    let mut measured = 0_usize;
    for window in &mut tree.windows {
        visit_window_mut(window, viewport, &mut |widget: &mut Widget, bounds: &Bounds| {
            if let WidgetKind::Text(text) = &mut widget.kind {
                let scale = config.text_scale(viewport, text.text_size);
                text.revalidate(font, generation, scale, bounds.size.width);
                measured += 1;
            }
            for run in widget.single_line_runs_mut() {
                run.revalidate(font, generation);
                measured += 1;
            }
        });
    }
    tracing::trace!(runs = measured, generation = generation.0, "revalidated text");
}

/// Forget every measurement, for example when the font goes away.
pub(crate) fn drop_text_caches(tree: &mut WidgetTree) {
    fn walk(widget: &mut Widget) {
        widget.invalidate_text();
        if let Some(children) = widget.children_mut() {
            children.iter_mut().for_each(walk);
        }
    }
    for window in &mut tree.windows {
        window.widgets.iter_mut().for_each(walk);
    }
}
