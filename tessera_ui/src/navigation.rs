// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation link recompute over the widget tree.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Size;
use tessera_geometry::Bounds;
use tessera_nav::{EdgeDistancePolicy, NavEntry, NavSpace, NavigationLinks, compute_links};

use crate::NodeId;
use crate::tree::WidgetTree;
use crate::walk::{visit_window, visit_window_mut};
use crate::widget::Widget;

/// Recompute the links of every selectable widget, one window at a time.
///
/// Candidates are gathered first and links written back afterwards, so the
/// scoring pass never observes half-updated links. Widgets that are not
/// selectable end up with no links.
pub(crate) fn recompute_links(tree: &mut WidgetTree, viewport: Size, policy: &EdgeDistancePolicy) {
    let mut total = 0;
    for window in &mut tree.windows {
        let mut entries: Vec<NavEntry<NodeId>> = Vec::new();
        visit_window(window, viewport, &mut |widget: &Widget, bounds: &Bounds| {
            if widget.is_selectable() {
                entries.push(NavEntry::new(widget.id, bounds.rect()));
            }
        });
        let links: HashMap<NodeId, NavigationLinks<NodeId>> =
            compute_links(policy, &NavSpace::new(&entries))
                .into_iter()
                .collect();
        total += links.len();
        visit_window_mut(window, viewport, &mut |widget: &mut Widget, _: &Bounds| {
            let id = widget.id;
            if let Some(selection) = widget.selection_mut() {
                selection.links = links.get(&id).copied().unwrap_or_default();
            }
        });
    }
    tracing::debug!(windows = tree.windows.len(), linked = total, "recomputed navigation links");
}
