// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windows, their widget trees, and id-based addressing.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use tessera_geometry::{Bounds, resolve_bounds};

use crate::error::UiError;
use crate::id::{IdAllocator, NodeId};
use crate::path::{IdIndex, NodePath};
use crate::walk::visit_window;
use crate::widget::Widget;
use crate::window::Window;

/// A resolved node.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    /// A window.
    Window(&'a Window),
    /// A widget.
    Widget(&'a Widget),
}

impl NodeRef<'_> {
    /// Id of the node.
    pub fn id(&self) -> NodeId {
        match self {
            Self::Window(w) => w.id,
            Self::Widget(w) => w.id,
        }
    }
}

/// Where a node sits on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The rectangle the node resolved against: the viewport for windows, the
    /// window or container slot for widgets.
    pub parent: Bounds,
    /// The node's own bounds.
    pub bounds: Bounds,
}

/// All windows of a user interface plus the id index over them.
///
/// Every structural mutation rebuilds the index before returning, so paths
/// handed out by [`WidgetTree::path_of`] are always current.
#[derive(Clone, Debug, Default)]
pub struct WidgetTree {
    pub(crate) windows: Vec<Window>,
    index: IdIndex,
    ids: IdAllocator,
}

fn assign_fresh(ids: &mut IdAllocator, widget: &mut Widget) {
    widget.id = ids.allocate();
    if let Some(children) = widget.children_mut() {
        for child in children {
            assign_fresh(ids, child);
        }
    }
}

fn assign_missing(ids: &mut IdAllocator, widget: &mut Widget) {
    if !widget.id.is_assigned() {
        widget.id = ids.allocate();
    }
    if let Some(children) = widget.children_mut() {
        for child in children {
            assign_missing(ids, child);
        }
    }
}

impl WidgetTree {
    /// Windows in order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Number of live nodes, windows included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether there are no windows.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Every live id, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.ids()
    }

    /// Path of `id`.
    pub fn path_of(&self, id: NodeId) -> Option<&NodePath> {
        self.index.get(id)
    }

    /// Walk `path` from the root.
    pub fn resolve_path(&self, path: &[usize]) -> Option<NodeRef<'_>> {
        let (&wi, rest) = path.split_first()?;
        let window = self.windows.get(wi)?;
        let Some((&first, rest)) = rest.split_first() else {
            return Some(NodeRef::Window(window));
        };
        let mut widget = window.widgets.get(first)?;
        for &i in rest {
            widget = widget.children()?.get(i)?;
        }
        Some(NodeRef::Widget(widget))
    }

    fn widget_at_mut(&mut self, path: &[usize]) -> Option<&mut Widget> {
        let (&wi, rest) = path.split_first()?;
        let (&first, rest) = rest.split_first()?;
        let mut widget = self.windows.get_mut(wi)?.widgets.get_mut(first)?;
        for &i in rest {
            widget = widget.children_mut()?.get_mut(i)?;
        }
        Some(widget)
    }

    fn siblings_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Widget>> {
        match parent {
            [wi] => Some(&mut self.windows.get_mut(*wi)?.widgets),
            _ => self.widget_at_mut(parent)?.children_mut(),
        }
    }

    /// Look up `id`.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        let path = self.index.get(id)?;
        let node = self.resolve_path(path.as_slice());
        debug_assert!(
            node.is_some_and(|n| n.id() == id),
            "id index is out of sync with the tree at {path:?}"
        );
        node
    }

    /// The widget with `id`.
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        match self.node(id)? {
            NodeRef::Widget(w) => Some(w),
            NodeRef::Window(_) => None,
        }
    }

    /// The window with `id`.
    pub fn window(&self, id: NodeId) -> Option<&Window> {
        match self.node(id)? {
            NodeRef::Window(w) => Some(w),
            NodeRef::Widget(_) => None,
        }
    }

    pub(crate) fn widget_mut(&mut self, id: NodeId) -> Option<&mut Widget> {
        let path = self.index.get(id)?.clone();
        self.widget_at_mut(path.as_slice())
    }

    pub(crate) fn window_mut(&mut self, id: NodeId) -> Option<&mut Window> {
        let path = self.index.get(id)?;
        if !path.is_window() {
            return None;
        }
        let wi = path.window_index();
        self.windows.get_mut(wi)
    }

    /// First widget tagged `widget_tag` in the first window tagged `window_tag`.
    pub fn find_by_tag(&self, window_tag: &str, widget_tag: &str) -> Option<NodeId> {
        let window = self.windows.iter().find(|w| w.tag == window_tag)?;
        let mut found = None;
        visit_window(window, Size::ZERO, &mut |widget: &Widget, _: &Bounds| {
            if found.is_none() && widget.tag == widget_tag {
                found = Some(widget.id);
            }
        });
        found
    }

    /// First window tagged `window_tag`.
    pub fn find_window(&self, window_tag: &str) -> Option<NodeId> {
        self.windows
            .iter()
            .find(|w| w.tag == window_tag)
            .map(|w| w.id)
    }

    /// Resolve the bounds of `id` by composing placements from the root.
    pub fn placement(&self, id: NodeId, viewport: Size) -> Option<Placement> {
        let path = self.index.get(id)?;
        let (&wi, mut rest) = path.as_slice().split_first()?;
        let window = self.windows.get(wi)?;
        let mut slot = window.bounds(viewport);
        if rest.is_empty() {
            return Some(Placement {
                parent: Bounds::new(Point::ZERO, viewport, 0.0),
                bounds: slot,
            });
        }
        let mut siblings = window.widgets.as_slice();
        loop {
            let (&i, tail) = rest.split_first()?;
            let widget = siblings.get(i)?;
            let bounds = resolve_bounds(&widget.layout, &slot);
            let Some(&next) = tail.first() else {
                return Some(Placement {
                    parent: slot,
                    bounds,
                });
            };
            slot = widget.container_layout()?.child_slot(&bounds, next);
            siblings = widget.children()?;
            rest = tail;
        }
    }

    /// Rebuild the id index, giving ids to nodes that lack one and dropping
    /// default-focus references that no longer resolve inside their window.
    pub(crate) fn rebuild(&mut self) {
        for window in &mut self.windows {
            if !window.id.is_assigned() {
                window.id = self.ids.allocate();
            }
            for widget in &mut window.widgets {
                assign_missing(&mut self.ids, widget);
            }
        }
        self.index.rebuild(&self.windows);
        for (wi, window) in self.windows.iter_mut().enumerate() {
            let Some(focus) = window.default_focus else {
                continue;
            };
            let still_inside = self
                .index
                .get(focus)
                .is_some_and(|p| !p.is_window() && p.window_index() == wi);
            if !still_inside {
                tracing::debug!(
                    window = ?window.id,
                    widget = ?focus,
                    "dropping stale default focus"
                );
                window.default_focus = None;
            }
        }
    }

    pub(crate) fn add_window(&mut self, mut window: Window) -> NodeId {
        window.id = self.ids.allocate();
        for widget in &mut window.widgets {
            assign_fresh(&mut self.ids, widget);
        }
        let id = window.id;
        self.windows.push(window);
        self.rebuild();
        id
    }

    pub(crate) fn add_widget(
        &mut self,
        parent: NodeId,
        mut widget: Widget,
    ) -> Result<NodeId, UiError> {
        let path = self.index.get(parent).ok_or(UiError::UnknownNode(parent))?.clone();
        if self.siblings_mut(path.as_slice()).is_none() {
            return Err(UiError::NotAContainer(parent));
        }
        assign_fresh(&mut self.ids, &mut widget);
        let id = widget.id;
        self.siblings_mut(path.as_slice())
            .ok_or(UiError::NotAContainer(parent))?
            .push(widget);
        self.rebuild();
        Ok(id)
    }

    pub(crate) fn set_default_focus(
        &mut self,
        window: NodeId,
        widget: Option<NodeId>,
    ) -> Result<(), UiError> {
        let wpath = self.index.get(window).ok_or(UiError::UnknownNode(window))?;
        if !wpath.is_window() {
            return Err(UiError::NotAWindow(window));
        }
        let wi = wpath.window_index();
        if let Some(widget) = widget {
            let path = self.index.get(widget).ok_or(UiError::UnknownNode(widget))?;
            if path.is_window() || path.window_index() != wi {
                return Err(UiError::NotAWidget(widget));
            }
        }
        self.windows[wi].default_focus = widget;
        Ok(())
    }

    pub(crate) fn delete_widget(&mut self, id: NodeId) -> Result<(), UiError> {
        let path = self.index.get(id).ok_or(UiError::UnknownNode(id))?.clone();
        let Some((&last, parent)) = path.as_slice().split_last() else {
            unreachable!("paths are never empty")
        };
        if parent.is_empty() {
            return Err(UiError::NotAWidget(id));
        }
        let siblings = self.siblings_mut(parent).ok_or(UiError::UnknownNode(id))?;
        debug_assert!(last < siblings.len(), "path {path:?} points past its parent");
        if last >= siblings.len() {
            return Err(UiError::UnknownNode(id));
        }
        siblings.remove(last);
        let window = &mut self.windows[path.window_index()];
        if window.default_focus == Some(id) {
            window.default_focus = None;
        }
        self.rebuild();
        Ok(())
    }

    /// Remove every widget matching `predicate`, with one index rebuild.
    ///
    /// Matches are collected in a first pass and removed afterwards, deepest
    /// and rightmost first, so earlier paths stay valid while removing.
    pub(crate) fn remove_where(&mut self, mut predicate: impl FnMut(&Widget) -> bool) -> usize {
        let mut doomed: Vec<NodePath> = Vec::new();
        for window in &self.windows {
            visit_window(window, Size::ZERO, &mut |widget: &Widget, _: &Bounds| {
                if !predicate(widget) {
                    return;
                }
                if let Some(path) = self.index.get(widget.id) {
                    doomed.push(path.clone());
                }
            });
        }
        doomed.sort_unstable_by(|a, b| b.as_slice().cmp(a.as_slice()));
        for path in &doomed {
            let Some((&last, parent)) = path.as_slice().split_last() else {
                continue;
            };
            if let Some(siblings) = self.siblings_mut(parent).filter(|s| last < s.len()) {
                siblings.remove(last);
            }
        }
        if !doomed.is_empty() {
            self.rebuild();
        }
        doomed.len()
    }

    pub(crate) fn delete_window(&mut self, id: NodeId) -> Result<(), UiError> {
        let path = self.index.get(id).ok_or(UiError::UnknownNode(id))?;
        if !path.is_window() {
            return Err(UiError::NotAWindow(id));
        }
        let wi = path.window_index();
        self.windows.remove(wi);
        self.rebuild();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_geometry::Length;

    fn tree() -> (WidgetTree, NodeId) {
        let mut tree = WidgetTree::default();
        let window = Window::new("main")
            .with_widget(Widget::button("a").with_tag("a"))
            .with_widget(
                Widget::vertical_container(0.5, 0.0)
                    .with_tag("column")
                    .with_child(Widget::button("b").with_tag("b"))
                    .with_child(
                        Widget::container()
                            .with_tag("inner")
                            .with_child(Widget::input_text("c").with_tag("c")),
                    ),
            );
        let id = tree.add_window(window);
        (tree, id)
    }

    #[test]
    fn paths_follow_child_indices() {
        let (tree, window) = tree();
        let c = tree.find_by_tag("main", "c").unwrap();
        assert_eq!(tree.path_of(c).unwrap().as_slice(), &[0, 1, 1, 0]);
        assert_eq!(tree.path_of(window).unwrap().as_slice(), &[0]);
        assert_eq!(tree.len(), 6);
        for id in tree.ids() {
            let path = tree.path_of(id).unwrap();
            assert_eq!(tree.resolve_path(path.as_slice()).unwrap().id(), id);
        }
    }

    #[test]
    fn resolving_bad_paths_fails() {
        let (tree, _) = tree();
        assert!(tree.resolve_path(&[]).is_none());
        assert!(tree.resolve_path(&[1]).is_none());
        assert!(tree.resolve_path(&[0, 0, 0]).is_none(), "buttons have no children");
        assert!(tree.resolve_path(&[0, 7]).is_none());
    }

    #[test]
    fn add_widget_into_container_and_window() {
        let (mut tree, window) = tree();
        let inner = tree.find_by_tag("main", "inner").unwrap();
        let d = tree.add_widget(inner, Widget::checkbox(false)).unwrap();
        assert_eq!(tree.path_of(d).unwrap().as_slice(), &[0, 1, 1, 1]);
        let e = tree.add_widget(window, Widget::slider(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(tree.path_of(e).unwrap().as_slice(), &[0, 2]);
        let a = tree.find_by_tag("main", "a").unwrap();
        assert_eq!(
            tree.add_widget(a, Widget::button("x")),
            Err(UiError::NotAContainer(a))
        );
    }

    #[test]
    fn added_subtrees_get_fresh_ids() {
        let (mut tree, window) = tree();
        let before = tree.len();
        let column = Widget::vertical_container(0.2, 0.05)
            .with_child(Widget::button("x").with_tag("x"))
            .with_child(Widget::button("y").with_tag("y"));
        let id = tree.add_widget(window, column).unwrap();
        assert_eq!(tree.len(), before + 3);
        let x = tree.find_by_tag("main", "x").unwrap();
        let y = tree.find_by_tag("main", "y").unwrap();
        assert!(x != id && y != id && x != y);
        assert_eq!(tree.path_of(y).unwrap().as_slice(), &[0, 2, 1]);
    }

    #[test]
    fn deleting_a_container_removes_descendants() {
        let (mut tree, _) = tree();
        let column = tree.find_by_tag("main", "column").unwrap();
        let c = tree.find_by_tag("main", "c").unwrap();
        tree.delete_widget(column).unwrap();
        assert!(tree.node(c).is_none());
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.delete_widget(column), Err(UiError::UnknownNode(column)));
    }

    #[test]
    fn deleting_default_focus_clears_it() {
        let (mut tree, window) = tree();
        let b = tree.find_by_tag("main", "b").unwrap();
        tree.set_default_focus(window, Some(b)).unwrap();
        tree.delete_widget(b).unwrap();
        assert_eq!(tree.window(window).unwrap().default_focus(), None);
    }

    #[test]
    fn deleting_ancestor_of_default_focus_clears_it() {
        let (mut tree, window) = tree();
        let c = tree.find_by_tag("main", "c").unwrap();
        let inner = tree.find_by_tag("main", "inner").unwrap();
        tree.set_default_focus(window, Some(c)).unwrap();
        tree.delete_widget(inner).unwrap();
        assert_eq!(tree.window(window).unwrap().default_focus(), None);
    }

    #[test]
    fn deleting_a_window_drops_all_its_ids() {
        let (mut tree, window) = tree();
        let second = tree.add_window(Window::new("second").with_widget(Widget::button("z")));
        tree.delete_window(window).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.path_of(second).unwrap().as_slice(), &[0]);
        assert_eq!(tree.delete_window(second), Ok(()));
        assert!(tree.is_empty());
    }

    #[test]
    fn placement_composes_container_slots() {
        let mut tree = WidgetTree::default();
        let window = tree.add_window(
            Window::new("w").with_placement(Point::new(0.5, 0.0), Size::new(0.5, 1.0)),
        );
        let column = tree
            .add_widget(
                window,
                Widget::vertical_container(0.5, 0.0)
                    .with_size(Length::Percent(1.0), Length::Percent(1.0)),
            )
            .unwrap();
        tree.add_widget(column, Widget::button("top")).unwrap();
        let bottom = tree
            .add_widget(
                column,
                Widget::button("bottom").with_size(Length::Percent(1.0), Length::Percent(1.0)),
            )
            .unwrap();
        let viewport = Size::new(400.0, 200.0);
        let placement = tree.placement(bottom, viewport).unwrap();
        assert_eq!(placement.parent.rect(), kurbo::Rect::new(200.0, 0.0, 400.0, 100.0));
        assert_eq!(placement.bounds.rect(), placement.parent.rect());
        let window_placement = tree.placement(window, viewport).unwrap();
        assert_eq!(window_placement.parent.size, viewport);
    }

    #[test]
    fn remove_where_collects_then_removes() {
        let (mut tree, window) = tree();
        let b = tree.find_by_tag("main", "b").unwrap();
        tree.set_default_focus(window, Some(b)).unwrap();
        let removed = tree.remove_where(|w| w.tag == "b" || w.tag == "inner" || w.tag == "c");
        assert_eq!(removed, 3);
        assert_eq!(tree.len(), 3);
        let column = tree.find_by_tag("main", "column").unwrap();
        assert_eq!(tree.widget(column).unwrap().children().map(<[Widget]>::len), Some(0));
        assert_eq!(tree.window(window).unwrap().default_focus(), None);
        assert_eq!(tree.remove_where(|_| false), 0);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (mut tree, window) = tree();
        let a = tree.find_by_tag("main", "a").unwrap();
        tree.delete_widget(a).unwrap();
        let fresh = tree.add_widget(window, Widget::button("again")).unwrap();
        assert_ne!(fresh, a);
        assert!(fresh > a);
    }
}
