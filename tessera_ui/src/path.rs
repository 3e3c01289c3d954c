// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child-index paths and the id index built from them.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::NodeId;
use crate::widget::Widget;
use crate::window::Window;

/// Location of a node: the window index followed by one child index per level.
///
/// `[w]` is a window, `[w, i]` a top-level widget of window `w`, and every
/// further element descends into a container's children.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[usize; 6]>);

impl NodePath {
    pub(crate) fn window(index: usize) -> Self {
        let mut path = SmallVec::new();
        path.push(index);
        Self(path)
    }

    pub(crate) fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// The indices, root first.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Index of the owning window.
    pub fn window_index(&self) -> usize {
        self.0[0]
    }

    /// Whether the path names a window.
    pub fn is_window(&self) -> bool {
        self.0.len() == 1
    }
}

impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Map from every live id to its path.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdIndex {
    paths: HashMap<NodeId, NodePath>,
}

impl IdIndex {
    pub(crate) fn get(&self, id: NodeId) -> Option<&NodePath> {
        self.paths.get(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.paths.keys().copied()
    }

    fn insert(&mut self, id: NodeId, path: NodePath) {
        debug_assert!(id.is_assigned(), "node at {path:?} has no id");
        let duplicate = self.paths.contains_key(&id);
        debug_assert!(!duplicate, "node id {id:?} appears twice (again at {path:?})");
        if !duplicate {
            self.paths.insert(id, path);
        }
    }

    /// Rebuild from scratch, visiting windows and then widgets depth-first.
    pub(crate) fn rebuild(&mut self, windows: &[Window]) {
        self.paths.clear();
        let mut stack: Vec<(&Widget, NodePath)> = Vec::new();
        for (wi, window) in windows.iter().enumerate() {
            let root = NodePath::window(wi);
            for (i, widget) in window.widgets.iter().enumerate().rev() {
                stack.push((widget, root.child(i)));
            }
            self.insert(window.id, root);
            while let Some((widget, path)) = stack.pop() {
                if let Some(children) = widget.children() {
                    for (i, child) in children.iter().enumerate().rev() {
                        stack.push((child, path.child(i)));
                    }
                }
                self.insert(widget.id, path);
            }
        }
        tracing::debug!(nodes = self.paths.len(), "rebuilt id index");
    }
}
