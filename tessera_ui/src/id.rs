// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers.

use core::fmt;

/// Identifier of a window or widget.
///
/// Windows and widgets share one id space. Ids are handed out by the owning
/// [`UserInterface`](crate::UserInterface) when a node is inserted and are
/// never reused while it is alive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Placeholder carried by nodes that have not been inserted yet.
    pub(crate) const UNASSIGNED: Self = Self(u32::MAX);

    /// The raw value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this id was handed out by a user interface.
    pub const fn is_assigned(self) -> bool {
        self.0 != Self::UNASSIGNED.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assigned() {
            write!(f, "NodeId({})", self.0)
        } else {
            f.write_str("NodeId(unassigned)")
        }
    }
}

/// Monotonic id source.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub(crate) fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        debug_assert!(id.is_assigned(), "node id space exhausted");
        self.next = self.next.saturating_add(1);
        id
    }
}
