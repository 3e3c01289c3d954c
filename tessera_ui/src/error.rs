// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the mutation API.

use alloc::string::String;

use crate::NodeId;

/// Recoverable failures of the mutation API.
///
/// These report missing references; the user interface is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No live node has this id.
    #[error("no node with id {0:?}")]
    UnknownNode(NodeId),
    /// The node exists but cannot hold children.
    #[error("node {0:?} is not a container")]
    NotAContainer(NodeId),
    /// The operation needs a window.
    #[error("node {0:?} is not a window")]
    NotAWindow(NodeId),
    /// The operation needs a widget.
    #[error("node {0:?} is not a widget")]
    NotAWidget(NodeId),
    /// No widget matches the tags.
    #[error("no widget tagged `{widget}` in window `{window}`")]
    UnknownTag {
        /// Window tag searched.
        window: String,
        /// Widget tag searched.
        widget: String,
    },
    /// No font is loaded.
    #[error("no font is available")]
    NoFont,
}
