// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Change descriptors and the pure folds that apply them.
//!
//! The renderer reports every gesture as an ordered batch of descriptors.
//! Folding a batch never mutates the input collections; callers get fresh
//! maps back, which keeps previously stored snapshots valid forever.

use std::collections::BTreeMap;

use crate::model::{Edge, EdgeId, Node, NodeId, Position};

/// One low-level node mutation reported by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    /// Position overwrite. `dragging` is a pass-through flag the applier
    /// never interprets; the engine uses it to tell "still dragging" from
    /// "drag ended".
    Position {
        node_id: NodeId,
        position: Position,
        dragging: bool,
    },
    Remove {
        node_id: NodeId,
    },
    Select {
        node_id: NodeId,
        selected: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeChange {
    Add { edge_id: EdgeId, edge: Edge },
    Remove { edge_id: EdgeId },
}

/// Selection outcome of a node batch. Selection lives outside the chart, so
/// the fold reports it instead of writing it anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionEffect {
    #[default]
    Unchanged,
    Select(NodeId),
    Deselect(NodeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedNodeChanges {
    pub nodes: BTreeMap<NodeId, Node>,
    pub removed: Vec<NodeId>,
    pub selection: SelectionEffect,
}

/// Folds `changes` into a new node collection.
///
/// Descriptors apply in batch order; a later descriptor for the same id wins.
/// Position and selection descriptors for unknown ids are ignored. The
/// function is deterministic and side-effect-free.
pub fn apply_node_changes(
    changes: &[NodeChange],
    nodes: &BTreeMap<NodeId, Node>,
) -> AppliedNodeChanges {
    let mut next = nodes.clone();
    let mut removed = Vec::new();
    let mut selection = SelectionEffect::Unchanged;

    for change in changes {
        match change {
            NodeChange::Position {
                node_id, position, ..
            } => {
                if let Some(node) = next.get_mut(node_id) {
                    node.set_position(*position);
                }
            }
            NodeChange::Remove { node_id } => {
                if next.remove(node_id).is_some() {
                    removed.push(node_id.clone());
                }
            }
            NodeChange::Select { node_id, selected } => {
                if *selected {
                    if next.contains_key(node_id) {
                        selection = SelectionEffect::Select(node_id.clone());
                    }
                } else {
                    selection = SelectionEffect::Deselect(node_id.clone());
                }
            }
        }
    }

    AppliedNodeChanges {
        nodes: next,
        removed,
        selection,
    }
}

/// Folds `changes` into a new edge collection. Same contract as
/// [`apply_node_changes`].
pub fn apply_edge_changes(
    changes: &[EdgeChange],
    edges: &BTreeMap<EdgeId, Edge>,
) -> BTreeMap<EdgeId, Edge> {
    let mut next = edges.clone();

    for change in changes {
        match change {
            EdgeChange::Add { edge_id, edge } => {
                next.insert(edge_id.clone(), edge.clone());
            }
            EdgeChange::Remove { edge_id } => {
                next.remove(edge_id);
            }
        }
    }

    next
}
