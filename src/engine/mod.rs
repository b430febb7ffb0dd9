// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The chart-editing engine: canonical state, commit policy, undo/redo.
//!
//! Every mutation runs to completion before the next begins; callers that
//! share an engine across threads wrap it in a mutex, which is exactly how the
//! TUI and the MCP server share one instance.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::history::{EditPhase, History};
use crate::layout::{PlacementStrategy, RandomPlacement};
use crate::model::{
    Chart, DepartmentBody, Edge, EdgeId, EdgeStyle, Node, NodeBody, NodeId, NodeKind, Person,
    Position,
};
use crate::ops::{self, EdgeChange, NodeChange, SelectionEffect};
use crate::store::{SnapshotFile, StoreError};

/// Placeholder label for a department created from the canvas.
pub const NEW_DEPARTMENT_LABEL: &str = "新規部署";
/// Color key applied to freshly created departments.
pub const DEFAULT_DEPARTMENT_COLOR: &str = "gray";

#[derive(Debug)]
pub enum EngineError {
    /// A connect request named an empty source or target id.
    EmptyEndpoint { endpoint: &'static str },
    /// The in-memory mutation applied, but the snapshot write failed.
    Store(StoreError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEndpoint { endpoint } => {
                write!(f, "connect rejected: {endpoint} node id is empty")
            }
            Self::Store(source) => write!(f, "snapshot write failed: {source}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyEndpoint { .. } => None,
            Self::Store(source) => Some(source),
        }
    }
}

/// Single source of truth for the live chart.
///
/// Owns the canonical state, the selection (UI-only, never part of history),
/// the undo/redo stack, and the optional snapshot store written on every
/// commit.
pub struct ChartEngine {
    chart: Chart,
    selected_node_id: Option<NodeId>,
    panel_open: bool,
    phase: EditPhase,
    history: History,
    snapshot_file: Option<SnapshotFile>,
    placement: Box<dyn PlacementStrategy + Send>,
}

impl ChartEngine {
    /// Builds an engine over an already loaded (or seeded) chart. The history
    /// starts with that chart as its only entry, so loading never becomes an
    /// undoable action.
    pub fn new(chart: Chart) -> Self {
        Self {
            history: History::new(chart.clone()),
            chart,
            selected_node_id: None,
            panel_open: true,
            phase: EditPhase::Idle,
            snapshot_file: None,
            placement: Box::new(RandomPlacement::default()),
        }
    }

    pub fn with_snapshot_file(mut self, snapshot_file: SnapshotFile) -> Self {
        self.snapshot_file = Some(snapshot_file);
        self
    }

    pub fn with_placement(mut self, placement: Box<dyn PlacementStrategy + Send>) -> Self {
        self.placement = placement;
        self
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        self.chart.nodes()
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        self.chart.edges()
    }

    pub fn selected_node_id(&self) -> Option<&NodeId> {
        self.selected_node_id.as_ref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_node_id
            .as_ref()
            .and_then(|node_id| self.chart.nodes().get(node_id))
    }

    /// UI-only selection change; never committed or persisted.
    pub fn select_node(&mut self, node_id: Option<NodeId>) {
        let node_id = node_id.filter(|node_id| self.chart.nodes().contains_key(node_id));
        self.selected_node_id = node_id;
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Allocates a fresh node id for an externally constructed node (see
    /// [`add_node`](Self::add_node)).
    pub fn next_node_id(&self) -> NodeId {
        allocate_node_id(self.chart.nodes())
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    fn set_phase(&mut self, phase: EditPhase) {
        self.phase = phase;
    }

    /// Applies a renderer batch to the node collection.
    ///
    /// A `Position { dragging: true }` descriptor opens a gesture; while it is
    /// in flight the live chart runs ahead of history. The matching
    /// `dragging: false` descriptor closes the gesture and commits exactly
    /// once, unless the batch is the echo of an undo/redo replay.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> Result<(), EngineError> {
        let drag_start = changes
            .iter()
            .any(|change| matches!(change, NodeChange::Position { dragging: true, .. }));
        let drag_end = changes
            .iter()
            .any(|change| matches!(change, NodeChange::Position { dragging: false, .. }));

        if drag_start && self.phase == EditPhase::Idle {
            self.set_phase(EditPhase::Dragging);
        }

        let applied = ops::apply_node_changes(changes, self.chart.nodes());
        let had_removals = !applied.removed.is_empty();
        *self.chart.nodes_mut() = applied.nodes;

        for node_id in &applied.removed {
            self.chart.remove_edges_touching(node_id);
            if self.selected_node_id.as_ref() == Some(node_id) {
                self.selected_node_id = None;
            }
        }

        match applied.selection {
            SelectionEffect::Unchanged => {}
            SelectionEffect::Select(node_id) => self.selected_node_id = Some(node_id),
            SelectionEffect::Deselect(node_id) => {
                if self.selected_node_id.as_ref() == Some(&node_id) {
                    self.selected_node_id = None;
                }
            }
        }

        if drag_end {
            match self.phase {
                EditPhase::Replaying => {
                    self.set_phase(EditPhase::Idle);
                    Ok(())
                }
                _ => {
                    self.set_phase(EditPhase::Idle);
                    self.commit_and_persist()
                }
            }
        } else if had_removals && !drag_start {
            self.finish_discrete_mutation()
        } else {
            Ok(())
        }
    }

    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> Result<(), EngineError> {
        let next_edges = ops::apply_edge_changes(changes, self.chart.edges());
        *self.chart.edges_mut() = next_edges;
        self.finish_discrete_mutation()
    }

    /// Draws a reporting edge between two existing node ids.
    ///
    /// An empty endpoint is rejected before any state changes; the edge style
    /// follows the endpoint variants.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<EdgeId, EngineError> {
        if source.is_empty() {
            return Err(EngineError::EmptyEndpoint { endpoint: "source" });
        }
        if target.is_empty() {
            return Err(EngineError::EmptyEndpoint { endpoint: "target" });
        }

        let source_id = NodeId::new(source)
            .map_err(|_| EngineError::EmptyEndpoint { endpoint: "source" })?;
        let target_id = NodeId::new(target)
            .map_err(|_| EngineError::EmptyEndpoint { endpoint: "target" })?;

        let style = EdgeStyle::between(
            self.node_kind_or_department(&source_id),
            self.node_kind_or_department(&target_id),
        );

        let edge_id = allocate_edge_id(self.chart.edges());
        self.chart
            .edges_mut()
            .insert(edge_id.clone(), Edge::new(source_id, target_id, style));

        self.finish_discrete_mutation()?;
        Ok(edge_id)
    }

    /// Creates a department node at a position chosen by the placement
    /// strategy, selects it, and opens the side panel.
    pub fn add_department_node(&mut self) -> Result<NodeId, EngineError> {
        let node_id = allocate_node_id(self.chart.nodes());
        let position = self.placement.place_new_node();
        let body = NodeBody::Department(DepartmentBody::new_with(
            NEW_DEPARTMENT_LABEL,
            Some(DEFAULT_DEPARTMENT_COLOR.to_owned()),
        ));

        self.chart.nodes_mut().insert(
            node_id.clone(),
            Node::new_with(node_id.clone(), position, None, body),
        );
        self.selected_node_id = Some(node_id.clone());
        self.panel_open = true;

        self.finish_discrete_mutation()?;
        Ok(node_id)
    }

    /// Replaces the label of the selected department. Returns whether anything
    /// changed; no selection (or a person selection) is a silent no-op.
    pub fn relabel_selected(&mut self, label: impl Into<String>) -> Result<bool, EngineError> {
        let Some(node_id) = self.selected_node_id.clone() else {
            return Ok(false);
        };
        let Some(body) = self
            .chart
            .nodes_mut()
            .get_mut(&node_id)
            .and_then(Node::as_department_mut)
        else {
            return Ok(false);
        };

        body.set_label(label);
        self.finish_discrete_mutation()?;
        Ok(true)
    }

    /// Replaces the color key of the selected department. Same no-op rules as
    /// [`relabel_selected`](Self::relabel_selected).
    pub fn recolor_selected(&mut self, color: impl Into<String>) -> Result<bool, EngineError> {
        let Some(node_id) = self.selected_node_id.clone() else {
            return Ok(false);
        };
        let Some(body) = self
            .chart
            .nodes_mut()
            .get_mut(&node_id)
            .and_then(Node::as_department_mut)
        else {
            return Ok(false);
        };

        body.set_color(Some(color.into()));
        self.finish_discrete_mutation()?;
        Ok(true)
    }

    /// Idempotent registry insertion. A duplicate neither commits nor
    /// persists.
    pub fn register_department_name(
        &mut self,
        name: impl Into<String>,
    ) -> Result<bool, EngineError> {
        if !self.chart.register_department_name(name) {
            return Ok(false);
        }
        self.finish_discrete_mutation()?;
        Ok(true)
    }

    /// Inserts an externally constructed node (the add-node signal).
    ///
    /// When the node carries a `source_node_id`, a connecting edge is
    /// synthesized from that id, dashed if either end is a person. The node is
    /// selected and the panel opened.
    pub fn add_node(&mut self, node: Node) -> Result<(), EngineError> {
        let node_id = node.node_id().clone();

        if let Some(source_node_id) = node.source_node_id().cloned() {
            let style = EdgeStyle::between(
                self.node_kind_or_department(&source_node_id),
                node.kind(),
            );
            let edge_id = allocate_edge_id(self.chart.edges());
            self.chart.edges_mut().insert(
                edge_id,
                Edge::new(source_node_id, node_id.clone(), style),
            );
        }

        self.chart.nodes_mut().insert(node_id.clone(), node);
        self.selected_node_id = Some(node_id);
        self.panel_open = true;

        self.finish_discrete_mutation()
    }

    /// Direct position overwrite (the reposition-node signal). Not
    /// gesture-coalesced: each call is one commit.
    pub fn reposition_node(
        &mut self,
        node_id: &NodeId,
        position: Position,
    ) -> Result<(), EngineError> {
        if let Some(node) = self.chart.nodes_mut().get_mut(node_id) {
            node.set_position(position);
        }
        self.finish_discrete_mutation()
    }

    pub fn register_person(&mut self, person: Person) -> Result<(), EngineError> {
        self.chart.register_person(person);
        self.finish_discrete_mutation()
    }

    /// Steps back one history entry. Returns whether anything happened. The
    /// installed snapshot is not re-recorded: the engine enters the replaying
    /// phase, which the next mutation observes and clears.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.chart = snapshot.clone();
        self.clamp_selection();
        self.set_phase(EditPhase::Replaying);
        true
    }

    /// Steps forward one history entry; mirror of [`undo`](Self::undo).
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.chart = snapshot.clone();
        self.clamp_selection();
        self.set_phase(EditPhase::Replaying);
        true
    }

    fn clamp_selection(&mut self) {
        let stale = self
            .selected_node_id
            .as_ref()
            .is_some_and(|node_id| !self.chart.nodes().contains_key(node_id));
        if stale {
            self.selected_node_id = None;
        }
    }

    fn node_kind_or_department(&self, node_id: &NodeId) -> NodeKind {
        self.chart
            .nodes()
            .get(node_id)
            .map(Node::kind)
            .unwrap_or(NodeKind::Department)
    }

    /// Commit policy for everything that is not a drag release: commit when
    /// idle, stay live-only while a gesture is in flight, and swallow (while
    /// clearing) the replay echo of undo/redo.
    fn finish_discrete_mutation(&mut self) -> Result<(), EngineError> {
        match self.phase {
            EditPhase::Idle => self.commit_and_persist(),
            EditPhase::Dragging => Ok(()),
            EditPhase::Replaying => {
                self.set_phase(EditPhase::Idle);
                Ok(())
            }
        }
    }

    fn commit_and_persist(&mut self) -> Result<(), EngineError> {
        self.history.commit(self.chart.clone());
        match &self.snapshot_file {
            Some(snapshot_file) => snapshot_file
                .save(&self.chart)
                .map_err(EngineError::Store),
            None => Ok(()),
        }
    }
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn allocate_node_id(nodes: &BTreeMap<NodeId, Node>) -> NodeId {
    let base = timestamp_millis();
    let mut suffix = 0_u64;
    loop {
        let raw = if suffix == 0 {
            format!("node-{base}")
        } else {
            format!("node-{base}-{suffix}")
        };
        let candidate = NodeId::new(raw).expect("generated node id is non-empty");
        if !nodes.contains_key(&candidate) {
            return candidate;
        }
        suffix = suffix.saturating_add(1);
    }
}

fn allocate_edge_id(edges: &BTreeMap<EdgeId, Edge>) -> EdgeId {
    let base = timestamp_millis();
    let mut suffix = 0_u64;
    loop {
        let raw = if suffix == 0 {
            format!("e-{base}")
        } else {
            format!("e-{base}-{suffix}")
        };
        let candidate = EdgeId::new(raw).expect("generated edge id is non-empty");
        if !edges.contains_key(&candidate) {
            return candidate;
        }
        suffix = suffix.saturating_add(1);
    }
}
