// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use triton::model::{Chart, Edge, EdgeId, EdgeStyle, Node, NodeId, Position};
use triton::ops::NodeChange;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("triton_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn bench_node_id(index: usize) -> NodeId {
    NodeId::new(format!("bench-node-{index:05}")).expect("bench node id")
}

/// A chart laid out as a wide tree: `count` departments in a grid, each
/// non-root node edged from a hub node one column to the left.
pub fn chart_with_departments(count: usize) -> Chart {
    const COLUMNS: usize = 10;

    let mut chart = Chart::new();
    for index in 0..count {
        let node_id = bench_node_id(index);
        let x = (index % COLUMNS) as f64 * 200.0;
        let y = (index / COLUMNS) as f64 * 100.0;
        chart.nodes_mut().insert(
            node_id.clone(),
            Node::department(node_id, Position::new(x, y), format!("部署{index:05}")),
        );
    }

    for index in 1..count {
        let hub = bench_node_id(index / COLUMNS * COLUMNS);
        let target = bench_node_id(index);
        if hub == target {
            continue;
        }
        let edge_id = EdgeId::new(format!("bench-edge-{index:05}")).expect("bench edge id");
        chart
            .edges_mut()
            .insert(edge_id, Edge::new(hub, target, EdgeStyle::Solid));
    }

    for index in 0..count.min(64) {
        chart.register_department_name(format!("部署{index:05}"));
    }

    chart
}

/// A drag batch over the first `touched` nodes of a fixture chart: every node
/// gets `steps_per_node` intermediate moves, the last node a final release.
pub fn drag_batch(touched: usize, steps_per_node: usize) -> Vec<NodeChange> {
    let mut changes = Vec::with_capacity(touched * steps_per_node + 1);
    for index in 0..touched {
        for step in 0..steps_per_node {
            changes.push(NodeChange::Position {
                node_id: bench_node_id(index),
                position: Position::new(step as f64 * 4.0, index as f64 * 2.0),
                dragging: true,
            });
        }
    }
    changes.push(NodeChange::Position {
        node_id: bench_node_id(0),
        position: Position::new(0.0, 0.0),
        dragging: false,
    });
    changes
}
