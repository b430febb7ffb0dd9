// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in seed chart used for fresh sessions and corrupt-snapshot recovery.

use std::collections::BTreeMap;

use super::chart::Chart;
use super::edge::{Edge, EdgeStyle};
use super::ids::{EdgeId, NodeId};
use super::node::{DepartmentBody, Node, NodeBody, Position};

const SEED_DEPARTMENT_NAMES: [&str; 9] = [
    "代表取締役社長",
    "本社",
    "工場部門",
    "総務部",
    "営業部",
    "販売部",
    "品質管理部",
    "技術部",
    "製造部",
];

const SEED_NODES: [(&str, f64, f64, &str, &str); 9] = [
    ("president", 0.0, 150.0, "代表取締役社長", "blue"),
    ("hq", 200.0, 50.0, "本社", "amber"),
    ("factory", 200.0, 250.0, "工場部門", "emerald"),
    ("admin", 400.0, 0.0, "総務部", "orange"),
    ("sales", 400.0, 50.0, "営業部", "orange"),
    ("retail", 400.0, 100.0, "販売部", "orange"),
    ("quality", 400.0, 200.0, "品質管理部", "green"),
    ("tech", 400.0, 250.0, "技術部", "green"),
    ("manufacturing", 400.0, 300.0, "製造部", "green"),
];

const SEED_EDGES: [(&str, &str, &str); 8] = [
    ("e1", "president", "hq"),
    ("e2", "president", "factory"),
    ("e3", "hq", "admin"),
    ("e4", "hq", "sales"),
    ("e5", "hq", "retail"),
    ("e6", "factory", "quality"),
    ("e7", "factory", "tech"),
    ("e8", "factory", "manufacturing"),
];

/// The initial company chart: nine departments, eight reporting edges, the
/// matching department registry, and no people.
pub fn seed_chart() -> Chart {
    let mut chart = Chart::new();

    let mut nodes = BTreeMap::new();
    for (raw_id, x, y, label, color) in SEED_NODES {
        let node_id = NodeId::new(raw_id).expect("hard-coded seed node id is valid");
        let body = NodeBody::Department(DepartmentBody::new_with(label, Some(color.to_owned())));
        nodes.insert(
            node_id.clone(),
            Node::new_with(node_id, Position::new(x, y), None, body),
        );
    }
    *chart.nodes_mut() = nodes;

    let mut edges = BTreeMap::new();
    for (raw_id, source, target) in SEED_EDGES {
        let edge_id = EdgeId::new(raw_id).expect("hard-coded seed edge id is valid");
        let source = NodeId::new(source).expect("hard-coded seed source id is valid");
        let target = NodeId::new(target).expect("hard-coded seed target id is valid");
        edges.insert(edge_id, Edge::new(source, target, EdgeStyle::Solid));
    }
    *chart.edges_mut() = edges;

    for name in SEED_DEPARTMENT_NAMES {
        chart.register_department_name(name);
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::seed_chart;
    use crate::model::{EdgeStyle, NodeId};

    #[test]
    fn seed_chart_has_expected_shape() {
        let chart = seed_chart();
        assert_eq!(chart.nodes().len(), 9);
        assert_eq!(chart.edges().len(), 8);
        assert_eq!(chart.department_names().len(), 9);
        assert!(chart.people().is_empty());
    }

    #[test]
    fn seed_edges_are_solid_and_reference_seed_nodes() {
        let chart = seed_chart();
        for edge in chart.edges().values() {
            assert_eq!(edge.style(), EdgeStyle::Solid);
            assert!(chart.nodes().contains_key(edge.source_node_id()));
            assert!(chart.nodes().contains_key(edge.target_node_id()));
        }

        let president = NodeId::new("president").expect("node id");
        let children = chart
            .edges()
            .values()
            .filter(|edge| edge.source_node_id() == &president)
            .count();
        assert_eq!(children, 2);
    }
}
