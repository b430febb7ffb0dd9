// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::node::NodeKind;

/// Visual style of a reporting edge.
///
/// Department-to-department edges are solid; an edge with a person on either
/// end is dashed and thinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

impl EdgeStyle {
    pub fn between(source: NodeKind, target: NodeKind) -> Self {
        if source == NodeKind::Person || target == NodeKind::Person {
            Self::Dashed
        } else {
            Self::Solid
        }
    }

    pub fn stroke_width(self) -> u16 {
        match self {
            Self::Solid => 2,
            Self::Dashed => 1,
        }
    }
}

/// A directed connection between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source_node_id: NodeId,
    target_node_id: NodeId,
    style: EdgeStyle,
}

impl Edge {
    pub fn new(source_node_id: NodeId, target_node_id: NodeId, style: EdgeStyle) -> Self {
        Self {
            source_node_id,
            target_node_id,
            style,
        }
    }

    pub fn source_node_id(&self) -> &NodeId {
        &self.source_node_id
    }

    pub fn target_node_id(&self) -> &NodeId {
        &self.target_node_id
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn set_style(&mut self, style: EdgeStyle) {
        self.style = style;
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source_node_id == node_id || &self.target_node_id == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeStyle};
    use crate::model::{NodeId, NodeKind};

    #[test]
    fn style_is_dashed_when_either_endpoint_is_a_person() {
        assert_eq!(
            EdgeStyle::between(NodeKind::Department, NodeKind::Department),
            EdgeStyle::Solid
        );
        assert_eq!(
            EdgeStyle::between(NodeKind::Department, NodeKind::Person),
            EdgeStyle::Dashed
        );
        assert_eq!(
            EdgeStyle::between(NodeKind::Person, NodeKind::Department),
            EdgeStyle::Dashed
        );
        assert_eq!(
            EdgeStyle::between(NodeKind::Person, NodeKind::Person),
            EdgeStyle::Dashed
        );
    }

    #[test]
    fn stroke_width_follows_style() {
        assert_eq!(EdgeStyle::Solid.stroke_width(), 2);
        assert_eq!(EdgeStyle::Dashed.stroke_width(), 1);
    }

    #[test]
    fn edge_reports_touched_nodes() {
        let source = NodeId::new("president").expect("source id");
        let target = NodeId::new("hq").expect("target id");
        let other = NodeId::new("factory").expect("other id");
        let edge = Edge::new(source.clone(), target.clone(), EdgeStyle::Solid);

        assert_eq!(edge.source_node_id(), &source);
        assert_eq!(edge.target_node_id(), &target);
        assert!(edge.touches(&source));
        assert!(edge.touches(&target));
        assert!(!edge.touches(&other));
    }
}
