// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::edge::Edge;
use super::ids::{EdgeId, NodeId, PersonId};
use super::node::Node;
use super::person::Person;

/// One point-in-time value of the whole chart.
///
/// Cloning a `Chart` shares no mutable substructure with the source, which is
/// what makes stored history entries immune to later edits of the live state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    department_names: Vec<String>,
    people: BTreeMap<PersonId, Person>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, Edge> {
        &mut self.edges
    }

    /// The department name registry: an ordered set of labels, independent of
    /// which nodes currently use them.
    pub fn department_names(&self) -> &[String] {
        &self.department_names
    }

    /// Appends `name` to the registry unless it is already present.
    ///
    /// Returns whether the registry changed; duplicate insertion is a silent
    /// no-op.
    pub fn register_department_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.department_names.contains(&name) {
            return false;
        }
        self.department_names.push(name);
        true
    }

    pub fn people(&self) -> &BTreeMap<PersonId, Person> {
        &self.people
    }

    pub fn people_mut(&mut self) -> &mut BTreeMap<PersonId, Person> {
        &mut self.people
    }

    pub fn register_person(&mut self, person: Person) {
        self.people.insert(person.person_id().clone(), person);
    }

    /// Removes every edge with `node_id` as source or target, returning how
    /// many were dropped.
    pub fn remove_edges_touching(&mut self, node_id: &NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(node_id));
        before - self.edges.len()
    }
}
