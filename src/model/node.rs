// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{NodeId, PersonId};

/// 2-D position in chart coordinates (not terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The variant of a chart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Department,
    Person,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Department(DepartmentBody),
    Person(PersonBody),
}

impl NodeBody {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Department(_) => NodeKind::Department,
            Self::Person(_) => NodeKind::Person,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBody {
    label: String,
    color: Option<String>,
}

impl DepartmentBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
        }
    }

    pub fn new_with(label: impl Into<String>, color: Option<String>) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color<T: Into<String>>(&mut self, color: Option<T>) {
        self.color = color.map(Into::into);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonBody {
    person_id: PersonId,
    name: String,
    title: Option<String>,
}

impl PersonBody {
    pub fn new(person_id: PersonId, name: impl Into<String>) -> Self {
        Self {
            person_id,
            name: name.into(),
            title: None,
        }
    }

    pub fn new_with(person_id: PersonId, name: impl Into<String>, title: Option<String>) -> Self {
        Self {
            person_id,
            name: name.into(),
            title,
        }
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }
}

/// A positioned chart vertex, either a department or a person.
///
/// `source_node_id` names the node this one was spawned from; it is consumed
/// once at insertion time to auto-draw the connecting edge and is otherwise
/// inert.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    position: Position,
    source_node_id: Option<NodeId>,
    body: NodeBody,
}

impl Node {
    pub fn department(node_id: NodeId, position: Position, label: impl Into<String>) -> Self {
        Self {
            node_id,
            position,
            source_node_id: None,
            body: NodeBody::Department(DepartmentBody::new(label)),
        }
    }

    pub fn person(
        node_id: NodeId,
        position: Position,
        person_id: PersonId,
        name: impl Into<String>,
    ) -> Self {
        Self {
            node_id,
            position,
            source_node_id: None,
            body: NodeBody::Person(PersonBody::new(person_id, name)),
        }
    }

    pub fn new_with(
        node_id: NodeId,
        position: Position,
        source_node_id: Option<NodeId>,
        body: NodeBody,
    ) -> Self {
        Self {
            node_id,
            position,
            source_node_id,
            body,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn source_node_id(&self) -> Option<&NodeId> {
        self.source_node_id.as_ref()
    }

    pub fn set_source_node_id(&mut self, source_node_id: Option<NodeId>) {
        self.source_node_id = source_node_id;
    }

    pub fn kind(&self) -> NodeKind {
        self.body.kind()
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut NodeBody {
        &mut self.body
    }

    pub fn as_department(&self) -> Option<&DepartmentBody> {
        match &self.body {
            NodeBody::Department(body) => Some(body),
            NodeBody::Person(_) => None,
        }
    }

    pub fn as_department_mut(&mut self) -> Option<&mut DepartmentBody> {
        match &mut self.body {
            NodeBody::Department(body) => Some(body),
            NodeBody::Person(_) => None,
        }
    }

    pub fn as_person(&self) -> Option<&PersonBody> {
        match &self.body {
            NodeBody::Person(body) => Some(body),
            NodeBody::Department(_) => None,
        }
    }

    /// The text the renderer shows for this node.
    pub fn display_label(&self) -> &str {
        match &self.body {
            NodeBody::Department(body) => body.label(),
            NodeBody::Person(body) => body.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeKind, Position};
    use crate::model::{NodeId, PersonId};

    #[test]
    fn department_node_can_be_constructed_and_updated() {
        let node_id = NodeId::new("sales").expect("node id");
        let mut node = Node::department(node_id.clone(), Position::new(10.0, 20.0), "営業部");

        assert_eq!(node.node_id(), &node_id);
        assert_eq!(node.kind(), NodeKind::Department);
        assert_eq!(node.display_label(), "営業部");
        assert_eq!(node.source_node_id(), None);

        let dept = node.as_department_mut().expect("department body");
        dept.set_label("販売部");
        dept.set_color(Some("orange"));

        let dept = node.as_department().expect("department body");
        assert_eq!(dept.label(), "販売部");
        assert_eq!(dept.color(), Some("orange"));

        node.set_position(Position::new(30.0, 40.0));
        assert_eq!(node.position(), Position::new(30.0, 40.0));
    }

    #[test]
    fn person_node_has_no_department_body() {
        let node_id = NodeId::new("p-node").expect("node id");
        let person_id = PersonId::new("person-1").expect("person id");
        let node = Node::person(node_id, Position::default(), person_id.clone(), "山田太郎");

        assert_eq!(node.kind(), NodeKind::Person);
        assert!(node.as_department().is_none());
        let body = node.as_person().expect("person body");
        assert_eq!(body.person_id(), &person_id);
        assert_eq!(node.display_label(), "山田太郎");
    }
}
