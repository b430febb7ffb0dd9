// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::bridge::{self, Signal};
use crate::engine::{ChartEngine, EngineError, NEW_DEPARTMENT_LABEL};
use crate::layout::child_column_positions;
use crate::model::{
    Chart, DepartmentBody, EdgeStyle, Node, NodeBody, NodeId, NodeKind, Person, PersonBody,
    PersonId,
};
use crate::model::Position;
use crate::query;

use super::types::*;

#[derive(Clone)]
pub struct TritonMcp {
    engine: Arc<Mutex<ChartEngine>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TritonMcp {
    pub fn new(engine: Arc<Mutex<ChartEngine>>) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Read the whole chart: nodes, edges, the department registry, people,
    /// and the undo/redo cursor. Start here.
    #[tool(name = "chart.read")]
    async fn chart_read(&self) -> Result<Json<ChartReadResponse>, ErrorData> {
        let engine = self.engine.lock().await;
        let selected = engine.selected_node_id().cloned();

        let nodes = engine
            .nodes()
            .values()
            .map(|node| mcp_node(node, selected.as_ref()))
            .collect();
        let edges = engine
            .edges()
            .iter()
            .map(|(edge_id, edge)| McpEdge {
                id: edge_id.to_string(),
                source: edge.source_node_id().to_string(),
                target: edge.target_node_id().to_string(),
                style: edge_style_label(edge.style()).to_owned(),
            })
            .collect();
        let people = engine
            .chart()
            .people()
            .values()
            .map(|person| McpPerson {
                id: person.person_id().to_string(),
                name: person.name().to_owned(),
                title: person.title().map(ToOwned::to_owned),
                avatar: person.avatar().map(ToOwned::to_owned),
            })
            .collect();

        Ok(Json(ChartReadResponse {
            nodes,
            edges,
            department_names: engine.chart().department_names().to_vec(),
            people,
            history: history_info(&engine),
        }))
    }

    /// Add a fully formed node. With `source_node_id` set, a connecting edge
    /// is auto-drawn (dashed when a person is involved) and the node becomes
    /// the selection.
    #[tool(name = "node.add")]
    async fn node_add(
        &self,
        params: Parameters<NodeAddParams>,
    ) -> Result<Json<NodeAddResponse>, ErrorData> {
        let params = params.0;

        let kind = match params.kind.as_deref() {
            None | Some("department") => NodeKind::Department,
            Some("person") => NodeKind::Person,
            Some(other) => {
                return Err(ErrorData::invalid_params(
                    format!("unknown node kind: {other:?} (expected 'department' or 'person')"),
                    None,
                ));
            }
        };

        let mut engine = self.engine.lock().await;

        let node_id = match params.id {
            Some(raw) => parse_node_id("id", &raw)?,
            None => engine.next_node_id(),
        };
        if engine.nodes().contains_key(&node_id) {
            return Err(ErrorData::invalid_params(
                "node id already exists",
                Some(serde_json::json!({ "id": node_id.as_str() })),
            ));
        }

        let body = match kind {
            NodeKind::Department => NodeBody::Department(DepartmentBody::new_with(
                params.label.unwrap_or_else(|| NEW_DEPARTMENT_LABEL.to_owned()),
                params.color,
            )),
            NodeKind::Person => {
                let person_id = params.person_id.ok_or_else(|| {
                    ErrorData::invalid_params("person nodes require person_id", None)
                })?;
                let person_id: PersonId = parse_person_id("person_id", &person_id)?;
                let name = params.name.ok_or_else(|| {
                    ErrorData::invalid_params("person nodes require name", None)
                })?;
                NodeBody::Person(PersonBody::new_with(person_id, name, params.title))
            }
        };

        let source_node_id = params
            .source_node_id
            .map(|raw| parse_node_id("source_node_id", &raw))
            .transpose()?;
        let auto_edged = source_node_id.is_some();

        let node = Node::new_with(
            node_id.clone(),
            Position::new(params.x, params.y),
            source_node_id,
            body,
        );

        bridge::dispatch(&mut engine, Signal::AddNode(node)).map_err(engine_error)?;

        Ok(Json(NodeAddResponse {
            node_id: node_id.into_string(),
            auto_edged,
            history: history_info(&engine),
        }))
    }

    /// Spawn a department child under `parent_id`: the existing child column
    /// is respaced first, then the new node is inserted with an auto edge.
    #[tool(name = "node.add_child")]
    async fn node_add_child(
        &self,
        params: Parameters<NodeAddChildParams>,
    ) -> Result<Json<NodeAddChildResponse>, ErrorData> {
        let NodeAddChildParams { parent_id, label } = params.0;
        let parent_id = parse_node_id("parent_id", &parent_id)?;

        let mut engine = self.engine.lock().await;
        let Some(parent) = engine.nodes().get(&parent_id) else {
            return Err(ErrorData::invalid_params(
                "parent node not found",
                Some(serde_json::json!({ "parent_id": parent_id.as_str() })),
            ));
        };
        let parent_position = parent.position();

        let child_ids: Vec<NodeId> = query::children_of(engine.chart(), &parent_id)
            .into_iter()
            .map(|node| node.node_id().clone())
            .collect();
        let reflowed = child_ids.len() as u64;
        let positions = child_column_positions(parent_position, child_ids.len() + 1);

        for (node_id, position) in child_ids.into_iter().zip(positions.iter().copied()) {
            bridge::dispatch(&mut engine, Signal::RepositionNode { node_id, position })
                .map_err(engine_error)?;
        }

        let new_position = *positions.last().expect("column has at least one slot");
        let node_id = engine.next_node_id();
        let mut node = Node::department(
            node_id.clone(),
            new_position,
            label.unwrap_or_else(|| NEW_DEPARTMENT_LABEL.to_owned()),
        );
        node.set_source_node_id(Some(parent_id));

        bridge::dispatch(&mut engine, Signal::AddNode(node)).map_err(engine_error)?;

        Ok(Json(NodeAddChildResponse {
            node_id: node_id.into_string(),
            reflowed,
            history: history_info(&engine),
        }))
    }

    /// Move a node to an absolute position. One call is one history commit.
    #[tool(name = "node.reposition")]
    async fn node_reposition(
        &self,
        params: Parameters<NodeRepositionParams>,
    ) -> Result<Json<NodeRepositionResponse>, ErrorData> {
        let NodeRepositionParams { id, x, y } = params.0;
        let node_id = parse_node_id("id", &id)?;

        let mut engine = self.engine.lock().await;
        if !engine.nodes().contains_key(&node_id) {
            return Err(ErrorData::invalid_params(
                "node not found",
                Some(serde_json::json!({ "id": node_id.as_str() })),
            ));
        }

        bridge::dispatch(
            &mut engine,
            Signal::RepositionNode {
                node_id,
                position: Position::new(x, y),
            },
        )
        .map_err(engine_error)?;

        Ok(Json(NodeRepositionResponse {
            history: history_info(&engine),
        }))
    }

    /// Add a name to the department registry; duplicates are a no-op.
    #[tool(name = "department.register")]
    async fn department_register(
        &self,
        params: Parameters<DepartmentRegisterParams>,
    ) -> Result<Json<DepartmentRegisterResponse>, ErrorData> {
        let DepartmentRegisterParams { name } = params.0;
        if name.trim().is_empty() {
            return Err(ErrorData::invalid_params(
                "department name must not be empty",
                None,
            ));
        }

        let mut engine = self.engine.lock().await;
        let registered = engine
            .register_department_name(name)
            .map_err(engine_error)?;

        Ok(Json(DepartmentRegisterResponse {
            registered,
            department_names: engine.chart().department_names().to_vec(),
        }))
    }

    /// Add a person to the directory (not yet shown on the chart).
    #[tool(name = "person.register")]
    async fn person_register(
        &self,
        params: Parameters<PersonRegisterParams>,
    ) -> Result<Json<PersonRegisterResponse>, ErrorData> {
        let PersonRegisterParams { id, name, title } = params.0;
        if name.trim().is_empty() {
            return Err(ErrorData::invalid_params("person name must not be empty", None));
        }

        let mut engine = self.engine.lock().await;
        let person_id = match id {
            Some(raw) => parse_person_id("id", &raw)?,
            None => allocate_person_id(engine.chart()),
        };

        engine
            .register_person(Person::new_with(person_id.clone(), name, title, None))
            .map_err(engine_error)?;

        Ok(Json(PersonRegisterResponse {
            person_id: person_id.into_string(),
        }))
    }

    /// Step the history cursor back one entry.
    #[tool(name = "history.undo")]
    async fn history_undo(&self) -> Result<Json<HistoryStepResponse>, ErrorData> {
        let mut engine = self.engine.lock().await;
        let applied = engine.undo();
        Ok(Json(HistoryStepResponse {
            applied,
            history: history_info(&engine),
        }))
    }

    /// Step the history cursor forward one entry.
    #[tool(name = "history.redo")]
    async fn history_redo(&self) -> Result<Json<HistoryStepResponse>, ErrorData> {
        let mut engine = self.engine.lock().await;
        let applied = engine.redo();
        Ok(Json(HistoryStepResponse {
            applied,
            history: history_info(&engine),
        }))
    }
}

fn mcp_node(node: &Node, selected: Option<&NodeId>) -> McpNode {
    let position = node.position();
    let (kind, label, color, person_id, title) = match node.body() {
        NodeBody::Department(body) => (
            "department",
            Some(body.label().to_owned()),
            body.color().map(ToOwned::to_owned),
            None,
            None,
        ),
        NodeBody::Person(body) => (
            "person",
            Some(body.name().to_owned()),
            None,
            Some(body.person_id().to_string()),
            body.title().map(ToOwned::to_owned),
        ),
    };

    McpNode {
        id: node.node_id().to_string(),
        kind: kind.to_owned(),
        x: position.x,
        y: position.y,
        label,
        color,
        person_id,
        title,
        source_node_id: node.source_node_id().map(ToString::to_string),
        selected: selected == Some(node.node_id()),
    }
}

fn edge_style_label(style: EdgeStyle) -> &'static str {
    match style {
        EdgeStyle::Solid => "solid",
        EdgeStyle::Dashed => "dashed",
    }
}

fn history_info(engine: &ChartEngine) -> HistoryInfo {
    HistoryInfo {
        len: engine.history_len() as u64,
        index: engine.history_index() as u64,
    }
}

fn parse_node_id(field: &'static str, raw: &str) -> Result<NodeId, ErrorData> {
    NodeId::new(raw.to_owned()).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid {field}: {err}"),
            Some(serde_json::json!({ field: raw })),
        )
    })
}

fn parse_person_id(field: &'static str, raw: &str) -> Result<PersonId, ErrorData> {
    PersonId::new(raw.to_owned()).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid {field}: {err}"),
            Some(serde_json::json!({ field: raw })),
        )
    })
}

fn allocate_person_id(chart: &Chart) -> PersonId {
    let base = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let mut suffix = 0_u64;
    loop {
        let raw = if suffix == 0 {
            format!("person-{base}")
        } else {
            format!("person-{base}-{suffix}")
        };
        let candidate = PersonId::new(raw).expect("generated person id is non-empty");
        if !chart.people().contains_key(&candidate) {
            return candidate;
        }
        suffix = suffix.saturating_add(1);
    }
}

fn engine_error(err: EngineError) -> ErrorData {
    match err {
        EngineError::EmptyEndpoint { .. } => ErrorData::invalid_params(err.to_string(), None),
        EngineError::Store(_) => ErrorData::internal_error(err.to_string(), None),
    }
}

#[tool_handler]
impl ServerHandler for TritonMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Triton org chart server (tools: chart.read, node.add, node.add_child, node.reposition, department.register, person.register, history.undo, history.redo). Mutations share one undo/redo history with the interactive TUI."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
