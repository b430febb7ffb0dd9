// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpNode {
    pub id: String,
    /// "department" or "person".
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
    pub color: Option<String>,
    pub person_id: Option<String>,
    pub title: Option<String>,
    pub source_node_id: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// "solid" or "dashed".
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpPerson {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryInfo {
    pub len: u64,
    pub index: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChartReadResponse {
    pub nodes: Vec<McpNode>,
    pub edges: Vec<McpEdge>,
    pub department_names: Vec<String>,
    pub people: Vec<McpPerson>,
    pub history: HistoryInfo,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeAddParams {
    /// Node id; generated when omitted.
    pub id: Option<String>,
    /// "department" (default) or "person".
    pub kind: Option<String>,
    pub x: f64,
    pub y: f64,
    /// Department label; defaults to the placeholder label.
    pub label: Option<String>,
    pub color: Option<String>,
    /// Required for person nodes.
    pub person_id: Option<String>,
    /// Required for person nodes.
    pub name: Option<String>,
    pub title: Option<String>,
    /// Auto-draws a connecting edge from this node when present.
    pub source_node_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeAddResponse {
    pub node_id: String,
    pub auto_edged: bool,
    pub history: HistoryInfo,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeAddChildParams {
    pub parent_id: String,
    /// Label for the new child; defaults to the placeholder label.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeAddChildResponse {
    pub node_id: String,
    /// How many existing children were respaced before the insert.
    pub reflowed: u64,
    pub history: HistoryInfo,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeRepositionParams {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeRepositionResponse {
    pub history: HistoryInfo,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DepartmentRegisterParams {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DepartmentRegisterResponse {
    /// False when the name was already registered (idempotent insert).
    pub registered: bool,
    pub department_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PersonRegisterParams {
    /// Person id; generated when omitted.
    pub id: Option<String>,
    pub name: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PersonRegisterResponse {
    pub person_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryStepResponse {
    /// False when there was nothing to undo/redo.
    pub applied: bool,
    pub history: HistoryInfo,
}
