// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{
    seed_chart, Chart, DepartmentBody, Edge, EdgeId, EdgeStyle, IdError, Node, NodeBody, NodeId,
    Person, PersonBody, PersonId, Position,
};

const CHART_SNAPSHOT_FILENAME: &str = "triton-chart.json";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable
    /// storage where possible. Exact guarantees are platform/filesystem-
    /// dependent.
    Durable,
}

/// Reads and writes the single chart snapshot of a session directory.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    root: PathBuf,
    durability: WriteDurability,
}

impl SnapshotFile {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(CHART_SNAPSHOT_FILENAME)
    }

    /// Reads the persisted chart; `Ok(None)` when no record exists yet.
    ///
    /// A record saved before the people directory existed deserializes with an
    /// empty people list rather than failing.
    pub fn load(&self) -> Result<Option<Chart>, StoreError> {
        let path = self.snapshot_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let json: ChartJson =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;

        chart_from_json(json).map(Some)
    }

    /// Loads the chart, seeding a fresh record when none exists.
    ///
    /// A corrupt record (parse failure or invalid ids) is not propagated: the
    /// built-in seed chart is installed and the record overwritten.
    pub fn load_or_init(&self) -> Result<Chart, StoreError> {
        match self.load() {
            Ok(Some(chart)) => Ok(chart),
            Ok(None) => {
                let chart = seed_chart();
                self.save(&chart)?;
                Ok(chart)
            }
            Err(StoreError::Json { .. }) | Err(StoreError::InvalidId { .. }) => {
                let chart = seed_chart();
                self.save(&chart)?;
                Ok(chart)
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self, chart: &Chart) -> Result<(), StoreError> {
        fs::create_dir_all(self.root()).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.snapshot_path();
        let json = chart_to_json(chart);
        let raw = serde_json::to_string_pretty(&json).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        write_atomic(&path, format!("{raw}\n").as_bytes(), self.durability)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChartJson {
    nodes: Vec<NodeJson>,
    edges: Vec<EdgeJson>,
    #[serde(rename = "departmentNames")]
    department_names: Vec<String>,
    #[serde(default)]
    people: Vec<PersonJson>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum NodeJson {
    #[serde(rename = "department", rename_all = "camelCase")]
    Department {
        id: String,
        x: f64,
        y: f64,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_node_id: Option<String>,
    },
    #[serde(rename = "person", rename_all = "camelCase")]
    Person {
        id: String,
        x: f64,
        y: f64,
        person_id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_node_id: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeJson {
    id: String,
    source: String,
    target: String,
    style: EdgeStyleJson,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EdgeStyleJson {
    Solid,
    Dashed,
}

impl From<EdgeStyle> for EdgeStyleJson {
    fn from(style: EdgeStyle) -> Self {
        match style {
            EdgeStyle::Solid => Self::Solid,
            EdgeStyle::Dashed => Self::Dashed,
        }
    }
}

impl From<EdgeStyleJson> for EdgeStyle {
    fn from(style: EdgeStyleJson) -> Self {
        match style {
            EdgeStyleJson::Solid => Self::Solid,
            EdgeStyleJson::Dashed => Self::Dashed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersonJson {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

fn chart_to_json(chart: &Chart) -> ChartJson {
    let nodes = chart
        .nodes()
        .values()
        .map(|node| {
            let id = node.node_id().to_string();
            let position = node.position();
            let source_node_id = node.source_node_id().map(ToString::to_string);
            match node.body() {
                NodeBody::Department(body) => NodeJson::Department {
                    id,
                    x: position.x,
                    y: position.y,
                    label: body.label().to_owned(),
                    color: body.color().map(ToOwned::to_owned),
                    source_node_id,
                },
                NodeBody::Person(body) => NodeJson::Person {
                    id,
                    x: position.x,
                    y: position.y,
                    person_id: body.person_id().to_string(),
                    name: body.name().to_owned(),
                    title: body.title().map(ToOwned::to_owned),
                    source_node_id,
                },
            }
        })
        .collect();

    let edges = chart
        .edges()
        .iter()
        .map(|(edge_id, edge)| EdgeJson {
            id: edge_id.to_string(),
            source: edge.source_node_id().to_string(),
            target: edge.target_node_id().to_string(),
            style: edge.style().into(),
        })
        .collect();

    let people = chart
        .people()
        .values()
        .map(|person| PersonJson {
            id: person.person_id().to_string(),
            name: person.name().to_owned(),
            title: person.title().map(ToOwned::to_owned),
            avatar: person.avatar().map(ToOwned::to_owned),
        })
        .collect();

    ChartJson {
        nodes,
        edges,
        department_names: chart.department_names().to_vec(),
        people,
    }
}

fn parse_id<T>(field: &'static str, raw: String) -> Result<crate::model::Id<T>, StoreError> {
    crate::model::Id::new(raw.clone()).map_err(|source| StoreError::InvalidId {
        field,
        value: raw,
        source: Box::new(source),
    })
}

fn chart_from_json(json: ChartJson) -> Result<Chart, StoreError> {
    let mut chart = Chart::new();

    let mut nodes = BTreeMap::new();
    for node_json in json.nodes {
        let node = match node_json {
            NodeJson::Department {
                id,
                x,
                y,
                label,
                color,
                source_node_id,
            } => {
                let node_id: NodeId = parse_id("node.id", id)?;
                let source_node_id = source_node_id
                    .map(|raw| parse_id("node.sourceNodeId", raw))
                    .transpose()?;
                Node::new_with(
                    node_id,
                    Position::new(x, y),
                    source_node_id,
                    NodeBody::Department(DepartmentBody::new_with(label, color)),
                )
            }
            NodeJson::Person {
                id,
                x,
                y,
                person_id,
                name,
                title,
                source_node_id,
            } => {
                let node_id: NodeId = parse_id("node.id", id)?;
                let person_id: PersonId = parse_id("node.personId", person_id)?;
                let source_node_id = source_node_id
                    .map(|raw| parse_id("node.sourceNodeId", raw))
                    .transpose()?;
                Node::new_with(
                    node_id,
                    Position::new(x, y),
                    source_node_id,
                    NodeBody::Person(PersonBody::new_with(person_id, name, title)),
                )
            }
        };
        nodes.insert(node.node_id().clone(), node);
    }
    *chart.nodes_mut() = nodes;

    let mut edges = BTreeMap::new();
    for edge_json in json.edges {
        let edge_id: EdgeId = parse_id("edge.id", edge_json.id)?;
        let source: NodeId = parse_id("edge.source", edge_json.source)?;
        let target: NodeId = parse_id("edge.target", edge_json.target)?;
        edges.insert(edge_id, Edge::new(source, target, edge_json.style.into()));
    }
    *chart.edges_mut() = edges;

    for name in json.department_names {
        chart.register_department_name(name);
    }

    for person_json in json.people {
        let person_id: PersonId = parse_id("person.id", person_json.id)?;
        chart.register_person(Person::new_with(
            person_id,
            person_json.name,
            person_json.title,
            person_json.avatar,
        ));
    }

    Ok(chart)
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".triton.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if fs::rename(from, to).is_ok() {
            return Ok(());
        }
        // Windows rename does not replace an existing file.
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)
}

#[cfg(test)]
mod tests;
