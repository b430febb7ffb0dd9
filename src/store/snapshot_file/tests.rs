// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{SnapshotFile, StoreError, WriteDurability};
use crate::model::{
    seed_chart, Chart, Edge, EdgeId, EdgeStyle, Node, NodeId, Person, PersonId, Position,
};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("triton-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct SnapshotFileTestCtx {
    _tmp: TempDir,
    file: SnapshotFile,
}

impl SnapshotFileTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let session_dir = tmp.path().join("my-session");
        std::fs::create_dir_all(&session_dir).unwrap();
        let file = SnapshotFile::new(&session_dir);
        Self { _tmp: tmp, file }
    }
}

#[fixture]
fn ctx() -> SnapshotFileTestCtx {
    SnapshotFileTestCtx::new("snapshot-file")
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).unwrap()
}

fn sample_chart() -> Chart {
    let mut chart = seed_chart();

    let person_id = PersonId::new("person-1").unwrap();
    let mut person = Person::new(person_id.clone(), "佐藤花子");
    person.set_title(Some("部長"));
    chart.register_person(person);

    let node_id = nid("node-p1");
    chart.nodes_mut().insert(
        node_id.clone(),
        Node::person(node_id, Position::new(600.0, 50.0), person_id, "佐藤花子"),
    );
    chart.edges_mut().insert(
        EdgeId::new("e-p1").unwrap(),
        Edge::new(nid("sales"), nid("node-p1"), EdgeStyle::Dashed),
    );

    chart
}

#[rstest]
fn load_returns_none_when_no_record_exists(ctx: SnapshotFileTestCtx) {
    assert!(ctx.file.load().unwrap().is_none());
}

#[rstest]
fn save_then_load_round_trips_the_chart(ctx: SnapshotFileTestCtx) {
    let chart = sample_chart();
    ctx.file.save(&chart).unwrap();

    let loaded = ctx.file.load().unwrap().expect("record exists");
    assert_eq!(loaded, chart);
}

#[rstest]
fn save_uses_the_documented_wire_shape(ctx: SnapshotFileTestCtx) {
    ctx.file.save(&sample_chart()).unwrap();

    let raw = std::fs::read_to_string(ctx.file.snapshot_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(json["nodes"].is_array());
    assert!(json["edges"].is_array());
    assert!(json["departmentNames"].is_array());
    assert!(json["people"].is_array());

    let person_node = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|node| node["type"] == "person")
        .expect("person node serialized");
    assert_eq!(person_node["personId"], "person-1");

    let dashed = json["edges"]
        .as_array()
        .unwrap()
        .iter()
        .find(|edge| edge["id"] == "e-p1")
        .expect("dashed edge serialized");
    assert_eq!(dashed["style"], "dashed");
}

#[rstest]
fn load_or_init_seeds_a_missing_record(ctx: SnapshotFileTestCtx) {
    assert!(!ctx.file.snapshot_path().exists());

    let chart = ctx.file.load_or_init().unwrap();
    assert_eq!(chart, seed_chart());
    assert!(ctx.file.snapshot_path().is_file());

    let reloaded = ctx.file.load().unwrap().expect("seeded record");
    assert_eq!(reloaded, chart);
}

#[rstest]
fn load_reports_a_corrupt_record_as_a_json_error(ctx: SnapshotFileTestCtx) {
    std::fs::write(ctx.file.snapshot_path(), "{ not json").unwrap();

    let err = ctx.file.load().unwrap_err();
    match err {
        StoreError::Json { .. } => {}
        other => panic!("expected Json error, got: {other:?}"),
    }
}

#[rstest]
fn load_or_init_falls_back_to_seed_and_clears_a_corrupt_record(ctx: SnapshotFileTestCtx) {
    std::fs::write(ctx.file.snapshot_path(), "{ not json").unwrap();

    let chart = ctx.file.load_or_init().unwrap();
    assert_eq!(chart, seed_chart());

    // The corrupt record was overwritten; a plain load succeeds now.
    let reloaded = ctx.file.load().unwrap().expect("record exists");
    assert_eq!(reloaded, seed_chart());
}

#[rstest]
fn load_rejects_a_record_with_an_empty_node_id(ctx: SnapshotFileTestCtx) {
    std::fs::write(
        ctx.file.snapshot_path(),
        r#"{
  "nodes": [{ "type": "department", "id": "", "x": 0, "y": 0, "label": "X" }],
  "edges": [],
  "departmentNames": []
}"#,
    )
    .unwrap();

    let err = ctx.file.load().unwrap_err();
    match err {
        StoreError::InvalidId { field, .. } => assert_eq!(field, "node.id"),
        other => panic!("expected InvalidId, got: {other:?}"),
    }
}

#[rstest]
fn load_accepts_a_legacy_record_without_people(ctx: SnapshotFileTestCtx) {
    std::fs::write(
        ctx.file.snapshot_path(),
        r#"{
  "nodes": [
    { "type": "department", "id": "president", "x": 0, "y": 150, "label": "代表取締役社長", "color": "blue" }
  ],
  "edges": [],
  "departmentNames": ["代表取締役社長"]
}"#,
    )
    .unwrap();

    let chart = ctx.file.load().unwrap().expect("legacy record loads");
    assert_eq!(chart.nodes().len(), 1);
    assert!(chart.people().is_empty());
}

#[rstest]
fn durable_writes_produce_the_same_record(ctx: SnapshotFileTestCtx) {
    let file = ctx.file.clone().with_durability(WriteDurability::Durable);
    assert_eq!(file.durability(), WriteDurability::Durable);

    let chart = sample_chart();
    file.save(&chart).unwrap();
    assert_eq!(file.load().unwrap().expect("record"), chart);
}

#[rstest]
fn save_leaves_no_temp_files_behind(ctx: SnapshotFileTestCtx) {
    ctx.file.save(&sample_chart()).unwrap();
    ctx.file.save(&seed_chart()).unwrap();

    let leftovers = std::fs::read_dir(ctx.file.root())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with(".triton.tmp.")
        })
        .count();
    assert_eq!(leftovers, 0);
}

#[rstest]
fn save_into_a_missing_directory_creates_it(ctx: SnapshotFileTestCtx) {
    let nested = ctx.file.root().join("nested").join("deeper");
    let file = SnapshotFile::new(&nested);

    file.save(&seed_chart()).unwrap();
    assert!(file.snapshot_path().is_file());
}
