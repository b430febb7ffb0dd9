// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use triton::ops::{apply_node_changes, AppliedNodeChanges};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `ops.apply`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small_batch_50`, `large_batch_500`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn checksum_applied(applied: &AppliedNodeChanges) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(applied.nodes.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(applied.removed.len() as u64);
    for node in applied.nodes.values() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.position().x.to_bits());
    }
    acc
}

fn benches_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.apply");

    let small_chart = fixtures::chart_with_departments(100);
    let small_batch = fixtures::drag_batch(10, 5);
    group.throughput(Throughput::Elements(small_batch.len() as u64));
    group.bench_function("small_batch_50", {
        let nodes = small_chart.nodes().clone();
        let batch = small_batch.clone();
        move |b| {
            b.iter(|| {
                let applied = apply_node_changes(black_box(&batch), black_box(&nodes));
                black_box(checksum_applied(&applied))
            })
        }
    });

    let large_chart = fixtures::chart_with_departments(1000);
    let large_batch = fixtures::drag_batch(50, 10);
    group.throughput(Throughput::Elements(large_batch.len() as u64));
    group.bench_function("large_batch_500", {
        let nodes = large_chart.nodes().clone();
        let batch = large_batch.clone();
        move |b| {
            b.iter(|| {
                let applied = apply_node_changes(black_box(&batch), black_box(&nodes));
                black_box(checksum_applied(&applied))
            })
        }
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
