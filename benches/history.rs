// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use triton::history::History;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `history.commit`
// - Case IDs must remain stable across refactors (e.g. `commit_100_nodes`,
//   `undo_redo_walk`).
fn benches_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history.commit");

    let chart = fixtures::chart_with_departments(100);
    group.bench_function("commit_100_nodes", {
        let chart = chart.clone();
        move |b| {
            b.iter_batched(
                || History::new(chart.clone()),
                |mut history| {
                    for _ in 0..16 {
                        history.commit(chart.clone());
                    }
                    black_box(history.len())
                },
                BatchSize::SmallInput,
            )
        }
    });

    group.bench_function("undo_redo_walk", {
        let chart = fixtures::chart_with_departments(100);
        move |b| {
            b.iter_batched(
                || {
                    let mut history = History::new(chart.clone());
                    for _ in 0..16 {
                        history.commit(chart.clone());
                    }
                    history
                },
                |mut history| {
                    while history.undo().is_some() {}
                    while history.redo().is_some() {}
                    black_box(history.index())
                },
                BatchSize::SmallInput,
            )
        }
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_history
}
criterion_main!(benches);
