// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use triton::store::SnapshotFile;

mod fixtures;
mod profiler;

use fixtures::TempDir;

// Benchmark identity (keep stable):
// - Group name in this file: `store.save_load`
// - Case IDs must remain stable across refactors (e.g. `io_small`,
//   `io_large`, `round_trip_small`).
fn benches_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.save_load");

    let chart_small = fixtures::chart_with_departments(50);
    group.bench_function("io_small", {
        let chart = chart_small.clone();
        move |b| {
            b.iter_batched_ref(
                || TempDir::new("store_io_small"),
                |tmp| {
                    let file = SnapshotFile::new(tmp.path());
                    file.save(black_box(&chart)).expect("save");
                    black_box(
                        std::fs::metadata(file.snapshot_path())
                            .expect("snapshot metadata")
                            .len(),
                    )
                },
                BatchSize::SmallInput,
            )
        }
    });

    let chart_large = fixtures::chart_with_departments(1000);
    group.bench_function("io_large", {
        let chart = chart_large.clone();
        move |b| {
            b.iter_batched_ref(
                || TempDir::new("store_io_large"),
                |tmp| {
                    let file = SnapshotFile::new(tmp.path());
                    file.save(black_box(&chart)).expect("save");
                    black_box(
                        std::fs::metadata(file.snapshot_path())
                            .expect("snapshot metadata")
                            .len(),
                    )
                },
                BatchSize::SmallInput,
            )
        }
    });

    group.bench_function("round_trip_small", {
        let chart = chart_small.clone();
        move |b| {
            b.iter_batched_ref(
                || {
                    let tmp = TempDir::new("store_round_trip");
                    let file = SnapshotFile::new(tmp.path());
                    file.save(&chart).expect("save");
                    (tmp, file)
                },
                |(_tmp, file)| {
                    let loaded = file.load().expect("load").expect("record exists");
                    black_box(loaded.nodes().len())
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
    targets = benches_store
}
criterion_main!(benches);
