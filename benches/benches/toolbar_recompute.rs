// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use multiroot_toolbar::{
    ComponentRegistry, FlatToolbar, ResolveFailure, ToolbarConfig, ToolbarProjection,
};

fn component_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("button{i}")).collect()
}

fn registry(names: &[String]) -> ComponentRegistry<usize> {
    let mut registry = ComponentRegistry::default();
    for (i, name) in names.iter().enumerate() {
        registry.add(name.clone(), move |_| i);
    }
    registry
}

fn root_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("root{i}")).collect()
}

/// Every root gets a rotated window of the component names.
fn per_root_map(names: &[String], roots: &[String], width: usize) -> ToolbarConfig {
    let fallback = FlatToolbar::new(names.iter().cloned()).without([names[0].clone()]);
    ToolbarConfig::per_root_map(
        fallback,
        roots.iter().enumerate().map(|(r, root)| {
            let items: Vec<String> = (0..width)
                .map(|i| names[(r + i) % names.len()].clone())
                .collect();
            (root.clone(), items)
        }),
    )
}

fn bench_root_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_switch");
    let names = component_names(64);
    for &roots in &[4_usize, 32, 256] {
        let roots = root_names(roots);
        group.throughput(Throughput::Elements(roots.len() as u64));

        group.bench_function(format!("per_root_map_warm_r{}", roots.len()), |b| {
            let mut toolbar =
                ToolbarProjection::new(per_root_map(&names, &roots, 16), registry(&names));
            for root in &roots {
                let _ = toolbar.recompute(root);
            }
            b.iter(|| {
                for root in &roots {
                    black_box(toolbar.recompute(root).map(<[_]>::len).ok());
                }
            });
        });

        group.bench_function(format!("per_root_map_cold_r{}", roots.len()), |b| {
            b.iter_batched(
                || ToolbarProjection::new(per_root_map(&names, &roots, 16), registry(&names)),
                |mut toolbar| {
                    for root in &roots {
                        black_box(toolbar.recompute(root).map(<[_]>::len).ok());
                    }
                    black_box(toolbar.cache().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_resolution_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let names = component_names(64);
    let roots = root_names(32);

    let flat = ToolbarConfig::flat(
        FlatToolbar::new(names.iter().cloned()).without(names.iter().step_by(4).cloned()),
    );
    group.bench_function("flat_with_remove_items", |b| {
        b.iter(|| {
            for root in &roots {
                black_box(flat.resolve(root).map(|items| items.len()).ok());
            }
        });
    });

    let map = per_root_map(&names, &roots, 16);
    group.bench_function("per_root_map", |b| {
        b.iter(|| {
            for root in &roots {
                black_box(map.resolve(root).map(|items| items.len()).ok());
            }
        });
    });

    let window = names[..16].to_vec();
    let callback =
        ToolbarConfig::per_root_callback(FlatToolbar::new(names.iter().cloned()), move |root| {
            if root.ends_with('7') {
                Err(ResolveFailure::new("no toolbar"))
            } else if root.len() % 2 == 0 {
                Ok(Some(window.clone()))
            } else {
                Ok(None)
            }
        });
    group.bench_function("per_root_callback", |b| {
        b.iter(|| {
            for root in &roots {
                black_box(callback.resolve(root).map(|items| items.len()).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_root_switch, bench_resolution_forms);
criterion_main!(benches);
