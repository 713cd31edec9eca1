// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use multiroot_focus::{FocusEvent, FocusTracker};

fn tracker(editables: u32, chrome: u32) -> FocusTracker<u32> {
    let mut focus = FocusTracker::new();
    for i in 0..editables {
        let _ = focus.add_editable(i, format!("root{i}"));
    }
    for i in 0..chrome {
        let _ = focus.add_chrome(editables + i);
    }
    focus
}

fn bench_focus_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_cycle");
    for &n in &[4_u32, 32, 256] {
        let mut focus = tracker(n, n);
        group.throughput(Throughput::Elements(u64::from(n) * 2));
        // Editable to chrome hand-off, the sticky case.
        group.bench_function(format!("editable_chrome_handoff_n{n}"), |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(focus.handle_element(&i, FocusEvent::Focus));
                    black_box(focus.handle_element(&(n + i), FocusEvent::Focus));
                    black_box(focus.handle_element(&i, FocusEvent::Blur));
                    black_box(focus.handle_element(&(n + i), FocusEvent::Blur));
                }
            });
        });
    }
    group.finish();
}

fn bench_register_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");
    let mut focus = tracker(64, 16);
    group.bench_function("remove_readd_editable", |b| {
        b.iter(|| {
            for i in 0..64_u32 {
                black_box(focus.remove_element(&i));
                black_box(focus.add_editable(i, format!("root{i}")).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_focus_cycle, bench_register_remove);
criterion_main!(benches);
