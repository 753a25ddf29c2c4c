// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tooltip::headless::HeadlessHost;
use understory_tooltip::{NoAnimation, TapRegion, Tooltip, TooltipConfig};

fn setup(anchor: Rect) -> (HeadlessHost, Tooltip) {
    let host = HeadlessHost::new(Some(anchor), 390.0, Size::new(220.0, 64.0));
    let config = TooltipConfig::default()
        .auto_hide(true, Duration::from_millis(1500))
        .click_to_hide(true);
    (host, Tooltip::new(config))
}

fn bench_show_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tooltip");
    // Centered anchor: one layout pass.
    group.bench_function("auto_hide_cycle", |b| {
        b.iter_batched(
            || setup(Rect::new(140.0, 300.0, 250.0, 340.0)),
            |(mut host, mut tooltip)| {
                tooltip.show(&mut host);
                black_box(host.run_until_idle(&mut tooltip))
            },
            BatchSize::SmallInput,
        );
    });
    // Edge anchor: the overflow pass forces a second layout.
    group.bench_function("auto_hide_cycle_remeasure", |b| {
        b.iter_batched(
            || setup(Rect::new(4.0, 300.0, 44.0, 340.0)),
            |(mut host, mut tooltip)| {
                tooltip.show(&mut host);
                black_box(host.run_until_idle(&mut tooltip))
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("tap_to_hide_no_animation", |b| {
        b.iter_batched(
            || {
                let (host, tooltip) = setup(Rect::new(140.0, 300.0, 250.0, 340.0));
                (host, tooltip.with_animation(NoAnimation))
            },
            |(mut host, mut tooltip)| {
                tooltip.show(&mut host);
                host.run_for(&mut tooltip, Duration::from_millis(100));
                tooltip.tap(&mut host, TapRegion::Bubble);
                black_box(host.run_until_idle(&mut tooltip))
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_show_cycle);
criterion_main!(benches);
