// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_bubble::{
    Alignment, ArrowSpec, BubbleOutline, BubbleStyle, Placement, PlacementResolver, Side,
    adjust_for_overflow,
};

const SIDES: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_anchors(count: usize, viewport: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0x5eed_0f_b0bb1e);
    (0..count)
        .map(|_| {
            let w = 16.0 + rng.next_f64() * 120.0;
            let h = 16.0 + rng.next_f64() * 48.0;
            let x = rng.next_f64() * (viewport - w);
            let y = rng.next_f64() * 1600.0;
            Rect::new(x, y, x + w, y + h)
        })
        .collect()
}

fn bench_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");
    let style = BubbleStyle::default();
    let size = Size::new(240.0, 96.0);
    for side in SIDES {
        let outline = BubbleOutline::for_surface(size, &style, side, ArrowSpec::default());
        group.bench_function(format!("path_{side:?}"), |b| {
            b.iter(|| black_box(outline.path(black_box(Some(80.0)))));
        });
    }
    group.bench_function("path_no_anchor", |b| {
        let outline = BubbleOutline::for_surface(size, &style, Side::Bottom, ArrowSpec::default());
        b.iter(|| black_box(outline.path(black_box(None))));
    });
    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let viewport = 390.0;
    let anchors = gen_anchors(1024, viewport);
    let size = Size::new(220.0, 64.0);
    group.throughput(Throughput::Elements(anchors.len() as u64));
    for side in SIDES {
        let resolver = PlacementResolver::new(Placement {
            side,
            align: Alignment::Center,
            distance: 8.0,
            ..Default::default()
        });
        group.bench_function(format!("resolve_{side:?}"), |b| {
            b.iter(|| {
                for anchor in &anchors {
                    black_box(resolver.resolve(*anchor, size, viewport));
                }
            });
        });
    }
    group.bench_function("adjust_for_overflow_bottom", |b| {
        b.iter(|| {
            for anchor in &anchors {
                black_box(adjust_for_overflow(
                    *anchor,
                    size,
                    Side::Bottom,
                    viewport,
                    8.0,
                    30.0,
                ));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_outline, bench_placement);
criterion_main!(benches);
