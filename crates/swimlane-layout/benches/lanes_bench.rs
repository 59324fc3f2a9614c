// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::{env, hint::black_box};
use swimlane_core::time::{TimeDelta, TimePoint};
use swimlane_layout::{
    color::Theme,
    config::LayoutConfig,
    lanes::{FirstFitAssigner, HeapAssigner, LaneAssigner},
    layout::compute_layout,
};
use swimlane_model::{
    generator::{TimelineGenConfigBuilder, TimelineGenerator},
    timeline::Timeline,
};

fn gen_timeline(amount: usize, mean_gap: i64, seed: u64) -> Timeline<i64> {
    let config = TimelineGenConfigBuilder::<i64>::new()
        .amount(amount)
        .first_start(TimePoint::new(0))
        .present(TimePoint::new(amount as i64 * mean_gap * 2))
        .mean_gap(TimeDelta::new(mean_gap))
        .seed(seed)
        .build()
        .expect("valid generator config");
    TimelineGenerator::new(config).generate()
}

fn register_assigner<A: LaneAssigner<i64>>(
    c: &mut Criterion,
    assigner: A,
    sizes: &[usize],
    mean_gap: i64,
) {
    let mut group = c.benchmark_group(format!("lanes/{}", assigner.name()));
    for &n in sizes {
        let timeline = gen_timeline(n, mean_gap, 0x5EED_0000 + n as u64);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("assign", n), &timeline, |b, t| {
            b.iter(|| {
                let a = assigner
                    .assign(black_box(t.entries()), t.present())
                    .expect("generated timelines are valid");
                black_box(a.lane_count())
            })
        });
    }
    group.finish();
}

fn lane_benches(c: &mut Criterion) {
    // Dense timelines (small gaps) open many lanes, which is where the
    // linear scan falls behind.
    let mean_gap = env::var("LANES_MEAN_GAP")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20i64);
    let sizes: Vec<usize> = env::var("LANES_SIZES")
        .ok()
        .map(|v| v.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_else(|| vec![100, 1_000, 10_000]);

    register_assigner(c, FirstFitAssigner::new(), &sizes, mean_gap);
    register_assigner(c, HeapAssigner::new(), &sizes, mean_gap);
}

fn layout_benches(c: &mut Criterion) {
    let timeline = gen_timeline(60, 200, 7);
    let config = LayoutConfig::expanded();
    c.bench_function("layout/expanded/60", |b| {
        b.iter(|| {
            let l = compute_layout(
                black_box(&timeline),
                &config,
                Theme::Light,
                Some(1200.0),
                &FirstFitAssigner,
            )
            .expect("layout fits");
            black_box(l.bars.len())
        })
    });
}

criterion_group!(benches, lane_benches, layout_benches);
criterion_main!(benches);
