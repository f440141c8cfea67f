// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_odometer_label::{
    GroupingFormatter, LabelConfig, MonospaceMeasure, OdometerLabel,
};

type Label = OdometerLabel<GroupingFormatter, MonospaceMeasure>;

fn label(config: LabelConfig) -> Label {
    let mut label =
        OdometerLabel::new(GroupingFormatter, MonospaceMeasure::new(10.0, 20.0), ()).with_config(config);
    label.set_frame(Size::new(300.0, 35.0));
    label
}

fn bench_set_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("label/set_number");

    // A stepper moving a six-figure value by a thousand, as in a balance display.
    for (name, config) in [
        ("changed", LabelConfig::default()),
        (
            "all",
            LabelConfig {
                animate_all_on_change: true,
                ..LabelConfig::default()
            },
        ),
        (
            "plain",
            LabelConfig {
                is_currency: false,
                ..LabelConfig::default()
            },
        ),
    ] {
        group.bench_function(BenchmarkId::new("step_1000", name), |b| {
            b.iter_batched(
                || {
                    let mut label = label(config);
                    label.set_number(800_000);
                    label
                },
                |mut label| black_box(label.set_number(801_000)),
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("no_op", |b| {
        let mut label = label(LabelConfig::default());
        label.set_number(123_456_789);
        b.iter(|| black_box(label.set_number(black_box(123_456_789))));
    });

    group.finish();
}

fn bench_sample_plan(c: &mut Criterion) {
    let mut label = label(LabelConfig::default());
    label.set_number(1);
    let plan = label.set_number(9_999_999);
    let total = plan.total_time();

    c.bench_function("label/sample_plan_60_frames", |b| {
        b.iter(|| {
            for frame in 0..60_u32 {
                let elapsed = total * frame / 60;
                for (_, scroll) in plan.scroll_animations() {
                    black_box(scroll.offset_at(elapsed));
                }
            }
        });
    });
}

criterion_group!(benches, bench_set_number, bench_sample_plan);
criterion_main!(benches);
