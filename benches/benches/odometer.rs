// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_odometer::{PositionClass, build_sequence, classify};

/// Groups `value`'s digits with `,` every three places.
fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d);
    }
    out
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("odometer/classify");

    // Hypothesis: cost is linear in string length and independent of where the
    // change lands, since both passes always walk the whole string.
    for (name, old, new) in [
        ("last_digit", 1_234_560_u64, 1_234_561_u64),
        ("first_digit", 1_234_567, 9_234_567),
        ("grown", 999_999, 1_000_000),
        ("max", u64::MAX - 1, u64::MAX),
    ] {
        let old = grouped(old);
        let new = grouped(new);
        group.throughput(Throughput::Elements(new.chars().count() as u64));

        for animate_all in [false, true] {
            let id = BenchmarkId::new(name, if animate_all { "all" } else { "changed" });
            group.bench_function(id, |b| {
                b.iter(|| black_box(classify(black_box(&new), black_box(&old), animate_all)));
            });
        }
    }

    group.finish();
}

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("odometer/build_sequence");
    let digits: Vec<char> = ('0'..='9').collect();

    for class in [PositionClass::Changed, PositionClass::DecorativeScroll] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{class:?}")),
            &digits,
            |b, digits| {
                b.iter(|| {
                    for &d in digits {
                        black_box(build_sequence(class, black_box(d)));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_sequences);
criterion_main!(benches);
