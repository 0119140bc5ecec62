use std::hint::black_box;
use std::ops::RangeInclusive;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utilkit::num::AddWrap;
use utilkit::unicode::{is_scalar_value, utf16, utf8};

const PLANES: [(&str, RangeInclusive<i32>); 3] = [
    ("ascii", 0..=0x7F),
    ("bmp", 0x80..=0xFFFF),
    ("supplementary", 0x1_0000..=0x10_FFFF),
];

fn unicode_roundtrips(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_roundtrip");
    for (name, range) in PLANES.iter().cloned() {
        group.throughput(Throughput::Elements(range.clone().count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &range, |b, range| {
            b.iter(|| {
                let mut acc = 0i32;
                for cp in range.clone() {
                    if !is_scalar_value(cp) {
                        continue;
                    }
                    let enc = utf8::encode_utf8(black_box(cp));
                    acc = acc.add_wrap(utf8::decode_utf8(enc.as_bytes()));
                }
                acc
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("utf16_roundtrip");
    for (name, range) in PLANES.iter().cloned() {
        group.throughput(Throughput::Elements(range.clone().count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &range, |b, range| {
            b.iter(|| {
                let mut acc = 0i32;
                for cp in range.clone() {
                    if !is_scalar_value(cp) {
                        continue;
                    }
                    let pair = utf16::encode_utf16_pair(black_box(cp));
                    acc = acc.add_wrap(utf16::decode_utf16_pair(pair.hi, pair.lo));
                }
                acc
            })
        });
    }
    group.finish();
}

fn wrapping_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_wrap");
    group.throughput(Throughput::Elements(0x10000));
    group.bench_function("i32", |b| {
        b.iter(|| {
            let mut acc = i32::MAX - 7;
            for step in 0..0x10000 {
                acc = acc.add_wrap(black_box(step));
            }
            acc
        })
    });
    group.bench_function("i64", |b| {
        b.iter(|| {
            let mut acc = i64::MAX - 7;
            for step in 0..0x10000i64 {
                acc = acc.add_wrap(black_box(step));
            }
            acc
        })
    });
    group.finish();
}

criterion_group!(benches, unicode_roundtrips, wrapping_addition);

criterion_main!(benches);
