// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::{hint::black_box, time::Duration};
use tessera_dry_tests::{random_aabb, Prng};
use tessera_math::{Mask, Vector4};

const SEED: u64 = 0xaabb;

type Aabb = (Vector4, Vector4);

/// Overlap via two lane compares and one mask test.
fn overlaps_masked(a: &Aabb, b: &Aabb) -> bool {
    let separated = a.1.comp_less(&b.0) | b.1.comp_less(&a.0);
    !separated.any_is_set(Mask::XYZ)
}

/// Overlap via per-axis scalar branches.
fn overlaps_scalar(a: &Aabb, b: &Aabb) -> bool {
    let (amin, amax) = (a.0.to_array(), a.1.to_array());
    let (bmin, bmax) = (b.0.to_array(), b.1.to_array());
    (0..3).all(|i| amax[i] >= bmin[i] && bmax[i] >= amin[i])
}

fn count_pairs(boxes: &[Aabb], test: fn(&Aabb, &Aabb) -> bool) -> usize {
    let mut hits = 0;
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            if test(a, b) {
                hits += 1;
            }
        }
    }
    hits
}

fn bench_aabb(c: &mut Criterion) {
    let mut group = c.benchmark_group("aabb_overlap_pairs");
    group.sample_size(40);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    for &n in &[32usize, 256, 1_024] {
        let mut prng = Prng::from_seed_u64(SEED);
        let boxes: Vec<Aabb> = (0..n).map(|_| random_aabb(&mut prng, 100.0)).collect();
        debug_assert_eq!(
            count_pairs(&boxes, overlaps_masked),
            count_pairs(&boxes, overlaps_scalar)
        );
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("mask", n), &boxes, |b, boxes| {
            b.iter(|| black_box(count_pairs(boxes, overlaps_masked)));
        });
        group.bench_with_input(BenchmarkId::new("scalar", n), &boxes, |b, boxes| {
            b.iter(|| black_box(count_pairs(boxes, overlaps_scalar)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aabb);
criterion_main!(benches);
