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
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tempus_collections::map::{IntervalMap, LinearIntervalMap};
use tempus_collections::sequence::IntervalSequence;
use tempus_core::math::interval::Interval;

const SIZES: [usize; 3] = [16, 128, 1024];

fn random_intervals(count: usize, seed: u64) -> Vec<Interval<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = (count as i64) * 8;
    (0..count)
        .map(|_| {
            let lo = rng.random_range(0..span);
            let len = rng.random_range(0..16);
            Interval::over(
                Some(lo),
                rng.random_bool(0.5),
                Some(lo + len),
                rng.random_bool(0.5),
            )
        })
        .collect()
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_interval_map");

    for &size in &SIZES {
        let keys = random_intervals(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("put", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = LinearIntervalMap::with_capacity(keys.len());
                for (i, key) in keys.iter().enumerate() {
                    map.put(*key, i);
                }
                black_box(map.len())
            })
        });

        let filled: LinearIntervalMap<_, usize> =
            keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
        let holes = random_intervals(size / 4 + 1, 7);
        group.bench_with_input(BenchmarkId::new("remove", size), &holes, |b, holes| {
            b.iter(|| {
                let mut map = filled.clone();
                for hole in holes {
                    map.remove(hole);
                }
                black_box(map.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("get", size), &filled, |b, map| {
            b.iter(|| {
                let hits = (0..(size as i64) * 8)
                    .step_by(7)
                    .filter(|p| map.contains_key(p))
                    .count();
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_sequence");

    for &size in &SIZES {
        let intervals = random_intervals(size, 1337);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &intervals, |b, ivs| {
            b.iter(|| {
                let seq: IntervalSequence<_> = ivs.iter().copied().collect();
                black_box(seq.len())
            })
        });

        let seq: IntervalSequence<_> = intervals.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("gaps", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.gaps().len()))
        });
        group.bench_with_input(BenchmarkId::new("intersections", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.intersections().len()))
        });
        group.bench_with_input(BenchmarkId::new("extent", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.extent()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map, bench_sequence);
criterion_main!(benches);
