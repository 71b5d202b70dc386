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
use knapsack_greedy::generator::generate;
use knapsack_greedy::rank::RankedCatalog;
use knapsack_greedy::select::GreedySelector;
use knapsack_model::item::Item;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use std::num::NonZeroU32;

const MAX_ITEM_WEIGHT: u32 = 100;
const MAX_ITEM_VALUE_CENTS: u64 = 10_000;
const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn population(count: usize) -> Vec<Item> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let max_weight = NonZeroU32::new(MAX_ITEM_WEIGHT).expect("benchmark max weight is non-zero");
    generate(&mut rng, count, max_weight, MAX_ITEM_VALUE_CENTS)
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in SIZES {
        let items = population(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| RankedCatalog::rank(black_box(items)))
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for size in SIZES {
        let catalog = RankedCatalog::rank(&population(size));
        group.throughput(Throughput::Elements(size as u64));

        // A tiny knapsack stops after the first groups; a huge one scans everything.
        for capacity in [1u32, 1_000, u32::MAX] {
            let selector = GreedySelector::new(capacity);
            group.bench_with_input(
                BenchmarkId::new(format!("capacity_{}", capacity), size),
                &catalog,
                |b, catalog| b.iter(|| selector.select_silent(black_box(catalog))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_select);
criterion_main!(benches);
