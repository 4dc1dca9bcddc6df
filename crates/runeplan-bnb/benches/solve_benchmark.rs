// Copyright (c) 2025 Runeplan Contributors.
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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use runeplan_bnb::bnb::BnbSearcher;
use runeplan_bnb::monitor::NopMonitor;
use runeplan_model::model::{Model, ModelBuilder};
use runeplan_model::rune::ResourceVector;
use std::hint::black_box;

fn standard_model(per_rune: u64) -> Model<u64> {
    ModelBuilder::<u64>::new()
        .budget(ResourceVector::new([per_rune; 5]))
        .built("Grave", 1)
        .built("Lectern", 3)
        .built("Portal", 2)
        .build()
        .expect("standard catalog model must build")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_solve");

    for per_rune in [640u64, 1_600, 3_200] {
        let model = standard_model(per_rune);
        group.bench_with_input(
            BenchmarkId::from_parameter(per_rune),
            &model,
            |b, model| {
                let mut searcher = BnbSearcher::new();
                b.iter(|| {
                    let outcome = searcher.solve(black_box(model), &mut NopMonitor);
                    black_box(outcome.solution().best_bonus())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
