use claby::{
    algorithms::{generate, new_random, solve, DepthFirstSearch, RecursiveBacktracker},
    dims::Dims,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DIMS: Dims = Dims(101, 101);

pub fn carve(c: &mut Criterion) {
    c.bench_function("recursive_backtracker", |b| {
        let (mut rng, _) = new_random(Some(0));
        b.iter(|| generate::<RecursiveBacktracker>(black_box(DIMS), &mut rng).unwrap())
    });
}

pub fn carve_and_solve(c: &mut Criterion) {
    c.bench_function("carve_and_solve", |b| {
        let (mut rng, _) = new_random(Some(0));
        b.iter(|| {
            let mut grid = generate::<RecursiveBacktracker>(black_box(DIMS), &mut rng).unwrap();
            solve::<DepthFirstSearch>(&mut grid)
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = carve, carve_and_solve}
criterion_main!(benches);
