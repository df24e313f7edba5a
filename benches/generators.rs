use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators,
    grid::Grid,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn fresh_grid() -> Grid {
    Grid::new(Width(32), Height(32)).expect("valid grid dimensions")
}

fn bench_binary_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("binary_maze_32", move |b| {
        b.iter(|| {
            let mut g = fresh_grid();
            generators::binary_tree(&mut g, &mut rng);
            g
        })
    });
}

fn bench_aldous_broder_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("aldous_broder_maze_32", move |b| {
        b.iter(|| {
            let mut g = fresh_grid();
            generators::aldous_broder(&mut g, &mut rng);
            g
        })
    });
}

fn bench_grid_construction_32(c: &mut Criterion) {
    c.bench_function("grid_construction_32", |b| b.iter(fresh_grid));
}

criterion_group!(
    benches,
    bench_binary_maze_32,
    bench_aldous_broder_maze_32,
    bench_grid_construction_32
);
criterion_main!(benches);
