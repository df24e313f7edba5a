use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators,
    grid::Grid,
    renderers::{self, RenderOptions},
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn large_maze() -> Grid {
    let mut maze_grid = Grid::new(Width(200), Height(200)).expect("valid grid dimensions");
    let mut rng = XorShiftRng::seed_from_u64(200);
    generators::binary_tree(&mut maze_grid, &mut rng);
    maze_grid
}

fn bench_render_image(c: &mut Criterion) {
    let maze_grid = large_maze();
    let render_options = RenderOptions::default();
    c.bench_function("render_image_200", move |b| {
        b.iter(|| renderers::render_square_grid(&maze_grid, &render_options))
    });
}

fn bench_render_text(c: &mut Criterion) {
    let maze_grid = large_maze();
    c.bench_function("render_text_200", move |b| b.iter(|| maze_grid.to_string()));
}

criterion_group!(benches, bench_render_image, bench_render_text);
criterion_main!(benches);
