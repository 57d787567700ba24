use criterion::{Criterion, black_box, criterion_group, criterion_main};
use maze_core::{Cell, GridMaze};
use maze_gen::{WeightConfig, generate, randomize_weights};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROWS: i32 = 50;
const COLS: i32 = 50;

fn weighted_maze() -> GridMaze {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut m = GridMaze::new(ROWS, COLS).unwrap();
    randomize_weights(&mut m, &mut rng, &WeightConfig::default()).unwrap();
    m
}

pub fn kruskal_generate(c: &mut Criterion) {
    let template = weighted_maze();
    c.bench_function("kruskal_generate", |b| {
        b.iter(|| {
            let mut m = template.clone();
            generate(black_box(&mut m)).unwrap();
        })
    });
}

pub fn solve_generated(c: &mut Criterion) {
    let mut m = weighted_maze();
    generate(&mut m).unwrap();
    m.add_exit(Cell::new(ROWS - 1, COLS - 1)).unwrap();

    c.bench_function("solve_single", |b| {
        b.iter(|| maze_paths::solve_single(black_box(&m), Cell::new(0, 0)).unwrap())
    });

    let entrances = [Cell::new(0, 0), Cell::new(0, COLS - 1)];
    let exits = [Cell::new(ROWS - 1, COLS - 1), Cell::new(ROWS - 1, 0)];
    c.bench_function("solve_exclusive", |b| {
        b.iter(|| maze_paths::solve_exclusive(black_box(&m), &entrances, &exits).unwrap())
    });
    c.bench_function("solve_heuristic", |b| {
        b.iter(|| maze_paths::solve_heuristic(black_box(&m), &entrances, &exits).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = kruskal_generate, solve_generated}
criterion_main!(benches);
