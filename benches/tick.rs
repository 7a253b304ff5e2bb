use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use snakes_hunger_games::{types::Orientation, Arena, Snake};

fn lanes(count: i32) -> Arena {
    let mut arena = Arena::new(count as u32 * 2, 1000, 1000).unwrap();
    arena
        .add_snakes((0..count).map(|i| Snake::new(i * 2, 0, Orientation::Up)))
        .unwrap();
    arena
}

fn scattered(rng: &mut SmallRng, count: usize) -> Arena {
    let mut arena = Arena::new(50, 50, 1000).unwrap();
    for _ in 0..count {
        let orientation = *Orientation::ALL.choose(rng).unwrap();
        let mut snake = Snake::new(rng.gen_range(0..50), rng.gen_range(0..50), orientation);
        for _ in 0..rng.gen_range(0..8) {
            snake.grow_up().unwrap();
        }
        arena.add_snake(snake).unwrap();
    }
    arena
}

fn bench_tick_lanes(c: &mut Criterion) {
    let arena = lanes(32);
    c.bench_function("tick 32 snakes in lanes", |b| {
        b.iter_batched(
            || arena.clone(),
            |mut arena| arena.tick(black_box(&mut ())),
            BatchSize::SmallInput,
        )
    });
}

fn bench_tick_scattered(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let arena = scattered(&mut rng, 64);
    c.bench_function("tick 64 scattered snakes", |b| {
        b.iter_batched(
            || arena.clone(),
            |mut arena| arena.tick(black_box(&mut ())),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_tick_lanes, bench_tick_scattered);
criterion_main!(benches);
