use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use term_snake::core::movement::{check_self_collision, tick};
use term_snake::core::{Board, Snake};
use term_snake::types::Direction;

/// A 200x60 board with a 200-segment snake coiled in the top rows
fn long_snake() -> (Board, Snake) {
    let mut board = Board::new(200, 60);
    let mut snake = Snake::new(&mut board);
    for _ in 0..196 {
        snake.add_segment(&mut board);
    }
    snake.set_direction(Direction::Right);
    for _ in 0..50 {
        snake.advance();
    }
    (board, snake)
}

fn bench_advance(c: &mut Criterion) {
    let (_, mut snake) = long_snake();
    let dirs = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];
    let mut i = 0;

    c.bench_function("advance_200_segments", |b| {
        b.iter(|| {
            snake.set_direction(dirs[i % dirs.len()]);
            i += 1;
            snake.advance();
        })
    });
}

fn bench_self_collision(c: &mut Criterion) {
    let (_, snake) = long_snake();

    c.bench_function("self_collision_200_segments", |b| {
        b.iter(|| check_self_collision(black_box(&snake)))
    });
}

fn bench_place_food(c: &mut Criterion) {
    let (mut board, snake) = long_snake();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("place_food", |b| {
        b.iter(|| board.place_food(black_box(&snake), &mut rng))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("tick_fresh_game", |b| {
        b.iter(|| {
            let mut board = Board::new(80, 24);
            let mut snake = Snake::new(&mut board);
            snake.set_direction(Direction::Up);
            tick(&mut board, &mut snake, black_box(&mut rng))
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_self_collision,
    bench_place_food,
    bench_tick
);
criterion_main!(benches);
