use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bowling::core::{Game, RollGenerator};
use bowling::types::RollError;

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("perfect_game_12_rolls", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for _ in 0..12 {
                game.record_roll(black_box(10)).unwrap();
            }
            game.total_score()
        })
    });
}

fn bench_total_score_mid_game(c: &mut Criterion) {
    let mut game = Game::new();
    for pins in [10, 5, 5, 10, 3, 4, 10, 10] {
        game.record_roll(pins).unwrap();
    }

    c.bench_function("total_score_mid_game", |b| {
        b.iter(|| black_box(&game).total_score())
    });
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_seeded", |b| {
        b.iter(|| {
            let mut generator = RollGenerator::with_seed(0, 10, black_box(12345));
            let mut game = Game::new();
            while !game.is_game_over() {
                match game.record_roll(generator.generate()) {
                    Ok(()) | Err(RollError::InvalidRoll { .. }) => {}
                    Err(RollError::GameOver) => break,
                }
            }
            game.total_score()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new();
    for pins in [10, 5, 5, 10, 3, 4] {
        game.record_roll(pins).unwrap();
    }

    c.bench_function("snapshot_capture", |b| b.iter(|| game.snapshot()));
}

criterion_group!(
    benches,
    bench_perfect_game,
    bench_total_score_mid_game,
    bench_random_game,
    bench_snapshot
);
criterion_main!(benches);
