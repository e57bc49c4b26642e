//! Benchmarks for epoch scoring and whole-match playouts.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kingdoms::board::Position;
use kingdoms::core::{GameRng, GameState, MatchConfig};
use kingdoms::playout::{play_match, PlayoutConfig, RandomPolicy};
use kingdoms::scoring::ScoringEngine;
use kingdoms::supply::shuffled_deck;

/// A 4-player epoch-1 state with every cell covered by tiles and castles.
fn full_board_state(seed: u64) -> GameState {
    let mut state = GameState::new(&MatchConfig::seated(seed, 4)).unwrap();
    let mut rng = GameRng::new(seed);
    let mut cells: Vec<Position> = Position::all().collect();
    rng.shuffle(&mut cells);

    let castles: Vec<_> = state.players.iter().flat_map(|p| p.castles.iter().take(2).copied()).collect();
    let mut cells = cells.into_iter();
    for (castle, at) in castles.into_iter().zip(cells.by_ref()) {
        state.board.place_castle(at, castle).unwrap();
    }
    for (tile, at) in shuffled_deck(&mut rng).into_iter().zip(cells) {
        state.board.place_tile(at, tile).unwrap();
    }
    state
}

fn bench_score_full_board(c: &mut Criterion) {
    let state = full_board_state(42);
    let engine = ScoringEngine::new();

    c.bench_function("score_full_board_4p", |b| {
        b.iter(|| black_box(engine.score(black_box(&state))));
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = full_board_state(42);

    c.bench_function("state_clone", |b| {
        b.iter(|| black_box(black_box(&state).clone()));
    });
}

fn bench_random_match(c: &mut Criterion) {
    let config = MatchConfig::seated(7, 4);

    c.bench_function("random_match_4p", |b| {
        b.iter(|| {
            let mut policy = RandomPolicy::new(7);
            let report = play_match(black_box(&config), &mut policy, PlayoutConfig::default());
            black_box(report)
        });
    });
}

criterion_group!(benches, bench_score_full_board, bench_state_clone, bench_random_match);
criterion_main!(benches);
