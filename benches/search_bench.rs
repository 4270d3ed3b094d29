use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use unbeatable::{
    Board, Player,
    search::{choose_move, choose_move_exhaustive},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

fn bench_center_taken(c: &mut Criterion) {
    // X opened in the center: the deepest full search the engine ever runs
    c.bench_function("alpha_beta_center_opening", |b| {
        let position = board("....X....");
        b.iter(|| {
            let mut position = position;
            choose_move(black_box(&mut position))
        });
    });
}

fn bench_center_taken_unpruned(c: &mut Criterion) {
    c.bench_function("plain_minimax_center_opening", |b| {
        let position = board("....X....");
        b.iter(|| {
            let mut position = position;
            choose_move_exhaustive(black_box(&mut position))
        });
    });
}

fn bench_midgame(c: &mut Criterion) {
    c.bench_function("alpha_beta_midgame", |b| {
        // X . .
        // . O .
        // . . X
        let position = board("X...O...X");
        b.iter(|| {
            let mut position = position;
            choose_move(black_box(&mut position))
        });
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_first_free_cell", |b| {
        b.iter(|| {
            let mut position = Board::new();
            while !position.is_terminal() {
                let human = position.legal_moves()[0];
                position.place(human, Player::X);
                if position.is_terminal() {
                    break;
                }
                let reply = choose_move(&mut position);
                position.place(reply, Player::O);
            }
            black_box(position)
        });
    });
}

criterion_group!(
    benches,
    bench_center_taken,
    bench_center_taken_unpruned,
    bench_midgame,
    bench_full_game
);
criterion_main!(benches);
