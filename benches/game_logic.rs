use criterion::{black_box, criterion_group, criterion_main, Criterion};
use powerup_tetris::core::{check_removing, clear_bottom_rows, Board, Matrix};
use powerup_tetris::engine::{Game, GameConfig};
use powerup_tetris::types::{PowerUp, BOARD_COLS, BOARD_ROWS};

fn full_bottom_rows(count: usize) -> Matrix {
    let mut grid = Matrix::new(BOARD_ROWS, BOARD_COLS).unwrap();
    for row in (BOARD_ROWS - count)..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            grid.set(row, col, 1);
        }
    }
    grid
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default()).unwrap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.new_game();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let grid = full_bottom_rows(4);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| check_removing(black_box(&grid)))
    });
}

fn bench_row_clearer(c: &mut Criterion) {
    let grid = full_bottom_rows(3);
    c.bench_function("row_clearer", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            clear_bottom_rows(&mut grid, black_box(3))
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default()).unwrap();

    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.new_game();
            }
            game.on_hard_drop()
        })
    });
}

fn bench_rotate_and_move(c: &mut Criterion) {
    let mut board = Board::new(BOARD_ROWS, BOARD_COLS).unwrap();

    c.bench_function("rotate_and_move", |b| {
        b.iter(|| {
            board.rotate_left_brick();
            board.move_brick_right();
            board.move_brick_left()
        })
    });
}

fn bench_bomb(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default()).unwrap();

    c.bench_function("bomb_piece", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.new_game();
            }
            game.purchase_power_up(PowerUp::BombPiece);
            game.activate_power_up(PowerUp::BombPiece);
            game.on_hard_drop();
            game.take_bomb_blast()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_row_clearer,
    bench_hard_drop_cycle,
    bench_rotate_and_move,
    bench_bomb
);
criterion_main!(benches);
