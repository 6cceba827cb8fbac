//! Property tests for board invariants over generated grids and action sequences.

use powerup_tetris::core::{
    check_removing, intersect, line_clear_bonus, merge, Board, Brick, Matrix, PowerUpEconomy,
    RandomBrickGenerator, Shape,
};
use powerup_tetris::types::{BrickKind, PowerUp};
use proptest::prelude::*;

const ROWS: usize = 25;
const COLS: usize = 10;

fn sparse_grid() -> impl Strategy<Value = Matrix> {
    let cell = prop_oneof![3 => Just(0u8), 1 => 1u8..=7];
    prop::collection::vec(cell, ROWS * COLS).prop_map(|cells| {
        let rows: Vec<&[u8]> = cells.chunks(COLS).collect();
        Matrix::from_rows(&rows).unwrap()
    })
}

fn tetromino_shape() -> impl Strategy<Value = Shape> {
    (0..BrickKind::ALL.len(), 0..4usize).prop_map(|(kind, rotation)| {
        let brick = Brick::tetromino(BrickKind::ALL[kind]);
        brick.shapes()[rotation % brick.shapes().len()].clone()
    })
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Left,
    Right,
    Down,
    Rotate,
    Hold,
    Drop,
    Bomb,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Left),
        Just(Op::Right),
        Just(Op::Down),
        Just(Op::Rotate),
        Just(Op::Hold),
        Just(Op::Drop),
        Just(Op::Bomb),
    ]
}

proptest! {
    #[test]
    fn merge_never_conflicts_with_itself(
        grid in sparse_grid(),
        shape in tetromino_shape(),
        x in -2i32..10,
        y in -2i32..25,
    ) {
        prop_assume!(!intersect(&grid, &shape, x, y));

        let merged = merge(&grid, &shape, x, y);
        let mut without = merged.clone();
        for (r, c, _) in shape.occupied() {
            without.set((y + r as i32) as usize, (x + c as i32) as usize, 0);
        }

        prop_assert_eq!(&without, &grid);
        prop_assert!(!intersect(&without, &shape, x, y));
    }

    #[test]
    fn check_removing_is_idempotent(grid in sparse_grid(), full in prop::collection::vec(0..ROWS, 0..5)) {
        let mut grid = grid;
        for &row in &full {
            for col in 0..COLS {
                grid.set(row, col, 1);
            }
        }

        let first = check_removing(&grid);
        let second = check_removing(&first.grid);
        prop_assert_eq!(second.lines_removed, 0);
        prop_assert_eq!(&second.grid, &first.grid);
        prop_assert_eq!(first.score_bonus, line_clear_bonus(first.lines_removed));
        prop_assert_eq!(
            first.grid.occupied().count() + first.lines_removed * COLS,
            grid.occupied().count()
        );
    }

    #[test]
    fn line_clear_bonus_is_fifty_times_square(k in 0usize..=4) {
        prop_assert_eq!(line_clear_bonus(k), 50 * (k * k) as u32);
    }

    #[test]
    fn skill_points_never_lose_fractions(awards in prop::collection::vec(0u32..200, 0..50)) {
        let mut economy = PowerUpEconomy::new();
        let mut gained = 0;
        for &award in &awards {
            gained += economy.award(award);
        }

        let total: u32 = awards.iter().sum();
        prop_assert_eq!(economy.skill_points(), total / 10);
        prop_assert_eq!(gained, total / 10);
        let expected = f64::from(total % 10) / 10.0;
        prop_assert!((economy.fractional_skill_points() - expected).abs() < 1e-9);
    }

    #[test]
    fn active_brick_never_overlaps_background(seed in any::<u32>(), ops in prop::collection::vec(op(), 1..200)) {
        let mut board = Board::with_generator(ROWS, COLS, RandomBrickGenerator::new(seed)).unwrap();

        for op in ops {
            match op {
                Op::Left => { board.move_brick_left(); }
                Op::Right => { board.move_brick_right(); }
                Op::Rotate => { board.rotate_left_brick(); }
                Op::Hold => {
                    board.hold_brick();
                    if board.is_brick_blocked() {
                        break;
                    }
                }
                Op::Down | Op::Drop => {
                    if matches!(op, Op::Drop) {
                        board.hard_drop_brick();
                    }
                    if !board.move_brick_down() {
                        board.merge_brick_to_background();
                        let cleared = board.clear_rows();
                        prop_assert_eq!(check_removing(&cleared.grid).lines_removed, 0);
                        if board.create_new_brick() {
                            break;
                        }
                    }
                }
                Op::Bomb => {
                    board.purchase_power_up(PowerUp::BombPiece);
                    board.activate_power_up(PowerUp::BombPiece);
                }
            }

            let offset = board.offset();
            prop_assert!(
                !intersect(board.grid(), board.current_shape(), offset.x, offset.y),
                "active brick overlaps background at {:?}",
                offset
            );
            prop_assert!(board.grid().cells().iter().all(|&v| v <= 7));
        }
    }
}
