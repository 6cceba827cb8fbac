//! Power-up tests - economy, activation order and the three effects end to end

use powerup_tetris::core::{Board, FixedBrickGenerator, Matrix, PowerUpEconomy};
use powerup_tetris::types::{BrickKind, PowerUp};

fn o_board() -> Board {
    Board::with_generator(25, 10, FixedBrickGenerator::new(BrickKind::O)).unwrap()
}

fn filled(rows: std::ops::Range<usize>) -> Matrix {
    let mut grid = Matrix::new(25, 10).unwrap();
    for row in rows {
        for col in 0..10 {
            grid.set(row, col, 1);
        }
    }
    grid
}

#[test]
fn test_skill_points_accrue_across_small_awards() {
    let mut economy = PowerUpEconomy::new();
    economy.award(5);
    economy.award(5);
    assert_eq!(economy.skill_points(), 1);

    let mut economy = PowerUpEconomy::new();
    assert_eq!(economy.award(25), 2);
    assert_eq!(economy.skill_points(), 2);
    assert!((economy.fractional_skill_points() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_power_up_metadata() {
    for kind in PowerUp::ALL {
        assert_eq!(kind.cost(), 0);
        assert!(!kind.name().is_empty());
        assert!(!kind.description().is_empty());
    }
    assert_eq!(PowerUp::from_str("bombPiece"), Some(PowerUp::BombPiece));
}

#[test]
fn test_activation_without_inventory_has_no_effect() {
    let mut board = o_board();
    board.load_grid(filled(22..25)).unwrap();
    let before = board.snapshot_grid();

    for kind in PowerUp::ALL {
        assert!(!board.activate_power_up(kind));
    }
    assert_eq!(board.snapshot_grid(), before);
    assert!(!board.is_bomb_armed());
    assert!(!board.take_slow_motion_request());
}

#[test]
fn test_row_clearer_end_to_end() {
    let mut board = o_board();
    let mut grid = filled(22..25);
    grid.set(21, 2, 7);
    grid.set(15, 9, 3);
    board.load_grid(grid).unwrap();

    assert!(board.purchase_power_up(PowerUp::RowClearer));
    assert!(board.activate_power_up(PowerUp::RowClearer));

    assert_eq!(board.economy().quantity(PowerUp::RowClearer), 0);
    assert_eq!(board.grid().get(24, 2), Some(7));
    assert_eq!(board.grid().get(18, 9), Some(3));
    assert_eq!(board.grid().occupied().count(), 2);
}

#[test]
fn test_row_clearer_consumes_unit_even_on_tiny_board() {
    // Two rows cannot lose three: the effect fails but the unit is spent
    let mut board = Board::with_generator(2, 10, FixedBrickGenerator::new(BrickKind::I)).unwrap();
    board.purchase_power_up(PowerUp::RowClearer);
    assert!(!board.activate_power_up(PowerUp::RowClearer));
    assert_eq!(board.economy().quantity(PowerUp::RowClearer), 0);
}

#[test]
fn test_bomb_piece_end_to_end() {
    let mut board = o_board();
    board.load_grid(filled(20..25)).unwrap();
    board.purchase_power_up(PowerUp::BombPiece);
    assert!(board.activate_power_up(PowerUp::BombPiece));
    assert!(board.is_bomb_armed());

    board.hard_drop_brick();
    let y = board.offset().y;
    board.merge_brick_to_background();

    // Center is the O's first cell: shape (1, 1) from the anchor
    let blast = board.pending_bomb_blast().cloned().unwrap();
    assert_eq!((blast.x, blast.y), (5, y + 1));
    for row in (blast.y - 1)..=(blast.y + 2) {
        for col in (blast.x - 1)..=(blast.x + 2) {
            assert_eq!(board.grid().get(row as usize, col as usize), Some(0));
        }
    }
    // No O cells (value 4) anywhere
    assert!(board.grid().occupied().all(|(_, _, v)| v != 4));
    assert!(!board.is_bomb_armed());

    assert_eq!(board.take_bomb_blast(), Some(blast));
    assert_eq!(board.take_bomb_blast(), None);
}

#[test]
fn test_bomb_is_one_shot() {
    let mut board = o_board();
    board.set_bomb_piece(true);
    board.hard_drop_brick();
    board.merge_brick_to_background();
    assert!(board.grid().is_clear());

    board.create_new_brick();
    board.hard_drop_brick();
    board.merge_brick_to_background();
    assert_eq!(board.grid().occupied().count(), 4);
}

#[test]
fn test_slow_motion_only_raises_a_request() {
    let mut board = o_board();
    board.purchase_power_up(PowerUp::SlowMotion);
    let before = board.snapshot_grid();
    assert!(board.activate_power_up(PowerUp::SlowMotion));
    assert_eq!(board.snapshot_grid(), before);
    assert!(board.take_slow_motion_request());
    assert!(!board.take_slow_motion_request());
}
