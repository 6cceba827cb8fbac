//! Game controller - sequences board operations for each player or timer event
//!
//! The board only knows single steps. The controller decides what a "down"
//! means (move, or lock + clear + spawn), hands out points and skill, tracks
//! pause and game over, and owns the gravity timer including slow motion.

use crate::config::{GameConfig, Randomizer};
use crate::core::{
    calculate_drop_score, BagBrickGenerator, BombBlast, Board, BoardError, ClearRow,
    RandomBrickGenerator, ViewData,
};
use crate::timer::DropTimer;
use crate::types::{EventSource, GameAction, PowerUp, SOFT_DROP_POINTS};

/// Result of a down or hard-drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownData {
    /// Present when the brick locked; `lines_removed` may be 0.
    pub clear_row: Option<ClearRow>,
    pub view_data: ViewData,
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    config: GameConfig,
    timer: DropTimer,
    paused: bool,
    game_over: bool,
}

impl Game {
    /// Build a board from `config` and start a game on it.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = match config.randomizer {
            Randomizer::Uniform => Board::with_generator(
                config.rows,
                config.cols,
                RandomBrickGenerator::new(config.seed),
            )?,
            Randomizer::Bag => Board::with_generator(
                config.rows,
                config.cols,
                BagBrickGenerator::new(config.seed),
            )?,
        };
        Ok(Self::with_board(board, config))
    }

    /// Drive an existing board, e.g. one with a scripted generator.
    pub fn with_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            config,
            timer: DropTimer::new(),
            paused: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn view_data(&self) -> ViewData {
        self.board.snapshot_view()
    }

    /// Points go to the score and feed skill accrual.
    fn reward(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.board.add_score(points);
        self.board.award_skill_points(points);
    }

    /// Lock the active brick, clear rows and bring in the next brick.
    fn lock_and_spawn(&mut self) -> ClearRow {
        self.board.merge_brick_to_background();
        let cleared = self.board.clear_rows();
        self.reward(cleared.score_bonus);
        if self.board.create_new_brick() {
            self.game_over = true;
        }
        cleared
    }

    /// A hold that lands the incoming brick on locked cells ends the game,
    /// the same as a blocked spawn.
    fn hold(&mut self) -> bool {
        let held = self.board.hold_brick();
        if held && self.board.is_brick_blocked() {
            self.game_over = true;
        }
        held
    }

    /// Gravity or player soft drop.
    pub fn on_down(&mut self, source: EventSource) -> DownData {
        let clear_row = if self.board.move_brick_down() {
            if source == EventSource::User {
                self.reward(SOFT_DROP_POINTS);
            }
            None
        } else {
            Some(self.lock_and_spawn())
        };

        DownData {
            clear_row,
            view_data: self.board.snapshot_view(),
        }
    }

    pub fn on_hard_drop(&mut self) -> DownData {
        let distance = self.board.hard_drop_distance();
        self.board.hard_drop_brick();
        self.reward(calculate_drop_score(distance, true));
        let clear_row = self.lock_and_spawn();

        DownData {
            clear_row: Some(clear_row),
            view_data: self.board.snapshot_view(),
        }
    }

    pub fn on_left(&mut self) -> ViewData {
        self.board.move_brick_left();
        self.board.snapshot_view()
    }

    pub fn on_right(&mut self) -> ViewData {
        self.board.move_brick_right();
        self.board.snapshot_view()
    }

    pub fn on_rotate(&mut self) -> ViewData {
        self.board.rotate_left_brick();
        self.board.snapshot_view()
    }

    pub fn on_hold(&mut self) -> ViewData {
        self.hold();
        self.board.snapshot_view()
    }

    pub fn purchase_power_up(&mut self, kind: PowerUp) -> bool {
        self.board.purchase_power_up(kind)
    }

    /// Use one owned power-up. Slow motion also opens the timer's slow window.
    pub fn activate_power_up(&mut self, kind: PowerUp) -> bool {
        let activated = self.board.activate_power_up(kind);
        if self.board.take_slow_motion_request() {
            self.timer.start_slow_motion();
        }
        activated
    }

    pub fn take_bomb_blast(&mut self) -> Option<BombBlast> {
        self.board.take_bomb_blast()
    }

    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    pub fn new_game(&mut self) {
        self.board.new_game();
        self.timer.reset();
        self.paused = false;
        self.game_over = false;
    }

    /// Apply a player action. Returns whether anything happened.
    ///
    /// While paused or after game over only `Pause` and `NewGame` are honoured.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !action.is_meta() && (self.paused || self.game_over) {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.board.move_brick_left(),
            GameAction::MoveRight => self.board.move_brick_right(),
            GameAction::Rotate => self.board.rotate_left_brick(),
            GameAction::Hold => self.hold(),
            GameAction::SoftDrop => {
                self.on_down(EventSource::User);
                true
            }
            GameAction::HardDrop => {
                self.on_hard_drop();
                true
            }
            GameAction::UsePowerUp(kind) => self.activate_power_up(kind),
            GameAction::BuyPowerUp(kind) => self.purchase_power_up(kind),
            GameAction::Pause => {
                self.toggle_pause();
                !self.game_over
            }
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    /// Advance gravity by `elapsed_ms`. Returns true if the brick moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        let drops = self.timer.advance(elapsed_ms);
        for _ in 0..drops {
            self.on_down(EventSource::Tick);
            if self.game_over {
                break;
            }
        }
        drops > 0
    }
}
