//! Game state module - one play session on top of the rules engine
//!
//! This module ties the grid, match detection, gravity and the randomizer
//! together into the turn loop: the player picks a cell, a large enough group
//! is removed, and gravity then runs one step per `gravity_step_ms` until the
//! grid is settled. A new board is filled cell by cell from the randomizer and
//! the difficulty's color set.

use tracing::debug;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::palette::color_set;
use crate::rng::Randomizer;
use crate::snapshot::{GameSnapshot, Phase};
use crate::types::{Block, Difficulty, PlayerAction, GRID_HEIGHT, GRID_WIDTH};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    randomizer: Randomizer,
    config: GameConfig,
    cursor_x: i8,
    cursor_y: i8,
    phase: Phase,
    gravity_timer_ms: u32,
    /// Monotonic episode id (increments on every new board).
    episode_id: u32,
    /// Blocks removed on the current board
    cleared: u32,
    /// Successful clears on the current board
    moves: u32,
    started: bool,
    game_over: bool,
    board_cleared: bool,
}

impl GameState {
    /// Create a session; the board stays empty until [`GameState::start`]
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let randomizer = Randomizer::with_seed(config.history_len, config.rolls, config.seed);

        Self {
            grid: Grid::new(),
            randomizer,
            config,
            cursor_x: (GRID_WIDTH / 2) as i8,
            cursor_y: (GRID_HEIGHT - 1) as i8,
            phase: Phase::Idle,
            gravity_timer_ms: 0,
            episode_id: 0,
            cleared: 0,
            moves: 0,
            started: false,
            game_over: false,
            board_cleared: false,
        }
    }

    /// Create a session with default settings and the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// Fill the first board
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.new_board();
    }

    /// Throw the current board away and fill a new one
    pub fn restart(&mut self) {
        self.started = true;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.new_board();
    }

    fn new_board(&mut self) {
        self.grid.reset();
        self.randomizer.clear_history();
        let colors = color_set(self.config.difficulty);

        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                let pick = self.randomizer.next(colors.len() as u32) as usize;
                if let Some(&color) = colors.get(pick) {
                    self.grid.set(x, y, Block::new(color));
                }
            }
        }

        self.phase = Phase::Idle;
        self.gravity_timer_ms = 0;
        self.cleared = 0;
        self.moves = 0;
        self.cursor_x = (GRID_WIDTH / 2) as i8;
        self.cursor_y = (GRID_HEIGHT - 1) as i8;
        self.evaluate_end();

        debug!(
            episode = self.episode_id,
            difficulty = self.config.difficulty.as_str(),
            "new board"
        );
    }

    /// Apply a player action; returns true if anything changed
    pub fn apply_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Restart => {
                self.restart();
                return true;
            }
            PlayerAction::CycleDifficulty => {
                self.config.difficulty = self.config.difficulty.next();
                self.restart();
                return true;
            }
            _ => {}
        }

        if !self.started || self.game_over || self.phase == Phase::Settling {
            return false;
        }

        match action {
            PlayerAction::MoveLeft => self.move_cursor(-1, 0),
            PlayerAction::MoveRight => self.move_cursor(1, 0),
            PlayerAction::MoveUp => self.move_cursor(0, -1),
            PlayerAction::MoveDown => self.move_cursor(0, 1),
            PlayerAction::Clear => self.try_clear() > 0,
            PlayerAction::Restart | PlayerAction::CycleDifficulty => false,
        }
    }

    /// Move the cursor, staying on the grid. Returns false at an edge.
    pub fn move_cursor(&mut self, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.cursor_x.checked_add(dx), self.cursor_y.checked_add(dy))
        else {
            return false;
        };
        if self.grid.is_out_of_bounds(x, y) {
            return false;
        }
        self.cursor_x = x;
        self.cursor_y = y;
        true
    }

    /// Remove the group under the cursor if it is large enough.
    ///
    /// Returns the number of removed blocks (0 if nothing was removed).
    pub fn try_clear(&mut self) -> usize {
        let size = self.grid.find_matches(self.cursor_x, self.cursor_y);
        if size == 0 || size < self.config.min_match {
            self.grid.clear_flags();
            return 0;
        }

        let removed = self.grid.delete_marked();
        self.cleared += removed as u32;
        self.moves += 1;
        self.phase = Phase::Settling;
        self.gravity_timer_ms = 0;
        debug!(
            x = self.cursor_x,
            y = self.cursor_y,
            removed,
            "cleared group"
        );
        removed
    }

    /// Advance time; runs one gravity step per `gravity_step_ms` while settling.
    ///
    /// Returns true if the grid changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        let mut changed = false;
        while self.gravity_timer_ms >= self.config.gravity_step_ms {
            self.gravity_timer_ms -= self.config.gravity_step_ms;
            if !self.grid.apply_gravity() {
                self.phase = Phase::Idle;
                self.gravity_timer_ms = 0;
                self.evaluate_end();
                break;
            }
            changed = true;
        }
        changed
    }

    fn evaluate_end(&mut self) {
        self.board_cleared = self.grid.is_empty();
        self.game_over = !self.grid.has_group_of(self.config.min_match);
        if self.game_over {
            debug!(
                remaining = self.grid.occupied_count(),
                cleared = self.cleared,
                moves = self.moves,
                "no moves left"
            );
        }
    }

    /// Size of the group under the cursor
    pub fn hover_group_size(&self) -> usize {
        self.grid.group_size(self.cursor_x, self.cursor_y)
    }

    /// Copy everything a renderer needs into `snap`
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        for (y, row) in self.grid.cells().chunks(GRID_WIDTH as usize).enumerate() {
            for (x, block) in row.iter().enumerate() {
                snap.board[y][x] = block.color.id();
            }
        }

        // The group only matters when it can be cleared right now.
        if self.phase == Phase::Idle && !self.game_over {
            let group = self.grid.group_cells(self.cursor_x, self.cursor_y);
            if group.len() >= self.config.min_match {
                for &(x, y) in &group {
                    snap.hover[y as usize][x as usize] = true;
                }
            }
            snap.hover_size = group.len() as u16;
        }

        snap.cursor = (self.cursor_x, self.cursor_y);
        snap.phase = self.phase;
        snap.difficulty = self.config.difficulty;
        snap.min_match = self.config.min_match.min(u16::MAX as usize) as u16;
        snap.started = self.started;
        snap.game_over = self.game_over;
        snap.board_cleared = self.board_cleared;
        snap.episode_id = self.episode_id;
        snap.remaining = self.grid.occupied_count() as u16;
        snap.cleared = self.cleared;
        snap.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, for callers that set up custom boards.
    ///
    /// Leaves the session idle; call [`GameState::settle_now`] or tick after
    /// making blocks float.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Run gravity to completion immediately and re-evaluate the board
    pub fn settle_now(&mut self) -> usize {
        let steps = self.grid.settle();
        self.phase = Phase::Idle;
        self.gravity_timer_ms = 0;
        self.evaluate_end();
        steps
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn cursor(&self) -> (i8, i8) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board_cleared(&self) -> bool {
        self.board_cleared
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn cleared(&self) -> u32 {
        self.cleared
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
