use crate::types::{ColorId, Difficulty, GRID_HEIGHT, GRID_WIDTH};

/// Whether blocks are still moving after a clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for player input
    #[default]
    Idle,
    /// Gravity is running; input other than restart is ignored
    Settling,
}

/// Plain-data copy of a session, for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color ids (`ColorId::id`), `[y][x]`
    pub board: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    /// Cells of the group under the cursor, `[y][x]`
    pub hover: [[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub hover_size: u16,
    pub cursor: (i8, i8),
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub min_match: u16,
    pub started: bool,
    pub game_over: bool,
    pub board_cleared: bool,
    pub episode_id: u32,
    pub remaining: u16,
    pub cleared: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Color at (x, y); unknown ids and out-of-range cells read as empty
    pub fn color_at(&self, x: usize, y: usize) -> ColorId {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&id| ColorId::from_id(id))
            .unwrap_or(ColorId::Empty)
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over && self.phase == Phase::Idle
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[ColorId::Empty.id(); GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            hover: [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            hover_size: 0,
            cursor: (0, 0),
            phase: Phase::Idle,
            difficulty: Difficulty::default(),
            min_match: 0,
            started: false,
            game_over: false,
            board_cleared: false,
            episode_id: 0,
            remaining: 0,
            cleared: 0,
            moves: 0,
        }
    }
}
