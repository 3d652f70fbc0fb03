//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from the rules engine, the terminal view and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 14 rows (indexed 0-13, top to bottom; row 13 is the floor)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `GRAVITY_STEP_MS` | 50 | Time between two gravity steps while settling |
//! | `DEFAULT_MIN_MATCH` | 3 | Smallest group that may be cleared |
//! | `DEFAULT_HISTORY_LEN` | 2 | Recent colors the randomizer tries to avoid |
//! | `DEFAULT_ROLLS` | 3 | Draw attempts before the randomizer gives up avoiding repeats |
//!
//! # Examples
//!
//! ```
//! use tui_collapse_types::{Block, ColorId, Difficulty, GRID_HEIGHT, GRID_WIDTH};
//!
//! let block = Block::new(ColorId::Red);
//! assert!(!block.is_empty());
//! assert!(Block::default().is_empty());
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(ColorId::from_id(42), None);
//!
//! assert_eq!(GRID_WIDTH, 8);
//! assert_eq!(GRID_HEIGHT, 14);
//! ```

/// Grid width in cells (8 columns)
pub const GRID_WIDTH: u8 = 8;

/// Grid height in cells (14 rows)
pub const GRID_HEIGHT: u8 = 14;

/// Total number of cells on the grid
pub const GRID_SIZE: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between two gravity steps while the grid is settling
pub const GRAVITY_STEP_MS: u32 = 50;

/// Smallest connected group a player may clear
pub const DEFAULT_MIN_MATCH: usize = 3;

/// Number of recent draws the randomizer avoids repeating
pub const DEFAULT_HISTORY_LEN: usize = 2;

/// Draw attempts per randomizer call before falling back to a repeat
pub const DEFAULT_ROLLS: u32 = 3;


/// Block colors.
///
/// `Empty` is the color of a cell that holds no block. It is never a playable
/// color and never takes part in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorId {
    #[default]
    Empty,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    White,
}

impl ColorId {
    /// All colors in id order, `Empty` first.
    pub const ALL: [ColorId; 9] = [
        ColorId::Empty,
        ColorId::Red,
        ColorId::Orange,
        ColorId::Yellow,
        ColorId::Green,
        ColorId::Cyan,
        ColorId::Blue,
        ColorId::Magenta,
        ColorId::White,
    ];

    /// Look up a color by its numeric id.
    ///
    /// An unknown id yields `None`, which is deliberately different from
    /// `Some(ColorId::Empty)`: the first is a bad id, the second an empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_collapse_types::ColorId;
    ///
    /// assert_eq!(ColorId::from_id(0), Some(ColorId::Empty));
    /// assert_eq!(ColorId::from_id(1), Some(ColorId::Red));
    /// assert_eq!(ColorId::from_id(9), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Numeric id (`Empty` is 0)
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == ColorId::Empty
    }

    /// Parse the one-letter form (case-insensitive, `.` or space for empty)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_collapse_types::ColorId;
    ///
    /// assert_eq!(ColorId::from_char('r'), Some(ColorId::Red));
    /// assert_eq!(ColorId::from_char('.'), Some(ColorId::Empty));
    /// assert_eq!(ColorId::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' | ' ' => Some(ColorId::Empty),
            'R' => Some(ColorId::Red),
            'O' => Some(ColorId::Orange),
            'Y' => Some(ColorId::Yellow),
            'G' => Some(ColorId::Green),
            'C' => Some(ColorId::Cyan),
            'B' => Some(ColorId::Blue),
            'M' => Some(ColorId::Magenta),
            'W' => Some(ColorId::White),
            _ => None,
        }
    }

    /// One-letter form, inverse of [`ColorId::from_char`]
    pub fn as_char(self) -> char {
        match self {
            ColorId::Empty => '.',
            ColorId::Red => 'R',
            ColorId::Orange => 'O',
            ColorId::Yellow => 'Y',
            ColorId::Green => 'G',
            ColorId::Cyan => 'C',
            ColorId::Blue => 'B',
            ColorId::Magenta => 'M',
            ColorId::White => 'W',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorId::Empty => "empty",
            ColorId::Red => "red",
            ColorId::Orange => "orange",
            ColorId::Yellow => "yellow",
            ColorId::Green => "green",
            ColorId::Cyan => "cyan",
            ColorId::Blue => "blue",
            ColorId::Magenta => "magenta",
            ColorId::White => "white",
        }
    }
}

/// A single grid cell.
///
/// `marked` is transient: it is set by match detection and must be cleared
/// (or the block deleted) before the next public grid operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub color: ColorId,
    pub marked: bool,
}

impl Block {
    /// An unmarked block of the given color
    pub const fn new(color: ColorId) -> Self {
        Self {
            color,
            marked: false,
        }
    }

    /// The empty, unmarked block
    pub const EMPTY: Block = Block::new(ColorId::Empty);

    /// Reset to `{Empty, unmarked}`
    pub fn reset(&mut self) {
        *self = Block::EMPTY;
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }
}

/// Difficulty tiers.
///
/// Each tier plays with a fixed set of colors; harder tiers add colors on top
/// of the easier tiers' sets (3, 4, 5 and 6 colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_collapse_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Extreme"), Some(Difficulty::Extreme));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "extreme" => Some(Difficulty::Extreme),
            _ => None,
        }
    }

    /// Tier by numeric id (0 = Easy .. 3 = Extreme)
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// The next tier, wrapping from Extreme back to Easy
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Extreme,
            Difficulty::Extreme => Difficulty::Easy,
        }
    }
}

/// Player actions that drive a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the cursor one cell left
    MoveLeft,
    /// Move the cursor one cell right
    MoveRight,
    /// Move the cursor one cell up
    MoveUp,
    /// Move the cursor one cell down
    MoveDown,
    /// Clear the group under the cursor
    Clear,
    /// Start a new board at the current difficulty
    Restart,
    /// Start a new board at the next difficulty
    CycleDifficulty,
}

impl PlayerAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_collapse_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("moveLeft"), Some(PlayerAction::MoveLeft));
    /// assert_eq!(PlayerAction::from_str("clear"), Some(PlayerAction::Clear));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(PlayerAction::MoveLeft),
            "moveright" => Some(PlayerAction::MoveRight),
            "moveup" => Some(PlayerAction::MoveUp),
            "movedown" => Some(PlayerAction::MoveDown),
            "clear" => Some(PlayerAction::Clear),
            "restart" => Some(PlayerAction::Restart),
            "cycledifficulty" => Some(PlayerAction::CycleDifficulty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveLeft => "moveLeft",
            PlayerAction::MoveRight => "moveRight",
            PlayerAction::MoveUp => "moveUp",
            PlayerAction::MoveDown => "moveDown",
            PlayerAction::Clear => "clear",
            PlayerAction::Restart => "restart",
            PlayerAction::CycleDifficulty => "cycleDifficulty",
        }
    }
}
