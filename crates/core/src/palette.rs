//! Color sets per difficulty tier.
//!
//! Each tier's set extends the previous one, so a board generated on Easy
//! only uses colors that also exist on Extreme.

use crate::types::{ColorId, Difficulty};

const SET_EASY: [ColorId; 3] = [ColorId::Red, ColorId::Blue, ColorId::Yellow];

const SET_NORMAL: [ColorId; 4] = [ColorId::Red, ColorId::Blue, ColorId::Yellow, ColorId::Green];

const SET_HARD: [ColorId; 5] = [
    ColorId::Red,
    ColorId::Blue,
    ColorId::Yellow,
    ColorId::Green,
    ColorId::Orange,
];

const SET_EXTREME: [ColorId; 6] = [
    ColorId::Red,
    ColorId::Blue,
    ColorId::Yellow,
    ColorId::Green,
    ColorId::Orange,
    ColorId::Magenta,
];

/// Playable colors for a difficulty tier, in draw order
pub fn color_set(difficulty: Difficulty) -> &'static [ColorId] {
    match difficulty {
        Difficulty::Easy => &SET_EASY,
        Difficulty::Normal => &SET_NORMAL,
        Difficulty::Hard => &SET_HARD,
        Difficulty::Extreme => &SET_EXTREME,
    }
}

/// Playable colors for a numeric tier id.
///
/// An unknown id yields an empty set: no playable colors.
pub fn color_set_by_id(id: u8) -> &'static [ColorId] {
    match Difficulty::from_id(id) {
        Some(difficulty) => color_set(difficulty),
        None => &[],
    }
}
