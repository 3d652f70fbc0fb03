//! Session configuration.
//!
//! Defaults come from the constants in `tui_collapse_types`; every field can be
//! overridden through a `COLLAPSE_*` environment variable. Values that do not
//! parse are ignored and the default is kept.

use std::str::FromStr;

use crate::types::{
    Difficulty, DEFAULT_HISTORY_LEN, DEFAULT_MIN_MATCH, DEFAULT_ROLLS, GRAVITY_STEP_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub seed: u32,
    /// Smallest group that may be cleared (at least 1)
    pub min_match: usize,
    /// Randomizer history length
    pub history_len: usize,
    /// Randomizer draw attempts per color (at least 1)
    pub rolls: u32,
    /// Milliseconds between gravity steps while settling
    pub gravity_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 1,
            min_match: DEFAULT_MIN_MATCH,
            history_len: DEFAULT_HISTORY_LEN,
            rolls: DEFAULT_ROLLS,
            gravity_step_ms: GRAVITY_STEP_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `COLLAPSE_DIFFICULTY`: easy | normal | hard | extreme
    /// - `COLLAPSE_SEED`: u32
    /// - `COLLAPSE_MIN_MATCH`: usize
    /// - `COLLAPSE_HISTORY_LEN`: usize
    /// - `COLLAPSE_ROLLS`: u32
    /// - `COLLAPSE_GRAVITY_MS`: u32
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let difficulty = lookup("COLLAPSE_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);

        Self {
            difficulty,
            seed: parse_var(&lookup, "COLLAPSE_SEED").unwrap_or(defaults.seed),
            min_match: parse_var(&lookup, "COLLAPSE_MIN_MATCH").unwrap_or(defaults.min_match),
            history_len: parse_var(&lookup, "COLLAPSE_HISTORY_LEN").unwrap_or(defaults.history_len),
            rolls: parse_var(&lookup, "COLLAPSE_ROLLS").unwrap_or(defaults.rolls),
            gravity_step_ms: parse_var(&lookup, "COLLAPSE_GRAVITY_MS").unwrap_or(defaults.gravity_step_ms),
        }
        .normalized()
    }

    /// Clamp fields into their valid ranges
    pub fn normalized(mut self) -> Self {
        self.min_match = self.min_match.max(1);
        self.rolls = self.rolls.max(1);
        self
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            ("COLLAPSE_DIFFICULTY", "Extreme"),
            ("COLLAPSE_SEED", "42"),
            ("COLLAPSE_MIN_MATCH", " 2 "),
            ("COLLAPSE_HISTORY_LEN", "4"),
            ("COLLAPSE_ROLLS", "8"),
            ("COLLAPSE_GRAVITY_MS", "30"),
        ]));
        assert_eq!(config.difficulty, Difficulty::Extreme);
        assert_eq!(config.seed, 42);
        assert_eq!(config.min_match, 2);
        assert_eq!(config.history_len, 4);
        assert_eq!(config.rolls, 8);
        assert_eq!(config.gravity_step_ms, 30);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("COLLAPSE_DIFFICULTY", "nightmare"),
            ("COLLAPSE_SEED", "-3"),
            ("COLLAPSE_MIN_MATCH", "0"),
            ("COLLAPSE_ROLLS", "0"),
        ]));
        assert_eq!(config.difficulty, Difficulty::default());
        assert_eq!(config.seed, 1);
        assert_eq!(config.min_match, 1);
        assert_eq!(config.rolls, 1);
    }
}
