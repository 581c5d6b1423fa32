//! Game configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SHAPI_LEVEL` | 1 | Starting level (1-3) |
//! | `SHAPI_SEED` | 1 | Tray shuffle seed |
//! | `SHAPI_TOKENS` | 2 | Tokens dealt per shape (1-9) |
//! | `SHAPI_SHAPES` | unset | Comma-separated shapes overriding every level's set |
//!
//! Malformed numbers fall back to their defaults. An unknown shape name in
//! `SHAPI_SHAPES` is an error.

use crate::error::ShapeError;
use crate::shape::parse_shape_list;
use crate::types::{GameLevel, ShapeKind, DEFAULT_TOKENS_PER_SHAPE, MAX_TOKENS_PER_SHAPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub start_level: GameLevel,
    pub seed: u32,
    pub tokens_per_shape: u8,
    /// Replaces the level's shape set when present.
    pub shapes: Option<Vec<ShapeKind>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: GameLevel::Level1,
            seed: 1,
            tokens_per_shape: DEFAULT_TOKENS_PER_SHAPE,
            shapes: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ShapeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShapeError> {
        let defaults = Self::default();

        let start_level = lookup("SHAPI_LEVEL")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .and_then(GameLevel::from_number)
            .unwrap_or(defaults.start_level);

        let seed = lookup("SHAPI_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let tokens_per_shape = lookup("SHAPI_TOKENS")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .unwrap_or(defaults.tokens_per_shape)
            .clamp(1, MAX_TOKENS_PER_SHAPE);

        let shapes = match lookup("SHAPI_SHAPES") {
            Some(list) if !list.trim().is_empty() => {
                let shapes = parse_shape_list(&list)?;
                (!shapes.is_empty()).then_some(shapes)
            }
            _ => None,
        };

        Ok(Self {
            start_level,
            seed,
            tokens_per_shape,
            shapes,
        })
    }

    /// Shapes in play at `level` under this configuration.
    pub fn shapes_for(&self, level: GameLevel) -> Vec<ShapeKind> {
        match &self.shapes {
            Some(shapes) => shapes.clone(),
            None => level.shapes().to_vec(),
        }
    }
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
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(lookup(&[])), Ok(GameConfig::default()));
    }

    #[test]
    fn reads_every_variable() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SHAPI_LEVEL", "3"),
            ("SHAPI_SEED", "99"),
            ("SHAPI_TOKENS", "4"),
            ("SHAPI_SHAPES", "diamond,circle"),
        ]))
        .unwrap();
        assert_eq!(cfg.start_level, GameLevel::Level3);
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.tokens_per_shape, 4);
        assert_eq!(
            cfg.shapes_for(GameLevel::Level1),
            vec![ShapeKind::Diamond, ShapeKind::Circle]
        );
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SHAPI_LEVEL", "7"),
            ("SHAPI_SEED", "abc"),
            ("SHAPI_TOKENS", "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.start_level, GameLevel::Level1);
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.tokens_per_shape, 1);
        assert_eq!(cfg.shapes_for(GameLevel::Level2), GameLevel::Level2.shapes().to_vec());
    }

    #[test]
    fn token_count_is_capped() {
        let cfg = GameConfig::from_lookup(lookup(&[("SHAPI_TOKENS", "200")])).unwrap();
        assert_eq!(cfg.tokens_per_shape, MAX_TOKENS_PER_SHAPE);
    }

    #[test]
    fn unknown_shape_name_is_an_error() {
        assert_eq!(
            GameConfig::from_lookup(lookup(&[("SHAPI_SHAPES", "circle,hexagon")])),
            Err(ShapeError::UnsupportedShape("hexagon".to_string()))
        );
    }
}
