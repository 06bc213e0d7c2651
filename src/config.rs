//! Game configuration
//!
//! Board dimensions and the random seed used to draw secrets.

use crate::core::GameColor;
use crate::error::{MastermindError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Standard number of pegs per code
pub const DEFAULT_PEGS: usize = 4;

/// Standard number of colors
pub const DEFAULT_COLORS: usize = 6;

/// Standard number of rows on a board
pub const DEFAULT_ROWS: usize = 12;

/// Dimensions of a game and the seed for its secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pegs per code
    pub pegs: usize,
    /// Size of the alphabet, taken from the front of [`GameColor::ALL`]
    pub colors: usize,
    /// Guesses available before the game is lost
    pub max_rows: usize,
    /// Seed for secret generation; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pegs: DEFAULT_PEGS,
            colors: DEFAULT_COLORS,
            max_rows: DEFAULT_ROWS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check that a board can be built from this configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for zero pegs, zero rows, zero colors,
    /// or more colors than the alphabet holds.
    pub fn validate(&self) -> Result<()> {
        if self.pegs == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "a code needs at least one peg".to_string(),
            ));
        }
        if self.max_rows == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "a board needs at least one row".to_string(),
            ));
        }
        if self.colors == 0 || self.colors > GameColor::COUNT {
            return Err(MastermindError::InvalidConfiguration(format!(
                "number of colors must be between 1 and {}, got {}",
                GameColor::COUNT,
                self.colors
            )));
        }
        Ok(())
    }

    /// Colors in play, a prefix of [`GameColor::ALL`]
    #[must_use]
    pub fn alphabet(&self) -> &'static [GameColor] {
        &GameColor::ALL[..self.colors.min(GameColor::COUNT)]
    }

    /// Random generator for secrets, reproducible when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Number of distinct codes on this board
    #[must_use]
    pub fn code_space(&self) -> usize {
        self.colors.saturating_pow(self.pegs as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.pegs, 4);
        assert_eq!(config.colors, 6);
        assert_eq!(config.max_rows, 12);
        assert!(config.validate().is_ok());
        assert_eq!(config.alphabet(), &GameColor::ALL);
        assert_eq!(config.code_space(), 1296);
    }

    #[test]
    fn invalid_configurations() {
        for config in [
            GameConfig {
                pegs: 0,
                ..GameConfig::default()
            },
            GameConfig {
                max_rows: 0,
                ..GameConfig::default()
            },
            GameConfig {
                colors: 0,
                ..GameConfig::default()
            },
            GameConfig {
                colors: 7,
                ..GameConfig::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(MastermindError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn smaller_alphabet_is_prefix() {
        let config = GameConfig {
            colors: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.alphabet(),
            &[GameColor::Blue, GameColor::Green, GameColor::Orange]
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
