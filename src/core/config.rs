//! Engine configuration.
//!
//! `GameMode` and `Difficulty` only affect how the computer opponent
//! behaves; board semantics are identical in every configuration.

use serde::{Deserialize, Serialize};

/// Who controls the O seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Both marks are played by people.
    #[default]
    TwoPlayer,
    /// X is played by a person, O by the computer.
    SinglePlayer,
}

impl GameMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::SinglePlayer,
            GameMode::SinglePlayer => GameMode::TwoPlayer,
        }
    }
}

/// Strength of the computer opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Block the human's immediate win, otherwise random.
    Regular,
}

impl Difficulty {
    /// The other difficulty.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Regular,
            Difficulty::Regular => Difficulty::Easy,
        }
    }
}

/// Configuration for a `GameEngine`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial game mode.
    pub mode: GameMode,

    /// Initial computer difficulty.
    pub difficulty: Difficulty,

    /// Seed for the computer's random choices.
    /// `None` seeds from OS entropy; set it for reproducible games.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a new config with the given mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with the given difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_mode(GameMode::SinglePlayer)
            .with_difficulty(Difficulty::Regular)
            .with_seed(7);

        assert_eq!(config.mode, GameMode::SinglePlayer);
        assert_eq!(config.difficulty, Difficulty::Regular);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_toggles() {
        assert_eq!(GameMode::TwoPlayer.toggled(), GameMode::SinglePlayer);
        assert_eq!(GameMode::SinglePlayer.toggled(), GameMode::TwoPlayer);
        assert_eq!(Difficulty::Easy.toggled(), Difficulty::Regular);
        assert_eq!(Difficulty::Regular.toggled(), Difficulty::Easy);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default()
            .with_mode(GameMode::SinglePlayer)
            .with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
