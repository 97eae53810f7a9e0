// Game layer: entities, level, quiz and the world that steps them

pub mod config;
pub mod entity;
pub mod interaction;
pub mod level;
pub mod npc;
pub mod player;
pub mod quiz;
pub mod snapshot;
pub mod world;

pub use config::{ConfigError, GameConfig};
pub use level::{LevelData, LevelError};
pub use quiz::{bpjs_questions, QuizError};
pub use world::{TickEvents, World};

/// Anything that can stop a world from being built
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid level: {0}")]
    Level(#[from] LevelError),

    #[error("Invalid quiz: {0}")]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert_into_game_error() {
        let err: GameError = QuizError::TooFewQuestions(1).into();
        assert_eq!(
            err.to_string(),
            "Invalid quiz: A question bank needs at least 2 questions, got 1"
        );

        let err: GameError = LevelError::InvalidTileSize(0.0).into();
        assert!(matches!(err, GameError::Level(_)));
    }
}
