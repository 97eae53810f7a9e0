// Game-wide configuration
//
// Each part keeps its own const baseline next to the code that uses it; this
// module bundles them and checks the combination before a world is built.

use glam::Vec2;

use super::player::PlayerStats;
use super::quiz::QuizConfig;
use crate::engine::physics::PhysicsConfig;

/// Window size and title
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl ScreenConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "Adventure Game".to_string(),
        }
    }
}

/// Rejected configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("Friction must lie strictly between 0 and 1, got {0}")]
    InvalidFriction(f32),

    #[error("Jump impulse must point up (negative), got {0}")]
    InvalidJumpImpulse(f32),

    #[error("Question duration must be at least one tick")]
    ZeroQuestionDuration,

    #[error("{field} of {speed} px per tick would pass through {tile}px tiles (limit {limit})")]
    StepTooLarge {
        field: &'static str,
        speed: f32,
        tile: f32,
        limit: f32,
    },
}

/// Everything needed to build a [`World`](super::World)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerStats,
    pub quiz: QuizConfig,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("Screen width", self.screen.width),
            ("Screen height", self.screen.height),
            ("Gravity", self.physics.gravity),
            ("Terminal velocity", self.physics.terminal_velocity),
            ("Acceleration", self.player.acceleration),
            ("Max speed", self.player.max_speed),
            ("Player width", self.player.width),
            ("Player height", self.player.height),
            ("Interaction radius", self.quiz.interaction_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let friction = self.player.friction;
        if !(friction > 0.0 && friction < 1.0) {
            return Err(ConfigError::InvalidFriction(friction));
        }
        if !(self.player.jump_impulse < 0.0) {
            return Err(ConfigError::InvalidJumpImpulse(self.player.jump_impulse));
        }
        if self.quiz.question_duration == 0 {
            return Err(ConfigError::ZeroQuestionDuration);
        }
        Ok(())
    }

    /// Reject speeds that let the player skip over a tile in one tick
    ///
    /// Overlap is strict, so a step misses a tile only when it covers the
    /// tile and the player's hitbox together.
    pub fn check_step_sizes(&self, tile_size: f32) -> Result<(), ConfigError> {
        let vertical = tile_size + self.player.height;
        let horizontal = tile_size + self.player.width;
        let steps = [
            ("Terminal velocity", self.physics.terminal_velocity, vertical),
            ("Jump impulse", self.player.jump_impulse.abs(), vertical),
            ("Max speed", self.player.max_speed, horizontal),
        ];
        for (field, speed, limit) in steps {
            if speed >= limit {
                return Err(ConfigError::StepTooLarge {
                    field,
                    speed,
                    tile: tile_size,
                    limit,
                });
            }
        }
        Ok(())
    }
}
