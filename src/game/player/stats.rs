// Player movement tuning
//
// All values are per fixed tick at 60 Hz, in screen pixels (y grows down).

/// Movement constants for the player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    /// Horizontal speed gained per tick while a direction is held
    pub acceleration: f32,
    /// Multiplier applied to horizontal speed per tick with no input, in (0, 1)
    pub friction: f32,
    /// Horizontal speed cap in either direction
    pub max_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Horizontal speed above which the player counts as running
    pub run_threshold: f32,

    // Dimensions (hitbox)
    pub width: f32,
    pub height: f32,
}

/// The one set of stats the player uses
pub const BASE_STATS: PlayerStats = PlayerStats {
    acceleration: 0.8,
    friction: 0.85,
    max_speed: 8.0,
    jump_impulse: -16.0,
    run_threshold: 0.5,

    // 32px sprite drawn at 2x
    width: 64.0,
    height: 64.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}
