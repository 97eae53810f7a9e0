// World-level physics constants, in pixels and ticks

/// Gravity and fall-speed limits shared by every body in the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Downward acceleration (pixels per tick, per tick)
    pub gravity: f32,
    /// Maximum downward speed (pixels per tick)
    pub terminal_velocity: f32,
}

/// Baseline tuning; gravity matches the jump impulse in `PlayerStats`
pub const BASE_PHYSICS: PhysicsConfig = PhysicsConfig {
    gravity: 0.5,
    // A fall step of tile height plus body height or more can skip a tile
    terminal_velocity: 20.0,
};

impl Default for PhysicsConfig {
    fn default() -> Self {
        BASE_PHYSICS
    }
}
