// Player jump state machine and derived animation state

use glam::Vec2;

/// Jump availability
///
/// Only a floor contact restores `Grounded`; walking off a ledge keeps the
/// ground jump available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpState {
    /// Ground jump and double jump both available
    #[default]
    Grounded,
    /// Ground jump used, double jump still available
    FirstJump,
    /// Both jumps used until the next landing
    DoubleJumpSpent,
}

impl JumpState {
    /// Jumps left before landing: 2, 1 or 0
    pub fn charges(&self) -> u8 {
        match self {
            Self::Grounded => 2,
            Self::FirstJump => 1,
            Self::DoubleJumpSpent => 0,
        }
    }

    pub fn double_jump_available(&self) -> bool {
        !matches!(self, Self::DoubleJumpSpent)
    }

    /// State after pressing jump, or `None` when no jump is left
    pub fn after_jump(&self) -> Option<Self> {
        match self {
            Self::Grounded => Some(Self::FirstJump),
            Self::FirstJump => Some(Self::DoubleJumpSpent),
            Self::DoubleJumpSpent => None,
        }
    }
}

/// Which way the sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// What the player is visibly doing this tick
///
/// Derived from velocity and jump state after physics ran; it never feeds
/// back into physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    Jumping,
    DoubleJumping,
    Falling,
}

impl PlayerState {
    /// Classify the player from its post-physics motion
    pub fn derive(velocity: Vec2, jump: JumpState, gravity: f32, run_threshold: f32) -> Self {
        if velocity.y < 0.0 {
            if jump.double_jump_available() {
                Self::Jumping
            } else {
                Self::DoubleJumping
            }
        } else if velocity.y > gravity * 2.0 {
            Self::Falling
        } else if velocity.x.abs() > run_threshold {
            Self::Running
        } else {
            Self::Idle
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping | Self::DoubleJumping | Self::Falling)
    }

    /// Sprite sheet name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "run",
            Self::Jumping => "jump",
            Self::DoubleJumping => "double_jump",
            Self::Falling => "fall",
        }
    }
}
