// Player character
//
// This module contains everything the player needs:
// - Movement stats and the controller driving the kinematic body
// - Jump state machine and derived visual state
// - Tick-based animation counters

pub mod animation;
pub mod controller;
pub mod state;
pub mod stats;

pub use animation::AnimationPlayer;
pub use controller::PlayerController;
pub use state::{Facing, PlayerState};
pub use stats::PlayerStats;
