// Physics: kinematic bodies resolved against static AABB terrain

pub mod body;
mod collision;
mod config;

pub use body::{KinematicBody, MoveResult};
pub use collision::{StaticCollider, StaticColliderSet, TerrainKind};
pub use config::PhysicsConfig;

use crate::core::Aabb;

/// Errors raised while building physics data
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    #[error("Collider {index} has a non-positive or non-finite size: {bounds:?}")]
    DegenerateCollider { index: usize, bounds: Aabb },
}
