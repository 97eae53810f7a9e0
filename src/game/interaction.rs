// Proximity checks between entities

use crate::core::Aabb;

/// Center-to-center distance within which the player can talk to an NPC
pub const DEFAULT_INTERACTION_RADIUS: f32 = 100.0;

/// Are the two boxes' centers within `radius` of each other
///
/// The boundary is inclusive: a distance of exactly `radius` counts.
pub fn can_interact(a: &Aabb, b: &Aabb, radius: f32) -> bool {
    a.center().distance(b.center()) <= radius
}
