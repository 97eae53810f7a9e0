use crate::core::{Aabb, Axis};

use super::PhysicsError;

/// What a static block is made of
///
/// Both kinds are fully solid; the distinction is kept for level tooling and
/// for the renderer, which draws them with different tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerrainKind {
    /// Ground row along the bottom of the level
    #[default]
    Ground,
    /// Floating platforms
    Platform,
}

impl TerrainKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Platform => "platform",
        }
    }
}

/// A solid, immovable rectangle of level geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub bounds: Aabb,
    pub kind: TerrainKind,
}

impl StaticCollider {
    pub fn new(bounds: Aabb, kind: TerrainKind) -> Self {
        Self { bounds, kind }
    }
}

/// The level's solid terrain
///
/// Built once at level load and never mutated afterwards. Iteration order is
/// insertion order, which matters for horizontal resolution (first hit wins).
#[derive(Debug, Clone, Default)]
pub struct StaticColliderSet {
    colliders: Vec<StaticCollider>,
}

impl StaticColliderSet {
    /// Build a collider set, rejecting degenerate boxes
    pub fn new(colliders: Vec<StaticCollider>) -> Result<Self, PhysicsError> {
        if let Some(index) = colliders.iter().position(|c| !c.bounds.is_valid()) {
            return Err(PhysicsError::DegenerateCollider {
                index,
                bounds: colliders[index].bounds,
            });
        }
        Ok(Self { colliders })
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaticCollider> {
        self.colliders.iter()
    }

    /// First collider in iteration order overlapping `bounds`
    pub fn first_overlap(&self, bounds: &Aabb) -> Option<(usize, &StaticCollider)> {
        self.colliders
            .iter()
            .enumerate()
            .find(|(_, c)| c.bounds.overlaps(bounds))
    }

    /// Overlapping collider with the smallest penetration along `axis`
    ///
    /// Ties keep the earlier collider.
    pub fn nearest_overlap(&self, bounds: &Aabb, axis: Axis) -> Option<(usize, &StaticCollider)> {
        let mut best: Option<(usize, &StaticCollider, f32)> = None;
        for (index, collider) in self.colliders.iter().enumerate() {
            if !collider.bounds.overlaps(bounds) {
                continue;
            }
            let depth = bounds.penetration(&collider.bounds, axis);
            match best {
                Some((_, _, best_depth)) if best_depth <= depth => {}
                _ => best = Some((index, collider, depth)),
            }
        }
        best.map(|(index, collider, _)| (index, collider))
    }

    /// Bottom edge of the lowest collider, if any
    pub fn lowest_bottom(&self) -> Option<f32> {
        self.colliders
            .iter()
            .map(|c| c.bounds.bottom())
            .reduce(f32::max)
    }
}
