use glam::Vec2;

use super::collision::{StaticColliderSet, TerrainKind};
use crate::core::{Aabb, Axis};

/// Which face of the moving body touched terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Moving down, landed on top of a collider
    Floor,
    /// Moving up, hit the underside of a collider
    Ceiling,
    /// Moving left, hit the right face of a collider
    Left,
    /// Moving right, hit the left face of a collider
    Right,
}

/// A single resolved collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub side: ContactSide,
    /// Index of the collider in the set
    pub collider: usize,
    pub kind: TerrainKind,
}

/// Contacts produced by one horizontal-then-vertical move
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveResult {
    pub horizontal: Option<Contact>,
    pub vertical: Option<Contact>,
}

impl MoveResult {
    /// The body landed on something this move
    pub fn landed(&self) -> bool {
        matches!(
            self.vertical,
            Some(Contact {
                side: ContactSide::Floor,
                ..
            })
        )
    }

    /// The body was stopped by something above it this move
    pub fn hit_ceiling(&self) -> bool {
        matches!(
            self.vertical,
            Some(Contact {
                side: ContactSide::Ceiling,
                ..
            })
        )
    }
}

/// A box that moves under its own velocity and is pushed out of static terrain
///
/// Units are pixels and pixels-per-tick; `dt` is measured in fixed ticks, so
/// `dt = 1.0` advances exactly one 60 Hz step.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub bounds: Aabb,
    pub velocity: Vec2,
    grounded: bool,
}

impl KinematicBody {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Was the body resting on a floor after its last vertical resolve
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Teleport the body and stop it
    pub fn reset(&mut self, position: Vec2) {
        self.bounds.set_position(position);
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }

    /// Accelerate downward by gravity, capped at the terminal fall speed
    pub fn integrate(&mut self, dt: f32, gravity: f32, terminal_velocity: f32) {
        self.velocity.y = (self.velocity.y + gravity * dt).min(terminal_velocity);
    }

    /// Move along one axis and push out of whatever the move ran into
    ///
    /// Horizontal moves snap against the first overlapping collider in
    /// iteration order. With several overlaps the snap distance can be off by
    /// the gap between them; this is accepted. Vertical moves snap against the
    /// collider with the smallest penetration.
    pub fn resolve(&mut self, axis: Axis, dt: f32, colliders: &StaticColliderSet) -> Option<Contact> {
        let speed = axis.component(self.velocity);
        self.bounds.translate(axis, speed * dt);

        if axis == Axis::Vertical {
            self.grounded = false;
        }

        let (index, collider) = match axis {
            Axis::Horizontal => colliders.first_overlap(&self.bounds),
            Axis::Vertical => colliders.nearest_overlap(&self.bounds, axis),
        }?;
        let block = collider.bounds;

        let side = match axis {
            Axis::Horizontal if speed > 0.0 => {
                self.bounds.x = block.left() - self.bounds.width;
                Some(ContactSide::Right)
            }
            Axis::Horizontal if speed < 0.0 => {
                self.bounds.x = block.right();
                Some(ContactSide::Left)
            }
            Axis::Vertical if speed > 0.0 => {
                self.bounds.y = block.top() - self.bounds.height;
                self.grounded = true;
                Some(ContactSide::Floor)
            }
            Axis::Vertical if speed < 0.0 => {
                self.bounds.y = block.bottom();
                Some(ContactSide::Ceiling)
            }
            // Overlapping without moving on this axis: nothing to push along it
            _ => None,
        };

        *axis.component_mut(&mut self.velocity) = 0.0;

        side.map(|side| Contact {
            side,
            collider: index,
            kind: collider.kind,
        })
    }

    /// Resolve the horizontal axis completely, then the vertical one
    pub fn move_and_collide(&mut self, dt: f32, colliders: &StaticColliderSet) -> MoveResult {
        let horizontal = self.resolve(Axis::Horizontal, dt, colliders);
        let vertical = self.resolve(Axis::Vertical, dt, colliders);
        MoveResult {
            horizontal,
            vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::collision::StaticCollider;
    use approx::assert_relative_eq;

    fn ground_row(y: f32, count: usize) -> StaticColliderSet {
        let colliders = (0..count)
            .map(|i| {
                StaticCollider::new(
                    Aabb::new(i as f32 * 32.0, y, 32.0, 32.0),
                    TerrainKind::Ground,
                )
            })
            .collect();
        StaticColliderSet::new(colliders).unwrap()
    }

    #[test]
    fn test_integrate_applies_gravity_and_terminal_velocity() {
        let mut body = KinematicBody::new(Aabb::new(0.0, 0.0, 10.0, 10.0));
        body.integrate(1.0, 0.5, 20.0);
        assert_relative_eq!(body.velocity.y, 0.5);

        body.velocity.y = 19.8;
        body.integrate(1.0, 0.5, 20.0);
        assert_relative_eq!(body.velocity.y, 20.0);
    }

    #[test]
    fn test_free_fall_without_colliders() {
        let set = StaticColliderSet::default();
        let mut body = KinematicBody::new(Aabb::new(0.0, 0.0, 10.0, 10.0));
        body.velocity.y = 5.0;

        let result = body.move_and_collide(1.0, &set);
        assert_eq!(result, MoveResult::default());
        assert_relative_eq!(body.bounds.y, 5.0);
        assert_relative_eq!(body.velocity.y, 5.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_landing_snaps_to_floor() {
        let set = ground_row(100.0, 4);
        let mut body = KinematicBody::new(Aabb::new(10.0, 30.0, 32.0, 64.0)); // bottom 94
        body.velocity.y = 10.0;

        let contact = body.resolve(Axis::Vertical, 1.0, &set).unwrap();
        assert_eq!(contact.side, ContactSide::Floor);
        assert_relative_eq!(body.bounds.bottom(), 100.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_ceiling_zeroes_velocity_without_grounding() {
        let set = ground_row(0.0, 2);
        let mut body = KinematicBody::new(Aabb::new(0.0, 40.0, 20.0, 20.0));
        body.velocity.y = -16.0;

        let contact = body.resolve(Axis::Vertical, 1.0, &set).unwrap();
        assert_eq!(contact.side, ContactSide::Ceiling);
        assert!(MoveResult { horizontal: None, vertical: Some(contact) }.hit_ceiling());
        assert_relative_eq!(body.bounds.top(), 32.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_wall_snaps_horizontally() {
        let wall = StaticCollider::new(Aabb::new(100.0, 0.0, 32.0, 100.0), TerrainKind::Platform);
        let set = StaticColliderSet::new(vec![wall]).unwrap();

        let mut body = KinematicBody::new(Aabb::new(62.0, 10.0, 32.0, 32.0)); // right 94
        body.velocity.x = 8.0;
        let contact = body.resolve(Axis::Horizontal, 1.0, &set).unwrap();
        assert_eq!(contact.side, ContactSide::Right);
        assert_relative_eq!(body.bounds.right(), 100.0);
        assert_eq!(body.velocity.x, 0.0);

        let mut body = KinematicBody::new(Aabb::new(135.0, 10.0, 32.0, 32.0));
        body.velocity.x = -8.0;
        let contact = body.resolve(Axis::Horizontal, 1.0, &set).unwrap();
        assert_eq!(contact.side, ContactSide::Left);
        assert_relative_eq!(body.bounds.left(), 132.0);
    }

    #[test]
    fn test_horizontal_uses_first_collider_not_nearest() {
        // Known approximation: with two overlapping walls the first one in
        // iteration order decides the snap, even if the other is closer.
        let far = StaticCollider::new(Aabb::new(110.0, 0.0, 32.0, 100.0), TerrainKind::Platform);
        let near = StaticCollider::new(Aabb::new(100.0, 0.0, 32.0, 100.0), TerrainKind::Platform);
        let set = StaticColliderSet::new(vec![far, near]).unwrap();

        let mut body = KinematicBody::new(Aabb::new(70.0, 10.0, 32.0, 32.0));
        body.velocity.x = 12.0; // right edge reaches 114
        let contact = body.resolve(Axis::Horizontal, 1.0, &set).unwrap();
        assert_eq!(contact.collider, 0);
        assert_relative_eq!(body.bounds.right(), 110.0);
        // Still overlapping the nearer wall after the snap
        let near = set.iter().nth(1).unwrap();
        assert!(body.bounds.overlaps(&near.bounds));
    }

    #[test]
    fn test_horizontal_resolved_before_vertical() {
        // Body runs into a wall while falling: x is corrected against the wall
        // before y moves, so it does not catch on the wall's top corner.
        let wall = StaticCollider::new(Aabb::new(100.0, 0.0, 32.0, 200.0), TerrainKind::Platform);
        let floor = StaticCollider::new(Aabb::new(0.0, 200.0, 200.0, 32.0), TerrainKind::Ground);
        let set = StaticColliderSet::new(vec![wall, floor]).unwrap();

        let mut body = KinematicBody::new(Aabb::new(66.0, 130.0, 32.0, 64.0)); // bottom 194
        body.velocity = Vec2::new(6.0, 10.0);

        let result = body.move_and_collide(1.0, &set);
        assert_eq!(result.horizontal.map(|c| c.side), Some(ContactSide::Right));
        assert!(result.landed());
        assert_relative_eq!(body.bounds.right(), 100.0);
        assert_relative_eq!(body.bounds.bottom(), 200.0);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_drop_onto_ground_lands_in_bounded_ticks() {
        let set = ground_row(700.0, 10);
        let gravity = 0.5;
        let drop_height = 300.0;
        let mut body = KinematicBody::new(Aabb::new(64.0, 700.0 - 64.0 - drop_height, 32.0, 64.0));

        // Free fall from rest covers h in sqrt(2h/g) ticks; allow slack
        let bound = (2.0 * drop_height / gravity).sqrt().ceil() as usize + 2;
        let mut landed_at = None;
        for tick in 0..bound {
            body.integrate(1.0, gravity, 20.0);
            if body.move_and_collide(1.0, &set).landed() {
                landed_at = Some(tick);
                break;
            }
        }

        assert!(landed_at.is_some(), "Body should land within {} ticks", bound);
        assert!(body.is_grounded());
        assert_eq!(body.velocity.y, 0.0);
        assert_relative_eq!(body.bounds.bottom(), 700.0);
    }

    #[test]
    fn test_step_shorter_than_tile_plus_body_always_lands() {
        let set = ground_row(100.0, 1);

        let mut body = KinematicBody::new(Aabb::new(0.0, 36.0, 32.0, 64.0)); // bottom 100
        body.velocity.y = 95.0;
        assert!(body.move_and_collide(1.0, &set).landed());
        assert_relative_eq!(body.bounds.bottom(), 100.0);

        // 32 + 64: the body ends exactly below the tile and never overlaps it
        let mut body = KinematicBody::new(Aabb::new(0.0, 36.0, 32.0, 64.0));
        body.velocity.y = 96.0;
        assert!(!body.move_and_collide(1.0, &set).landed());
        assert_relative_eq!(body.bounds.top(), 132.0);
    }

    #[test]
    fn test_resting_body_stays_put() {
        let set = ground_row(700.0, 4);
        let mut body = KinematicBody::new(Aabb::new(32.0, 636.0, 32.0, 64.0));
        let start = body.bounds.position();

        for _ in 0..10 {
            body.integrate(1.0, 0.5, 20.0);
            let result = body.move_and_collide(1.0, &set);
            assert!(result.landed());
        }

        assert_eq!(body.bounds.position(), start);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_reset_clears_motion() {
        let mut body = KinematicBody::new(Aabb::new(0.0, 0.0, 10.0, 10.0));
        body.velocity = Vec2::new(3.0, 4.0);
        body.reset(Vec2::new(50.0, 60.0));
        assert_eq!(body.bounds.position(), Vec2::new(50.0, 60.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.is_grounded());
    }
}
