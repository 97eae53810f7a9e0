// Capabilities shared by everything placed in the level
//
// Entities are plain structs; these traits only describe what the world and
// the renderer can ask of them.

use glam::Vec2;

use crate::core::Aabb;
use crate::engine::game_loop::Tick;
use crate::engine::physics::{PhysicsConfig, StaticColliderSet};

/// Something with a place in the level
pub trait Positioned {
    fn bounds(&self) -> Aabb;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Per-tick data handed to updatable entities
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub tick: Tick,
    /// Step length in ticks
    pub dt: f32,
    pub colliders: &'a StaticColliderSet,
    pub physics: &'a PhysicsConfig,
}

/// Something that changes on its own every tick
pub trait Updatable {
    /// What the step reports back to the world
    type Output;

    fn update(&mut self, ctx: &TickContext<'_>) -> Self::Output;
}

/// What to draw for an entity this frame
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub bounds: Aabb,
    /// Sheet name, empty for untextured blocks
    pub animation: &'static str,
    pub frame: usize,
    pub flip_horizontal: bool,
}

impl SpriteFrame {
    /// A single-frame sprite covering `bounds`
    pub fn still(bounds: Aabb, animation: &'static str) -> Self {
        Self {
            bounds,
            animation,
            frame: 0,
            flip_horizontal: false,
        }
    }
}

/// Something the renderer can draw
pub trait Renderable {
    fn sprite(&self) -> SpriteFrame;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(Aabb);

    impl Positioned for Marker {
        fn bounds(&self) -> Aabb {
            self.0
        }
    }

    #[test]
    fn test_default_center() {
        let marker = Marker(Aabb::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(marker.center(), Vec2::new(30.0, 50.0));
    }

    #[test]
    fn test_still_sprite() {
        let bounds = Aabb::new(0.0, 0.0, 32.0, 32.0);
        let sprite = SpriteFrame::still(bounds, "ground");
        assert_eq!(sprite.frame, 0);
        assert!(!sprite.flip_horizontal);
        assert_eq!(sprite.bounds, bounds);
    }
}
