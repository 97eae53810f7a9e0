// The player character: input-driven movement on top of a kinematic body

use glam::Vec2;
use log::debug;

use super::animation::AnimationPlayer;
use super::state::{Facing, JumpState, PlayerState};
use super::stats::PlayerStats;
use crate::core::math::clamp;
use crate::core::Aabb;
use crate::engine::input::HorizontalInput;
use crate::engine::physics::{KinematicBody, MoveResult, PhysicsConfig, StaticColliderSet};
use crate::game::entity::{Positioned, Renderable, SpriteFrame, TickContext, Updatable};

/// Owns the player's body, jump state and facing
#[derive(Debug, Clone)]
pub struct PlayerController {
    body: KinematicBody,
    stats: PlayerStats,
    jump: JumpState,
    facing: Facing,
    state: PlayerState,
    animation: AnimationPlayer,
    /// Top-left corner the player respawns at
    spawn: Vec2,
    last_move: MoveResult,
}

impl PlayerController {
    /// Spawn a player standing with its feet at `spawn_bottom_center`
    pub fn new(stats: PlayerStats, spawn_bottom_center: Vec2) -> Self {
        let bounds = Aabb::from_bottom_center(
            spawn_bottom_center.x,
            spawn_bottom_center.y,
            stats.width,
            stats.height,
        );
        Self {
            body: KinematicBody::new(bounds),
            stats,
            jump: JumpState::Grounded,
            facing: Facing::Right,
            state: PlayerState::Idle,
            animation: AnimationPlayer::player_clips(),
            spawn: bounds.position(),
            last_move: MoveResult::default(),
        }
    }

    /// Accelerate toward the held direction, or coast down under friction
    pub fn apply_horizontal_input(&mut self, direction: HorizontalInput) {
        let velocity = &mut self.body.velocity;
        match direction {
            HorizontalInput::Left => {
                velocity.x -= self.stats.acceleration;
                self.facing = Facing::Left;
            }
            HorizontalInput::Right => {
                velocity.x += self.stats.acceleration;
                self.facing = Facing::Right;
            }
            HorizontalInput::None => velocity.x *= self.stats.friction,
        }
        self.clamp_horizontal_speed();
    }

    /// Ground jump, then one double jump, then nothing until landing
    ///
    /// Returns whether an impulse was applied.
    pub fn jump(&mut self) -> bool {
        let Some(next) = self.jump.after_jump() else {
            return false;
        };
        self.body.velocity.y = self.stats.jump_impulse;
        match next {
            JumpState::DoubleJumpSpent => debug!("Double jump executed"),
            _ => debug!("First jump executed"),
        }
        self.jump = next;
        true
    }

    /// One fixed step: gravity, horizontal then vertical resolution, landing
    pub fn tick(
        &mut self,
        dt: f32,
        colliders: &StaticColliderSet,
        physics: &PhysicsConfig,
    ) -> MoveResult {
        self.body
            .integrate(dt, physics.gravity, physics.terminal_velocity);
        self.clamp_horizontal_speed();

        let result = self.body.move_and_collide(dt, colliders);
        if let Some(floor) = result.vertical.filter(|_| result.landed()) {
            if self.jump != JumpState::Grounded {
                debug!(
                    "Landed on {} #{}, jumps restored",
                    floor.kind.name(),
                    floor.collider
                );
                self.jump = JumpState::Grounded;
            }
        }

        self.state = PlayerState::derive(
            self.body.velocity,
            self.jump,
            physics.gravity,
            self.stats.run_threshold,
        );
        self.animation.play(self.state.animation_name());
        self.animation
            .set_flip_horizontal(self.facing == Facing::Left);
        self.animation.tick();

        self.last_move = result;
        result
    }

    /// Put the player back at its spawn point, at rest, with both jumps
    pub fn respawn(&mut self) {
        self.body.reset(self.spawn);
        self.jump = JumpState::Grounded;
        self.state = PlayerState::Idle;
        self.last_move = MoveResult::default();
    }

    fn clamp_horizontal_speed(&mut self) {
        let max = self.stats.max_speed;
        self.body.velocity.x = clamp(self.body.velocity.x, -max, max);
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Contacts from the most recent tick
    pub fn last_move(&self) -> MoveResult {
        self.last_move
    }
}

impl Positioned for PlayerController {
    fn bounds(&self) -> Aabb {
        self.body.bounds
    }
}

impl Updatable for PlayerController {
    type Output = MoveResult;

    fn update(&mut self, ctx: &TickContext<'_>) -> MoveResult {
        self.tick(ctx.dt, ctx.colliders, ctx.physics)
    }
}

impl Renderable for PlayerController {
    fn sprite(&self) -> SpriteFrame {
        SpriteFrame {
            bounds: self.body.bounds,
            animation: self.animation.current_animation(),
            frame: self.animation.current_frame(),
            flip_horizontal: self.animation.is_flipped_horizontal(),
        }
    }
}
