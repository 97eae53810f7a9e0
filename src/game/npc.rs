// Quiz-giving NPC

use glam::Vec2;

use super::entity::{Positioned, Renderable, SpriteFrame, TickContext, Updatable};
use super::interaction::can_interact;
use super::player::AnimationPlayer;
use super::quiz::{QuizEvent, QuizSession};
use crate::core::Aabb;
use crate::engine::game_loop::Tick;

/// Rock Head sprite is 42px square
pub const NPC_SIZE: f32 = 42.0;

/// A stationary character that owns a quiz session
#[derive(Debug, Clone)]
pub struct Npc {
    name: String,
    bounds: Aabb,
    quiz: QuizSession,
    animation: AnimationPlayer,
    interaction_radius: f32,
}

impl Npc {
    /// Place an NPC with its feet at `bottom_center`
    pub fn new(
        name: impl Into<String>,
        bottom_center: Vec2,
        quiz: QuizSession,
        interaction_radius: f32,
    ) -> Self {
        Self {
            name: name.into(),
            bounds: Aabb::from_bottom_center(bottom_center.x, bottom_center.y, NPC_SIZE, NPC_SIZE),
            quiz,
            animation: AnimationPlayer::npc_clips(),
            interaction_radius,
        }
    }

    /// Is `other` close enough to talk to
    pub fn can_interact(&self, other: &impl Positioned) -> bool {
        can_interact(&self.bounds, &other.bounds(), self.interaction_radius)
    }

    /// Open the quiz if `other` is in range
    pub fn try_open(&mut self, other: &impl Positioned, now: Tick) -> Option<QuizEvent> {
        if !self.can_interact(other) {
            return None;
        }
        self.quiz.open(now)
    }

    /// Step the idle animation and the quiz timers
    pub fn tick(&mut self, now: Tick) -> Option<QuizEvent> {
        self.animation.tick();
        self.quiz.update(now)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interaction_radius(&self) -> f32 {
        self.interaction_radius
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizSession {
        &mut self.quiz
    }
}

impl Positioned for Npc {
    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

impl Updatable for Npc {
    type Output = Option<QuizEvent>;

    fn update(&mut self, ctx: &TickContext<'_>) -> Option<QuizEvent> {
        self.tick(ctx.tick)
    }
}

impl Renderable for Npc {
    fn sprite(&self) -> SpriteFrame {
        SpriteFrame {
            bounds: self.bounds,
            animation: self.animation.current_animation(),
            frame: self.animation.current_frame(),
            flip_horizontal: false,
        }
    }
}
