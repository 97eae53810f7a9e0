// The game world: level, player and NPC stepped together once per tick

use glam::Vec2;
use log::{debug, info, warn};

use super::config::GameConfig;
use super::entity::{Positioned, Renderable, TickContext, Updatable};
use super::level::{Level, LevelData};
use super::npc::Npc;
use super::player::PlayerController;
use super::quiz::{QuestionBank, QuizConfig, QuizEvent, QuizQuestion, QuizSession};
use super::snapshot::{FrameSnapshot, PlayerView, QuizView};
use super::GameError;
use crate::engine::game_loop::Tick;
use crate::engine::input::FrameInput;

const NPC_NAME: &str = "Rock Head";

/// What happened during one tick, for logging and sound cues
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    pub jumped: bool,
    /// Touched down after being airborne
    pub landed: bool,
    /// Hit the underside of a block on the way up
    pub bumped_head: bool,
    /// Player fell out of the level and was put back at spawn
    pub respawned: bool,
    pub quiz: Vec<QuizEvent>,
    /// Back was pressed with no dialog open
    pub quit_requested: bool,
}

/// Owns every entity and steps them in a fixed order
pub struct World {
    config: GameConfig,
    level: Level,
    player: PlayerController,
    npc: Npc,
}

impl World {
    pub fn new(
        config: GameConfig,
        level: &LevelData,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, GameError> {
        Self::build(config, level, questions, QuizSession::new)
    }

    /// World whose quiz draws questions in a reproducible order
    pub fn with_seed(
        config: GameConfig,
        level: &LevelData,
        questions: Vec<QuizQuestion>,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::build(config, level, questions, |bank, quiz, screen| {
            QuizSession::with_seed(bank, quiz, screen, seed)
        })
    }

    fn build(
        config: GameConfig,
        data: &LevelData,
        questions: Vec<QuizQuestion>,
        make_quiz: impl FnOnce(QuestionBank, QuizConfig, Vec2) -> QuizSession,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let level = Level::build(data)?;
        config.check_step_sizes(data.tile_size)?;
        let bank = QuestionBank::new(questions)?;

        let player = PlayerController::new(config.player, level.player_spawn());
        let quiz = make_quiz(bank, config.quiz, config.screen.size());
        let npc = Npc::new(
            NPC_NAME,
            level.npc_spawn(),
            quiz,
            config.quiz.interaction_radius,
        );
        info!(
            "World ready: player at {:?}, {} at {:?}",
            player.center(),
            npc.name(),
            npc.center()
        );

        Ok(Self {
            config,
            level,
            player,
            npc,
        })
    }

    /// Advance the world by one fixed tick
    ///
    /// Order: dialog keys, player movement and collision, respawn,
    /// interaction, pointer, NPC animation and quiz timers.
    pub fn update(&mut self, input: &FrameInput, tick: Tick) -> TickEvents {
        let mut events = TickEvents::default();

        if input.back_pressed {
            match self.npc.quiz_mut().close() {
                Some(event) => events.quiz.push(event),
                None => events.quit_requested = true,
            }
        }

        self.player
            .apply_horizontal_input(input.movement.horizontal());
        if input.jump_pressed {
            events.jumped = self.player.jump();
        }

        let ctx = TickContext {
            tick,
            dt: 1.0,
            colliders: self.level.colliders(),
            physics: &self.config.physics,
        };
        let was_grounded = self.player.body().is_grounded();
        let moved = self.player.update(&ctx);
        events.landed = moved.landed() && !was_grounded;
        events.bumped_head = moved.hit_ceiling();

        if self.level.is_out_of_bounds(&self.player.bounds()) {
            warn!(
                "Player fell out of the level at {:?}, respawning",
                self.player.bounds().position()
            );
            self.player.respawn();
            events.respawned = true;
        }

        if input.interact_pressed {
            match self.npc.try_open(&self.player, tick) {
                Some(event) => events.quiz.push(event),
                None => debug!(
                    "Interact pressed farther than {}px from {}",
                    self.npc.interaction_radius(),
                    self.npc.name()
                ),
            }
        }

        if let Some(pointer) = input.pointer {
            self.npc.quiz_mut().handle_hover(pointer);
        }
        if let Some(click) = input.click {
            events
                .quiz
                .extend(self.npc.quiz_mut().handle_click(click, tick));
        }

        events.quiz.extend(self.npc.update(&ctx));
        events
    }

    /// Owned view of the current state for the renderer
    pub fn snapshot(&self, tick: Tick) -> FrameSnapshot {
        FrameSnapshot {
            tick,
            player: PlayerView {
                sprite: self.player.sprite(),
                facing: self.player.facing(),
                state: self.player.state(),
                airborne: self.player.state().is_airborne(),
                velocity: self.player.velocity(),
                jump_charges: self.player.jump_state().charges(),
            },
            npc: self.npc.sprite(),
            npc_in_range: self.npc.can_interact(&self.player),
            blocks: self.level.blocks().map(|block| block.sprite()).collect(),
            quiz: QuizView::from_session(self.npc.quiz(), tick),
        }
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn npc(&self) -> &Npc {
        &self.npc
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
