// Read-only view of the world handed to the renderer once per frame
//
// The windowed binary only shows the quiz header from this, so most fields
// are read by nothing but a renderer.

use glam::Vec2;

use super::entity::SpriteFrame;
use super::player::{Facing, PlayerState};
use super::quiz::{DialogButton, QuizSession};
use crate::core::Aabb;
use crate::engine::game_loop::Tick;

/// Player as the renderer sees it
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub sprite: SpriteFrame,
    pub facing: Facing,
    pub state: PlayerState,
    /// Jumping, double jumping or falling
    pub airborne: bool,
    pub velocity: Vec2,
    /// Jumps left before landing
    pub jump_charges: u8,
}

/// Quiz dialog contents
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub visible: bool,
    /// 1-based number of the current question
    pub question_number: usize,
    pub question_count: usize,
    pub question: String,
    pub options: Vec<String>,
    pub option_rects: Vec<Aabb>,
    pub back_rect: Aabb,
    pub score: u32,
    pub remaining_seconds: Option<u32>,
    pub result: Option<String>,
    pub hovered: Option<DialogButton>,
}

impl QuizView {
    pub fn from_session(session: &QuizSession, now: Tick) -> Self {
        let question = session.current_question();
        let layout = session.layout();
        Self {
            visible: session.is_visible(),
            question_number: session.current_index() + 1,
            question_count: session.question_count(),
            question: question.text.clone(),
            options: question.options.clone(),
            option_rects: layout.option_rects().to_vec(),
            back_rect: layout.back_rect(),
            score: session.score(),
            remaining_seconds: session.remaining_seconds(now),
            result: session.result_message().map(str::to_string),
            hovered: session.hovered(),
        }
    }

    /// Header line, e.g. "Question 2/3"
    pub fn counter_label(&self) -> String {
        format!("Question {}/{}", self.question_number, self.question_count)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Everything needed to draw one frame
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub tick: Tick,
    pub player: PlayerView,
    pub npc: SpriteFrame,
    /// Player is close enough to start the quiz
    pub npc_in_range: bool,
    pub blocks: Vec<SpriteFrame>,
    pub quiz: QuizView,
}
