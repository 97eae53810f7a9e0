use crate::engine::game_loop::{seconds_to_ticks, Tick};
use crate::game::interaction::DEFAULT_INTERACTION_RADIUS;

/// Quiz timing and reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizConfig {
    /// Ticks the player has to answer one question
    pub question_duration: Tick,
    /// Ticks a result message stays on screen
    pub result_duration: Tick,
    /// Center distance at which the NPC can be talked to
    pub interaction_radius: f32,
}

pub const BASE_QUIZ: QuizConfig = QuizConfig {
    question_duration: seconds_to_ticks(15),
    result_duration: 60,
    interaction_radius: DEFAULT_INTERACTION_RADIUS,
};

impl Default for QuizConfig {
    fn default() -> Self {
        BASE_QUIZ
    }
}
