// Quiz dialog state machine
//
// Closed -> Open(i) -> answered or timed out -> Open(j != i), and back to
// Closed on Back/Escape. Every timer is a deadline on the game tick counter.

use glam::Vec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::QuizConfig;
use super::layout::{DialogButton, DialogLayout};
use super::question::{QuestionBank, QuizQuestion};
use crate::engine::game_loop::{ticks_to_seconds, Tick};

/// How a question ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { correct_text: String },
    TimedOut,
}

impl AnswerOutcome {
    /// Text shown to the player
    pub fn message(&self) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::Wrong { correct_text } => {
                format!("Wrong! The correct answer was: {}", correct_text)
            }
            Self::TimedOut => "Time's up!".to_string(),
        }
    }
}

/// Something the dialog did in response to input or time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Opened,
    Closed,
    Answered(AnswerOutcome),
}

/// A result message and the tick it disappears at
#[derive(Debug, Clone, PartialEq, Eq)]
struct ShownResult {
    message: String,
    expires_at: Tick,
}

/// Question rotation, score and dialog visibility for one NPC
///
/// The current question and the score survive closing and reopening the
/// dialog. The score never decreases.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    config: QuizConfig,
    screen_size: Vec2,
    layout: DialogLayout,
    rng: StdRng,

    current: usize,
    score: u32,
    visible: bool,
    /// Tick at which the current question times out, while open
    deadline: Option<Tick>,
    result: Option<ShownResult>,
    hovered: Option<DialogButton>,
}

impl QuizSession {
    /// Session starting on question 0, drawing from OS entropy
    pub fn new(bank: QuestionBank, config: QuizConfig, screen_size: Vec2) -> Self {
        Self::with_rng(bank, config, screen_size, StdRng::from_entropy())
    }

    /// Session with reproducible question order
    pub fn with_seed(bank: QuestionBank, config: QuizConfig, screen_size: Vec2, seed: u64) -> Self {
        Self::with_rng(bank, config, screen_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bank: QuestionBank, config: QuizConfig, screen_size: Vec2, rng: StdRng) -> Self {
        let layout = DialogLayout::new(screen_size.x, screen_size.y, bank[0].options.len());
        Self {
            bank,
            config,
            screen_size,
            layout,
            rng,
            current: 0,
            score: 0,
            visible: false,
            deadline: None,
            result: None,
            hovered: None,
        }
    }

    /// Show the dialog and start the countdown on the current question
    pub fn open(&mut self, now: Tick) -> Option<QuizEvent> {
        if self.visible {
            return None;
        }
        self.visible = true;
        self.deadline = Some(now + self.config.question_duration);
        info!(
            "Quiz opened on question {}/{}",
            self.current + 1,
            self.bank.len()
        );
        Some(QuizEvent::Opened)
    }

    /// Hide the dialog; score and current question are kept
    pub fn close(&mut self) -> Option<QuizEvent> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.deadline = None;
        self.result = None;
        self.hovered = None;
        info!("Quiz closed with score {}", self.score);
        Some(QuizEvent::Closed)
    }

    /// Answer the current question
    ///
    /// Returns `None` when the dialog is closed.
    ///
    /// # Panics
    ///
    /// Panics if `option` is not an option of the current question.
    pub fn select_option(&mut self, option: usize, now: Tick) -> Option<AnswerOutcome> {
        if !self.visible {
            return None;
        }
        let question = &self.bank[self.current];
        assert!(
            option < question.options.len(),
            "Option {} out of range for question {} with {} options",
            option,
            self.current,
            question.options.len()
        );

        let outcome = if question.is_correct(option) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong {
                correct_text: question.correct_text().to_string(),
            }
        };
        debug!(
            "Question {} answered with option {}: {:?}",
            self.current, option, outcome
        );
        self.finish_question(&outcome, now);
        Some(outcome)
    }

    /// Advance timers: expire the result message, then time out the question
    pub fn update(&mut self, now: Tick) -> Option<QuizEvent> {
        if self
            .result
            .as_ref()
            .is_some_and(|result| now >= result.expires_at)
        {
            self.result = None;
        }

        let deadline = self.deadline?;
        if !self.visible || now < deadline {
            return None;
        }
        debug!("Question {} timed out", self.current);
        let outcome = AnswerOutcome::TimedOut;
        self.finish_question(&outcome, now);
        Some(QuizEvent::Answered(outcome))
    }

    /// Route a pointer click to the dialog's buttons
    pub fn handle_click(&mut self, point: Vec2, now: Tick) -> Option<QuizEvent> {
        if !self.visible {
            return None;
        }
        match self.layout.hit(point)? {
            DialogButton::Back => self.close(),
            DialogButton::Option(option) => self
                .select_option(option, now)
                .map(QuizEvent::Answered),
        }
    }

    /// Track which button the pointer is over
    pub fn handle_hover(&mut self, point: Vec2) {
        self.hovered = if self.visible {
            self.layout.hit(point)
        } else {
            None
        };
    }

    fn finish_question(&mut self, outcome: &AnswerOutcome, now: Tick) {
        self.result = Some(ShownResult {
            message: outcome.message(),
            expires_at: now + self.config.result_duration,
        });
        self.current = self.next_index();
        self.layout = DialogLayout::new(
            self.screen_size.x,
            self.screen_size.y,
            self.bank[self.current].options.len(),
        );
        self.hovered = None;
        self.deadline = Some(now + self.config.question_duration);
    }

    /// Uniform draw over every question except the current one
    fn next_index(&mut self) -> usize {
        let pick = self.rng.gen_range(0..self.bank.len() - 1);
        if pick >= self.current {
            pick + 1
        } else {
            pick
        }
    }

    /// Whole seconds left on the countdown, rounded up
    pub fn remaining_seconds(&self, now: Tick) -> Option<u32> {
        let deadline = self.deadline?;
        Some(ticks_to_seconds(deadline.saturating_sub(now)).ceil() as u32)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.bank[self.current]
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Result message still on screen, if any
    pub fn result_message(&self) -> Option<&str> {
        self.result.as_ref().map(|result| result.message.as_str())
    }

    pub fn hovered(&self) -> Option<DialogButton> {
        self.hovered
    }

    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::quiz::question::bpjs_questions;

    const SCREEN: Vec2 = Vec2::new(1200.0, 800.0);

    fn session(seed: u64) -> QuizSession {
        let bank = QuestionBank::new(bpjs_questions()).unwrap();
        QuizSession::with_seed(bank, QuizConfig::default(), SCREEN, seed)
    }

    fn wrong_option(session: &QuizSession) -> usize {
        (session.current_question().correct + 1) % session.current_question().options.len()
    }

    #[test]
    fn test_starts_closed_on_first_question() {
        let quiz = session(1);
        assert!(!quiz.is_visible());
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.remaining_seconds(0), None);
    }

    #[test]
    fn test_open_starts_countdown() {
        let mut quiz = session(1);
        assert_eq!(quiz.open(100), Some(QuizEvent::Opened));
        assert!(quiz.is_visible());
        assert_eq!(quiz.remaining_seconds(100), Some(15));
        assert_eq!(quiz.remaining_seconds(101), Some(15));
        assert_eq!(quiz.remaining_seconds(160), Some(14));
        // Opening twice is a no-op
        assert_eq!(quiz.open(200), None);
        assert_eq!(quiz.remaining_seconds(100), Some(15));
    }

    #[test]
    fn test_no_repeat_over_many_transitions() {
        let mut quiz = session(42);
        quiz.open(0);
        let mut seen = [0usize; 3];
        let mut previous = quiz.current_index();
        for now in 0..1000 {
            quiz.select_option(0, now);
            let current = quiz.current_index();
            assert_ne!(current, previous, "Question repeated at transition {}", now);
            assert!(current < 3);
            seen[current] += 1;
            previous = current;
        }
        // Every question comes up
        assert!(seen.iter().all(|&count| count > 0));
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut quiz = session(7);
        quiz.open(0);
        let mut last = quiz.score();
        for now in 0..300 {
            let option = if now % 3 == 0 {
                quiz.current_question().correct
            } else {
                wrong_option(&quiz)
            };
            quiz.select_option(option, now);
            if now % 50 == 0 {
                quiz.update(now + 900);
            }
            assert!(quiz.score() >= last);
            last = quiz.score();
        }
        assert_eq!(quiz.score(), 100);
    }

    #[test]
    fn test_quiz_scenario() {
        let mut quiz = session(3);
        let mut now: Tick = 0;

        quiz.open(now);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);

        // Correct answer
        let outcome = quiz.select_option(0, now).unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert_eq!(quiz.score(), 1);
        assert!([1, 2].contains(&quiz.current_index()));
        assert_eq!(quiz.result_message(), Some("Correct!"));

        // Wrong answer names the right one
        now += 10;
        let correct_text = quiz.current_question().correct_text().to_string();
        let outcome = quiz.select_option(wrong_option(&quiz), now).unwrap();
        assert!(matches!(outcome, AnswerOutcome::Wrong { .. }));
        assert_eq!(quiz.score(), 1);
        let message = quiz.result_message().unwrap();
        assert!(message.starts_with("Wrong! The correct answer was: "));
        assert!(message.contains(&correct_text));

        // Let the countdown run out
        let before = quiz.current_index();
        now += 900;
        assert_eq!(
            quiz.update(now),
            Some(QuizEvent::Answered(AnswerOutcome::TimedOut))
        );
        assert_eq!(quiz.result_message(), Some("Time's up!"));
        assert_eq!(quiz.score(), 1);
        assert_ne!(quiz.current_index(), before);
        assert_eq!(quiz.remaining_seconds(now), Some(15));
    }

    #[test]
    fn test_no_timeout_before_deadline() {
        let mut quiz = session(5);
        quiz.open(0);
        assert_eq!(quiz.update(899), None);
        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.update(900).is_some());
    }

    #[test]
    fn test_answer_restarts_countdown() {
        let mut quiz = session(5);
        quiz.open(0);
        assert_eq!(quiz.remaining_seconds(800), Some(2));

        quiz.select_option(0, 800);
        assert_eq!(quiz.remaining_seconds(800), Some(15));
        // The first deadline no longer applies
        assert_eq!(quiz.update(900), None);
        assert_eq!(quiz.update(1699), None);
        assert_eq!(
            quiz.update(1700),
            Some(QuizEvent::Answered(AnswerOutcome::TimedOut))
        );
    }

    #[test]
    fn test_result_expires_after_display_time() {
        let mut quiz = session(5);
        quiz.open(0);
        quiz.select_option(0, 10);
        quiz.update(69);
        assert!(quiz.result_message().is_some());
        quiz.update(70);
        assert!(quiz.result_message().is_none());
    }

    #[test]
    fn test_close_keeps_progress() {
        let mut quiz = session(9);
        quiz.open(0);
        quiz.select_option(0, 0);
        let index = quiz.current_index();

        assert_eq!(quiz.close(), Some(QuizEvent::Closed));
        assert!(!quiz.is_visible());
        assert!(quiz.result_message().is_none());
        assert_eq!(quiz.remaining_seconds(5), None);
        // Closed dialog neither times out nor takes answers
        assert_eq!(quiz.update(10_000), None);
        assert_eq!(quiz.select_option(0, 10_000), None);

        quiz.open(20_000);
        assert_eq!(quiz.current_index(), index);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.close(), Some(QuizEvent::Closed));
        assert_eq!(quiz.close(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics() {
        let mut quiz = session(1);
        quiz.open(0);
        quiz.select_option(4, 0);
    }

    #[test]
    fn test_click_routes_to_buttons() {
        let mut quiz = session(11);
        // Closed dialog ignores clicks
        assert_eq!(quiz.handle_click(Vec2::new(600.0, 280.0), 0), None);

        quiz.open(0);
        // First option of question 0 is correct
        assert_eq!(
            quiz.handle_click(Vec2::new(600.0, 280.0), 0),
            Some(QuizEvent::Answered(AnswerOutcome::Correct))
        );
        assert_eq!(quiz.handle_click(Vec2::new(10.0, 10.0), 0), None);
        assert_eq!(
            quiz.handle_click(Vec2::new(1100.0, 760.0), 0),
            Some(QuizEvent::Closed)
        );
        assert!(!quiz.is_visible());
    }

    #[test]
    fn test_hover_tracking() {
        let mut quiz = session(11);
        quiz.handle_hover(Vec2::new(600.0, 360.0));
        assert_eq!(quiz.hovered(), None);

        quiz.open(0);
        quiz.handle_hover(Vec2::new(600.0, 360.0));
        assert_eq!(quiz.hovered(), Some(DialogButton::Option(1)));
        quiz.handle_hover(Vec2::new(1100.0, 760.0));
        assert_eq!(quiz.hovered(), Some(DialogButton::Back));
    }

    #[test]
    fn test_messages() {
        assert_eq!(AnswerOutcome::Correct.message(), "Correct!");
        assert_eq!(AnswerOutcome::TimedOut.message(), "Time's up!");
        let wrong = AnswerOutcome::Wrong {
            correct_text: "A. Rawat Inap".to_string(),
        };
        assert_eq!(
            wrong.message(),
            "Wrong! The correct answer was: A. Rawat Inap"
        );
    }
}
