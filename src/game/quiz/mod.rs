// NPC quiz: question bank, dialog layout and the timed session

pub mod config;
pub mod layout;
pub mod question;
pub mod session;

pub use config::QuizConfig;
pub use layout::DialogButton;
pub use question::{bpjs_questions, QuestionBank, QuizQuestion};
pub use session::{QuizEvent, QuizSession};

/// Malformed question data
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("A question bank needs at least 2 questions, got {0}")]
    TooFewQuestions(usize),

    #[error("Question {question} needs at least 2 options, got {count}")]
    TooFewOptions { question: usize, count: usize },

    #[error("Question {question} marks option {correct} correct but has only {options} options")]
    CorrectIndexOutOfRange {
        question: usize,
        correct: usize,
        options: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QuizError::TooFewQuestions(1).to_string(),
            "A question bank needs at least 2 questions, got 1"
        );
        let err = QuizError::CorrectIndexOutOfRange {
            question: 2,
            correct: 5,
            options: 4,
        };
        assert_eq!(
            err.to_string(),
            "Question 2 marks option 5 correct but has only 4 options"
        );
    }
}
