// Quiz questions and the validated bank they are drawn from

use super::QuizError;

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub text: String,
    /// Options in display order
    pub options: Vec<String>,
    /// Index into `options` of the right answer
    pub correct: usize,
}

impl QuizQuestion {
    pub fn new(text: impl Into<String>, options: &[&str], correct: usize) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

/// A non-empty, validated set of questions
///
/// Holds at least two questions so the next question can always differ from
/// the current one. Every question has at least two options and a correct
/// index inside its option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.len() < 2 {
            return Err(QuizError::TooFewQuestions(questions.len()));
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(QuizError::TooFewOptions {
                    question: index,
                    count: question.options.len(),
                });
            }
            if question.correct >= question.options.len() {
                return Err(QuizError::CorrectIndexOutOfRange {
                    question: index,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

}

/// The three BPJS questions the Rock Head NPC asks
pub fn bpjs_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "Apa kepanjangan dari BPJS?",
            &[
                "A. Badan Penyelenggara Jaminan Sosial",
                "B. Badan Pelayanan Jaminan Sosial",
                "C. Badan Pemberi Jaminan Sosial",
                "D. Badan Penyedia Jaminan Sosial",
            ],
            0,
        ),
        QuizQuestion::new(
            "Berapa iuran BPJS Kesehatan kelas 3?",
            &["A. Rp35.000", "B. Rp42.000", "C. Rp50.000", "D. Rp45.000"],
            1,
        ),
        QuizQuestion::new(
            "Apa yang TIDAK termasuk dalam layanan BPJS Kesehatan?",
            &[
                "A. Rawat Inap",
                "B. Rawat Jalan",
                "C. Operasi Plastik Kecantikan",
                "D. Persalinan",
            ],
            2,
        ),
    ]
}

impl std::ops::Index<usize> for QuestionBank {
    type Output = QuizQuestion;

    fn index(&self, index: usize) -> &QuizQuestion {
        &self.questions[index]
    }
}
