// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::attempt::AttemptState;

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,

    /// Index into `options`.
    pub correct_answer: usize,

    pub explanation: Option<String>,
}

/// A quiz attached to one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub questions: Vec<Question>,

    /// Minimum score (0 to 100) needed to pass.
    pub passing_score: u8,

    /// Time limit in minutes. Untimed when absent.
    pub time_limit: Option<u32>,
}

impl Quiz {
    /// Countdown length in seconds, if the quiz is timed. A zero limit means
    /// untimed.
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit
            .filter(|&m| m > 0)
            .map(|m| m.saturating_mul(60))
    }
}

/// DTO for sending a question to the client (excludes answer and explanation).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicQuiz {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub passing_score: u8,
    pub time_limit: Option<u32>,
    pub questions: Vec<PublicQuestion>,
}

impl From<&Quiz> for PublicQuiz {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            module_id: quiz.module_id.clone(),
            title: quiz.title.clone(),
            passing_score: quiz.passing_score,
            time_limit: quiz.time_limit,
            questions: quiz
                .questions
                .iter()
                .map(|q| PublicQuestion {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

/// A scored quiz submission, kept in the result history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: String,
    pub quiz_id: String,
    pub user_id: String,
    pub score: u8,

    /// Selected option per question, `None` when unanswered.
    pub answers: Vec<Option<usize>>,

    pub completed_at: DateTime<Utc>,

    /// Snapshot of `score >= passing_score` at the time of scoring.
    pub passed: bool,
}

/// Per-question feedback shown after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    pub question_id: String,
    pub text: String,
    pub selected: Option<usize>,
    pub selected_text: String,
    pub correct_answer: usize,
    pub correct_text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Result plus review, returned by every submission path.
#[derive(Debug, Serialize)]
pub struct QuizOutcome {
    pub result: QuizResult,
    pub correct_count: usize,
    pub total_questions: usize,
    pub passing_score: u8,
    pub review: Vec<AnswerReview>,
}

/// DTO for a one-shot submission.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(max = 200))]
    pub answers: Vec<Option<usize>>,
}

/// DTO for starting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct StartAttemptRequest {
    #[validate(length(min = 1, max = 64))]
    pub module_id: String,
}

/// DTO for selecting an option inside an attempt.
#[derive(Debug, Deserialize)]
pub struct SelectAnswerRequest {
    pub question: usize,
    pub option: usize,
}

/// Snapshot of an attempt for the client.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptView {
    pub id: Uuid,
    pub quiz_id: String,
    pub state: AttemptState,
    pub answers: Vec<Option<usize>>,
    pub answered: usize,
    pub total_questions: usize,

    /// Seconds left on the countdown, absent for untimed quizzes.
    pub time_left: Option<u32>,

    pub result_id: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Returned when an attempt starts.
#[derive(Debug, Serialize)]
pub struct AttemptStarted {
    pub attempt: AttemptView,
    pub quiz: PublicQuiz,
}
