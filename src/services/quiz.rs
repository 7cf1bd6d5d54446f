// src/services/quiz.rs

use crate::models::quiz::{AnswerReview, Quiz};

/// Outcome of scoring one set of answers against a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct_count: usize,
    pub total_questions: usize,
    /// Rounded percentage, 0 to 100.
    pub score: u8,
    pub passed: bool,
}

/// Rounded percentage `part / whole * 100`, half rounding up.
/// An empty whole yields 0.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}

/// Scores `answers` against the quiz's answer key.
///
/// Position `i` of `answers` is the option chosen for question `i`. Missing
/// positions and `None` count as incorrect; positions past the last question
/// are ignored.
pub fn evaluate(quiz: &Quiz, answers: &[Option<usize>]) -> Evaluation {
    let total_questions = quiz.questions.len();
    let correct_count = quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(*i).copied().flatten() == Some(q.correct_answer))
        .count();

    let score = percentage(correct_count, total_questions);

    Evaluation {
        correct_count,
        total_questions,
        score,
        passed: score >= quiz.passing_score,
    }
}

/// Builds the per-question review shown on the result screen.
pub fn review(quiz: &Quiz, answers: &[Option<usize>]) -> Vec<AnswerReview> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = answers.get(i).copied().flatten();
            let selected_text = selected
                .and_then(|idx| q.options.get(idx))
                .cloned()
                .unwrap_or_else(|| "Not answered".to_string());

            AnswerReview {
                question_id: q.id.clone(),
                text: q.text.clone(),
                selected,
                selected_text,
                correct_answer: q.correct_answer,
                correct_text: q.options.get(q.correct_answer).cloned().unwrap_or_default(),
                is_correct: selected == Some(q.correct_answer),
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

/// Normalizes a submitted answer list to exactly one slot per question.
pub fn align_answers(quiz: &Quiz, answers: &[Option<usize>]) -> Vec<Option<usize>> {
    (0..quiz.questions.len())
        .map(|i| answers.get(i).copied().flatten())
        .collect()
}
