// src/services/attempt.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::quiz::{AttemptView, Quiz},
};

use super::timer::TimerHandle;

/// Lifecycle of a quiz attempt.
///
/// `Unanswered -> InProgress -> Submitted -> Scored`. Submission is allowed
/// from either open state; the countdown forces it when time runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    Unanswered,
    InProgress,
    Submitted,
    Scored,
}

/// One learner working through one quiz.
#[derive(Debug)]
pub struct QuizAttempt {
    id: Uuid,
    quiz_id: String,
    user_id: String,
    state: AttemptState,
    selected: Vec<Option<usize>>,
    time_left: Option<u32>,
    result_id: Option<String>,
    started_at: DateTime<Utc>,
    timer: Option<TimerHandle>,
}

impl QuizAttempt {
    pub fn new(quiz: &Quiz, user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz_id: quiz.id.clone(),
            user_id: user_id.to_string(),
            state: AttemptState::Unanswered,
            selected: vec![None; quiz.questions.len()],
            time_left: quiz.time_limit_secs(),
            result_id: None,
            started_at: now,
            timer: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, AttemptState::Unanswered | AttemptState::InProgress)
    }

    pub fn is_timed(&self) -> bool {
        self.time_left.is_some()
    }

    /// Hands the countdown to the attempt. A closed attempt cancels it at once.
    pub fn attach_timer(&mut self, timer: TimerHandle) {
        if self.is_open() {
            self.timer = Some(timer);
        } else {
            timer.cancel();
        }
    }

    /// Records the option chosen for one question. Re-selecting overwrites.
    pub fn select(&mut self, quiz: &Quiz, question: usize, option: usize) -> Result<(), AppError> {
        if !self.is_open() {
            return Err(AppError::Conflict("Attempt is already submitted".to_string()));
        }

        let q = quiz
            .questions
            .get(question)
            .ok_or_else(|| AppError::BadRequest(format!("Question {} does not exist", question)))?;
        if option >= q.options.len() {
            return Err(AppError::BadRequest(format!(
                "Option {} does not exist for question {}",
                option, question
            )));
        }

        self.selected[question] = Some(option);
        self.state = AttemptState::InProgress;
        Ok(())
    }

    /// Moves to `Submitted`, cancelling the countdown, and hands back the answers.
    pub fn submit(&mut self) -> Result<Vec<Option<usize>>, AppError> {
        if !self.is_open() {
            return Err(AppError::Conflict("Attempt is already submitted".to_string()));
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.state = AttemptState::Submitted;
        Ok(self.selected.clone())
    }

    /// Submission forced by the countdown. The countdown task is the caller,
    /// so its handle is released rather than aborted.
    pub fn expire(&mut self) -> Result<Vec<Option<usize>>, AppError> {
        if let Some(timer) = self.timer.take() {
            timer.disarm();
        }
        self.time_left = Some(0);
        self.submit()
    }

    pub fn mark_scored(&mut self, result_id: String) {
        self.state = AttemptState::Scored;
        self.result_id = Some(result_id);
    }

    /// Advances the countdown by one second.
    ///
    /// Returns the remaining seconds, or `None` when the attempt is untimed
    /// or no longer open.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.is_open() {
            return None;
        }
        let left = self.time_left.as_mut()?;
        *left = left.saturating_sub(1);
        Some(*left)
    }

    pub fn view(&self) -> AttemptView {
        AttemptView {
            id: self.id,
            quiz_id: self.quiz_id.clone(),
            state: self.state,
            answers: self.selected.clone(),
            answered: self.selected.iter().filter(|a| a.is_some()).count(),
            total_questions: self.selected.len(),
            time_left: self.time_left,
            result_id: self.result_id.clone(),
            started_at: self.started_at,
        }
    }
}
