// src/store/mod.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        badge::Badge,
        course::{Course, CourseDetail, CourseFilter, Module, ModuleCompletion},
        leaderboard::{LeaderboardEntry, rank_entries},
        quiz::{AttemptStarted, AttemptView, PublicQuiz, Quiz, QuizOutcome, QuizResult},
        user::{Role, User},
    },
    services::{attempt::QuizAttempt, progress, quiz, timer::TimerHandle},
};

mod reports;
mod seed;

/// The store shared by handlers and countdown tasks.
pub type SharedStore = Arc<RwLock<Store>>;

/// What a countdown tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// Still counting; seconds left.
    Running(u32),
    /// Time ran out and the attempt was scored.
    Expired(QuizResult),
    /// Attempt is gone, closed or untimed. The countdown should exit.
    Stopped,
}

/// Process-wide in-memory state: catalog, users, result history and live
/// quiz attempts.
///
/// Everything is read through accessors; the only mutations are module
/// completion and quiz submission (directly or through an attempt).
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    courses: Vec<Course>,
    modules: Vec<Module>,
    quizzes: Vec<Quiz>,
    badges: Vec<Badge>,
    leaderboard: Vec<LeaderboardEntry>,
    results: Vec<QuizResult>,
    attempts: HashMap<Uuid, QuizAttempt>,
}

impl Store {
    pub fn new(
        users: Vec<User>,
        courses: Vec<Course>,
        modules: Vec<Module>,
        quizzes: Vec<Quiz>,
        badges: Vec<Badge>,
        leaderboard: Vec<LeaderboardEntry>,
    ) -> Self {
        let quizzes = quizzes
            .into_iter()
            .filter(|q| {
                let valid = q
                    .questions
                    .iter()
                    .all(|question| question.correct_answer < question.options.len());
                if !valid {
                    tracing::warn!(quiz_id = %q.id, "Dropping quiz with an out-of-range answer key");
                }
                valid
            })
            .collect();

        let mut store = Self {
            users,
            courses,
            modules,
            quizzes,
            badges,
            leaderboard,
            ..Self::default()
        };

        let course_ids: Vec<String> = store.courses.iter().map(|c| c.id.clone()).collect();
        for id in &course_ids {
            store.recompute_course(id);
        }
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // ---- Read accessors ----

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn courses_matching(&self, filter: CourseFilter) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_detail(&self, id: &str) -> Result<CourseDetail, AppError> {
        let course = self
            .course(id)
            .ok_or_else(|| AppError::NotFound(format!("Course '{}' not found", id)))?;
        let modules: Vec<Module> = self.modules_for(id).into_iter().cloned().collect();
        let completed_modules = modules.iter().filter(|m| m.is_completed).count();

        Ok(CourseDetail {
            course: course.clone(),
            modules,
            completed_modules,
        })
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn modules_for(&self, course_id: &str) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|m| m.course_id == course_id)
            .collect()
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// The quiz attached to a module.
    pub fn quiz_for_module(&self, module_id: &str) -> Result<&Quiz, AppError> {
        if self.module(module_id).is_none() {
            return Err(AppError::NotFound(format!("Module '{}' not found", module_id)));
        }
        self.quizzes
            .iter()
            .find(|q| q.module_id == module_id)
            .ok_or_else(|| AppError::QuizNotFound(module_id.to_string()))
    }

    pub fn public_quiz_for_module(&self, module_id: &str) -> Result<PublicQuiz, AppError> {
        self.quiz_for_module(module_id).map(PublicQuiz::from)
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Leaderboard rows, ranked by points.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries = self.leaderboard.clone();
        rank_entries(&mut entries);
        entries
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    /// Result history the given user may see.
    pub fn results_visible_to(&self, user_id: &str, role: Role) -> Vec<QuizResult> {
        match role {
            Role::Learner => self
                .results
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect(),
            Role::Trainer | Role::Admin => self.results.clone(),
        }
    }

    pub fn attempt(&self, id: Uuid) -> Option<&QuizAttempt> {
        self.attempts.get(&id)
    }

    /// Attempt snapshot, only for its owner.
    pub fn attempt_view(&self, id: Uuid, user_id: &str) -> Result<AttemptView, AppError> {
        let attempt = self.attempts.get(&id).ok_or_else(|| attempt_not_found(id))?;
        check_owner(attempt, user_id)?;
        Ok(attempt.view())
    }

    // ---- Session ----

    /// Looks up a user by (email, role). Either mismatch is the same error.
    pub fn authenticate(&self, email: &str, role: Role) -> Result<&User, AppError> {
        self.users
            .iter()
            .find(|u| u.email == email && u.role == role)
            .ok_or(AppError::InvalidCredentials)
    }

    // ---- Progress ----

    /// Marks a module complete and recomputes its course.
    pub fn complete_module(&mut self, module_id: &str) -> Result<ModuleCompletion, AppError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| m.id == module_id)
            .ok_or_else(|| AppError::NotFound(format!("Module '{}' not found", module_id)))?;
        module.is_completed = true;
        let module = module.clone();

        let course = self.recompute_course(&module.course_id).cloned().ok_or_else(|| {
            AppError::NotFound(format!("Course '{}' not found", module.course_id))
        })?;

        tracing::info!(
            module_id = %module.id,
            course_id = %course.id,
            progress = course.progress,
            completed = course.is_completed,
            "Module completed"
        );

        Ok(ModuleCompletion { module, course })
    }

    /// Re-derives a course's progress from its modules.
    pub fn recompute_course(&mut self, course_id: &str) -> Option<&Course> {
        let computed = progress::compute(course_id, &self.modules);
        let course = self.courses.iter_mut().find(|c| c.id == course_id)?;
        progress::apply(course, computed);
        Some(&*course)
    }

    // ---- Quizzes ----

    /// Scores a one-shot submission and appends it to the history.
    pub fn submit_quiz(
        &mut self,
        quiz_id: &str,
        user_id: &str,
        answers: &[Option<usize>],
        now: DateTime<Utc>,
    ) -> Result<QuizOutcome, AppError> {
        let quiz = self
            .quiz(quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz '{}' not found", quiz_id)))?;

        let answers = quiz::align_answers(quiz, answers);
        let evaluation = quiz::evaluate(quiz, &answers);
        let review = quiz::review(quiz, &answers);
        let passing_score = quiz.passing_score;

        let result = QuizResult {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            score: evaluation.score,
            answers,
            completed_at: now,
            passed: evaluation.passed,
        };
        self.results.push(result.clone());

        tracing::info!(
            quiz_id,
            user_id,
            score = result.score,
            passed = result.passed,
            "Quiz result recorded"
        );

        Ok(QuizOutcome {
            result,
            correct_count: evaluation.correct_count,
            total_questions: evaluation.total_questions,
            passing_score,
            review,
        })
    }

    /// Opens an attempt at the quiz of `module_id`.
    ///
    /// Any older attempt by the same user at the same quiz is dropped: an open
    /// one is abandoned, a scored one is already in the result history.
    /// The caller starts the countdown when the attempt is timed.
    pub fn start_attempt(
        &mut self,
        module_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<AttemptStarted, AppError> {
        let quiz = self.quiz_for_module(module_id)?.clone();

        self.attempts
            .retain(|_, a| !(a.user_id() == user_id && a.quiz_id() == quiz.id));

        let attempt = QuizAttempt::new(&quiz, user_id, now);
        let view = attempt.view();
        self.attempts.insert(attempt.id(), attempt);

        tracing::info!(attempt_id = %view.id, quiz_id = %quiz.id, user_id, "Quiz attempt started");

        Ok(AttemptStarted {
            attempt: view,
            quiz: PublicQuiz::from(&quiz),
        })
    }

    /// Gives the countdown to its attempt. If the attempt is gone the handle
    /// is dropped, which stops the task.
    pub fn attach_timer(&mut self, id: Uuid, timer: TimerHandle) {
        if let Some(attempt) = self.attempts.get_mut(&id) {
            attempt.attach_timer(timer);
        }
    }

    pub fn select_answer(
        &mut self,
        id: Uuid,
        user_id: &str,
        question: usize,
        option: usize,
    ) -> Result<AttemptView, AppError> {
        let attempt = self.attempts.get_mut(&id).ok_or_else(|| attempt_not_found(id))?;
        check_owner(attempt, user_id)?;
        let quiz = self
            .quizzes
            .iter()
            .find(|q| q.id == attempt.quiz_id())
            .ok_or_else(|| AppError::NotFound(format!("Quiz '{}' not found", attempt.quiz_id())))?;

        attempt.select(quiz, question, option)?;
        Ok(attempt.view())
    }

    /// Manual submission. Stops the countdown before scoring.
    pub fn submit_attempt(
        &mut self,
        id: Uuid,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<QuizOutcome, AppError> {
        let attempt = self.attempts.get_mut(&id).ok_or_else(|| attempt_not_found(id))?;
        check_owner(attempt, user_id)?;
        let answers = attempt.submit()?;
        let quiz_id = attempt.quiz_id().to_string();

        self.score_attempt(id, &quiz_id, user_id, &answers, now)
    }

    /// Leaves an attempt (navigation away). Its countdown is cancelled.
    pub fn abandon_attempt(&mut self, id: Uuid, user_id: &str) -> Result<(), AppError> {
        let attempt = self.attempts.get(&id).ok_or_else(|| attempt_not_found(id))?;
        check_owner(attempt, user_id)?;
        self.attempts.remove(&id);
        tracing::debug!(attempt_id = %id, user_id, "Quiz attempt abandoned");
        Ok(())
    }

    /// Drops every attempt of a user, e.g. on logout. Open ones are abandoned
    /// and scored ones live on as results.
    pub fn abandon_attempts_for(&mut self, user_id: &str) -> usize {
        let before = self.attempts.len();
        self.attempts.retain(|_, a| a.user_id() != user_id);
        before - self.attempts.len()
    }

    /// One countdown step for an attempt. Auto-submits at zero.
    pub fn tick_attempt(&mut self, id: Uuid, now: DateTime<Utc>) -> TickOutcome {
        let Some(attempt) = self.attempts.get_mut(&id) else {
            return TickOutcome::Stopped;
        };

        match attempt.tick() {
            None => TickOutcome::Stopped,
            Some(0) => {
                let Ok(answers) = attempt.expire() else {
                    return TickOutcome::Stopped;
                };
                let quiz_id = attempt.quiz_id().to_string();
                let user_id = attempt.user_id().to_string();

                match self.score_attempt(id, &quiz_id, &user_id, &answers, now) {
                    Ok(outcome) => TickOutcome::Expired(outcome.result),
                    Err(e) => {
                        tracing::error!(attempt_id = %id, "Failed to auto-submit attempt: {}", e);
                        TickOutcome::Stopped
                    }
                }
            }
            Some(remaining) => TickOutcome::Running(remaining),
        }
    }

    fn score_attempt(
        &mut self,
        id: Uuid,
        quiz_id: &str,
        user_id: &str,
        answers: &[Option<usize>],
        now: DateTime<Utc>,
    ) -> Result<QuizOutcome, AppError> {
        let outcome = self.submit_quiz(quiz_id, user_id, answers, now)?;
        if let Some(attempt) = self.attempts.get_mut(&id) {
            attempt.mark_scored(outcome.result.id.clone());
        }
        Ok(outcome)
    }
}

fn attempt_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Attempt '{}' not found", id))
}

fn check_owner(attempt: &QuizAttempt, user_id: &str) -> Result<(), AppError> {
    if attempt.user_id() != user_id {
        return Err(AppError::Forbidden("Attempt belongs to another user".to_string()));
    }
    Ok(())
}
