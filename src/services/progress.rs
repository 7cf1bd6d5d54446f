// src/services/progress.rs

use crate::models::course::{Course, Module};

use super::quiz::percentage;

/// Course completion derived from the current module states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub total: usize,
    pub completed: usize,
    pub progress: u8,
    pub is_completed: bool,
}

/// Computes progress over the modules that belong to `course_id`.
///
/// A pure function of module states, so repeated calls agree.
pub fn compute<'a, I>(course_id: &str, modules: I) -> CourseProgress
where
    I: IntoIterator<Item = &'a Module>,
{
    let (total, completed) = modules
        .into_iter()
        .filter(|m| m.course_id == course_id)
        .fold((0, 0), |(total, done), m| {
            (total + 1, done + usize::from(m.is_completed))
        });

    let progress = percentage(completed, total);

    CourseProgress {
        total,
        completed,
        progress,
        is_completed: progress == 100,
    }
}

/// Writes a computed progress back onto the course.
pub fn apply(course: &mut Course, progress: CourseProgress) {
    course.modules = progress.total as u32;
    course.progress = progress.progress;
    course.is_completed = progress.is_completed;
}
