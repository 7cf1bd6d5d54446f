// src/models/course.rs

use serde::{Deserialize, Serialize};

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub instructor: String,

    /// Human readable length, e.g. "4h 30m".
    pub duration: String,

    /// Number of modules owned by this course.
    pub modules: u32,

    /// Number of enrolled learners.
    pub enrolled: u32,

    pub rating: f32,

    /// Completion percentage, 0 to 100. Always derived from module states.
    pub progress: u8,

    /// True iff `progress == 100`.
    pub is_completed: bool,
}

impl Course {
    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && self.progress < 100
    }

    pub fn is_untouched(&self) -> bool {
        self.progress == 0
    }
}

/// A learning module. Belongs to exactly one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub duration: String,
    pub is_completed: bool,
}

/// Course list filter of the "My Learning" screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseFilter {
    #[default]
    All,
    InProgress,
    Completed,
}

impl CourseFilter {
    pub fn matches(self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::InProgress => course.is_in_progress(),
            CourseFilter::Completed => course.is_completed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default)]
    pub filter: CourseFilter,
}

/// A course together with its modules, in catalog order.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub modules: Vec<Module>,
    pub completed_modules: usize,
}

/// Returned after a module completion.
#[derive(Debug, Serialize)]
pub struct ModuleCompletion {
    pub module: Module,
    pub course: Course,
}
