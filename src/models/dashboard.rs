// src/models/dashboard.rs

use serde::Serialize;

use super::course::Course;

/// Role-specific landing screen. Tagged by role in JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Admin(AdminDashboard),
    Trainer(TrainerDashboard),
    Learner(LearnerDashboard),
}

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub total_learners: usize,
    pub active_courses: usize,
    pub total_enrollments: u32,

    /// Rounded mean of course progress.
    pub average_completion: u8,
}

#[derive(Debug, Serialize)]
pub struct CoursePerformance {
    pub course_id: String,
    pub title: String,
    pub enrolled: u32,

    /// Estimated completions, `round(enrolled * progress / 100)`.
    pub completed: u32,
}

#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: u32,
    pub level: u32,
}

#[derive(Debug, Serialize)]
pub struct TrainerDashboard {
    pub course_count: usize,
    pub student_count: usize,
    pub total_enrollments: u32,

    /// Mean course rating, one decimal.
    pub average_rating: f32,

    pub course_performance: Vec<CoursePerformance>,
    pub students: Vec<StudentSummary>,
}

#[derive(Debug, Serialize)]
pub struct LearnerDashboard {
    pub in_progress_count: usize,
    pub completed_count: usize,
    pub points: u32,
    pub level: u32,
    pub in_progress: Vec<Course>,
    pub recommended: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct Certificate {
    pub course_id: String,
    pub course_title: String,
    pub instructor: String,
    pub issued_to: String,
}

#[derive(Debug, Serialize)]
pub struct CertificateSummary {
    pub certificates: Vec<Certificate>,
    pub total: usize,
    pub learning_hours: u32,
}
