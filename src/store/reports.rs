// src/store/reports.rs

//! Read models behind the dashboards, badges and certificates screens.

use crate::{
    config::{DASHBOARD_PREVIEW_LIMIT, LEARNING_HOURS_PER_CERTIFICATE, RECOMMENDED_COURSE_LIMIT},
    models::{
        badge::BadgeShelf,
        dashboard::{
            AdminDashboard, Certificate, CertificateSummary, CoursePerformance, Dashboard,
            LearnerDashboard, StudentSummary, TrainerDashboard,
        },
        leaderboard::LeaderboardResponse,
        user::{Role, User},
    },
};

use super::Store;

impl Store {
    pub fn dashboard_for(&self, user: &User) -> Dashboard {
        match user.role {
            Role::Admin => Dashboard::Admin(self.admin_dashboard()),
            Role::Trainer => Dashboard::Trainer(self.trainer_dashboard()),
            Role::Learner => Dashboard::Learner(self.learner_dashboard(user)),
        }
    }

    fn learners(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.role == Role::Learner)
    }

    fn total_enrollments(&self) -> u32 {
        self.courses.iter().map(|c| c.enrolled).sum()
    }

    fn admin_dashboard(&self) -> AdminDashboard {
        let total_progress: usize = self.courses.iter().map(|c| c.progress as usize).sum();
        let average_completion = match self.courses.len() {
            0 => 0,
            n => ((total_progress * 2 + n) / (n * 2)) as u8,
        };

        AdminDashboard {
            total_learners: self.learners().count(),
            active_courses: self.courses.len(),
            total_enrollments: self.total_enrollments(),
            average_completion,
        }
    }

    fn trainer_dashboard(&self) -> TrainerDashboard {
        let average_rating = match self.courses.len() {
            0 => 0.0,
            n => {
                let mean = self.courses.iter().map(|c| c.rating).sum::<f32>() / n as f32;
                (mean * 10.0).round() / 10.0
            }
        };

        let course_performance = self
            .courses
            .iter()
            .take(DASHBOARD_PREVIEW_LIMIT)
            .map(|c| CoursePerformance {
                course_id: c.id.clone(),
                title: c.title.clone(),
                enrolled: c.enrolled,
                completed: (c.enrolled * c.progress as u32 * 2 + 100) / 200,
            })
            .collect();

        let students = self
            .learners()
            .take(DASHBOARD_PREVIEW_LIMIT)
            .map(|u| StudentSummary {
                id: u.id.clone(),
                name: u.name.clone(),
                email: u.email.clone(),
                points: u.points,
                level: u.level,
            })
            .collect();

        TrainerDashboard {
            course_count: self.courses.len(),
            student_count: self.learners().count(),
            total_enrollments: self.total_enrollments(),
            average_rating,
            course_performance,
            students,
        }
    }

    fn learner_dashboard(&self, user: &User) -> LearnerDashboard {
        let in_progress: Vec<_> = self
            .courses
            .iter()
            .filter(|c| c.is_in_progress())
            .cloned()
            .collect();
        let recommended = self
            .courses
            .iter()
            .filter(|c| c.is_untouched())
            .take(RECOMMENDED_COURSE_LIMIT)
            .cloned()
            .collect();

        LearnerDashboard {
            in_progress_count: in_progress.len(),
            completed_count: self.courses.iter().filter(|c| c.is_completed).count(),
            points: user.points,
            level: user.level,
            in_progress,
            recommended,
        }
    }

    /// One certificate per completed course.
    pub fn certificates_for(&self, user: &User) -> CertificateSummary {
        let certificates: Vec<Certificate> = self
            .courses
            .iter()
            .filter(|c| c.is_completed)
            .map(|c| Certificate {
                course_id: c.id.clone(),
                course_title: c.title.clone(),
                instructor: c.instructor.clone(),
                issued_to: user.name.clone(),
            })
            .collect();
        let total = certificates.len();

        CertificateSummary {
            certificates,
            total,
            learning_hours: total as u32 * LEARNING_HOURS_PER_CERTIFICATE,
        }
    }

    pub fn badge_shelf(&self, user: &User) -> BadgeShelf {
        BadgeShelf::split(&self.badges, &user.badges)
    }

    pub fn leaderboard_for(&self, user_id: &str) -> LeaderboardResponse {
        let entries = self.leaderboard();
        let current_user_rank = entries
            .iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.rank);

        LeaderboardResponse {
            entries,
            current_user_rank,
        }
    }
}
