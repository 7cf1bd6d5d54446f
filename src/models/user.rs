// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The three personas of the portal. Fixed for the lifetime of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
    /// Also accepted as "dse".
    #[serde(alias = "dse")]
    Learner,
}

/// Every navigable screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Users,
    Courses,
    Analytics,
    Settings,
    #[serde(rename = "create")]
    CreateModule,
    Assessments,
    Students,
    Learning,
    Certificates,
    Leaderboard,
    Badges,
}

/// One entry of the role-derived navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: View,
    pub label: &'static str,
}

const fn item(id: View, label: &'static str) -> MenuItem {
    MenuItem { id, label }
}

static ADMIN_MENU: [MenuItem; 5] = [
    item(View::Dashboard, "Dashboard"),
    item(View::Users, "Manage Users"),
    item(View::Courses, "Courses"),
    item(View::Analytics, "Analytics"),
    item(View::Settings, "Settings"),
];

static TRAINER_MENU: [MenuItem; 5] = [
    item(View::Dashboard, "Dashboard"),
    item(View::Courses, "My Courses"),
    item(View::CreateModule, "Create Module"),
    item(View::Assessments, "Assessments"),
    item(View::Students, "Students"),
];

static LEARNER_MENU: [MenuItem; 5] = [
    item(View::Dashboard, "Dashboard"),
    item(View::Learning, "My Learning"),
    item(View::Certificates, "Certificates"),
    item(View::Leaderboard, "Leaderboard"),
    item(View::Badges, "My Badges"),
];

impl Role {
    /// Ordered navigation menu for this role.
    pub fn menu(self) -> &'static [MenuItem] {
        match self {
            Role::Admin => &ADMIN_MENU,
            Role::Trainer => &TRAINER_MENU,
            Role::Learner => &LEARNER_MENU,
        }
    }

    pub fn can_access(self, view: View) -> bool {
        self.menu().iter().any(|m| m.id == view)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
            Role::Learner => "learner",
        }
    }
}

/// A portal user, seeded at start-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub points: u32,
    pub level: u32,

    /// Ids of the badges this user has earned.
    pub badges: Vec<String>,
}

/// DTO for user login.
///
/// Only a length check on the email: a malformed address must fail the same
/// way an unknown one does.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    pub role: Role,
}

/// Returned on login and by `GET /api/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub menu: &'static [MenuItem],
}
