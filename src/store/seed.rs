// src/store/seed.rs

//! Mock catalog loaded at start-up.

use crate::models::{
    badge::{Badge, Rarity},
    course::{Course, Module},
    leaderboard::LeaderboardEntry,
    quiz::{Question, Quiz},
    user::{Role, User},
};

use super::Store;

impl Store {
    /// A store filled with the demo users, courses, quizzes and badges.
    pub fn seeded() -> Self {
        Store::new(users(), courses(), modules(), quizzes(), badges(), leaderboard())
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, points: u32, level: u32, badges: &[&str]) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        points,
        level,
        badges: badges.iter().map(|b| b.to_string()).collect(),
    }
}

fn users() -> Vec<User> {
    vec![
        user("user-1", "Sarah Mitchell", "admin@learnhub.com", Role::Admin, 0, 1, &[]),
        user("user-2", "Michael Torres", "trainer@learnhub.com", Role::Trainer, 0, 1, &[]),
        user("user-3", "Alex Johnson", "learner@learnhub.com", Role::Learner, 2450, 8, &["badge-1", "badge-2"]),
        user("user-4", "Priya Sharma", "priya@learnhub.com", Role::Learner, 3120, 10, &["badge-1", "badge-2", "badge-4"]),
        user("user-5", "David Chen", "david@learnhub.com", Role::Learner, 1980, 6, &["badge-1"]),
        user("user-6", "Emma Wilson", "emma@learnhub.com", Role::Learner, 2780, 9, &["badge-1", "badge-3"]),
    ]
}

fn course(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    duration: &str,
    enrolled: u32,
    rating: f32,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        instructor: "Michael Torres".to_string(),
        duration: duration.to_string(),
        // Derived from the modules when the store is built.
        modules: 0,
        enrolled,
        rating,
        progress: 0,
        is_completed: false,
    }
}

fn courses() -> Vec<Course> {
    vec![
        course(
            "course-1",
            "Product Knowledge Essentials",
            "Core features, plans and positioning of the product line.",
            "Product",
            "4h 30m",
            245,
            4.8,
        ),
        course(
            "course-2",
            "Customer Engagement Skills",
            "Listening, questioning and handling objections in the field.",
            "Soft Skills",
            "3h 15m",
            189,
            4.6,
        ),
        course(
            "course-3",
            "Sales Process Mastery",
            "From prospecting to closing, step by step.",
            "Sales",
            "5h",
            156,
            4.7,
        ),
        course(
            "course-4",
            "Compliance and Regulations",
            "Rules every representative must know before selling.",
            "Compliance",
            "2h",
            312,
            4.4,
        ),
    ]
}

fn module(id: &str, course_id: &str, title: &str, duration: &str, is_completed: bool) -> Module {
    Module {
        id: id.to_string(),
        course_id: course_id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        is_completed,
    }
}

fn modules() -> Vec<Module> {
    vec![
        module("module-1-1", "course-1", "Introduction to the Product Line", "30 min", true),
        module("module-1-2", "course-1", "Plans and Pricing", "45 min", true),
        module("module-1-3", "course-1", "Device Portfolio", "60 min", true),
        module("module-1-4", "course-1", "Value-Added Services", "45 min", false),
        module("module-1-5", "course-1", "Competitive Positioning", "60 min", false),
        module("module-2-1", "course-2", "Active Listening", "40 min", true),
        module("module-2-2", "course-2", "Asking the Right Questions", "50 min", true),
        module("module-2-3", "course-2", "Handling Objections", "55 min", true),
        module("module-2-4", "course-2", "Following Up", "50 min", true),
        module("module-3-1", "course-3", "Prospecting", "60 min", false),
        module("module-3-2", "course-3", "Presenting Solutions", "90 min", false),
        module("module-3-3", "course-3", "Closing the Deal", "90 min", false),
        module("module-4-1", "course-4", "Know Your Customer", "60 min", false),
        module("module-4-2", "course-4", "Data Protection", "60 min", false),
    ]
}

fn question(id: &str, text: &str, options: [&str; 4], correct_answer: usize, explanation: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: Some(explanation.to_string()),
    }
}

fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "quiz-1".to_string(),
            module_id: "module-1-4".to_string(),
            title: "Value-Added Services Check".to_string(),
            questions: vec![
                question(
                    "q-1-1",
                    "Which service bundles streaming with a monthly plan?",
                    ["Entertainment Pack", "Roaming Saver", "Cloud Backup", "Device Care"],
                    0,
                    "The Entertainment Pack adds streaming to any monthly plan.",
                ),
                question(
                    "q-1-2",
                    "What does Device Care cover?",
                    ["Data overage", "International calls", "Accidental damage", "Late fees"],
                    2,
                    "Device Care is an insurance product for accidental damage.",
                ),
                question(
                    "q-1-3",
                    "Who benefits most from Roaming Saver?",
                    ["Home users", "Frequent travellers", "Students", "Gamers"],
                    1,
                    "Roaming Saver lowers charges abroad.",
                ),
                question(
                    "q-1-4",
                    "Cloud Backup storage is billed...",
                    ["Per call", "Per device", "Per SMS", "Per storage tier"],
                    3,
                    "Cloud Backup is sold in storage tiers.",
                ),
            ],
            passing_score: 70,
            time_limit: Some(10),
        },
        Quiz {
            id: "quiz-2".to_string(),
            module_id: "module-2-2".to_string(),
            title: "Questioning Techniques".to_string(),
            questions: vec![
                question(
                    "q-2-1",
                    "Which question type invites the customer to elaborate?",
                    ["Closed", "Open", "Leading", "Rhetorical"],
                    1,
                    "Open questions cannot be answered with yes or no.",
                ),
                question(
                    "q-2-2",
                    "A good follow-up question should...",
                    ["Change the topic", "Repeat the pitch", "Clarify a need", "End the call"],
                    2,
                    "Follow-ups dig deeper into what the customer said.",
                ),
            ],
            passing_score: 50,
            time_limit: None,
        },
        Quiz {
            id: "quiz-3".to_string(),
            module_id: "module-3-3".to_string(),
            title: "Closing Techniques".to_string(),
            questions: vec![
                question(
                    "q-3-1",
                    "An assumptive close...",
                    ["Asks for permission", "Proceeds as if agreed", "Offers a discount", "Ends the meeting"],
                    1,
                    "The assumptive close treats the sale as decided.",
                ),
                question(
                    "q-3-2",
                    "When should you summarise benefits?",
                    ["Never", "Before asking for the sale", "After the customer leaves", "Only by email"],
                    1,
                    "A summary right before the ask reinforces value.",
                ),
                question(
                    "q-3-3",
                    "Silence after a closing question is...",
                    ["A failure", "Rude", "Useful thinking time", "A reason to leave"],
                    2,
                    "Let the customer think.",
                ),
            ],
            passing_score: 67,
            time_limit: Some(5),
        },
    ]
}

fn badge(id: &str, name: &str, rarity: Rarity, icon: &str, description: &str) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        rarity,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn badges() -> Vec<Badge> {
    vec![
        badge("badge-1", "First Steps", Rarity::Common, "🎯", "Complete your first module"),
        badge("badge-2", "Quick Learner", Rarity::Rare, "⚡", "Complete 5 modules in one week"),
        badge("badge-3", "Quiz Master", Rarity::Epic, "🧠", "Score 100% on 3 quizzes"),
        badge("badge-4", "Course Champion", Rarity::Epic, "🏆", "Complete 3 courses"),
        badge("badge-5", "Top Performer", Rarity::Legendary, "👑", "Reach first place on the leaderboard"),
        badge("badge-6", "Dedicated", Rarity::Rare, "🔥", "Learn 7 days in a row"),
    ]
}

fn entry(user_id: &str, name: &str, points: u32, courses_completed: u32, badges: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: user_id.to_string(),
        name: name.to_string(),
        rank: 0,
        points,
        courses_completed,
        badges,
    }
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry("user-3", "Alex Johnson", 2450, 2, 2),
        entry("user-4", "Priya Sharma", 3120, 4, 3),
        entry("user-5", "David Chen", 1980, 1, 1),
        entry("user-6", "Emma Wilson", 2780, 3, 2),
    ]
}
