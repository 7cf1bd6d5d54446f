// src/models/mod.rs

pub mod badge;
pub mod course;
pub mod dashboard;
pub mod leaderboard;
pub mod quiz;
pub mod user;
