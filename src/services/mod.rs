// src/services/mod.rs

pub mod attempt;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod timer;
