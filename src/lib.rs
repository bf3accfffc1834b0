//! Trivia API Library
//!
//! REST backend serving trivia questions grouped by category: listing,
//! pagination, search, creation, deletion and a quiz mode that hands out
//! random unseen questions.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
