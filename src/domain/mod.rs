// Domain layer module exports
// Trivia questions, categories and the rules for paging and quiz selection
// Domain is independent of infrastructure concerns

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod repositories;
