// Question domain module
// Contains the question entity and the value objects it is built from

#![allow(clippy::module_inception)]

pub mod question;
pub mod value_objects;

// Re-export main types for convenience
pub use question::{NewQuestion, Question};
pub use value_objects::{CategoryKey, SearchTerm};
