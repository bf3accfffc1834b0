// Infrastructure layer module
// Contains database adapters and the in-process store
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
