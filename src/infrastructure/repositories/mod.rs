// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_store;
pub mod postgres_category_repository;
pub mod postgres_question_repository;

pub use in_memory_store::InMemoryTriviaStore;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_question_repository::PostgresQuestionRepository;
