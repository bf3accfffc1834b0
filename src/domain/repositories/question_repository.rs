use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::question::{NewQuestion, Question, SearchTerm};
use crate::domain::quiz::QuizScope;

/// Repository trait for trivia questions
///
/// Every listing is ordered by question id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn find_all(&self) -> RepositoryResult<Vec<Question>>;

    /// Find a question by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>>;

    /// Questions whose text contains the term, ignoring case
    async fn search(&self, term: &SearchTerm) -> RepositoryResult<Vec<Question>>;

    /// Questions in a category, matching both stored forms of its id
    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>>;

    /// Questions in scope whose ids are not in `exclude`
    async fn find_quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> RepositoryResult<Vec<Question>>;

    /// Insert a question and return it with its assigned id
    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question by ID, failing with `NotFound` if nothing was removed
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Total number of stored questions
    async fn count(&self) -> RepositoryResult<i64>;
}
