use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::question::{CategoryKey, NewQuestion, Question, SearchTerm};
use crate::domain::quiz::QuizScope;
use crate::domain::repositories::{QuestionRepository, RepositoryError, RepositoryResult};

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: String,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

fn storage(context: &str) -> impl FnOnce(sqlx::Error) -> RepositoryError + '_ {
    move |e| RepositoryError::Storage(format!("{}: {}", context, e))
}

/// PostgreSQL implementation of QuestionRepository
///
/// Uses runtime-checked queries against the `questions` table; ids come from
/// its serial column.
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new PostgresQuestionRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage("Failed to list questions"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        let row: Option<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage("Failed to find question by id"))?;

        Ok(row.map(Question::from))
    }

    async fn search(&self, term: &SearchTerm) -> RepositoryResult<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(&self.pool)
        .await
        .map_err(storage("Failed to search questions"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        let [plain, spaced] = CategoryKey::stored_forms(category_id);
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1 OR category = $2
            ORDER BY id
            "#,
        )
        .bind(plain)
        .bind(spaced)
        .fetch_all(&self.pool)
        .await
        .map_err(storage("Failed to find questions by category"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> RepositoryResult<Vec<Question>> {
        let (plain, spaced) = match scope.category_id() {
            Some(id) => {
                let [plain, spaced] = CategoryKey::stored_forms(id);
                (Some(plain), Some(spaced))
            }
            None => (None, None),
        };
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::text IS NULL OR category = $1 OR category = $2::text)
              AND NOT (id = ANY($3))
            ORDER BY id
            "#,
        )
        .bind(plain)
        .bind(spaced)
        .bind(exclude.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(storage("Failed to find quiz candidates"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.as_str())
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(storage("Failed to create question"))?;

        Ok(Question::from(row))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage("Failed to delete question"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Question not found: {}", id)));
        }

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(storage("Failed to count questions"))?;

        Ok(count)
    }
}
