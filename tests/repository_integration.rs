//! Integration tests for repository layer
//!
//! These tests verify that the PostgreSQL repositories behave like the
//! in-memory store: id ordering, legacy category forms, search escaping and
//! quiz exclusion.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use sqlx::PgPool;
use trivia_api::domain::question::{CategoryKey, NewQuestion, SearchTerm};
use trivia_api::domain::quiz::QuizScope;
use trivia_api::domain::repositories::{
    CategoryRepository, QuestionRepository, RepositoryError,
};
use trivia_api::infrastructure::database::run_migrations;
use trivia_api::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Set up test database connection pool with migrations applied
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

/// Category id no seeded row uses, unique per test
fn test_category(offset: i32) -> i32 {
    900_000 + (std::process::id() % 10_000) as i32 * 10 + offset
}

/// Insert a row exactly as given, bypassing normalization
async fn insert_raw(pool: &PgPool, text: &str, category: &str) -> i32 {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ($1, 'answer', $2, 1) RETURNING id",
    )
    .bind(text)
    .bind(category)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test question");

    id
}

/// Clean up test data after each test
async fn cleanup_category(pool: &PgPool, category_id: i32) {
    let [plain, spaced] = CategoryKey::stored_forms(category_id);
    sqlx::query("DELETE FROM questions WHERE category = $1 OR category = $2")
        .bind(plain)
        .bind(spaced)
        .execute(pool)
        .await
        .expect("Failed to cleanup test questions");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_category_repository_lists_seeded_categories() {
    let pool = setup_test_db().await;
    let repo = PostgresCategoryRepository::new(pool);

    let categories = repo.find_all().await.expect("list categories");

    assert!(categories.len() >= 6);
    assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(categories[0].kind, "Science");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_question_repository_create_find_delete() {
    let pool = setup_test_db().await;
    let category = test_category(0);
    let repo = PostgresQuestionRepository::new(pool.clone());
    let before = repo.count().await.expect("count");

    let created = repo
        .create(NewQuestion::new(
            "Repository question",
            "Repository answer",
            CategoryKey::normalize(&format!(" {}", category)),
            3,
        ))
        .await
        .expect("create question");

    assert_eq!(created.category, category.to_string());
    assert_eq!(repo.count().await.expect("count"), before + 1);

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("find question")
        .expect("question exists");
    assert_eq!(found, created);

    repo.delete(created.id).await.expect("delete question");
    assert_eq!(repo.find_by_id(created.id).await.expect("find"), None);
    assert_eq!(repo.count().await.expect("count"), before);

    cleanup_category(&pool, category).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_question_repository_delete_missing() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let result = repo.delete(i32::MAX).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_question_repository_matches_legacy_category_form() {
    let pool = setup_test_db().await;
    let category = test_category(1);
    let repo = PostgresQuestionRepository::new(pool.clone());

    let plain = insert_raw(&pool, "plain", &category.to_string()).await;
    let spaced = insert_raw(&pool, "spaced", &format!(" {}", category)).await;
    insert_raw(&pool, "other", &format!("{}0", category)).await;

    let found: Vec<i32> = repo
        .find_by_category(category)
        .await
        .expect("find by category")
        .iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(found, vec![plain, spaced]);

    cleanup_category(&pool, category).await;
    cleanup_category(&pool, category * 10).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_question_repository_search_escapes_wildcards() {
    let pool = setup_test_db().await;
    let category = test_category(2);
    let repo = PostgresQuestionRepository::new(pool.clone());

    let literal = insert_raw(&pool, "Scored 100% ON the zx_marker test", &category.to_string()).await;
    insert_raw(&pool, "Scored 1000 on the zxamarker test", &category.to_string()).await;

    let term = SearchTerm::new(Some("100% on the ZX_MARKER")).unwrap();
    let found: Vec<i32> = repo
        .search(&term)
        .await
        .expect("search")
        .iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(found, vec![literal]);

    cleanup_category(&pool, category).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_question_repository_quiz_candidates() {
    let pool = setup_test_db().await;
    let category = test_category(3);
    let repo = PostgresQuestionRepository::new(pool.clone());

    let first = insert_raw(&pool, "q1", &category.to_string()).await;
    let second = insert_raw(&pool, "q2", &format!(" {}", category)).await;
    let third = insert_raw(&pool, "q3", &category.to_string()).await;

    let candidates: Vec<i32> = repo
        .find_quiz_candidates(QuizScope::Category(category), &[first, third])
        .await
        .expect("quiz candidates")
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(candidates, vec![second]);

    let everywhere = repo
        .find_quiz_candidates(QuizScope::All, &[first])
        .await
        .expect("quiz candidates");
    assert!(everywhere.iter().all(|q| q.id != first));
    assert!(everywhere.iter().any(|q| q.id == second));

    let none_excluded = repo
        .find_quiz_candidates(QuizScope::Category(category), &[])
        .await
        .expect("quiz candidates");
    assert_eq!(none_excluded.len(), 3);

    cleanup_category(&pool, category).await;
}
