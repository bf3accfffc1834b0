use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::category::Category;
use crate::domain::question::{CategoryKey, NewQuestion, Question, SearchTerm};
use crate::domain::quiz::QuizScope;
use crate::domain::repositories::{
    CategoryRepository, QuestionRepository, RepositoryError, RepositoryResult,
};

/// Default categories, matching the seed migration
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

const SAMPLE_QUESTIONS: [(&str, &str, &str, i32); 10] = [
    ("What is the heaviest organ in the human body?", "The Liver", "1", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "1", 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", "2", 1),
    ("La Giaconda is better known as what?", "Mona Lisa", "2", 3),
    ("What is the largest lake in Africa?", "Lake Victoria", "3", 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", "3", 2),
    ("Who invented Peanut Butter?", "George Washington Carver", "4", 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", "5", 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "6", 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "6", 4),
];

#[derive(Debug, Default)]
struct StoreState {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    last_id: i32,
}

/// Process-local store implementing both repository traits
///
/// Question ids are assigned from a counter that never reuses a deleted id.
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    state: RwLock<StoreState>,
}

impl InMemoryTriviaStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given rows as-is
    ///
    /// Question categories are not normalized, so legacy `" N"` rows can be
    /// represented.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        let state = StoreState {
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            last_id,
        };
        Self {
            state: RwLock::new(state),
        }
    }

    /// Creates a store with the default categories and a few sample questions
    pub fn seeded() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(id, kind)| Category::new(*id, *kind))
            .collect();
        let questions = SAMPLE_QUESTIONS
            .iter()
            .zip(1..)
            .map(|((question, answer, category, difficulty), id)| Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category: category.to_string(),
                difficulty: *difficulty,
            })
            .collect();
        Self::with_data(categories, questions)
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let state = self.state.read().await;
        state
            .questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        Ok(self.state.read().await.questions.get(&id).cloned())
    }

    async fn search(&self, term: &SearchTerm) -> RepositoryResult<Vec<Question>> {
        Ok(self.filtered(|q| term.matches(&q.question)).await)
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        Ok(self
            .filtered(|q| CategoryKey::matches_stored(&q.category, category_id))
            .await)
    }

    async fn find_quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> RepositoryResult<Vec<Question>> {
        Ok(self
            .filtered(|q| {
                let in_scope = match scope.category_id() {
                    Some(id) => CategoryKey::matches_stored(&q.category, id),
                    None => true,
                };
                in_scope && !exclude.contains(&q.id)
            })
            .await)
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        let mut state = self.state.write().await;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("Question id space exhausted".to_string()))?;
        let question = question.into_question(id);
        state.last_id = id;
        state.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        match self.state.write().await.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("Question not found: {}", id))),
        }
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.state.read().await.questions.len() as i64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, text: &str, category: &str) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category: category.to_string(),
            difficulty: 1,
        }
    }

    fn ids(questions: &[Question]) -> Vec<i32> {
        questions.iter().map(|q| q.id).collect()
    }

    #[tokio::test]
    async fn seeded_store_has_default_categories() {
        let store = InMemoryTriviaStore::seeded();
        let categories = CategoryRepository::find_all(&store).await.unwrap();

        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], Category::new(1, "Science"));
        assert_eq!(QuestionRepository::count(&store).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn create_assigns_fresh_increasing_ids() {
        let store = InMemoryTriviaStore::with_data(vec![], vec![question(7, "q", "1")]);

        let first = store
            .create(NewQuestion::new("a", "b", CategoryKey::normalize(" 2"), 1))
            .await
            .unwrap();
        store.delete(first.id).await.unwrap();
        let second = store
            .create(NewQuestion::new("c", "d", CategoryKey::normalize("2"), 1))
            .await
            .unwrap();

        assert_eq!(first.id, 8);
        assert_eq!(first.category, "2");
        assert_eq!(second.id, 9);
    }

    #[tokio::test]
    async fn delete_missing_question_is_not_found() {
        let store = InMemoryTriviaStore::new();
        let result = store.delete(1).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn category_filter_matches_legacy_form() {
        let store = InMemoryTriviaStore::with_data(
            vec![],
            vec![
                question(1, "a", "1"),
                question(2, "b", " 1"),
                question(3, "c", "2"),
                question(4, "d", "11"),
            ],
        );

        let found = store.find_by_category(1).await.unwrap();
        assert_eq!(ids(&found), vec![1, 2]);
    }

    #[tokio::test]
    async fn quiz_candidates_exclude_previous_questions() {
        let store = InMemoryTriviaStore::with_data(
            vec![],
            vec![
                question(1, "a", "1"),
                question(2, "b", "1"),
                question(3, "c", "1"),
                question(4, "d", "2"),
                question(5, "e", " 1"),
            ],
        );

        let in_category = store
            .find_quiz_candidates(QuizScope::Category(1), &[1, 2])
            .await
            .unwrap();
        assert_eq!(ids(&in_category), vec![3, 5]);

        let legacy_only = store
            .find_quiz_candidates(QuizScope::Category(1), &[1, 2, 3])
            .await
            .unwrap();
        assert_eq!(ids(&legacy_only), vec![5]);

        let everywhere = store.find_quiz_candidates(QuizScope::All, &[1]).await.unwrap();
        assert_eq!(ids(&everywhere), vec![2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn search_is_ordered_and_case_insensitive() {
        let store = InMemoryTriviaStore::with_data(
            vec![],
            vec![
                question(5, "Title of the film", "1"),
                question(2, "which TITLE?", "1"),
                question(3, "nothing", "1"),
            ],
        );

        let term = SearchTerm::new(Some("title")).unwrap();
        let found = store.search(&term).await.unwrap();
        assert_eq!(ids(&found), vec![2, 5]);
    }
}
