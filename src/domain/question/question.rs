use super::value_objects::CategoryKey;

/// A stored trivia question
///
/// Questions are created and deleted but never updated in place.
/// `category` holds the raw stored reference, which for legacy rows may
/// carry a leading space (see [`CategoryKey::stored_forms`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

/// A question that has not been persisted yet
///
/// Built only from request input whose fields were all present; the
/// category is normalized so new rows never use the legacy spaced form.
///
/// # Example
/// ```
/// use trivia_api::domain::question::{CategoryKey, NewQuestion};
///
/// let q = NewQuestion::new("Who?", "Me", CategoryKey::normalize(" 3"), 2);
/// assert_eq!(q.category.as_str(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryKey,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryKey,
        difficulty: i32,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Attaches the store-assigned id
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category.into_string(),
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_question_keeps_fields_and_assigns_id() {
        let new = NewQuestion::new("Q", "A", CategoryKey::normalize("4"), 3);
        let question = new.into_question(42);

        assert_eq!(question.id, 42);
        assert_eq!(question.question, "Q");
        assert_eq!(question.answer, "A");
        assert_eq!(question.category, "4");
        assert_eq!(question.difficulty, 3);
    }

    #[test]
    fn empty_text_is_accepted() {
        let question = NewQuestion::new("", "", CategoryKey::normalize(""), 1).into_question(1);
        assert_eq!(question.question, "");
        assert_eq!(question.category, "");
    }
}
