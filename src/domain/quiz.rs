use rand::seq::SliceRandom;
use rand::Rng;

use super::question::Question;

/// Category id that means "every category" in quiz mode
pub const ALL_CATEGORIES: i32 = 0;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    /// Scope for an integer category id
    pub fn from_id(id: i64) -> Result<Self, String> {
        let id = i32::try_from(id).map_err(|_| format!("Category id out of range: {}", id))?;
        Ok(if id == ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        })
    }

    /// Scope for a category id sent as a string by older clients
    ///
    /// # Example
    /// ```
    /// use trivia_api::domain::quiz::QuizScope;
    ///
    /// assert_eq!(QuizScope::parse_legacy(" 1"), Ok(QuizScope::Category(1)));
    /// assert_eq!(QuizScope::parse_legacy("0"), Ok(QuizScope::All));
    /// assert!(QuizScope::parse_legacy("science").is_err());
    /// ```
    pub fn parse_legacy(raw: &str) -> Result<Self, String> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Invalid quiz category id: {:?}", raw))?;
        Self::from_id(id)
    }

    /// The category id to filter on, if any
    pub fn category_id(&self) -> Option<i32> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(*id),
        }
    }
}

/// Picks one question uniformly at random, or `None` when exhausted
pub fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
