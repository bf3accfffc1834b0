// HTTP handlers, one per route
// Shared request and response pieces live here

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use std::collections::BTreeMap;

use axum::extract::Query;
use serde::{Deserialize, Serialize, Serializer};

use crate::api::errors::ApiError;
use crate::domain::pagination::PageNumber;
use crate::domain::question::Question;

/// Query string accepted by paginated routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Page requested through an optional, leniently parsed `page` parameter
pub fn requested_page(query: Option<Query<PageQuery>>) -> PageNumber {
    PageNumber::parse(query.as_ref().and_then(|q| q.page.as_deref()))
}

/// Integer path segment; anything else is treated like an unknown route
///
/// Ids beyond the `i32` range of stored rows are still valid here and simply
/// match nothing.
pub fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::not_found(format!("Invalid id in path: {:?}", raw)))
}

/// JSON value given either as a number or as a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

/// A question as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category.clone(),
            difficulty: question.difficulty,
        }
    }
}

/// The filter a question list was produced under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentCategory {
    /// Serialized as `"All"`
    All,
    /// Serialized as `null`
    Unfiltered,
    Id(i64),
}

impl Serialize for CurrentCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentCategory::All => serializer.serialize_str("All"),
            CurrentCategory::Unfiltered => serializer.serialize_none(),
            CurrentCategory::Id(id) => serializer.serialize_i64(*id),
        }
    }
}

/// Paginated question list
///
/// `total_questions` is the size of the returned page, which is what
/// existing clients read.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i32, String>>,
    pub current_category: CurrentCategory,
}

impl QuestionListResponse {
    pub fn new(page: &[Question], current_category: CurrentCategory) -> Self {
        Self {
            success: true,
            questions: page.iter().map(QuestionResponse::from).collect(),
            total_questions: page.len(),
            categories: None,
            current_category,
        }
    }

    pub fn with_categories(mut self, categories: BTreeMap<i32, String>) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Fallback for routes that do not exist
pub async fn not_found() -> ApiError {
    ApiError::not_found("No route matched the request")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_category_serialization() {
        assert_eq!(serde_json::to_value(CurrentCategory::All).unwrap(), json!("All"));
        assert_eq!(
            serde_json::to_value(CurrentCategory::Unfiltered).unwrap(),
            json!(null)
        );
        assert_eq!(serde_json::to_value(CurrentCategory::Id(3)).unwrap(), json!(3));
    }

    #[test]
    fn number_or_string_accepts_both() {
        let number: NumberOrString = serde_json::from_value(json!(2)).unwrap();
        let text: NumberOrString = serde_json::from_value(json!(" 2")).unwrap();

        assert_eq!(number, NumberOrString::Number(2));
        assert_eq!(text, NumberOrString::Text(" 2".to_string()));
        assert!(serde_json::from_value::<NumberOrString>(json!(true)).is_err());
    }

    #[test]
    fn path_id_must_be_integer() {
        assert_eq!(parse_path_id("12").unwrap(), 12);
        assert_eq!(parse_path_id("99999999999").unwrap(), 99_999_999_999);
        assert_eq!(parse_path_id("p").unwrap_err().status, axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn list_response_counts_the_page() {
        let page = vec![Question {
            id: 1,
            question: "q".to_string(),
            answer: "a".to_string(),
            category: "1".to_string(),
            difficulty: 1,
        }];
        let json = serde_json::to_value(QuestionListResponse::new(&page, CurrentCategory::Id(1)))
            .unwrap();

        assert_eq!(json["total_questions"], 1);
        assert_eq!(json["current_category"], 1);
        assert!(json.get("categories").is_none());
    }
}
