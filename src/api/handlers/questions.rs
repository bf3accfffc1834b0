use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{
    parse_path_id, requested_page, CurrentCategory, NumberOrString, PageQuery,
    QuestionListResponse, QuestionResponse,
};
use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::category::category_map;
use crate::domain::question::{CategoryKey, NewQuestion, SearchTerm};

/// Request body for creating a question
///
/// All four fields must be present; their contents are not checked.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<NumberOrString>,
    pub category: Option<NumberOrString>,
}

impl CreateQuestionRequest {
    /// Checks field presence and builds the question to insert
    pub fn into_new_question(self) -> Result<NewQuestion, String> {
        let missing: Vec<&str> = [
            ("question", self.question.is_none()),
            ("answer", self.answer.is_none()),
            ("difficulty", self.difficulty.is_none()),
            ("category", self.category.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                let difficulty = match difficulty {
                    NumberOrString::Number(n) => i32::try_from(n).ok(),
                    NumberOrString::Text(s) => s.trim().parse::<i32>().ok(),
                }
                .ok_or_else(|| "Difficulty must be an integer".to_string())?;

                let category = match category {
                    NumberOrString::Number(n) => CategoryKey::normalize(&n.to_string()),
                    NumberOrString::Text(s) => CategoryKey::normalize(&s),
                };

                Ok(NewQuestion::new(question, answer, category, difficulty))
            }
            _ => Err(format!("Missing fields: {}", missing.join(", "))),
        }
    }
}

/// Request body for searching questions
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response from question deletion
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub total_questions: i64,
}

/// Response from question creation
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
}

/// List one page of all questions, with every category
///
/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page_number = requested_page(query);

    let questions = state
        .questions
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;
    let page = page_number.slice(&questions);

    let categories = state
        .categories
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    if page.is_empty() {
        return Err(ApiError::not_found(format!(
            "No questions on page {}",
            page_number.value()
        )));
    }

    Ok(Json(
        QuestionListResponse::new(&page, CurrentCategory::All)
            .with_categories(category_map(&categories)),
    ))
}

/// Delete a question
///
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let id = parse_path_id(&raw_id)?;
    let id = i32::try_from(id)
        .map_err(|_| ApiError::unprocessable_entity(format!("Question not found: {}", id)))?;

    state
        .questions
        .delete(id)
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Failed to delete question: {}", e)))?;

    let total_questions = state
        .questions
        .count()
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Database error: {}", e)))?;

    tracing::info!(question_id = id, total_questions, "Question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        total_questions,
    }))
}

/// Create a new question
///
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new_question = req
        .into_new_question()
        .map_err(ApiError::unprocessable_entity)?;

    let created = state
        .questions
        .create(new_question)
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Failed to save question: {}", e)))?;

    let questions = state
        .questions
        .find_all()
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Database error: {}", e)))?;
    let total_questions = state
        .questions
        .count()
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Database error: {}", e)))?;

    tracing::info!(question_id = created.id, total_questions, "Question created");

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: requested_page(query)
            .slice(&questions)
            .iter()
            .map(QuestionResponse::from)
            .collect(),
        total_questions,
    }))
}

/// Search questions by a case-insensitive substring of their text
///
/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
    ApiJson(req): ApiJson<SearchQuestionsRequest>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Some(term) = SearchTerm::new(req.search_term.as_deref()) else {
        tracing::debug!("Empty search term, returning no questions");
        return Ok(Json(QuestionListResponse::new(
            &[],
            CurrentCategory::Unfiltered,
        )));
    };

    let matches = state
        .questions
        .search(&term)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let page = requested_page(query).slice(&matches);
    tracing::debug!(term = term.as_str(), returned = page.len(), "Searched questions");

    Ok(Json(QuestionListResponse::new(
        &page,
        CurrentCategory::Unfiltered,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::PageNumber;

    fn request(
        question: Option<&str>,
        answer: Option<&str>,
        difficulty: Option<NumberOrString>,
        category: Option<NumberOrString>,
    ) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: question.map(str::to_string),
            answer: answer.map(str::to_string),
            difficulty,
            category,
        }
    }

    #[test]
    fn complete_request_builds_normalized_question() {
        let new = request(
            Some("Q"),
            Some("A"),
            Some(NumberOrString::Text("3".to_string())),
            Some(NumberOrString::Text(" 2".to_string())),
        )
        .into_new_question()
        .unwrap();

        assert_eq!(new.difficulty, 3);
        assert_eq!(new.category.as_str(), "2");
    }

    #[test]
    fn numeric_category_is_stored_as_text() {
        let new = request(
            Some(""),
            Some(""),
            Some(NumberOrString::Number(1)),
            Some(NumberOrString::Number(4)),
        )
        .into_new_question()
        .unwrap();

        assert_eq!(new.category.as_str(), "4");
        assert_eq!(new.question, "");
    }

    #[test]
    fn missing_fields_are_reported() {
        let err = request(Some("Q"), Some("A"), None, None)
            .into_new_question()
            .unwrap_err();
        assert_eq!(err, "Missing fields: difficulty, category");
    }

    #[test]
    fn non_numeric_difficulty_is_rejected() {
        let result = request(
            Some("Q"),
            Some("A"),
            Some(NumberOrString::Text("hard".to_string())),
            Some(NumberOrString::Number(1)),
        )
        .into_new_question();
        assert!(result.is_err());
    }

    #[test]
    fn first_page_is_default() {
        assert_eq!(requested_page(None), PageNumber::FIRST);
    }
}
