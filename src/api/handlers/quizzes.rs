use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{NumberOrString, QuestionResponse};
use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::quiz::{pick_question, QuizScope};

/// Category the quiz is played in; `id` 0 means every category
///
/// Clients also send the category's `type` label, which is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<NumberOrString>,
}

impl QuizCategory {
    /// Integer ids are canonical; numeric strings are still accepted
    pub fn scope(&self) -> Result<QuizScope, String> {
        match &self.id {
            Some(NumberOrString::Number(id)) => QuizScope::from_id(*id),
            Some(NumberOrString::Text(raw)) => QuizScope::parse_legacy(raw),
            None => Err("Quiz category has no id".to_string()),
        }
    }
}

/// Request body for the next quiz question
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

/// Response carrying the next question, or `null` when none are left
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionResponse>,
}

/// Serve a random question not asked before
///
/// POST /quizzes
pub async fn answer_quiz(
    State(state): State<AppState>,
    body: Result<ApiJson<QuizRequest>, ApiError>,
) -> Result<Json<QuizResponse>, ApiError> {
    let ApiJson(req) = body.map_err(|e| ApiError::unprocessable_entity(e.detail))?;

    let (Some(quiz_category), Some(previous_questions)) =
        (req.quiz_category, req.previous_questions)
    else {
        return Err(ApiError::unprocessable_entity(
            "quiz_category and previous_questions are required",
        ));
    };

    let scope = quiz_category
        .scope()
        .map_err(ApiError::unprocessable_entity)?;

    let candidates = state
        .questions
        .find_quiz_candidates(scope, &previous_questions)
        .await
        .map_err(|e| ApiError::unprocessable_entity(format!("Database error: {}", e)))?;

    let question = pick_question(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        ?scope,
        remaining = candidates.len(),
        picked = question.as_ref().map(|q| q.id),
        "Served quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: question.as_ref().map(QuestionResponse::from),
    }))
}
