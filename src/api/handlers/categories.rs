use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use super::{parse_path_id, requested_page, CurrentCategory, PageQuery, QuestionListResponse};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::category::category_map;

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// List all categories as an `id -> type` mapping
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .categories
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    if categories.is_empty() {
        return Err(ApiError::not_found("No categories stored"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// Get one page of the questions in a category
///
/// GET /categories/:id/questions
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let category_id = parse_path_id(&raw_id)?;

    let questions = match i32::try_from(category_id) {
        Ok(id) => state
            .questions
            .find_by_category(id)
            .await
            .map_err(|e| ApiError::not_found(format!("Database error: {}", e)))?,
        Err(_) => Vec::new(),
    };

    let page = requested_page(query).slice(&questions);
    tracing::debug!(category_id, returned = page.len(), "Listed questions by category");

    Ok(Json(QuestionListResponse::new(
        &page,
        CurrentCategory::Id(category_id),
    )))
}
