use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, categories, health, questions, quizzes};
use crate::api::state::AppState;

/// Cross-origin policy applied to every response
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Category routes
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::questions_by_category),
        )
        // Question routes
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:id", delete(questions::delete_question))
        // Quiz routes
        .route("/quizzes", post(quizzes::answer_quiz))
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // Shared state
        .with_state(state)
}
