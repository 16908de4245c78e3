use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{CatalogOptions, RecommendationResult},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub emotion: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub generated_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Genres and languages the recommender accepts
pub async fn get_options(State(state): State<AppState>) -> Json<CatalogOptions> {
    Json(state.recommender.catalog().options())
}

/// Recommend movies for an emotion (genre) and language
pub async fn recommend_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<Json<MovieResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection,
            "Invalid JSON in request"
        );
        AppError::InvalidInput("Invalid JSON in request body".to_string())
    })?;

    let (emotion, language) = match (non_blank(request.emotion), non_blank(request.language)) {
        (Some(emotion), Some(language)) => (emotion, language),
        _ => {
            return Err(AppError::InvalidInput(
                "Both emotion and language are required".to_string(),
            ))
        }
    };

    tracing::info!(
        request_id = %request_id,
        emotion = %emotion,
        language = %language,
        "Getting movie recommendations"
    );

    let result = state.recommender.recommend(&emotion, &language).await?;

    tracing::info!(
        request_id = %request_id,
        source = ?result.source,
        count = result.count,
        "Movie recommendations served"
    );

    Ok(Json(MovieResponse {
        result,
        generated_at: Utc::now(),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
