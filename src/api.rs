use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "timestamp": Utc::now(),
        "subject": state.config.analysis.subject,
    }))
}

pub async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bundle.summary.clone())
}

pub async fn get_genres(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bundle.genres.clone())
}

pub async fn get_trend(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bundle.trend.clone())
}

pub async fn get_directors(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bundle.directors.clone())
}

pub async fn get_bundle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bundle.as_ref().clone())
}

/// One word-frequency product, addressed as `/v1/words/{genre}/{field}`,
/// e.g. `/v1/words/drama/description`. Matching is case-insensitive; an
/// unknown combination is a 404.
pub async fn get_word_frequency(
    State(state): State<AppState>,
    Path((genre, field)): Path<(String, String)>,
) -> impl IntoResponse {
    let product = state.bundle.word_frequencies.iter().find(|p| {
        p.genre.eq_ignore_ascii_case(&genre) && p.field.as_str().eq_ignore_ascii_case(&field)
    });

    match product {
        Some(product) => (StatusCode::OK, Json(product.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": {
                    "code": "WORD_PRODUCT_NOT_FOUND",
                    "message": format!(
                        "No word-frequency product for genre \"{genre}\" and field \"{field}\"."
                    )
                }
            })),
        )
            .into_response(),
    }
}
