use crate::api::error::AppError;
use crate::api::models::*;
use crate::api::review::filter::ReviewFilter;
use crate::review::Review;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

/// `GET /`: filtered reviews, each scored for sentiment
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    let query = ReviewQuery::from_raw(raw.as_deref());
    let filter = ReviewFilter::from_query(&query)?;

    let reviews = filter.apply(state.review_store.snapshot().await);

    let scored: Vec<ScoredReview> = reviews
        .iter()
        .map(|review| ScoredReview {
            review,
            sentiment: state.sentiment.polarity_scores(&review.review_body),
        })
        .collect();

    info!(
        location = ?query.location,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        found = scored.len(),
        "Listed reviews"
    );

    let body = serde_json::to_vec_pretty(&scored)
        .map_err(|e| AppError::Internal(format!("Serialize reviews failed: {}", e)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_LENGTH, body.len().to_string()),
        ],
        body,
    )
        .into_response())
}

/// `POST /`: validate a URL-encoded form and append the review
pub async fn create_review_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let body = body.unwrap_or_else(|e| {
        warn!(error = %e, "Unreadable request body, treating as empty");
        Bytes::new()
    });

    let form = NewReviewForm::from_body(&body);
    form.validate().inspect_err(|e| warn!(error = %e, "Rejected review"))?;

    let review = Review::new(form.location, form.review_body);
    state.review_store.append(review.clone()).await;

    info!(review_id = %review.review_id, location = %review.location, "Review added");

    Ok((StatusCode::CREATED, Json(review)))
}

/// Any other method on `/`, HEAD included
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
