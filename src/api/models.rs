use crate::api::error::AppError;
use crate::review::{is_permissible_location, Review};
use crate::sentiment::{SentimentAnalyzer, SentimentScores};
use crate::storage::ReviewStore;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub review_store: Arc<ReviewStore>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

/// Query string of `GET /`
#[derive(Debug, Default, PartialEq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    /// Decode the raw query string; the first non-blank value of a key wins
    pub fn from_raw(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(raw.unwrap_or_default()).unwrap_or_default();

        Self {
            location: first_value(&pairs, "location"),
            start_date: first_value(&pairs, "start_date"),
            end_date: first_value(&pairs, "end_date"),
        }
    }
}

/// URL-encoded body of `POST /`
#[derive(Debug, Default, PartialEq)]
pub struct NewReviewForm {
    pub location: String,
    pub review_body: String,
}

impl NewReviewForm {
    /// Decode `Location=...&ReviewBody=...`
    ///
    /// The first non-blank value of a key wins. A body that is not UTF-8, or
    /// whose escapes do not decode to UTF-8, yields an empty form.
    pub fn from_body(body: &[u8]) -> Self {
        let Some(pairs) = decode_form_strict(body) else {
            tracing::debug!(len = body.len(), "Undecodable review form");
            return Self::default();
        };

        Self {
            location: first_value(&pairs, "Location").unwrap_or_default(),
            review_body: first_value(&pairs, "ReviewBody").unwrap_or_default(),
        }
    }

    /// Validate the form
    pub fn validate(&self) -> Result<(), AppError> {
        if self.location.is_empty() || self.review_body.is_empty() {
            return Err(AppError::MissingField);
        }
        if !is_permissible_location(&self.location) {
            return Err(AppError::InvalidLocation);
        }
        Ok(())
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
}

/// URL-encoded pairs, rejecting invalid UTF-8 instead of replacing it
fn decode_form_strict(body: &[u8]) -> Option<Vec<(String, String)>> {
    let text = std::str::from_utf8(body).ok()?;

    text.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// A review as returned by `GET /`
#[derive(Debug, Serialize)]
pub struct ScoredReview<'a> {
    #[serde(flatten)]
    pub review: &'a Review,
    pub sentiment: SentimentScores,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_reviews: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
