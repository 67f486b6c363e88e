use crate::api::error::AppError;
use crate::api::models::ReviewQuery;
use crate::review::{is_permissible_location, Review};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How the `location` parameter narrows the result
#[derive(Debug, Clone, PartialEq)]
pub enum LocationFilter {
    Any,
    Exact(String),
    /// Not a permissible location: nothing can match
    Unknown,
}

/// Parsed and validated `GET /` filters
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFilter {
    pub location: LocationFilter,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    /// Validate every parameter up front; empty values count as absent
    pub fn from_query(query: &ReviewQuery) -> Result<Self, AppError> {
        let location = match non_empty(&query.location) {
            None => LocationFilter::Any,
            Some(loc) if is_permissible_location(loc) => LocationFilter::Exact(loc.to_string()),
            Some(_) => LocationFilter::Unknown,
        };

        Ok(Self {
            location,
            start: parse_date_param("start_date", non_empty(&query.start_date))?,
            end: parse_date_param("end_date", non_empty(&query.end_date))?,
        })
    }

    /// Narrow `reviews` by location, then start, then end, keeping order
    pub fn apply(&self, mut reviews: Vec<Review>) -> Vec<Review> {
        match &self.location {
            LocationFilter::Any => {}
            LocationFilter::Exact(location) => reviews.retain(|r| &r.location == location),
            LocationFilter::Unknown => reviews.clear(),
        }

        if let Some(start) = self.start {
            reviews.retain(|r| r.timestamp.as_datetime() >= start);
        }
        if let Some(end) = self.end {
            reviews.retain(|r| r.timestamp.as_datetime() <= end);
        }

        reviews
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A bare date means midnight at the start of that day
fn parse_date_param(
    param: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| AppError::MalformedDate {
            param,
            value: value.to_string(),
        })
}
