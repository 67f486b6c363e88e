use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format of `Timestamp` on the wire and in the dataset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The only values a newly created review may carry as `Location`
pub const PERMISSIBLE_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Exact, case-sensitive membership check
pub fn is_permissible_location(location: &str) -> bool {
    PERMISSIBLE_LOCATIONS.contains(&location)
}

/// A stored customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId", default = "new_review_id")]
    pub review_id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: ReviewTimestamp,
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
}

impl Review {
    /// Create a review stamped with a fresh id and the current local time
    pub fn new(location: String, review_body: String) -> Self {
        Self {
            review_id: new_review_id(),
            location,
            timestamp: ReviewTimestamp::now(),
            review_body,
        }
    }
}

/// Random UUID v4 in its hyphenated string form
pub fn new_review_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Review creation time, second precision, no timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReviewTimestamp(NaiveDateTime);

impl ReviewTimestamp {
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        // Second precision, so the value round-trips through TIMESTAMP_FORMAT
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map(Self)
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for ReviewTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for ReviewTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReviewTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| {
            serde::de::Error::custom(format!("invalid Timestamp '{}': {}", raw, e))
        })
    }
}
