use crate::review::{new_review_id, Review};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Startup dataset: a CSV file with `Location`, `Timestamp` and `ReviewBody`
/// columns, plus an optional `ReviewId`
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read every row in file order
    ///
    /// A missing file yields an empty dataset. Rows are trusted as-is apart
    /// from the timestamp, which must parse; any row that does not decode into
    /// a review fails the whole load.
    pub fn load(&self) -> Result<Vec<Review>> {
        if !self.path.exists() {
            warn!("Dataset {:?} not found, starting with no reviews", self.path);
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open dataset {:?}", self.path))?;

        let mut reviews = Vec::new();
        for row in reader.deserialize::<Review>() {
            let mut review = row.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                anyhow::anyhow!("Invalid review on line {} of {:?}: {}", line, self.path, e)
            })?;

            if review.review_id.is_empty() {
                review.review_id = new_review_id();
            }
            reviews.push(review);
        }

        info!(path = ?self.path, count = reviews.len(), "Loaded dataset");
        Ok(reviews)
    }
}
