use crate::review::Review;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory, append-only review collection
///
/// Snapshots and appends are serialized through one lock, so a snapshot
/// never observes a half-written append.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl ReviewStore {
    /// Create a store seeded with the startup dataset
    pub fn new(seed: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(seed),
        }
    }

    /// Point-in-time copy of every review, in insertion order
    pub async fn snapshot(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    /// Add a review to the end of the collection
    pub async fn append(&self, review: Review) {
        let mut reviews = self.reviews.write().await;
        reviews.push(review);
        debug!(total = reviews.len(), "Appended review");
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }
}
