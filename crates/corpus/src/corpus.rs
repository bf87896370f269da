use std::path::Path;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::post::Post;

/// An unordered, read-only collection of posts. All attribution machinery
/// borrows a corpus; nothing in this workspace mutates one after ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    posts: Vec<Post>,
}

impl Corpus {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Earliest and latest `created_at` in the corpus, or `None` when empty.
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut times = self.posts.iter().map(|p| p.created_at);
        let first = times.next()?;
        let (min, max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some((min, max))
    }

    /// Post counts bucketed by hour of day (UTC).
    pub fn hourly_volume(&self) -> [u64; 24] {
        let mut buckets = [0u64; 24];
        for post in &self.posts {
            buckets[post.created_at.hour() as usize] += 1;
        }
        buckets
    }

    /// Parses a corpus from either a bare JSON array of posts or the
    /// platform's bulk-export envelope. Malformed records, timestamps
    /// included, are rejected here and never reach the search code.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        if raw.trim_start().starts_with('{') {
            let export: crate::platform::PlatformExport = serde_json::from_str(raw)?;
            return export.into_corpus();
        }
        let posts: Vec<Post> = serde_json::from_str(raw)?;
        Ok(Self::new(posts))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl FromIterator<Post> for Corpus {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
