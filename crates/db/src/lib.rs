//! In-memory video storage.
//!
//! [`MemoryStore`] owns the video collection for the lifetime of the
//! process. Data access goes through the repositories, mirroring how a
//! database-backed store would be used.

use indexmap::IndexMap;
use tokio::sync::RwLock;
use vidql_core::types::VideoId;

use crate::models::video::Video;

pub mod models;
pub mod repositories;
pub mod seed;

/// Insertion-ordered collection of videos keyed by id.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across request handlers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) videos: RwLock<IndexMap<VideoId, Video>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given videos, in order.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn with_videos(videos: Vec<Video>) -> Self {
        let map = videos.into_iter().map(|v| (v.id.clone(), v)).collect();
        Self {
            videos: RwLock::new(map),
        }
    }

    /// Create a store populated with the startup seed data.
    pub fn seeded() -> Self {
        Self::with_videos(seed::seed_videos())
    }

    /// Number of videos currently held.
    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}
