//! Repository for the video collection.

use vidql_core::error::CoreError;

use crate::models::video::{CreateVideo, Video};
use crate::MemoryStore;

/// Provides lookup, listing, and creation of videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Find a video by its id. Absence is `None`, not an error.
    pub async fn find_by_id(store: &MemoryStore, id: &str) -> Option<Video> {
        store.videos.read().await.get(id).cloned()
    }

    /// Snapshot of every video, in insertion order.
    pub async fn list_all(store: &MemoryStore) -> Vec<Video> {
        store.videos.read().await.values().cloned().collect()
    }

    /// Append a new video built from `input` and return it.
    ///
    /// Ids are unique: a second create with an existing id fails with
    /// [`CoreError::Conflict`] and leaves the store unchanged.
    pub async fn create(store: &MemoryStore, input: CreateVideo) -> Result<Video, CoreError> {
        let mut videos = store.videos.write().await;

        if videos.contains_key(&input.id) {
            tracing::warn!(video_id = %input.id, "Rejected duplicate video id");
            return Err(CoreError::Conflict(format!(
                "Video with id {} already exists",
                input.id
            )));
        }

        let video = Video::from(input);
        videos.insert(video.id.clone(), video.clone());
        tracing::info!(video_id = %video.id, total = videos.len(), "Video created");

        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(id: &str) -> CreateVideo {
        CreateVideo {
            id: id.to_string(),
            title: Some("New Talk".to_string()),
            duration: Some(300),
            watched: Some(false),
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_matching_record() {
        let store = MemoryStore::seeded();
        let video = VideoRepo::find_by_id(&store, "a").await.unwrap();
        assert_eq!(video.id, "a");
        assert_eq!(video.title.as_deref(), Some("Create a GraphQL Schema"));
    }

    #[tokio::test]
    async fn find_by_id_missing_is_none() {
        let store = MemoryStore::seeded();
        assert!(VideoRepo::find_by_id(&store, "zzz").await.is_none());
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        for id in ["c", "a", "b"] {
            VideoRepo::create(&store, input(id)).await.unwrap();
        }

        let ids: Vec<_> = VideoRepo::list_all(&store)
            .await
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn list_all_on_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert!(VideoRepo::list_all(&store).await.is_empty());
    }

    #[tokio::test]
    async fn create_returns_record_equal_to_input() {
        let store = MemoryStore::seeded();
        let created = VideoRepo::create(&store, input("v100")).await.unwrap();

        assert_eq!(created, Video::from(input("v100")));
        assert_eq!(VideoRepo::find_by_id(&store, "v100").await, Some(created));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn create_with_only_id() {
        let store = MemoryStore::new();
        let created = VideoRepo::create(
            &store,
            CreateVideo {
                id: "bare".to_string(),
                title: None,
                duration: None,
                watched: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.id, "bare");
        assert!(created.title.is_none());
        assert!(created.duration.is_none());
        assert!(created.watched.is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_and_store_unchanged() {
        let store = MemoryStore::seeded();
        let mut dup = input("a");
        dup.title = Some("Overwrite attempt".to_string());

        assert_matches!(
            VideoRepo::create(&store, dup).await,
            Err(CoreError::Conflict(_))
        );

        assert_eq!(store.len().await, 2);
        let original = VideoRepo::find_by_id(&store, "a").await.unwrap();
        assert_eq!(original.title.as_deref(), Some("Create a GraphQL Schema"));
    }

    #[tokio::test]
    async fn concurrent_duplicate_creates_admit_exactly_one() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { VideoRepo::create(&store, input("race")).await })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn with_videos_keeps_given_order() {
        let store = MemoryStore::with_videos(vec![
            Video::from(input("x")),
            Video::from(input("y")),
        ]);
        let ids: Vec<_> = VideoRepo::list_all(&store)
            .await
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, ["x", "y"]);
    }
}
