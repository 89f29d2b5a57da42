//! Video entity model and DTOs.

use vidql_core::node::HasGlobalId;
use vidql_core::types::{DurationSecs, VideoId};

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub title: Option<String>,
    pub duration: Option<DurationSecs>,
    pub watched: Option<bool>,
}

/// DTO for creating a new video.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub id: VideoId,
    pub title: Option<String>,
    pub duration: Option<DurationSecs>,
    pub watched: Option<bool>,
}

impl From<CreateVideo> for Video {
    fn from(input: CreateVideo) -> Self {
        Self {
            id: input.id,
            title: input.title,
            duration: input.duration,
            watched: input.watched,
        }
    }
}

impl HasGlobalId for Video {
    const TYPE_NAME: &'static str = "Video";

    fn local_id(&self) -> &str {
        &self.id
    }
}
