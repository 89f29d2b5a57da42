//! Output and input types exposed by the schema.

use async_graphql::{InputObject, Interface, Object, ID};
use vidql_core::node::HasGlobalId;
use vidql_db::models::video::{CreateVideo, Video};

/// GraphQL view of a stored [`Video`].
pub struct VideoObject(pub Video);

/// A video on Egghead.io
#[Object(name = "Video")]
impl VideoObject {
    /// The id of the video
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    /// The title of the video
    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    /// The duration of the video, in seconds
    async fn duration(&self) -> Option<i32> {
        self.0.duration
    }

    /// Whether or not the viewer has watched the video
    async fn watched(&self) -> Option<bool> {
        self.0.watched
    }

    /// Opaque global identifier, accepted by `node(id:)`
    async fn global_id(&self) -> ID {
        ID(self.0.global_id())
    }
}

/// An object that can be fetched by its global id.
#[derive(Interface)]
#[graphql(field(
    name = "id",
    ty = "ID",
    desc = "The local id of the object. Pass its `globalId` to `node(id:)` instead."
))]
pub enum Node {
    Video(VideoObject),
}

/// Fields accepted when creating a video.
#[derive(InputObject)]
#[graphql(name = "InputType")]
pub struct VideoInput {
    /// The id of the video
    pub id: ID,
    /// The title of the video
    pub title: Option<String>,
    /// The duration of the video, in seconds
    pub duration: Option<i32>,
    /// Whether or not the viewer has watched the video
    pub watched: Option<bool>,
}

impl From<VideoInput> for CreateVideo {
    fn from(input: VideoInput) -> Self {
        Self {
            id: input.id.0,
            title: input.title,
            duration: input.duration,
            watched: input.watched,
        }
    }
}
