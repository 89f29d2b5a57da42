use async_graphql::{Context, Object, Result};
use vidql_db::repositories::VideoRepo;

use crate::error::gql_error;
use crate::graphql::context::store;
use crate::graphql::types::{VideoInput, VideoObject};

#[derive(Default)]
pub struct MutationRoot;

/// The root mutation type
#[Object(name = "MutationType")]
impl MutationRoot {
    /// Create a video. Fails with a `CONFLICT` error if the id is taken.
    async fn create_video(&self, ctx: &Context<'_>, video: VideoInput) -> Result<VideoObject> {
        let created = VideoRepo::create(store(ctx)?, video.into())
            .await
            .map_err(gql_error)?;
        Ok(VideoObject(created))
    }
}
