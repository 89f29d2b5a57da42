use async_graphql::{Context, Object, Result, ID};
use vidql_core::node::{from_global_id, NodeType};
use vidql_db::repositories::VideoRepo;

use crate::error::gql_error;
use crate::graphql::context::store;
use crate::graphql::types::{Node, VideoObject};

#[derive(Default)]
pub struct QueryRoot;

/// The root query type
#[Object(name = "QueryType")]
impl QueryRoot {
    /// Every video in the store, in insertion order
    async fn videos(&self, ctx: &Context<'_>) -> Result<Vec<VideoObject>> {
        let videos = VideoRepo::list_all(store(ctx)?).await;
        Ok(videos.into_iter().map(VideoObject).collect())
    }

    /// A single video by id, or null if none exists
    async fn video(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The id of the video")] id: ID,
    ) -> Result<Option<VideoObject>> {
        let video = VideoRepo::find_by_id(store(ctx)?, &id).await;
        Ok(video.map(VideoObject))
    }

    /// Any identifiable object by its global id
    async fn node(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The global id of the object")] id: ID,
    ) -> Result<Option<Node>> {
        let global = from_global_id(&id).map_err(gql_error)?;
        let node_type = NodeType::from_type_name(&global.type_name).map_err(gql_error)?;

        let node = match node_type {
            NodeType::Video => VideoRepo::find_by_id(store(ctx)?, &global.local_id)
                .await
                .map(|v| Node::Video(VideoObject(v))),
        };
        Ok(node)
    }
}
