//! GraphQL schema for the video API.
//!
//! The schema is built once at startup with the store injected as context
//! data; resolvers read it back through [`context::store`].

pub mod context;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use vidql_db::MemoryStore;

pub use context::GraphQlContext;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Executable schema type for the API.
pub type VideoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` available to every resolver.
pub fn build_schema(store: Arc<MemoryStore>) -> VideoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(GraphQlContext::new(store))
        .finish()
}
