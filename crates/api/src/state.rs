use std::sync::Arc;

use vidql_db::MemoryStore;

use crate::graphql::{build_schema, VideoSchema};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store is behind `Arc` and the schema is
/// reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// In-memory video store.
    pub store: Arc<MemoryStore>,
    /// Executable GraphQL schema bound to `store`.
    pub schema: VideoSchema,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        let schema = build_schema(Arc::clone(&store));
        Self { store, schema }
    }
}
