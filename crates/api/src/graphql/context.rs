use std::sync::Arc;

use async_graphql::Context;
use vidql_db::MemoryStore;

use crate::error::{gql_error, AppError};

/// Per-schema data handed to every resolver.
pub struct GraphQlContext {
    pub store: Arc<MemoryStore>,
}

impl GraphQlContext {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

/// Borrow the video store from the resolver context.
pub fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a MemoryStore> {
    ctx.data::<GraphQlContext>()
        .map(|data| data.store.as_ref())
        .map_err(|e| gql_error(AppError::InternalError(e.message)))
}
