use async_graphql::ErrorExtensions;
use vidql_core::error::CoreError;

/// Application-level error type for GraphQL resolvers.
///
/// Wraps [`CoreError`] for domain errors and adds resolver-specific
/// variants. Implements [`ErrorExtensions`] so every error reaches the
/// client with a stable `extensions.code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidql_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Error code and client-facing message for this error.
    pub fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::Conflict(msg) => ("CONFLICT", msg.clone()),
                CoreError::InvalidGlobalId(msg) => ("INVALID_GLOBAL_ID", msg.clone()),
                CoreError::UnknownNodeType(name) => (
                    "UNKNOWN_NODE_TYPE",
                    format!("No node type registered for '{name}'"),
                ),
            },
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (code, message) = self.code_and_message();
        async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", code))
    }
}

/// Convert any error convertible into [`AppError`] into a GraphQL error.
pub fn gql_error(err: impl Into<AppError>) -> async_graphql::Error {
    err.into().extend()
}
