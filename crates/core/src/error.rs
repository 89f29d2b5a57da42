/// Domain errors shared by the store and the GraphQL layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid global id: {0}")]
    InvalidGlobalId(String),

    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
}
