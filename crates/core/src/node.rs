//! Global object identification.
//!
//! Any object exposed through the API can be addressed by a single opaque
//! string that carries both its type name and its local id. The encoding is
//! standard base64 of `"{type_name}:{local_id}"`; decoding splits on the
//! first `:` so local ids may themselves contain colons.
//!
//! Types opt in by implementing [`HasGlobalId`]. The set of fetchable types
//! is the closed [`NodeType`] registry, which callers match on to pick the
//! typed fetch function for a decoded id.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CoreError;

/// Separator between the type name and local id inside the encoded payload.
const SEPARATOR: char = ':';

/// A decoded global identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub type_name: String,
    pub local_id: String,
}

impl GlobalId {
    pub fn new(type_name: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            local_id: local_id.into(),
        }
    }

    /// Encode into the opaque string form.
    pub fn encode(&self) -> String {
        to_global_id(&self.type_name, &self.local_id)
    }
}

/// Encode a type name and local id into an opaque global id.
///
/// ```
/// use vidql_core::node::to_global_id;
///
/// assert_eq!(to_global_id("Video", "v1"), "VmlkZW86djE=");
/// ```
pub fn to_global_id(type_name: &str, local_id: &str) -> String {
    STANDARD.encode(format!("{type_name}{SEPARATOR}{local_id}"))
}

/// Decode an opaque global id back into its type name and local id.
///
/// Fails with [`CoreError::InvalidGlobalId`] if the input is not base64,
/// does not decode to UTF-8, has no separator, or has an empty half.
pub fn from_global_id(opaque: &str) -> Result<GlobalId, CoreError> {
    let bytes = STANDARD
        .decode(opaque)
        .map_err(|e| CoreError::InvalidGlobalId(format!("'{opaque}' is not valid base64: {e}")))?;

    let decoded = String::from_utf8(bytes)
        .map_err(|_| CoreError::InvalidGlobalId(format!("'{opaque}' is not valid UTF-8")))?;

    let (type_name, local_id) = decoded.split_once(SEPARATOR).ok_or_else(|| {
        CoreError::InvalidGlobalId(format!("'{opaque}' is missing a type separator"))
    })?;

    if type_name.is_empty() || local_id.is_empty() {
        return Err(CoreError::InvalidGlobalId(format!(
            "'{opaque}' has an empty type name or local id"
        )));
    }

    Ok(GlobalId::new(type_name, local_id))
}

/// Capability implemented by every globally identifiable type.
pub trait HasGlobalId {
    /// Type name embedded in the global id. Must match a [`NodeType`] name.
    const TYPE_NAME: &'static str;

    fn local_id(&self) -> &str;

    fn global_id(&self) -> String {
        to_global_id(Self::TYPE_NAME, self.local_id())
    }
}

/// Registry of types that can be fetched by global id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Video,
}

impl NodeType {
    /// All registered node types.
    pub const ALL: &'static [NodeType] = &[NodeType::Video];

    pub fn type_name(self) -> &'static str {
        match self {
            NodeType::Video => "Video",
        }
    }

    /// Resolve a decoded type name against the registry.
    pub fn from_type_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.type_name() == name)
            .ok_or_else(|| CoreError::UnknownNodeType(name.to_string()))
    }
}
