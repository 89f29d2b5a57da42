/// Video identifiers are client-supplied opaque strings.
pub type VideoId = String;

/// Video durations are whole seconds (GraphQL `Int`).
pub type DurationSecs = i32;
