use crate::models::video::Video;

/// Videos present when the process starts.
pub fn seed_videos() -> Vec<Video> {
    vec![
        Video {
            id: "a".to_string(),
            title: Some("Create a GraphQL Schema".to_string()),
            duration: Some(120),
            watched: Some(true),
        },
        Video {
            id: "b".to_string(),
            title: Some("Ember.js CLI".to_string()),
            duration: Some(240),
            watched: Some(false),
        },
    ]
}
