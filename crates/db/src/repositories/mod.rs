//! Data-access functions over [`MemoryStore`](crate::MemoryStore).

pub mod video_repo;

pub use video_repo::VideoRepo;
