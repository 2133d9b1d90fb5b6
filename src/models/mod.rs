//! Data models for Bookshelf

pub mod book;
pub mod volume;

// Re-export commonly used types
pub use book::Book;
pub use volume::{Volume, VolumeInfo, VolumeSearch, VolumeSearchQuery};
