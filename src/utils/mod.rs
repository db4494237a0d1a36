//! Utility modules for common functionality

pub mod repo_slug;
pub mod validators;

// Re-export commonly used functions
pub use repo_slug::parse_repo_slug;
