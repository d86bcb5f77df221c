pub mod client;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::github::{ErrorKind, GitHubRelease, ReleaseError};
pub use services::release_service::{ReleaseChecker, ReleaseStatus};
