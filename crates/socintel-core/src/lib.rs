//! Shared types and configuration for the social intelligence workspace.
//!
//! Holds the post data model consumed by `socintel-analytics`, the
//! environment-driven [`AppConfig`], and the post file loader used by the CLI
//! in place of a persistence layer.

pub mod app_config;
pub mod config;
pub mod posts;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use posts::{load_posts, Platform, PostRecord, Sentiment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read posts file {path}: {source}")]
    PostsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse posts file {path}: {reason}")]
    PostsFileParse { path: String, reason: String },

    #[error("invalid post at index {index}: {reason}")]
    InvalidPost { index: usize, reason: String },
}
