pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GitHubDirectory;
pub use app::find_mutuals;
pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::resolver::MutualResolver;
pub use domain::model::{DataSource, Resolution, ResolutionResult, UserCollection, UserRecord};
pub use utils::error::{MutualError, Result};
