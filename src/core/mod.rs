pub mod fallback;
pub mod fetcher;
pub mod input;
pub mod intersect;
pub mod link_header;
pub mod resolver;

pub use crate::domain::model::{DataSource, Resolution, ResolutionResult, UserCollection, UserRecord};
pub use crate::domain::ports::{ConfigProvider, UserDirectory};
pub use crate::utils::error::Result;
