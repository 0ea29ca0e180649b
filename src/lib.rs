pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::DashSettings;

pub use crate::core::dashboard::Dashboard;
pub use crate::core::store::Dataset;
pub use crate::utils::error::{DashError, Result};
