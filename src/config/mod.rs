pub mod settings;

pub use settings::{DashSettings, DEFAULT_DATA_PATH};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "launch-dash")]
#[command(about = "Chart-data engine for the launch records dashboard")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    #[arg(long, help = "Optional TOML settings file")]
    pub settings: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings file first, then CLI overrides; the result is validated.
    pub fn load_settings(&self) -> Result<DashSettings> {
        let mut settings = match &self.settings {
            Some(path) => DashSettings::from_toml_file(path)?,
            None => DashSettings::default(),
        };
        settings.data_path = self.data_path.clone();
        settings.validate()?;
        Ok(settings)
    }
}
