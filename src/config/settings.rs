use crate::core::ConfigProvider;
use crate::domain::model::PayloadSliderSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_ordered_bounds,
    validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Dashboard settings, optionally loaded from a TOML file. Every field has a
/// default matching the original data file and control bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashSettings {
    pub data_path: String,
    pub payload_slider: PayloadSliderSettings,
}

impl Default for DashSettings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            payload_slider: PayloadSliderSettings::default(),
        }
    }
}

impl DashSettings {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: DashSettings = toml::from_str(&content)?;
        Ok(settings)
    }
}

impl ConfigProvider for DashSettings {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn payload_slider(&self) -> &PayloadSliderSettings {
        &self.payload_slider
    }
}

impl Validate for DashSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("data_path", &self.data_path)?;
        validate_file_extension("data_path", &self.data_path, &["csv"])?;
        validate_ordered_bounds(
            "payload_slider",
            self.payload_slider.min,
            self.payload_slider.max,
        )?;
        validate_positive_number("payload_slider.step", self.payload_slider.step)?;
        validate_positive_number("payload_slider.mark_interval", self.payload_slider.mark_interval)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DashSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.data_path, "spacex_launch_dash.csv");
        assert_eq!(settings.payload_slider.max, 10000.0);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: DashSettings = toml::from_str(
            r#"
            data_path = "launches.csv"

            [payload_slider]
            max = 15000.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.data_path, "launches.csv");
        assert_eq!(settings.payload_slider.max, 15000.0);
        assert_eq!(settings.payload_slider.min, 0.0);
        assert_eq!(settings.payload_slider.step, 1000.0);
    }

    #[test]
    fn test_validation_rejects_bad_slider_bounds() {
        let mut settings = DashSettings::default();
        settings.payload_slider.min = 20000.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_csv_data_path() {
        let mut settings = DashSettings::default();
        settings.data_path = "launches.parquet".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_step() {
        let mut settings = DashSettings::default();
        settings.payload_slider.step = 0.0;
        assert!(settings.validate().is_err());
    }
}
