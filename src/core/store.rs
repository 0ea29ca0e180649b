use crate::domain::model::{
    LaunchRecord, PayloadRange, PayloadSliderSettings, RangeControlSpec, SiteFilter, SiteOption,
};
use crate::utils::error::{DashError, Result};
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// Immutable launch-record table plus the scalars derived once at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    site_names: Vec<String>,
}

impl Dataset {
    /// Strict, all-or-nothing load: either every row parses or the whole
    /// load fails. The application cannot run against a partial dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| DashError::DataLoadError {
            message: format!("cannot open {}: {}", path.display(), e),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| DashError::DataLoadError {
                message: format!("cannot read header row of {}: {}", path.display(), e),
            })?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashError::DataLoadError {
                    message: format!("missing required column: {}", column),
                });
            }
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<LaunchRecord>().enumerate() {
            // Header is line 1, first data row is line 2.
            let line = index + 2;
            let record = row.map_err(|e| DashError::DataLoadError {
                message: format!("line {}: {}", line, e),
            })?;
            if record.payload_mass_kg < 0.0 {
                return Err(DashError::DataLoadError {
                    message: format!(
                        "line {}: negative payload mass {}",
                        line, record.payload_mass_kg
                    ),
                });
            }
            records.push(record);
        }

        tracing::info!(
            "loaded {} launch records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    /// Build a dataset from already-parsed records (tests, embedding hosts).
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut site_names: Vec<String> = Vec::new();

        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
            if !site_names.iter().any(|s| s == &record.site) {
                site_names.push(record.site.clone());
            }
        }
        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        Self {
            records,
            min_payload,
            max_payload,
            site_names,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct site names in first-seen order.
    pub fn site_names(&self) -> &[String] {
        &self.site_names
    }

    /// The range slider's initial interval.
    pub fn default_payload_range(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }

    /// Option list for the site dropdown: "All Sites" first, then one entry
    /// per distinct site in first-seen order.
    pub fn site_options(&self) -> Vec<SiteOption> {
        let mut options = Vec::with_capacity(self.site_names.len() + 1);
        options.push(SiteOption {
            label: SiteFilter::ALL_LABEL.to_string(),
            value: SiteFilter::ALL_VALUE.to_string(),
        });
        for site in &self.site_names {
            options.push(SiteOption {
                label: site.clone(),
                value: site.clone(),
            });
        }
        options
    }

    /// Range-control contract: configured bounds plus the dataset-derived
    /// default interval.
    pub fn payload_control_spec(&self, slider: &PayloadSliderSettings) -> RangeControlSpec {
        RangeControlSpec {
            min: slider.min,
            max: slider.max,
            step: slider.step,
            marks: slider.marks(),
            default: self.default_payload_range(),
        }
    }
}
