use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Launch outcome as encoded by the `class` column of the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn from_class_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// The 0/1 code charts plot on the y-axis.
    pub fn class_code(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Outcome::Success => "Successful",
            Outcome::Failure => "Failed",
        }
    }
}

// Chart payloads carry the numeric code, not the variant name.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class_code())
    }
}

fn outcome_from_class<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Outcome, D::Error> {
    let code = u8::deserialize(deserializer)?;
    Outcome::from_class_code(code)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid class code: {}", code)))
}

/// One row of the launch data file. Column names must match the existing
/// data files exactly; extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,

    #[serde(rename = "class", deserialize_with = "outcome_from_class")]
    pub outcome: Outcome,
}

/// The site-dropdown control state. The wire value `"ALL"` selects every site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    All,
    Site(String),
}

impl SiteFilter {
    pub const ALL_VALUE: &'static str = "ALL";
    pub const ALL_LABEL: &'static str = "All Sites";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteFilter::All => Self::ALL_VALUE,
            SiteFilter::Site(name) => name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SiteFilter::All => Self::ALL_LABEL,
            SiteFilter::Site(name) => name,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(name) => record.site == *name,
        }
    }
}

/// Inclusive payload-mass interval from the range-slider control.
/// A reversed interval (`low > high`) matches nothing rather than erroring;
/// the UI layer only presents ordered values, so this is a defensive fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

/// Current control state, one per UI update.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

/// One entry of the site-dropdown option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Range-slider configuration handed to the UI collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadSliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub mark_interval: f64,
}

impl Default for PayloadSliderSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_interval: 2_000.0,
        }
    }
}

impl PayloadSliderSettings {
    /// Tick positions from `min` to `max` at `mark_interval` spacing.
    pub fn marks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.mark_interval).floor() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.mark_interval)
            .collect()
    }
}

/// Full range-control contract: configured bounds plus the dataset-derived
/// default interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeControlSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub default: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSlice {
    pub label: &'static str,
    pub count: u64,
}

/// Chart-ready outcome counts for the proportion chart. Zero-count outcomes
/// are omitted; slice order is fixed (`Successful` before `Failed`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeDistributionView {
    pub title: String,
    pub slices: Vec<OutcomeSlice>,
}

impl OutcomeDistributionView {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Chart-ready point set for the payload/outcome scatter chart, in dataset
/// order. Booster-category color grouping is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadScatterView {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl PayloadScatterView {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
