use crate::domain::model::{OutcomeDistributionView, PayloadScatterView, PayloadSliderSettings};
use crate::utils::error::Result;

/// Proportion-chart collaborator. Implementations must accept an empty view
/// (no slices) without error.
pub trait ProportionRenderer {
    fn render(&mut self, view: &OutcomeDistributionView) -> Result<()>;
}

/// Scatter-chart collaborator. Implementations must accept an empty view
/// (no points) without error.
pub trait ScatterRenderer {
    fn render(&mut self, view: &PayloadScatterView) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn payload_slider(&self) -> &PayloadSliderSettings;
}
