use crate::domain::model::{OutcomeDistributionView, PayloadScatterView};
use crate::domain::ports::{ProportionRenderer, ScatterRenderer};
use crate::utils::error::Result;

/// Headless stand-in for a chart collaborator: every rendered figure becomes
/// one JSON line on stdout.
#[derive(Debug, Default, Clone)]
pub struct JsonLineRenderer;

impl JsonLineRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ProportionRenderer for JsonLineRenderer {
    fn render(&mut self, view: &OutcomeDistributionView) -> Result<()> {
        if view.is_empty() {
            tracing::warn!("proportion chart has no data for '{}'", view.title);
        }
        println!("{}", serde_json::to_string(view)?);
        Ok(())
    }
}

impl ScatterRenderer for JsonLineRenderer {
    fn render(&mut self, view: &PayloadScatterView) -> Result<()> {
        if view.is_empty() {
            tracing::warn!("scatter chart has no data for '{}'", view.title);
        }
        println!("{}", serde_json::to_string(view)?);
        Ok(())
    }
}
