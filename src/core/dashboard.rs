use crate::core::store::Dataset;
use crate::core::{query, ProportionRenderer, ScatterRenderer};
use crate::domain::model::{PayloadRange, Selection, SiteFilter};
use crate::utils::error::Result;

/// Reactive wiring between the controls and the two charts.
///
/// The hosting UI framework calls `set_site` / `set_payload_range` on control
/// change; each call recomputes exactly the views that depend on the changed
/// control and hands them to the renderers. The distribution chart depends on
/// the site only; the scatter chart depends on both controls.
pub struct Dashboard<P: ProportionRenderer, S: ScatterRenderer> {
    dataset: Dataset,
    selection: Selection,
    proportion: P,
    scatter: S,
}

impl<P: ProportionRenderer, S: ScatterRenderer> Dashboard<P, S> {
    /// Initial control state mirrors the UI defaults: all sites selected and
    /// the payload range spanning the dataset's min..max.
    pub fn new(dataset: Dataset, proportion: P, scatter: S) -> Self {
        let selection = Selection {
            site: SiteFilter::All,
            payload_range: dataset.default_payload_range(),
        };
        Self {
            dataset,
            selection,
            proportion,
            scatter,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Initial draw: render both charts from the current selection.
    pub fn refresh(&mut self) -> Result<()> {
        self.redraw_distribution()?;
        self.redraw_scatter()
    }

    pub fn set_site(&mut self, site: SiteFilter) -> Result<()> {
        tracing::debug!(site = site.value(), "site filter changed");
        self.selection.site = site;
        self.redraw_distribution()?;
        self.redraw_scatter()
    }

    pub fn set_payload_range(&mut self, range: PayloadRange) -> Result<()> {
        tracing::debug!(low = range.low, high = range.high, "payload range changed");
        self.selection.payload_range = range;
        self.redraw_scatter()
    }

    fn redraw_distribution(&mut self) -> Result<()> {
        let view = query::outcome_distribution(&self.dataset, &self.selection.site);
        self.proportion.render(&view)
    }

    fn redraw_scatter(&mut self) -> Result<()> {
        let view = query::payload_scatter(
            &self.dataset,
            &self.selection.site,
            &self.selection.payload_range,
        );
        self.scatter.render(&view)
    }
}
