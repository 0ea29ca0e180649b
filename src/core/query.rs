//! The pure queries behind the two charts. Both are plain functions of
//! `(dataset, control state)` and are recomputed on every control change.

use crate::core::store::Dataset;
use crate::domain::model::{
    Outcome, OutcomeDistributionView, OutcomeSlice, PayloadRange, PayloadScatterView, ScatterPoint,
    SiteFilter,
};

pub const SCATTER_TITLE: &str = "Payload vs. Launch Success";

/// Outcome counts for the proportion chart, restricted to the selected site.
/// An empty restricted set yields a titled view with no slices.
pub fn outcome_distribution(dataset: &Dataset, site: &SiteFilter) -> OutcomeDistributionView {
    let mut successes = 0u64;
    let mut failures = 0u64;
    for record in dataset.records().iter().filter(|r| site.matches(r)) {
        match record.outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }

    let mut slices = Vec::new();
    if successes > 0 {
        slices.push(OutcomeSlice {
            label: Outcome::Success.display_label(),
            count: successes,
        });
    }
    if failures > 0 {
        slices.push(OutcomeSlice {
            label: Outcome::Failure.display_label(),
            count: failures,
        });
    }

    OutcomeDistributionView {
        title: distribution_title(site),
        slices,
    }
}

fn distribution_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Total Launch Success Counts for All Sites".to_string(),
        SiteFilter::Site(name) => format!("Launch Success Counts for {}", name),
    }
}

/// One point per record matching the site filter and the inclusive payload
/// range, in dataset order.
pub fn payload_scatter(
    dataset: &Dataset,
    site: &SiteFilter,
    range: &PayloadRange,
) -> PayloadScatterView {
    let points = dataset
        .records()
        .iter()
        .filter(|r| site.matches(r))
        .filter(|r| range.contains(r.payload_mass_kg))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    PayloadScatterView {
        title: SCATTER_TITLE.to_string(),
        points,
    }
}
