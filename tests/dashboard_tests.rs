use launch_dash::core::{ProportionRenderer, ScatterRenderer};
use launch_dash::domain::model::{
    LaunchRecord, Outcome, OutcomeDistributionView, PayloadRange, PayloadScatterView, SiteFilter,
};
use launch_dash::utils::error::{DashError, Result};
use launch_dash::{Dashboard, Dataset};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingProportion {
    views: Rc<RefCell<Vec<OutcomeDistributionView>>>,
}

impl ProportionRenderer for RecordingProportion {
    fn render(&mut self, view: &OutcomeDistributionView) -> Result<()> {
        self.views.borrow_mut().push(view.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingScatter {
    views: Rc<RefCell<Vec<PayloadScatterView>>>,
}

impl ScatterRenderer for RecordingScatter {
    fn render(&mut self, view: &PayloadScatterView) -> Result<()> {
        self.views.borrow_mut().push(view.clone());
        Ok(())
    }
}

struct FailingProportion;

impl ProportionRenderer for FailingProportion {
    fn render(&mut self, _view: &OutcomeDistributionView) -> Result<()> {
        Err(DashError::RenderError {
            message: "figure backend unavailable".to_string(),
        })
    }
}

fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass_kg: payload,
        booster_version_category: "v1.0".to_string(),
        outcome,
    }
}

fn scenario_dataset() -> Dataset {
    Dataset::from_records(vec![
        record("A", 500.0, Outcome::Success),
        record("A", 9000.0, Outcome::Failure),
        record("B", 3000.0, Outcome::Success),
    ])
}

#[test]
fn test_default_selection_spans_dataset_payloads() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let dashboard = Dashboard::new(scenario_dataset(), pie, scatter);

    assert_eq!(dashboard.selection().site, SiteFilter::All);
    assert_eq!(
        dashboard.selection().payload_range,
        PayloadRange::new(500.0, 9000.0)
    );
}

#[test]
fn test_refresh_renders_both_charts() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), pie.clone(), scatter.clone());

    dashboard.refresh().unwrap();

    let pies = pie.views.borrow();
    let scatters = scatter.views.borrow();
    assert_eq!(pies.len(), 1);
    assert_eq!(scatters.len(), 1);
    assert_eq!(pies[0].total(), 3);
    assert_eq!(scatters[0].points.len(), 3);
}

#[test]
fn test_site_change_redraws_both_charts() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), pie.clone(), scatter.clone());

    dashboard.set_site(SiteFilter::Site("A".to_string())).unwrap();

    let pies = pie.views.borrow();
    let scatters = scatter.views.borrow();
    assert_eq!(pies.len(), 1);
    assert_eq!(scatters.len(), 1);
    assert_eq!(pies[0].title, "Launch Success Counts for A");
    assert_eq!(pies[0].total(), 2);
    assert_eq!(scatters[0].points.len(), 2);
}

#[test]
fn test_payload_change_redraws_scatter_only() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), pie.clone(), scatter.clone());

    dashboard
        .set_payload_range(PayloadRange::new(0.0, 3000.0))
        .unwrap();

    // The proportion chart does not depend on the range control.
    assert_eq!(pie.views.borrow().len(), 0);
    let scatters = scatter.views.borrow();
    assert_eq!(scatters.len(), 1);
    assert_eq!(scatters[0].points.len(), 2);
}

#[test]
fn test_successive_control_changes_accumulate() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), pie.clone(), scatter.clone());

    dashboard.refresh().unwrap();
    dashboard.set_site(SiteFilter::Site("B".to_string())).unwrap();
    dashboard
        .set_payload_range(PayloadRange::new(0.0, 1000.0))
        .unwrap();

    assert_eq!(pie.views.borrow().len(), 2);
    let scatters = scatter.views.borrow();
    assert_eq!(scatters.len(), 3);
    // Site B has one record at 3000 kg, outside the final 0..1000 range.
    assert_eq!(scatters[2].points.len(), 0);
}

#[test]
fn test_unknown_site_yields_empty_views() {
    let pie = RecordingProportion::default();
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), pie.clone(), scatter.clone());

    dashboard.set_site(SiteFilter::Site("Z".to_string())).unwrap();

    assert!(pie.views.borrow()[0].is_empty());
    assert!(scatter.views.borrow()[0].is_empty());
}

#[test]
fn test_renderer_failure_propagates() {
    let scatter = RecordingScatter::default();
    let mut dashboard = Dashboard::new(scenario_dataset(), FailingProportion, scatter);

    let err = dashboard.refresh().unwrap_err();
    assert!(matches!(err, DashError::RenderError { .. }));
}
