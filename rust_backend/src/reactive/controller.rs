use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::{PayloadRange, SelectionChange, SelectionError, SelectionState, SiteSelector};
use crate::services::{project_scatter, summarize_outcomes, OutcomeSummary, ScatterDataset};
use crate::store::LaunchDataset;
use crate::transformations::filter_launches;

/// Recomputation state of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerPhase {
    /// No pass in flight.
    Idle,
    /// Derived views are being rebuilt and handed to the render layer.
    Recomputing,
}

/// Both derived views for one selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    /// Pass counter; strictly increasing per controller.
    pub generation: u64,
    pub selection: SelectionState,
    pub outcome_summary: OutcomeSummary,
    pub scatter: ScatterDataset,
}

/// Run one filter + aggregate pass for `selection`.
///
/// Pure with respect to the dataset: identical inputs give identical views.
pub fn compute_views(
    dataset: &LaunchDataset,
    selection: &SelectionState,
    generation: u64,
) -> DashboardViews {
    let filtered = filter_launches(dataset, selection);
    DashboardViews {
        generation,
        selection: selection.clone(),
        outcome_summary: summarize_outcomes(&filtered, &selection.site),
        scatter: project_scatter(&filtered),
    }
}

/// Owner of the dashboard's selection state.
///
/// Starts at `(ALL, [min_payload, max_payload])`. Each accepted change replaces
/// the whole snapshot and triggers exactly one recomputation; a rejected change
/// leaves the previous snapshot in place.
#[derive(Debug, Clone)]
pub struct DashboardController {
    dataset: Arc<LaunchDataset>,
    selection: SelectionState,
    generation: u64,
}

impl DashboardController {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let selection = SelectionState::new(SiteSelector::All, dataset.payload_bounds());
        Self {
            dataset,
            selection,
            generation: 0,
        }
    }

    pub fn dataset(&self) -> &Arc<LaunchDataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Generation of the most recent pass (0 before the first one).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Validate a candidate snapshot against the dataset.
    ///
    /// Unknown sites and non-finite bounds are rejected; inverted bounds are
    /// swapped. A range overlapping the dataset's payload bounds is clamped into
    /// them; a disjoint range is kept as requested so it selects nothing.
    pub fn normalize(&self, candidate: SelectionState) -> Result<SelectionState, SelectionError> {
        self.check_site(&candidate.site)?;
        let range = PayloadRange::new(
            candidate.payload_range.low_kg(),
            candidate.payload_range.high_kg(),
        )?;
        let bounds = self.dataset.payload_bounds();
        let range = if range.overlaps(&bounds) {
            range.clamp_to(&bounds)
        } else {
            range
        };
        Ok(SelectionState::new(candidate.site, range))
    }

    /// Replace the selection with `new_state` and recompute both views.
    ///
    /// # Errors
    /// [`SelectionError`] if the snapshot is rejected; the previous selection
    /// is kept and no pass runs.
    pub fn on_selection_changed(
        &mut self,
        new_state: SelectionState,
    ) -> Result<DashboardViews, SelectionError> {
        let snapshot = self.normalize(new_state).map_err(|e| {
            warn!("Rejected selection, keeping previous state: {}", e);
            e
        })?;
        self.selection = snapshot;
        Ok(self.recompute())
    }

    /// Coalesce a batch of UI events into one snapshot and run one pass.
    ///
    /// Invalid events inside the batch are dropped individually. If every event
    /// was invalid, the last error is returned and nothing is recomputed. An
    /// empty batch is not a pass: the views for the current selection are
    /// returned under the current generation.
    pub fn apply<I>(&mut self, changes: I) -> Result<DashboardViews, SelectionError>
    where
        I: IntoIterator<Item = SelectionChange>,
    {
        let mut candidate = self.selection.clone();
        let mut applied = 0usize;
        let mut last_error = None;

        for change in changes {
            match self.fold_change(&candidate, change) {
                Ok(next) => {
                    candidate = next;
                    applied += 1;
                }
                Err(e) => {
                    warn!("Dropping selection change: {}", e);
                    last_error = Some(e);
                }
            }
        }

        if applied == 0 {
            return match last_error {
                Some(e) => Err(e),
                None => Ok(compute_views(&self.dataset, &self.selection, self.generation)),
            };
        }

        debug!("Coalesced {} selection change(s) into one snapshot", applied);
        self.on_selection_changed(candidate)
    }

    /// Recompute the views for the current selection (initial render).
    pub fn refresh(&mut self) -> DashboardViews {
        self.recompute()
    }

    fn recompute(&mut self) -> DashboardViews {
        self.generation += 1;
        let views = compute_views(&self.dataset, &self.selection, self.generation);
        info!(
            "Pass {} done for site={} payload=[{}, {}]: {} point(s), pie total {}",
            views.generation,
            views.selection.site,
            views.selection.payload_range.low_kg(),
            views.selection.payload_range.high_kg(),
            views.scatter.len(),
            views.outcome_summary.total()
        );
        views
    }

    fn check_site(&self, site: &SiteSelector) -> Result<(), SelectionError> {
        match site {
            SiteSelector::Site(name) if !self.dataset.has_site(name) => {
                Err(SelectionError::UnknownSite(name.clone()))
            }
            _ => Ok(()),
        }
    }

    fn fold_change(
        &self,
        current: &SelectionState,
        change: SelectionChange,
    ) -> Result<SelectionState, SelectionError> {
        match change {
            SelectionChange::Site { site } => {
                self.check_site(&site)?;
                Ok(current.with_site(site))
            }
            SelectionChange::PayloadRange { low, high } => {
                Ok(current.with_payload_range(PayloadRange::new(low, high)?))
            }
            SelectionChange::Snapshot { site, low, high } => {
                self.check_site(&site)?;
                Ok(SelectionState::new(site, PayloadRange::new(low, high)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LaunchRecord, OutcomeClass};
    use crate::services::OutcomeCounts;

    fn controller() -> DashboardController {
        let dataset = LaunchDataset::in_memory(vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
            LaunchRecord::new("A", 2000.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 9000.0, OutcomeClass::Failure, "B5"),
        ])
        .unwrap();
        DashboardController::new(Arc::new(dataset))
    }

    fn state(site: &str, low: f64, high: f64) -> SelectionState {
        SelectionState::new(SiteSelector::parse(site), PayloadRange::new(low, high).unwrap())
    }

    #[test]
    fn test_initial_selection_spans_dataset() {
        let controller = controller();
        assert_eq!(controller.selection().site, SiteSelector::All);
        assert_eq!(controller.selection().payload_range.low_kg(), 500.0);
        assert_eq!(controller.selection().payload_range.high_kg(), 9000.0);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_refresh_covers_full_dataset() {
        let mut controller = controller();
        let views = controller.refresh();
        assert_eq!(views.generation, 1);
        assert_eq!(views.scatter.len(), 4);
        assert_eq!(views.outcome_summary.total(), 2);
    }

    #[test]
    fn test_selection_clamped_into_dataset_bounds() {
        let mut controller = controller();
        let views = controller.on_selection_changed(state("A", 0.0, 10000.0)).unwrap();
        assert_eq!(views.selection.payload_range.low_kg(), 500.0);
        assert_eq!(views.selection.payload_range.high_kg(), 9000.0);
        assert_eq!(
            views.outcome_summary,
            OutcomeSummary::SingleSite {
                site: "A".to_string(),
                counts: OutcomeCounts {
                    failure: 1,
                    success: 1,
                    total: 2
                }
            }
        );
    }

    #[test]
    fn test_range_beyond_dataset_selects_nothing() {
        let dataset = LaunchDataset::in_memory(vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
            LaunchRecord::new("B", 9600.0, OutcomeClass::Failure, "B5"),
        ])
        .unwrap();
        let mut controller = DashboardController::new(Arc::new(dataset));

        let views = controller
            .apply([SelectionChange::Snapshot {
                site: SiteSelector::All,
                low: 9700.0,
                high: 10000.0,
            }])
            .unwrap();
        assert!(views.scatter.is_empty());
        assert_eq!(views.outcome_summary.total(), 0);
        assert_eq!(views.selection.payload_range.low_kg(), 9700.0);
        assert_eq!(views.selection.payload_range.high_kg(), 10000.0);

        let views = controller
            .apply([SelectionChange::Snapshot {
                site: SiteSelector::parse("B"),
                low: 9700.0,
                high: 10000.0,
            }])
            .unwrap();
        assert_eq!(views.outcome_summary.total(), 0);
        assert!(views.scatter.is_empty());
    }

    #[test]
    fn test_empty_batch_does_not_start_a_pass() {
        let mut controller = controller();
        controller.refresh();

        let views = controller.apply(Vec::new()).unwrap();
        assert_eq!(controller.generation(), 1);
        assert_eq!(views.generation, 1);
        assert_eq!(views.scatter.len(), 4);
    }

    #[test]
    fn test_unknown_site_keeps_previous_state() {
        let mut controller = controller();
        controller.on_selection_changed(state("B", 0.0, 5000.0)).unwrap();
        let before = controller.selection().clone();

        let err = controller
            .on_selection_changed(state("CCAFS LC-40", 0.0, 5000.0))
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownSite("CCAFS LC-40".to_string()));
        assert_eq!(controller.selection(), &before);
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let mut controller = controller();
        let raw = SelectionState {
            site: SiteSelector::All,
            payload_range: PayloadRange {
                low: qtty::Kilograms::new(3000.0),
                high: qtty::Kilograms::new(1000.0),
            },
        };
        let views = controller.on_selection_changed(raw).unwrap();
        assert_eq!(views.selection.payload_range.low_kg(), 1000.0);
        assert_eq!(views.selection.payload_range.high_kg(), 3000.0);
        assert_eq!(views.scatter.len(), 2);
    }

    #[test]
    fn test_apply_coalesces_batch_into_one_pass() {
        let mut controller = controller();
        let views = controller
            .apply(vec![
                SelectionChange::Site {
                    site: SiteSelector::parse("A"),
                },
                SelectionChange::PayloadRange {
                    low: 0.0,
                    high: 1000.0,
                },
                SelectionChange::Site {
                    site: SiteSelector::parse("B"),
                },
            ])
            .unwrap();

        assert_eq!(controller.generation(), 1);
        assert_eq!(views.selection.site, SiteSelector::parse("B"));
        assert_eq!(views.selection.payload_range.high_kg(), 1000.0);
        assert!(views.scatter.is_empty());
    }

    #[test]
    fn test_apply_drops_invalid_changes_individually() {
        let mut controller = controller();
        let views = controller
            .apply(vec![
                SelectionChange::PayloadRange {
                    low: 0.0,
                    high: 2500.0,
                },
                SelectionChange::Site {
                    site: SiteSelector::parse("Z"),
                },
                SelectionChange::PayloadRange {
                    low: f64::NAN,
                    high: 1.0,
                },
            ])
            .unwrap();
        assert_eq!(views.selection.site, SiteSelector::All);
        assert_eq!(views.selection.payload_range.high_kg(), 2500.0);
    }

    #[test]
    fn test_apply_all_invalid_returns_error() {
        let mut controller = controller();
        let result = controller.apply(vec![SelectionChange::Site {
            site: SiteSelector::parse("Z"),
        }]);
        assert!(result.is_err());
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_identical_selection_gives_identical_views() {
        let mut controller = controller();
        let first = controller.on_selection_changed(state("B", 0.0, 9000.0)).unwrap();
        let second = controller.on_selection_changed(state("B", 0.0, 9000.0)).unwrap();
        assert_eq!(first.outcome_summary, second.outcome_summary);
        assert_eq!(first.scatter, second.scatter);
        assert!(second.generation > first.generation);
    }
}
