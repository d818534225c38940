//! Conversions from internal views into render DTOs.
//!
//! ## Conversion Strategy
//!
//! - `From<&InternalType> for ApiType` where no extra input is needed
//! - Builder functions where labels or slider settings are involved
//! - `qtty::Kilograms` → `f64` via `.value()`

use crate::api::types as api;
use crate::config::{LabelSettings, SliderSettings};
use crate::core::{OutcomeClass, SelectionState};
use crate::reactive::DashboardViews;
use crate::services::{OutcomeSummary, ScatterDataset};
use crate::store::LaunchDataset;

const PIE_TITLE_ALL: &str = "Successful Launches Count by Site (%)";

// Upper bound on generated slider marks
const MAX_SLIDER_MARKS: usize = 1000;

// =========================================================
// Selection
// =========================================================

impl From<&SelectionState> for api::SelectionDto {
    fn from(selection: &SelectionState) -> Self {
        api::SelectionDto {
            site: selection.site.as_str().to_string(),
            low: selection.payload_range.low_kg(),
            high: selection.payload_range.high_kg(),
        }
    }
}

/// Dropdown options: every-site entry first, then each site in dataset order.
pub fn site_options(dataset: &LaunchDataset, all_label: &str) -> Vec<api::SiteOption> {
    std::iter::once(api::SiteOption {
        label: all_label.to_string(),
        value: crate::core::ALL_SITES.to_string(),
    })
    .chain(dataset.sites().iter().map(|site| api::SiteOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

/// Slider spanning the dataset's payload bounds.
///
/// Marks sit on every multiple of `mark_interval` inside the bounds.
pub fn slider_spec(
    dataset: &LaunchDataset,
    settings: &SliderSettings,
    selection: &SelectionState,
) -> api::RangeSliderSpec {
    let min = dataset.min_payload().value();
    let max = dataset.max_payload().value();

    let mut marks = Vec::new();
    if settings.mark_interval > 0.0 {
        let mut tick = (min / settings.mark_interval).ceil() * settings.mark_interval;
        while tick <= max && marks.len() < MAX_SLIDER_MARKS {
            marks.push(api::SliderMark {
                value: tick,
                label: format!("{} Kg", tick),
            });
            tick += settings.mark_interval;
        }
    }

    // A selection outside the dataset still has to sit on the slider track
    let handles = selection.payload_range.clamp_to(&dataset.payload_bounds());
    api::RangeSliderSpec {
        min,
        max,
        step: settings.step,
        marks,
        value: [handles.low_kg(), handles.high_kg()],
    }
}

// =========================================================
// Charts
// =========================================================

fn share(value: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64
    }
}

fn pie_chart(summary: &OutcomeSummary, labels: &LabelSettings) -> api::PieChart {
    let total = summary.total();
    match summary {
        OutcomeSummary::BySite { slices } => api::PieChart {
            title: PIE_TITLE_ALL.to_string(),
            subtitle: Vec::new(),
            slices: slices
                .iter()
                .map(|slice| api::PieSlice {
                    label: slice.site.clone(),
                    value: slice.success_count,
                    share: share(slice.success_count, total),
                    color: None,
                })
                .collect(),
        },
        OutcomeSummary::SingleSite { site, counts } => {
            let slices = OutcomeClass::ALL
                .iter()
                .map(|&outcome| {
                    let value = counts.get(outcome);
                    let color = match outcome {
                        OutcomeClass::Failure => &labels.failure_color,
                        OutcomeClass::Success => &labels.success_color,
                    };
                    api::PieSlice {
                        label: outcome.label().to_string(),
                        value,
                        share: share(value, total),
                        color: Some(color.clone()),
                    }
                })
                .collect();

            api::PieChart {
                title: format!("Launch attempts outcome (%) for site {}", site),
                subtitle: vec![
                    format!("Total number of attempts= {}", counts.total),
                    format!("Number of success= {}", counts.success),
                    format!("Number of failures= {}", counts.failure),
                ],
                slices,
            }
        }
    }
}

fn scatter_chart(scatter: &ScatterDataset, selection: &SelectionState) -> api::ScatterChart {
    let scope = match selection.site.site() {
        Some(site) => site.to_string(),
        None => "all sites".to_string(),
    };

    let mut series: Vec<api::ScatterSeries> = scatter
        .booster_versions()
        .into_iter()
        .map(|name| api::ScatterSeries {
            name: name.to_string(),
            markers: Vec::new(),
        })
        .collect();

    for point in &scatter.points {
        let payload = point.payload_mass.value();
        let marker = api::ScatterMarker {
            x: payload,
            y: point.outcome.as_flag(),
            size: payload,
            hover: format!("{} kg", payload),
        };
        if let Some(group) = series.iter_mut().find(|s| s.name == point.booster_version) {
            group.markers.push(marker);
        }
    }

    api::ScatterChart {
        title: format!("Launch outcome vs. Payload mass for {}", scope),
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        series,
    }
}

impl api::ChartFrame {
    /// Build the frame for one set of derived views.
    pub fn from_views(views: &DashboardViews, labels: &LabelSettings) -> Self {
        api::ChartFrame {
            generation: views.generation,
            selection: api::SelectionDto::from(&views.selection),
            pie: pie_chart(&views.outcome_summary, labels),
            scatter: scatter_chart(&views.scatter, &views.selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::core::{LaunchRecord, PayloadRange, SiteSelector};
    use crate::reactive::compute_views;

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::in_memory(vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
            LaunchRecord::new("A", 2000.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 9000.0, OutcomeClass::Failure, "v1.0"),
        ])
        .unwrap()
    }

    fn frame_for(selection: &SelectionState) -> api::ChartFrame {
        let dataset = sample_dataset();
        let views = compute_views(&dataset, selection, 3);
        api::ChartFrame::from_views(&views, &DashboardConfig::default().labels)
    }

    #[test]
    fn test_all_sites_pie() {
        let selection =
            SelectionState::new(SiteSelector::All, PayloadRange::new(500.0, 9000.0).unwrap());
        let frame = frame_for(&selection);

        assert_eq!(frame.generation, 3);
        assert_eq!(frame.pie.title, "Successful Launches Count by Site (%)");
        assert!(frame.pie.subtitle.is_empty());
        let labels: Vec<&str> = frame.pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(frame.pie.slices[0].share, 0.5);
        assert!(frame.pie.slices.iter().all(|s| s.color.is_none()));
    }

    #[test]
    fn test_single_site_pie() {
        let selection = SelectionState::new(
            SiteSelector::parse("A"),
            PayloadRange::new(0.0, 10000.0).unwrap(),
        );
        let frame = frame_for(&selection);

        assert_eq!(frame.pie.title, "Launch attempts outcome (%) for site A");
        assert_eq!(
            frame.pie.subtitle,
            vec![
                "Total number of attempts= 2",
                "Number of success= 1",
                "Number of failures= 1",
            ]
        );
        assert_eq!(frame.pie.slices[0].label, "Failure");
        assert_eq!(frame.pie.slices[0].color.as_deref(), Some("#DC3912"));
        assert_eq!(frame.pie.slices[1].label, "Success");
        assert_eq!(frame.pie.slices[1].color.as_deref(), Some("#0099C6"));
    }

    #[test]
    fn test_empty_single_site_pie_has_zero_shares() {
        let selection = SelectionState::new(
            SiteSelector::parse("B"),
            PayloadRange::new(0.0, 2500.0).unwrap(),
        );
        let frame = frame_for(&selection);

        assert_eq!(frame.pie.total(), 0);
        assert!(frame.pie.slices.iter().all(|s| s.share == 0.0));
        assert_eq!(frame.scatter.point_count(), 0);
        assert_eq!(frame.scatter.title, "Launch outcome vs. Payload mass for B");
    }

    #[test]
    fn test_scatter_series_grouped_by_booster() {
        let selection =
            SelectionState::new(SiteSelector::All, PayloadRange::new(0.0, 10000.0).unwrap());
        let frame = frame_for(&selection);

        assert_eq!(frame.scatter.title, "Launch outcome vs. Payload mass for all sites");
        let names: Vec<&str> = frame.scatter.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT"]);
        assert_eq!(frame.scatter.series[0].markers.len(), 2);
        assert_eq!(frame.scatter.series[0].markers[1].x, 9000.0);
        assert_eq!(frame.scatter.series[0].markers[1].y, 0);
        assert_eq!(frame.scatter.point_count(), 4);
    }

    #[test]
    fn test_site_options_order() {
        let options = site_options(&sample_dataset(), "All Sites");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "A", "B"]);
        assert_eq!(options[0].label, "All Sites");
    }

    #[test]
    fn test_slider_marks_inside_bounds() {
        let dataset = sample_dataset();
        let selection = SelectionState::new(SiteSelector::All, dataset.payload_bounds());
        let spec = slider_spec(&dataset, &SliderSettings::default(), &selection);

        assert_eq!(spec.min, 500.0);
        assert_eq!(spec.max, 9000.0);
        assert_eq!(spec.step, 1000.0);
        assert_eq!(spec.value, [500.0, 9000.0]);
        assert_eq!(spec.marks.first().unwrap().label, "1000 Kg");
        assert_eq!(spec.marks.last().unwrap().label, "9000 Kg");
        assert_eq!(spec.marks.len(), 9);
    }

    #[test]
    fn test_slider_handles_stay_on_track_for_disjoint_selection() {
        let dataset = sample_dataset();
        let selection =
            SelectionState::new(SiteSelector::All, PayloadRange::new(9500.0, 10000.0).unwrap());
        let spec = slider_spec(&dataset, &SliderSettings::default(), &selection);
        assert_eq!(spec.value, [9000.0, 9000.0]);
    }
}
