use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{LaunchRecord, OutcomeClass, SiteSelector};

/// Success count for one site in the "all sites" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSuccessSlice {
    pub site: String,
    pub success_count: usize,
}

/// Failure/success breakdown for a single site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub failure: usize,
    pub success: usize,
    pub total: usize,
}

impl OutcomeCounts {
    /// Build counts from records, looking each class up by key.
    ///
    /// A class with no records reads as zero.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LaunchRecord>,
    {
        let mut by_class: BTreeMap<OutcomeClass, usize> = BTreeMap::new();
        for record in records {
            *by_class.entry(record.outcome).or_insert(0) += 1;
        }

        let failure = by_class.get(&OutcomeClass::Failure).copied().unwrap_or(0);
        let success = by_class.get(&OutcomeClass::Success).copied().unwrap_or(0);
        Self {
            failure,
            success,
            total: failure + success,
        }
    }

    pub fn get(&self, outcome: OutcomeClass) -> usize {
        match outcome {
            OutcomeClass::Failure => self.failure,
            OutcomeClass::Success => self.success,
        }
    }
}

/// Data behind the outcome pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeSummary {
    /// Successful launches per site; sites without successes are omitted.
    BySite { slices: Vec<SiteSuccessSlice> },
    /// Failure vs success for one site.
    SingleSite { site: String, counts: OutcomeCounts },
}

impl OutcomeSummary {
    /// Sum of all plotted values.
    pub fn total(&self) -> usize {
        match self {
            OutcomeSummary::BySite { slices } => slices.iter().map(|s| s.success_count).sum(),
            OutcomeSummary::SingleSite { counts, .. } => counts.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Reduce filtered launches to the outcome summary for `site`.
///
/// With [`SiteSelector::All`] this counts successes grouped by site, in order
/// of first appearance. With a single site it counts both classes for that
/// site; records from other sites are ignored.
pub fn summarize_outcomes(records: &[&LaunchRecord], site: &SiteSelector) -> OutcomeSummary {
    match site {
        SiteSelector::All => {
            let mut slices: Vec<SiteSuccessSlice> = Vec::new();
            for record in records.iter().filter(|r| r.is_success()) {
                match slices.iter_mut().find(|s| s.site == record.site) {
                    Some(slice) => slice.success_count += 1,
                    None => slices.push(SiteSuccessSlice {
                        site: record.site.clone(),
                        success_count: 1,
                    }),
                }
            }
            OutcomeSummary::BySite { slices }
        }
        SiteSelector::Site(name) => {
            let counts =
                OutcomeCounts::from_records(records.iter().copied().filter(|r| &r.site == name));
            OutcomeSummary::SingleSite {
                site: name.clone(),
                counts,
            }
        }
    }
}
