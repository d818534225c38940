//! Site and payload-range predicates over the launch dataset.
//!
//! Boundary policy: a record passes the payload predicate when
//! `low <= payload_mass <= high`. The same inclusive test is applied whether
//! one site or every site is selected. Results borrow from the input and keep
//! its order, so repeated calls with the same inputs return the same sequence.

use crate::core::{LaunchRecord, PayloadRange, SelectionState, SiteSelector};
use crate::store::LaunchDataset;

/// Filter records by launch site (pass-through for [`SiteSelector::All`])
pub fn filter_by_site<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelector,
) -> Vec<&'a LaunchRecord> {
    records.iter().filter(|r| site.matches(&r.site)).collect()
}

/// Filter records by inclusive payload-mass range
pub fn filter_by_payload_range<'a>(
    records: &'a [LaunchRecord],
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass))
        .collect()
}

/// Filter records by site and payload range in a single pass
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelector,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| site.matches(&r.site) && range.contains(r.payload_mass))
        .collect()
}

/// Records of `dataset` matching the current selection snapshot
pub fn filter_launches<'a>(
    dataset: &'a LaunchDataset,
    selection: &SelectionState,
) -> Vec<&'a LaunchRecord> {
    filter_records(dataset.records(), &selection.site, &selection.payload_range)
}
