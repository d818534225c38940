//! Domain models for launch records and dashboard selections.
//!
//! A [`LaunchRecord`] is one launch attempt loaded from the historical dataset.
//! A [`SelectionState`] is the snapshot of the two UI inputs (site selector and
//! payload range slider) that drives every recomputation.

use qtty::Kilograms;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::SelectionError;

/// Selector value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Binary outcome of a launch attempt.
///
/// Serialized as the `class` flag used by the dataset: `0` for failure and
/// `1` for success.
///
/// # Examples
///
/// ```
/// use launch_dash::core::OutcomeClass;
///
/// assert_eq!(OutcomeClass::from_flag(1), Some(OutcomeClass::Success));
/// assert_eq!(OutcomeClass::Failure.as_flag(), 0);
/// assert_eq!(OutcomeClass::from_flag(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Both classes, failure first.
    pub const ALL: [OutcomeClass; 2] = [OutcomeClass::Failure, OutcomeClass::Success];

    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(OutcomeClass::Failure),
            1 => Some(OutcomeClass::Success),
            _ => None,
        }
    }

    /// Interpret a numeric cell (`0`/`1`, possibly read as a float).
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(OutcomeClass::Failure)
        } else if value == 1.0 {
            Some(OutcomeClass::Success)
        } else {
            None
        }
    }

    pub fn as_flag(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }

    /// Human readable label used for chart slices.
    pub fn label(self) -> &'static str {
        match self {
            OutcomeClass::Failure => "Failure",
            OutcomeClass::Success => "Success",
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(outcome: OutcomeClass) -> Self {
        outcome.as_flag()
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        OutcomeClass::from_flag(flag)
            .ok_or_else(|| format!("Invalid outcome class {}: expected 0 or 1", flag))
    }
}

/// A single launch attempt.
///
/// Records are validated at load time and never mutated afterwards: `site` is
/// non-empty and `payload_mass` is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass: Kilograms,
    pub outcome: OutcomeClass,
    /// Only used to group points visually.
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_version: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass: Kilograms::new(payload_mass_kg),
            outcome,
            booster_version: booster_version.into(),
        }
    }

    pub fn payload_kg(&self) -> f64 {
        self.payload_mass.value()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Site selector value: every site, or exactly one.
///
/// Converts from and to the raw selector string, where [`ALL_SITES`] is the
/// sentinel for every site.
///
/// # Examples
///
/// ```
/// use launch_dash::core::SiteSelector;
///
/// assert_eq!(SiteSelector::parse("ALL"), SiteSelector::All);
/// assert_eq!(
///     SiteSelector::parse("KSC LC-39A"),
///     SiteSelector::Site("KSC LC-39A".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// The concrete site name, or `None` for [`SiteSelector::All`].
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelector::All => None,
            SiteSelector::Site(name) => Some(name.as_str()),
        }
    }

    /// Whether a record launched from `site` passes this selector.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(name) => name.as_str(),
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        SiteSelector::parse(&value)
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        SiteSelector::parse(value)
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> Self {
        match selector {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload-mass interval `[low, high]` in kilograms.
///
/// Constructed through [`PayloadRange::new`], which swaps inverted bounds, so
/// `low <= high` always holds for a range built by this crate.
///
/// # Examples
///
/// ```
/// use launch_dash::core::PayloadRange;
///
/// let range = PayloadRange::new(5000.0, 1000.0).unwrap();
/// assert_eq!(range.low_kg(), 1000.0);
/// assert_eq!(range.high_kg(), 5000.0);
/// assert!(range.contains_kg(5000.0));
/// assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: Kilograms,
    pub high: Kilograms,
}

impl PayloadRange {
    pub fn new(low_kg: f64, high_kg: f64) -> Result<Self, SelectionError> {
        for bound in [low_kg, high_kg] {
            if !bound.is_finite() {
                return Err(SelectionError::NonFiniteBound(bound));
            }
        }
        let (low, high) = if low_kg <= high_kg {
            (low_kg, high_kg)
        } else {
            (high_kg, low_kg)
        };
        Ok(Self {
            low: Kilograms::new(low),
            high: Kilograms::new(high),
        })
    }

    pub fn low_kg(&self) -> f64 {
        self.low.value()
    }

    pub fn high_kg(&self) -> f64 {
        self.high.value()
    }

    /// Inclusive membership test: `low <= mass <= high`.
    pub fn contains(&self, mass: Kilograms) -> bool {
        self.contains_kg(mass.value())
    }

    pub fn contains_kg(&self, mass_kg: f64) -> bool {
        self.low_kg() <= mass_kg && mass_kg <= self.high_kg()
    }

    /// Whether the two ranges share at least one value.
    pub fn overlaps(&self, other: &PayloadRange) -> bool {
        self.low_kg() <= other.high_kg() && other.low_kg() <= self.high_kg()
    }

    /// Clamp both endpoints into `bounds`, keeping `low <= high`.
    pub fn clamp_to(&self, bounds: &PayloadRange) -> PayloadRange {
        let clamp = |v: f64| v.max(bounds.low_kg()).min(bounds.high_kg());
        PayloadRange {
            low: Kilograms::new(clamp(self.low_kg())),
            high: Kilograms::new(clamp(self.high_kg())),
        }
    }
}

/// Snapshot of the dashboard's two selection inputs.
///
/// Replaced wholesale on every accepted change; never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelector,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn new(site: SiteSelector, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }

    pub fn with_site(&self, site: SiteSelector) -> Self {
        Self {
            site,
            payload_range: self.payload_range,
        }
    }

    pub fn with_payload_range(&self, payload_range: PayloadRange) -> Self {
        Self {
            site: self.site.clone(),
            payload_range,
        }
    }
}

/// A single UI event, as delivered by the host.
///
/// Raw bounds are carried as plain numbers; they are validated and clamped by
/// the controller when the event is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionChange {
    /// The site dropdown changed.
    Site { site: SiteSelector },
    /// Either endpoint of the payload slider changed.
    PayloadRange { low: f64, high: f64 },
    /// Both inputs at once.
    Snapshot {
        site: SiteSelector,
        low: f64,
        high: f64,
    },
}
