use qtty::Kilograms;
use serde::{Deserialize, Serialize};

use crate::core::{LaunchRecord, OutcomeClass};

/// One point of the payload vs. outcome chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass: Kilograms,
    pub outcome: OutcomeClass,
    pub booster_version: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass: record.payload_mass,
            outcome: record.outcome,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Per-record projection feeding the correlation view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataset {
    pub points: Vec<ScatterPoint>,
}

impl ScatterDataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct booster versions in order of first appearance (legend order).
    pub fn booster_versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for point in &self.points {
            if !versions.contains(&point.booster_version.as_str()) {
                versions.push(&point.booster_version);
            }
        }
        versions
    }

    /// Smallest and largest payload among the points, `None` when empty.
    pub fn payload_extent(&self) -> Option<(Kilograms, Kilograms)> {
        let mut iter = self.points.iter().map(|p| p.payload_mass);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), mass| {
            (
                if mass < min { mass } else { min },
                if mass > max { mass } else { max },
            )
        }))
    }

    pub fn success_count(&self) -> usize {
        self.points.iter().filter(|p| p.outcome.is_success()).count()
    }
}

/// Project filtered launches to one scatter point each, keeping input order.
pub fn project_scatter(records: &[&LaunchRecord]) -> ScatterDataset {
    ScatterDataset {
        points: records.iter().map(|r| ScatterPoint::from(*r)).collect(),
    }
}
