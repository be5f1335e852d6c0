use std::fmt;

// ---------------------------------------------------------------------------
// Column contract
// ---------------------------------------------------------------------------

/// Launch pad identifier.
pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
/// Payload mass in kilograms; may be empty.
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
/// Binary landing outcome (1 = success, 0 = failure).
pub const OUTCOME_COLUMN: &str = "class";
/// Booster family used for colouring.
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Optional auxiliary columns, shown in the launch table when present.
pub const FLIGHT_NUMBER_COLUMN: &str = "Flight Number";
pub const BOOSTER_VERSION_COLUMN: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Outcome – the `class` flag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a numeric class flag. Only exact 0 and 1 are accepted.
    pub fn from_flag(flag: f64) -> Option<Self> {
        if flag == 1.0 {
            Some(Outcome::Success)
        } else if flag == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// `None` when the source cell was empty or NaN.
    pub payload_mass_kg: Option<f64>,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

#[cfg(test)]
impl LaunchRecord {
    pub fn new(site: &str, payload_mass_kg: Option<f64>, outcome: Outcome, category: &str) -> Self {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version_category: category.to_string(),
            flight_number: None,
            booster_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// The full parsed dataset. Built once, then shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    payload_bounds: Option<PayloadBounds>,
}

impl LaunchDataset {
    /// Build the dataset and its payload bounds from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let payload_bounds = records
            .iter()
            .filter_map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<PayloadBounds>, mass| {
                Some(match acc {
                    Some(b) => PayloadBounds {
                        min: b.min.min(mass),
                        max: b.max.max(mass),
                    },
                    None => PayloadBounds {
                        min: mass,
                        max: mass,
                    },
                })
            });

        LaunchDataset {
            records,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Min and max payload over records that have one.
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of successful launches.
    pub fn success_count(&self) -> u64 {
        self.records
            .iter()
            .map(|r| u64::from(r.outcome.flag()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_missing_payloads() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", Some(500.0), Outcome::Success, "v1.0"),
            LaunchRecord::new("A", None, Outcome::Failure, "v1.0"),
            LaunchRecord::new("B", Some(9600.0), Outcome::Success, "B5"),
            LaunchRecord::new("B", Some(0.0), Outcome::Failure, "FT"),
        ]);
        assert_eq!(
            ds.payload_bounds(),
            Some(PayloadBounds {
                min: 0.0,
                max: 9600.0
            })
        );
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.success_count(), 2);
    }

    #[test]
    fn bounds_absent_without_payloads() {
        let ds = LaunchDataset::from_records(vec![LaunchRecord::new(
            "A",
            None,
            Outcome::Success,
            "v1.0",
        )]);
        assert_eq!(ds.payload_bounds(), None);
        assert!(LaunchDataset::from_records(Vec::new()).is_empty());
    }

    #[test]
    fn outcome_flags() {
        assert_eq!(Outcome::from_flag(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_flag(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_flag(0.5), None);
        assert_eq!(Outcome::from_flag(f64::NAN), None);
        assert_eq!(Outcome::Success.flag(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
