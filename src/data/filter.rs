use std::fmt;

use super::catalog::ALL_SITES_LABEL;
use super::model::PayloadBounds;

// ---------------------------------------------------------------------------
// Site selector
// ---------------------------------------------------------------------------

/// Which launch sites a view covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelector {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelector {
    /// Whether a record from `site` passes this selector.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::AllSites => true,
            SiteSelector::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::AllSites => f.write_str(ALL_SITES_LABEL),
            SiteSelector::Site(site) => f.write_str(site),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Closed payload interval `[lo, hi]` in kilograms.
///
/// Any pair of bounds is accepted. An inverted or NaN interval contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        self.lo <= mass && mass <= self.hi
    }

    pub fn is_empty(&self) -> bool {
        !(self.lo <= self.hi)
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        PayloadRange::new(bounds.min, bounds.max)
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.0}, {:.0}] kg", self.lo, self.hi)
    }
}
