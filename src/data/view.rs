//! Chart view-models: pure functions from the dataset and the selector state to
//! the data each chart draws.

use std::collections::BTreeMap;

use super::filter::{PayloadRange, SiteSelector};
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Slices for the success pie.
///
/// * `AllSites` – one slice per site present in the data, valued by its success
///   count (zero-success sites included), in site-name order.
/// * `Site(s)` – the success / failure split for `s`, largest first. Outcomes
///   never observed at `s` get no slice; an unknown site gets no slices at all.
pub fn compute_pie(dataset: &LaunchDataset, selected: &SiteSelector) -> Vec<PieSlice> {
    match selected {
        SiteSelector::AllSites => {
            let mut successes: BTreeMap<&str, u64> = BTreeMap::new();
            for record in dataset.records() {
                *successes.entry(record.launch_site.as_str()).or_default() +=
                    u64::from(record.outcome.flag());
            }
            successes
                .into_iter()
                .map(|(site, value)| PieSlice {
                    label: site.to_string(),
                    value,
                })
                .collect()
        }
        SiteSelector::Site(site) => {
            let (mut success, mut failure) = (0u64, 0u64);
            for record in dataset.records().iter().filter(|r| r.launch_site == *site) {
                match record.outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failure => failure += 1,
                }
            }

            let mut slices: Vec<PieSlice> = [(Outcome::Success, success), (Outcome::Failure, failure)]
                .into_iter()
                .filter(|&(_, count)| count > 0)
                .map(|(outcome, value)| PieSlice {
                    label: outcome.label().to_string(),
                    value,
                })
                .collect();
            // Stable: on a tie Success stays first.
            slices.sort_by(|a, b| b.value.cmp(&a.value));
            slices
        }
    }
}

pub fn pie_title(selected: &SiteSelector) -> String {
    match selected {
        SiteSelector::AllSites => "Total Successful Launches by Site".to_string(),
        SiteSelector::Site(site) => format!("Total Successful Launches at Site {site}"),
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub launch_site: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

/// Launches with a payload inside `range` at the selected site(s), in dataset
/// order.
pub fn compute_scatter(
    dataset: &LaunchDataset,
    selected: &SiteSelector,
    range: PayloadRange,
) -> Vec<ScatterPoint> {
    dataset
        .records()
        .iter()
        .filter(|r| selected.matches(&r.launch_site))
        .filter_map(|r| {
            let mass = r.payload_mass_kg.filter(|&m| range.contains(m))?;
            Some(ScatterPoint {
                payload_mass_kg: mass,
                outcome: r.outcome,
                booster_version_category: r.booster_version_category.clone(),
                launch_site: r.launch_site.clone(),
                flight_number: r.flight_number,
                booster_version: r.booster_version.clone(),
            })
        })
        .collect()
}

pub fn scatter_title(selected: &SiteSelector) -> String {
    match selected {
        SiteSelector::AllSites => {
            "Correlation Between Payload and Success for all Sites".to_string()
        }
        SiteSelector::Site(site) => {
            format!("Correlation Between Payload and Success at Site {site}")
        }
    }
}
