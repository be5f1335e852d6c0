use std::collections::HashSet;

use super::filter::SiteSelector;
use super::model::LaunchDataset;

/// Label of the synthetic first option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Distinct launch sites in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteCatalog {
    sites: Vec<String>,
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteSelector,
}

/// Collect the distinct `launch_site` values of a dataset.
pub fn build_catalog(dataset: &LaunchDataset) -> SiteCatalog {
    let mut seen: HashSet<&str> = HashSet::new();
    let sites = dataset
        .records()
        .iter()
        .filter(|r| seen.insert(r.launch_site.as_str()))
        .map(|r| r.launch_site.clone())
        .collect();
    SiteCatalog { sites }
}

impl SiteCatalog {
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn contains(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Dropdown options: "All Sites" first (the default), then each site.
    pub fn options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: SiteSelector::AllSites,
        })
        .chain(self.sites.iter().map(|site| SiteOption {
            label: site.clone(),
            value: SiteSelector::Site(site.clone()),
        }))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", Some(0.0), Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", Some(500.0), Outcome::Failure, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", Some(2500.0), Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", Some(5300.0), Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", None, Outcome::Success, "B4"),
        ])
    }

    #[test]
    fn distinct_sites_in_first_seen_order() {
        let catalog = build_catalog(&dataset());
        assert_eq!(
            catalog.sites(),
            &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert!(catalog.contains("KSC LC-39A"));
        assert!(!catalog.contains("ALL"));
    }

    #[test]
    fn options_start_with_all_sites() {
        let options = build_catalog(&dataset()).options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(options[0].value, SiteSelector::AllSites);
        assert_eq!(options[1].label, "CCAFS LC-40");
        assert_eq!(
            options[1].value,
            SiteSelector::Site("CCAFS LC-40".to_string())
        );
    }

    #[test]
    fn empty_dataset_only_offers_all_sites() {
        let catalog = build_catalog(&LaunchDataset::from_records(Vec::new()));
        assert!(catalog.sites().is_empty());
        assert_eq!(catalog.options().len(), 1);
    }
}
