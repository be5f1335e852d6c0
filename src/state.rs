use std::path::PathBuf;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::catalog::{build_catalog, SiteCatalog, SiteOption};
use crate::data::filter::{PayloadRange, SiteSelector};
use crate::data::model::LaunchDataset;
use crate::data::view::{compute_pie, compute_scatter, PieSlice, ScatterPoint};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct DashboardState {
    /// Loaded once at startup; never replaced.
    pub dataset: Arc<LaunchDataset>,
    pub source: PathBuf,

    pub catalog: SiteCatalog,
    pub site_options: Vec<SiteOption>,

    /// Current dropdown value.
    pub selected_site: SiteSelector,
    /// Current payload slider value.
    pub payload_range: PayloadRange,
    /// Slider limits and step.
    pub slider_bounds: (f64, f64),
    pub slider_step: f64,
    /// Text typed into the searchable dropdown.
    pub site_search: String,

    /// Latest view-model outputs, replaced on every interaction.
    pub pie_slices: Vec<PieSlice>,
    pub scatter_points: Vec<ScatterPoint>,

    /// Colour per booster version category (scatter) and per slice label (pie).
    pub booster_colors: ColorMap,
    pub slice_colors: ColorMap,

    pub show_table: bool,
}

impl DashboardState {
    pub fn new(dataset: Arc<LaunchDataset>, source: PathBuf, config: &DashboardConfig) -> Self {
        let catalog = build_catalog(&dataset);
        let site_options = catalog.options();
        let slider_bounds = config.slider_bounds(dataset.payload_bounds());

        let booster_colors = ColorMap::new(
            dataset
                .records()
                .iter()
                .map(|r| r.booster_version_category.as_str()),
        );
        let slice_colors = ColorMap::new(
            catalog
                .sites()
                .iter()
                .map(String::as_str)
                .chain(["Success", "Failure"]),
        );

        let mut state = Self {
            dataset,
            source,
            catalog,
            site_options,
            selected_site: SiteSelector::AllSites,
            payload_range: PayloadRange::new(slider_bounds.0, slider_bounds.1),
            slider_bounds,
            slider_step: config.slider_step,
            site_search: String::new(),
            pie_slices: Vec::new(),
            scatter_points: Vec::new(),
            booster_colors,
            slice_colors,
            show_table: false,
        };
        state.reset_selection();
        state
    }

    /// Default selection: all sites, full observed payload range.
    pub fn reset_selection(&mut self) {
        let range = self
            .dataset
            .payload_bounds()
            .map(PayloadRange::from)
            .unwrap_or(PayloadRange::new(self.slider_bounds.0, self.slider_bounds.1));
        self.site_search.clear();
        self.on_site_changed(SiteSelector::AllSites);
        self.on_site_or_range_changed(SiteSelector::AllSites, range);
    }

    /// Dropdown changed: refresh the pie and the scatter.
    pub fn on_site_changed(&mut self, site: SiteSelector) {
        if let SiteSelector::Site(name) = &site {
            if !self.catalog.contains(name) {
                log::debug!("site {name:?} is not in the catalog; views will be empty");
            }
        }
        self.pie_slices = compute_pie(&self.dataset, &site);
        self.selected_site = site;
        self.refresh_scatter();
        log::debug!(
            "site {} -> {} pie slices",
            self.selected_site,
            self.pie_slices.len()
        );
    }

    /// An option was picked from the dropdown: drop the search text and refresh.
    pub fn choose_site(&mut self, site: SiteSelector) {
        self.site_search.clear();
        self.on_site_changed(site);
    }

    /// Dropdown or slider changed: refresh the scatter.
    pub fn on_site_or_range_changed(&mut self, site: SiteSelector, range: PayloadRange) {
        if range.is_empty() {
            log::debug!("payload range {range} is empty; scatter will be empty");
        }
        self.selected_site = site;
        self.payload_range = range;
        self.refresh_scatter();
        log::debug!(
            "site {} range {} -> {} scatter points",
            self.selected_site,
            self.payload_range,
            self.scatter_points.len()
        );
    }

    fn refresh_scatter(&mut self) {
        self.scatter_points =
            compute_scatter(&self.dataset, &self.selected_site, self.payload_range);
    }

    /// Options whose label contains the search text (case-insensitive).
    pub fn visible_site_options(&self) -> Vec<&SiteOption> {
        let needle = self.site_search.trim().to_lowercase();
        self.site_options
            .iter()
            .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn state() -> DashboardState {
        let dataset = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", Some(500.0), Outcome::Success, "FT"),
            LaunchRecord::new("A", Some(1500.0), Outcome::Failure, "v1.1"),
            LaunchRecord::new("B", Some(800.0), Outcome::Success, "B4"),
            LaunchRecord::new("B", None, Outcome::Failure, "B4"),
        ]);
        DashboardState::new(
            Arc::new(dataset),
            PathBuf::from("launches.csv"),
            &DashboardConfig::default(),
        )
    }

    #[test]
    fn starts_with_all_sites_and_full_payload_range() {
        let s = state();
        assert_eq!(s.selected_site, SiteSelector::AllSites);
        assert_eq!(s.payload_range, PayloadRange::new(500.0, 1500.0));
        assert_eq!(s.slider_bounds, (0.0, 10_000.0));
        assert_eq!(s.pie_slices.len(), 2);
        assert_eq!(s.scatter_points.len(), 3);
        assert_eq!(s.site_options[0].value, SiteSelector::AllSites);
    }

    #[test]
    fn site_change_refreshes_both_views() {
        let mut s = state();
        s.on_site_changed(SiteSelector::Site("B".to_string()));
        let total: u64 = s.pie_slices.iter().map(|p| p.value).sum();
        assert_eq!(total, 2);
        assert_eq!(s.scatter_points.len(), 1);
        assert_eq!(s.scatter_points[0].launch_site, "B");
    }

    #[test]
    fn range_change_refreshes_scatter_only() {
        let mut s = state();
        let pie_before = s.pie_slices.clone();
        s.on_site_or_range_changed(SiteSelector::AllSites, PayloadRange::new(0.0, 1000.0));
        assert_eq!(s.scatter_points.len(), 2);
        assert_eq!(s.pie_slices, pie_before);

        s.on_site_or_range_changed(SiteSelector::AllSites, PayloadRange::new(1000.0, 0.0));
        assert!(s.scatter_points.is_empty());
    }

    #[test]
    fn unknown_site_empties_views() {
        let mut s = state();
        s.on_site_changed(SiteSelector::Site("C".to_string()));
        assert!(s.pie_slices.is_empty());
        assert!(s.scatter_points.is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = state();
        s.site_search = "b".to_string();
        s.on_site_changed(SiteSelector::Site("B".to_string()));
        s.on_site_or_range_changed(SiteSelector::Site("B".to_string()), PayloadRange::new(0.0, 1.0));
        s.reset_selection();
        assert_eq!(s.selected_site, SiteSelector::AllSites);
        assert_eq!(s.payload_range, PayloadRange::new(500.0, 1500.0));
        assert!(s.site_search.is_empty());
        assert_eq!(s.scatter_points.len(), 3);
    }

    #[test]
    fn choosing_a_site_clears_search_and_refreshes() {
        let mut s = state();
        s.site_search = "b".to_string();
        let picked = s.visible_site_options()[0].value.clone();
        s.choose_site(picked);
        assert_eq!(s.selected_site, SiteSelector::Site("B".to_string()));
        assert!(s.site_search.is_empty());
        assert_eq!(s.visible_site_options().len(), 3);
        assert_eq!(s.pie_slices.iter().map(|p| p.value).sum::<u64>(), 2);
        assert_eq!(s.scatter_points.len(), 1);
    }

    #[test]
    fn site_search_filters_options() {
        let mut s = state();
        assert_eq!(s.visible_site_options().len(), 3);
        s.site_search = "b".to_string();
        let labels: Vec<&str> = s
            .visible_site_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["B"]);
    }
}
