use std::path::PathBuf;

use crate::data::model::PayloadBounds;

/// Fixed dashboard settings. There is no config file or CLI; everything here is
/// a compiled-in default.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Launch table read once at startup, relative to the working directory.
    pub data_file: PathBuf,
    pub window_title: String,
    pub heading: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Nominal slider range; widened when the data falls outside it.
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub pie_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "Launch Records Dashboard".to_string(),
            heading: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
            pie_height: 320.0,
        }
    }
}

impl DashboardConfig {
    /// Slider limits covering both the nominal range and the observed payloads.
    pub fn slider_bounds(&self, payloads: Option<PayloadBounds>) -> (f64, f64) {
        match payloads {
            Some(b) => (self.slider_min.min(b.min), self.slider_max.max(b.max)),
            None => (self.slider_min, self.slider_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_bounds_widen_to_data() {
        let config = DashboardConfig::default();
        assert_eq!(config.slider_bounds(None), (0.0, 10_000.0));
        assert_eq!(
            config.slider_bounds(Some(PayloadBounds {
                min: 0.0,
                max: 9600.0
            })),
            (0.0, 10_000.0)
        );
        assert_eq!(
            config.slider_bounds(Some(PayloadBounds {
                min: 350.0,
                max: 15_600.0
            })),
            (0.0, 15_600.0)
        );
    }
}
