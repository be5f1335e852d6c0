use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::DashboardState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: DashboardState,
    heading: String,
    pie_height: f32,
}

impl LaunchDashApp {
    pub fn new(state: DashboardState, config: &DashboardConfig) -> Self {
        Self {
            state,
            heading: config.heading.clone(),
            pie_height: config.pie_height,
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counters ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.heading);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("selector_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: launch table (optional) ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("launch_table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    table::launch_table(ui, &self.state);
                });
        }

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::pie_chart(ui, &self.state, self.pie_height);
            ui.separator();
            plot::scatter_chart(ui, &self.state);
        });
    }
}
