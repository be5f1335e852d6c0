use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::DashboardState;

/// Launches currently shown in the scatter, one per row.
pub fn launch_table(ui: &mut Ui, state: &DashboardState) {
    let points = &state.scatter_points;
    let row_height = ui.text_style_height(&eframe::egui::TextStyle::Body);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload (kg)",
                "class",
                "Booster Version",
                "Category",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, points.len(), |mut row| {
                let p = &points[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(p.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&p.launch_site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.0}", p.payload_mass_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(p.outcome.flag().to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(p.booster_version.as_deref().unwrap_or("-"));
                });
                row.col(|ui: &mut Ui| {
                    let color = state.booster_colors.color_for(&p.booster_version_category);
                    ui.label(RichText::new(&p.booster_version_category).color(color));
                });
            });
        });
}
