use std::path::PathBuf;

use eframe::egui::{self, RichText, Slider, TextEdit, Ui};

use crate::data::filter::{PayloadRange, SiteSelector};
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – selectors
// ---------------------------------------------------------------------------

/// Render the site dropdown and payload range controls.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Launch Site");
    ui.separator();

    // ---- Searchable site dropdown ----
    let mut chosen: Option<SiteSelector> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selected_site.to_string())
        .width(ui.available_width())
        // Clicks in the search field must not close the popup.
        .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(TextEdit::singleline(&mut state.site_search).hint_text("Select a Launch Site"));
            for opt in state.visible_site_options() {
                if ui
                    .selectable_label(state.selected_site == opt.value, &opt.label)
                    .clicked()
                {
                    chosen = Some(opt.value.clone());
                    ui.memory_mut(|m| m.close_popup());
                }
            }
        });
    if let Some(site) = chosen {
        state.choose_site(site);
    }

    ui.add_space(12.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let (min, max) = state.slider_bounds;
    let mut lo = state.payload_range.lo;
    let mut hi = state.payload_range.hi;

    let lo_changed = ui
        .add(Slider::new(&mut lo, min..=max).step_by(state.slider_step).text("from"))
        .changed();
    let hi_changed = ui
        .add(Slider::new(&mut hi, min..=max).step_by(state.slider_step).text("to"))
        .changed();

    if lo_changed || hi_changed {
        // Dragging one handle past the other pushes it along.
        if lo_changed && lo > hi {
            hi = lo;
        }
        if hi_changed && hi < lo {
            lo = hi;
        }
        let site = state.selected_site.clone();
        state.on_site_or_range_changed(site, PayloadRange::new(lo, hi));
    }
    ui.label(RichText::new(state.payload_range.to_string()).weak());

    ui.add_space(12.0);
    ui.separator();

    if ui.button("Reset").clicked() {
        state.reset_selection();
    }
    ui.checkbox(&mut state.show_table, "Show launch table");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset counters.
pub fn top_bar(ui: &mut Ui, state: &DashboardState, heading: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(heading);
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in scatter",
            state.dataset.len(),
            state.scatter_points.len()
        ));
        ui.separator();
        let file_name = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| state.source.display().to_string());
        ui.label(RichText::new(file_name).weak());
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask the user for the launch table when the default file is not present.
pub fn pick_dataset_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}
