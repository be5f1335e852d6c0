use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, Points, Polygon, Text};

use crate::data::view::{pie_title, scatter_title, PieSlice};
use crate::state::DashboardState;

const NO_MATCH: &str = "No launches match the current selection";
const NO_SUCCESS: &str = "No successful launches for this selection";

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Angular extent of one pie slice, in radians on the unit circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub value: u64,
    pub share: f64,
    pub start: f64,
    pub end: f64,
}

/// Lay slices out clockwise from twelve o'clock. Empty when nothing is counted.
pub fn pie_wedges(slices: &[PieSlice]) -> Vec<Wedge> {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = FRAC_PI_2;
    slices
        .iter()
        .map(|s| {
            let share = s.value as f64 / total as f64;
            let start = angle;
            angle -= share * TAU;
            Wedge {
                label: s.label.clone(),
                value: s.value,
                share,
                start,
                end: angle,
            }
        })
        .collect()
}

impl Wedge {
    /// Outline of the wedge split into convex pieces of at most a quarter turn,
    /// since plot polygons are filled as convex shapes.
    pub fn pieces(&self) -> Vec<Vec<[f64; 2]>> {
        let sweep = self.start - self.end;
        if sweep <= 0.0 {
            return Vec::new();
        }
        // Tolerance keeps an exact quarter turn from rounding up to an extra piece.
        let n_pieces = ((sweep / FRAC_PI_2) - 1e-9).ceil().max(1.0) as usize;
        let piece_sweep = sweep / n_pieces as f64;
        let steps_per_piece = ((piece_sweep.to_degrees() / 3.0).ceil() as usize).max(1);

        (0..n_pieces)
            .map(|p| {
                let a0 = self.start - p as f64 * piece_sweep;
                let mut outline = Vec::with_capacity(steps_per_piece + 2);
                outline.push([0.0, 0.0]);
                for k in 0..=steps_per_piece {
                    let a = a0 - piece_sweep * k as f64 / steps_per_piece as f64;
                    outline.push([a.cos(), a.sin()]);
                }
                outline
            })
            .collect()
    }

    /// Anchor for the value label, inside the wedge.
    pub fn label_anchor(&self) -> [f64; 2] {
        let mid = (self.start + self.end) / 2.0;
        [0.65 * mid.cos(), 0.65 * mid.sin()]
    }
}

// ---------------------------------------------------------------------------
// Success pie (upper central panel)
// ---------------------------------------------------------------------------

/// Hint shown above a pie with nothing to draw.
fn pie_caption(slices: &[PieSlice]) -> Option<&'static str> {
    if slices.is_empty() {
        Some(NO_MATCH)
    } else if slices.iter().all(|s| s.value == 0) {
        Some(NO_SUCCESS)
    } else {
        None
    }
}

pub fn pie_chart(ui: &mut Ui, state: &DashboardState, height: f32) {
    ui.heading(pie_title(&state.selected_site));

    if let Some(caption) = pie_caption(&state.pie_slices) {
        ui.label(RichText::new(caption).italics());
    }
    let wedges = pie_wedges(&state.pie_slices);

    ui.horizontal(|ui: &mut Ui| {
        Plot::new("success_pie")
            .height(height)
            .width(height * 1.4)
            .data_aspect(1.0)
            .legend(Legend::default())
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-1.1)
            .include_x(1.1)
            .include_y(-1.1)
            .include_y(1.1)
            .show(ui, |plot_ui| {
                for wedge in &wedges {
                    let color = state.slice_colors.color_for(&wedge.label);
                    for piece in wedge.pieces() {
                        plot_ui.polygon(
                            Polygon::new(piece)
                                .name(&wedge.label)
                                .fill_color(color)
                                .stroke(Stroke::new(1.0, Color32::WHITE)),
                        );
                    }
                    if wedge.share >= 0.03 {
                        let [x, y] = wedge.label_anchor();
                        plot_ui.text(Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(format!("{} ({:.1}%)", wedge.value, wedge.share * 100.0))
                                .color(Color32::BLACK),
                        ));
                    }
                }
            });

        // Slice values, including the zero-valued ones the pie cannot draw.
        ui.vertical(|ui: &mut Ui| {
            for slice in &state.pie_slices {
                let color = state.slice_colors.color_for(&slice.label);
                ui.label(RichText::new(format!("■ {}: {}", slice.label, slice.value)).color(color));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Payload vs outcome scatter (lower central panel)
// ---------------------------------------------------------------------------

pub fn scatter_chart(ui: &mut Ui, state: &DashboardState) {
    ui.heading(scatter_title(&state.selected_site));
    if state.scatter_points.is_empty() {
        ui.label(RichText::new(NO_MATCH).italics());
    }

    // One series per booster category so the legend doubles as a colour key.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &state.scatter_points {
        series
            .entry(p.booster_version_category.as_str())
            .or_default()
            .push([p.payload_mass_kg, f64::from(p.outcome.flag())]);
    }

    let (x_min, x_max) = state.slider_bounds;

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(x_min)
        .include_x(x_max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\nPayload: {:.0} kg\nclass: {:.0}", value.x, value.y)
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in series {
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: u64) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn wedges_cover_the_full_circle() {
        let wedges = pie_wedges(&[slice("A", 3), slice("B", 1), slice("C", 0)]);
        assert_eq!(wedges.len(), 3);
        assert!((wedges[0].share - 0.75).abs() < 1e-12);
        assert!((wedges[0].start - FRAC_PI_2).abs() < 1e-12);
        assert!((wedges[1].end - (FRAC_PI_2 - TAU)).abs() < 1e-9);
        assert_eq!(wedges[2].start, wedges[2].end);
        assert!(wedges[2].pieces().is_empty());
    }

    #[test]
    fn nothing_to_draw_without_counts() {
        assert!(pie_wedges(&[]).is_empty());
        assert!(pie_wedges(&[slice("A", 0), slice("B", 0)]).is_empty());
    }

    #[test]
    fn caption_tells_no_match_from_no_success() {
        assert_eq!(pie_caption(&[]), Some(NO_MATCH));
        assert_eq!(
            pie_caption(&[slice("A", 0), slice("B", 0)]),
            Some(NO_SUCCESS)
        );
        assert_eq!(pie_caption(&[slice("A", 0), slice("B", 2)]), None);
    }

    #[test]
    fn large_wedges_are_split_into_convex_pieces() {
        let wedges = pie_wedges(&[slice("A", 1)]);
        let pieces = wedges[0].pieces();
        assert_eq!(pieces.len(), 4);
        for piece in &pieces {
            assert_eq!(piece[0], [0.0, 0.0]);
            for p in &piece[1..] {
                let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
                assert!((r - 1.0).abs() < 1e-9);
            }
        }
        // the first piece starts at twelve o'clock
        let first = pieces[0][1];
        assert!(first[0].abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn label_anchor_sits_inside_the_wedge() {
        let wedges = pie_wedges(&[slice("A", 1), slice("B", 1)]);
        // A covers the right half, B the left half
        assert!(wedges[0].label_anchor()[0] > 0.5);
        assert!(wedges[1].label_anchor()[0] < -0.5);
    }
}
