//! Side panel UI: layer controls, overlay toggles, and legend text.
//!
//! The legend content mirrors the estate page: an NDVI gradient bar and a
//! plucking-readiness gradient with captions, plus a footnote about the
//! upstream analysis.

use crate::layers::LayerRegistry;
use crate::state::AppState;
use eframe::egui::{self, Color32, Pos2, Rect, RichText, ScrollArea, Sense, Vec2};

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState, registry: &LayerRegistry) {
    egui::SidePanel::right("side_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .max_width(360.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Tea Estate Health");
                ui.label(
                    RichText::new(
                        "Satellite-derived health layers for the estate, \
                         refreshed after each overpass.",
                    )
                    .size(12.0),
                );
                ui.separator();

                render_layers_section(ui, state, registry);
                ui.add_space(5.0);

                render_overlays_section(ui, state);
                ui.add_space(5.0);

                render_legend_section(ui);

                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Analysis is computed upstream from Sentinel-2 imagery; \
                         tiles are pre-rendered by the provider.",
                    )
                    .small()
                    .weak(),
                );
            });
        });
}

fn render_layers_section(ui: &mut egui::Ui, state: &mut AppState, registry: &LayerRegistry) {
    egui::CollapsingHeader::new(RichText::new("Layers").strong())
        .default_open(true)
        .show(ui, |ui| {
            for layer in registry.iter() {
                let selected = state.selection.active() == layer.id;
                if ui.selectable_label(selected, layer.label.as_str()).clicked() && !selected {
                    state.selection.select(registry, &layer.id);
                    state.status_message = format!("Layer: {}", layer.label);
                }
            }
        });
}

fn render_overlays_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Overlays").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.checkbox(&mut state.overlays.aoi, "Estate Boundary");
            ui.checkbox(&mut state.overlays.destination_mode, "Set Destination");

            if state.overlays.destination_mode {
                ui.label(
                    RichText::new("Click the map to get walking directions.")
                        .small()
                        .weak(),
                );
            }

            if let Some(ref url) = state.last_directions_url {
                ui.add_space(3.0);
                ui.label(RichText::new("Last directions:").small());
                ui.label(RichText::new(url).small().monospace());
            }
        });
}

fn render_legend_section(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new(RichText::new("Legend").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Mean NDVI").strong().size(13.0));
            draw_gradient_bar(ui, NDVI_STOPS);
            label_row(ui, "Bare / stressed", "Dense canopy");
            ui.label(
                RichText::new("Greener sections carry more photosynthetically active leaf.")
                    .small()
                    .weak(),
            );

            ui.add_space(6.0);

            ui.label(RichText::new("Plucking Readiness").strong().size(13.0));
            draw_gradient_bar(ui, PLUCK_STOPS);
            label_row(ui, "Too young", "Overdue");
            ui.label(
                RichText::new(
                    "Blue sections were plucked recently; red sections have flush \
                     past its prime.",
                )
                .small()
                .weak(),
            );
        });
}

fn label_row(ui: &mut egui::Ui, left: &str, right: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(left).size(10.0).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(right).size(10.0).weak());
        });
    });
}

/// NDVI ramp: brown through yellow to green.
const NDVI_STOPS: &[Color32] = &[
    Color32::from_rgb(101, 67, 33),
    Color32::from_rgb(250, 204, 21),
    Color32::from_rgb(22, 163, 74),
];

/// Plucking-readiness ramp: recently plucked (blue) through ready (green,
/// yellow) to overdue (red).
const PLUCK_STOPS: &[Color32] = &[
    Color32::from_rgb(30, 58, 138),
    Color32::from_rgb(2, 132, 199),
    Color32::from_rgb(34, 197, 94),
    Color32::from_rgb(250, 204, 21),
    Color32::from_rgb(234, 88, 12),
    Color32::from_rgb(185, 28, 28),
];

/// Paints a horizontal gradient bar across the available width.
fn draw_gradient_bar(ui: &mut egui::Ui, stops: &[Color32]) {
    let desired = Vec2::new(ui.available_width(), 14.0);
    let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
    let painter = ui.painter();

    let segments = 64;
    for i in 0..segments {
        let t0 = i as f32 / segments as f32;
        let t1 = (i + 1) as f32 / segments as f32;
        let segment = Rect::from_min_max(
            Pos2::new(rect.min.x + rect.width() * t0, rect.min.y),
            Pos2::new(rect.min.x + rect.width() * t1, rect.max.y),
        );
        painter.rect_filled(segment, 0.0, sample_stops(stops, (t0 + t1) * 0.5));
    }
}

/// Piecewise-linear interpolation over evenly spaced color stops.
fn sample_stops(stops: &[Color32], t: f32) -> Color32 {
    if stops.len() == 1 {
        return stops[0];
    }

    let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
    let index = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - index as f32;
    lerp_color(stops[index], stops[index + 1], frac)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stops_endpoints() {
        assert_eq!(sample_stops(NDVI_STOPS, 0.0), NDVI_STOPS[0]);
        assert_eq!(sample_stops(NDVI_STOPS, 1.0), NDVI_STOPS[2]);
    }

    #[test]
    fn test_sample_stops_midpoint() {
        // With three stops, t = 0.5 lands exactly on the middle stop
        assert_eq!(sample_stops(NDVI_STOPS, 0.5), NDVI_STOPS[1]);
    }

    #[test]
    fn test_sample_stops_clamps() {
        assert_eq!(sample_stops(PLUCK_STOPS, -1.0), PLUCK_STOPS[0]);
        assert_eq!(sample_stops(PLUCK_STOPS, 2.0), PLUCK_STOPS[5]);
    }

    #[test]
    fn test_lerp_color_blends_channels() {
        let mid = lerp_color(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
