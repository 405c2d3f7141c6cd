//! Top bar UI: app title, geocoding search box, and status.

use crate::state::{AppState, Geocoder};
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, geocoder: &dyn Geocoder) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // App title
                ui.label(
                    RichText::new("Teafield Viewer")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                // Search box
                ui.label(RichText::new("Search:").size(12.0).color(Color32::GRAY));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.search.query)
                        .desired_width(180.0)
                        .hint_text("Place or landmark"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Go").clicked() || submitted {
                    run_search(state, geocoder);
                }

                if let Some(ref status) = state.search.status {
                    ui.label(RichText::new(status).size(12.0).color(Color32::GRAY));
                }

                ui.separator();

                // Status text
                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        });
}

/// Forwards the query to the geocoding collaborator and recenters on a hit.
fn run_search(state: &mut AppState, geocoder: &dyn Geocoder) {
    let query = state.search.query.trim().to_string();
    if query.is_empty() {
        return;
    }

    match geocoder.geocode(&query) {
        Some(coord) => {
            state.view.recenter(coord);
            state.search.status = Some(format!("Centered on \"{}\"", query));
        }
        None => {
            state.search.status = Some("No match".to_string());
        }
    }
}
