//! Central canvas UI: the map area.
//!
//! Draws the estate boundary and destination marker over the raster surface
//! and handles pan/zoom plus destination clicks. The raster layer itself is
//! composited by the external rendering provider; here we show which source
//! is active and where its tiles come from.

use crate::layers::LayerRegistry;
use crate::map::{directions, AoiBoundary, MapCanvas, MapProjection};
use crate::state::AppState;
use eframe::egui::{self, Color32, Painter, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use geo_types::Coord;

pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    registry: &LayerRegistry,
    aoi: &AoiBoundary,
    canvas: &MapCanvas,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        // Allocate the full available space for the canvas
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());

        let rect = response.rect;

        // Draw background
        painter.rect_filled(rect, 0.0, Color32::from_rgb(22, 32, 26));

        let mut projection = MapProjection::new(state.view.center_lat, state.view.center_lon);
        projection.update(state.view.zoom, state.view.pan_offset, rect);

        if state.overlays.aoi {
            render_aoi(&painter, &projection, aoi);
        }

        if let Some(destination) = state.destination {
            render_destination_marker(&painter, &projection, destination);
        }

        draw_overlay_info(ui, &rect, state, registry, canvas);

        handle_canvas_interaction(&response, &rect, state, &projection);
    });
}

/// Draw the estate boundary: light fill plus outline.
fn render_aoi(painter: &Painter, projection: &MapProjection, aoi: &AoiBoundary) {
    let screen_points: Vec<Pos2> = aoi
        .exterior
        .iter()
        .map(|&coord| projection.geo_to_screen(coord))
        .collect();

    if screen_points.len() < 3 {
        return;
    }

    painter.add(egui::Shape::convex_polygon(
        screen_points.clone(),
        Color32::from_rgba_unmultiplied(80, 160, 90, 30),
        Stroke::NONE,
    ));

    for i in 0..screen_points.len() - 1 {
        painter.line_segment(
            [screen_points[i], screen_points[i + 1]],
            Stroke::new(2.0, Color32::from_rgb(120, 200, 130)),
        );
    }
}

/// Draw the walking-destination marker.
fn render_destination_marker(painter: &Painter, projection: &MapProjection, coord: Coord<f64>) {
    let pos = projection.geo_to_screen(coord);

    painter.circle_filled(pos, 6.0, Color32::from_rgb(230, 90, 70));
    painter.circle_stroke(pos, 6.0, Stroke::new(1.5, Color32::from_rgb(150, 50, 40)));
    painter.line_segment(
        [pos, pos + Vec2::new(0.0, -14.0)],
        Stroke::new(2.0, Color32::from_rgb(230, 90, 70)),
    );
}

fn draw_overlay_info(
    ui: &mut egui::Ui,
    rect: &Rect,
    state: &AppState,
    registry: &LayerRegistry,
    canvas: &MapCanvas,
) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(280.0, 70.0));

    let active = canvas
        .visible_layer()
        .and_then(|layer| registry.get(&layer.id));
    let active_label = active.map(|d| d.label.as_str()).unwrap_or("--");
    let source_host = active.map(|d| d.tile_host()).unwrap_or("--");

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Layer: {}", active_label))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 220, 200)),
            );
            ui.label(
                RichText::new(format!("Tiles: {}", source_host))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(160, 180, 170)),
            );

            if let Some(destination) = state.destination {
                ui.label(
                    RichText::new(format!(
                        "Dest:  {:.5}, {:.5}",
                        destination.y, destination.x
                    ))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(230, 160, 150)),
                );
            }

            if state.overlays.destination_mode {
                ui.label(
                    RichText::new("Click to set destination")
                        .size(11.0)
                        .color(Color32::from_rgb(170, 170, 150)),
                );
            }
        });
    });
}

fn handle_canvas_interaction(
    response: &egui::Response,
    rect: &Rect,
    state: &mut AppState,
    projection: &MapProjection,
) {
    // Destination click takes priority over other click handling
    if state.overlays.destination_mode && response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let coord = projection.screen_to_geo(pos);
            state.destination = Some(coord);

            let url = directions::walking_directions_url(coord.y, coord.x);
            directions::open_in_new_tab(&url);
            state.status_message = format!("Destination set at {:.5}, {:.5}", coord.y, coord.x);
            state.last_directions_url = Some(url);
        }
    }

    // Handle dragging for panning
    if response.dragged() {
        state.view.pan_offset += response.drag_delta();
    }

    // Handle scroll for zooming relative to cursor position
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let zoom_factor = 1.0 + scroll_delta.y * 0.001;
            let old_zoom = state.view.zoom;
            let new_zoom = (old_zoom * zoom_factor).clamp(0.1, 10.0);

            // Adjust pan offset to keep the point under cursor stationary
            if let Some(cursor_pos) = response.hover_pos() {
                let cursor_rel = cursor_pos - rect.center();
                let ratio = new_zoom / old_zoom;
                state.view.pan_offset =
                    cursor_rel * (1.0 - ratio) + state.view.pan_offset * ratio;
            }

            state.view.zoom = new_zoom;
        }
    }

    // Reset view on double-click
    if response.double_clicked() {
        state.view.zoom = 1.0;
        state.view.pan_offset = Vec2::ZERO;
    }
}
