//! Map projection and coordinate transformation.
//!
//! Converts between geographic coordinates (lat/lon) and screen coordinates
//! for the canvas. Only used to place the boundary overlay and the
//! destination marker and to translate pointer clicks back to lon/lat; tile
//! projection math lives upstream.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Projection for converting geographic to screen coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Center latitude of the view.
    pub center_lat: f64,
    /// Center longitude of the view.
    pub center_lon: f64,
    /// Visible range in degrees at zoom 1.0.
    pub range_deg: f64,
    /// Current zoom level.
    pub zoom: f32,
    /// Pan offset in screen pixels.
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas.
    pub screen_rect: Rect,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            // Estate-scale view; the app recenters on the AOI at startup.
            center_lat: 6.87,
            center_lon: 81.05,
            // ~3km span
            range_deg: 0.03,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl MapProjection {
    /// Creates a new projection centered on the given point.
    pub fn new(center_lat: f64, center_lon: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            ..Default::default()
        }
    }

    /// Updates the projection with current view state.
    pub fn update(&mut self, zoom: f32, pan_offset: Vec2, screen_rect: Rect) {
        self.zoom = zoom;
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    ///
    /// Simple equirectangular projection, adequate for the few-kilometer
    /// span of a single estate.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let lon = coord.x;
        let lat = coord.y;

        let effective_range = self.range_deg / self.zoom as f64;

        let rel_lon = lon - self.center_lon;
        let rel_lat = lat - self.center_lat;

        // Latitude correction for longitude spacing
        let lat_correction = (self.center_lat.to_radians()).cos();
        let corrected_lon = rel_lon * lat_correction;

        let norm_x = corrected_lon / effective_range;
        let norm_y = -rel_lat / effective_range; // Screen Y increases downward

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        Pos2::new(
            center.x + (norm_x as f32) * half_size,
            center.y + (norm_y as f32) * half_size,
        )
    }

    /// Converts screen position to geographic coordinates (lon, lat).
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let effective_range = self.range_deg / self.zoom as f64;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        let norm_x = (pos.x - center.x) / half_size;
        let norm_y = (pos.y - center.y) / half_size;

        let lat_correction = (self.center_lat.to_radians()).cos();
        let rel_lon = (norm_x as f64) * effective_range / lat_correction;
        let rel_lat = -(norm_y as f64) * effective_range;

        Coord {
            x: self.center_lon + rel_lon,
            y: self.center_lat + rel_lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_screen_center() {
        let projection = MapProjection::new(6.8705, 81.0499);
        let pos = projection.geo_to_screen(Coord {
            x: 81.0499,
            y: 6.8705,
        });
        let center = projection.screen_rect.center();
        assert!((pos.x - center.x).abs() < 0.01);
        assert!((pos.y - center.y).abs() < 0.01);
    }

    #[test]
    fn test_click_translation_inverts_projection() {
        let projection = MapProjection::new(6.8705, 81.0499);
        let coord = projection.screen_to_geo(Pos2::new(500.0, 250.0));
        let back = projection.geo_to_screen(coord);
        assert!((back.x - 500.0).abs() < 0.01);
        assert!((back.y - 250.0).abs() < 0.01);
    }
}
