//! Application state management.
//!
//! State is organized into logical groupings that correspond to different
//! areas of functionality. All mutation happens on the main event thread,
//! inside the egui update loop.

mod search;
pub mod url_state;

pub use search::{Geocoder, NoopGeocoder, SearchState};

use eframe::egui::Vec2;
use geo_types::Coord;

use crate::layers::{LayerRegistry, SelectionState};
use crate::map::AoiBoundary;
use crate::state::url_state::UrlParams;

/// Map view controls (zoom/pan/center).
pub struct MapViewState {
    /// Current zoom level (1.0 = 100%)
    pub zoom: f32,

    /// Current pan offset from center
    pub pan_offset: Vec2,

    /// Geographic center latitude
    pub center_lat: f64,

    /// Geographic center longitude
    pub center_lon: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            center_lat: 6.87,
            center_lon: 81.05,
        }
    }
}

impl MapViewState {
    /// Recenters the view on a geographic point and resets pan.
    pub fn recenter(&mut self, coord: Coord<f64>) {
        self.center_lat = coord.y;
        self.center_lon = coord.x;
        self.pan_offset = Vec2::ZERO;
    }
}

/// Reference-overlay toggles.
pub struct OverlayState {
    /// Show the estate boundary polygon
    pub aoi: bool,

    /// Clicking the map sets the walking destination
    pub destination_mode: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            aoi: true,
            destination_mode: false,
        }
    }
}

/// Root application state containing all sub-states.
pub struct AppState {
    /// Active-layer selection
    pub selection: SelectionState,

    /// Map view controls
    pub view: MapViewState,

    /// Reference-overlay toggles
    pub overlays: OverlayState,

    /// Geocoding search box state
    pub search: SearchState,

    /// Destination marker set by a map click, if any
    pub destination: Option<Coord<f64>>,

    /// Last directions URL produced; shown in the side panel on native
    pub last_directions_url: Option<String>,

    /// Application status message displayed in the top bar
    pub status_message: String,
}

impl AppState {
    /// Builds the session state: selection resolved from the query input,
    /// view centered on the estate boundary.
    pub fn new(registry: &LayerRegistry, aoi: &AoiBoundary, params: &UrlParams) -> Self {
        let selection = SelectionState::resolve_initial(registry, params.layer.as_deref());

        let mut view = MapViewState::default();
        view.recenter(aoi.center());

        Self {
            selection,
            view,
            overlays: OverlayState::default(),
            search: SearchState::default(),
            destination: None,
            last_directions_url: None,
            status_message: "Ready".to_string(),
        }
    }
}
