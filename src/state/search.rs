//! Geocoding search box state.

use geo_types::Coord;

/// External geocoding collaborator. The lookup service lives upstream; the
/// viewer only forwards the query and recenters the map on a hit.
pub trait Geocoder {
    /// Resolves a free-form place query to a (lon, lat) point, if known.
    fn geocode(&self, query: &str) -> Option<Coord<f64>>;
}

/// Placeholder geocoder used until a provider is wired in; every lookup
/// misses.
#[derive(Default)]
pub struct NoopGeocoder;

impl Geocoder for NoopGeocoder {
    fn geocode(&self, _query: &str) -> Option<Coord<f64>> {
        None
    }
}

/// State for the top-bar search box.
#[derive(Default)]
pub struct SearchState {
    /// Current text in the search field
    pub query: String,

    /// Outcome of the last lookup, shown next to the field
    pub status: Option<String>,
}
