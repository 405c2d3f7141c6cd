//! Estate boundary overlay (area of interest).

use geo_types::Coord;
use geojson::{GeoJson, Value};

/// Embedded boundary polygon.
const AOI_GEOJSON: &str = include_str!("../../assets/aoi.geojson");

/// Fixed boundary polygon drawn over the base map for reference.
pub struct AoiBoundary {
    /// Exterior ring, closed (first vertex repeated last).
    pub exterior: Vec<Coord<f64>>,
}

impl AoiBoundary {
    /// Parses the embedded boundary.
    pub fn from_embedded() -> Result<Self, String> {
        Self::from_geojson(AOI_GEOJSON)
    }

    /// Parses a boundary from GeoJSON text. Accepts a bare geometry, a
    /// feature, or the first geometry of a collection.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, String> {
        let geojson: GeoJson = geojson_str
            .parse()
            .map_err(|e| format!("Failed to parse AOI GeoJSON: {}", e))?;

        let geometry = match geojson {
            GeoJson::Geometry(g) => g,
            GeoJson::Feature(f) => f
                .geometry
                .ok_or_else(|| "AOI feature has no geometry".to_string())?,
            GeoJson::FeatureCollection(fc) => fc
                .features
                .into_iter()
                .find_map(|f| f.geometry)
                .ok_or_else(|| "AOI collection has no geometry".to_string())?,
        };

        match geometry.value {
            Value::Polygon(rings) => {
                let exterior: Vec<Coord<f64>> = rings
                    .first()
                    .map(|ring| ring.iter().map(|c| Coord { x: c[0], y: c[1] }).collect())
                    .unwrap_or_default();

                if exterior.len() < 4 {
                    return Err("AOI exterior ring is degenerate".to_string());
                }

                Ok(Self { exterior })
            }
            _ => Err("AOI geometry is not a polygon".to_string()),
        }
    }

    /// Mean of the exterior vertices; good enough to center the view.
    pub fn center(&self) -> Coord<f64> {
        // Skip the closing vertex so it isn't counted twice
        let open = &self.exterior[..self.exterior.len() - 1];
        let (sum_x, sum_y) = open
            .iter()
            .fold((0.0, 0.0), |(x, y), c| (x + c.x, y + c.y));
        let n = open.len() as f64;

        Coord {
            x: sum_x / n,
            y: sum_y / n,
        }
    }
}
