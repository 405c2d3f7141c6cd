//! The fixed catalog of raster layers served by the upstream analysis service.
//!
//! The catalog is embedded at build time and parsed once at startup. There is
//! no dynamic registration; the set of layers is immutable for the life of
//! the session and the first entry is the designated default.

use serde::Deserialize;

/// One raster layer available for display.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerDescriptor {
    /// Unique identifier; also the value recognized in the `layer` query field.
    pub id: String,

    /// Human-readable name shown in the layer controls.
    pub label: String,

    /// Tile URL template with `{z}`, `{x}`, and `{y}` placeholders. Opaque to
    /// this app; consumed as-is by the rendering surface.
    pub tile_url: String,
}

impl LayerDescriptor {
    /// Host portion of the tile source, for attribution display.
    pub fn tile_host(&self) -> &str {
        let rest = self
            .tile_url
            .split_once("://")
            .map_or(self.tile_url.as_str(), |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }
}

/// Ordered, immutable set of available layers.
pub struct LayerRegistry {
    layers: Vec<LayerDescriptor>,
}

/// Embedded layer catalog.
const LAYER_CATALOG: &str = include_str!("../../assets/layers.json");

impl LayerRegistry {
    /// Parses the embedded catalog. An invalid catalog is a build mistake and
    /// surfaces as a startup error rather than a panic.
    pub fn from_embedded() -> Result<Self, String> {
        Self::from_json(LAYER_CATALOG)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let layers: Vec<LayerDescriptor> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse layer catalog: {}", e))?;

        if layers.is_empty() {
            return Err("Layer catalog is empty".to_string());
        }

        for (index, layer) in layers.iter().enumerate() {
            if layers[..index].iter().any(|other| other.id == layer.id) {
                return Err(format!("Duplicate layer id in catalog: {}", layer.id));
            }
        }

        Ok(Self { layers })
    }

    /// Identifier used when the query input is absent or unrecognized.
    pub fn default_id(&self) -> &str {
        &self.layers[0].id
    }

    /// Looks up a layer by id.
    pub fn get(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Whether `id` names a catalog member.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates the catalog in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let registry = LayerRegistry::from_embedded().unwrap();
        let ids: Vec<&str> = registry.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["teaHealth", "meanNDVI", "rainfall"]);
        assert_eq!(registry.default_id(), "teaHealth");
    }

    #[test]
    fn test_lookup() {
        let registry = LayerRegistry::from_embedded().unwrap();
        assert!(registry.contains("rainfall"));
        assert!(!registry.contains("bogus"));
        assert_eq!(registry.get("meanNDVI").unwrap().label, "Mean NDVI");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(LayerRegistry::from_json("[]").is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "a", "label": "A", "tile_url": "https://tiles/a/{z}/{x}/{y}"},
            {"id": "a", "label": "A again", "tile_url": "https://tiles/b/{z}/{x}/{y}"}
        ]"#;
        assert!(LayerRegistry::from_json(json).is_err());
    }

    #[test]
    fn test_tile_host() {
        let layer = LayerDescriptor {
            id: "a".to_string(),
            label: "A".to_string(),
            tile_url: "https://tiles.example.com/a/{z}/{x}/{y}".to_string(),
        };
        assert_eq!(layer.tile_host(), "tiles.example.com");
    }
}
