//! The egui-backed rendering surface.
//!
//! Holds the registered raster sources and their visibility flags. The
//! canvas UI reads the visible layer to draw its caption and attribution;
//! tile fetching and compositing belong to the upstream rendering provider.

use log::info;

use crate::layers::LayerRegistry;
use crate::map::composer::RasterSurface;

/// One registered raster source on the surface.
pub struct SurfaceLayer {
    pub id: String,
    pub visible: bool,
}

/// Raster surface backing the central map canvas.
#[derive(Default)]
pub struct MapCanvas {
    layers: Vec<SurfaceLayer>,
    ready: bool,
}

impl MapCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time source registration. Readiness flips true exactly once;
    /// repeat calls are ignored.
    pub fn register_sources(&mut self, registry: &LayerRegistry) {
        if self.ready {
            return;
        }

        self.layers = registry
            .iter()
            .map(|descriptor| SurfaceLayer {
                id: descriptor.id.clone(),
                visible: false,
            })
            .collect();
        self.ready = true;

        info!("Registered {} raster sources", self.layers.len());
    }

    /// The layer currently marked visible, if registration has happened.
    pub fn visible_layer(&self) -> Option<&SurfaceLayer> {
        self.layers.iter().find(|layer| layer.visible)
    }
}

impl RasterSurface for MapCanvas {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_layer_visible(&mut self, id: &str, visible: bool) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.id == id) {
            layer.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_happens_once() {
        let registry = LayerRegistry::from_embedded().unwrap();
        let mut canvas = MapCanvas::new();
        assert!(!canvas.is_ready());

        canvas.register_sources(&registry);
        assert!(canvas.is_ready());

        canvas.set_layer_visible("rainfall", true);
        canvas.register_sources(&registry);
        assert_eq!(canvas.visible_layer().unwrap().id, "rainfall");
    }

    #[test]
    fn test_unknown_id_ignored() {
        let registry = LayerRegistry::from_embedded().unwrap();
        let mut canvas = MapCanvas::new();
        canvas.register_sources(&registry);

        canvas.set_layer_visible("bogus", true);
        assert!(canvas.visible_layer().is_none());
    }
}
