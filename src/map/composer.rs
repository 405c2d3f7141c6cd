//! Applies the active-layer selection to the rendering surface.

use log::debug;

use crate::layers::{LayerRegistry, SelectionState};

/// Rendering surface boundary.
///
/// The surface owns its one-time source/layer registration and reports
/// readiness once that setup has completed; visibility changes are only
/// valid afterwards.
pub trait RasterSurface {
    /// Whether source registration has completed.
    fn is_ready(&self) -> bool;

    /// Marks one layer shown or hidden.
    fn set_layer_visible(&mut self, id: &str, visible: bool);
}

/// Pushes layer visibility to the surface whenever the active layer changes.
#[derive(Default)]
pub struct ViewComposer {
    /// Last active id applied to the surface, if any.
    applied: Option<String>,
}

impl ViewComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syncs the surface with the selection.
    ///
    /// Does nothing until the surface is ready. Afterwards, whenever the
    /// active id differs from the last applied one, pushes the full
    /// visibility set in a single pass so the surface never settles with
    /// zero or multiple visible layers. Idempotent between changes.
    pub fn sync(
        &mut self,
        surface: &mut dyn RasterSurface,
        registry: &LayerRegistry,
        selection: &SelectionState,
    ) {
        if !surface.is_ready() {
            return;
        }

        if self.applied.as_deref() == Some(selection.active()) {
            return;
        }

        for (id, visible) in selection.visibility(registry) {
            surface.set_layer_visible(id, visible);
        }

        debug!("Applied layer visibility; active = {}", selection.active());
        self.applied = Some(selection.active().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface stub that records every visibility call.
    struct RecordingSurface {
        ready: bool,
        calls: Vec<(String, bool)>,
    }

    impl RecordingSurface {
        fn new(ready: bool) -> Self {
            Self {
                ready,
                calls: Vec::new(),
            }
        }

        fn shown(&self) -> Vec<&str> {
            // Last write per id wins
            let mut latest: Vec<(&str, bool)> = Vec::new();
            for (id, visible) in &self.calls {
                if let Some(entry) = latest.iter_mut().find(|(i, _)| *i == id.as_str()) {
                    entry.1 = *visible;
                } else {
                    latest.push((id.as_str(), *visible));
                }
            }
            latest
                .into_iter()
                .filter(|(_, visible)| *visible)
                .map(|(id, _)| id)
                .collect()
        }
    }

    impl RasterSurface for RecordingSurface {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn set_layer_visible(&mut self, id: &str, visible: bool) {
            self.calls.push((id.to_string(), visible));
        }
    }

    fn registry() -> LayerRegistry {
        LayerRegistry::from_embedded().unwrap()
    }

    #[test]
    fn test_no_calls_before_surface_ready() {
        let registry = registry();
        let selection = SelectionState::resolve_initial(&registry, None);
        let mut surface = RecordingSurface::new(false);
        let mut composer = ViewComposer::new();

        composer.sync(&mut surface, &registry, &selection);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_exactly_one_shown_after_ready() {
        let registry = registry();
        let selection = SelectionState::resolve_initial(&registry, Some("rainfall"));
        let mut surface = RecordingSurface::new(true);
        let mut composer = ViewComposer::new();

        composer.sync(&mut surface, &registry, &selection);
        assert_eq!(surface.calls.len(), 3);
        assert_eq!(surface.shown(), vec!["rainfall"]);
    }

    #[test]
    fn test_sync_is_idempotent_between_changes() {
        let registry = registry();
        let mut selection = SelectionState::resolve_initial(&registry, None);
        let mut surface = RecordingSurface::new(true);
        let mut composer = ViewComposer::new();

        composer.sync(&mut surface, &registry, &selection);
        let after_first = surface.calls.len();
        composer.sync(&mut surface, &registry, &selection);
        assert_eq!(surface.calls.len(), after_first);

        selection.select(&registry, "meanNDVI");
        composer.sync(&mut surface, &registry, &selection);
        assert_eq!(surface.calls.len(), after_first * 2);
        assert_eq!(surface.shown(), vec!["meanNDVI"]);
    }

    #[test]
    fn test_applies_once_surface_becomes_ready() {
        let registry = registry();
        let selection = SelectionState::resolve_initial(&registry, None);
        let mut surface = RecordingSurface::new(false);
        let mut composer = ViewComposer::new();

        composer.sync(&mut surface, &registry, &selection);
        assert!(surface.calls.is_empty());

        surface.ready = true;
        composer.sync(&mut surface, &registry, &selection);
        assert_eq!(surface.shown(), vec!["teaHealth"]);
    }
}
