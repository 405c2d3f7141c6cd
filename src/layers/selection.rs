//! Active-layer selection.
//!
//! Exactly one layer is active at a time. The initial value is derived from
//! the page's `layer` query field; an explicit user toggle overrides it for
//! the remainder of the session. The active id always names a registry
//! member: anything unrecognized falls back to the default.

use log::debug;

use super::registry::LayerRegistry;

/// The single active-layer record for the session.
pub struct SelectionState {
    active: String,
}

impl SelectionState {
    /// Derives the initial selection from the raw query value, if any.
    ///
    /// Never fails: absent, empty, or unrecognized input means the registry
    /// default. The raw value is an explicit argument so this is testable
    /// without a browser environment.
    pub fn resolve_initial(registry: &LayerRegistry, raw: Option<&str>) -> Self {
        let active = match raw {
            Some(id) if registry.contains(id) => id.to_string(),
            Some(other) => {
                debug!("Unrecognized layer query value {:?}; using default", other);
                registry.default_id().to_string()
            }
            None => registry.default_id().to_string(),
        };

        Self { active }
    }

    /// The currently active layer id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switches the active layer. Unknown ids are rejected silently; the
    /// toggle controls are generated from the registry, so this path only
    /// sees free-form input in tests.
    pub fn select(&mut self, registry: &LayerRegistry, id: &str) -> bool {
        if !registry.contains(id) {
            debug!("Ignoring selection of unknown layer {:?}", id);
            return false;
        }

        self.active = id.to_string();
        true
    }

    /// Visibility of every registry layer, in registry order. Exactly one
    /// entry is shown.
    pub fn visibility<'a>(
        &'a self,
        registry: &'a LayerRegistry,
    ) -> impl Iterator<Item = (&'a str, bool)> {
        registry
            .iter()
            .map(move |layer| (layer.id.as_str(), layer.id == self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LayerRegistry {
        LayerRegistry::from_embedded().unwrap()
    }

    #[test]
    fn test_resolve_known_ids() {
        let registry = registry();
        for id in ["teaHealth", "meanNDVI", "rainfall"] {
            let selection = SelectionState::resolve_initial(&registry, Some(id));
            assert_eq!(selection.active(), id);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let registry = registry();
        for raw in [Some("bogus"), Some(""), None] {
            let selection = SelectionState::resolve_initial(&registry, raw);
            assert_eq!(selection.active(), "teaHealth");
        }
    }

    #[test]
    fn test_select_valid() {
        let registry = registry();
        let mut selection = SelectionState::resolve_initial(&registry, None);
        assert!(selection.select(&registry, "rainfall"));
        assert_eq!(selection.active(), "rainfall");
    }

    #[test]
    fn test_select_invalid_is_noop() {
        let registry = registry();
        let mut selection = SelectionState::resolve_initial(&registry, Some("meanNDVI"));
        assert!(!selection.select(&registry, "bogus"));
        assert_eq!(selection.active(), "meanNDVI");
    }

    #[test]
    fn test_toggle_sequence() {
        let registry = registry();
        let mut selection = SelectionState::resolve_initial(&registry, None);
        selection.select(&registry, "meanNDVI");
        selection.select(&registry, "rainfall");
        assert_eq!(selection.active(), "rainfall");
    }

    #[test]
    fn test_exactly_one_visible() {
        let registry = registry();
        let mut selection = SelectionState::resolve_initial(&registry, None);
        selection.select(&registry, "meanNDVI");

        let shown: Vec<&str> = selection
            .visibility(&registry)
            .filter(|(_, visible)| *visible)
            .map(|(id, _)| id)
            .collect();
        assert_eq!(shown, vec!["meanNDVI"]);
    }
}
