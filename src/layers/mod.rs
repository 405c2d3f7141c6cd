//! Layer catalog and active-layer selection.

mod registry;
mod selection;

pub use registry::{LayerDescriptor, LayerRegistry};
pub use selection::SelectionState;
