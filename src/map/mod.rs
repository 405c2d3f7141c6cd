//! Map surface plumbing: projection, boundary overlay, visibility composer,
//! and the directions helper.

mod aoi;
mod composer;
pub mod directions;
mod projection;
mod surface;

pub use aoi::AoiBoundary;
pub use composer::{RasterSurface, ViewComposer};
pub use projection::MapProjection;
pub use surface::MapCanvas;
