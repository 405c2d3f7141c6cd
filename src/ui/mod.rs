//! User interface rendering.
//!
//! Each panel is a free function taking the egui context and the state it
//! operates on.

mod canvas;
mod side_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;
