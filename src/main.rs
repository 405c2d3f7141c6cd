#![warn(clippy::all)]

//! Teafield Viewer - a web-based tea estate health map.
//!
//! Displays satellite-derived raster health layers (plucking readiness, mean
//! NDVI, rainfall) over a base map, with a legend side panel, layer toggle
//! controls, a geocoding search box, and a click-to-set-destination
//! directions helper. All imagery analysis happens upstream; this app is
//! presentation only.

mod layers;
mod map;
mod state;
mod ui;

use eframe::egui;
use layers::LayerRegistry;
use map::{AoiBoundary, MapCanvas, ViewComposer};
use state::url_state;
use state::{AppState, Geocoder, NoopGeocoder};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Teafield Viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)?))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)?))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct ViewerApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Fixed catalog of raster layers
    registry: LayerRegistry,

    /// Estate boundary overlay
    aoi: AoiBoundary,

    /// The rendering surface for raster layers
    canvas: MapCanvas,

    /// Applies the active selection to the surface
    composer: ViewComposer,

    /// Geocoding collaborator for the search box
    geocoder: Box<dyn Geocoder>,

    /// Whether one-time canvas source registration has run
    initialized: bool,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, String> {
        let registry = LayerRegistry::from_embedded()?;
        let aoi = AoiBoundary::from_embedded()?;

        let params = url_state::parse_from_url();
        let state = AppState::new(&registry, &aoi, &params);

        log::info!(
            "Starting with layer {} ({} available)",
            state.selection.active(),
            registry.iter().count()
        );

        Ok(Self {
            state,
            registry,
            aoi,
            canvas: MapCanvas::new(),
            composer: ViewComposer::new(),
            geocoder: Box::new(NoopGeocoder),
            initialized: false,
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One-time surface setup, behind an explicit flag. Visibility is only
        // pushed once the surface reports ready.
        if !self.initialized {
            self.canvas.register_sources(&self.registry);
            self.initialized = true;
        }

        let active_before = self.state.selection.active().to_string();

        ui::render_top_bar(ctx, &mut self.state, self.geocoder.as_ref());
        ui::render_side_panel(ctx, &mut self.state, &self.registry);
        ui::render_canvas(ctx, &mut self.state, &self.registry, &self.aoi, &self.canvas);

        self.composer
            .sync(&mut self.canvas, &self.registry, &self.state.selection);

        if self.state.selection.active() != active_before {
            url_state::push_to_url(self.state.selection.active());
        }
    }
}
