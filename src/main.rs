#![warn(clippy::all)]

//! Artwork Browser - A web-based catalog browser with cross-page selection.
//!
//! This application pages through the Art Institute of Chicago artworks
//! catalog, caches every record it sees for the session, and keeps a
//! selection of artworks that survives paging. Rows can be selected one at
//! a time, a page at a time, or as "the first N rows" across pages.

mod catalog;
mod state;
mod ui;

use catalog::{ArticClient, CatalogConfig, FetchChannel, FetchOutcome};
use eframe::egui;
use state::AppState;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Artwork Browser",
        native_options,
        Box::new(|cc| Ok(Box::new(ArtworkBrowserApp::new(cc)?))),
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
                Box::new(|cc| Ok(Box::new(ArtworkBrowserApp::new(cc)?))),
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
pub struct ArtworkBrowserApp {
    /// Session state: catalog, cache, and selection
    state: AppState,

    /// Channel for async catalog fetches
    fetch_channel: FetchChannel,

    /// Page most recently written to the URL
    last_pushed_page: Option<u32>,
}

impl ArtworkBrowserApp {
    /// Creates a new ArtworkBrowserApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> std::io::Result<Self> {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply URL parameters (page)
        let url_params = state::url_state::parse_from_url();
        let initial_page = url_params.page.unwrap_or(1);

        let client = ArticClient::new(CatalogConfig::from_env());
        log::info!(
            "Browsing catalog at {} (starting on page {})",
            client.config().base_url,
            initial_page
        );

        Ok(Self {
            state: AppState::with_initial_page(initial_page),
            fetch_channel: FetchChannel::new(client)?,
            last_pushed_page: Some(initial_page),
        })
    }

    /// Issues fetches for requests the UI recorded during the last frame.
    fn dispatch_requests(&mut self, ctx: &egui::Context) {
        if let Some(page) = self.state.take_page_change() {
            let request = self.state.paginator.begin_page_load(page);
            self.fetch_channel.load_page(ctx.clone(), request);
        }

        if let Some(count) = self.state.bulk.take_pending() {
            self.fetch_channel.load_first_n(ctx.clone(), count);
        }
    }

    fn handle_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Page {
                request,
                result,
                latency_ms,
            } => {
                let status = self.state.complete_page_load(request, result, latency_ms);
                log::debug!(
                    "Page {} completion: {:?} ({:.0}ms)",
                    request.page,
                    status,
                    latency_ms
                );
            }
            FetchOutcome::Bulk {
                count,
                result,
                latency_ms,
            } => {
                if self.state.complete_bulk_select(result, latency_ms) {
                    log::debug!("Bulk select of {} finished in {:.0}ms", count, latency_ms);
                }
            }
        }
    }
}

impl eframe::App for ArtworkBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_requests(ctx);

        // Check for completed fetches
        while let Some(outcome) = self.fetch_channel.try_recv() {
            self.handle_fetch_outcome(outcome);
        }

        // Push current page to URL once a page change has settled
        let page = self.state.current_page();
        if !self.state.loading() && self.last_pushed_page != Some(page) {
            self.last_pushed_page = Some(page);
            state::url_state::push_to_url(page);
        }

        // Render UI panels in the correct order for egui layout
        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.state);
        ui::render_bottom_panel(ctx, &mut self.state);
        ui::render_selection_panel(ctx, &mut self.state);
        ui::render_bulk_select_window(ctx, &mut self.state);
        ui::render_artwork_table(ctx, &mut self.state);

        // Requests recorded this frame are dispatched on the next one
        if self.state.page_change_requested.is_some() || self.state.bulk.has_pending() {
            ctx.request_repaint();
        }
    }
}
