//! HTTP client for the paged artworks API.
//!
//! Uses the browser's `fetch` on WASM and reqwest on native builds.

use super::config::CatalogConfig;
use super::error::FetchError;
use super::types::ArtworkPage;
use std::future::Future;

/// Paged-fetch capability of the remote catalog.
///
/// Note: no `Send` bound on the returned future, since WASM is
/// single-threaded and the browser fetch future holds JS values.
pub trait CatalogClient {
    /// Fetches one 1-indexed page of records.
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<ArtworkPage, FetchError>>;
}

/// Client for the Art Institute of Chicago artworks endpoint.
#[derive(Clone)]
pub struct ArticClient {
    config: CatalogConfig,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl ArticClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

impl CatalogClient for ArticClient {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError> {
        let url = self.config.page_url(page);
        log::debug!("GET {}", url);

        #[cfg(target_arch = "wasm32")]
        let result = fetch_page_web(&url).await;
        #[cfg(not(target_arch = "wasm32"))]
        let result = fetch_page_native(&self.http, &url).await;

        if let Err(ref e) = result {
            log::error!("Error fetching artworks page {}: {}", page, e);
        }
        result
    }
}

/// Performs the request through `window.fetch`.
#[cfg(target_arch = "wasm32")]
async fn fetch_page_web(url: &str) -> Result<ArtworkPage, FetchError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_error(value: JsValue) -> FetchError {
        FetchError::Transport(format!("{:?}", value))
    }

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::Transport("No window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Decode("Expected text body".to_string()))?;

    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Performs the request with reqwest. Must run inside a Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_page_native(http: &reqwest::Client, url: &str) -> Result<ArtworkPage, FetchError> {
    let response = http
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .json::<ArtworkPage>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
