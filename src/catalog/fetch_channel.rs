//! Async fetch pipeline for catalog pages.
//!
//! Uses channel-based communication to bridge async fetches
//! with egui's synchronous update loop. Fetch tasks own no state;
//! completions are applied to `AppState` on the UI thread.

use super::client::{ArticClient, CatalogClient};
use super::error::{BulkFetchError, FetchError};
use super::types::ArtworkPage;
use crate::state::{fetch_first_n, BulkFetch, PageRequest};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Completion of a fetch task.
#[derive(Debug)]
pub enum FetchOutcome {
    /// A single page load finished.
    Page {
        request: PageRequest,
        result: Result<ArtworkPage, FetchError>,
        latency_ms: f64,
    },
    /// A "first N records" batch finished.
    Bulk {
        count: usize,
        result: Result<BulkFetch, BulkFetchError>,
        latency_ms: f64,
    },
}

/// Channel-based fetcher for the remote catalog.
///
/// Fetches are async but egui's update() is synchronous.
/// This struct provides a channel to pass results from the async
/// fetch task back to the UI thread.
pub struct FetchChannel {
    client: ArticClient,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl FetchChannel {
    #[cfg(target_arch = "wasm32")]
    pub fn new(client: ArticClient) -> std::io::Result<Self> {
        let (sender, receiver) = channel();
        Ok(Self {
            client,
            sender,
            receiver,
        })
    }

    /// Native fetches run on a Tokio runtime (reqwest needs its reactor).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(client: ArticClient) -> std::io::Result<Self> {
        let (sender, receiver) = channel();
        Ok(Self {
            client,
            sender,
            receiver,
            runtime: tokio::runtime::Runtime::new()?,
        })
    }

    /// Spawns an async fetch of the page described by `request`.
    ///
    /// On native the future is built on the worker thread, so it
    /// does not need to be `Send`.
    pub fn load_page(&self, ctx: egui::Context, request: PageRequest) {
        let sender = self.sender.clone();
        let client = self.client.clone();

        let task = move || async move {
            let started = web_time::Instant::now();
            let result = client.fetch_page(request.page).await;
            let outcome = FetchOutcome::Page {
                request,
                result,
                latency_ms: started.elapsed().as_secs_f64() * 1000.0,
            };
            let _ = sender.send(outcome);
            ctx.request_repaint();
        };

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task());

        #[cfg(not(target_arch = "wasm32"))]
        {
            let handle = self.runtime.handle().clone();
            std::thread::spawn(move || handle.block_on(task()));
        }
    }

    /// Spawns an async fetch of the first `count` records across pages.
    pub fn load_first_n(&self, ctx: egui::Context, count: usize) {
        let sender = self.sender.clone();
        let client = self.client.clone();

        let task = move || async move {
            let started = web_time::Instant::now();
            let result = fetch_first_n(&client, count).await;
            let outcome = FetchOutcome::Bulk {
                count,
                result,
                latency_ms: started.elapsed().as_secs_f64() * 1000.0,
            };
            let _ = sender.send(outcome);
            ctx.request_repaint();
        };

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task());

        #[cfg(not(target_arch = "wasm32"))]
        {
            let handle = self.runtime.handle().clone();
            std::thread::spawn(move || handle.block_on(task()));
        }
    }

    /// Non-blocking check for a completed fetch.
    ///
    /// Returns Some(outcome) if a fetch completed,
    /// None if no result is ready yet.
    pub fn try_recv(&self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }
}
