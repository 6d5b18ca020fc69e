use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::data::FetchMarketSeries;

use super::messages::{FetchRequest, FetchResult};

/// Runs market fetches off the UI thread. Each request is independent; the
/// result channel carries completions back in whatever order they finish.
pub fn spawn_worker_thread(
    source: Arc<dyn FetchMarketSeries>,
    rx: Receiver<FetchRequest>,
    tx: Sender<FetchResult>,
) {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            let result = source.fetch_series(&req.market).map_err(|e| e.to_string());

            // Receiver gone means the engine is shutting down.
            if tx
                .send(FetchResult {
                    market: req.market,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    });
}
