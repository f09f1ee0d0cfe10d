use std::future::Future;
use std::sync::Arc;

use motorhub_db::store::{CatalogStore, StoreError};

use crate::config::ServerConfig;
use crate::error::AppResult;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Vehicle and part collections.
    pub store: CatalogStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: CatalogStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Await a single store call under the configured deadline.
    ///
    /// Expiry drops the in-flight call and surfaces as
    /// [`StoreError::TimedOut`]; nothing is retried.
    pub async fn store_call<T, F>(&self, call: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.config.store_timeout(), call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::TimedOut.into()),
        }
    }
}
