//! Shared application state for all routes.

use crate::logger::{Logger, TracingLogger};
use crate::store::BookmarkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub logger: Arc<dyn Logger>,
}

impl AppState {
    /// State with the default `tracing` logger.
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        AppState {
            store,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }
}
