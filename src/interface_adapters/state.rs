use crate::domain::{QueryProcessor, SearchIndex};
use crate::use_cases::Passthrough;
use std::sync::Arc;

// Shared, read-only application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Processing step behind every echo endpoint.
    pub processor: Arc<dyn QueryProcessor>,
    // Search service, present only when one is configured.
    pub search: Option<Arc<dyn SearchIndex>>,
}

impl AppState {
    pub fn new(processor: Arc<dyn QueryProcessor>) -> Self {
        Self {
            processor,
            search: None,
        }
    }

    pub fn with_search(mut self, search: Arc<dyn SearchIndex>) -> Self {
        self.search = Some(search);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Passthrough))
    }
}
