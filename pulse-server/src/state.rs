use std::sync::Arc;

use crate::generator::Dataset;

/// Shared handler state; the dataset is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
