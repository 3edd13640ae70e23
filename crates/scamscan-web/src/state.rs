//! Application state.

use scamscan_core::Classifier;

/// Application state shared across handlers.
///
/// Immutable after startup; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
}

impl AppState {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }
}
