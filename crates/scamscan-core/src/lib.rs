//! # scamscan core
//!
//! Text extraction, prompt building and model-backed classification of
//! uploaded messages and URLs.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod prompt;

pub use classify::{Classifier, UrlCategory, CONTENT_FALLBACK, URL_FALLBACK};
pub use config::GatewayConfig;
pub use error::{ConfigError, ExtractionError, GenerationError, ScanError, ScanResult};
pub use extract::{extract, extract_blocking, FileKind, UploadedDocument};
pub use gateway::{GeminiGateway, ModelGateway, UnavailableGateway};

use std::sync::Arc;

use tracing::{error, info};

/// Build the gateway for `config`.
///
/// Without a usable credential this logs an error and returns an
/// [`UnavailableGateway`], so the process can still start.
pub fn connect_gateway(config: &GatewayConfig) -> Result<Arc<dyn ModelGateway>, ConfigError> {
    match GeminiGateway::new(config) {
        Ok(gateway) => {
            info!(model = %gateway.model(), "Model gateway ready");
            Ok(Arc::new(gateway))
        }
        Err(e @ ConfigError::MissingCredential(_)) => {
            error!(error = %e, "No API key found; classification requests will fail");
            Ok(Arc::new(UnavailableGateway))
        }
        Err(e) => Err(e),
    }
}
