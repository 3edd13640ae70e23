//! Access to the hosted text-generation model.

pub mod gemini;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use gemini::GeminiGateway;

/// A text-generation backend: prompt in, trimmed text out.
///
/// One attempt per call; implementations never retry.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Whether calls can succeed at all (a credential was configured).
    fn is_configured(&self) -> bool {
        true
    }
}

/// Stand-in used when no credential was configured at startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableGateway;

#[async_trait]
impl ModelGateway for UnavailableGateway {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

/// Normalize a raw model reply, turning blank output into a failure.
pub(crate) fn non_empty(text: &str) -> Result<String, GenerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(trimmed.to_string())
    }
}
