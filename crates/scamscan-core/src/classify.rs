//! Classification pipelines: prompt, model call, normalized result.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{GenerationError, ScanError, ScanResult};
use crate::extract::{extract_blocking, UploadedDocument};
use crate::gateway::ModelGateway;
use crate::prompt::{build_scam_prompt, build_url_prompt};

/// Returned by [`Classifier::classify_content`] when generation fails.
pub const CONTENT_FALLBACK: &str = "Classification failed.";

/// Returned by [`Classifier::classify_url`] when generation fails.
pub const URL_FALLBACK: &str = "Detection failed.";

/// URL risk categories the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlCategory {
    Benign,
    Phishing,
    Malware,
    Defacement,
}

impl UrlCategory {
    pub const ALL: [UrlCategory; 4] = [
        UrlCategory::Benign,
        UrlCategory::Phishing,
        UrlCategory::Malware,
        UrlCategory::Defacement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlCategory::Benign => "benign",
            UrlCategory::Phishing => "phishing",
            UrlCategory::Malware => "malware",
            UrlCategory::Defacement => "defacement",
        }
    }

    /// Anything other than `benign` is a risk.
    pub fn is_threat(&self) -> bool {
        !matches!(self, UrlCategory::Benign)
    }
}

impl fmt::Display for UrlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlCategory {
    type Err = GenerationError;

    /// Lenient about casing, quotes, markdown emphasis and a trailing period,
    /// strict about the word itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '`' || c == '*' || c == '.')
            .trim()
            .to_lowercase();

        UrlCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == word)
            .ok_or_else(|| GenerationError::UnexpectedCategory(s.trim().to_string()))
    }
}

/// Whether `url` carries an `http://` or `https://` scheme prefix.
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Runs prompts through a [`ModelGateway`] and turns failures into fixed messages.
#[derive(Clone)]
pub struct Classifier {
    gateway: Arc<dyn ModelGateway>,
}

impl Classifier {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Ask the model whether `text` is legitimate or a scam.
    pub async fn try_classify_content(&self, text: &str) -> Result<String, GenerationError> {
        let prompt = build_scam_prompt(text);
        let reply = self.gateway.generate(&prompt).await?;
        let message = reply.trim();
        if message.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        debug!(chars = message.len(), "Content classified");
        Ok(message.to_string())
    }

    /// Ask the model which [`UrlCategory`] `url` falls into.
    pub async fn try_classify_url(&self, url: &str) -> Result<UrlCategory, GenerationError> {
        let prompt = build_url_prompt(url);
        let reply = self.gateway.generate(&prompt).await?;
        let category = reply.parse::<UrlCategory>()?;
        debug!(url, %category, "URL classified");
        Ok(category)
    }

    /// Extract and classify a document, keeping every failure distinct.
    pub async fn scan_document(&self, document: UploadedDocument) -> ScanResult<String> {
        let text = extract_blocking(document).await?;
        Ok(self.try_classify_content(&text).await?)
    }

    /// Check the scheme prefix, then classify `url`.
    pub async fn scan_url(&self, url: &str) -> ScanResult<UrlCategory> {
        if !is_http_url(url) {
            return Err(ScanError::InvalidUrl(url.to_string()));
        }
        Ok(self.try_classify_url(url).await?)
    }

    /// Classification message for `text`, or [`CONTENT_FALLBACK`].
    pub async fn classify_content(&self, text: &str) -> String {
        match self.try_classify_content(text).await {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Content classification failed");
                CONTENT_FALLBACK.to_string()
            }
        }
    }

    /// Lowercase category name for `url`, or [`URL_FALLBACK`].
    pub async fn classify_url(&self, url: &str) -> String {
        match self.try_classify_url(url).await {
            Ok(category) => category.to_string(),
            Err(e) => {
                warn!(url, error = %e, "URL detection failed");
                URL_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway returning a canned reply and recording prompts.
    struct StubGateway {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGateway {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ModelGateway for StubGateway {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(GenerationError::RateLimited),
            }
        }
    }

    #[tokio::test]
    async fn test_content_trimmed() {
        let stub = StubGateway::replying("  legitimate message  ");
        let classifier = Classifier::new(stub.clone());
        assert_eq!(
            classifier.classify_content("Lunch at noon?").await,
            "legitimate message"
        );

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Lunch at noon?"));
    }

    #[tokio::test]
    async fn test_content_fallback() {
        let classifier = Classifier::new(StubGateway::failing());
        assert_eq!(classifier.classify_content("anything").await, "Classification failed.");
    }

    #[tokio::test]
    async fn test_content_blank_reply_falls_back() {
        let classifier = Classifier::new(StubGateway::replying(" \n "));
        assert_eq!(classifier.classify_content("anything").await, CONTENT_FALLBACK);
    }

    #[tokio::test]
    async fn test_url_phishing() {
        let stub = StubGateway::replying("phishing");
        let classifier = Classifier::new(stub.clone());
        assert_eq!(classifier.classify_url("http://paypa1-secure.com").await, "phishing");
        assert!(stub.prompts.lock().unwrap()[0].contains("http://paypa1-secure.com"));
    }

    #[tokio::test]
    async fn test_url_reply_normalized() {
        let classifier = Classifier::new(StubGateway::replying("  **Malware.**\n"));
        assert_eq!(classifier.classify_url("http://x.xyz").await, "malware");
    }

    #[tokio::test]
    async fn test_url_unlisted_category_falls_back() {
        let classifier = Classifier::new(StubGateway::replying("suspicious"));
        assert!(matches!(
            classifier.try_classify_url("http://x.com").await,
            Err(GenerationError::UnexpectedCategory(word)) if word == "suspicious"
        ));
        assert_eq!(classifier.classify_url("http://x.com").await, "Detection failed.");
    }

    #[tokio::test]
    async fn test_url_fallback() {
        let classifier = Classifier::new(StubGateway::failing());
        assert_eq!(classifier.classify_url("https://example.com").await, URL_FALLBACK);
    }

    #[tokio::test]
    async fn test_scan_url_rejects_without_calling_model() {
        let stub = StubGateway::replying("phishing");
        let classifier = Classifier::new(stub.clone());
        assert!(matches!(
            classifier.scan_url("ftp://bad.com").await,
            Err(ScanError::InvalidUrl(_))
        ));
        assert!(stub.prompts.lock().unwrap().is_empty());

        assert_eq!(
            classifier.scan_url("http://paypa1-secure.com").await.unwrap(),
            UrlCategory::Phishing
        );
    }

    #[tokio::test]
    async fn test_scan_document() {
        let stub = StubGateway::replying("Scam: asks for your bank PIN.");
        let classifier = Classifier::new(stub.clone());

        let doc = UploadedDocument::new("mail.txt", b"Send us your PIN".to_vec());
        assert_eq!(
            classifier.scan_document(doc).await.unwrap(),
            "Scam: asks for your bank PIN."
        );

        let doc = UploadedDocument::new("mail.doc", b"Send us your PIN".to_vec());
        assert!(matches!(
            classifier.scan_document(doc).await,
            Err(ScanError::Extraction(_))
        ));
        assert_eq!(stub.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_scan_document_generation_error() {
        let classifier = Classifier::new(StubGateway::failing());
        let doc = UploadedDocument::new("mail.txt", b"Hello".to_vec());
        assert!(matches!(
            classifier.scan_document(doc).await,
            Err(ScanError::Generation(GenerationError::RateLimited))
        ));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("benign".parse::<UrlCategory>().unwrap(), UrlCategory::Benign);
        assert_eq!("DEFACEMENT".parse::<UrlCategory>().unwrap(), UrlCategory::Defacement);
        assert_eq!("\"phishing\"".parse::<UrlCategory>().unwrap(), UrlCategory::Phishing);
        assert!("benign site".parse::<UrlCategory>().is_err());
        assert!("".parse::<UrlCategory>().is_err());
    }

    #[test]
    fn test_category_threat() {
        assert!(!UrlCategory::Benign.is_threat());
        assert!(UrlCategory::Phishing.is_threat());
        assert_eq!(serde_json::to_string(&UrlCategory::Malware).unwrap(), "\"malware\"");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("http://paypa1-secure.com"));
        assert!(is_http_url("https://example.com"));
        assert!(!is_http_url("ftp://bad.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(" http://leading-space.com"));
    }
}
