//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scamscan_core::config::{API_KEY_ENV, DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use scamscan_core::GatewayConfig;

pub mod scan;
pub mod serve;

/// Scamscan - scam message and malicious URL detection
#[derive(Parser)]
#[command(name = "scamscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API key for the model service
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for classification
    #[arg(long, global = true, env = "SCAMSCAN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the model service
    #[arg(long, global = true, env = "SCAMSCAN_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Timeout for a single model call, in seconds
    #[arg(long, global = true, env = "SCAMSCAN_REQUEST_TIMEOUT_SECS", default_value_t = scamscan_core::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Check an uploaded-style PDF or TXT file for scam content
    ScanFile(scan::ScanFileArgs),

    /// Classify a URL as benign, phishing, malware or defacement
    ScanUrl(scan::ScanUrlArgs),
}

impl Cli {
    /// Gateway settings collected from flags and environment.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_api_base_url(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.gateway_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::ScanFile(args) => scan::execute_file(args, &config).await,
            Commands::ScanUrl(args) => scan::execute_url(args, &config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gateway_flags() {
        let cli = Cli::try_parse_from([
            "scamscan",
            "scan-url",
            "https://example.com",
            "--api-key",
            "k",
            "--model",
            "gemini-2.0-flash",
            "--api-base-url",
            "http://localhost:9999/",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.gateway_config();
        assert_eq!(config.credential().unwrap(), "k");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["scamscan", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, 5000);
                assert!(!args.log);
            }
            _ => panic!("expected serve"),
        }
    }
}
