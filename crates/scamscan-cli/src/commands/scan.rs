//! One-shot classification commands.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use scamscan_core::{Classifier, GatewayConfig, GeminiGateway, UploadedDocument};
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct ScanFileArgs {
    /// PDF or TXT file to check
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ScanUrlArgs {
    /// URL to classify (must start with http:// or https://)
    pub url: String,
}

/// Build a classifier, failing early when no key is configured.
fn classifier(config: &GatewayConfig) -> Result<Classifier> {
    let gateway = GeminiGateway::new(config).context("Cannot set up the model gateway")?;
    Ok(Classifier::new(Arc::new(gateway)))
}

pub async fn execute_file(args: ScanFileArgs, config: &GatewayConfig) -> Result<()> {
    let classifier = classifier(config)?;

    let filename = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let raw_bytes = std::fs::read(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    info!(path = %args.path.display(), bytes = raw_bytes.len(), "Scanning file");
    println!("{} Checking {}", "→".dimmed(), args.path.display());
    let document = UploadedDocument::new(filename, raw_bytes);
    let message = classifier.scan_document(document).await?;
    output::print_content_verdict(&message);
    Ok(())
}

pub async fn execute_url(args: ScanUrlArgs, config: &GatewayConfig) -> Result<()> {
    let classifier = classifier(config)?;
    let url = args.url.trim();

    info!(url, "Scanning URL");
    println!("{} Classifying {}", "→".dimmed(), url);
    let category = classifier.scan_url(url).await?;
    output::print_url_category(url, category);
    Ok(())
}
