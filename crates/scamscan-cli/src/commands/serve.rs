//! Web server command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use scamscan_core::{Classifier, GatewayConfig};
use scamscan_web::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SCAMSCAN_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SCAMSCAN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Largest accepted upload, in bytes
    #[arg(long, env = "SCAMSCAN_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "scamscan.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, gateway_config: &GatewayConfig) -> Result<()> {
    // A missing key is logged inside and the server still starts.
    let gateway = scamscan_core::connect_gateway(gateway_config)
        .context("Invalid model gateway configuration")?;
    let classifier = Classifier::new(gateway);

    println!();
    println!("  {} {}", "Scamscan".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}    http://{}:{}", "Page".green(), args.host, args.port);
    println!(
        "  {}  http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!("  {}   {}", "Model".green(), gateway_config.model);
    if !classifier.is_configured() {
        println!(
            "  {}",
            format!("No API key set ({}); classification will fail", scamscan_core::config::API_KEY_ENV)
                .yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    info!(
        host = %args.host,
        port = args.port,
        max_upload_bytes = args.max_upload_bytes,
        "Starting web server"
    );
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload_bytes,
    };
    scamscan_web::run_server(config, classifier).await?;

    Ok(())
}
