//! ZoomStitch CLI - Command-line interface
//!
//! Reconstructs a full-resolution photograph from a deep-zoom tile server,
//! given the public URL of a collection resource.

mod error;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use zoomstitch::logging::{default_log_dir, default_log_file, init_logging};
use zoomstitch::service::{ReconstructService, ServiceConfig};
use zoomstitch::transport::ReqwestClient;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "zoomstitch")]
#[command(version = zoomstitch::VERSION)]
#[command(about = "Reconstruct full-resolution photographs from deep-zoom tile archives", long_about = None)]
struct Args {
    /// Collection resource URL, e.g. https://host/resource/B+43122
    url: String,

    /// Directory where the reconstructed image is written
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let _logging_guard = init_logging(default_log_dir(), default_log_file())
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    info!(version = zoomstitch::VERSION, url = %args.url, "starting reconstruction");

    let http_client = ReqwestClient::with_timeout(args.timeout).map_err(CliError::Transport)?;
    let service = ReconstructService::new(
        http_client,
        ServiceConfig::with_output_dir(args.output_dir),
    );

    println!("Reconstructing {}", args.url);
    let start = Instant::now();

    let path = service
        .reconstruct(&args.url)
        .map_err(CliError::Reconstruct)?;

    let elapsed = start.elapsed();
    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    println!(
        "✓ Saved {} ({:.2} MB) in {:.2}s",
        path.display(),
        file_size as f64 / 1_048_576.0,
        elapsed.as_secs_f64()
    );

    Ok(())
}
