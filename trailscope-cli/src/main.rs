//! trailscope CLI - terminal viewer for a live position stream.
//!
//! Connects to the telemetry endpoint, tracks the incoming position
//! stream, and renders it as a moving point with a fading trail inside a
//! bounded circle. Logs go to a file so the TUI owns the terminal.

use clap::Parser;
use tokio_util::sync::CancellationToken;

use trailscope::config::ViewConfig;
use trailscope::logging::init_logging;
use trailscope::stream::{StreamClient, StreamConfig, DEFAULT_HOST, DEFAULT_PORT};
use trailscope::tracker::PositionTracker;

mod error;
mod ui;

use error::CliError;

#[derive(Parser)]
#[command(name = "trailscope")]
#[command(version = trailscope::VERSION)]
#[command(about = "Live position stream viewer with a fading motion trail")]
struct Args {
    /// Telemetry endpoint host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Telemetry endpoint port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(error) = run(args).await {
        error.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let _guard = init_logging(&args.log_dir, "trailscope.log")
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let view = ViewConfig {
        stream: StreamConfig {
            host: args.host,
            port: args.port,
            ..StreamConfig::default()
        },
        ..ViewConfig::default()
    };
    let geometry = view.geometry();
    let diameter = view.diameter;

    let tracker = PositionTracker::new(view.trail.clone());
    let cancel = CancellationToken::new();
    let client = StreamClient::new(view.stream.clone(), tracker.clone(), cancel.clone());
    let handle = client.start();

    // The TUI loop blocks, so it runs off the async workers
    let ui_tracker = tracker.clone();
    let result = tokio::task::spawn_blocking(move || ui::run(ui_tracker, geometry, diameter))
        .await
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    // Teardown: cancel the pending retry (if any) and close the transport
    cancel.cancel();
    handle
        .await
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    result
}
