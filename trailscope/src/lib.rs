//! trailscope - live 2D position stream visualizer core.
//!
//! Receives a stream of position-and-weight reports over a persistent
//! socket connection and maintains everything a renderer needs to draw a
//! point moving inside a bounded circle with a fading motion trail.
//!
//! # Components
//!
//! - [`geometry`] - stateless mapping from sensor space to a pixel position
//!   inside the circle (normalization, vertical flip, clamp-to-circle)
//! - [`trail`] - time- and count-bounded history of recent samples with
//!   age-based decay
//! - [`stream`] - connection lifecycle to the telemetry endpoint: connect,
//!   receive, parse, auto-reconnect, cancellation-token teardown
//! - [`tracker`] - single-writer owner of current position, trail, and
//!   connectivity; produces per-tick render snapshots
//!
//! # Usage
//!
//! ```ignore
//! use tokio_util::sync::CancellationToken;
//! use trailscope::config::ViewConfig;
//! use trailscope::stream::StreamClient;
//! use trailscope::tracker::PositionTracker;
//!
//! let config = ViewConfig::default();
//! let geometry = config.geometry();
//! let tracker = PositionTracker::new(config.trail.clone());
//! let cancel = CancellationToken::new();
//!
//! let client = StreamClient::new(config.stream.clone(), tracker.clone(), cancel.clone());
//! let handle = client.start();
//!
//! // Each render tick:
//! let snapshot = tracker.render_snapshot(&geometry, std::time::Instant::now());
//!
//! // Teardown:
//! cancel.cancel();
//! # let _ = handle;
//! ```

pub mod config;
pub mod geometry;
pub mod logging;
pub mod state;
pub mod stream;
pub mod tracker;
pub mod trail;

/// Version of the trailscope library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
