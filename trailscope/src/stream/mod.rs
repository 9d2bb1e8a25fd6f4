//! Stream connection to the position telemetry endpoint.
//!
//! # Architecture
//!
//! ```text
//! StreamClient (connect/receive/reconnect loop)
//!     │
//!     ├── protocol::parse_frame → Option<Sample>
//!     │
//!     └── PositionTracker
//!             ├── current position
//!             ├── TrailBuffer
//!             └── connection status
//! ```
//!
//! The client runs as an async task, owning the connection lifecycle and a
//! fixed-delay reconnect loop. Teardown goes through a
//! [`CancellationToken`](tokio_util::sync::CancellationToken); see
//! [`client::StreamClient`].

mod client;
mod config;
mod error;
mod protocol;

pub use client::StreamClient;
pub use config::{
    StreamConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RECONNECT_DELAY, MAX_FRAME_LENGTH,
};
pub use error::StreamError;
pub use protocol::{parse_frame, POSITION_FRAME_KIND};
