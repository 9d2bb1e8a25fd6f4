//! Configuration for the stream client.

use std::time::Duration;

/// Default telemetry endpoint host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default telemetry endpoint port.
pub const DEFAULT_PORT: u16 = 9002;

/// Default delay before a reconnect attempt.
///
/// Fixed, with no exponential growth or jitter: the link is expected to be
/// local and the view simply retries at a steady cadence.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Maximum accepted frame length in bytes.
///
/// Caps the line codec's read buffer so a peer that never sends a newline
/// cannot grow it without bound.
pub const MAX_FRAME_LENGTH: usize = 8 * 1024;

/// Configuration for the stream client.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Telemetry endpoint host.
    pub host: String,

    /// Telemetry endpoint port.
    pub port: u16,

    /// Delay between a disconnect and the next connect attempt.
    pub reconnect_delay: Duration,
}

impl StreamConfig {
    /// The socket address string for connect calls.
    ///
    /// Reconnects reuse this address unconditionally.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
        }
    }
}
