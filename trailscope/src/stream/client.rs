//! Stream client - connection lifecycle for the position stream.
//!
//! Maintains a single logical connection to the telemetry endpoint,
//! parses inbound frames, and feeds accepted samples to the tracker.
//!
//! # Lifecycle
//!
//! `Disconnected → Connecting → Connected → Disconnected`, then a fixed
//! reconnect delay and around again, indefinitely. There is no fatal state:
//! connect failures, mid-stream errors, and peer closes all funnel back
//! into the retry path, and the only user-visible effect is the
//! connectivity flag dropping while the position and trail freeze.
//!
//! # Teardown
//!
//! Cancelling the client's [`CancellationToken`] is checked at every
//! suspension point: an in-flight connect attempt's completion is ignored,
//! a pending reconnect sleep is abandoned, and an open transport is
//! dropped. No transitions occur after cancellation.

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::config::{StreamConfig, MAX_FRAME_LENGTH};
use super::error::StreamError;
use super::protocol::parse_frame;
use crate::state::ConnectionStatus;
use crate::tracker::PositionTracker;

/// Stream client for the position telemetry endpoint.
///
/// The tracker is the client's single downstream: every accepted sample
/// becomes the current position and a trail entry, and every connectivity
/// change updates the tracker's connection status.
pub struct StreamClient {
    config: StreamConfig,
    tracker: PositionTracker,
    cancel: CancellationToken,
}

impl StreamClient {
    /// Create a new stream client.
    pub fn new(config: StreamConfig, tracker: PositionTracker, cancel: CancellationToken) -> Self {
        Self {
            config,
            tracker,
            cancel,
        }
    }

    /// Start the client as an async task.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run the connect/receive/reconnect loop until cancelled.
    async fn run(self) {
        info!(
            addr = %self.config.addr(),
            reconnect_delay_ms = self.config.reconnect_delay.as_millis() as u64,
            "Stream client started"
        );

        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            self.tracker.set_connection_status(ConnectionStatus::Connecting);

            let connected = tokio::select! {
                _ = self.cancel.cancelled() => break,
                result = self.connect() => result,
            };

            match connected {
                Ok(stream) => {
                    self.tracker.set_connection_status(ConnectionStatus::Connected);
                    self.read_frames(stream).await;
                }
                Err(error) => {
                    debug!(%error, "Connect attempt failed");
                }
            }

            self.tracker.set_connection_status(ConnectionStatus::Disconnected);

            // Fixed-delay retry; cancellation abandons the pending attempt.
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(self.config.reconnect_delay) => {}
            }
        }

        self.tracker.set_connection_status(ConnectionStatus::Disconnected);
        info!("Stream client stopped");
    }

    async fn connect(&self) -> Result<TcpStream, StreamError> {
        let addr = self.config.addr();
        TcpStream::connect(&addr)
            .await
            .map_err(|source| StreamError::Connect { addr, source })
    }

    /// Receive frames until the link closes, errors, or the client is
    /// cancelled. Dropping the framed stream closes the transport.
    async fn read_frames(&self, stream: TcpStream) {
        let mut framed = Framed::new(stream, LinesCodec::new_with_max_length(MAX_FRAME_LENGTH));
        let mut frames_received: u64 = 0;
        let mut samples_accepted: u64 = 0;

        loop {
            let item = tokio::select! {
                _ = self.cancel.cancelled() => break,
                item = framed.next() => item,
            };

            match item {
                Some(Ok(line)) => {
                    frames_received += 1;
                    if let Some(sample) = parse_frame(&line) {
                        samples_accepted += 1;
                        self.tracker.receive_sample(sample);
                    }
                }
                Some(Err(error)) => {
                    // Force closure rather than keep a half-broken link alive
                    let error = StreamError::Transport(error);
                    warn!(%error, "Transport error, closing connection");
                    break;
                }
                None => {
                    debug!("Peer closed the stream");
                    break;
                }
            }
        }

        debug!(frames_received, samples_accepted, "Connection closed");
    }
}
