//! Error types for the stream client.
//!
//! None of these are fatal: the client logs them and recycles the
//! connection state machine through its reconnect path. They exist so the
//! failure branches are explicit rather than stringly logged.

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

/// Errors that can occur on the stream connection.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The connect attempt failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The open link failed mid-stream (read error or oversized frame).
    ///
    /// The client forces closure rather than keeping a half-broken link.
    #[error("transport error: {0}")]
    Transport(#[from] LinesCodecError),
}
