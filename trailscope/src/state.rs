//! Core state types for position tracking.
//!
//! This module defines the fundamental types used throughout trailscope:
//!
//! - [`Sample`] - A single accepted position report from the stream
//! - [`ConnectionStatus`] - Lifecycle state of the stream connection

use std::time::Instant;

/// A single accepted position report.
///
/// `x` and `y` are sensor-space coordinates (unbounded in principle,
/// expected within the configured axis ranges); `weight` is the measured
/// load reported alongside the position. The `timestamp` records when the
/// sample was accepted locally, independent of anything the source embeds.
///
/// Samples are immutable once created. The tracker holds the most recent
/// one as the current position; the trail buffer owns one per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Sensor-space X coordinate.
    pub x: f64,

    /// Sensor-space Y coordinate.
    pub y: f64,

    /// Measured weight (non-negative by convention, not enforced).
    pub weight: f64,

    /// When this sample was accepted.
    pub timestamp: Instant,
}

impl Sample {
    /// Create a sample timestamped now.
    pub fn new(x: f64, y: f64, weight: f64) -> Self {
        Self {
            x,
            y,
            weight,
            timestamp: Instant::now(),
        }
    }
}

/// Stream connection lifecycle state.
///
/// Owned by the stream client for the lifetime of the view. Transitions:
/// `Disconnected → Connecting` on start or retry, `Connecting → Connected`
/// when the transport opens, `Connected → Disconnected` on any closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No link; a retry may be pending.
    #[default]
    Disconnected,
    /// Connect attempt in flight.
    Connecting,
    /// Transport open, receiving frames.
    Connected,
}

impl ConnectionStatus {
    /// True only for the `Connected` state.
    ///
    /// This is the observable boolean exposed to the render side; the
    /// `Connecting` state deliberately reads as not connected.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Connected => write!(f, "Connected"),
        }
    }
}
