//! Position tracker - single owner of current position, trail, and
//! connectivity.
//!
//! The tracker sits between the stream client (its only writer) and the
//! presentation layer (readers). Each accepted sample replaces the current
//! position and is appended to the trail buffer in arrival order, so the
//! trail's chronological invariant holds without any further coordination.
//! Renderers pull an immutable [`ViewSnapshot`] per tick; they never
//! mutate tracker state.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use tracing::{debug, info};

use crate::geometry::Geometry;
use crate::state::{ConnectionStatus, Sample};
use crate::trail::{decay, TrailBuffer, TrailConfig};

/// A trail entry projected to pixel space, with its decay factor.
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    /// Opacity factor in [0, 1], recomputed from age at snapshot time.
    pub opacity: f64,
    pub inserted_at: Instant,
}

/// The current position projected to pixel space.
#[derive(Debug, Clone, Copy)]
pub struct CurrentPoint {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

/// Everything the presentation layer needs for one render tick.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub connected: bool,
    pub current: Option<CurrentPoint>,
    /// Trail points oldest first; consecutive points form fading segments.
    pub trail: Vec<TrailPoint>,
}

/// Internal state, mutated only by the stream client.
struct TrackerState {
    current: Option<Sample>,
    trail: TrailBuffer,
    connection: ConnectionStatus,
}

/// Shared position tracker.
///
/// Cheaply cloneable handle; all clones observe the same state.
#[derive(Clone)]
pub struct PositionTracker {
    state: Arc<RwLock<TrackerState>>,
}

impl PositionTracker {
    /// Create a tracker with the given trail configuration.
    pub fn new(trail_config: TrailConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(TrackerState {
                current: None,
                trail: TrailBuffer::new(trail_config),
                connection: ConnectionStatus::default(),
            })),
        }
    }

    /// Create a tracker with default trail configuration.
    pub fn with_defaults() -> Self {
        Self::new(TrailConfig::default())
    }

    /// Accept a sample: it becomes the current position and a trail entry.
    ///
    /// Called only from the stream client's task, so insertion times are
    /// monotonically non-decreasing as the trail buffer requires.
    pub fn receive_sample(&self, sample: Sample) {
        let now = Instant::now();
        let mut state = self.state.write().unwrap();
        state.current = Some(sample);
        state.trail.insert(sample, now);
        debug!(
            x = sample.x,
            y = sample.y,
            weight = sample.weight,
            trail_len = state.trail.len(),
            "Sample accepted"
        );
    }

    /// Update the connection status, logging actual transitions.
    pub fn set_connection_status(&self, status: ConnectionStatus) {
        let mut state = self.state.write().unwrap();
        if state.connection != status {
            info!(from = %state.connection, to = %status, "Connection status changed");
            state.connection = status;
        }
    }

    /// The observable connectivity boolean.
    pub fn connected(&self) -> bool {
        self.state.read().unwrap().connection.is_connected()
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.state.read().unwrap().connection
    }

    /// The most recently accepted sample, if any.
    pub fn current_position(&self) -> Option<Sample> {
        self.state.read().unwrap().current
    }

    /// Number of entries currently in the trail buffer.
    pub fn trail_len(&self) -> usize {
        self.state.read().unwrap().trail.len()
    }

    /// Project current position and trail through the geometry engine.
    ///
    /// Decay is recomputed from each entry's age at `now`; entries past the
    /// trail duration that have not been pruned yet simply render at zero
    /// opacity. Does not mutate the buffer.
    pub fn render_snapshot(&self, geometry: &Geometry, now: Instant) -> ViewSnapshot {
        let state = self.state.read().unwrap();
        let duration = state.trail.duration();

        let trail = state
            .trail
            .snapshot()
            .map(|entry| {
                let point = geometry.project(entry.sample.x, entry.sample.y);
                TrailPoint {
                    x: point.x,
                    y: point.y,
                    opacity: decay(entry.age(now), duration),
                    inserted_at: entry.inserted_at,
                }
            })
            .collect();

        let current = state.current.map(|sample| {
            let point = geometry.project(sample.x, sample.y);
            CurrentPoint {
                x: point.x,
                y: point.y,
                weight: sample.weight,
            }
        });

        ViewSnapshot {
            connected: state.connection.is_connected(),
            current,
            trail,
        }
    }
}
