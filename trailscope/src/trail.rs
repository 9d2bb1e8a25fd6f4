//! Trail buffer: bounded, time-relevant history of recent samples.
//!
//! The buffer retains recent positions for rendering a fading motion trail.
//! Entries are kept in insertion order (which is chronological order: the
//! single writer's clock is monotonically non-decreasing) and pruned in two
//! passes from the front: first every entry older than the trail duration,
//! then the oldest excess entries beyond the capacity.
//!
//! Decay is a pure function of entry age, recomputed at render time and
//! never stored.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::state::Sample;

/// Default trail duration.
pub const DEFAULT_TRAIL_DURATION: Duration = Duration::from_millis(2500);

/// Default maximum number of retained entries.
pub const DEFAULT_TRAIL_CAPACITY: usize = 100;

/// Trail buffer configuration.
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Maximum age an entry may reach before it is pruned.
    pub duration: Duration,

    /// Maximum number of entries retained after pruning.
    pub capacity: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TRAIL_DURATION,
            capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

/// A sample plus its insertion timestamp.
///
/// The insertion time drives age and decay, independent of any timestamp
/// the source may embed in the sample itself.
#[derive(Debug, Clone, Copy)]
pub struct TrailEntry {
    pub sample: Sample,
    pub inserted_at: Instant,
}

impl TrailEntry {
    /// Age of this entry at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }
}

/// Opacity factor in [0, 1] for an entry of the given age.
///
/// Linear fade: full opacity at age 0, zero at age >= `duration`.
/// A zero trail duration decays everything immediately.
pub fn decay(age: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    let t = (age.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0);
    1.0 - t
}

/// Ordered, time- and count-bounded collection of recent samples.
#[derive(Debug)]
pub struct TrailBuffer {
    entries: VecDeque<TrailEntry>,
    config: TrailConfig,
}

impl TrailBuffer {
    pub fn new(config: TrailConfig) -> Self {
        let capacity = config.capacity;
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(TrailConfig::default())
    }

    /// Append a sample with insertion time `now`, then prune.
    ///
    /// `now` must be monotonically non-decreasing across calls; the buffer
    /// relies on insertion order being chronological order.
    pub fn insert(&mut self, sample: Sample, now: Instant) {
        self.entries.push_back(TrailEntry {
            sample,
            inserted_at: now,
        });
        self.prune(now);
    }

    /// Drop stale entries by age, then excess entries by capacity.
    ///
    /// Both passes remove from the front only, so remaining entries keep
    /// their order. After this returns, every entry has age <= the trail
    /// duration and the length is <= the capacity.
    pub fn prune(&mut self, now: Instant) {
        while let Some(front) = self.entries.front() {
            if front.age(now) > self.config.duration {
                self.entries.pop_front();
            } else {
                break;
            }
        }
        while self.entries.len() > self.config.capacity {
            self.entries.pop_front();
        }
    }

    /// Read-only view of the current entries, oldest first.
    pub fn snapshot(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured trail duration, for decay computation at render time.
    pub fn duration(&self) -> Duration {
        self.config.duration
    }
}
