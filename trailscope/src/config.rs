//! Static view configuration.
//!
//! These constants are fixed for the session: they are read once at
//! startup and are not dynamically reloadable.

use crate::geometry::{AxisRange, Geometry};
use crate::stream::StreamConfig;
use crate::trail::TrailConfig;

/// Default sensor-space X range.
pub const DEFAULT_X_RANGE: AxisRange = AxisRange {
    min: -120.0,
    max: 120.0,
};

/// Default sensor-space Y range.
pub const DEFAULT_Y_RANGE: AxisRange = AxisRange {
    min: -120.0,
    max: 120.0,
};

/// Default circle diameter in pixels.
pub const DEFAULT_DIAMETER: f64 = 870.0;

/// Default inset margin keeping points inside the circle's stroke.
pub const DEFAULT_INSET: f64 = 8.0;

/// Complete configuration for one view.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Sensor-space range mapped onto the horizontal axis.
    pub x_range: AxisRange,

    /// Sensor-space range mapped onto the vertical axis.
    pub y_range: AxisRange,

    /// Drawing surface diameter in pixels.
    pub diameter: f64,

    /// Clamp margin inside the circle edge.
    pub inset: f64,

    /// Trail buffer configuration.
    pub trail: TrailConfig,

    /// Stream endpoint and reconnect configuration.
    pub stream: StreamConfig,
}

impl ViewConfig {
    /// Derive the session geometry from this configuration.
    pub fn geometry(&self) -> Geometry {
        Geometry::from_diameter(self.diameter, self.inset, self.x_range, self.y_range)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            diameter: DEFAULT_DIAMETER,
            inset: DEFAULT_INSET,
            trail: TrailConfig::default(),
            stream: StreamConfig::default(),
        }
    }
}
