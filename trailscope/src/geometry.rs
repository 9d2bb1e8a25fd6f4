//! Geometry engine: sensor space to pixel space.
//!
//! Maps arbitrary sensor-space `(x, y)` values to a pixel position that is
//! guaranteed to lie inside a circle of fixed radius, minus an inset margin
//! that keeps the point visually clear of the stroke. The vertical axis is
//! inverted to match a downward-increasing drawing coordinate system.
//!
//! The mapping is stateless and deterministic: identical inputs produce
//! bit-identical outputs, so it can be applied to every trail entry on
//! every render frame without drift.

/// Inclusive sensor-space range for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Normalize a value into the centered range [-1, 1].
    ///
    /// `min` maps to -1, `max` to 1, the midpoint to 0. Values outside the
    /// range extend past ±1 and are handled by the circle clamp downstream.
    /// A degenerate range (`min == max`) normalizes everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let half = (self.max - self.min) / 2.0;
        if half == 0.0 {
            return 0.0;
        }
        let mid = (self.min + self.max) / 2.0;
        (value - mid) / half
    }
}

/// A point on the drawing surface, in pixels.
///
/// The origin is the surface's top-left corner; `y` increases downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Circular drawing area plus the sensor-space ranges mapped onto it.
///
/// Derived once from the configured diameter and immutable for the session.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    radius: f64,
    center_x: f64,
    center_y: f64,
    inset: f64,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl Geometry {
    /// Build the geometry for a circle inscribed in a square surface of the
    /// given diameter, centered at `(radius, radius)`.
    pub fn from_diameter(diameter: f64, inset: f64, x_range: AxisRange, y_range: AxisRange) -> Self {
        let radius = diameter / 2.0;
        Self {
            radius,
            center_x: radius,
            center_y: radius,
            inset,
            x_range,
            y_range,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    /// Map a sensor-space point to a pixel position inside the circle.
    ///
    /// Normalizes each axis into [-1, 1], scales by the radius (negating Y
    /// for the vertical flip), clamps to `radius - inset` along the same
    /// direction from center, then translates to the circle center. A point
    /// exactly at the center is left unscaled.
    pub fn project(&self, x: f64, y: f64) -> PixelPoint {
        let mut px = self.x_range.normalize(x) * self.radius;
        let mut py = -self.y_range.normalize(y) * self.radius;

        let limit = self.radius - self.inset;
        let distance = px.hypot(py);
        if distance > limit {
            // distance > limit >= 0 here, so the division is safe
            let scale = limit / distance;
            px *= scale;
            py *= scale;
        }

        PixelPoint {
            x: px + self.center_x,
            y: py + self.center_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry() -> Geometry {
        Geometry::from_diameter(
            870.0,
            8.0,
            AxisRange::new(-120.0, 120.0),
            AxisRange::new(-120.0, 120.0),
        )
    }

    #[test]
    fn test_normalize_endpoints_and_midpoint() {
        let range = AxisRange::new(-120.0, 120.0);
        assert_eq!(range.normalize(-120.0), -1.0);
        assert_eq!(range.normalize(120.0), 1.0);
        assert_eq!(range.normalize(0.0), 0.0);
    }

    #[test]
    fn test_normalize_asymmetric_range() {
        let range = AxisRange::new(0.0, 10.0);
        assert_eq!(range.normalize(0.0), -1.0);
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(10.0), 1.0);
    }

    #[test]
    fn test_normalize_stays_in_unit_range_for_in_range_inputs() {
        let range = AxisRange::new(-120.0, 120.0);
        for i in 0..=240 {
            let value = -120.0 + i as f64;
            let n = range.normalize(value);
            assert!((-1.0..=1.0).contains(&n), "normalize({value}) = {n}");
        }
    }

    #[test]
    fn test_normalize_degenerate_range_is_zero() {
        let range = AxisRange::new(5.0, 5.0);
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(1000.0), 0.0);
    }

    #[test]
    fn test_project_center_maps_to_circle_center() {
        let geometry = test_geometry();
        let point = geometry.project(0.0, 0.0);
        assert_eq!(point.x, 435.0);
        assert_eq!(point.y, 435.0);
    }

    #[test]
    fn test_project_flips_vertical_axis() {
        let geometry = test_geometry();
        // Positive sensor Y moves the pixel up (smaller y)
        let point = geometry.project(0.0, 60.0);
        assert!(point.y < 435.0);
        let point = geometry.project(0.0, -60.0);
        assert!(point.y > 435.0);
    }

    #[test]
    fn test_project_clamps_edge_sample_to_inset_boundary() {
        // End-to-end scenario: (120, 0) lands at the clamped right edge,
        // vertically centered.
        let geometry = test_geometry();
        let point = geometry.project(120.0, 0.0);
        assert!((point.x - 862.0).abs() < 1e-9, "x = {}", point.x);
        assert!((point.y - 435.0).abs() < 1e-9, "y = {}", point.y);
    }

    #[test]
    fn test_project_clamps_arbitrarily_large_inputs() {
        let geometry = test_geometry();
        let limit = geometry.radius() - 8.0;
        for &(x, y) in &[
            (1e6, 1e6),
            (-1e9, 3.0),
            (120.0, 120.0),
            (f64::MAX / 4.0, 0.0),
            (-500.0, 700.0),
        ] {
            let point = geometry.project(x, y);
            let (cx, cy) = geometry.center();
            let distance = (point.x - cx).hypot(point.y - cy);
            assert!(
                distance <= limit + 1e-9,
                "project({x}, {y}) escaped the circle: distance {distance}"
            );
        }
    }

    #[test]
    fn test_project_clamping_is_idempotent_along_direction() {
        // Any out-of-range point on the same ray from center lands on the
        // same boundary pixel; re-clamping never moves it.
        let geometry = test_geometry();
        let edge = geometry.project(120.0, 0.0);
        assert_eq!(geometry.project(240.0, 0.0), edge);
        assert_eq!(geometry.project(1200.0, 0.0), edge);
    }

    #[test]
    fn test_project_is_deterministic() {
        let geometry = test_geometry();
        let a = geometry.project(1e9, -1e9);
        let b = geometry.project(1e9, -1e9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_in_range_point_is_unclamped() {
        let geometry = test_geometry();
        // (60, 0) normalizes to 0.5, scales to 217.5 -- well inside the limit
        let point = geometry.project(60.0, 0.0);
        assert_eq!(point.x, 435.0 + 217.5);
        assert_eq!(point.y, 435.0);
    }
}
