//! Displacement model.

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use super::EffectiveSpeed;
use crate::constants::speed::MS_PER_SECOND;
use crate::error::{AnimationError, AnimationResult};

/// A position in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 { (other.x - self.x).hypot(other.y - self.y) }
}

/// A single movement handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplacementRequest {
    /// Where the movement starts.
    pub origin: Point,
    /// Where the movement ends.
    pub destination: Point,
    /// World-unit length of one grid space.
    pub grid_size: f64,
}

impl DisplacementRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(origin: Point, destination: Point, grid_size: f64) -> Self {
        Self { origin, destination, grid_size }
    }

    /// Derives the displacement of this request.
    ///
    /// # Errors
    ///
    /// Returns `AnimationError::InvalidGridSize` if the grid size is not a
    /// positive finite number.
    pub fn displacement(&self) -> AnimationResult<Displacement> {
        Displacement::compute(self.origin, self.destination, self.grid_size)
    }
}

/// Derived distance and duration of a movement.
///
/// Values are computed on first read and cached for the lifetime of the
/// instance.
#[derive(Debug, Clone)]
pub struct Displacement {
    origin: Point,
    destination: Point,
    grid_size: f64,
    world_distance: OnceCell<f64>,
}

impl Displacement {
    /// Creates the displacement between `origin` and `destination`.
    ///
    /// # Errors
    ///
    /// Returns `AnimationError::InvalidGridSize` if `grid_size` is zero,
    /// negative, or not finite.
    pub fn compute(origin: Point, destination: Point, grid_size: f64) -> AnimationResult<Self> {
        if !grid_size.is_finite() || grid_size <= 0.0 {
            return Err(AnimationError::InvalidGridSize(grid_size));
        }

        Ok(Self {
            origin,
            destination,
            grid_size,
            world_distance: OnceCell::new(),
        })
    }

    /// Returns the grid size this displacement was computed with.
    #[must_use]
    pub const fn grid_size(&self) -> f64 { self.grid_size }

    /// Returns the straight-line distance in world units.
    #[must_use]
    pub fn world_distance(&self) -> f64 {
        *self.world_distance.get_or_init(|| self.origin.distance_to(self.destination))
    }

    /// Returns the straight-line distance in grid spaces.
    #[must_use]
    pub fn distance_spaces(&self) -> f64 { self.world_distance() / self.grid_size }

    /// Returns how long the movement takes at `speed`, in milliseconds,
    /// before any cap is applied.
    ///
    /// The world distance is divided by the speed in world units per second,
    /// which is the same as the distance in spaces divided by the speed in
    /// spaces per second.
    #[must_use]
    pub fn uncapped_duration_ms(&self, speed: &EffectiveSpeed) -> f64 {
        self.world_distance() * MS_PER_SECOND / speed.units_per_second()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PolicyConfig;

    const GRID: f64 = 100.0;

    fn approx_eq(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    fn speed(spaces_per_second: f64) -> EffectiveSpeed {
        EffectiveSpeed::resolve(&PolicyConfig::default(), GRID, spaces_per_second)
    }

    #[test]
    fn test_distance_in_spaces() {
        let d = Displacement::compute(Point::new(0.0, 0.0), Point::new(300.0, 400.0), GRID)
            .unwrap();
        assert!(approx_eq(d.world_distance(), 500.0));
        assert!(approx_eq(d.distance_spaces(), 5.0));
    }

    #[test]
    fn test_zero_distance_when_origin_equals_destination() {
        let p = Point::new(250.0, -75.0);
        let d = Displacement::compute(p, p, GRID).unwrap();
        assert!(d.distance_spaces().abs() < f64::EPSILON);
        assert!(d.uncapped_duration_ms(&speed(10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_zero_distance_has_non_zero_duration() {
        let d = Displacement::compute(Point::new(0.0, 0.0), Point::new(1.0, 0.0), GRID).unwrap();
        let duration = d.uncapped_duration_ms(&speed(10.0));
        assert!(duration > 0.0);
        assert!(duration.is_finite());
    }

    #[test]
    fn test_uncapped_duration() {
        // 10 spaces at 10 spaces per second.
        let d = Displacement::compute(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), GRID)
            .unwrap();
        assert!(approx_eq(d.uncapped_duration_ms(&speed(10.0)), 1000.0));
        assert!(approx_eq(d.uncapped_duration_ms(&speed(20.0)), 500.0));
    }

    #[test]
    fn test_duration_is_independent_of_grid_scale() {
        let small = Displacement::compute(Point::new(0.0, 0.0), Point::new(0.0, 50.0), 10.0)
            .unwrap();
        let large = Displacement::compute(Point::new(0.0, 0.0), Point::new(0.0, 500.0), 100.0)
            .unwrap();
        let config = PolicyConfig::default();

        let small_ms = small.uncapped_duration_ms(&EffectiveSpeed::resolve(&config, 10.0, 10.0));
        let large_ms = large.uncapped_duration_ms(&EffectiveSpeed::resolve(&config, 100.0, 10.0));
        assert!(approx_eq(small_ms, large_ms));
        assert!(approx_eq(small_ms, 500.0));
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let d = Displacement::compute(Point::new(12.5, 3.0), Point::new(-40.0, 77.7), 50.0)
            .unwrap();
        let first = d.distance_spaces();
        let second = d.distance_spaces();
        assert_eq!(first.to_bits(), second.to_bits());

        let s = speed(7.0);
        assert_eq!(
            d.uncapped_duration_ms(&s).to_bits(),
            d.uncapped_duration_ms(&s).to_bits()
        );
    }

    #[test]
    fn test_invalid_grid_size_is_rejected() {
        let origin = Point::default();
        let destination = Point::new(1.0, 1.0);

        for grid in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let result = Displacement::compute(origin, destination, grid);
            assert!(matches!(result, Err(AnimationError::InvalidGridSize(_))));
        }
    }

    #[test]
    fn test_request_displacement() {
        let request = DisplacementRequest::new(Point::new(0.0, 0.0), Point::new(0.0, 200.0), GRID);
        let d = request.displacement().unwrap();
        assert!(approx_eq(d.distance_spaces(), 2.0));
        assert!(approx_eq(d.grid_size(), GRID));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{"origin":{"x":0,"y":0},"destination":{"x":100,"y":0},"gridSize":50}"#;
        let request: DisplacementRequest = serde_json::from_str(json).unwrap();
        assert!(approx_eq(request.grid_size, 50.0));
        assert!(approx_eq(request.destination.x, 100.0));
    }
}
