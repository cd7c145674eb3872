//! Interval arithmetic for ray parameter ranges.
//!
//! Open intervals (min, max) bound which distances along a ray count as a hit.

/// Distances at or below this are treated as the ray's own origin surface.
pub const SELF_INTERSECTION_EPSILON: f32 = 0.001;

/// Anything at or beyond this distance is treated as "no hit".
pub const SCENE_HORIZON: f32 = 1000.0;

/// Interval of ray parameters used for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Range accepted by every scene query: just past the origin, short of the horizon.
    pub const SCENE: Interval = Interval {
        min: SELF_INTERSECTION_EPSILON,
        max: SCENE_HORIZON,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, upper bound pulled in to `max`.
    pub fn with_max(&self, max: f32) -> Self {
        Self { min: self.min, max }
    }
}
