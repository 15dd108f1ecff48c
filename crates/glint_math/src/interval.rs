use std::cmp::Ordering;

/// A closed range of ray parameters `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[min, +inf)`.
    pub fn from_min(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// `[0, +inf)`, the range for primary rays.
    pub fn non_negative() -> Self {
        Self::from_min(0.0)
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if t is within the interval [min, max] (inclusive).
    pub fn contains(&self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }

    /// Returns true if t is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, t: f64) -> bool {
        self.min < t && t < self.max
    }

    /// Clamps t to be within the interval [min, max].
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.min, self.max)
    }

    /// Orders intervals by their lower bound.
    pub fn cmp_min(&self, other: &Interval) -> Ordering {
        self.min.total_cmp(&other.min)
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };
}
