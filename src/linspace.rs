#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear space, as declared in IONEX grid definitions.
/// Starts from `start` ranging to `end` (included), with given spacing.
/// Values are kept as written: latitude spaces are usually
/// declared north to south with negative spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linspace {
    /// start coordinates
    pub start: f64,
    /// end coordinates
    pub end: f64,
    /// spacing (increment value)
    pub spacing: f64,
}

impl Linspace {
    /// Builds a new Linear space
    pub fn new(start: f64, end: f64, spacing: f64) -> Self {
        Self {
            start,
            end,
            spacing,
        }
    }
    /// Returns absolute span, in degrees
    pub fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }
    /// Returns length, in terms of data points (both ends included)
    pub fn length(&self) -> usize {
        if self.spacing == 0.0 {
            1
        } else {
            (self.span() / self.spacing.abs()).round() as usize + 1
        }
    }
    /// Returns true if self is a single point space
    pub fn is_single_point(&self) -> bool {
        self.end == self.start
    }
    /// Returns lowest value
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }
    /// Returns highest value
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }
}

impl From<(f64, f64, f64)> for Linspace {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self {
            start: tuple.0,
            end: tuple.1,
            spacing: tuple.2,
        }
    }
}
