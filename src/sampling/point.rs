//! Sample point value type.
//!
//! A [`Point`] is one `(x, y)` sample. A `y` of NaN marks a sample whose value
//! has not been computed yet; use [`Point::undefined`] and
//! [`Point::is_undefined`] rather than testing NaN directly.
//!
//! The canonical text form (used by the points file and by rendering) is
//! `"{x} {y}"`, or just `"{x}"` for an undefined sample.

use std::fmt;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sample at `x` whose value is still unknown.
    #[inline]
    #[must_use]
    pub const fn undefined(x: f64) -> Self {
        Self { x, y: f64::NAN }
    }

    #[inline] #[must_use] pub fn x(&self) -> f64 { self.x }
    #[inline] #[must_use] pub fn y(&self) -> f64 { self.y }

    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.y.is_nan()
    }

    /// Same `x`, new `y`.
    #[inline]
    #[must_use]
    pub fn with_y(self, y: f64) -> Self {
        Self { x: self.x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "{}", self.x)
        } else {
            write!(f, "{} {}", self.x, self.y)
        }
    }
}
