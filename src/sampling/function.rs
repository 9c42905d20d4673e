//! Function abstraction sampled by [`crate::sampling::FunctionSampler`].
//!
//! Any type implementing [`SampledFunction`] can be sampled. Closures of type
//! `Fn(&[f64]) -> Point` implement it automatically. The argument slice holds
//! the free variable at index 0 and fixed parameters after it.
//!
//! Implementations must be pure: the same arguments always give the same point.
//!
//! Provided variants
//! - [`scalar`]        : adapts a plain `Fn(f64) -> f64`
//! - [`uninitialized`] : sentinel returning `(NaN, NaN)` for every input
//! - [`LookupTable`]   : piecewise-linear interpolation over a sample table

use std::cmp::Ordering;
use std::sync::Arc;
use crate::sampling::point::Point;


pub trait SampledFunction: Send + Sync {
    fn evaluate(&self, args: &[f64]) -> Point;
}

impl<F> SampledFunction for F
where F: Fn(&[f64]) -> Point + Send + Sync {
    #[inline]
    fn evaluate(&self, args: &[f64]) -> Point {
        self(args)
    }
}

/// Shared handle to a sampled function.
pub type MathFunction = Arc<dyn SampledFunction>;


/// Wraps `f(x)` as a function of the free variable `args[0]`.
///
/// An empty argument slice evaluates to an undefined point at `x = NaN`.
pub fn scalar<F>(f: F) -> MathFunction
where F: Fn(f64) -> f64 + Send + Sync + 'static {
    Arc::new(move |args: &[f64]| match args.first() {
        Some(&x) => Point::new(x, f(x)),
        None     => Point::undefined(f64::NAN),
    })
}

/// Sentinel installed when a sampler is built with neither points nor a function.
pub fn uninitialized() -> MathFunction {
    Arc::new(|_: &[f64]| Point::new(f64::NAN, f64::NAN))
}


/// Piecewise-linear function over a table of samples.
///
/// Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines a line
/// segment. Queries outside `[x[0], x[n-1]]` yield an undefined `y`.
/// Undefined samples are dropped when the table is built.
#[derive(Debug, Clone)]
pub struct LookupTable {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LookupTable {
    pub fn from_points<I>(points: I) -> Self
    where I: IntoIterator<Item = Point> {
        let mut samples: Vec<Point> = points
            .into_iter()
            .filter(|p| !p.is_undefined() && p.x().is_finite())
            .collect();
        samples.sort_by(|a, b| a.x().total_cmp(&b.x()));

        let x = samples.iter().map(Point::x).collect();
        let y = samples.iter().map(Point::y).collect();
        Self { x, y }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Interpolated value at `xq`, NaN outside the table.
    pub fn value(&self, xq: f64) -> f64 {
        let n = self.x.len();
        if n == 0 || !(xq >= self.x[0] && xq <= self.x[n - 1]) {
            return f64::NAN;
        }

        match self.x.binary_search_by(
            |xi| xi.partial_cmp(&xq).unwrap_or(Ordering::Less)
        ) {
            Ok(idx)  => self.y[idx],
            Err(idx) => {
                // x[idx - 1] < xq < x[idx]
                let i = idx - 1;
                lerp(self.x[i], self.x[i + 1], self.y[i], self.y[i + 1], xq)
            }
        }
    }
}

impl SampledFunction for LookupTable {
    fn evaluate(&self, args: &[f64]) -> Point {
        match args.first() {
            Some(&x) => Point::new(x, self.value(x)),
            None     => Point::undefined(f64::NAN),
        }
    }
}

#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}
