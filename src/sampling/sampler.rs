//! Function sampler.
//!
//! [`FunctionSampler`] owns a sorted [`PointSet`], an argument vector and a
//! shared [`MathFunction`]. Every function evaluation goes through
//! [`FunctionSampler::calculate_point`], which snaps near-zero outputs to `0`
//! and replaces non-finite outputs with `1 / epsilon`, so no infinity or NaN
//! produced by the function ever lands in the point set.
//!
//! # Construction
//! [`FunctionSampler::new`] takes a [`SamplerCfg`]:
//! ┌ epsilon  ← parameter file `epsilon` entry, else [`DEFAULT_EPSILON`]
//! ├ points   ← points file, else explicit points, else empty; then sorted
//! ├ function given
//! │   ├ arguments stored (if given)
//! │   ├ densified      ([`FunctionSampler::expand_points_area`])
//! │   └ gaps filled    ([`FunctionSampler::calculate_null_values`])
//! ├ no function, no points
//! │   ├ arguments stored (if given)
//! │   └ sentinel function installed ([`uninitialized`])
//! └ no function, points given
//!     └ function left unset; evaluations fail with
//!       [`SamplerError::UnconfiguredFunction`]

use std::fmt;
use std::path::Path;
use crate::sampling::config::{validate_epsilon, SamplerCfg, DEFAULT_EPSILON};
use crate::sampling::errors::{ConfigError, IndexError, PointsIoError, SamplerError};
use crate::sampling::function::{uninitialized, MathFunction, SampledFunction};
use crate::sampling::params;
use crate::sampling::point::Point;
use crate::sampling::point_set::PointSet;
use crate::sampling::points_io::{read_points, write_points};
use crate::sampling::report::DensificationReport;


/// Sampled one-dimensional function.
///
/// # Cloning
/// A clone deep-copies the point set and the argument vector and shares the
/// function handle. Mutating either copy never affects the other.
#[derive(Clone)]
pub struct FunctionSampler {
    epsilon:   f64,
    arguments: Vec<f64>,
    points:    PointSet,
    function:  Option<MathFunction>,
}

impl FunctionSampler {
    /// Builds a sampler from `cfg`. See the module docs for the branching.
    ///
    /// # Errors
    /// - [`SamplerError::Config`]   : parameter file unreadable, `epsilon` missing or invalid
    /// - [`SamplerError::PointsIo`] : points file unreadable or malformed
    ///
    /// No partially built sampler is returned on failure.
    pub fn new(cfg: SamplerCfg) -> Result<Self, SamplerError> {
        let SamplerCfg { parameter_file, points_file, points, arguments, function } = cfg;

        let epsilon = match parameter_file.as_deref() {
            Some(path) => params::load_epsilon(path)?,
            None       => DEFAULT_EPSILON,
        };

        let mut set = match points_file.as_deref() {
            Some(path) => {
                let mut set = PointSet::new();
                read_points(path, &mut set)?;
                set
            }
            None => points.unwrap_or_default(),
        };
        set.sort_points();

        let mut sampler = Self {
            epsilon,
            arguments: Vec::new(),
            points: set,
            function: None,
        };

        match function {
            Some(function) => {
                if let Some(arguments) = arguments {
                    sampler.arguments = arguments;
                }
                sampler.function = Some(function);

                let report = sampler.expand_points_area()?;
                log::debug!(
                    "densified in {} passes, {} points", report.passes, report.n_points
                );
                if sampler.points.has_undefined() {
                    let filled = sampler.calculate_null_values()?;
                    log::debug!("filled {filled} undefined points");
                }
            }
            None if sampler.points.is_empty() => {
                if let Some(arguments) = arguments {
                    sampler.arguments = arguments;
                }
                sampler.function = Some(uninitialized());
                log::debug!("no points and no function, sentinel function installed");
            }
            None => {
                log::debug!(
                    "{} points without function, function left unset", sampler.points.len()
                );
            }
        }

        Ok(sampler)
    }

    // getters
    #[inline] pub fn epsilon(&self) -> f64 { self.epsilon }
    #[inline] pub fn arguments(&self) -> &[f64] { &self.arguments }
    #[inline] pub fn points(&self) -> &PointSet { &self.points }
    #[inline] pub fn math_function(&self) -> Option<&MathFunction> { self.function.as_ref() }
    #[inline] pub fn has_function(&self) -> bool { self.function.is_some() }

    pub fn argument(&self, index: usize) -> Result<f64, IndexError> {
        self.arguments
            .get(index)
            .copied()
            .ok_or(IndexError::Argument { index, len: self.arguments.len() })
    }

    pub fn get_point(&self, index: usize) -> Result<Point, IndexError> {
        self.points.get_point(index)
    }

    // setters
    pub fn set_epsilon(&mut self, v: f64) -> Result<(), ConfigError> {
        self.epsilon = validate_epsilon(v)?;
        Ok(())
    }

    /// Replaces epsilon with the `epsilon` entry of a parameter file.
    pub fn load_epsilon<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.epsilon = params::load_epsilon(path.as_ref())?;
        Ok(())
    }

    pub fn set_arguments(&mut self, arguments: Vec<f64>) { self.arguments = arguments; }
    pub fn set_points(&mut self, points: PointSet) { self.points = points; }
    pub fn set_math_function(&mut self, function: MathFunction) { self.function = Some(function); }

    pub fn set_argument(&mut self, index: usize, v: f64) -> Result<(), IndexError> {
        let len = self.arguments.len();
        let slot = self.arguments
            .get_mut(index)
            .ok_or(IndexError::Argument { index, len })?;
        *slot = v;
        Ok(())
    }

    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), IndexError> {
        self.points.set_point(index, point)
    }

    // point-set forwarding
    pub fn add_point(&mut self, point: Point) { self.points.add_point(point); }
    pub fn sort_points(&mut self) { self.points.sort_points(); }

    pub fn add_points<I>(&mut self, points: I)
    where I: IntoIterator<Item = Point> {
        self.points.add_points(points);
    }

    pub fn is_any_null_values_in_points(&self) -> bool {
        self.points.has_undefined()
    }

    /// Evaluates the function at `x`.
    ///
    /// Writes `x` into argument slot 0 (created if the vector is empty), calls
    /// the function once and post-processes its `y`:
    /// - `|y| < epsilon`      → `0`
    /// - `y` infinite or NaN  → `1 / epsilon`
    /// - otherwise            → `y`
    ///
    /// The returned point always carries the requested `x`.
    ///
    /// # Errors
    /// [`SamplerError::UnconfiguredFunction`] if no function is set.
    pub fn calculate_point(&mut self, x: f64) -> Result<Point, SamplerError> {
        let function = self.function.as_ref().ok_or(SamplerError::UnconfiguredFunction)?;

        match self.arguments.first_mut() {
            Some(slot) => *slot = x,
            None       => self.arguments.push(x),
        }

        let y = function.evaluate(&self.arguments).y();
        Ok(Point::new(x, self.clamp(x, y)))
    }

    fn clamp(&self, x: f64, y: f64) -> f64 {
        if y.abs() < self.epsilon {
            0.0
        } else if y.is_infinite() || y.is_nan() {
            log::warn!("non-finite value {y} at x={x} clamped to {}", 1.0 / self.epsilon);
            1.0 / self.epsilon
        } else {
            y
        }
    }

    /// Forward-difference derivative at `point`, step `epsilon`.
    ///
    /// `(f(x + epsilon) - point.y) / epsilon`, with `f` evaluated through
    /// [`FunctionSampler::calculate_point`]. A clamped neighbour yields a huge,
    /// meaningless slope; callers detect that by magnitude.
    pub fn differential(&mut self, point: Point) -> Result<f64, SamplerError> {
        let next = self.calculate_point(point.x() + self.epsilon)?;
        Ok((next.y() - point.y()) / self.epsilon)
    }

    /// `(x, dy/dx)` for every point of the set.
    pub fn differentials(&mut self) -> Result<Vec<Point>, SamplerError> {
        let points = self.points.as_slice().to_vec();
        let mut out = Vec::with_capacity(points.len());
        for point in points {
            out.push(Point::new(point.x(), self.differential(point)?));
        }
        Ok(out)
    }

    /// Half the distance between two borders.
    #[inline]
    pub fn calculate_step(left: f64, right: f64) -> f64 {
        (right - left) / 2.0
    }

    /// Inserts midpoints until the point count reaches the x-span.
    ///
    /// The borders are taken once from the first and last points. While
    /// `len < right - left`, every adjacent pair of the current set gets its
    /// midpoint evaluated, and the whole batch is inserted with
    /// [`PointSet::add_points`]. Each pass roughly doubles the count.
    ///
    /// Returns immediately when the set has fewer than two points, the span is
    /// not finite, or the set is already dense enough.
    ///
    /// # Errors
    /// [`SamplerError::UnconfiguredFunction`] if a pass is needed but no
    /// function is set. Passes completed before the failure are kept.
    pub fn expand_points_area(&mut self) -> Result<DensificationReport, SamplerError> {
        let n_points = self.points.len();
        let span = match self.points.span() {
            Some(span) if span.is_finite() => span,
            _ => return Ok(DensificationReport::unchanged(n_points)),
        };

        let mut report = DensificationReport::unchanged(n_points);
        while (self.points.len() as f64) < span {
            let midpoints: Vec<f64> = self.points
                .as_slice()
                .windows(2)
                .map(|w| w[0].x() + Self::calculate_step(w[0].x(), w[1].x()))
                .collect();

            let mut added = Vec::with_capacity(midpoints.len());
            for x in midpoints {
                added.push(self.calculate_point(x)?);
            }

            report.passes += 1;
            report.inserted += added.len();
            self.points.add_points(added);
            log::trace!("pass {}: {} points, span {span}", report.passes, self.points.len());
        }
        report.n_points = self.points.len();

        Ok(report)
    }

    /// Recomputes every point whose `y` is undefined.
    ///
    /// Defined points are left untouched. Returns the number of points filled.
    ///
    /// # Errors
    /// [`SamplerError::UnconfiguredFunction`] if an undefined point exists and
    /// no function is set.
    pub fn calculate_null_values(&mut self) -> Result<usize, SamplerError> {
        let pending: Vec<(usize, f64)> = self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_undefined())
            .map(|(i, p)| (i, p.x()))
            .collect();

        for &(index, x) in &pending {
            let y = self.calculate_point(x)?.y();
            self.points.set_point(index, Point::new(x, y))?;
        }

        Ok(pending.len())
    }

    /// Appends the points of a points file; order is not restored.
    pub fn read_points_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PointsIoError> {
        read_points(path.as_ref(), &mut self.points)
    }

    pub fn write_points_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PointsIoError> {
        write_points(path.as_ref(), self.points.as_slice())
    }
}

impl Default for FunctionSampler {
    /// Empty sampler with the sentinel function, same as `new(SamplerCfg::new())`.
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            arguments: Vec::new(),
            points: PointSet::new(),
            function: Some(uninitialized()),
        }
    }
}

impl fmt::Debug for FunctionSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSampler")
            .field("epsilon", &self.epsilon)
            .field("arguments", &self.arguments)
            .field("points", &self.points)
            .field("function", &self.function.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
