//! Sampler construction configuration.
//!
//! [`SamplerCfg`] gathers the optional inputs of
//! [`crate::sampling::FunctionSampler::new`]:
//! - `parameter_file` : text file with an `epsilon` entry
//! - `points_file`    : points file, takes precedence over `points`
//! - `points`         : explicit sample points
//! - `arguments`      : argument vector, slot 0 is the free variable
//! - `function`       : the function to sample
//!
//! Every field starts unset; [`SamplerCfg::new`] with no setters builds an empty
//! sampler with the uninitialised sentinel function.

use std::fmt;
use std::path::{Path, PathBuf};
use crate::sampling::errors::ConfigError;
use crate::sampling::function::MathFunction;
use crate::sampling::point_set::PointSet;


/// Epsilon used when no parameter file is given.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Parameter-file key holding epsilon.
pub const EPSILON_KEY: &str = "epsilon";


#[derive(Clone, Default)]
pub struct SamplerCfg {
    pub(crate) parameter_file: Option<PathBuf>,
    pub(crate) points_file:    Option<PathBuf>,
    pub(crate) points:         Option<PointSet>,
    pub(crate) arguments:      Option<Vec<f64>>,
    pub(crate) function:       Option<MathFunction>,
}

impl SamplerCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_parameter_file<P: AsRef<Path>>(mut self, v: P) -> Self {
        self.parameter_file = Some(v.as_ref().to_path_buf());
        self
    }
    pub fn with_points_file<P: AsRef<Path>>(mut self, v: P) -> Self {
        self.points_file = Some(v.as_ref().to_path_buf());
        self
    }
    pub fn with_points<S: Into<PointSet>>(mut self, v: S) -> Self {
        self.points = Some(v.into());
        self
    }
    pub fn with_arguments(mut self, v: Vec<f64>) -> Self { self.arguments = Some(v); self }
    pub fn with_function(mut self, v: MathFunction) -> Self { self.function = Some(v); self }

    #[inline] pub fn parameter_file(&self) -> Option<&Path> { self.parameter_file.as_deref() }
    #[inline] pub fn points_file(&self) -> Option<&Path> { self.points_file.as_deref() }
    #[inline] pub fn points(&self) -> Option<&PointSet> { self.points.as_ref() }
    #[inline] pub fn arguments(&self) -> Option<&[f64]> { self.arguments.as_deref() }
    #[inline] pub fn has_function(&self) -> bool { self.function.is_some() }
}

impl fmt::Debug for SamplerCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplerCfg")
            .field("parameter_file", &self.parameter_file)
            .field("points_file", &self.points_file)
            .field("points", &self.points)
            .field("arguments", &self.arguments)
            .field("function", &self.function.as_ref().map(|_| "<fn>"))
            .finish()
    }
}


/// Checks that `v` is usable as epsilon.
pub(crate) fn validate_epsilon(v: f64) -> Result<f64, ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::InvalidEpsilon { got: v });
    }
    Ok(v)
}
