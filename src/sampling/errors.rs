//! Sampling error types.
//!
//! ┌ [`ConfigError`]   : parameter-file and epsilon problems
//! │   ├ unreadable parameter file
//! │   ├ missing or malformed entries
//! │   └ invalid epsilon (non-finite or <= 0)
//! │
//! ├ [`PointsIoError`] : points-file reading/writing
//! │
//! ├ [`IndexError`]    : positional access out of range
//! │   ├ points
//! │   └ arguments
//! │
//! └ [`SamplerError`]  : everything a [`crate::sampling::FunctionSampler`]
//!     operation can return, including [`SamplerError::UnconfiguredFunction`]


use std::path::PathBuf;
use thiserror::Error;


/// Parameter-file and epsilon errors.
///
/// Raised while constructing a sampler or when loading/setting epsilon later.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read parameter file {path:?}: {source}")]
    Unreadable { path: PathBuf, source: std::io::Error },

    #[error("parameter file {path:?} has no `{key}` entry")]
    MissingKey { path: PathBuf, key: String },

    #[error("parameter file {path:?}, line {line}: expected `name = value`")]
    Malformed { path: PathBuf, line: usize },

    #[error("parameter file {path:?}, line {line}: `{value}` is not a number")]
    InvalidValue { path: PathBuf, line: usize, value: String },

    #[error("invalid epsilon: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },
}


/// Points-file errors.
///
/// ┌ Read failures (missing file, permissions)
/// ├ Write failures (path neither existing nor creatable)
/// └ Unparseable numbers on an otherwise well-formed line
#[derive(Debug, Error)]
pub enum PointsIoError {
    #[error("cannot read points file {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot write points file {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("points file {path:?}, line {line}: `{token}` is not a number")]
    Parse { path: PathBuf, line: usize, token: String },
}


/// Positional access outside `[0, len)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("point index {index} out of range for {len} points")]
    Point { index: usize, len: usize },

    #[error("argument index {index} out of range for {len} arguments")]
    Argument { index: usize, len: usize },
}


#[derive(Debug, Error)]
pub enum SamplerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PointsIo(#[from] PointsIoError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("function not configured")]
    UnconfiguredFunction,
}
