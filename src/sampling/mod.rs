// common helpers
pub mod config;
pub mod errors;
pub mod params;
pub mod report;

// samples
pub mod point;
pub mod point_set;
pub mod points_io;

// functions
pub mod function;
pub mod sampler;

pub use config::{SamplerCfg, DEFAULT_EPSILON};
pub use errors::{ConfigError, IndexError, PointsIoError, SamplerError};
pub use function::{LookupTable, MathFunction, SampledFunction};
pub use point::Point;
pub use point_set::PointSet;
pub use report::DensificationReport;
pub use sampler::FunctionSampler;
