//! Densification report and plain-text rendering of point listings.

use std::fmt::Write;
use crate::sampling::point::Point;


/// Summary of a [`crate::sampling::FunctionSampler::expand_points_area`] run.
///
/// [`DensificationReport`]
/// - `passes`   : number of midpoint passes performed (0 if already dense)
/// - `inserted` : number of midpoints added over all passes
/// - `n_points` : size of the point set afterwards
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DensificationReport {
    pub passes:   usize,
    pub inserted: usize,
    pub n_points: usize,
}

impl DensificationReport {
    pub(crate) fn unchanged(n_points: usize) -> Self {
        Self { passes: 0, inserted: 0, n_points }
    }
}


/// One canonical point per line.
pub fn render_points(points: &[Point]) -> String {
    let mut out = String::new();
    for point in points {
        let _ = writeln!(out, "{point}");
    }
    out
}

/// Header followed by one `x dy/dx` line per point.
///
/// `derivatives` is expected to come from
/// [`crate::sampling::FunctionSampler::differentials`].
pub fn render_differentials(derivatives: &[Point]) -> String {
    let mut out = String::from("x dy/dx\n");
    out.push_str(&render_points(derivatives));
    out
}
