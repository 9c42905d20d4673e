//! Points-file reader and writer.
//!
//! One point per line:
//! - `x`   : sample with undefined `y`
//! - `x y` : defined sample
//!
//! Tokens are separated by any amount of whitespace. Lines with another number
//! of tokens (including blank lines) are skipped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use crate::sampling::errors::PointsIoError;
use crate::sampling::point::Point;
use crate::sampling::point_set::PointSet;


/// Appends every point of the file at `path` to `points`, in file order.
///
/// Points parsed before a failing line stay in `points`.
///
/// # Errors
/// - [`PointsIoError::Read`]  : file missing or unreadable
/// - [`PointsIoError::Parse`] : a one- or two-token line holds a non-number
pub fn read_points(path: &Path, points: &mut PointSet) -> Result<usize, PointsIoError> {
    let text = fs::read_to_string(path)
        .map_err(|source| PointsIoError::Read { path: path.to_path_buf(), source })?;

    let mut added = 0;
    for (idx, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parse = |token: &str| -> Result<f64, PointsIoError> {
            token.parse::<f64>().map_err(|_| PointsIoError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                token: token.to_owned(),
            })
        };

        let point = match tokens.as_slice() {
            [x]    => Point::undefined(parse(*x)?),
            [x, y] => Point::new(parse(*x)?, parse(*y)?),
            _      => continue,
        };
        points.add_point(point);
        added += 1;
    }

    log::debug!("read {added} points from {path:?}");
    Ok(added)
}

/// Writes `points` to `path`, one canonical point per line.
///
/// An existing file is truncated; a missing one is created.
///
/// # Errors
/// [`PointsIoError::Write`] when the file can be neither created nor written.
pub fn write_points(path: &Path, points: &[Point]) -> Result<(), PointsIoError> {
    let to_err = |source| PointsIoError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(to_err)?;
    let mut writer = BufWriter::new(file);
    for point in points {
        writeln!(writer, "{point}").map_err(to_err)?;
    }
    writer.flush().map_err(to_err)?;

    log::debug!("wrote {} points to {path:?}", points.len());
    Ok(())
}
