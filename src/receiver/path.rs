use std::iter;

use log::*;

use crate::error::{ReceiverError, Result};
use crate::geometry::{Direction, Line, Point};

/// Returns the cells covered by a horizontal or vertical line, from `line.from` to `line.to`.
///
/// The endpoints must be ordered from the lower coordinate to the higher one on the varying axis
/// (see [`Line::normalized`]). If they are reversed, only `line.to` is returned. The path is not
/// checked against the canvas bounds.
pub fn compute_path(line: &Line) -> Result<Vec<Point>> {
    let (from, to) = (line.from, line.to);

    let path: Vec<Point> = match line.direction() {
        Direction::Horizontal => (from.x..to.x)
            .map(|x| Point::new(x, to.y))
            .chain(iter::once(to))
            .collect(),
        Direction::Vertical => (from.y..to.y)
            .map(|y| Point::new(to.x, y))
            .chain(iter::once(to))
            .collect(),
        Direction::Invalid => return Err(ReceiverError::InvalidLine(*line)),
    };

    debug!(
        "{} line {:?} covers {} cells",
        <&str>::from(line.direction()),
        line,
        path.len()
    );

    Ok(path)
}
