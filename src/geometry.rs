//! Points and axis-aligned lines on a canvas.

use std::num::ParseIntError;
use std::str::FromStr;

use euclid::{Point2D, Size2D};
use strum::IntoStaticStr;
use thiserror::Error;

/// Used to group units that deal with the canvas grid.
#[derive(Debug)]
pub struct CanvasSpace;

/// The XY coordinates of a cell on the canvas, starting from (0, 0) at the top left. The
/// X-coordinate is the column, and the Y-coordinate is the row.
///
/// Coordinates are signed so that requests outside the canvas can be represented and rejected.
pub type Point = Point2D<i32, CanvasSpace>;

/// A width and height of a canvas, in cells.
pub type Size = Size2D<u16, CanvasSpace>;

/// The orientation of a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,

    /// Zero-length or diagonal.
    Invalid,
}

/// A directed segment between two points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Line { from, to }
    }

    /// Classifies the line from its endpoints.
    pub fn direction(&self) -> Direction {
        let (from, to) = (self.from, self.to);

        if from.y == to.y && from.x != to.x {
            Direction::Horizontal
        } else if from.x == to.x && from.y != to.y {
            Direction::Vertical
        } else {
            Direction::Invalid
        }
    }

    /// Returns the same line with its endpoints ordered from the lower coordinate to the higher
    /// one on the varying axis.
    ///
    /// Rasterization expects this ordering; it is the caller's job to establish it.
    pub fn normalized(self) -> Self {
        let reversed = match self.direction() {
            Direction::Horizontal => self.from.x > self.to.x,
            Direction::Vertical => self.from.y > self.to.y,
            Direction::Invalid => false,
        };

        if reversed {
            Line::new(self.to, self.from)
        } else {
            self
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} comma-separated values, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] ParseIntError),

    #[error("expected a single fill character, found {0:?}")]
    Filler(String),
}

/// Parses comma-separated coordinates, requiring exactly `expected` of them.
pub(crate) fn parse_coordinates(s: &str, expected: usize) -> Result<Vec<i32>, ParseError> {
    let coordinates = s
        .split(',')
        .map(|part| part.trim().parse())
        .collect::<Result<Vec<i32>, _>>()?;

    if coordinates.len() != expected {
        return Err(ParseError::WrongArity {
            expected,
            found: coordinates.len(),
        });
    }

    Ok(coordinates)
}

/// Parses a line in the form `X1,Y1,X2,Y2`.
impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_coordinates(s, 4)?[..] {
            [x1, y1, x2, y2] => Ok(Line::new(Point::new(x1, y1), Point::new(x2, y2))),
            _ => unreachable!(),
        }
    }
}
