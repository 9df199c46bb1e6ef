//! The character grid being drawn on.

use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Write};
use std::ops::{Index, IndexMut};

use crate::geometry::{Point, Size};

pub mod store;

pub use store::{CanvasStore, MemoryStore};

/// The character that marks a drawn line. Fills never cross it.
pub const BORDER_MARKER: char = 'x';

const FRAME_HORIZONTAL: char = '-';
const FRAME_VERTICAL: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub c: char,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { c: ' ' }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Cell { c }
    }
}

/// A width × height grid of single-character cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    /// Returns a grid with every cell empty.
    pub fn new(size: Size) -> Self {
        Grid {
            size,
            cells: vec![Cell::default(); usize::from(size.width) * usize::from(size.height)],
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        (0..usize::from(self.size.height)).map(move |row| {
            let width = usize::from(self.size.width);
            let row_start = row * width;
            self.cells[row_start..row_start + width].iter()
        })
    }

    /// Returns the cell at a point, or `None` if the point lies outside the grid.
    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.try_idx(point).map(|idx| &self.cells[idx])
    }

    /// Writes `marker` into every cell of a rasterized path.
    ///
    /// # Panics
    ///
    /// Panics if any point of the path lies outside the grid.
    pub fn draw(&mut self, path: &[Point], marker: char) {
        for &point in path {
            self[point] = Cell::from(marker);
        }
    }

    fn try_idx(&self, point: Point) -> Option<usize> {
        let col = u16::try_from(point.x).ok()?;
        let row = u16::try_from(point.y).ok()?;

        if col < self.size.width && row < self.size.height {
            Some(usize::from(row) * usize::from(self.size.width) + usize::from(col))
        } else {
            None
        }
    }

    /// Returns the index in the underlying storage that corresponds to the given point.
    ///
    /// # Panics
    ///
    /// Panics if the point is out of bounds.
    fn idx(&self, point: Point) -> usize {
        match self.try_idx(point) {
            Some(idx) => idx,
            None => panic!(
                "grid is {}x{} but the point is ({}, {})",
                self.size.width, self.size.height, point.x, point.y
            ),
        }
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    fn index(&self, point: Point) -> &Self::Output {
        &self.cells[self.idx(point)]
    }
}

impl IndexMut<Point> for Grid {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        let idx = self.idx(point);
        &mut self.cells[idx]
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                f.write_char(cell.c)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// A grid whose outermost ring of cells holds the frame. Only the interior is drawn on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    grid: Grid,
}

impl Canvas {
    /// Creates an empty canvas with the frame drawn.
    ///
    /// # Panics
    ///
    /// Panics if the width or height is zero.
    pub fn new(size: Size) -> Self {
        assert!(
            size.width >= 1 && size.height >= 1,
            "canvas must be at least 1x1, got {}x{}",
            size.width,
            size.height
        );

        let mut grid = Grid::new(size);
        let (right, bottom) = (i32::from(size.width) - 1, i32::from(size.height) - 1);

        for y in 0..=bottom {
            grid[Point::new(0, y)] = Cell::from(FRAME_VERTICAL);
            grid[Point::new(right, y)] = Cell::from(FRAME_VERTICAL);
        }

        for x in 0..=right {
            grid[Point::new(x, 0)] = Cell::from(FRAME_HORIZONTAL);
            grid[Point::new(x, bottom)] = Cell::from(FRAME_HORIZONTAL);
        }

        Canvas { grid }
    }

    pub fn size(&self) -> Size {
        self.grid.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.grid)
    }
}
