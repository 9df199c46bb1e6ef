use log::*;

use crate::canvas::{Cell, Grid, BORDER_MARKER};
use crate::geometry::Point;

/// Neighbors visited from each painted cell: left, right, up, down.
const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flood fills the region of `grid` that is 4-connected to `seed`, painting it with `filler`.
///
/// The fill stops at cells that already hold `filler`, at border markers, and never touches the
/// outermost ring of the grid. A seed outside the interior leaves the grid untouched.
pub fn fill_grid(seed: Point, grid: &mut Grid, filler: char) {
    let (width, height) = (i32::from(grid.size.width), i32::from(grid.size.height));

    // Pending cells are pushed in reverse so that they are popped left, right, up, down.
    let mut pending = vec![seed];
    let mut painted = 0usize;

    while let Some(point) = pending.pop() {
        if point.x < 1 || point.y < 1 || point.x >= width - 1 || point.y >= height - 1 {
            continue;
        }

        let cell = &mut grid[point];

        if cell.c == filler || cell.c == BORDER_MARKER {
            continue;
        }

        *cell = Cell::from(filler);
        painted += 1;

        pending.extend(
            NEIGHBORS
                .iter()
                .rev()
                .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy)),
        );
    }

    debug!(
        "filled {} cells with {:?} starting at {:?}",
        painted, filler, seed
    );
}
