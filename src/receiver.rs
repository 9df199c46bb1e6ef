//! Drawing requests against the stored canvas.

use log::*;

use crate::canvas::{Canvas, CanvasStore, BORDER_MARKER};
use crate::error::{ReceiverError, Result};
use crate::geometry::{Line, Point};

mod bounds;
mod fill;
mod path;

pub use fill::fill_grid;
pub use path::compute_path;

/// Carries out drawing requests against the canvas held by a store.
pub struct Receiver<S> {
    store: S,
}

impl<S: CanvasStore> Receiver<S> {
    pub fn new(store: S) -> Self {
        Receiver { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Draws a line of border markers onto the stored canvas.
    ///
    /// The endpoints may be given in either order. Returns `false` without touching the canvas if
    /// the line does not fit inside the canvas interior.
    pub fn draw_line(&mut self, line: Line) -> Result<bool> {
        if !self.is_line_on_canvas(&line)? {
            warn!("line {:?} is not on the canvas", line);
            return Ok(false);
        }

        let path = compute_path(&line.normalized())?;

        let mut canvas = match self.load()? {
            Some(canvas) => canvas,
            None => return Ok(false),
        };
        canvas.grid_mut().draw(&path, BORDER_MARKER);
        self.save(canvas)?;

        Ok(true)
    }

    /// Flood fills the stored canvas from `seed`.
    ///
    /// Returns `false` if there is no canvas.
    pub fn fill(&mut self, seed: Point, filler: char) -> Result<bool> {
        let mut canvas = match self.load()? {
            Some(canvas) => canvas,
            None => {
                warn!("no canvas to fill");
                return Ok(false);
            }
        };

        fill_grid(seed, canvas.grid_mut(), filler);
        self.save(canvas)?;

        Ok(true)
    }

    fn load(&self) -> Result<Option<Canvas>> {
        self.store.load().map_err(|e| {
            error!("could not load canvas: {}", e);
            ReceiverError::Store {
                source: Box::new(e),
            }
        })
    }

    fn save(&mut self, canvas: Canvas) -> Result<()> {
        self.store.save(canvas).map_err(|e| {
            error!("could not save canvas: {}", e);
            ReceiverError::Store {
                source: Box::new(e),
            }
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell as StdCell;

    use assert_matches::assert_matches;
    use indoc::indoc;
    use thiserror::Error;

    use crate::canvas::{Canvas, CanvasStore, MemoryStore};
    use crate::error::ReceiverError;
    use crate::geometry::{Line, Point, Size};

    use super::Receiver;

    #[derive(Debug, Error)]
    #[error("disk on fire")]
    pub struct DiskOnFire;

    /// A store that succeeds for a fixed number of loads, then fails.
    pub struct FlakyStore {
        pub canvas: Canvas,
        pub loads_left: StdCell<usize>,
    }

    impl FlakyStore {
        pub fn failing(canvas: Canvas) -> Self {
            FlakyStore::failing_after(canvas, 0)
        }

        pub fn failing_after(canvas: Canvas, loads: usize) -> Self {
            FlakyStore {
                canvas,
                loads_left: StdCell::new(loads),
            }
        }
    }

    impl CanvasStore for FlakyStore {
        type Error = DiskOnFire;

        fn load(&self) -> Result<Option<Canvas>, Self::Error> {
            match self.loads_left.get() {
                0 => Err(DiskOnFire),
                n => {
                    self.loads_left.set(n - 1);
                    Ok(Some(self.canvas.clone()))
                }
            }
        }

        fn save(&mut self, _: Canvas) -> Result<(), Self::Error> {
            Err(DiskOnFire)
        }
    }

    fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    fn rendered(receiver: &Receiver<MemoryStore>) -> String {
        receiver.store().load().unwrap().unwrap().to_string()
    }

    #[test]
    fn draw_and_fill() {
        let mut receiver = Receiver::new(MemoryStore::new(Canvas::new(Size::new(10, 6))));

        assert!(receiver.draw_line(line(1, 1, 5, 1)).unwrap());
        assert!(receiver.draw_line(line(5, 4, 5, 1)).unwrap());
        assert!(receiver.draw_line(line(5, 4, 1, 4)).unwrap());
        assert!(receiver.draw_line(line(1, 1, 1, 4)).unwrap());
        assert!(receiver.fill(Point::new(3, 2), 'o').unwrap());

        assert_eq!(
            rendered(&receiver),
            indoc!(
                "
                ----------
                |xxxxx   |
                |xooox   |
                |xooox   |
                |xxxxx   |
                ----------
                "
            )
        );
    }

    #[test]
    fn draw_off_canvas_line() {
        let mut receiver = Receiver::new(MemoryStore::new(Canvas::new(Size::new(10, 5))));

        assert!(!receiver.draw_line(line(0, 1, 5, 1)).unwrap());
        assert_eq!(rendered(&receiver), Canvas::new(Size::new(10, 5)).to_string());
    }

    #[test]
    fn draw_diagonal_line() {
        let mut receiver = Receiver::new(MemoryStore::new(Canvas::new(Size::new(10, 5))));

        assert_matches!(
            receiver.draw_line(line(1, 1, 3, 3)),
            Err(ReceiverError::InvalidLine(_))
        );
    }

    #[test]
    fn without_canvas() {
        let mut receiver = Receiver::new(MemoryStore::empty());

        assert!(!receiver.draw_line(line(1, 1, 5, 1)).unwrap());
        assert!(!receiver.fill(Point::new(1, 1), 'o').unwrap());
        assert_eq!(receiver.store().load().unwrap(), None);
    }

    #[test]
    fn fill_store_failure() {
        let mut receiver = Receiver::new(FlakyStore::failing(Canvas::new(Size::new(5, 5))));

        assert_matches!(
            receiver.fill(Point::new(2, 2), 'o'),
            Err(ReceiverError::Store { .. })
        );
    }

    #[test]
    fn save_failure() {
        let mut receiver = Receiver::new(FlakyStore::failing_after(
            Canvas::new(Size::new(5, 5)),
            1,
        ));

        let err = receiver.fill(Point::new(2, 2), 'o').unwrap_err();

        assert_matches!(err, ReceiverError::Store { .. });
        assert_eq!(
            std::error::Error::source(&err).map(|e| e.to_string()),
            Some(String::from("disk on fire"))
        );
    }
}
