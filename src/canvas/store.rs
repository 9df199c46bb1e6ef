//! Access to the current canvas.

use std::convert::Infallible;
use std::error::Error;

use super::Canvas;

/// Loads and saves the canvas being drawn on.
///
/// Every call to `load` may fetch fresh state; callers must not assume results are cached.
pub trait CanvasStore {
    type Error: Error + Send + Sync + 'static;

    /// Returns the current canvas, or `None` if no canvas has been created yet.
    fn load(&self) -> Result<Option<Canvas>, Self::Error>;

    fn save(&mut self, canvas: Canvas) -> Result<(), Self::Error>;
}

/// A store that keeps the canvas in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    canvas: Option<Canvas>,
}

impl MemoryStore {
    /// Returns a store with no canvas.
    pub fn empty() -> Self {
        MemoryStore::default()
    }

    pub fn new(canvas: Canvas) -> Self {
        MemoryStore {
            canvas: Some(canvas),
        }
    }
}

impl CanvasStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<Option<Canvas>, Self::Error> {
        Ok(self.canvas.clone())
    }

    fn save(&mut self, canvas: Canvas) -> Result<(), Self::Error> {
        self.canvas = Some(canvas);
        Ok(())
    }
}
