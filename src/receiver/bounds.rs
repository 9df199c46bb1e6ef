//! Whether points and lines fall inside the drawable interior of the canvas.
//!
//! The outermost ring of cells holds the frame, so a point is on the canvas only if it is
//! strictly inside it: `0 < x < width - 1` and `0 < y < height - 1`.

use log::*;

use crate::canvas::CanvasStore;
use crate::error::{ReceiverError, Result};
use crate::geometry::{Line, Point};

use super::Receiver;

impl<S: CanvasStore> Receiver<S> {
    /// Returns whether `point` lies in the interior of the current canvas.
    ///
    /// Returns `false` if there is no canvas.
    pub fn is_point_on_canvas(&self, point: Point) -> Result<bool> {
        let canvas = self.store.load().map_err(|e| {
            error!("could not load canvas: {}", e);
            ReceiverError::PointStatus {
                source: Box::new(e),
            }
        })?;

        let size = match canvas {
            Some(canvas) => canvas.size(),
            None => return Ok(false),
        };

        let (width, height) = (i32::from(size.width), i32::from(size.height));

        Ok(point.x > 0 && point.x < width - 1 && point.y > 0 && point.y < height - 1)
    }

    /// Returns whether both endpoints of `line` lie in the interior of the current canvas.
    ///
    /// The direction of the line is not checked.
    pub fn is_line_on_canvas(&self, line: &Line) -> Result<bool> {
        let canvas = self.store.load().map_err(|e| {
            error!("could not load canvas: {}", e);
            ReceiverError::LineStatus {
                source: Box::new(e),
            }
        })?;

        if canvas.is_none() {
            return Ok(false);
        }

        Ok(self.is_point_on_canvas(line.from)? && self.is_point_on_canvas(line.to)?)
    }
}
