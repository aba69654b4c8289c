//! Contains the FernPlane struct, which describes the relationship
//! between the continuous plane the fern lives in and the integral
//! pixel grid the image is drawn on.  The chaotic walk hands it
//! points; it hands back offsets into a row-major density buffer.

use crate::error::FernError;

// Viewport framing for the fern, as fractions of the grid size.
// These ratios were chosen by eye to center the fern in the image and
// must be reproduced exactly; nudging them crops or squashes the
// plant.  The y scale is negative because pixel rows grow downward
// while the fern grows upward.
const X_SCALE_RATIO: f64 = 0.195;
const Y_SCALE_RATIO: f64 = -0.090;
const X_SHIFT_RATIO: f64 = 0.450;
const Y_SHIFT_RATIO: f64 = 1.000;

/// Maps points in the fern's continuous coordinate space onto a
/// width-by-height pixel grid.  Built once and never mutated.
#[derive(Clone, Debug)]
pub struct FernPlane {
    /// The number of pixels in the x axis.
    pub width: usize,
    /// The number of pixels in the y axis.
    pub height: usize,
    x_scale: f64,
    y_scale: f64,
    x_shift: f64,
    y_shift: f64,
}

impl FernPlane {
    /// Constructor.  Derives the scale and shift factors from the
    /// grid dimensions.  A grid with no area is rejected up front so
    /// rendering can fail before any output is written.
    pub fn new(width: usize, height: usize) -> Result<FernPlane, FernError> {
        if width == 0 || height == 0 {
            return Err(FernError::EmptyPlane { width, height });
        }

        Ok(FernPlane {
            width,
            height,
            x_scale: X_SCALE_RATIO * (width as f64),
            y_scale: Y_SCALE_RATIO * (height as f64),
            x_shift: X_SHIFT_RATIO * (width as f64),
            y_shift: Y_SHIFT_RATIO * (height as f64),
        })
    }

    /// The total number of cells in the grid.  Used to size the
    /// density buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True if the grid has no cells.  Never true for a constructed
    /// plane, but the convention comes with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a point to its raw linear index, truncating toward zero.
    /// No bounds are checked: the chaotic walk transiently leaves the
    /// visible window, so the result may be negative or past the end
    /// of the grid.  Callers must validate before indexing.
    pub fn point_to_index(&self, x: f64, y: f64) -> i64 {
        let xpx = self.x_shift + self.x_scale * x;
        let ypx = self.y_shift + self.y_scale * y;
        (xpx as i64) + (ypx as i64) * (self.width as i64)
    }

    /// The bounds-checked form of `point_to_index`: `Some(offset)`
    /// when the index lands inside the grid, `None` when the walk has
    /// wandered out of frame and the visit should simply be dropped.
    pub fn point_to_offset(&self, x: f64, y: f64) -> Option<usize> {
        let index = self.point_to_index(x, y);
        if index >= 0 && (index as usize) < self.len() {
            Some(index as usize)
        } else {
            None
        }
    }
}
