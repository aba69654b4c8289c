//! Failure modes for fern construction and rendering.  Numeric
//! conversion errors from the dynamically-typed ancestors of this
//! program do not exist here; the type system rules them out.  What
//! remains is configuration validation and the output sink.

use failure::Fail;
use std::io;

/// Everything that can go wrong while building or rendering a fern.
#[derive(Debug, Fail)]
pub enum FernError {
    /// The requested pixel grid has a zero dimension.
    #[fail(display = "the pixel grid {}x{} has no area", width, height)]
    EmptyPlane {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The growth factor must be a finite number between 0 and 1.
    #[fail(display = "growth factor {} is not between 0 and 1", _0)]
    BadGrowthFactor(f64),

    /// Writing to the output sink failed.  The partially-written
    /// output is left as-is; cleanup belongs to the caller.
    #[fail(display = "could not write to the output sink: {}", _0)]
    SinkWrite(#[cause] io::Error),
}

impl From<io::Error> for FernError {
    fn from(err: io::Error) -> FernError {
        FernError::SinkWrite(err)
    }
}
